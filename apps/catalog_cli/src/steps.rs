//! View steps given on the command line, applied to the fetched catalog in
//! the order they were typed.

use std::{fmt, str::FromStr};

use anyhow::bail;
use catalog_client::{CatalogSource, CatalogStore, PriceRange};
use shared::domain::KNOWN_CATEGORIES;

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    SortName,
    Price(PriceRange),
    Title(String),
    Category(String),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw == "sort-name" {
            return Ok(Self::SortName);
        }

        let Some((key, value)) = raw.split_once('=') else {
            return Err(format!(
                "unknown step '{raw}'; expected sort-name, price=MIN..MAX, title=TEXT or category=LABEL"
            ));
        };

        match key {
            "price" => value
                .parse::<PriceRange>()
                .map(Self::Price)
                .map_err(|err| err.to_string()),
            "title" => Ok(Self::Title(value.to_string())),
            "category" => Ok(Self::Category(value.to_string())),
            other => Err(format!("unknown step '{other}'")),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SortName => write!(f, "sort-name"),
            Self::Price(range) => write!(f, "price={range}"),
            Self::Title(query) => write!(f, "title={query}"),
            Self::Category(label) => write!(f, "category={label}"),
        }
    }
}

pub fn step_help() -> String {
    format!(
        "sort-name | price=MIN..MAX | title=TEXT | category=LABEL (e.g. {})",
        KNOWN_CATEGORIES.join(", ")
    )
}

/// Fetches the catalog into `store`, failing when the fetch was rejected.
pub async fn load_catalog<S: CatalogSource>(store: &CatalogStore<S>) -> anyhow::Result<()> {
    store.fetch().await;
    if let Some(error) = store.snapshot().await.error() {
        bail!("failed to load catalog: {error}");
    }
    Ok(())
}

pub async fn apply_steps<S: CatalogSource>(store: &CatalogStore<S>, steps: &[Step]) {
    for step in steps {
        match step {
            Step::SortName => store.sort_by_name().await,
            Step::Price(range) => {
                store.sort_by_range_price(*range).await;
            }
            Step::Title(query) => {
                store.search_title(query).await;
            }
            Step::Category(label) => {
                store.filter_by_category(label).await;
            }
        }
        tracing::debug!(%step, "applied view step");
    }
}

#[cfg(test)]
#[path = "tests/steps_tests.rs"]
mod tests;
