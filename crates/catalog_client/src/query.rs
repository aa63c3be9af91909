//! Predicates and orderings used by the view-state transformations.

use std::{cmp::Ordering, fmt, str::FromStr};

use thiserror::Error;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceRangeError {
    #[error("Please enter both minimum and maximum price values.")]
    Missing,
    #[error("invalid price value '{0}'")]
    NotANumber(String),
    #[error("Prices must be greater than 0.")]
    NotPositive { min: f64, max: f64 },
    #[error("Minimum price cannot be greater than maximum price.")]
    Inverted { min: f64, max: f64 },
}

/// Inclusive price bounds. Both bounds are finite and strictly positive and
/// `min <= max`; a value of this type cannot be built otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Result<Self, PriceRangeError> {
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || max <= 0.0 {
            return Err(PriceRangeError::NotPositive { min, max });
        }
        if min > max {
            return Err(PriceRangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

impl FromStr for PriceRange {
    type Err = PriceRangeError;

    /// Parses `MIN..MAX`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (min, max) = raw.split_once("..").ok_or(PriceRangeError::Missing)?;
        let (min, max) = (min.trim(), max.trim());
        if min.is_empty() || max.is_empty() {
            return Err(PriceRangeError::Missing);
        }
        let parse = |value: &str| {
            value
                .parse::<f64>()
                .map_err(|_| PriceRangeError::NotANumber(value.to_string()))
        };
        Self::new(parse(min)?, parse(max)?)
    }
}

/// Collation class of a character at the primary level.
fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_alphabetic() {
        3
    } else if c.is_numeric() {
        2
    } else {
        1
    }
}

fn primary_keys(title: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(|c| c.to_lowercase().map(move |lower| (char_class(c), lower)))
}

fn secondary_keys(title: &str) -> impl Iterator<Item = char> + '_ {
    title.nfd().flat_map(char::to_lowercase)
}

/// Orders titles the way a user-facing locale comparison does. Accents and
/// case are ignored first; an otherwise-equal pair is split with unaccented
/// ahead of accented, then lowercase ahead of uppercase.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    primary_keys(a)
        .cmp(primary_keys(b))
        .then_with(|| secondary_keys(a).cmp(secondary_keys(b)))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

fn compare_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .map(|(x, y)| x.is_uppercase().cmp(&y.is_uppercase()))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
