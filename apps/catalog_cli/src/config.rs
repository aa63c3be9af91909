use std::{fs, path::Path};

use anyhow::{bail, Context};
use catalog_client::DEFAULT_CATALOG_URL;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    catalog_url: Option<String>,
}

/// Defaults, then the optional TOML file, then environment variables.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_with_env(path, |key| std::env::var(key).ok())
}

fn load_settings_with_env(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            if let Some(v) = file_cfg.catalog_url {
                settings.catalog_url = v;
            }
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    }

    apply_env_overrides(&mut settings, lookup);
    Ok(settings)
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("CATALOG_URL") {
        settings.catalog_url = v;
    }
    if let Some(v) = lookup("APP__CATALOG_URL") {
        settings.catalog_url = v;
    }
}

pub fn prepare_catalog_url(raw_catalog_url: &str) -> anyhow::Result<String> {
    let raw_catalog_url = raw_catalog_url.trim();
    if raw_catalog_url.is_empty() {
        return Ok(Settings::default().catalog_url);
    }

    let url = Url::parse(raw_catalog_url)
        .with_context(|| format!("invalid catalog url '{raw_catalog_url}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "catalog url '{raw_catalog_url}' must use http or https, got '{}'",
            url.scheme()
        );
    }

    Ok(url.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
