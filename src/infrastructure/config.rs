use crate::application::PredictionSettings;
use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub prediction: PredictionSettings,
    #[serde(default)]
    pub catalog: CatalogSource,
    #[serde(default)]
    pub history: HistorySource,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSource {
    pub path: PathBuf,
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self {
            path: PathBuf::from("config/catalog.toml"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct HistorySource {
    pub path: Option<PathBuf>,
}

/// Load settings from `config/lens` (optional) overlaid with `LENS__*` environment variables.
pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/lens").required(false))
        .add_source(
            config::Environment::with_prefix("LENS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> anyhow::Result<()> {
    settings
        .prediction
        .validate()
        .context("Invalid [prediction] settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> anyhow::Result<Settings> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    #[test]
    fn test_defaults() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings.prediction, PredictionSettings::default());
        assert_eq!(settings.catalog.path, PathBuf::from("config/catalog.toml"));
        assert!(settings.history.path.is_none());
        assert!(validate(&settings).is_ok());
    }

    #[test]
    fn test_overrides() {
        let settings = from_toml(
            r#"
            [prediction]
            bilateral_single_type = false

            [history]
            path = "data/customer.json"
            "#,
        )
        .unwrap();

        assert!(!settings.prediction.bilateral_single_type);
        assert_eq!(settings.prediction.fallback_units_per_day, 1.0);
        assert_eq!(settings.history.path, Some(PathBuf::from("data/customer.json")));
    }

    #[test]
    fn test_rejects_non_positive_fallback() {
        let settings = from_toml("[prediction]\nfallback_units_per_day = 0.0").unwrap();
        assert!(validate(&settings).is_err());
    }
}
