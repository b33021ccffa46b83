// TOML product catalog loader
use crate::domain::{Catalog, CatalogEntry};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "product")]
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: u32,
    name: Option<String>,
    duration_days: u32,
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    parse_catalog(&content).with_context(|| format!("Invalid catalog {}", path.display()))
}

pub fn parse_catalog(content: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(content)?;

    let mut catalog = Catalog::new();
    for record in file.products {
        if record.duration_days == 0 {
            anyhow::bail!("product {} has a zero duration", record.id);
        }
        let entry = CatalogEntry {
            name: record.name,
            duration_days: record.duration_days,
        };
        if catalog.insert(record.id, entry).is_some() {
            anyhow::bail!("duplicate product id {}", record.id);
        }
    }

    tracing::debug!("Loaded catalog with {} products", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(
            r#"
            [[product]]
            id = 1
            name = "Biofinity (6 lenses)"
            duration_days = 180

            [[product]]
            id = 3
            duration_days = 30
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.duration_of(1).unwrap(), 180);
        assert_eq!(catalog.get(3).unwrap().name, None);
    }

    #[test]
    fn test_duplicate_id() {
        let result = parse_catalog(
            "[[product]]\nid = 1\nduration_days = 180\n\n[[product]]\nid = 1\nduration_days = 90\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_duration() {
        assert!(parse_catalog("[[product]]\nid = 1\nduration_days = 0\n").is_err());
    }
}
