// Product catalog domain model
use super::error::PredictionError;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: Option<String>,
    pub duration_days: u32,
}

/// Read-only lookup of how many days one unit of each product lasts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: HashMap<u32, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, id: u32, name: Option<String>, duration_days: u32) -> Self {
        self.products.insert(id, CatalogEntry { name, duration_days });
        self
    }

    pub fn insert(&mut self, id: u32, entry: CatalogEntry) -> Option<CatalogEntry> {
        self.products.insert(id, entry)
    }

    pub fn duration_of(&self, product_id: u32) -> Result<u32, PredictionError> {
        self.products
            .get(&product_id)
            .map(|entry| entry.duration_days)
            .ok_or(PredictionError::UnknownProduct(product_id))
    }

    pub fn get(&self, product_id: u32) -> Option<&CatalogEntry> {
        self.products.get(&product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<(u32, u32)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        let products = iter
            .into_iter()
            .map(|(id, duration_days)| {
                (
                    id,
                    CatalogEntry {
                        name: None,
                        duration_days,
                    },
                )
            })
            .collect();
        Self { products }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_lookup() {
        let catalog: Catalog = [(1, 180), (2, 90)].into_iter().collect();
        assert_eq!(catalog.duration_of(1), Ok(180));
        assert_eq!(catalog.duration_of(2), Ok(90));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_unknown_product() {
        let catalog = Catalog::new().with_product(3, Some("Focus Dailies (30)".to_string()), 30);
        assert_eq!(catalog.duration_of(7), Err(PredictionError::UnknownProduct(7)));
        assert_eq!(catalog.get(3).and_then(|e| e.name.as_deref()), Some("Focus Dailies (30)"));
    }
}
