// Prediction errors - caller contract violations
use super::order::LensPower;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("unknown product {0} referenced by an order")]
    UnknownProduct(u32),

    #[error("malformed order date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),

    #[error("order for product {product_id} has non-positive quantity")]
    NonPositiveQuantity { product_id: u32 },

    #[error("purchased units for power {power} overflow")]
    UnitsOverflow { power: LensPower },

    #[error("fallback consumption rate must be positive, got {0}")]
    InvalidFallbackRate(f64),

    #[error("estimated date is out of range ({days} days after {from})")]
    DateOutOfRange { from: chrono::NaiveDate, days: u64 },
}
