// Prediction trait for lens reorder estimation
use crate::domain::{Catalog, OrderHistory, PredictionError};
use chrono::NaiveDate;

pub trait LensPrediction: Send + Sync {
    /// Predict the date on which the customer runs out of lenses.
    /// `Ok(None)` means no prediction can be made (empty history).
    fn predict_date(
        &self,
        catalog: &Catalog,
        history: &OrderHistory,
    ) -> Result<Option<NaiveDate>, PredictionError>;
}
