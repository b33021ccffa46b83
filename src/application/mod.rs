// Application layer - Prediction use cases
pub mod lens_prediction;
pub mod simple_prediction;

pub use lens_prediction::LensPrediction;
pub use simple_prediction::{PredictionSettings, SimpleLensPrediction, latest_next_purchase};
