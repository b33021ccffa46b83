// Domain layer - Catalog, orders and estimation models
pub mod catalog;
pub mod error;
pub mod estimation;
pub mod order;

pub use catalog::{Catalog, CatalogEntry};
pub use error::PredictionError;
pub use estimation::{Estimation, TypeGroup};
pub use order::{LensPower, Order, OrderHistory};
