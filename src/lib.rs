//! Contact lens reorder prediction.
//!
//! Estimates from a customer's purchase history when they will run out of lenses.
pub mod application;
pub mod domain;
pub mod infrastructure;
