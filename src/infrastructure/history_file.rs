// JSON order history loader
use crate::domain::{Order, OrderHistory};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

pub fn load_history(path: &Path) -> Result<OrderHistory> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read order history {}", path.display()))?;
    parse_history(&content).with_context(|| format!("Invalid order history {}", path.display()))
}

/// Parse `{ "YYYY-MM-DD": [[product_id, quantity, power], ...] }`.
pub fn parse_history(content: &str) -> Result<OrderHistory> {
    let raw: BTreeMap<String, Vec<Order>> =
        serde_json::from_str(content).context("Failed to parse order history JSON")?;
    Ok(OrderHistory::parse(raw)?)
}
