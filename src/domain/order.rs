// Order history domain models
use super::error::PredictionError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque lens-power label used to group orders into independent consumption streams.
/// Numeric labels are normalized to their decimal text so `-3` and `"-3"` group together.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "RawPower")]
pub struct LensPower(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPower {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<RawPower> for LensPower {
    fn from(raw: RawPower) -> Self {
        match raw {
            RawPower::Text(text) => Self(text),
            RawPower::Integer(value) => Self::from(value),
            RawPower::Float(value) => Self::from(value),
        }
    }
}

impl LensPower {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LensPower {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for LensPower {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<i64> for LensPower {
    fn from(label: i64) -> Self {
        Self(label.to_string())
    }
}

impl From<f64> for LensPower {
    fn from(label: f64) -> Self {
        Self(label.to_string())
    }
}

impl fmt::Display for LensPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single line item: `[product_id, quantity, power]` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(u32, u32, LensPower)")]
pub struct Order {
    pub product_id: u32,
    pub quantity: u32,
    pub power: LensPower,
}

impl From<(u32, u32, LensPower)> for Order {
    fn from((product_id, quantity, power): (u32, u32, LensPower)) -> Self {
        Self {
            product_id,
            quantity,
            power,
        }
    }
}

impl Order {
    pub fn new(product_id: u32, quantity: u32, power: impl Into<LensPower>) -> Self {
        Self {
            product_id,
            quantity,
            power: power.into(),
        }
    }

    pub fn validate(&self) -> Result<(), PredictionError> {
        if self.quantity == 0 {
            return Err(PredictionError::NonPositiveQuantity {
                product_id: self.product_id,
            });
        }
        Ok(())
    }
}

/// Purchases keyed by date. Orders placed on the same date keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderHistory {
    by_date: BTreeMap<NaiveDate, Vec<Order>>,
}

impl OrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from ISO `YYYY-MM-DD` keyed entries.
    pub fn parse<I, S>(entries: I) -> Result<Self, PredictionError>
    where
        I: IntoIterator<Item = (S, Vec<Order>)>,
        S: AsRef<str>,
    {
        let mut history = Self::new();
        for (date, orders) in entries {
            let date = date.as_ref();
            // chrono skips whitespace before numeric fields, so padding is rejected up front
            let parsed = Some(date)
                .filter(|text| !text.contains(char::is_whitespace))
                .and_then(|text| NaiveDate::parse_from_str(text, DATE_FORMAT).ok())
                .ok_or_else(|| PredictionError::MalformedDate(date.to_string()))?;
            history.insert(parsed, orders);
        }
        Ok(history)
    }

    pub fn with_orders(mut self, date: NaiveDate, orders: Vec<Order>) -> Self {
        self.insert(date, orders);
        self
    }

    pub fn insert(&mut self, date: NaiveDate, orders: Vec<Order>) {
        self.by_date.entry(date).or_default().extend(orders);
    }

    /// Every order paired with its purchase date.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &Order)> {
        self.by_date
            .iter()
            .flat_map(|(date, orders)| orders.iter().map(move |order| (*date, order)))
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
