// Simple prediction - averaged consumption rate per lens power
use crate::application::lens_prediction::LensPrediction;
use crate::domain::{Catalog, Estimation, LensPower, OrderHistory, PredictionError, TypeGroup};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PredictionSettings {
    /// Units consumed per day when history is too short to compute a rate.
    pub fallback_units_per_day: f64,
    /// Halve the estimate when the customer only ever bought a single power.
    pub bilateral_single_type: bool,
}

impl PredictionSettings {
    pub fn validate(&self) -> Result<(), PredictionError> {
        let rate = self.fallback_units_per_day;
        if !(rate.is_finite() && rate > 0.0) {
            return Err(PredictionError::InvalidFallbackRate(rate));
        }
        Ok(())
    }
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            fallback_units_per_day: 1.0,
            bilateral_single_type: true,
        }
    }
}

/// Averages each lens power's consumption from all purchases but the last one,
/// then projects how long the last purchase lasts. With a single purchase the
/// manufacturer's duration is used as is.
#[derive(Debug, Clone, Default)]
pub struct SimpleLensPrediction {
    settings: PredictionSettings,
}

impl SimpleLensPrediction {
    pub fn new(settings: PredictionSettings) -> Result<Self, PredictionError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// One estimation per lens power, ordered by power label.
    pub fn estimate_by_type(
        &self,
        catalog: &Catalog,
        history: &OrderHistory,
    ) -> Result<Vec<Estimation>, PredictionError> {
        let groups = group_by_power(catalog, history)?;
        let halve = self.settings.bilateral_single_type && groups.len() == 1;

        let mut estimations = Vec::with_capacity(groups.len());
        for group in groups.values() {
            if let Some(estimation) = group.estimate(self.settings.fallback_units_per_day, halve)? {
                tracing::debug!(
                    "Power {}: {} units over {}..{}, {:.3} units/day, {} days left",
                    estimation.power,
                    estimation.last_purchase_units,
                    estimation.first_purchase,
                    estimation.last_purchase,
                    estimation.units_per_day,
                    estimation.days_estimation
                );
                estimations.push(estimation);
            }
        }

        Ok(estimations)
    }
}

impl LensPrediction for SimpleLensPrediction {
    /// Returns the latest per-power estimate: a strict "greater replaces" scan over
    /// the estimates keeps the furthest date, not the soonest.
    fn predict_date(
        &self,
        catalog: &Catalog,
        history: &OrderHistory,
    ) -> Result<Option<NaiveDate>, PredictionError> {
        if history.is_empty() {
            tracing::warn!("Empty order history, no prediction can be made");
            return Ok(None);
        }

        let estimations = self.estimate_by_type(catalog, history)?;
        let predicted = latest_next_purchase(&estimations);

        if let Some(date) = predicted {
            tracing::info!(
                "Predicted run-out date {} from {} lens power(s)",
                date,
                estimations.len()
            );
        }

        Ok(predicted)
    }
}

/// Furthest `next_purchase` among the estimates; a later date strictly replaces the current one.
pub fn latest_next_purchase(estimations: &[Estimation]) -> Option<NaiveDate> {
    let mut predicted: Option<NaiveDate> = None;
    for estimation in estimations {
        if predicted.is_none_or(|current| current < estimation.next_purchase) {
            predicted = Some(estimation.next_purchase);
        }
    }
    predicted
}

fn group_by_power(
    catalog: &Catalog,
    history: &OrderHistory,
) -> Result<BTreeMap<LensPower, TypeGroup>, PredictionError> {
    let mut groups: BTreeMap<LensPower, TypeGroup> = BTreeMap::new();

    for (date, order) in history.iter() {
        order.validate()?;
        let duration = catalog.duration_of(order.product_id)?;
        let units = u64::from(order.quantity) * u64::from(duration);

        groups
            .entry(order.power.clone())
            .or_insert_with(|| TypeGroup::new(order.power.clone()))
            .push(date, units);
    }

    Ok(groups)
}
