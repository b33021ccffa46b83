// Per lens-power consumption estimation
use super::error::PredictionError;
use super::order::LensPower;
use chrono::{Days, NaiveDate};

/// Purchases of one lens power as `(date, units)` where units = quantity * duration days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeGroup {
    pub power: LensPower,
    pub purchases: Vec<(NaiveDate, u64)>,
}

/// Outcome of estimating a single [`TypeGroup`].
#[derive(Debug, Clone, PartialEq)]
pub struct Estimation {
    pub power: LensPower,
    pub first_purchase: NaiveDate,
    pub last_purchase: NaiveDate,
    pub last_purchase_units: u64,
    pub prior_units: u64,
    pub units_per_day: f64,
    pub days_estimation: u64,
    pub next_purchase: NaiveDate,
}

impl TypeGroup {
    pub fn new(power: LensPower) -> Self {
        Self {
            power,
            purchases: Vec::new(),
        }
    }

    pub fn push(&mut self, date: NaiveDate, units: u64) {
        self.purchases.push((date, units));
    }

    /// Estimate when this group's supply runs out.
    ///
    /// The last purchase is found with a strict "later date replaces" scan, so among
    /// entries sharing the latest date the first one seen provides the amount.
    /// Returns `None` for a group without purchases.
    pub fn estimate(
        &self,
        fallback_units_per_day: f64,
        halve: bool,
    ) -> Result<Option<Estimation>, PredictionError> {
        let Some(&(first_date, first_units)) = self.purchases.first() else {
            return Ok(None);
        };

        let mut first_purchase = first_date;
        let mut last_purchase = first_date;
        let mut last_purchase_units = first_units;
        let mut total_units: u64 = 0;

        for &(date, units) in &self.purchases {
            if date < first_purchase {
                first_purchase = date;
            }
            if date > last_purchase {
                last_purchase = date;
                last_purchase_units = units;
            }
            total_units = total_units
                .checked_add(units)
                .ok_or_else(|| PredictionError::UnitsOverflow {
                    power: self.power.clone(),
                })?;
        }

        let total_days = (last_purchase - first_purchase).num_days();
        let prior_units = total_units - last_purchase_units;

        let units_per_day = if total_days > 0 && prior_units > 0 {
            prior_units as f64 / total_days as f64
        } else {
            fallback_units_per_day
        };

        let mut days = (last_purchase_units as f64 / units_per_day).round();
        // single power bought: assume it is worn on both eyes
        if halve {
            days = (days / 2.0).round();
        }
        let days_estimation = days as u64;

        let next_purchase = last_purchase
            .checked_add_days(Days::new(days_estimation))
            .ok_or(PredictionError::DateOutOfRange {
                from: last_purchase,
                days: days_estimation,
            })?;

        Ok(Some(Estimation {
            power: self.power.clone(),
            first_purchase,
            last_purchase,
            last_purchase_units,
            prior_units,
            units_per_day,
            days_estimation,
            next_purchase,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_purchase_uses_fallback_rate() {
        let mut group = TypeGroup::new(LensPower::from("-2.00"));
        group.push(date(2015, 4, 1), 360);

        let estimation = group.estimate(1.0, false).unwrap().unwrap();
        assert_eq!(estimation.units_per_day, 1.0);
        assert_eq!(estimation.days_estimation, 360);
        assert_eq!(estimation.next_purchase, date(2016, 3, 26));
    }

    #[test]
    fn test_rate_from_prior_purchases() {
        let mut group = TypeGroup::new(LensPower::from("-1.50"));
        group.push(date(2014, 10, 1), 60);
        group.push(date(2015, 1, 1), 60);
        group.push(date(2015, 4, 15), 30);

        let estimation = group.estimate(1.0, false).unwrap().unwrap();
        assert_eq!(estimation.prior_units, 120);
        assert_eq!(estimation.first_purchase, date(2014, 10, 1));
        assert_eq!(estimation.last_purchase, date(2015, 4, 15));
        // 120 units over 196 days, 30 units left -> 49 days
        assert_eq!(estimation.days_estimation, 49);
        assert_eq!(estimation.next_purchase, date(2015, 6, 3));
    }

    #[test]
    fn test_halving_rounds_half_away_from_zero() {
        let mut group = TypeGroup::new(LensPower::from("+0.50"));
        group.push(date(2014, 8, 1), 45);

        let estimation = group.estimate(1.0, true).unwrap().unwrap();
        assert_eq!(estimation.days_estimation, 23);
    }

    #[test]
    fn test_unordered_purchases() {
        let mut group = TypeGroup::new(LensPower::from("x"));
        group.push(date(2015, 1, 1), 30);
        group.push(date(2014, 12, 2), 30);

        let estimation = group.estimate(1.0, false).unwrap().unwrap();
        assert_eq!(estimation.first_purchase, date(2014, 12, 2));
        assert_eq!(estimation.last_purchase, date(2015, 1, 1));
        assert_eq!(estimation.days_estimation, 30);
    }

    #[test]
    fn test_units_overflow() {
        let units = u64::from(u32::MAX) * u64::from(u32::MAX);
        let mut group = TypeGroup::new(LensPower::from("a"));
        group.push(date(2015, 1, 1), units);
        group.push(date(2015, 2, 1), units);

        assert_eq!(
            group.estimate(1.0, false),
            Err(PredictionError::UnitsOverflow {
                power: LensPower::from("a")
            })
        );
    }

    #[test]
    fn test_empty_group() {
        let group = TypeGroup::new(LensPower::from("x"));
        assert_eq!(group.estimate(1.0, true), Ok(None));
    }
}
