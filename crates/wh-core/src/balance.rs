//! Cumulative balance of worked hours against a nominal working day.
//!
//! Only days categorized as in office or WFH count. For each of them the
//! expected time is `working_hours + daily_break_hours`; the balance is the
//! running sum of `worked - expected`, in date order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::DayCategory;
use crate::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Nominal working hours per day.
    /// Default: 8.0
    pub working_hours: f64,

    /// Break hours expected on top of the working hours.
    /// Default: 0.5
    pub daily_break_hours: f64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            working_hours: 8.0,
            daily_break_hours: 0.5,
        }
    }
}

impl BalanceConfig {
    pub fn expected_hours(&self) -> f64 {
        self.working_hours + self.daily_break_hours
    }
}

/// Balance on one working day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceDay {
    pub date: NaiveDate,
    /// Hours logged on this date.
    pub hours: f64,
    /// Difference to the expected hours for this date.
    pub delta: f64,
    /// Running total of `delta` up to and including this date.
    pub cumulative: f64,
}

/// Compute the running balance over all working days, sorted by date.
#[allow(clippy::cast_precision_loss)]
pub fn cumulative_balance(
    document: &Document,
    categories: &BTreeMap<NaiveDate, DayCategory>,
    config: &BalanceConfig,
) -> Vec<BalanceDay> {
    let mut seconds_per_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();

    for period in document {
        let is_working_day = categories
            .get(&period.date)
            .is_some_and(|c| c.is_working_day());
        if !is_working_day {
            continue;
        }
        *seconds_per_day.entry(period.date).or_insert(0) += period.seconds.unwrap_or(0);
    }

    let expected = config.expected_hours();
    let mut cumulative = 0.0;

    seconds_per_day
        .into_iter()
        .map(|(date, seconds)| {
            let hours = seconds as f64 / 3600.0;
            let delta = hours - expected;
            cumulative += delta;
            BalanceDay {
                date,
                hours,
                delta,
                cumulative,
            }
        })
        .collect()
}
