//! The parsed record sequence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One timed or described unit of activity on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub date: NaiveDate,
    /// Whole seconds worked; `None` for description-only days.
    pub seconds: Option<i64>,
    pub description: Option<String>,
}

/// All periods of a log, in source order.
///
/// Dates may repeat and are not sorted; grouping is left to the consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    periods: Vec<Period>,
}

impl Document {
    /// Concatenate the per-day emission lists without reordering.
    pub fn assemble(days: Vec<Vec<Period>>) -> Self {
        let periods: Vec<Period> = days.into_iter().flatten().collect();
        tracing::debug!(periods = periods.len(), "assembled document");
        Self { periods }
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

impl From<Vec<Period>> for Document {
    fn from(periods: Vec<Period>) -> Self {
        Self { periods }
    }
}

impl IntoIterator for Document {
    type Item = Period;
    type IntoIter = std::vec::IntoIter<Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}
