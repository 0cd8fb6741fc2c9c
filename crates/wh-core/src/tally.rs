//! Per-year counts of day categories.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::category::DayCategory;

/// Category counts for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearTally {
    pub year: i32,
    /// Most frequent first; ties keep category order.
    pub counts: Vec<(DayCategory, usize)>,
    pub total: usize,
}

/// Count categorized days per year, oldest year first.
pub fn count_by_year(categories: &BTreeMap<NaiveDate, DayCategory>) -> Vec<YearTally> {
    let mut years: BTreeMap<i32, BTreeMap<DayCategory, usize>> = BTreeMap::new();

    for (date, category) in categories {
        *years
            .entry(date.year())
            .or_default()
            .entry(*category)
            .or_insert(0) += 1;
    }

    years
        .into_iter()
        .map(|(year, per_category)| {
            let total = per_category.values().sum();
            let mut counts: Vec<_> = per_category.into_iter().collect();
            // stable sort: BTreeMap order is declaration order for ties
            counts.sort_by(|a, b| b.1.cmp(&a.1));
            YearTally {
                year,
                counts,
                total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_counts_per_year() {
        let categories = BTreeMap::from([
            (date(2023, 12, 29), DayCategory::Vacation),
            (date(2024, 1, 1), DayCategory::PublicHoliday),
            (date(2024, 1, 2), DayCategory::Wfh),
            (date(2024, 1, 3), DayCategory::InOffice),
            (date(2024, 1, 4), DayCategory::Wfh),
            (date(2024, 1, 5), DayCategory::Sick),
        ]);

        let tallies = count_by_year(&categories);
        assert_eq!(
            tallies,
            vec![
                YearTally {
                    year: 2023,
                    counts: vec![(DayCategory::Vacation, 1)],
                    total: 1,
                },
                YearTally {
                    year: 2024,
                    counts: vec![
                        (DayCategory::Wfh, 2),
                        (DayCategory::InOffice, 1),
                        (DayCategory::Sick, 1),
                        (DayCategory::PublicHoliday, 1),
                    ],
                    total: 5,
                },
            ]
        );
    }

    #[test]
    fn test_no_days_no_years() {
        assert!(count_by_year(&BTreeMap::new()).is_empty());
    }
}
