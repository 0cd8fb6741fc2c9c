//! Day categories derived from keywords in descriptions.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::document::Document;

/// What kind of day a date was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayCategory {
    InOffice,
    Wfh,
    Sick,
    PublicHoliday,
    Vacation,
}

impl DayCategory {
    /// All categories, in the order their keywords are applied.
    pub const ALL: [Self; 5] = [
        Self::InOffice,
        Self::Wfh,
        Self::Sick,
        Self::PublicHoliday,
        Self::Vacation,
    ];

    /// The keyword that marks a day as this category.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::InOffice => "in office",
            Self::Wfh => "WFH",
            Self::Sick => "sick",
            Self::PublicHoliday => "public holiday",
            Self::Vacation => "vacation",
        }
    }

    /// Days that count against the nominal working day.
    pub const fn is_working_day(self) -> bool {
        matches!(self, Self::InOffice | Self::Wfh)
    }
}

impl fmt::Display for DayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for DayCategory {
    type Err = UnknownDayCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.keyword() == s)
            .ok_or_else(|| UnknownDayCategory(s.to_string()))
    }
}

impl Serialize for DayCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.keyword())
    }
}

impl<'de> Deserialize<'de> for DayCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown category strings.
#[derive(Debug, Clone)]
pub struct UnknownDayCategory(String);

impl fmt::Display for UnknownDayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown day category: {}", self.0)
    }
}

impl std::error::Error for UnknownDayCategory {}

/// Categorize every date in the document.
///
/// Dates start out in office. Keywords are applied in `DayCategory::ALL`
/// order and a later match overrides an earlier one, so a day mentioning
/// both "WFH" and "sick" is sick.
pub fn categorize_days(document: &Document) -> BTreeMap<NaiveDate, DayCategory> {
    let mut categories: BTreeMap<NaiveDate, DayCategory> = document
        .iter()
        .map(|p| (p.date, DayCategory::InOffice))
        .collect();

    for category in DayCategory::ALL {
        for period in document {
            let matches = period
                .description
                .as_deref()
                .is_some_and(|d| d.contains(category.keyword()));
            if matches {
                categories.insert(period.date, category);
            }
        }
    }

    tracing::debug!(days = categories.len(), "categorized days");
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn roundtrip_all_variants() {
        for variant in DayCategory::ALL {
            let parsed: DayCategory = variant.to_string().parse().expect("should parse");
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn unknown_category_errors() {
        let err = "remote".parse::<DayCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown day category: remote");
    }

    #[test]
    fn serializes_as_keyword() {
        let json = serde_json::to_string(&DayCategory::PublicHoliday).unwrap();
        assert_eq!(json, r#""public holiday""#);
    }

    #[test]
    fn test_default_is_in_office() {
        let document = parse("2024-01-01 8h\n2024-01-02 8h standup").unwrap();
        let categories = categorize_days(&document);
        assert_eq!(categories[&date(1)], DayCategory::InOffice);
        assert_eq!(categories[&date(2)], DayCategory::InOffice);
    }

    #[test]
    fn test_keyword_on_any_line_of_the_day() {
        let log = "\
2024-01-03 4h
4h WFH
2024-01-04 vacation
2024-01-05 2h
2024-01-05 felt sick, went home
";
        let categories = categorize_days(&parse(log).unwrap());
        assert_eq!(categories[&date(3)], DayCategory::Wfh);
        assert_eq!(categories[&date(4)], DayCategory::Vacation);
        assert_eq!(categories[&date(5)], DayCategory::Sick);
    }

    #[test]
    fn test_later_keyword_wins() {
        let document = parse("2024-01-08 2h WFH but sick").unwrap();
        assert_eq!(categorize_days(&document)[&date(8)], DayCategory::Sick);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let document = parse("2024-01-09 8h wfh").unwrap();
        assert_eq!(categorize_days(&document)[&date(9)], DayCategory::InOffice);
    }
}
