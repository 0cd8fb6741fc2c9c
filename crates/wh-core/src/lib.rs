//! Core domain logic for working-hours logs.
//!
//! This crate contains:
//! - Parsing: turning a plaintext log into an ordered `Document` of periods
//! - Categorization: classifying days by keywords in their descriptions
//! - Balance: cumulative hours against a nominal working day
//! - Tallies: per-year counts of day categories
//!
//! Parsing runs in stages. The lexer tokenizes lines, the grammar groups them
//! into day blocks, and the transformer interprets literals and emits periods
//! that the document assembler concatenates.

pub mod balance;
pub mod category;
mod document;
mod error;
pub mod grammar;
pub mod lexer;
pub mod literal;
mod render;
pub mod tally;
mod transform;

pub use balance::{BalanceConfig, BalanceDay, cumulative_balance};
pub use category::{DayCategory, UnknownDayCategory, categorize_days};
pub use document::{Document, Period};
pub use error::{ParseError, Position};
pub use literal::{Sign, interpret_date, interpret_duration_literal, interpret_sign, interpret_time};
pub use render::render_log;
pub use tally::{YearTally, count_by_year};
pub use transform::resolve;

/// Parse a complete log into a `Document`.
///
/// The whole input is tokenized and structured before any literal is
/// interpreted; the first error found aborts the parse.
pub fn parse(input: &str) -> Result<Document, ParseError> {
    let tokens = lexer::tokenize(input)?;
    let blocks = grammar::parse_tokens(&tokens)?;
    let days = transform::transform(&blocks)?;
    Ok(Document::assemble(days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_workday_flattening() {
        let document = parse("2024-01-01 08:00-12:00 standup\n13:00-17:00 coding\n").unwrap();
        assert_eq!(
            document.periods(),
            &[
                Period {
                    date: date(2024, 1, 1),
                    seconds: Some(14_400),
                    description: Some("standup".to_string()),
                },
                Period {
                    date: date(2024, 1, 1),
                    seconds: Some(14_400),
                    description: Some("coding".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_description_only_day() {
        let document = parse("2024-01-02 vacation").unwrap();
        assert_eq!(
            document.periods(),
            &[Period {
                date: date(2024, 1, 2),
                seconds: None,
                description: Some("vacation".to_string()),
            }]
        );
    }

    #[test]
    fn test_mixed_document_keeps_source_order() {
        let log = "\
2024-01-03 7h30min in office
-30 lunch
2024-01-01 public holiday
05.01.2024 9:00-17:30 WFH
2024-01-03 15
";
        let document = parse(log).unwrap();
        let rows: Vec<_> = document
            .iter()
            .map(|p| (p.date, p.seconds, p.description.as_deref()))
            .collect();
        assert_eq!(
            rows,
            vec![
                (date(2024, 1, 3), Some(27_000), Some("in office")),
                (date(2024, 1, 3), Some(-1800), Some("lunch")),
                (date(2024, 1, 1), None, Some("public holiday")),
                (date(2024, 1, 5), Some(30_600), Some("WFH")),
                (date(2024, 1, 3), Some(900), None),
            ]
        );
    }

    #[test]
    fn test_invalid_line_in_the_middle_is_located() {
        let log = "\
2024-01-01 08:00-12:00
13:00-17:00
2024-01-02 8h
2024-02-30 8h
2024-01-04 8h
2024-13-01 8h
";
        let err = parse(log).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidDate {
                text: "2024-02-30".to_string(),
                position: Position::new(4, 1),
            }
        );
    }

    #[test]
    fn test_invalid_interval_in_the_middle_is_located() {
        let log = "\
2024-01-01 8h
2024-01-02 09:00-12:00
  17:00-13:00 oops
2024-01-03 12:00-08:00
";
        let err = parse(log).unwrap_err();
        assert!(matches!(err, ParseError::InvalidInterval { .. }));
        assert_eq!((err.line(), err.column()), (3, 3));
    }

    #[test]
    fn test_empty_input_is_an_empty_document() {
        assert!(parse("").unwrap().is_empty());
    }
}
