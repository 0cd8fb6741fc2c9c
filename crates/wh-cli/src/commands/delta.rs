//! Cumulative delta report.
//!
//! One line per working day with the running balance in hours, red when the
//! balance is negative and green otherwise.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use wh_core::{BalanceConfig, BalanceDay, Document, categorize_days, cumulative_balance};

/// Formats a balance as a signed number of hours with two decimals.
pub fn format_hours(hours: f64) -> String {
    format!("{hours:+.2}")
}

/// Formats the balance table, tab separated.
pub fn format_balance(days: &[BalanceDay], colorize: bool) -> String {
    let mut output = String::new();

    for day in days {
        let hours = format_hours(day.cumulative);
        let hours = match (colorize, day.cumulative < 0.0) {
            (false, _) => hours,
            (true, true) => hours.red().bold().to_string(),
            (true, false) => hours.green().bold().to_string(),
        };
        writeln!(output, "{}\t{hours}", day.date.format("%Y-%m-%d")).unwrap();
    }

    output
}

pub fn run<W: Write>(
    writer: &mut W,
    document: &Document,
    config: &BalanceConfig,
    colorize: bool,
) -> Result<()> {
    let categories = categorize_days(document);
    let days = cumulative_balance(document, &categories, config);
    tracing::debug!(
        working_days = days.len(),
        expected_hours = config.expected_hours(),
        "computed balance"
    );

    write!(writer, "{}", format_balance(&days, colorize))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_format_hours_is_signed() {
        assert_eq!(format_hours(0.5), "+0.50");
        assert_eq!(format_hours(0.0), "+0.00");
        assert_eq!(format_hours(-1.25), "-1.25");
        assert_eq!(format_hours(10.0 / 3.0), "+3.33");
    }

    #[test]
    fn test_delta_report() {
        let log = "\
2024-01-01 public holiday
2024-01-02 08:00-12:00 in office
12:30-17:30
2024-01-03 7h WFH
2024-01-04 vacation
";
        let document = wh_core::parse(log).unwrap();

        let mut output = Vec::new();
        run(&mut output, &document, &BalanceConfig::default(), false).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        2024-01-02	+0.50
        2024-01-03	-1.00
        ");
    }

    #[test]
    fn test_custom_working_day() {
        let document = wh_core::parse("2024-01-02 6h\n").unwrap();
        let config = BalanceConfig {
            working_hours: 6.0,
            daily_break_hours: 0.0,
        };

        let mut output = Vec::new();
        run(&mut output, &document, &config, false).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "2024-01-02\t+0.00\n");
    }

    #[test]
    fn test_colorized_output_wraps_value() {
        colored::control::set_override(true);
        let days = [BalanceDay {
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            hours: 8.0,
            delta: -0.5,
            cumulative: -0.5,
        }];
        let output = format_balance(&days, true);
        colored::control::unset_override();

        assert!(output.starts_with("2024-01-02\t\u{1b}["));
        assert!(output.contains("-0.50"));
    }
}
