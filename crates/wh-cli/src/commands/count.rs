//! Per-year day category counts.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use wh_core::{Document, YearTally, categorize_days, count_by_year};

/// Formats the tallies as tab separated blocks, one per year.
pub fn format_counts(tallies: &[YearTally]) -> String {
    let mut output = String::new();

    for tally in tallies {
        writeln!(output, "{}:", tally.year).unwrap();
        for (category, count) in &tally.counts {
            writeln!(output, "{category}\t{count}").unwrap();
        }
        writeln!(output, "total\t{}", tally.total).unwrap();
        writeln!(output).unwrap();
    }

    output
}

pub fn run<W: Write>(writer: &mut W, document: &Document) -> Result<()> {
    let categories = categorize_days(document);
    let tallies = count_by_year(&categories);
    write!(writer, "{}", format_counts(&tallies))?;
    Ok(())
}
