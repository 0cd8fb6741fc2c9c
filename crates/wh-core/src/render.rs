//! Canonical log text for a document.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::document::Document;

/// Render a document back into log syntax.
///
/// Durations are written as whole seconds (`5400s`). Consecutive timed
/// periods on the same date share one workday block, so parsing the output
/// again yields the same seconds and descriptions.
pub fn render_log(document: &Document) -> String {
    let mut out = String::new();
    let mut open_day: Option<NaiveDate> = None;

    for period in document {
        match period.seconds {
            Some(seconds) => {
                if open_day != Some(period.date) {
                    write!(out, "{} ", period.date.format("%Y-%m-%d")).unwrap();
                    open_day = Some(period.date);
                }
                write!(out, "{seconds}s").unwrap();
            }
            None => {
                write!(out, "{}", period.date.format("%Y-%m-%d")).unwrap();
                open_day = None;
            }
        }

        if let Some(description) = &period.description {
            write!(out, " {description}").unwrap();
        }
        writeln!(out).unwrap();
    }

    out
}
