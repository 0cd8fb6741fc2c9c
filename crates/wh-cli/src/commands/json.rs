//! JSON rendering of the parsed periods.

use std::io::Write;

use anyhow::{Context, Result};
use wh_core::Document;

pub fn format_json(document: &Document) -> Result<String> {
    serde_json::to_string_pretty(document).context("failed to serialize periods")
}

pub fn run<W: Write>(writer: &mut W, document: &Document) -> Result<()> {
    writeln!(writer, "{}", format_json(document)?)?;
    Ok(())
}
