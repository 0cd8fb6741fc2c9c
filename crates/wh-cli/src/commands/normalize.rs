//! Canonical log output.

use std::io::Write;

use anyhow::Result;
use wh_core::{Document, render_log};

pub fn run<W: Write>(writer: &mut W, document: &Document) -> Result<()> {
    write!(writer, "{}", render_log(document))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_output_parses_to_the_same_document() {
        let document = wh_core::parse("05.01.2024 9:00-17:30 WFH\n  minus 30 lunch\n").unwrap();

        let mut output = Vec::new();
        run(&mut output, &document).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(output, "2024-01-05 30600s WFH\n-1800s lunch\n");
        assert_eq!(wh_core::parse(&output).unwrap(), document);
    }
}
