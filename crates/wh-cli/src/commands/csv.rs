//! CSV rendering of the parsed periods.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use wh_core::Document;

const HEADER: &str = "date,seconds,description";

/// Quote a field when it contains a separator, a quote or a line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Formats the document as CSV, one row per period.
pub fn format_csv(document: &Document) -> String {
    let mut output = String::new();
    writeln!(output, "{HEADER}").unwrap();

    for period in document {
        let seconds = period.seconds.map(|s| s.to_string()).unwrap_or_default();
        let description = period.description.as_deref().map(escape_field).unwrap_or_default();
        writeln!(output, "{},{seconds},{description}", period.date.format("%Y-%m-%d")).unwrap();
    }

    output
}

pub fn run<W: Write>(writer: &mut W, document: &Document) -> Result<()> {
    write!(writer, "{}", format_csv(document))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("coding"), "coding");
        assert_eq!(escape_field("review, docs"), "\"review, docs\"");
        assert_eq!(escape_field("the \"big\" one"), "\"the \"\"big\"\" one\"");
    }

    #[test]
    fn test_csv_output() {
        let document = wh_core::parse(
            "2024-01-01 08:00-12:00 standup\n13:00-17:00 review, docs\n-30\n2024-01-02 vacation\n",
        )
        .unwrap();

        let mut output = Vec::new();
        run(&mut output, &document).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r#"
        date,seconds,description
        2024-01-01,14400,standup
        2024-01-01,14400,"review, docs"
        2024-01-01,-1800,
        2024-01-02,,vacation
        "#);
    }

    #[test]
    fn test_empty_document_has_header_only() {
        assert_eq!(format_csv(&Document::default()), "date,seconds,description\n");
    }
}
