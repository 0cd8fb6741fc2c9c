//! Line-oriented tokenizer for working-hours logs.
//!
//! Each non-blank line becomes a run of tokens terminated by a `Newline`
//! token. Whitespace only separates tokens and is never emitted.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ParseError, Position};

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[-/.]\d+[-/.]\d+").unwrap());

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(?::\d+)+").unwrap());

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9][0-9A-Za-z.]*").unwrap());

/// Sign words must be followed by whitespace; symbols may touch the number.
static SIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(?:plus|minus)\s+|[+-]\s*)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Date,
    Time,
    /// The `-` between the two times of an interval.
    Dash,
    Sign,
    Duration,
    Description,
    Newline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'i> {
    pub kind: TokenKind,
    pub text: &'i str,
    pub position: Position,
}

/// Tokenize a complete document.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();

    for (i, line) in input.lines().enumerate() {
        let mut cursor = Cursor::new(i + 1, line);
        cursor.read_line(&mut tokens)?;
    }

    tracing::trace!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

/// Scanning state over a single line.
struct Cursor<'i> {
    line: usize,
    source: &'i str,
    offset: usize,
}

impl<'i> Cursor<'i> {
    const fn new(line: usize, source: &'i str) -> Self {
        Self {
            line,
            source,
            offset: 0,
        }
    }

    fn rest(&self) -> &'i str {
        &self.source[self.offset..]
    }

    fn is_finished(&self) -> bool {
        self.rest().is_empty()
    }

    fn position(&self) -> Position {
        let column = self.source[..self.offset].chars().count() + 1;
        Position::new(self.line, column)
    }

    fn trim_whitespace(&mut self) {
        let rest = self.rest();
        self.offset += rest.len() - rest.trim_start().len();
    }

    /// True when the next character ends a token.
    fn at_boundary(&self) -> bool {
        self.rest()
            .chars()
            .next()
            .is_none_or(char::is_whitespace)
    }

    fn take(&mut self, kind: TokenKind, width: usize) -> Token<'i> {
        let token = Token {
            kind,
            text: &self.rest()[..width],
            position: self.position(),
        };
        self.offset += width;
        token
    }

    fn malformed(&self, reason: &'static str) -> ParseError {
        ParseError::MalformedLine {
            reason,
            position: self.position(),
        }
    }

    /// Length of a standalone duration token at the start of `text`.
    fn duration_width(text: &str) -> Option<usize> {
        let m = DURATION_RE.find(text)?;
        let after = &text[m.end()..];
        after
            .chars()
            .next()
            .is_none_or(char::is_whitespace)
            .then_some(m.end())
    }

    fn read_line(&mut self, tokens: &mut Vec<Token<'i>>) -> Result<(), ParseError> {
        self.trim_whitespace();
        if self.is_finished() {
            return Ok(());
        }

        if let Some(m) = DATE_RE.find(self.rest()) {
            let width = m.end();
            if self.rest()[width..]
                .chars()
                .next()
                .is_none_or(char::is_whitespace)
            {
                tokens.push(self.take(TokenKind::Date, width));
                self.trim_whitespace();
            }
        }

        if !self.is_finished() {
            self.read_time_expression(tokens)?;
        }

        self.trim_whitespace();
        if !self.is_finished() {
            let text = self.rest().trim_end();
            tokens.push(self.take(TokenKind::Description, text.len()));
        }

        tokens.push(Token {
            kind: TokenKind::Newline,
            text: "",
            position: Position::new(self.line, self.source.chars().count() + 1),
        });
        Ok(())
    }

    /// Consume a time interval or a signed duration, if one starts here.
    fn read_time_expression(&mut self, tokens: &mut Vec<Token<'i>>) -> Result<(), ParseError> {
        if let Some(m) = TIME_RE.find(self.rest()) {
            tokens.push(self.take(TokenKind::Time, m.end()));
            self.trim_whitespace();

            if !self.rest().starts_with('-') {
                return Err(self.malformed("expected '-' and an end time after the start time"));
            }
            tokens.push(self.take(TokenKind::Dash, 1));
            self.trim_whitespace();

            let Some(m) = TIME_RE.find(self.rest()) else {
                return Err(self.malformed("expected an end time after '-'"));
            };
            tokens.push(self.take(TokenKind::Time, m.end()));

            if !self.at_boundary() {
                return Err(self.malformed("unexpected text directly after the time interval"));
            }
            return Ok(());
        }

        if let Some(m) = SIGN_RE.find(self.rest()) {
            let after = &self.rest()[m.end()..];
            if let Some(width) = Self::duration_width(after) {
                let sign = m.as_str().trim_end();
                tokens.push(self.take(TokenKind::Sign, sign.len()));
                self.trim_whitespace();
                tokens.push(self.take(TokenKind::Duration, width));
            }
            return Ok(());
        }

        if let Some(width) = Self::duration_width(self.rest()) {
            tokens.push(self.take(TokenKind::Duration, width));
        }
        Ok(())
    }
}
