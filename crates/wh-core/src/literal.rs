//! Interpretation of literal tokens into typed values.
//!
//! These functions are pure. Each takes the token text and its position so
//! that a rejection can be reported where it happened.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime, TimeDelta, Timelike};
use regex::Regex;

use crate::error::{ParseError, Position};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").unwrap());

static US_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").unwrap());

static EUROPEAN_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").unwrap());

/// Explicit or implied sign of a duration literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

impl Sign {
    pub const fn factor(self) -> i32 {
        match self {
            Self::Plus => 1,
            Self::Minus => -1,
        }
    }
}

/// Interpret a date; the separator picks the layout.
///
/// - `2024-03-05` is year, month, day
/// - `03/05/2024` is month, day, year
/// - `05.03.2024` is day, month, year
pub fn interpret_date(text: &str, position: Position) -> Result<NaiveDate, ParseError> {
    // The year is always four digits; chrono alone would take `24` as year 24.
    let format = if ISO_DATE_RE.is_match(text) {
        "%Y-%m-%d"
    } else if US_DATE_RE.is_match(text) {
        "%m/%d/%Y"
    } else if EUROPEAN_DATE_RE.is_match(text) {
        "%d.%m.%Y"
    } else {
        return Err(invalid_date(text, position));
    };

    NaiveDate::parse_from_str(text, format).map_err(|_| invalid_date(text, position))
}

fn invalid_date(text: &str, position: Position) -> ParseError {
    ParseError::InvalidDate {
        text: text.to_string(),
        position,
    }
}

/// Interpret a time of day as `HH:MM` or `HH:MM:SS`, chosen by colon count.
pub fn interpret_time(text: &str, position: Position) -> Result<NaiveTime, ParseError> {
    let format = match text.matches(':').count() {
        2 => "%H:%M:%S",
        1 => "%H:%M",
        _ => return Err(invalid_time(text, position)),
    };

    let time = NaiveTime::parse_from_str(text, format).map_err(|_| invalid_time(text, position))?;
    // chrono reads second 60 as a leap second
    if time.nanosecond() >= 1_000_000_000 {
        return Err(invalid_time(text, position));
    }
    Ok(time)
}

fn invalid_time(text: &str, position: Position) -> ParseError {
    ParseError::InvalidTime {
        text: text.to_string(),
        position,
    }
}

/// Interpret a duration literal such as `90`, `1h30min` or `1.5h`.
///
/// A literal without any letters counts minutes.
pub fn interpret_duration_literal(text: &str, position: Position) -> Result<TimeDelta, ParseError> {
    let literal = if text.bytes().any(|b| b.is_ascii_alphabetic()) {
        text.to_string()
    } else {
        format!("{text}min")
    };

    parse_unit_duration(&literal)
        .map(TimeDelta::nanoseconds)
        .ok_or(ParseError::InvalidDuration {
            text: literal,
            position,
        })
}

/// Map a sign token to its direction. Anything but `-` and `minus` is
/// positive.
pub fn interpret_sign(text: &str) -> Sign {
    match text {
        "-" | "minus" => Sign::Minus,
        _ => Sign::Plus,
    }
}

fn unit_nanos(unit: &str) -> Option<i64> {
    let nanos = match unit.to_ascii_lowercase().as_str() {
        "w" | "week" | "weeks" => 7 * 24 * 3600 * NANOS_PER_SECOND,
        "d" | "day" | "days" => 24 * 3600 * NANOS_PER_SECOND,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3600 * NANOS_PER_SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => 60 * NANOS_PER_SECOND,
        "s" | "sec" | "secs" | "second" | "seconds" => NANOS_PER_SECOND,
        "ms" | "milli" | "millis" | "millisecond" | "milliseconds" => 1_000_000,
        "us" | "micro" | "micros" | "microsecond" | "microseconds" => 1_000,
        "ns" | "nano" | "nanos" | "nanosecond" | "nanoseconds" => 1,
        _ => return None,
    };
    Some(nanos)
}

/// Sum `<number><unit>` components into nanoseconds.
///
/// Fractions are resolved exactly against the unit; precision below one
/// nanosecond is dropped.
fn parse_unit_duration(literal: &str) -> Option<i64> {
    let mut total: i64 = 0;
    let mut rest = literal;

    if rest.is_empty() {
        return None;
    }

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, after) = rest.split_at(number_len);

        let unit_len = after
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(after.len());
        let (unit, after) = after.split_at(unit_len);

        if number.is_empty() || unit.is_empty() {
            return None;
        }

        let scale = unit_nanos(unit)?;
        total = total.checked_add(scale_number(number, scale)?)?;
        rest = after;
    }

    Some(total)
}

fn scale_number(number: &str, scale: i64) -> Option<i64> {
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (number, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.contains('.') {
        return None;
    }

    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos = whole.checked_mul(scale)?;

    // Digits past the nanosecond resolution of the largest unit cannot matter.
    let digits = &fraction[..fraction.len().min(18)];
    if !digits.is_empty() {
        let numerator: i128 = digits.parse().ok()?;
        let denominator = 10_i128.pow(u32::try_from(digits.len()).ok()?);
        let part = i64::try_from(numerator * i128::from(scale) / denominator).ok()?;
        nanos = nanos.checked_add(part)?;
    }

    Some(nanos)
}
