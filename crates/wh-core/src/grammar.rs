//! Structural grammar: groups tokens into lines and lines into day blocks.
//!
//! ```text
//! document        := day_block*
//! day_block       := workday | description_day
//! workday         := primary_line secondary_line*
//! description_day := DATE DESCRIPTION
//! primary_line    := DATE time_expr DESCRIPTION?
//! secondary_line  := time_expr DESCRIPTION?
//! time_expr       := TIME "-" TIME | SIGN? DURATION
//! ```
//!
//! Nodes keep the raw tokens; interpretation happens in the transformer.

use crate::error::{ParseError, Position};
use crate::lexer::{Token, TokenKind};

/// Either form of a measurable amount of time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeExpr<'i> {
    Interval {
        start: Token<'i>,
        end: Token<'i>,
    },
    Delta {
        sign: Option<Token<'i>>,
        duration: Token<'i>,
    },
}

impl TimeExpr<'_> {
    pub const fn position(&self) -> Position {
        match self {
            Self::Interval { start, .. } => start.position,
            Self::Delta {
                sign: Some(sign), ..
            } => sign.position,
            Self::Delta { duration, .. } => duration.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryLine<'i> {
    pub date: Token<'i>,
    pub time: TimeExpr<'i>,
    pub description: Option<Token<'i>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryLine<'i> {
    pub time: TimeExpr<'i>,
    pub description: Option<Token<'i>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayBlock<'i> {
    Workday {
        primary: PrimaryLine<'i>,
        secondary: Vec<SecondaryLine<'i>>,
    },
    DescriptionDay {
        date: Token<'i>,
        description: Token<'i>,
    },
}

/// The shape of a single line, before it is attached to a block.
#[derive(Debug)]
enum Line<'i> {
    Primary(PrimaryLine<'i>),
    Secondary(SecondaryLine<'i>),
    Description {
        date: Token<'i>,
        description: Token<'i>,
    },
}

/// Build the parse tree from a token stream.
pub fn parse_tokens<'i>(tokens: &[Token<'i>]) -> Result<Vec<DayBlock<'i>>, ParseError> {
    let mut blocks: Vec<DayBlock<'i>> = Vec::new();

    for line in tokens.split_inclusive(|t| t.kind == TokenKind::Newline) {
        match read_line(line)? {
            Line::Primary(primary) => blocks.push(DayBlock::Workday {
                primary,
                secondary: Vec::new(),
            }),
            Line::Description { date, description } => {
                blocks.push(DayBlock::DescriptionDay { date, description });
            }
            Line::Secondary(line) => match blocks.last_mut() {
                Some(DayBlock::Workday { secondary, .. }) => secondary.push(line),
                Some(DayBlock::DescriptionDay { .. }) => {
                    return Err(ParseError::StructuralError {
                        reason: "a line without a date cannot follow a description-only day",
                        position: line.time.position(),
                    });
                }
                None => {
                    return Err(ParseError::StructuralError {
                        reason: "the first entry must start with a date",
                        position: line.time.position(),
                    });
                }
            },
        }
    }

    tracing::trace!(blocks = blocks.len(), "built parse tree");
    Ok(blocks)
}

/// Classify the tokens of one line, including its trailing `Newline`.
fn read_line<'i>(line: &[Token<'i>]) -> Result<Line<'i>, ParseError> {
    let mut rest = line;

    let date = take(&mut rest, TokenKind::Date);
    let time = read_time_expr(&mut rest)?;
    let description = take(&mut rest, TokenKind::Description);

    let Some(next) = rest.first() else {
        return Err(malformed("line ended unexpectedly", line_start(line)));
    };
    if next.kind != TokenKind::Newline {
        return Err(malformed("unexpected token", next.position));
    }

    match (date, time, description) {
        (Some(date), Some(time), description) => Ok(Line::Primary(PrimaryLine {
            date,
            time,
            description,
        })),
        (Some(date), None, Some(description)) => Ok(Line::Description { date, description }),
        (Some(date), None, None) => Err(malformed(
            "a date must be followed by a duration or a description",
            date.position,
        )),
        (None, Some(time), description) => Ok(Line::Secondary(SecondaryLine { time, description })),
        (None, None, Some(description)) => Err(malformed(
            "expected a date, a time interval or a duration",
            description.position,
        )),
        (None, None, None) => Err(malformed("empty line", next.position)),
    }
}

fn read_time_expr<'i>(rest: &mut &[Token<'i>]) -> Result<Option<TimeExpr<'i>>, ParseError> {
    if let Some(start) = take(rest, TokenKind::Time) {
        if take(rest, TokenKind::Dash).is_none() {
            return Err(malformed("expected '-' after the start time", start.position));
        }
        let Some(end) = take(rest, TokenKind::Time) else {
            return Err(malformed("expected an end time after '-'", start.position));
        };
        return Ok(Some(TimeExpr::Interval { start, end }));
    }

    let sign = take(rest, TokenKind::Sign);
    match take(rest, TokenKind::Duration) {
        Some(duration) => Ok(Some(TimeExpr::Delta { sign, duration })),
        None => match sign {
            Some(sign) => Err(malformed("expected a duration after the sign", sign.position)),
            None => Ok(None),
        },
    }
}

fn take<'i>(rest: &mut &[Token<'i>], kind: TokenKind) -> Option<Token<'i>> {
    match rest.split_first() {
        Some((token, tail)) if token.kind == kind => {
            *rest = tail;
            Some(*token)
        }
        _ => None,
    }
}

fn line_start(line: &[Token<'_>]) -> Position {
    line.first()
        .map_or_else(|| Position::new(1, 1), |t| Position::new(t.position.line, 1))
}

const fn malformed(reason: &'static str, position: Position) -> ParseError {
    ParseError::MalformedLine { reason, position }
}
