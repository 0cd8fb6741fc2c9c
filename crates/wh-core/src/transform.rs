//! Reduction of the parse tree into periods.

use chrono::{NaiveDate, TimeDelta};

use crate::document::Period;
use crate::error::ParseError;
use crate::grammar::{DayBlock, TimeExpr};
use crate::lexer::Token;
use crate::literal::{Sign, interpret_date, interpret_duration_literal, interpret_sign, interpret_time};

/// Reduce every day block, in order, into its list of periods.
pub fn transform(blocks: &[DayBlock<'_>]) -> Result<Vec<Vec<Period>>, ParseError> {
    blocks.iter().map(reduce_day_block).collect()
}

fn reduce_day_block(block: &DayBlock<'_>) -> Result<Vec<Period>, ParseError> {
    match block {
        DayBlock::Workday { primary, secondary } => {
            let date = interpret_date(primary.date.text, primary.date.position)?;
            let mut periods = Vec::with_capacity(secondary.len() + 1);

            periods.push(finish(date, &primary.time, primary.description)?);
            for line in secondary {
                periods.push(finish(date, &line.time, line.description)?);
            }
            Ok(periods)
        }
        DayBlock::DescriptionDay { date, description } => {
            let date = interpret_date(date.text, date.position)?;
            Ok(vec![Period {
                date,
                seconds: None,
                description: Some(description.text.to_string()),
            }])
        }
    }
}

fn finish(
    date: NaiveDate,
    time: &TimeExpr<'_>,
    description: Option<Token<'_>>,
) -> Result<Period, ParseError> {
    let delta = resolve(time)?;
    Ok(Period {
        date,
        seconds: Some(delta.num_seconds()),
        description: description.map(|t| t.text.to_string()),
    })
}

/// Resolve a time expression into a signed duration.
pub fn resolve(time: &TimeExpr<'_>) -> Result<TimeDelta, ParseError> {
    match time {
        TimeExpr::Interval { start, end } => {
            let from = interpret_time(start.text, start.position)?;
            let to = interpret_time(end.text, end.position)?;
            if to <= from {
                return Err(ParseError::InvalidInterval {
                    start: from.to_string(),
                    end: to.to_string(),
                    position: start.position,
                });
            }
            Ok(to - from)
        }
        TimeExpr::Delta { sign, duration } => {
            let sign = sign.map_or(Sign::Plus, |t| interpret_sign(t.text));
            let delta = interpret_duration_literal(duration.text, duration.position)?;
            Ok(delta * sign.factor())
        }
    }
}
