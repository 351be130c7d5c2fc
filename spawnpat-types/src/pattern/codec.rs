//! Text format for patterns.
//!
//! Each phase is written as `<interval>` followed by `:<emitter>` for every
//! spawn position, and phases are joined with `|` in playback order:
//! `0.5:0:2|0.5|1:4`.
//!
//! Parsing is best-effort since the input is usually pasted clipboard text.
//! A segment whose interval is unusable is dropped whole; a spawn field that
//! is not an index below [`MAX_EMITTERS`] is dropped on its own. Empty
//! segments and empty fields are skipped. Nothing here ever fails.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::{Pattern, Phase};
use crate::state::MAX_EMITTERS;

pub const PHASE_SEPARATOR: char = '|';
pub const SPAWN_SEPARATOR: char = ':';

/// Something the parser dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSkip {
    /// The whole segment, because its interval was missing, unparseable,
    /// negative or not finite.
    Phase { segment: String },
    /// A single spawn field that was not an integer in `0..MAX_EMITTERS`.
    Spawn { segment: String, field: String },
}

impl fmt::Display for ParseSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSkip::Phase { segment } => write!(f, "dropped phase {:?}", segment),
            ParseSkip::Spawn { segment, field } => {
                write!(f, "dropped spawn {:?} in phase {:?}", field, segment)
            }
        }
    }
}

/// A parsed pattern together with everything that was dropped on the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseReport {
    pub pattern: Pattern,
    pub skipped: Vec<ParseSkip>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

fn parse_spawn(field: &str) -> Option<usize> {
    field.parse::<usize>().ok().filter(|i| *i < MAX_EMITTERS)
}

fn parse_interval(field: &str) -> Option<f64> {
    field
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite() && *t >= 0.0)
}

impl Pattern {
    /// Parse pattern text, silently dropping anything malformed.
    pub fn parse(text: &str) -> Self {
        Self::parse_with_report(text).pattern
    }

    /// Parse pattern text and report what was dropped.
    pub fn parse_with_report(text: &str) -> ParseReport {
        let mut phases = Vec::new();
        let mut skipped = Vec::new();

        for segment in text
            .trim()
            .split(PHASE_SEPARATOR)
            .filter(|s| !s.is_empty())
        {
            let mut fields = segment.split(SPAWN_SEPARATOR).filter(|f| !f.is_empty());

            let Some(time_interval) = fields.next().and_then(parse_interval) else {
                skipped.push(ParseSkip::Phase {
                    segment: segment.to_string(),
                });
                continue;
            };

            let mut phase = Phase::new(time_interval);
            for field in fields {
                match parse_spawn(field) {
                    Some(index) => phase.spawn_positions.push(index),
                    None => skipped.push(ParseSkip::Spawn {
                        segment: segment.to_string(),
                        field: field.to_string(),
                    }),
                }
            }
            phases.push(phase);
        }

        ParseReport {
            pattern: Pattern::from_playback_order(phases),
            skipped,
        }
    }
}

/// Writes the pattern in playback order. `f64`'s `Display` is the shortest
/// text that parses back to the same value, so output always round-trips.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, phase) in self.playback_order().enumerate() {
            if i > 0 {
                write!(f, "{}", PHASE_SEPARATOR)?;
            }
            write!(f, "{}", phase.time_interval)?;
            for spawn in &phase.spawn_positions {
                write!(f, "{}{}", SPAWN_SEPARATOR, spawn)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Pattern::parse(s))
    }
}
