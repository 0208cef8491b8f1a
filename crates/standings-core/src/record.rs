//! # Text Records
//!
//! Parsing of the one-line `name,wins,losses` team record.
//!
//! - Whitespace around the whole line and around each field is ignored
//! - Trailing empty fields are dropped before counting
//! - A record of the wrong shape is `InvalidArgument`
//! - A count that is not an integer is `NumberFormat`
//! - Negative counts parse, then fail constructor validation

use crate::primitives::{FIELD_DELIMITER, RECORD_FIELD_COUNT};
use crate::{Team, TeamError};
use std::str::FromStr;

/// Parse a text record into a validated [`Team`].
///
/// # Errors
/// - `TeamError::MissingRecord` if `raw` is `None`
/// - `TeamError::MalformedRecord` if the line does not hold three fields
/// - `TeamError::WinsNotANumber` / `TeamError::LossesNotANumber` if a
///   count field is not an integer (wins are checked first)
/// - Any constructor error from [`Team::new`]
///
/// # Example
/// ```
/// use standings_core::record;
///
/// let team = record::parse(Some("Hawks, 10, 2")).expect("valid record");
/// assert_eq!(team.name(), "Hawks");
/// assert_eq!((team.wins(), team.losses()), (10, 2));
/// ```
pub fn parse(raw: Option<&str>) -> Result<Team, TeamError> {
    let raw = raw.ok_or(TeamError::MissingRecord)?;

    let fields = split_fields(raw);
    let Ok([name, wins, losses]) = <[&str; RECORD_FIELD_COUNT]>::try_from(fields.as_slice())
    else {
        tracing::debug!(record = raw, fields = fields.len(), "malformed team record");
        return Err(TeamError::MalformedRecord {
            fields: fields.len(),
        });
    };

    let wins = wins
        .trim()
        .parse::<i32>()
        .map_err(TeamError::WinsNotANumber)?;
    let losses = losses
        .trim()
        .parse::<i32>()
        .map_err(TeamError::LossesNotANumber)?;

    Team::new(name.trim(), wins, losses)
}

/// Split a trimmed line on the delimiter, dropping trailing empty fields.
///
/// `"a,b,c,,"` yields three fields; `",b,c"` keeps its leading empty one.
fn split_fields(raw: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = raw.trim().split(FIELD_DELIMITER).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

impl FromStr for Team {
    type Err = TeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(Some(s))
    }
}
