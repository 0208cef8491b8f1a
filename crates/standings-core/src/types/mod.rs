//! # Core Type Definitions
//!
//! This module contains the value types of the standings core:
//! - The team record (`Team`)
//! - Error types (`TeamError`, `ErrorKind`)
//!
//! ## Immutability
//!
//! A `Team` is validated once, at construction, and has no mutators.
//! Every path that produces a `Team` (direct construction, text records,
//! deserialization) goes through the same checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

// =============================================================================
// TEAM
// =============================================================================

/// A team's name and win/loss record.
///
/// # Invariants
/// - A name is present (it may be empty)
/// - Wins and losses are non-negative
/// - Fields never change after construction
///
/// Equality is structural over all three fields. Ranking order is a
/// separate relation, see [`Team::standing_cmp`].
///
/// # Example
/// ```
/// use standings_core::Team;
///
/// let team = Team::new("Hawks", 10, 2).expect("valid team");
/// assert_eq!(team.wins(), 10);
/// assert_eq!(team.to_string(), "The Hawks with 10 wins and 2 losses");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTeam")]
pub struct Team {
    name: String,
    wins: u32,
    losses: u32,
}

impl Team {
    /// Create a team from a name and signed win/loss counts.
    ///
    /// # Errors
    /// - `TeamError::NegativeWins` if `wins < 0`
    /// - `TeamError::NegativeLosses` if `losses < 0`
    pub fn new(name: impl Into<String>, wins: i32, losses: i32) -> Result<Self, TeamError> {
        Self::from_parts(Some(name.into()), wins, losses)
    }

    /// Create a team from a possibly absent name.
    ///
    /// This is the single validating constructor; every other way of
    /// building a `Team` ends up here. Checks run name, wins, losses and
    /// the first failure is returned.
    ///
    /// # Errors
    /// - `TeamError::MissingName` if `name` is `None`
    /// - `TeamError::NegativeWins` if `wins < 0`
    /// - `TeamError::NegativeLosses` if `losses < 0`
    pub fn from_parts(name: Option<String>, wins: i32, losses: i32) -> Result<Self, TeamError> {
        Self::validate(name, wins, losses)
            .inspect_err(|error| tracing::debug!(%error, wins, losses, "team rejected"))
    }

    fn validate(name: Option<String>, wins: i32, losses: i32) -> Result<Self, TeamError> {
        let name = name.ok_or(TeamError::MissingName)?;
        let wins = u32::try_from(wins).map_err(|_| TeamError::NegativeWins(wins))?;
        let losses = u32::try_from(losses).map_err(|_| TeamError::NegativeLosses(losses))?;

        Ok(Self { name, wins, losses })
    }

    /// The team's name. May be empty.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of games won.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Number of games lost.
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    /// Total games played. Cannot overflow: both counts fit in `u32`.
    #[must_use]
    pub const fn games_played(&self) -> u64 {
        self.wins as u64 + self.losses as u64
    }

    /// Ratio of games won to games played, in `[0.0, 1.0]`.
    ///
    /// A team that has not played is at exactly `0.0`.
    #[must_use]
    #[allow(clippy::float_arithmetic, clippy::cast_precision_loss)]
    pub fn winning_percentage(&self) -> f64 {
        let played = self.games_played();
        if played == 0 {
            return 0.0;
        }

        f64::from(self.wins) / played as f64
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {} with {} wins and {} losses",
            self.name, self.wins, self.losses
        )
    }
}

/// Unvalidated wire shape of a team. `name` may be `null` or missing.
#[derive(Deserialize)]
struct RawTeam {
    name: Option<String>,
    wins: i32,
    losses: i32,
}

impl TryFrom<RawTeam> for Team {
    type Error = TeamError;

    fn try_from(raw: RawTeam) -> Result<Self, Self::Error> {
        Self::from_parts(raw.name, raw.wins, raw.losses)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Broad cause of a [`TeamError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing input, a negative count, or a record of the wrong shape.
    InvalidArgument,
    /// A count field that is not an integer.
    NumberFormat,
}

/// Errors raised while building, parsing or comparing teams.
///
/// - No silent failures
/// - Every variant maps to exactly one [`ErrorKind`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    /// No name was supplied.
    #[error("Invalid name")]
    MissingName,

    /// The win count is negative.
    #[error("Wins must be positive")]
    NegativeWins(i32),

    /// The loss count is negative.
    #[error("Losses must be positive")]
    NegativeLosses(i32),

    /// A comparison was asked for with a missing operand.
    #[error("Invalid team")]
    MissingTeam,

    /// No text record was supplied.
    #[error("Invalid team")]
    MissingRecord,

    /// The text record does not split into exactly three fields.
    #[error("Invalid team read")]
    MalformedRecord { fields: usize },

    /// The wins field is not an integer.
    #[error("Wins must be a number")]
    WinsNotANumber(#[source] ParseIntError),

    /// The losses field is not an integer.
    #[error("Losses must be a number")]
    LossesNotANumber(#[source] ParseIntError),
}

impl TeamError {
    /// Classify this error so callers can tell a bad shape from a bad number.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::WinsNotANumber(_) | Self::LossesNotANumber(_) => ErrorKind::NumberFormat,
            Self::MissingName
            | Self::NegativeWins(_)
            | Self::NegativeLosses(_)
            | Self::MissingTeam
            | Self::MissingRecord
            | Self::MalformedRecord { .. } => ErrorKind::InvalidArgument,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
