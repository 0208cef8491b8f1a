//! # standings-core
//!
//! Team records for league standings.
//!
//! A [`Team`] is a name plus a win/loss record, validated once and never
//! mutated. On top of it this crate provides:
//! - the winning percentage (`wins / games played`, `0.0` when unplayed)
//! - the standings order (percentage, then wins, best first)
//! - the one-line `name,wins,losses` text record
//!
//! ## Architectural Constraints
//!
//! - No I/O: callers read lines and hand them to [`record::parse`]
//! - No collections: callers own their teams and sort them in place
//! - Every failure is a [`TeamError`]; [`TeamError::kind`] separates a
//!   malformed input from a bad number
//!
//! ## Example
//!
//! ```
//! use standings_core::{Team, ranking};
//!
//! let mut teams: Vec<Team> = ["Eagles,8,2", "Hawks,10,2", "Owls,0,0"]
//!     .iter()
//!     .map(|line| line.parse::<Team>())
//!     .collect::<Result<_, _>>()
//!     .expect("valid records");
//!
//! ranking::sort_standings(&mut teams);
//! assert_eq!(teams[0].to_string(), "The Hawks with 10 wins and 2 losses");
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod primitives;
pub mod ranking;
pub mod record;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use types::{ErrorKind, Team, TeamError};
