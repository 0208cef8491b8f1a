//! # Ranking Module
//!
//! Standings order for teams, best first.
//!
//! 1. Higher winning percentage ranks first.
//! 2. On equal percentage, more wins ranks first.
//!
//! Nothing else is consulted: two teams with the same percentage and the
//! same win count are tied, whatever their names or loss counts.

use crate::{Team, TeamError};
use std::cmp::Ordering;

impl Team {
    /// Compare two teams by standing. `Less` means `self` ranks higher.
    ///
    /// This is a total order over teams and can be passed straight to
    /// `sort_by`.
    ///
    /// # Example
    /// ```
    /// use standings_core::Team;
    /// use std::cmp::Ordering;
    ///
    /// let hawks = Team::new("Hawks", 10, 2).expect("valid");
    /// let eagles = Team::new("Eagles", 8, 2).expect("valid");
    /// assert_eq!(hawks.standing_cmp(&eagles), Ordering::Less);
    /// ```
    #[must_use]
    pub fn standing_cmp(&self, other: &Self) -> Ordering {
        // Percentages are never NaN, so total_cmp agrees with numeric order.
        other
            .winning_percentage()
            .total_cmp(&self.winning_percentage())
            .then_with(|| other.wins().cmp(&self.wins()))
    }
}

/// Compare two possibly absent teams by standing.
///
/// # Errors
/// Returns `TeamError::MissingTeam` if either side is `None`.
pub fn compare(a: Option<&Team>, b: Option<&Team>) -> Result<Ordering, TeamError> {
    match (a, b) {
        (Some(a), Some(b)) => Ok(a.standing_cmp(b)),
        _ => Err(TeamError::MissingTeam),
    }
}

/// Sort teams into standings order, best first.
///
/// The sort is stable, so tied teams keep their relative order and sorting
/// an already sorted slice leaves it unchanged.
pub fn sort_standings(teams: &mut [Team]) {
    teams.sort_by(Team::standing_cmp);
}
