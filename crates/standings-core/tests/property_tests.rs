//! # Property-Based Tests
//!
//! Invariants of the winning percentage, the standings order and the
//! text record, checked with proptest.

#![allow(clippy::float_arithmetic)]

use proptest::collection::vec;
use proptest::prelude::*;
use standings_core::{ErrorKind, Team, ranking};
use std::cmp::Ordering;

/// Any valid team. Names avoid commas so they can be written as records.
fn any_team() -> impl Strategy<Value = Team> {
    ("[A-Za-z][A-Za-z ]{0,11}[A-Za-z]", 0i32..200, 0i32..200)
        .prop_map(|(name, wins, losses)| Team::new(name, wins, losses).expect("valid team"))
}

proptest! {
    /// Percentage is wins over games played, or zero when unplayed.
    #[test]
    fn percentage_matches_formula(wins in 0i32..100_000, losses in 0i32..100_000) {
        let team = Team::new("Hawks", wins, losses).expect("valid");
        let percentage = team.winning_percentage();

        if wins == 0 && losses == 0 {
            prop_assert_eq!(percentage, 0.0);
        } else {
            prop_assert_eq!(percentage, f64::from(wins) / (f64::from(wins) + f64::from(losses)));
        }
        prop_assert!((0.0..=1.0).contains(&percentage));
    }

    /// Negative counts never construct.
    #[test]
    fn negative_counts_rejected(count in i32::MIN..0) {
        prop_assert!(Team::new("Hawks", count, 0).is_err());
        prop_assert!(Team::new("Hawks", 0, count).is_err());
    }

    /// Comparison is reflexive and antisymmetric.
    #[test]
    fn order_is_antisymmetric(a in any_team(), b in any_team()) {
        prop_assert_eq!(a.standing_cmp(&a), Ordering::Equal);
        prop_assert_eq!(a.standing_cmp(&b), b.standing_cmp(&a).reverse());
    }

    /// Comparison is transitive.
    #[test]
    fn order_is_transitive(a in any_team(), b in any_team(), c in any_team()) {
        if a.standing_cmp(&b) != Ordering::Greater && b.standing_cmp(&c) != Ordering::Greater {
            prop_assert_ne!(a.standing_cmp(&c), Ordering::Greater);
        }
    }

    /// Ties happen exactly when percentage and wins both match.
    #[test]
    fn tie_means_same_percentage_and_wins(a in any_team(), b in any_team()) {
        let tied = a.standing_cmp(&b) == Ordering::Equal;
        let same = a.winning_percentage() == b.winning_percentage() && a.wins() == b.wins();
        prop_assert_eq!(tied, same);
    }

    /// Sorting is idempotent and leaves every neighbour pair in order.
    #[test]
    fn sort_is_idempotent(mut teams in vec(any_team(), 0..40)) {
        ranking::sort_standings(&mut teams);
        let sorted = teams.clone();
        ranking::sort_standings(&mut teams);

        prop_assert_eq!(&teams, &sorted);
        for pair in teams.windows(2) {
            prop_assert_ne!(pair[0].standing_cmp(&pair[1]), Ordering::Greater);
        }
    }

    /// A team written as `name,wins,losses` parses back to itself.
    #[test]
    fn record_line_parses(team in any_team(), pad in " {0,3}") {
        let line = format!(
            "{pad}{}{pad},{pad}{}{pad},{pad}{}{pad}",
            team.name(),
            team.wins(),
            team.losses()
        );
        let parsed: Team = line.parse().expect("valid record");
        prop_assert_eq!(parsed, team);
    }

    /// Non-numeric wins are a number format error whatever the losses hold.
    #[test]
    fn non_numeric_wins_is_number_format(wins in "[a-z]{1,8}", losses in ".{0,8}") {
        prop_assume!(!losses.contains(','));
        let line = format!("Hawks,{wins},{losses}x");
        let error = line.parse::<Team>().expect_err("bad wins");
        prop_assert_eq!(error.kind(), ErrorKind::NumberFormat);
    }
}
