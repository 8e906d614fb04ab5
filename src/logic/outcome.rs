//! Match aggregation: round win counts and the final winner.

use crate::logic::rules::evaluate_round;
use crate::models::{GameConfig, Round, Team};
use serde::Serialize;

/// Final-winner decision for a match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalWinner {
    /// Only ever true in multi-round mode.
    pub has_final_winner: bool,
    /// Side at or above the win threshold. Computed even in single-round mode,
    /// where callers should use the round outcome directly instead.
    pub winner: Option<Team>,
}

/// Rounds won by (A, B). Each round is re-evaluated without forcing; undecided rounds count for neither.
pub fn win_counts(rounds: &[Round], config: &GameConfig) -> (u32, u32) {
    rounds.iter().fold((0, 0), |(a, b), r| {
        match evaluate_round(r.score_a, r.score_b, config, false) {
            Some(Team::A) => (a + 1, b),
            Some(Team::B) => (a, b + 1),
            None => (a, b),
        }
    })
}

/// Decide the match from win counts: a side needs a majority of `win_rounds`.
pub fn final_winner(win_counts: (u32, u32), config: &GameConfig) -> FinalWinner {
    let threshold = config.win_threshold();
    let (a, b) = win_counts;

    let winner = if a >= threshold {
        Some(Team::A)
    } else if b >= threshold {
        Some(Team::B)
    } else {
        None
    };

    FinalWinner {
        has_final_winner: config.is_multi_round() && (a >= threshold || b >= threshold),
        winner,
    }
}
