//! Round evaluation: decide whether a round is over and who took it.

use crate::models::{GameConfig, Round, Team};

/// Outcome of a round from its two scores. `None` means still in progress.
///
/// Checked in order:
/// 1. `force_end`: the higher score wins.
/// 2. Either side at `win_score` with a lead of at least `min_diff`.
/// 3. Either side at `max_score`, whatever the lead.
///
/// Every decision uses a strict `score_a > score_b`, so a tie that reaches a decision
/// (forced, or both sides at the cap) goes to `Team::B`.
pub fn evaluate_round(score_a: u32, score_b: u32, config: &GameConfig, force_end: bool) -> Option<Team> {
    let leader = if score_a > score_b { Team::A } else { Team::B };

    if force_end {
        return Some(leader);
    }

    let reached_win_score = score_a >= config.win_score || score_b >= config.win_score;
    if reached_win_score && score_a.abs_diff(score_b) >= config.min_diff {
        return Some(leader);
    }

    if score_a >= config.max_score || score_b >= config.max_score {
        return Some(leader);
    }

    None
}

/// Outcome shown for a round: the score-based result, or the side it was forced to.
pub fn round_outcome(round: &Round, config: &GameConfig) -> Option<Team> {
    evaluate_round(round.score_a, round.score_b, config, false).or(round.forced_winner)
}
