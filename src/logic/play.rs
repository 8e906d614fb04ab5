//! Round-sequence operations: scoring, forcing, advancing, editing, resetting, swapping.
//!
//! Each operation validates against the current derived state first and leaves the
//! scoreboard untouched when it returns an error.

use crate::logic::outcome::{final_winner, win_counts, FinalWinner};
use crate::logic::rules::{evaluate_round, round_outcome};
use crate::models::{GameConfig, Round, Scoreboard, ScoreboardError, Team, TeamProfile};

/// Final-winner decision over the scoreboard's full round history.
pub fn match_result(scoreboard: &Scoreboard) -> FinalWinner {
    final_winner(win_counts(&scoreboard.rounds, &scoreboard.config), &scoreboard.config)
}

/// Add `delta` (may be negative) to one side of the last round. Scores clamp at 0.
/// Marks the round ended when it produces a winner.
pub fn change_score(scoreboard: &mut Scoreboard, team: Team, delta: i64) -> Result<(), ScoreboardError> {
    if match_result(scoreboard).has_final_winner {
        return Err(ScoreboardError::MatchDecided);
    }
    let config = scoreboard.config;
    let last = scoreboard
        .rounds
        .last_mut()
        .ok_or(ScoreboardError::RoundInProgress)?;
    if last.has_ended {
        return Err(ScoreboardError::RoundEnded);
    }
    last.adjust_score(team, delta);
    if let Some(winner) = evaluate_round(last.score_a, last.score_b, &config, false) {
        last.has_ended = true;
        log::debug!(
            "Round won by {:?} at {}:{}",
            winner,
            last.score_a,
            last.score_b
        );
    }
    refresh_round_win(scoreboard);
    Ok(())
}

/// Add one `score_step` to a side.
pub fn increment_score(scoreboard: &mut Scoreboard, team: Team) -> Result<(), ScoreboardError> {
    let step = i64::from(scoreboard.config.score_step);
    change_score(scoreboard, team, step)
}

/// Remove one `score_step` from a side.
pub fn decrement_score(scoreboard: &mut Scoreboard, team: Team) -> Result<(), ScoreboardError> {
    let step = i64::from(scoreboard.config.score_step);
    change_score(scoreboard, team, -step)
}

/// End the last round now; the higher score takes it (ties go to B).
///
/// The awarded side is kept on the round as `forced_winner` and shown as its outcome.
/// Win counts keep evaluating rounds without forcing, so a round forced below the
/// win conditions counts for neither side.
pub fn force_end_round(scoreboard: &mut Scoreboard) -> Result<Team, ScoreboardError> {
    if match_result(scoreboard).has_final_winner {
        return Err(ScoreboardError::MatchDecided);
    }
    let config = scoreboard.config;
    let last = scoreboard
        .rounds
        .last_mut()
        .ok_or(ScoreboardError::RoundInProgress)?;
    if last.has_ended {
        return Err(ScoreboardError::RoundEnded);
    }
    let forced = evaluate_round(last.score_a, last.score_b, &config, true).unwrap_or(Team::B);
    last.has_ended = true;
    last.forced_winner = Some(forced);
    log::info!(
        "Round force-ended at {}:{}, awarded to {:?}",
        last.score_a,
        last.score_b,
        forced
    );
    refresh_round_win(scoreboard);
    Ok(forced)
}

/// Start the next round. Requires the last round ended, rounds left, and no final winner.
pub fn next_round(scoreboard: &mut Scoreboard) -> Result<(), ScoreboardError> {
    if match_result(scoreboard).has_final_winner {
        return Err(ScoreboardError::MatchDecided);
    }
    if !scoreboard.last_round().has_ended {
        return Err(ScoreboardError::RoundInProgress);
    }
    let max_rounds = scoreboard.config.win_rounds as usize;
    if !scoreboard.config.is_multi_round() || scoreboard.rounds.len() >= max_rounds {
        return Err(ScoreboardError::NoRoundsLeft);
    }
    scoreboard.rounds.push(Round::new());
    scoreboard.show_round_win = false;
    scoreboard.round_winner = None;
    log::debug!("Started round {}", scoreboard.rounds.len());
    Ok(())
}

/// Back to a single empty round.
pub fn reset(scoreboard: &mut Scoreboard) {
    scoreboard.rounds = vec![Round::new()];
    refresh_round_win(scoreboard);
}

/// Replace the whole round history with corrected scores.
///
/// A round is ended if its scores decide it, or if it is not the last one.
pub fn edit_scores(scoreboard: &mut Scoreboard, scores: &[(u32, u32)]) -> Result<(), ScoreboardError> {
    let max = scoreboard.config.win_rounds;
    if scores.is_empty() || scores.len() > max as usize {
        return Err(ScoreboardError::WrongNumberOfRounds {
            max,
            given: scores.len(),
        });
    }
    let config = scoreboard.config;
    let last_idx = scores.len() - 1;
    scoreboard.rounds = scores
        .iter()
        .enumerate()
        .map(|(i, &(a, b))| Round {
            has_ended: evaluate_round(a, b, &config, false).is_some() || i < last_idx,
            ..Round::with_scores(a, b)
        })
        .collect();
    refresh_round_win(scoreboard);
    Ok(())
}

/// Swap team profiles and mirror every round's scores.
pub fn swap_sides(scoreboard: &mut Scoreboard) {
    scoreboard.teams.swap(0, 1);
    for round in &mut scoreboard.rounds {
        *round = round.mirrored();
    }
    refresh_round_win(scoreboard);
}

/// Validate and install new teams and configuration, restarting the match.
pub fn apply_settings(
    scoreboard: &mut Scoreboard,
    teams: &[TeamProfile; 2],
    config: GameConfig,
) -> Result<(), ScoreboardError> {
    config.validate()?;
    let teams = [teams[0].validated()?, teams[1].validated()?];
    scoreboard.teams = teams;
    scoreboard.config = config;
    scoreboard.rounds = vec![Round::new()];
    scoreboard.show_round_win = false;
    scoreboard.round_winner = None;
    log::info!("Scoreboard {} settings updated: {:?}", scoreboard.id, config);
    Ok(())
}

/// Recompute the round-win notice after the round sequence changed (multi-round only).
fn refresh_round_win(scoreboard: &mut Scoreboard) {
    if !scoreboard.config.is_multi_round() {
        return;
    }
    let last = *scoreboard.last_round();
    match round_outcome(&last, &scoreboard.config) {
        Some(team) if last.has_ended && !match_result(scoreboard).has_final_winner => {
            scoreboard.round_winner = Some(team);
            scoreboard.show_round_win = true;
        }
        _ => {
            scoreboard.round_winner = None;
            scoreboard.show_round_win = false;
        }
    }
}
