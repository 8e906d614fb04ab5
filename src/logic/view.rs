//! Derived state refreshed after every mutation, as served to the UI.

use crate::logic::outcome::win_counts;
use crate::logic::play::match_result;
use crate::logic::rules::round_outcome;
use crate::models::{GameConfig, Round, Scoreboard, ScoreboardId, Team, TeamProfile};
use serde::Serialize;

/// A round together with its outcome, forced or scored (for the round indicator).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    #[serde(flatten)]
    pub round: Round,
    pub outcome: Option<Team>,
}

/// Everything the presentation layer needs to render a scoreboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardView {
    pub id: ScoreboardId,
    pub teams: [TeamProfile; 2],
    pub config: GameConfig,
    pub rounds: Vec<RoundSummary>,
    pub win_counts: (u32, u32),
    pub has_final_winner: bool,
    pub final_winner: Option<Team>,
    /// 1-based index of the first round still in progress, else the number of rounds.
    pub current_round: usize,
    pub last_round: Round,
    /// Outcome of the last round once it has ended, including a forced result.
    /// In single-round mode this is the match result.
    pub winner: Option<Team>,
    pub can_edit_score: bool,
    pub show_round_win: bool,
    pub round_winner: Option<Team>,
}

/// 1-based index of the round being played.
pub fn current_round(rounds: &[Round]) -> usize {
    rounds
        .iter()
        .position(|r| !r.has_ended)
        .map_or(rounds.len(), |idx| idx + 1)
}

/// Scores may change only while the last round runs, the match is open and no round-win notice is up.
pub fn can_edit_score(scoreboard: &Scoreboard) -> bool {
    !scoreboard.last_round().has_ended
        && !match_result(scoreboard).has_final_winner
        && !(scoreboard.config.is_multi_round() && scoreboard.show_round_win)
}

impl ScoreboardView {
    pub fn from_scoreboard(scoreboard: &Scoreboard) -> Self {
        let config = scoreboard.config;
        let last = *scoreboard.last_round();
        let result = match_result(scoreboard);
        let winner = round_outcome(&last, &config).filter(|_| last.has_ended);

        Self {
            id: scoreboard.id,
            teams: scoreboard.teams.clone(),
            config,
            rounds: scoreboard
                .rounds
                .iter()
                .map(|&round| RoundSummary {
                    round,
                    outcome: round_outcome(&round, &config),
                })
                .collect(),
            win_counts: win_counts(&scoreboard.rounds, &config),
            has_final_winner: result.has_final_winner,
            final_winner: result.winner,
            current_round: current_round(&scoreboard.rounds),
            last_round: last,
            winner,
            can_edit_score: can_edit_score(scoreboard),
            show_round_win: scoreboard.show_round_win,
            round_winner: scoreboard.round_winner,
        }
    }
}

impl Scoreboard {
    /// Snapshot of derived state.
    pub fn view(&self) -> ScoreboardView {
        ScoreboardView::from_scoreboard(self)
    }
}
