//! Two-team scoreboard web app: library with models, rules engine, settings storage and HTTP API.

pub mod api;
pub mod logic;
pub mod models;
pub mod settings;

pub use logic::{
    apply_settings, can_edit_score, change_score, current_round, decrement_score, edit_scores,
    evaluate_round, final_winner, force_end_round, increment_score, match_result, next_round,
    reset, round_outcome, swap_sides, win_counts, FinalWinner, RoundSummary, ScoreboardView,
};
pub use models::{
    GameConfig, Round, Scoreboard, ScoreboardError, ScoreboardId, Team, TeamProfile,
    MAX_TEAM_NAME_LEN,
};
pub use settings::{ConfigStore, SettingsError};
