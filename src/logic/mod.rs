//! Scoreboard business logic: round rules, match outcome, play operations, derived view.

mod outcome;
mod play;
mod rules;
mod view;

pub use outcome::{final_winner, win_counts, FinalWinner};
pub use play::{
    apply_settings, change_score, decrement_score, edit_scores, force_end_round,
    increment_score, match_result, next_round, reset, swap_sides,
};
pub use rules::{evaluate_round, round_outcome};
pub use view::{can_edit_score, current_round, RoundSummary, ScoreboardView};
