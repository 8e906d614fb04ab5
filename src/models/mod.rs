//! Data structures for the scoreboard: rounds, configuration, state container.

mod config;
mod round;
mod scoreboard;

pub use config::{GameConfig, TeamProfile, MAX_TEAM_NAME_LEN};
pub use round::{Round, Team};
pub use scoreboard::{Scoreboard, ScoreboardError, ScoreboardId};
