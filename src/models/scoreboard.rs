//! Scoreboard state container and ScoreboardError.

use crate::models::config::{GameConfig, TeamProfile};
use crate::models::round::{Round, Team};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors from validation and round-sequence operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScoreboardError {
    /// The match already has a final winner.
    MatchDecided,
    /// The last round has ended; scores can no longer change.
    RoundEnded,
    /// The last round is still in progress.
    RoundInProgress,
    /// All configured rounds have been played.
    NoRoundsLeft,
    /// Bulk edit must provide between 1 and winRounds score pairs.
    WrongNumberOfRounds { max: u32, given: usize },
    /// A configuration field is zero.
    NonPositiveField(&'static str),
    /// winRounds must be odd.
    EvenWinRounds(u32),
    /// Team name is empty or whitespace only.
    EmptyTeamName,
    /// Team name is longer than allowed.
    TeamNameTooLong { max: usize },
    /// Colour is not `#RRGGBB`.
    InvalidColor(String),
}

impl std::fmt::Display for ScoreboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreboardError::MatchDecided => write!(f, "The match already has a winner"),
            ScoreboardError::RoundEnded => write!(f, "The current round has ended"),
            ScoreboardError::RoundInProgress => write!(f, "The current round is still in progress"),
            ScoreboardError::NoRoundsLeft => write!(f, "All rounds have been played"),
            ScoreboardError::WrongNumberOfRounds { max, given } => {
                write!(f, "Expected between 1 and {} rounds (got {})", max, given)
            }
            ScoreboardError::NonPositiveField(field) => {
                write!(f, "{} must be a positive integer", field)
            }
            ScoreboardError::EvenWinRounds(n) => {
                write!(f, "Number of rounds must be odd (got {})", n)
            }
            ScoreboardError::EmptyTeamName => write!(f, "Team name cannot be empty"),
            ScoreboardError::TeamNameTooLong { max } => {
                write!(f, "Team name cannot exceed {} characters", max)
            }
            ScoreboardError::InvalidColor(c) => write!(f, "Invalid colour {:?} (expected #RRGGBB)", c),
        }
    }
}

impl std::error::Error for ScoreboardError {}

/// Unique identifier for a scoreboard.
pub type ScoreboardId = Uuid;

/// Full state of one match. All mutation goes through `crate::logic`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scoreboard {
    pub id: ScoreboardId,
    /// Profiles for side A and side B, in that order.
    pub teams: [TeamProfile; 2],
    pub config: GameConfig,
    /// Never empty; at most `config.win_rounds` long during play.
    pub rounds: Vec<Round>,
    /// Multi-round mode: a round just ended and the next has not been started.
    pub show_round_win: bool,
    pub round_winner: Option<Team>,
    pub created_at: DateTime<Utc>,
}

impl Scoreboard {
    /// New scoreboard with default teams and a single empty round.
    pub fn new(config: GameConfig) -> Self {
        Self::with_teams(TeamProfile::defaults(), config)
    }

    pub fn with_teams(teams: [TeamProfile; 2], config: GameConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            teams,
            config,
            rounds: vec![Round::new()],
            show_round_win: false,
            round_winner: None,
            created_at: Utc::now(),
        }
    }

    /// The round currently being played (or the last one played).
    pub fn last_round(&self) -> &Round {
        // `rounds` is never empty outside of a hand-built Scoreboard.
        const EMPTY: Round = Round {
            score_a: 0,
            score_b: 0,
            has_ended: false,
            forced_winner: None,
        };
        self.rounds.last().unwrap_or(&EMPTY)
    }
}
