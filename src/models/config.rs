//! Match configuration and team display profiles, with input validation.

use crate::models::scoreboard::ScoreboardError;
use serde::{Deserialize, Serialize};

/// Win conditions for every round of a match. Replaced wholesale on settings save,
/// so deserializing requires every field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Points needed to win a round (given `min_diff` margin).
    pub win_score: u32,
    /// Score cap: reaching it ends the round regardless of margin.
    pub max_score: u32,
    /// Required lead once `win_score` is reached.
    pub min_diff: u32,
    /// Rounds in the match (best-of-N). Conventionally odd.
    pub win_rounds: u32,
    /// Points added or removed per tap/swipe.
    pub score_step: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_score: 21,
            max_score: 30,
            min_diff: 2,
            win_rounds: 3,
            score_step: 1,
        }
    }
}

impl GameConfig {
    /// Rounds a side must win to take the match.
    pub fn win_threshold(&self) -> u32 {
        self.win_rounds / 2 + 1
    }

    /// True when the match is played over more than one round.
    pub fn is_multi_round(&self) -> bool {
        self.win_rounds > 1
    }

    /// Check field ranges and parity before the config reaches the engine.
    pub fn validate(&self) -> Result<(), ScoreboardError> {
        let fields = [
            ("winScore", self.win_score),
            ("maxScore", self.max_score),
            ("minDiff", self.min_diff),
            ("winRounds", self.win_rounds),
            ("scoreStep", self.score_step),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| *v == 0) {
            return Err(ScoreboardError::NonPositiveField(*field));
        }
        if self.win_rounds % 2 == 0 {
            return Err(ScoreboardError::EvenWinRounds(self.win_rounds));
        }
        Ok(())
    }
}

/// Longest team name accepted.
pub const MAX_TEAM_NAME_LEN: usize = 50;

/// Display name and colour for one side.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamProfile {
    pub name: String,
    /// `#RRGGBB`.
    pub color: String,
}

impl TeamProfile {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Default profiles for sides A and B.
    pub fn defaults() -> [TeamProfile; 2] {
        [
            TeamProfile::new("Team A", "#2563eb"),
            TeamProfile::new("Team B", "#dc2626"),
        ]
    }

    /// Validate and return a copy with the name trimmed.
    pub fn validated(&self) -> Result<TeamProfile, ScoreboardError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ScoreboardError::EmptyTeamName);
        }
        if self.name.chars().count() > MAX_TEAM_NAME_LEN {
            return Err(ScoreboardError::TeamNameTooLong {
                max: MAX_TEAM_NAME_LEN,
            });
        }
        if !is_hex_color(&self.color) {
            return Err(ScoreboardError::InvalidColor(self.color.clone()));
        }
        Ok(TeamProfile::new(name, self.color.clone()))
    }
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
