//! Team side and Round records.

use serde::{Deserialize, Serialize};

/// Which side of the scoreboard won (a round or the match).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    A,
    B,
}

impl Team {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

/// One game within a match: two scores and whether it is over.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    #[serde(rename = "a")]
    pub score_a: u32,
    #[serde(rename = "b")]
    pub score_b: u32,
    /// Set once the round outcome is decided (or forced); only cleared by replacing the sequence.
    pub has_ended: bool,
    /// Side awarded the round by a manual force-end. Not used for win counts.
    #[serde(default)]
    pub forced_winner: Option<Team>,
}

impl Round {
    /// A fresh round at 0:0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scores(score_a: u32, score_b: u32) -> Self {
        Self {
            score_a,
            score_b,
            ..Self::default()
        }
    }

    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::A => self.score_a,
            Team::B => self.score_b,
        }
    }

    /// Apply a signed delta to one side, clamping at zero.
    pub fn adjust_score(&mut self, team: Team, delta: i64) {
        let updated = i64::from(self.score(team)).saturating_add(delta).clamp(0, i64::from(u32::MAX)) as u32;
        match team {
            Team::A => self.score_a = updated,
            Team::B => self.score_b = updated,
        }
    }

    /// Same round seen from the other end of the court.
    pub fn mirrored(&self) -> Self {
        Self {
            score_a: self.score_b,
            score_b: self.score_a,
            has_ended: self.has_ended,
            forced_winner: self.forced_winner.map(Team::opponent),
        }
    }
}
