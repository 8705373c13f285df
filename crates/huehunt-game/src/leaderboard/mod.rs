//! Leaderboard collaborator contract and in-process implementations.
//!
//! The game only ever reads ranked rows and submits final scores. Ranking is
//! the leaderboard's job; callers consume rows as returned.

mod error;
mod file;
mod memory;

use serde::{Deserialize, Serialize};

pub use error::LeaderboardError;
pub use file::FileLeaderboard;
pub use memory::MemoryLeaderboard;

/// One ranked row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub display_name: String,
    pub high_score: u32,
}

/// A final score reported at game over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub player_id: String,
    pub display_name: String,
    pub score: u32,
}

pub trait Leaderboard {
    /// Up to `limit` rows, best score first.
    fn top(&mut self, limit: usize) -> Result<Vec<LeaderboardEntry>, LeaderboardError>;

    /// Records a final score. The leaderboard keeps each player's best.
    fn submit(&mut self, submission: &ScoreSubmission) -> Result<(), LeaderboardError>;
}

impl<L: Leaderboard + ?Sized> Leaderboard for Box<L> {
    fn top(&mut self, limit: usize) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        (**self).top(limit)
    }

    fn submit(&mut self, submission: &ScoreSubmission) -> Result<(), LeaderboardError> {
        (**self).submit(submission)
    }
}
