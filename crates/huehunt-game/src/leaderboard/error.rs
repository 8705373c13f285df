use std::fmt;
use std::io;

/// Failure talking to a leaderboard.
#[derive(Debug)]
pub enum LeaderboardError {
    Io(io::Error),
    Json(serde_json::Error),
    /// The service could not be reached or refused the request.
    Unavailable(String),
}

impl fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderboardError::Io(e) => write!(f, "leaderboard storage error: {e}"),
            LeaderboardError::Json(e) => write!(f, "leaderboard data is malformed: {e}"),
            LeaderboardError::Unavailable(msg) => write!(f, "leaderboard unavailable: {msg}"),
        }
    }
}

impl std::error::Error for LeaderboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeaderboardError::Io(e) => Some(e),
            LeaderboardError::Json(e) => Some(e),
            LeaderboardError::Unavailable(_) => None,
        }
    }
}

impl From<io::Error> for LeaderboardError {
    fn from(e: io::Error) -> Self {
        LeaderboardError::Io(e)
    }
}

impl From<serde_json::Error> for LeaderboardError {
    fn from(e: serde_json::Error) -> Self {
        LeaderboardError::Json(e)
    }
}
