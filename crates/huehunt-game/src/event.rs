use huehunt_engine::Point;

/// Live notification pushed by the leaderboard collaborator.
///
/// Carries no payload the game needs; any kind means "standings may have changed".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LiveUpdate {
    HighScoreUpdated,
    PlayerRegistered,
}

/// Input routed into the [`GameController`](crate::controller::GameController).
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The player picked a pixel on the wheel.
    Select(Point),
    /// Move on from a won round without waiting for the timer.
    Advance,
    /// Start over after game over.
    Restart,
    /// Change the remembered display name.
    Rename(String),
    Live(LiveUpdate),
}

impl From<LiveUpdate> for GameEvent {
    #[inline]
    fn from(u: LiveUpdate) -> Self {
        GameEvent::Live(u)
    }
}

/// Whether an event changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled.
    Consumed,
    /// Event does not apply in the current phase; nothing changed.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
