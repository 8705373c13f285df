use huehunt_engine::Overlay;

/// Side effect requested by a [`Session`](crate::session::Session) transition.
///
/// The session itself never touches the raster, the leaderboard or storage;
/// the controller carries these out in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Repaint the plain disc for a fresh round.
    PaintDisc,
    /// Repaint the disc with the result overlay.
    PaintOverlay(Overlay),
    /// The cumulative score is now this value.
    ScoreChanged(u32),
    /// The session ended with this score; report it to the leaderboard.
    SubmitScore(u32),
}
