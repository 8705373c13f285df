/// Overlay paint layer. Later variants are painted on top of earlier ones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Layer {
    /// Translucent fill over the high-similarity region.
    Highlight,
    /// Ring at the target's position on the wheel.
    TargetMarker,
    /// Ring at the player's selection.
    ClickMarker,
}
