use std::time::Duration;

use huehunt_color::TargetPolicy;
use huehunt_engine::wheel::{DEFAULT_HIGHLIGHT_THRESHOLD, OverlayStyle};
use serde::{Deserialize, Serialize};

/// Similarity a guess needs to win the round.
pub const DEFAULT_SUCCESS_THRESHOLD: f64 = 90.0;

/// Game tuning.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// changes:
///
/// ```rust
/// use huehunt_game::config::GameConfig;
///
/// let cfg = GameConfig::from_json(r#"{ "disc_size": 400, "target_policy": "full_saturation" }"#).unwrap();
/// assert_eq!(cfg.disc_size, 400);
/// assert_eq!(cfg.success_threshold, 90.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square raster; the disc radius is half of it.
    pub disc_size: u32,
    pub success_threshold: f64,
    pub highlight_threshold: f64,
    pub highlight_stride: u32,
    pub target_policy: TargetPolicy,
    /// Delay before a won round advances on its own. `None` waits for an
    /// explicit advance.
    pub auto_advance_ms: Option<u64>,
    /// How many leaderboard rows to fetch.
    pub leaderboard_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            disc_size: 300,
            success_threshold: DEFAULT_SUCCESS_THRESHOLD,
            highlight_threshold: DEFAULT_HIGHLIGHT_THRESHOLD,
            highlight_stride: 2,
            target_policy: TargetPolicy::default(),
            auto_advance_ms: Some(1500),
            leaderboard_limit: 10,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }

    pub fn disc_size(mut self, side: u32) -> Self {
        self.disc_size = side;
        self
    }

    pub fn success_threshold(mut self, t: f64) -> Self {
        self.success_threshold = t;
        self
    }

    pub fn highlight_threshold(mut self, t: f64) -> Self {
        self.highlight_threshold = t;
        self
    }

    pub fn highlight_stride(mut self, stride: u32) -> Self {
        self.highlight_stride = stride;
        self
    }

    pub fn target_policy(mut self, policy: TargetPolicy) -> Self {
        self.target_policy = policy;
        self
    }

    pub fn auto_advance_ms(mut self, ms: Option<u64>) -> Self {
        self.auto_advance_ms = ms;
        self
    }

    pub fn leaderboard_limit(mut self, n: usize) -> Self {
        self.leaderboard_limit = n;
        self
    }

    #[inline]
    pub fn auto_advance(&self) -> Option<Duration> {
        self.auto_advance_ms.map(Duration::from_millis)
    }

    /// Overlay style with this config's highlight stride.
    pub fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle { highlight_stride: self.highlight_stride.max(1), ..OverlayStyle::default() }
    }
}
