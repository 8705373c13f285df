//! huehunt game layer: rounds, scoring and collaborators on top of
//! `huehunt-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use huehunt_game::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut game = GameController::new(
//!     GameConfig::default(),
//!     MemoryLeaderboard::new(),
//!     MemoryProfileStore::new(),
//!     StdRng::from_entropy(),
//! );
//! println!("find {} ({})", game.session().target().hex(), game.session().target().label());
//! game.handle(GameEvent::Select(Point::new(299, 150)))?;
//! ```
//!
//! A [`Session`](session::Session) only changes through its transition
//! methods, each of which returns the [`Effect`](effect::Effect)s the
//! [`GameController`](controller::GameController) must carry out.

pub mod config;
pub mod controller;
pub mod effect;
pub mod event;
pub mod leaderboard;
pub mod profile;
pub mod session;

/// Everything a front end needs.
pub mod prelude {
    pub use crate::config::GameConfig;
    pub use crate::controller::GameController;
    pub use crate::effect::Effect;
    pub use crate::event::{EventResult, GameEvent, LiveUpdate};
    pub use crate::leaderboard::{
        FileLeaderboard, Leaderboard, LeaderboardEntry, LeaderboardError, MemoryLeaderboard,
        ScoreSubmission,
    };
    pub use crate::profile::{JsonProfileStore, MemoryProfileStore, Profile, ProfileStore, StoreError};
    pub use crate::session::{Guess, Outcome, Phase, Session, Transition};

    pub use huehunt_color::{Rgb, TargetColor, TargetPolicy};
    pub use huehunt_engine::{Point, Raster, RasterError};
}
