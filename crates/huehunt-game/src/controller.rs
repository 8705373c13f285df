//! Drives a [`Session`] and carries out its effects.
//!
//! The controller owns the raster the player clicks on, the leaderboard and
//! profile collaborators, and the auto-advance deadline. Collaborator failures
//! are logged and swallowed: the game keeps whatever state it had.

use std::sync::mpsc::Receiver;
use std::time::Instant;

use huehunt_color::TargetColor;
use huehunt_engine::wheel::paint_disc;
use huehunt_engine::{Raster, RasterError, WheelRenderer};
use rand::Rng;

use crate::config::GameConfig;
use crate::effect::Effect;
use crate::event::{EventResult, GameEvent, LiveUpdate};
use crate::leaderboard::{Leaderboard, LeaderboardEntry, ScoreSubmission};
use crate::profile::{DEFAULT_DISPLAY_NAME, Profile, ProfileStore};
use crate::session::{Phase, Session, Transition};

pub struct GameController<L, P, R> {
    config: GameConfig,
    renderer: WheelRenderer,
    raster: Raster,
    session: Session,
    leaderboard: L,
    profiles: P,
    profile: Profile,
    /// False when the stored profile could not be read; the store is then
    /// never written so the original file survives.
    persist_profile: bool,
    standings: Vec<LeaderboardEntry>,
    rng: R,
    advance_at: Option<Instant>,
}

impl<L: Leaderboard, P: ProfileStore, R: Rng> GameController<L, P, R> {
    /// Loads (or creates) the player profile, draws the first target, paints
    /// the disc and fetches the standings.
    pub fn new(config: GameConfig, leaderboard: L, profiles: P, mut rng: R) -> Self {
        let session = Session::new(&config, &mut rng);
        Self::start(config, leaderboard, profiles, rng, session)
    }

    /// Like [`new`](Self::new), but the first round hunts `target`.
    pub fn with_target(config: GameConfig, leaderboard: L, profiles: P, rng: R, target: TargetColor) -> Self {
        let session = Session::with_target(&config, target);
        Self::start(config, leaderboard, profiles, rng, session)
    }

    fn start(config: GameConfig, leaderboard: L, mut profiles: P, mut rng: R, session: Session) -> Self {
        let (profile, persist_profile) = match profiles.load() {
            Ok(Some(profile)) => {
                log::info!("welcome back, {} (best {})", profile.display_name, profile.high_score);
                (profile, true)
            }
            Ok(None) => {
                let profile = Profile::generate(&mut rng, DEFAULT_DISPLAY_NAME);
                log::info!("new player {}", profile.player_id);
                if let Err(e) = profiles.save(&profile) {
                    log::warn!("could not store new profile: {e}");
                }
                (profile, true)
            }
            Err(e) => {
                // Keep the unreadable file as-is; this run plays anonymously.
                log::warn!("could not load profile, playing without saving: {e}");
                (Profile::generate(&mut rng, DEFAULT_DISPLAY_NAME), false)
            }
        };

        let renderer = WheelRenderer::with_style(config.overlay_style());
        let raster = renderer.render_disc(config.disc_size);

        let mut controller = Self {
            config,
            renderer,
            raster,
            session,
            leaderboard,
            profiles,
            profile,
            persist_profile,
            standings: Vec::new(),
            rng,
            advance_at: None,
        };
        controller.refresh_standings();
        controller
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The raster currently shown to the player.
    #[inline]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    #[inline]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Last successfully fetched leaderboard rows.
    #[inline]
    pub fn standings(&self) -> &[LeaderboardEntry] {
        &self.standings
    }

    /// When a won round will advance on its own, if scheduled.
    #[inline]
    pub fn advance_at(&self) -> Option<Instant> {
        self.advance_at
    }

    #[inline]
    pub fn leaderboard(&self) -> &L {
        &self.leaderboard
    }

    #[inline]
    pub fn leaderboard_mut(&mut self) -> &mut L {
        &mut self.leaderboard
    }

    #[inline]
    pub fn profiles(&self) -> &P {
        &self.profiles
    }

    // ── events ────────────────────────────────────────────────────────────

    pub fn handle(&mut self, event: GameEvent) -> Result<EventResult, RasterError> {
        self.handle_at(event, Instant::now())
    }

    /// Handles `event` as if it arrived at `now`.
    ///
    /// Only a selection outside the raster fails; everything else either
    /// applies or is [`Ignored`](EventResult::Ignored).
    pub fn handle_at(&mut self, event: GameEvent, now: Instant) -> Result<EventResult, RasterError> {
        let result = match event {
            GameEvent::Select(point) => {
                let t = self.session.select(point, &self.raster)?;
                let result = self.apply(t);
                if let (Phase::Resolved(_), Some(delay)) = (self.session.phase(), self.config.auto_advance()) {
                    if result.is_consumed() {
                        self.advance_at = Some(now + delay);
                    }
                }
                result
            }
            GameEvent::Advance => self.advance(),
            GameEvent::Restart => {
                let t = self.session.restart(&mut self.rng);
                self.apply(t)
            }
            GameEvent::Rename(name) => self.rename(name),
            GameEvent::Live(update) => self.on_live(update),
        };
        Ok(result)
    }

    /// Fires the auto-advance once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> EventResult {
        match self.advance_at {
            Some(at) if now >= at => self.advance(),
            _ => EventResult::Ignored,
        }
    }

    /// Feeds every pending live update into the controller; returns how many
    /// were handled.
    pub fn pump(&mut self, updates: &Receiver<LiveUpdate>) -> usize {
        let mut n = 0;
        for update in updates.try_iter() {
            self.on_live(update);
            n += 1;
        }
        n
    }

    /// Advances a won round to `target` instead of a random one.
    pub fn advance_to(&mut self, target: TargetColor) -> EventResult {
        let t = self.session.advance_to(target);
        if t.result.is_consumed() {
            self.advance_at = None;
        }
        self.apply(t)
    }

    /// Restarts after game over hunting `target`.
    pub fn restart_with(&mut self, target: TargetColor) -> EventResult {
        let t = self.session.restart_with(target);
        self.apply(t)
    }

    fn advance(&mut self) -> EventResult {
        let t = self.session.advance(&mut self.rng);
        if t.result.is_consumed() {
            self.advance_at = None;
        }
        self.apply(t)
    }

    fn rename(&mut self, name: String) -> EventResult {
        let name = name.trim();
        if name.is_empty() || name == self.profile.display_name {
            return EventResult::Ignored;
        }
        log::info!("{} is now {name}", self.profile.display_name);
        self.profile.display_name = name.to_owned();
        self.save_profile();
        EventResult::Consumed
    }

    fn on_live(&mut self, update: LiveUpdate) -> EventResult {
        log::debug!("live update: {update:?}");
        self.refresh_standings();
        EventResult::Consumed
    }

    // ── effects ───────────────────────────────────────────────────────────

    fn apply(&mut self, transition: Transition) -> EventResult {
        for effect in transition.effects {
            match effect {
                Effect::PaintDisc => paint_disc(&mut self.raster),
                Effect::PaintOverlay(overlay) => self.renderer.render_overlay(&mut self.raster, &overlay),
                Effect::ScoreChanged(score) => {
                    if score > self.profile.high_score {
                        self.profile.high_score = score;
                        self.save_profile();
                    }
                }
                Effect::SubmitScore(score) => self.submit(score),
            }
        }
        transition.result
    }

    fn submit(&mut self, score: u32) {
        let submission = ScoreSubmission {
            player_id: self.profile.player_id.clone(),
            display_name: self.profile.display_name.clone(),
            score,
        };
        match self.leaderboard.submit(&submission) {
            Ok(()) => self.refresh_standings(),
            Err(e) => log::warn!("score {score} not submitted: {e}"),
        }
    }

    fn refresh_standings(&mut self) {
        match self.leaderboard.top(self.config.leaderboard_limit) {
            Ok(rows) => self.standings = rows,
            Err(e) => log::warn!("leaderboard unavailable, keeping {} rows: {e}", self.standings.len()),
        }
    }

    fn save_profile(&mut self) {
        if !self.persist_profile {
            return;
        }
        if let Err(e) = self.profiles.save(&self.profile) {
            log::warn!("profile not saved: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use huehunt_engine::{Point, render_disc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::leaderboard::{LeaderboardError, MemoryLeaderboard};
    use crate::profile::MemoryProfileStore;

    const RIM: Point = Point::new(299, 150);
    const CENTER: Point = Point::new(150, 150);

    fn red() -> TargetColor {
        TargetColor::on_wheel(0.0, 1.0)
    }

    fn game(config: GameConfig) -> GameController<MemoryLeaderboard, MemoryProfileStore, StdRng> {
        GameController::with_target(
            config,
            MemoryLeaderboard::new(),
            MemoryProfileStore::new(),
            StdRng::seed_from_u64(3),
            red(),
        )
    }

    /// Serves rows until told to fail, then refuses every call.
    struct FlakyLeaderboard {
        inner: MemoryLeaderboard,
        down: bool,
    }

    impl Leaderboard for FlakyLeaderboard {
        fn top(&mut self, limit: usize) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
            if self.down {
                return Err(LeaderboardError::Unavailable("offline".into()));
            }
            self.inner.top(limit)
        }

        fn submit(&mut self, s: &ScoreSubmission) -> Result<(), LeaderboardError> {
            if self.down {
                return Err(LeaderboardError::Unavailable("offline".into()));
            }
            self.inner.submit(s)
        }
    }

    // ── startup ───────────────────────────────────────────────────────────

    #[test]
    fn first_run_creates_and_stores_profile() {
        let g = game(GameConfig::default());
        assert_eq!(g.profile().display_name, DEFAULT_DISPLAY_NAME);
        assert_eq!(g.profile().player_id.len(), 16);
        assert_eq!(g.profiles().profile(), Some(g.profile()));
        assert_eq!(*g.raster(), render_disc(300));
    }

    #[test]
    fn stored_profile_is_reused() {
        let known = Profile { player_id: "feedfacecafebeef".into(), display_name: "Ada".into(), high_score: 7 };
        let g = GameController::new(
            GameConfig::default(),
            MemoryLeaderboard::new(),
            MemoryProfileStore::with_profile(known.clone()),
            StdRng::seed_from_u64(0),
        );
        assert_eq!(*g.profile(), known);
        assert_eq!(g.profiles().saves(), 0);
    }

    // ── rounds ────────────────────────────────────────────────────────────

    #[test]
    fn win_paints_overlay_and_schedules_advance() {
        let mut g = game(GameConfig::default());
        let now = Instant::now();
        assert!(g.handle_at(GameEvent::Select(RIM), now).unwrap().is_consumed());

        assert_eq!(g.session().score(), 1);
        assert_ne!(*g.raster(), render_disc(300));
        assert_eq!(g.advance_at(), Some(now + Duration::from_millis(1500)));
        assert_eq!(g.profile().high_score, 1);

        assert_eq!(g.poll(now + Duration::from_millis(1000)), EventResult::Ignored);
        assert_eq!(g.poll(now + Duration::from_millis(1500)), EventResult::Consumed);
        assert_eq!(*g.session().phase(), Phase::AwaitingGuess);
        assert_eq!(*g.raster(), render_disc(300));
        assert_eq!(g.advance_at(), None);
    }

    #[test]
    fn manual_advance_cancels_timer() {
        let mut g = game(GameConfig::default().auto_advance_ms(None));
        g.handle(GameEvent::Select(RIM)).unwrap();
        assert_eq!(g.advance_at(), None);
        assert!(g.handle(GameEvent::Advance).unwrap().is_consumed());
        assert_eq!(g.session().round(), 2);
    }

    #[test]
    fn loss_submits_and_refreshes_standings() {
        let mut g = game(GameConfig::default());
        g.handle(GameEvent::Select(RIM)).unwrap();
        g.advance_to(red());
        g.handle(GameEvent::Select(CENTER)).unwrap();

        assert!(g.session().is_over());
        assert_eq!(g.standings(), [LeaderboardEntry { display_name: DEFAULT_DISPLAY_NAME.into(), high_score: 1 }]);
        assert_eq!(g.advance_at(), None);
    }

    #[test]
    fn restart_resets_score() {
        let mut g = game(GameConfig::default());
        g.handle(GameEvent::Select(RIM)).unwrap();
        g.advance_to(red());
        g.handle(GameEvent::Select(CENTER)).unwrap();

        assert!(g.handle(GameEvent::Restart).unwrap().is_consumed());
        assert_eq!(g.session().score(), 0);
        assert!(!g.session().is_over());
        assert_eq!(g.profile().high_score, 1);
    }

    #[test]
    fn out_of_bounds_select_is_an_error() {
        let mut g = game(GameConfig::default());
        assert!(g.handle(GameEvent::Select(Point::new(0, 300))).is_err());
        assert_eq!(*g.session().phase(), Phase::AwaitingGuess);
    }

    // ── collaborators ─────────────────────────────────────────────────────

    #[test]
    fn failing_leaderboard_keeps_standings() {
        let mut inner = MemoryLeaderboard::new();
        inner
            .submit(&ScoreSubmission { player_id: "x".into(), display_name: "Xi".into(), score: 4 })
            .unwrap();
        let mut g = GameController::with_target(
            GameConfig::default(),
            FlakyLeaderboard { inner, down: false },
            MemoryProfileStore::new(),
            StdRng::seed_from_u64(1),
            red(),
        );
        let before = g.standings().to_vec();
        assert_eq!(before.len(), 1);

        g.leaderboard_mut().down = true;
        g.handle(GameEvent::Select(CENTER)).unwrap();
        g.handle(GameEvent::Live(LiveUpdate::HighScoreUpdated)).unwrap();

        assert!(g.session().is_over());
        assert_eq!(g.standings(), before.as_slice());
    }

    #[test]
    fn live_updates_trigger_requery() {
        let mut board = MemoryLeaderboard::new();
        let rx = board.subscribe();
        let mut g = GameController::with_target(
            GameConfig::default(),
            board,
            MemoryProfileStore::new(),
            StdRng::seed_from_u64(2),
            red(),
        );
        assert!(g.standings().is_empty());

        // Someone else's score lands on the shared board.
        g.leaderboard_mut()
            .submit(&ScoreSubmission { player_id: "z".into(), display_name: "Zed".into(), score: 9 })
            .unwrap();
        assert!(g.standings().is_empty());

        assert_eq!(g.pump(&rx), 1);
        assert_eq!(g.standings()[0].display_name, "Zed");
    }

    #[test]
    fn rename_saves_profile_and_is_used_on_submit() {
        let mut g = game(GameConfig::default());
        let saves = g.profiles().saves();
        assert!(g.handle(GameEvent::Rename("  Ada ".into())).unwrap().is_consumed());
        assert_eq!(g.profile().display_name, "Ada");
        assert_eq!(g.profiles().saves(), saves + 1);

        assert_eq!(g.handle(GameEvent::Rename("Ada".into())).unwrap(), EventResult::Ignored);
        assert_eq!(g.handle(GameEvent::Rename("   ".into())).unwrap(), EventResult::Ignored);

        g.handle(GameEvent::Select(CENTER)).unwrap();
        assert_eq!(g.standings()[0].display_name, "Ada");
    }

    #[test]
    fn high_score_is_saved_only_when_improved() {
        let known = Profile { player_id: "0000000000000001".into(), display_name: "Bo".into(), high_score: 5 };
        let mut g = GameController::with_target(
            GameConfig::default(),
            MemoryLeaderboard::new(),
            MemoryProfileStore::with_profile(known),
            StdRng::seed_from_u64(4),
            red(),
        );
        g.handle(GameEvent::Select(RIM)).unwrap();
        assert_eq!(g.profile().high_score, 5);
        assert_eq!(g.profiles().saves(), 0);
    }
}
