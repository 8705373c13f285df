//! Per-session round state machine.
//!
//! ```text
//! AwaitingGuess ──hit──▶ Resolved ──advance──▶ AwaitingGuess
//!       │
//!       └──miss──▶ GameOver ──restart──▶ AwaitingGuess (score = 0)
//! ```

use huehunt_color::{Rgb, TargetColor, TargetPolicy, similarity};
use huehunt_engine::wheel::DiscGeometry;
use huehunt_engine::{Overlay, Point, Raster, RasterError};
use rand::Rng;

use crate::config::GameConfig;
use crate::effect::Effect;
use crate::event::EventResult;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// A resolved selection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Guess {
    pub point: Point,
    pub color: Rgb,
    pub similarity: f64,
    pub outcome: Outcome,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Phase {
    /// Waiting for exactly one selection.
    AwaitingGuess,
    /// The round was won; waiting to advance.
    Resolved(Guess),
    /// A round was lost. Selections are frozen until restart.
    GameOver(Guess),
}

/// Result of a transition: whether it applied, and what the controller must do.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub result: EventResult,
    pub effects: Vec<Effect>,
}

impl Transition {
    #[inline]
    fn consumed(effects: Vec<Effect>) -> Self {
        Self { result: EventResult::Consumed, effects }
    }

    #[inline]
    fn ignored() -> Self {
        Self { result: EventResult::Ignored, effects: Vec::new() }
    }
}

/// One player's run of rounds.
///
/// Always holds a target: the first one is drawn on construction and every
/// later one on advance or restart.
#[derive(Debug, Clone)]
pub struct Session {
    success_threshold: f64,
    highlight_threshold: f64,
    policy: TargetPolicy,
    target: TargetColor,
    phase: Phase,
    score: u32,
    round: u32,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let target = TargetColor::random(config.target_policy, rng);
        Self::with_target(config, target)
    }

    /// A session whose first round hunts `target`.
    pub fn with_target(config: &GameConfig, target: TargetColor) -> Self {
        log::debug!("session started, target {}", target.hex());
        Self {
            success_threshold: config.success_threshold,
            highlight_threshold: config.highlight_threshold,
            policy: config.target_policy,
            target,
            phase: Phase::AwaitingGuess,
            score: 0,
            round: 1,
        }
    }

    #[inline]
    pub fn target(&self) -> &TargetColor {
        &self.target
    }

    #[inline]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// 1-based round counter within the current run.
    #[inline]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// The last resolved guess of this round, if any.
    pub fn last_guess(&self) -> Option<&Guess> {
        match &self.phase {
            Phase::AwaitingGuess => None,
            Phase::Resolved(g) | Phase::GameOver(g) => Some(g),
        }
    }

    /// Overlay for the current state: target marker plus the click, once made.
    pub fn overlay(&self) -> Overlay {
        Overlay {
            target: self.target.rgb(),
            click: self.last_guess().map(|g| g.point),
            highlight_threshold: self.highlight_threshold,
        }
    }

    /// Resolves a selection against the disc in `raster`.
    ///
    /// Ignored outside `AwaitingGuess` and for pixels off the disc. A point
    /// outside the raster is an error.
    pub fn select(&mut self, point: Point, raster: &Raster) -> Result<Transition, RasterError> {
        if self.phase != Phase::AwaitingGuess {
            log::debug!("selection {point} ignored: round already resolved");
            return Ok(Transition::ignored());
        }

        let color = raster.read_pixel(point)?;
        if !DiscGeometry::for_side(raster.side()).contains(point) {
            log::debug!("selection {point} ignored: off the disc");
            return Ok(Transition::ignored());
        }

        let score = similarity(color, self.target.rgb());
        let outcome = if score >= self.success_threshold { Outcome::Success } else { Outcome::Failure };
        let guess = Guess { point, color, similarity: score, outcome };

        let effects = match outcome {
            Outcome::Success => {
                self.score += 1;
                self.phase = Phase::Resolved(guess);
                log::info!(
                    "round {} won: {} vs {} ({score:.1}%), score {}",
                    self.round,
                    color,
                    self.target.hex(),
                    self.score
                );
                vec![Effect::PaintOverlay(self.overlay()), Effect::ScoreChanged(self.score)]
            }
            Outcome::Failure => {
                self.phase = Phase::GameOver(guess);
                log::info!(
                    "round {} lost: {} vs {} ({score:.1}%), final score {}",
                    self.round,
                    color,
                    self.target.hex(),
                    self.score
                );
                vec![Effect::PaintOverlay(self.overlay()), Effect::SubmitScore(self.score)]
            }
        };

        Ok(Transition::consumed(effects))
    }

    /// `Resolved → AwaitingGuess` with a freshly drawn target.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Transition {
        if !matches!(self.phase, Phase::Resolved(_)) {
            return Transition::ignored();
        }
        self.advance_to(TargetColor::random(self.policy, rng))
    }

    /// `Resolved → AwaitingGuess` hunting `target`.
    pub fn advance_to(&mut self, target: TargetColor) -> Transition {
        if !matches!(self.phase, Phase::Resolved(_)) {
            return Transition::ignored();
        }
        self.round += 1;
        self.begin_round(target);
        Transition::consumed(vec![Effect::PaintDisc])
    }

    /// `GameOver → AwaitingGuess`, score reset to 0, fresh target.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Transition {
        if !self.is_over() {
            return Transition::ignored();
        }
        self.restart_with(TargetColor::random(self.policy, rng))
    }

    /// `GameOver → AwaitingGuess` hunting `target`, score reset to 0.
    pub fn restart_with(&mut self, target: TargetColor) -> Transition {
        if !self.is_over() {
            return Transition::ignored();
        }
        self.score = 0;
        self.round = 1;
        self.begin_round(target);
        Transition::consumed(vec![Effect::PaintDisc, Effect::ScoreChanged(0)])
    }

    fn begin_round(&mut self, target: TargetColor) {
        log::debug!("round {} target {} ({})", self.round, target.hex(), target.label());
        self.target = target;
        self.phase = Phase::AwaitingGuess;
    }
}

#[cfg(test)]
mod tests {
    use huehunt_engine::render_disc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const RIM: Point = Point::new(299, 150);
    const CENTER: Point = Point::new(150, 150);

    fn red_session() -> (Session, Raster) {
        let config = GameConfig::default();
        (Session::with_target(&config, TargetColor::on_wheel(0.0, 1.0)), render_disc(config.disc_size))
    }

    fn submissions(effects: &[Effect]) -> usize {
        effects.iter().filter(|e| matches!(e, Effect::SubmitScore(_))).count()
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[test]
    fn rim_click_on_red_wins() {
        let (mut s, raster) = red_session();
        let t = s.select(RIM, &raster).unwrap();

        assert!(t.result.is_consumed());
        let Phase::Resolved(guess) = *s.phase() else { panic!("expected Resolved, got {:?}", s.phase()) };
        assert!(guess.similarity >= 99.0, "{}", guess.similarity);
        assert_eq!(guess.outcome, Outcome::Success);
        assert_eq!(s.score(), 1);
        assert_eq!(
            t.effects,
            vec![
                Effect::PaintOverlay(Overlay::new(Rgb::new(255, 0, 0)).click(RIM)),
                Effect::ScoreChanged(1),
            ]
        );
    }

    #[test]
    fn center_click_on_red_is_game_over() {
        let (mut s, raster) = red_session();
        let t = s.select(CENTER, &raster).unwrap();

        let Phase::GameOver(guess) = *s.phase() else { panic!("expected GameOver") };
        assert!(guess.similarity < 90.0);
        assert_eq!(guess.color, Rgb::new(128, 128, 128));
        assert_eq!(s.score(), 0);
        assert_eq!(submissions(&t.effects), 1);
        assert!(t.effects.contains(&Effect::SubmitScore(0)));
    }

    #[test]
    fn only_one_selection_per_round() {
        let (mut s, raster) = red_session();
        s.select(RIM, &raster).unwrap();
        let second = s.select(CENTER, &raster).unwrap();
        assert_eq!(second, Transition::ignored());
        assert!(matches!(s.phase(), Phase::Resolved(_)));
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn game_over_freezes_selection() {
        let (mut s, raster) = red_session();
        s.select(CENTER, &raster).unwrap();
        assert_eq!(s.select(RIM, &raster).unwrap().result, EventResult::Ignored);
        assert!(s.is_over());
    }

    #[test]
    fn off_disc_selection_keeps_round_open() {
        let (mut s, raster) = red_session();
        let t = s.select(Point::new(0, 0), &raster).unwrap();
        assert_eq!(t.result, EventResult::Ignored);
        assert_eq!(*s.phase(), Phase::AwaitingGuess);
    }

    #[test]
    fn out_of_bounds_selection_is_an_error() {
        let (mut s, raster) = red_session();
        let err = s.select(Point::new(300, 150), &raster).unwrap_err();
        assert!(matches!(err, RasterError::OutOfBounds { x: 300, .. }));
        assert_eq!(*s.phase(), Phase::AwaitingGuess);
    }

    #[test]
    fn threshold_is_inclusive() {
        let config = GameConfig::default();
        let raster = render_disc(config.disc_size);
        let target = TargetColor::on_wheel(0.0, 1.0);
        let exact = similarity(raster.read_pixel(CENTER).unwrap(), target.rgb());
        let mut s = Session::with_target(&config.clone().success_threshold(exact), target);
        s.select(CENTER, &raster).unwrap();
        assert!(matches!(s.phase(), Phase::Resolved(_)));
    }

    // ── advance / restart ─────────────────────────────────────────────────

    #[test]
    fn two_wins_add_two_and_never_submit() {
        let (mut s, raster) = red_session();
        let mut effects = Vec::new();

        effects.extend(s.select(RIM, &raster).unwrap().effects);
        effects.extend(s.advance_to(TargetColor::on_wheel(0.0, 1.0)).effects);
        effects.extend(s.select(RIM, &raster).unwrap().effects);

        assert_eq!(s.score(), 2);
        assert_eq!(s.round(), 2);
        assert_eq!(submissions(&effects), 0);
    }

    #[test]
    fn advance_draws_a_new_target() {
        let (mut s, raster) = red_session();
        let mut rng = StdRng::seed_from_u64(5);
        s.select(RIM, &raster).unwrap();
        let t = s.advance(&mut rng);
        assert_eq!(t.effects, vec![Effect::PaintDisc]);
        assert_eq!(*s.phase(), Phase::AwaitingGuess);
        assert_ne!(s.target().rgb(), Rgb::new(255, 0, 0));
        assert!(s.last_guess().is_none());
    }

    #[test]
    fn advance_is_ignored_unless_resolved() {
        let (mut s, raster) = red_session();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(s.advance(&mut rng).result, EventResult::Ignored);
        s.select(CENTER, &raster).unwrap();
        assert_eq!(s.advance(&mut rng).result, EventResult::Ignored);
        assert!(s.is_over());
    }

    #[test]
    fn restart_resets_score() {
        let (mut s, raster) = red_session();
        s.select(RIM, &raster).unwrap();
        s.advance_to(TargetColor::on_wheel(0.0, 1.0));
        s.select(CENTER, &raster).unwrap();
        assert_eq!(s.score(), 1);

        let t = s.restart_with(TargetColor::on_wheel(120.0, 1.0));
        assert_eq!(t.effects, vec![Effect::PaintDisc, Effect::ScoreChanged(0)]);
        assert_eq!(s.score(), 0);
        assert_eq!(s.round(), 1);
        assert_eq!(*s.phase(), Phase::AwaitingGuess);
    }

    #[test]
    fn restart_is_ignored_mid_game() {
        let (mut s, _) = red_session();
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(s.restart(&mut rng).result, EventResult::Ignored);
    }

    #[test]
    fn new_session_draws_with_configured_policy() {
        let config = GameConfig::default().target_policy(TargetPolicy::FullSaturation);
        let mut rng = StdRng::seed_from_u64(9);
        let s = Session::new(&config, &mut rng);
        assert_eq!(s.target().hsl().s, 1.0);
        assert_eq!(*s.phase(), Phase::AwaitingGuess);
    }
}
