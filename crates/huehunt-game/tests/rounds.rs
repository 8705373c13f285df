use huehunt_engine::render_disc;
use huehunt_game::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

const RIM: Point = Point::new(299, 150);
const CENTER: Point = Point::new(150, 150);

fn red() -> TargetColor {
    TargetColor::on_wheel(0.0, 1.0)
}

// ── scoring ───────────────────────────────────────────────────────────────

#[test]
fn red_rim_scores_at_least_99() {
    let mut game = GameController::with_target(
        GameConfig::default(),
        MemoryLeaderboard::new(),
        MemoryProfileStore::new(),
        StdRng::seed_from_u64(1),
        red(),
    );
    game.handle(GameEvent::Select(RIM)).unwrap();
    let guess = game.session().last_guess().copied().unwrap();
    assert_eq!(guess.outcome, Outcome::Success);
    assert!(guess.similarity >= 99.0, "{}", guess.similarity);
}

#[test]
fn gray_center_against_red_ends_the_game() {
    let mut game = GameController::with_target(
        GameConfig::default(),
        MemoryLeaderboard::new(),
        MemoryProfileStore::new(),
        StdRng::seed_from_u64(1),
        red(),
    );
    game.handle(GameEvent::Select(CENTER)).unwrap();
    assert!(game.session().is_over());
    assert_eq!(game.session().score(), 0);
    // A zero score still reaches the leaderboard.
    assert_eq!(game.standings().len(), 1);
    assert_eq!(game.standings()[0].high_score, 0);
}

#[test]
fn two_wins_score_two_without_submitting() {
    let mut board = MemoryLeaderboard::new();
    let updates = board.subscribe();
    let mut game = GameController::with_target(
        GameConfig::default(),
        board,
        MemoryProfileStore::new(),
        StdRng::seed_from_u64(7),
        red(),
    );

    game.handle(GameEvent::Select(RIM)).unwrap();
    game.advance_to(red());
    game.handle(GameEvent::Select(RIM)).unwrap();

    assert_eq!(game.session().score(), 2);
    assert_eq!(game.leaderboard().player_count(), 0);
    assert!(updates.try_recv().is_err());
}

#[test]
fn reading_at_the_raster_edge_fails() {
    let raster = render_disc(300);
    assert!(matches!(raster.read_pixel(Point::new(300, 0)), Err(RasterError::OutOfBounds { .. })));
    assert!(raster.read_pixel(Point::new(299, 150)).is_ok());
}

// ── persistence ───────────────────────────────────────────────────────────

#[test]
fn file_backed_run_survives_restart_of_the_app() {
    let dir = tempfile::tempdir().unwrap();
    let board_path = dir.path().join("leaderboard.json");
    let profile_path = dir.path().join("profile.json");

    let player_id = {
        let mut game = GameController::with_target(
            GameConfig::default(),
            FileLeaderboard::open(&board_path).unwrap(),
            JsonProfileStore::new(&profile_path),
            StdRng::seed_from_u64(11),
            red(),
        );
        game.handle(GameEvent::Rename("Ada".into())).unwrap();
        game.handle(GameEvent::Select(RIM)).unwrap();
        game.advance_to(red());
        game.handle(GameEvent::Select(CENTER)).unwrap();
        assert!(game.session().is_over());
        game.profile().player_id.clone()
    };

    let game = GameController::new(
        GameConfig::default(),
        FileLeaderboard::open(&board_path).unwrap(),
        JsonProfileStore::new(&profile_path),
        StdRng::seed_from_u64(12),
    );
    assert_eq!(game.profile().player_id, player_id);
    assert_eq!(game.profile().display_name, "Ada");
    assert_eq!(game.profile().high_score, 1);
    assert_eq!(game.standings(), [LeaderboardEntry { display_name: "Ada".into(), high_score: 1 }]);
}

#[test]
fn unreadable_profile_is_never_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let profile_path = dir.path().join("profile.json");
    std::fs::write(&profile_path, "{ corrupt").unwrap();

    let mut game = GameController::with_target(
        GameConfig::default(),
        MemoryLeaderboard::new(),
        JsonProfileStore::new(&profile_path),
        StdRng::seed_from_u64(13),
        red(),
    );
    game.handle(GameEvent::Rename("Ada".into())).unwrap();
    game.handle(GameEvent::Select(RIM)).unwrap();
    game.advance_to(red());
    game.handle(GameEvent::Select(CENTER)).unwrap();

    assert_eq!(game.profile().high_score, 1);
    assert_eq!(game.standings()[0].display_name, "Ada");
    assert_eq!(std::fs::read_to_string(&profile_path).unwrap(), "{ corrupt");
}

#[test]
fn restart_after_game_over_starts_fresh() {
    let mut game = GameController::with_target(
        GameConfig::default().target_policy(TargetPolicy::FullSaturation),
        MemoryLeaderboard::new(),
        MemoryProfileStore::new(),
        StdRng::seed_from_u64(5),
        red(),
    );
    game.handle(GameEvent::Select(RIM)).unwrap();
    game.handle(GameEvent::Advance).unwrap();
    assert_eq!(game.session().round(), 2);

    game.handle(GameEvent::Select(CENTER)).unwrap();
    assert!(game.session().is_over());
    assert_eq!(game.handle(GameEvent::Advance).unwrap(), EventResult::Ignored);

    assert!(game.handle(GameEvent::Restart).unwrap().is_consumed());
    assert_eq!(game.session().score(), 0);
    assert_eq!(game.session().round(), 1);
    assert_eq!(game.session().target().hsl().s, 1.0);
    assert_eq!(*game.raster(), render_disc(300));
}
