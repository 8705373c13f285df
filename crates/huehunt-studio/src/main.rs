//! huehunt studio
//!
//! Subcommands:
//!   render  Paint the wheel (optionally with a result overlay) to a PNG
//!   play    Text-mode game: type pixel coordinates, read the verdict
//!
//! Example:
//!   cargo run -p huehunt-studio -- render --size 300 --out wheel.png \
//!       --target "#FF0000" --click 299,150

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use huehunt_color::{Rgb, TargetPolicy};
use huehunt_engine::logging::{LoggingConfig, init_logging};
use huehunt_engine::{Overlay, Point, WheelRenderer};
use huehunt_game::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find the color on the wheel", long_about = None)]
struct Cli {
    /// Log filter, e.g. "debug" or "huehunt_game=debug"; overrides RUST_LOG
    #[arg(long, global = true)]
    log: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the wheel, and optionally a result overlay, to a PNG
    Render(RenderArgs),
    /// Play in the terminal
    Play(PlayArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[arg(long, default_value_t = 300)]
    size: u32,
    #[arg(long)]
    out: PathBuf,
    /// Target color (#RRGGBB); draws the highlight and target ring
    #[arg(long)]
    target: Option<Rgb>,
    /// Selected pixel as X,Y; draws the click ring
    #[arg(long, value_parser = parse_point)]
    click: Option<Point>,
    #[arg(long, default_value_t = 90.0)]
    threshold: f64,
}

#[derive(Args, Debug)]
struct PlayArgs {
    #[arg(long)]
    size: Option<u32>,
    /// Where the profile, leaderboard and last overlay are kept
    #[arg(long, default_value = "huehunt-data")]
    data_dir: PathBuf,
    /// Display name to play under
    #[arg(long)]
    name: Option<String>,
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
    /// Seed for reproducible targets
    #[arg(long)]
    seed: Option<u64>,
    /// JSON game config; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum PolicyArg {
    /// Fully saturated hues on the rim
    Full,
    /// Uniform over the disc area
    Area,
}

impl From<PolicyArg> for TargetPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Full => TargetPolicy::FullSaturation,
            PolicyArg::Area => TargetPolicy::AreaUniform,
        }
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(match cli.log {
        Some(filter) => LoggingConfig::with_filter(filter),
        None => LoggingConfig::default(),
    });

    match cli.command {
        Command::Render(a) => cmd_render(a),
        Command::Play(a) => cmd_play(a),
    }
}

// ── render ────────────────────────────────────────────────────────────────

fn cmd_render(a: RenderArgs) -> Result<()> {
    if a.size == 0 {
        bail!("size must be at least 1");
    }
    let renderer = WheelRenderer::new();
    let mut raster = renderer.render_disc(a.size);

    match (a.target, a.click) {
        (Some(target), click) => {
            let overlay = Overlay { target, click, highlight_threshold: a.threshold };
            renderer.render_overlay(&mut raster, &overlay);
        }
        (None, Some(_)) => bail!("--click needs --target"),
        (None, None) => {}
    }

    raster.save_png(&a.out).with_context(|| format!("writing {}", a.out.display()))?;
    println!("wrote {}x{} wheel to {}", a.size, a.size, a.out.display());
    Ok(())
}

// ── play ──────────────────────────────────────────────────────────────────

type Game = GameController<FileLeaderboard, JsonProfileStore, StdRng>;

fn load_config(a: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &a.config {
        Some(path) => {
            let src = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            GameConfig::from_json(&src).with_context(|| format!("parsing {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(size) = a.size {
        config = config.disc_size(size);
    }
    if let Some(policy) = a.policy {
        config = config.target_policy(policy.into());
    }
    if config.disc_size == 0 {
        bail!("disc size must be at least 1");
    }
    Ok(config)
}

fn cmd_play(a: PlayArgs) -> Result<()> {
    let config = load_config(&a)?;
    std::fs::create_dir_all(&a.data_dir).with_context(|| format!("creating {}", a.data_dir.display()))?;

    let mut leaderboard = FileLeaderboard::open(a.data_dir.join("leaderboard.json"))
        .with_context(|| format!("opening leaderboard in {}", a.data_dir.display()))?;
    let updates = leaderboard.subscribe();
    let profiles = JsonProfileStore::new(a.data_dir.join("profile.json"));
    let rng = match a.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game: Game = GameController::new(config, leaderboard, profiles, rng);
    if let Some(name) = a.name {
        game.handle(GameEvent::Rename(name))?;
    }
    let snapshot = a.data_dir.join("round.png");

    println!("playing as {} (best {})", game.profile().display_name, game.profile().high_score);
    println!("commands: <x> <y> | next | restart | top | name <NEW> | quit");
    println!("after a hit the next round starts on your next input once the timer runs out; `next` skips the wait");
    announce_target(&game);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if game.poll(Instant::now()).is_consumed() {
            announce_target(&game);
        }
        if !run_command(&mut game, line.trim(), &snapshot, &updates)? {
            break;
        }
        io::stdout().flush()?;
    }
    Ok(())
}

/// Returns `false` when the player quits.
fn run_command(game: &mut Game, line: &str, snapshot: &Path, updates: &Receiver<LiveUpdate>) -> Result<bool> {
    let mut words = line.split_whitespace();
    match words.next() {
        None => {}
        Some("quit" | "q") => return Ok(false),
        Some("next") => {
            if game.handle(GameEvent::Advance)?.is_consumed() {
                announce_target(game);
            } else {
                println!("nothing to advance");
            }
        }
        Some("restart") => {
            if game.handle(GameEvent::Restart)?.is_consumed() {
                println!("new game");
                announce_target(game);
            } else {
                println!("the game is still running");
            }
        }
        Some("top") => print_standings(game),
        Some("name") => {
            let name = words.collect::<Vec<_>>().join(" ");
            match game.handle(GameEvent::Rename(name))? {
                EventResult::Consumed => println!("you are now {}", game.profile().display_name),
                EventResult::Ignored => println!("name unchanged"),
            }
        }
        Some(x) => {
            let point = match (x.parse::<u32>(), words.next().map(str::parse::<u32>)) {
                (Ok(x), Some(Ok(y))) => Point::new(x, y),
                _ => {
                    println!("expected `<x> <y>` or a command");
                    return Ok(true);
                }
            };
            select(game, point, snapshot)?;
        }
    }

    if game.pump(updates) > 0 {
        log::debug!("standings refreshed");
    }
    Ok(true)
}

fn select(game: &mut Game, point: Point, snapshot: &Path) -> Result<()> {
    let result = match game.handle(GameEvent::Select(point)) {
        Ok(r) => r,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };
    if !result.is_consumed() {
        println!("{}", ignored_selection_hint(game.session().phase(), point, game.advance_at(), Instant::now()));
        return Ok(());
    }

    game.raster().save_png(snapshot).with_context(|| format!("writing {}", snapshot.display()))?;

    let session = game.session();
    if let Some(guess) = session.last_guess() {
        println!(
            "picked {} vs {}: {:.1}% similar",
            guess.color,
            session.target().hex(),
            guess.similarity
        );
    }
    match session.phase() {
        Phase::Resolved(_) => println!("hit! score {} (overlay in {})", session.score(), snapshot.display()),
        Phase::GameOver(_) => {
            println!("miss. final score {} (overlay in {})", session.score(), snapshot.display());
            print_standings(game);
            println!("type `restart` to play again");
        }
        Phase::AwaitingGuess => {}
    }
    Ok(())
}

/// Why a selection did nothing, and what to type instead.
fn ignored_selection_hint(phase: &Phase, point: Point, advance_at: Option<Instant>, now: Instant) -> String {
    match phase {
        Phase::AwaitingGuess => format!("{point} is off the wheel"),
        Phase::Resolved(_) => match advance_at {
            Some(at) if at > now => format!(
                "round won; the next one starts in {:.1}s, or type `next`",
                (at - now).as_secs_f64()
            ),
            _ => "round won; type `next` for the next target".to_owned(),
        },
        Phase::GameOver(_) => "game over; type `restart` to play again".to_owned(),
    }
}

fn announce_target(game: &Game) {
    let s = game.session();
    println!("round {}: find {} ({})", s.round(), s.target().hex(), s.target().label());
}

fn print_standings(game: &Game) {
    if game.standings().is_empty() {
        println!("leaderboard is empty");
        return;
    }
    for (rank, row) in game.standings().iter().enumerate() {
        println!("{:>3}. {:<20} {}", rank + 1, row.display_name, row.high_score);
    }
}
