use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{Config, WriteLogger};
use toroid_snake::config::{
    DEFAULT_GRID_SIZE, DEFAULT_GROWTH_FOOD_COUNT, DEFAULT_LOG_FILE, DEFAULT_SHRINK_FOOD_COUNT,
    DEFAULT_TICK_RATE, FRAME_INTERVAL_MS, MAX_OBSTACLES, MIN_OBSTACLES,
};
use toroid_snake::game::{Control, Game};
use toroid_snake::grid::GridSize;
use toroid_snake::input::InputHandler;
use toroid_snake::renderer;
use toroid_snake::score::{high_score_path, load_high_score_from_path, save_high_score_to_path};
use toroid_snake::settings::SessionSettings;
use toroid_snake::terminal_runtime::TerminalSession;

#[derive(Debug, Parser)]
#[command(version, about = "Snake on a wrap-around grid with growth and shrink food")]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE.width, value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE.height, value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// Ticks per second (Q/W adjust it while playing).
    #[arg(long, default_value_t = DEFAULT_TICK_RATE)]
    tick_rate: u32,

    /// Growth food items per session (A/S adjust it while playing).
    #[arg(long, default_value_t = DEFAULT_GROWTH_FOOD_COUNT)]
    growth_food: u32,

    /// Shrink food items per session (Z/X adjust it while playing).
    #[arg(long, default_value_t = DEFAULT_SHRINK_FOOD_COUNT)]
    shrink_food: u32,

    /// Fewest obstacles per session.
    #[arg(long, default_value_t = MIN_OBSTACLES)]
    min_obstacles: u32,

    /// Most obstacles per session.
    #[arg(long, default_value_t = MAX_OBSTACLES)]
    max_obstacles: u32,

    /// Seed for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// High score file; defaults to the platform data directory.
    #[arg(long)]
    score_file: Option<PathBuf>,

    /// Log file.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file);

    let score_path = cli.score_file.clone().unwrap_or_else(high_score_path);
    let mut settings = SessionSettings::with_high_score(load_high_score_from_path(&score_path));
    settings.set_tick_rate(cli.tick_rate);
    settings.set_growth_food_count(cli.growth_food);
    settings.set_shrink_food_count(cli.shrink_food);
    settings.set_obstacle_range(cli.min_obstacles, cli.max_obstacles);
    info!("loaded high score {} from {}", settings.high_score(), score_path.display());

    let bounds = GridSize {
        width: cli.width,
        height: cli.height,
    };
    let game = Game::new(bounds, settings, cli.seed).map_err(|error| {
        error!("cannot start: {error}");
        io::Error::new(io::ErrorKind::InvalidInput, error)
    })?;

    run(game, &score_path)
}

fn run(mut game: Game, score_path: &Path) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut last_tick = Instant::now();

    let outcome = loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &game))?;

        let tick_interval = game.settings().tick_interval();
        let wait = tick_interval
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(FRAME_INTERVAL_MS));

        let quit = input
            .poll_inputs(wait)?
            .into_iter()
            .any(|command| game.apply_input(command) == Control::Quit);
        if quit {
            info!("quit requested");
            break Ok(());
        }

        if last_tick.elapsed() < game.settings().tick_interval() {
            continue;
        }
        last_tick = Instant::now();

        match game.tick() {
            Ok(report) => {
                if report.session_ended.is_some() {
                    persist_high_score(score_path, game.settings().high_score());
                }
            }
            Err(error) => {
                error!("cannot start next session: {error}");
                break Err(io::Error::new(io::ErrorKind::InvalidInput, error));
            }
        }
    };

    persist_high_score(score_path, game.settings().high_score());
    drop(session);
    outcome
}

fn persist_high_score(path: &Path, score: u32) {
    match save_high_score_to_path(path, score) {
        Ok(()) => info!("saved high score {score} to {}", path.display()),
        Err(error) => error!("failed to save high score to {}: {error}", path.display()),
    }
}

fn init_logging(path: &Path) {
    let file = match File::create(path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("logging disabled, cannot create {}: {error}", path.display());
            return;
        }
    };

    if let Err(error) = WriteLogger::init(LevelFilter::Info, Config::default(), file) {
        eprintln!("logging disabled: {error}");
    }
}
