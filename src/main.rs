use std::path::PathBuf;

use clap::Parser;
use grid_snake::config::{GameConfig, load_config};
use grid_snake::controller::{Controller, SleepClock};
use grid_snake::error::AppError;
use grid_snake::game::GameState;
use grid_snake::input::CrosstermInput;
use grid_snake::logging::{default_log_path, init_file_logger};
use grid_snake::renderer::TerminalRenderer;
use grid_snake::terminal_runtime::TerminalSession;
use grid_snake::theme::ThemeName;
use log::{LevelFilter, info};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with game settings; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Board height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Edge of one board cell in pixels.
    #[arg(long = "cell-size")]
    cell_size: Option<u32>,

    /// Initial tick interval in milliseconds.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Interval change per food eaten, in milliseconds.
    #[arg(long = "step-ms")]
    step_ms: Option<u64>,

    /// Seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = ThemeName::Olive)]
    theme: ThemeName,

    /// Log file path. Defaults to the local data directory.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    #[arg(long = "log-level", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.board_width_px = width;
        }
        if let Some(height) = self.height {
            config.board_height_px = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.initial_tick_interval_ms = tick_ms;
            config.min_tick_interval_ms = config.min_tick_interval_ms.min(tick_ms);
        }
        if let Some(step_ms) = self.step_ms {
            config.tick_interval_step_ms = step_ms;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() {
    if let Err(error) = run(Cli::parse()) {
        eprintln!("grid-snake: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = cli.game_config()?;
    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_file_logger(&log_path, cli.log_level)?;

    info!("starting with {config:?}");
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };

    let renderer = TerminalRenderer::new(TerminalSession::enter()?, cli.theme.theme());
    let mut controller = Controller::new(state, renderer, CrosstermInput::new(), SleepClock);

    let result = controller.run();
    let (_, renderer, _, _) = controller.into_parts();
    renderer.finish();

    let summary = result?;
    println!(
        "Thanks for playing: {} round(s), best score {}.",
        summary.rounds, summary.best_score
    );
    Ok(())
}
