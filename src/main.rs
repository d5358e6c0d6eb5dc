use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{LevelFilter, info};
use pose_snake::game::GameConfig;
use pose_snake::input::InputMode;
use pose_snake::input::pose::open_pose_feed;
use pose_snake::modes::PlayMode;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pose_snake")]
#[command(version, about = "Snake game steered by keyboard or a pose classifier")]
struct Cli {
    /// Which inputs may steer the snake
    #[arg(long, value_enum, default_value_t = InputMode::Both)]
    input: InputMode,

    /// File or FIFO with one JSON array of pose predictions per line
    #[arg(long)]
    poses: Option<PathBuf>,

    /// JSON game configuration; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tick period in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Minimum probability a pose must exceed to steer
    #[arg(long)]
    threshold: Option<f32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short)]
    verbose: bool,
}

fn init_logging(path: &Path, verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file =
        File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;
    WriteLogger::init(level, Config::default(), file).context("Failed to initialize logger")?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {:?}", path))?;
            GameConfig::from_json(&json)
                .with_context(|| format!("Failed to parse config {:?}", path))?
        }
        None => GameConfig::default(),
    };

    if let Some(tick_ms) = cli.tick_ms {
        config.tick_ms = tick_ms;
    }
    if let Some(threshold) = cli.threshold {
        config.confidence_threshold = threshold;
    }

    config.validate().context("Invalid game configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.verbose)?;
    }

    let config = load_config(&cli)?;
    info!("starting with {:?}, input {:?}", config, cli.input);

    let mut play_mode = PlayMode::new(config, cli.input, cli.seed)?;

    match (&cli.poses, cli.input) {
        (Some(path), mode) if mode.accepts_pose() => {
            play_mode.attach_pose_feed(open_pose_feed(path).await?);
        }
        (Some(_), _) => info!("--poses ignored with keyboard-only input"),
        (None, InputMode::Pose) => bail!("--poses is required with --input pose"),
        (None, _) => {}
    }

    play_mode.run().await
}
