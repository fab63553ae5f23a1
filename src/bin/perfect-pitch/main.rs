//! perfect-pitch - terminal ear-training game
//!
//! Run with: cargo run -- [--verbose] [--mute] [--config PATH] [--data-dir PATH]

mod app;
mod ui;

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use perfect_pitch::{
    audio::{CpalPlayer, SilentPlayer, SoundPlayer},
    config::Config,
    game::RoundController,
    score::{FileScoreStore, MemoryScoreStore, ScoreStore},
};

use ui::UiApp;

#[derive(Parser, Debug)]
#[command(name = "perfect-pitch", version, about = "Hear a note, name the note")]
struct Args {
    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Never open an audio device
    #[arg(long)]
    mute: bool,

    /// Config file (default: <config_dir>/perfect-pitch/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding scores.toml (default: <data_dir>/perfect-pitch)
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,
}

fn init_logging(verbose: bool) -> EyreResult<()> {
    use simplelog::{LevelFilter, WriteLogger};

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    // The terminal belongs to the UI, so logs go to a file
    let log_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("perfect-pitch");

    let log_file = std::fs::create_dir_all(&log_dir)
        .and_then(|()| File::create(log_dir.join("perfect-pitch.log")))
        .or_else(|_| File::create(std::env::temp_dir().join("perfect-pitch.log")))
        .wrap_err("cannot create log file")?;

    WriteLogger::init(log_level, simplelog::Config::default(), log_file)
        .wrap_err("failed to initialize logger")?;

    log::info!("perfect-pitch starting (log level: {:?})", log_level);
    Ok(())
}

fn open_store(data_dir: Option<PathBuf>) -> Box<dyn ScoreStore> {
    let path = match data_dir {
        Some(dir) => Some(dir.join("scores.toml")),
        None => FileScoreStore::default_path(),
    };

    let Some(path) = path else {
        log::warn!(target: "score", "no data directory, best score will not persist");
        return Box::new(MemoryScoreStore::new());
    };

    match FileScoreStore::open(&path) {
        Ok(store) => {
            log::info!(target: "score", "best score kept in {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!(target: "score", "{e}; best score will not persist");
            Box::new(MemoryScoreStore::new())
        }
    }
}

fn open_player(config: &Config, mute: bool) -> Box<dyn SoundPlayer> {
    if mute {
        return Box::new(SilentPlayer);
    }

    match CpalPlayer::open(config.voice_settings(), config.sound_dir()) {
        Ok(player) => {
            log::info!(target: "audio", "playing at {} Hz", player.sample_rate());
            Box::new(player)
        }
        Err(e) => {
            log::warn!(target: "audio", "audio unavailable, continuing muted: {e}");
            Box::new(SilentPlayer)
        }
    }
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    let store = open_store(args.data_dir);
    let player = open_player(&config, args.mute);
    let controller = RoundController::new(store, player, config.round_settings());

    let mut terminal = ratatui::init();
    let result = UiApp::new(controller).run(&mut terminal);
    ratatui::restore();
    result
}
