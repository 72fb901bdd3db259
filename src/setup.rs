use std::fs::{self, File};
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use simplelog::WriteLogger;

use haptic_core::config::Config;
use haptic_core::engine::FeedbackEngine;

fn log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("haptic-playground").join("haptic-playground.log"))
}

/// Log to a file: the TUI owns the terminal, so nothing may print there.
/// Logging is best-effort; if the file can't be created we run silent.
pub fn init_logging(config: &Config) {
    let level = LevelFilter::from_str(&config.log_level).unwrap_or(LevelFilter::Info);
    if level == LevelFilter::Off {
        return;
    }

    let Some(path) = log_path() else { return };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(level, simplelog::Config::default(), file);
    }
}

/// Start the engine once at launch so the first slider tweak plays
/// immediately. Failure is non-fatal; the playback driver retries the
/// start on every trigger.
pub fn auto_start_engine(engine: &mut dyn FeedbackEngine) {
    match engine.start() {
        Ok(()) => log::info!("feedback engine started"),
        Err(e) => log::warn!("engine not available at startup: {}", e),
    }
}
