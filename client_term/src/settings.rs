//! Environment overrides for the game configuration

use std::path::PathBuf;

use game_core::{Config, Timestep};

/// Path of the log file, if logging is enabled
pub fn log_file(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    lookup("PONG_LOG")
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}

/// Load config from environment or use defaults
pub fn load_config(lookup: impl Fn(&str) -> Option<String>) -> Config {
    let mut config = Config::default();

    if let Some(raw) = lookup("PONG_TICK_RATE") {
        match raw.parse::<f32>() {
            Ok(tick_rate) if tick_rate > 0.0 && tick_rate <= 1000.0 => {
                config.timestep = Timestep::Fixed { tick_rate };
            }
            _ => tracing::warn!("Invalid PONG_TICK_RATE '{}', using default", raw),
        }
    }

    // A max delta switches to the variable timestep
    if let Some(raw) = lookup("PONG_MAX_DT") {
        match raw.parse::<f32>() {
            Ok(max_dt) if max_dt > 0.0 && max_dt <= 1.0 => {
                config.timestep = Timestep::Variable { max_dt };
            }
            _ => tracing::warn!("Invalid PONG_MAX_DT '{}', using default", raw),
        }
    }

    if let Some(raw) = lookup("PONG_SERVE_DELAY") {
        match raw.parse::<f32>() {
            Ok(delay) if delay >= 0.0 => config.serve_delay = delay,
            _ => tracing::warn!("Invalid PONG_SERVE_DELAY '{}', using default", raw),
        }
    }

    config
}

pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
