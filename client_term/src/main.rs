mod input;
mod render;
mod settings;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Mutex;

use anyhow::Context;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use game_core::{GameLoop, SystemClock};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::input::TerminalInput;
use crate::render::TerminalRenderer;

/// Raw mode and the alternate screen, restored on drop
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // The terminal belongs to the game, so logs only go to a file
    if let Some(path) = settings::log_file(settings::env_lookup) {
        let file = File::create(&path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .init();
    }

    info!("Pong v{}", env!("CARGO_PKG_VERSION"));

    let config = settings::load_config(settings::env_lookup);
    let mut game = GameLoop::new(config).context("invalid game configuration")?;

    let guard = TerminalGuard::enter().context("failed to prepare terminal")?;
    let mut renderer = TerminalRenderer::new(BufWriter::new(io::stdout()), game.config())
        .context("failed to query terminal size")?;
    let mut input = TerminalInput::new();

    let ticks = game.run(&mut input, &mut renderer, &mut SystemClock::new());

    drop(renderer);
    drop(guard);

    let score = &game.state().score;
    info!(ticks, left = score.left(), right = score.right(), "Game over");

    let mut stdout = io::stdout();
    writeln!(stdout, "Final score  {} : {}", score.left(), score.right())?;

    Ok(())
}
