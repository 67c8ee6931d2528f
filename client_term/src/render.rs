//! Terminal renderer: projects the field onto the character grid

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::queue;
use game_core::{Config, Field, MatchSnapshot, Renderer};
use glam::Vec2;

const PADDLE_GLYPH: &str = "█";
const BALL_GLYPH: &str = "●";
const NET_GLYPH: &str = "┊";

/// Mapping from field coordinates (+y up, origin at center) to terminal cells
///
/// Row 0 holds the score line, the field fills the rows below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    cols: u16,
    rows: u16,
    field: Vec2,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, field: &Field) -> Self {
        Self {
            cols: cols.max(2),
            rows: rows.max(3),
            field: Vec2::new(field.width(), field.height()),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(2);
        self.rows = rows.max(3);
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn to_cell(&self, pos: Vec2) -> (u16, u16) {
        let fx = (pos.x / self.field.x + 0.5).clamp(0.0, 1.0);
        let fy = (0.5 - pos.y / self.field.y).clamp(0.0, 1.0);
        let last_col = f32::from(self.cols - 1);
        let last_field_row = f32::from(self.rows - 2);
        let col = (fx * last_col).round() as u16;
        let row = 1 + (fy * last_field_row).round() as u16;
        (col, row)
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    viewport: Viewport,
    follow_terminal: bool,
    paddle_half_height: f32,
    score_text: String,
}

impl<W: Write> TerminalRenderer<W> {
    /// Renderer that resizes with the terminal window
    pub fn new(out: W, config: &Config) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let mut renderer = Self::with_size(out, config, cols, rows);
        renderer.follow_terminal = true;
        Ok(renderer)
    }

    pub fn with_size(out: W, config: &Config, cols: u16, rows: u16) -> Self {
        Self {
            out,
            viewport: Viewport::new(cols, rows, &Field::from_config(config)),
            follow_terminal: false,
            paddle_half_height: config.paddle_height / 2.0,
            score_text: String::new(),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, snapshot: &MatchSnapshot) -> io::Result<()> {
        if self.follow_terminal {
            let (cols, rows) = terminal::size()?;
            self.viewport.resize(cols, rows);
        }
        let viewport = self.viewport;

        queue!(self.out, Clear(ClearType::All))?;

        let text_len = self.score_text.chars().count() as u16;
        let score_col = (viewport.cols() / 2).saturating_sub(text_len / 2);
        queue!(self.out, MoveTo(score_col, 0), Print(&self.score_text))?;

        let (net_col, _) = viewport.to_cell(Vec2::ZERO);
        for row in (1..viewport.rows()).step_by(2) {
            queue!(self.out, MoveTo(net_col, row), Print(NET_GLYPH))?;
        }

        for paddle in [snapshot.paddle_left, snapshot.paddle_right] {
            let (col, top) = viewport.to_cell(paddle + Vec2::new(0.0, self.paddle_half_height));
            let (_, bottom) = viewport.to_cell(paddle - Vec2::new(0.0, self.paddle_half_height));
            for row in top..=bottom {
                queue!(self.out, MoveTo(col, row), Print(PADDLE_GLYPH))?;
            }
        }

        let (col, row) = viewport.to_cell(snapshot.ball_pos);
        queue!(self.out, MoveTo(col, row), Print(BALL_GLYPH))?;

        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn present(&mut self, snapshot: &MatchSnapshot) {
        if let Err(err) = self.draw(snapshot) {
            tracing::warn!(%err, tick = snapshot.tick, "failed to draw frame");
        }
    }

    fn draw_score_text(&mut self, left: u32, right: u32) {
        self.score_text = format!("{left}    :    {right}");
    }
}
