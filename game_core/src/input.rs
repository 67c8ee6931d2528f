//! Paddle intents and the input collaborator seam

use crate::Side;

/// Vertical direction of a paddle impulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// +1 for up, -1 for down (field +y is up)
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }
}

/// One discrete "move" impulse for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub side: Side,
    pub direction: Direction,
}

impl MoveIntent {
    pub fn new(side: Side, direction: Direction) -> Self {
        Self { side, direction }
    }
}

/// Match-level requests collected since the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlSignals {
    pub quit: bool,
    pub reset_score: bool,
}

/// Source of player input, drained once per tick
pub trait InputSource {
    /// Take every move intent accumulated since the last call
    fn poll_intents(&mut self) -> Vec<MoveIntent>;

    /// Take pending control requests, clearing them
    fn poll_control(&mut self) -> ControlSignals;
}

/// In-memory input queue: the host pushes, the game loop drains
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    intents: Vec<MoveIntent>,
    control: ControlSignals,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_intent(&mut self, side: Side, direction: Direction) {
        self.intents.push(MoveIntent::new(side, direction));
    }

    pub fn request_quit(&mut self) {
        self.control.quit = true;
    }

    pub fn request_reset(&mut self) {
        self.control.reset_score = true;
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

}

impl InputSource for IntentQueue {
    fn poll_intents(&mut self) -> Vec<MoveIntent> {
        std::mem::take(&mut self.intents)
    }

    fn poll_control(&mut self) -> ControlSignals {
        std::mem::take(&mut self.control)
    }
}
