//! Match state aggregate and the read-only snapshot handed to renderers

use glam::Vec2;

use crate::{Ball, BallTuning, Config, Field, LoopState, Paddle, Scoreboard, Side};

/// Everything the simulation mutates during a match
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pub field: Field,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Scoreboard,
}

impl MatchState {
    /// Fresh match: paddles centered, 0:0, ball served toward the right
    pub fn new(config: &Config) -> Self {
        Self {
            field: Field::from_config(config),
            left: Paddle::new(Side::Left, config),
            right: Paddle::new(Side::Right, config),
            ball: Ball::served(Side::Right.sign(), BallTuning::from_config(config)),
            score: Scoreboard::new(),
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn snapshot(&self, tick: u64, phase: LoopState) -> MatchSnapshot {
        MatchSnapshot {
            tick,
            phase,
            ball_pos: self.ball.pos,
            ball_vel: self.ball.vel,
            paddle_left: self.left.pos(),
            paddle_right: self.right.pos(),
            score_left: self.score.left(),
            score_right: self.score.right(),
        }
    }
}

/// Immutable copy of one tick's state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub phase: LoopState,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub paddle_left: Vec2,
    pub paddle_right: Vec2,
    pub score_left: u32,
    pub score_right: u32,
}
