use glam::Vec2;

use crate::Config;

/// Which player a paddle, intent or point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction pointing at this side's edge of the field
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Paddle - one per side, moves only vertically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    side: Side,
    x: f32,
    y: f32,
    height: f32,
    half_width: f32,
    travel: f32, // |y| limit
}

impl Paddle {
    /// Create a paddle at the vertical center of its side
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: 0.0,
            height: config.paddle_height,
            half_width: config.paddle_width / 2.0,
            travel: config.paddle_travel(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Lowest and highest legal center positions
    pub fn y_range(&self) -> (f32, f32) {
        (-self.travel, self.travel)
    }

    /// Shift the paddle vertically; requests past the walls are clamped
    pub fn move_by(&mut self, delta_y: f32) {
        self.y = (self.y + delta_y).clamp(-self.travel, self.travel);
    }
}

/// Speed envelope and bounce behavior of the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallTuning {
    pub speed_start: f32,
    pub speed_max: f32,
    pub serve_ratio: f32,
    pub speed_up: Vec2,
    pub english_gain: f32,
}

impl BallTuning {
    pub fn from_config(config: &Config) -> Self {
        Self {
            speed_start: config.ball_speed_start,
            speed_max: config.ball_speed_max,
            serve_ratio: config.ball_serve_ratio,
            speed_up: config.ball_speed_up,
            english_gain: config.english_gain,
        }
    }
}

/// Ball - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    tuning: BallTuning,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, tuning: BallTuning) -> Self {
        Self { pos, vel, tuning }
    }

    /// Ball at center, served toward `direction` (sign of x)
    pub fn served(direction: f32, tuning: BallTuning) -> Self {
        let mut ball = Self::new(Vec2::ZERO, Vec2::ZERO, tuning);
        ball.reset_to_center(direction);
        ball
    }

    /// Integrate position over `dt_scale` reference frames
    pub fn advance(&mut self, dt_scale: f32) {
        self.pos += self.vel * dt_scale;
    }

    pub fn reflect_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Bounce back horizontally and speed up, capped at the max speed per axis
    pub fn reflect_horizontal(&mut self) {
        self.vel.x = -self.vel.x;

        let max = self.tuning.speed_max;
        let sped_up = (self.vel.abs() * self.tuning.speed_up).min(Vec2::splat(max));
        self.vel = Vec2::new(
            sped_up.x.copysign(self.vel.x),
            sped_up.y.copysign(self.vel.y),
        );
    }

    /// Add spin from where the ball struck the paddle, `offset` in [-1, 1]
    pub fn apply_english(&mut self, offset: f32) {
        let max = self.tuning.speed_max;
        self.vel.y = (self.vel.y + offset * self.tuning.english_gain).clamp(-max, max);
    }

    /// Serve from the center: x toward `direction`, y always upward
    pub fn reset_to_center(&mut self, direction: f32) {
        let start = self.tuning.speed_start;
        self.pos = Vec2::ZERO;
        self.vel = Vec2::new(
            start.copysign(direction),
            start * self.tuning.serve_ratio,
        );
    }
}
