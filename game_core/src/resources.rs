use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    pub dt: f32,  // Seconds simulated by the last tick
    pub now: f32, // Total simulated seconds
}

impl Time {
    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    left: u32,
    right: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scored(&self) -> bool {
        self.left_scored || self.right_scored
    }

    /// Fold the events of a sub-step into this tick's events
    pub fn merge(&mut self, other: Events) {
        self.left_scored |= other.left_scored;
        self.right_scored |= other.right_scored;
        self.ball_hit_paddle |= other.ball_hit_paddle;
        self.ball_hit_wall |= other.ball_hit_wall;
    }
}

/// Countdown before the ball is put back in play after a point
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ServeDelay {
    pub timer: f32, // Seconds remaining (0 = ready to serve)
}

impl ServeDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_delay(&mut self, delay: f32) {
        self.timer = delay;
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
        }
    }

    pub fn can_serve(&self) -> bool {
        self.timer <= 0.0
    }
}
