use crate::{Params, Side};
use glam::Vec2;

/// How wall-clock time maps onto simulation time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timestep {
    /// Every tick advances exactly one reference frame and lasts `1 / tick_rate` seconds.
    Fixed { tick_rate: f32 },
    /// Ticks advance by the measured frame delta, capped at `max_dt` seconds.
    Variable { max_dt: f32 },
}

impl Timestep {
    /// Variable timestep with the default hitch cap
    pub fn variable() -> Self {
        Timestep::Variable {
            max_dt: Params::MAX_DT,
        }
    }

    /// Resolve a measured frame delta into the time this tick simulates
    pub fn frame(&self, dt: f32) -> Frame {
        match *self {
            Timestep::Fixed { tick_rate } => Frame {
                seconds: 1.0 / tick_rate,
                scale: 1.0,
            },
            Timestep::Variable { max_dt } => {
                let seconds = dt.clamp(0.0, max_dt);
                Frame {
                    seconds,
                    scale: seconds * Params::REFERENCE_FRAME_RATE,
                }
            }
        }
    }

    /// Target tick period for real-time pacing (fixed policy only)
    pub fn period(&self) -> Option<f32> {
        match *self {
            Timestep::Fixed { tick_rate } => Some(1.0 / tick_rate),
            Timestep::Variable { .. } => None,
        }
    }
}

impl Default for Timestep {
    fn default() -> Self {
        Timestep::Fixed {
            tick_rate: Params::TICK_RATE,
        }
    }
}

/// Simulation time covered by one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub seconds: f32,
    /// Number of reference frames (1/60 s) the ball advances this tick
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("field must have a positive size, got {width}x{height}")]
    FieldSize { width: f32, height: f32 },
    #[error("paddle of height {paddle_height} does not fit a field of height {field_height}")]
    PaddleTooTall {
        paddle_height: f32,
        field_height: f32,
    },
    #[error("ball speed envelope is invalid: start {start}, max {max}")]
    SpeedEnvelope { start: f32, max: f32 },
    #[error("timestep must be positive: {0:?}")]
    Timestep(Timestep),
    #[error("serve delay cannot be negative: {0}")]
    ServeDelay(f32),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub wall_margin: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    pub paddle_inset: f32,
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub ball_speed_start: f32,
    pub ball_speed_max: f32,
    pub ball_serve_ratio: f32,
    pub ball_speed_up: Vec2,
    pub english_gain: f32,
    pub contact_margin: f32,
    pub contact_tolerance: f32,
    pub score_margin: f32,
    pub serve_delay: f32,
    pub timestep: Timestep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            wall_margin: Params::WALL_MARGIN,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_step: Params::PADDLE_STEP,
            paddle_inset: Params::PADDLE_INSET,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_speed_start: Params::BALL_SPEED_START,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_serve_ratio: Params::BALL_SERVE_RATIO,
            ball_speed_up: Vec2::new(Params::BALL_SPEED_UP_X, Params::BALL_SPEED_UP_Y),
            english_gain: Params::ENGLISH_GAIN,
            contact_margin: Params::CONTACT_MARGIN,
            contact_tolerance: Params::CONTACT_TOLERANCE,
            score_margin: Params::SCORE_MARGIN,
            serve_delay: Params::SERVE_DELAY,
            timestep: Timestep::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle based on its side
    pub fn paddle_x(&self, side: Side) -> f32 {
        let x = self.field_width / 2.0 - self.paddle_inset;
        match side {
            Side::Left => -x,
            Side::Right => x,
        }
    }

    /// Largest |y| a paddle center may reach
    pub fn paddle_travel(&self) -> f32 {
        (self.field_height / 2.0 - self.paddle_height / 2.0 - self.paddle_margin).max(0.0)
    }

    /// Clamp paddle Y to the legal travel range
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let travel = self.paddle_travel();
        y.clamp(-travel, travel)
    }

    /// |x| past which the ball counts as out
    pub fn score_boundary(&self) -> f32 {
        self.field_width / 2.0 - self.score_margin
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::FieldSize {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.paddle_height + 2.0 * self.paddle_margin > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                field_height: self.field_height,
            });
        }
        if !(self.ball_speed_start > 0.0 && self.ball_speed_start <= self.ball_speed_max) {
            return Err(ConfigError::SpeedEnvelope {
                start: self.ball_speed_start,
                max: self.ball_speed_max,
            });
        }
        let timestep_ok = match self.timestep {
            Timestep::Fixed { tick_rate } => tick_rate > 0.0,
            Timestep::Variable { max_dt } => max_dt > 0.0,
        };
        if !timestep_ok {
            return Err(ConfigError::Timestep(self.timestep));
        }
        if self.serve_delay < 0.0 {
            return Err(ConfigError::ServeDelay(self.serve_delay));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), -390.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 390.0, "Right paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let limit = config.field_height / 2.0 - config.paddle_height / 2.0 - config.paddle_margin;
        assert_eq!(config.clamp_paddle_y(-1000.0), -limit);
        assert_eq!(config.clamp_paddle_y(1000.0), limit);
        assert_eq!(config.clamp_paddle_y(12.0), 12.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_field() {
        let config = Config {
            field_height: 0.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FieldSize { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_paddle() {
        let config = Config {
            paddle_height: 600.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_speed_envelope() {
        let config = Config {
            ball_speed_start: 20.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpeedEnvelope { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_tick_rate() {
        let config = Config {
            timestep: Timestep::Fixed { tick_rate: 0.0 },
            ..Config::new()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Timestep(_))));
    }

    #[test]
    fn test_fixed_timestep_advances_one_reference_frame() {
        let frame = Timestep::Fixed { tick_rate: 120.0 }.frame(0.5);
        assert_eq!(frame.scale, 1.0, "Fixed ticks ignore the measured delta");
        assert!((frame.seconds - 1.0 / 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_variable_timestep_caps_delta() {
        let timestep = Timestep::variable();
        let frame = timestep.frame(0.25);
        assert_eq!(frame.seconds, 0.03, "Large hitches are capped");
        assert!((frame.scale - 1.8).abs() < 1e-5);

        let frame = timestep.frame(1.0 / 60.0);
        assert!((frame.scale - 1.0).abs() < 1e-5, "One frame at 60 Hz is one reference frame");
        assert_eq!(timestep.period(), None);
    }
}
