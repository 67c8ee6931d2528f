//! Match orchestration and the presentation seams
//!
//! The loop owns the `MatchState`. Hosts plug in an [`InputSource`], a
//! [`Renderer`] and, for real-time play, a [`Clock`].

use std::time::{Duration, Instant};

use crate::systems::ingest_intents;
use crate::{
    step, Config, ConfigError, InputSource, LoopAction, LoopFsm, LoopState, MatchSnapshot,
    MatchState, Params, ServeDelay, Time,
};

/// Presentation layer fed by the loop
pub trait Renderer {
    /// Called once per tick with the post-resolution state
    fn present(&mut self, snapshot: &MatchSnapshot);

    /// Called at match start and whenever the score changes
    fn draw_score_text(&mut self, left: u32, right: u32);
}

/// Time source used for pacing the real-time loop
pub trait Clock {
    /// Time since the clock started
    fn elapsed(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `Instant` and `thread::sleep`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

pub struct GameLoop {
    config: Config,
    state: MatchState,
    fsm: LoopFsm,
    serve: ServeDelay,
    time: Time,
    tick: u64,
}

impl GameLoop {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = MatchState::new(&config);
        tracing::info!(
            timestep = ?config.timestep,
            width = config.field_width,
            height = config.field_height,
            "match started"
        );

        Ok(Self {
            config,
            state,
            fsm: LoopFsm::new(),
            serve: ServeDelay::new(),
            time: Time::default(),
            tick: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn loop_state(&self) -> LoopState {
        self.fsm.state()
    }

    pub fn time(&self) -> Time {
        self.time
    }

    /// Number of ticks simulated so far
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.state.snapshot(self.tick, self.fsm.state())
    }

    /// Run one tick; `dt` is the measured frame delta in seconds
    pub fn tick<I, R>(&mut self, dt: f32, input: &mut I, renderer: &mut R) -> LoopState
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        if self.fsm.is_terminated() {
            return LoopState::Terminated;
        }

        let control = input.poll_control();
        if control.quit {
            self.apply(LoopAction::Quit);
            tracing::info!(
                tick = self.tick,
                left = self.state.score.left(),
                right = self.state.score.right(),
                "quit requested"
            );
            return self.fsm.state();
        }
        if control.reset_score {
            self.state.score.reset();
            tracing::info!("score reset");
            renderer.draw_score_text(0, 0);
        }

        let intents = input.poll_intents();
        ingest_intents(&mut self.state, &intents, &self.config);

        let frame = self.config.timestep.frame(dt);
        self.time.advance(frame.seconds);

        match self.fsm.state() {
            LoopState::Running => {
                let events = step(&mut self.state, &self.config, frame.scale);
                if events.scored() {
                    renderer.draw_score_text(self.state.score.left(), self.state.score.right());
                    if self.config.serve_delay > 0.0 {
                        self.serve.start_delay(self.config.serve_delay);
                        self.apply(LoopAction::Scored);
                    }
                }
            }
            LoopState::Paused => {
                self.serve.update(frame.seconds);
                if self.serve.can_serve() && self.apply(LoopAction::ServeReady) {
                    tracing::debug!(vx = self.state.ball.vel.x, "serve");
                }
            }
            LoopState::Terminated => {}
        }

        self.tick += 1;
        renderer.present(&self.snapshot());
        self.fsm.state()
    }

    /// Feed an action to the state machine; returns whether it was accepted
    fn apply(&mut self, action: LoopAction) -> bool {
        let result = self.fsm.transition(action);
        if !result.success {
            tracing::warn!(
                state = ?result.from_state,
                action = ?result.action,
                "rejected loop transition"
            );
        }
        result.success
    }

    /// Drive the match in real time until a quit is requested
    ///
    /// Fixed timesteps sleep out the rest of each tick period; variable
    /// timesteps only yield briefly between frames. Returns the ticks run.
    pub fn run<I, R, C>(&mut self, input: &mut I, renderer: &mut R, clock: &mut C) -> u64
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
        C: Clock + ?Sized,
    {
        renderer.draw_score_text(self.state.score.left(), self.state.score.right());

        let mut last = clock.elapsed();
        while !self.fsm.is_terminated() {
            let frame_start = clock.elapsed();
            let dt = frame_start.saturating_sub(last).as_secs_f32();
            last = frame_start;

            if self.tick(dt, input, renderer) == LoopState::Terminated {
                break;
            }

            let pause = match self.config.timestep.period() {
                Some(period) => {
                    let busy = clock.elapsed().saturating_sub(frame_start);
                    Duration::from_secs_f32(period).saturating_sub(busy)
                }
                None => Duration::from_millis(Params::IDLE_SLEEP_MS),
            };
            if !pause.is_zero() {
                clock.sleep(pause);
            }
        }

        self.tick
    }
}
