pub mod components;
pub mod config;
pub mod field;
pub mod fsm;
pub mod game_loop;
pub mod input;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use fsm::*;
pub use game_loop::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use systems::{check_collisions, check_scoring, move_ball};

/// Advance the ball by `dt_scale` reference frames and resolve what it hits
///
/// Long frames are split into sub-steps of at most one reference frame so a
/// fast ball cannot skip over a paddle's contact band. Stops at the first
/// point scored.
pub fn step(state: &mut MatchState, config: &Config, dt_scale: f32) -> Events {
    let mut events = Events::new();

    let mut remaining = dt_scale;
    while remaining > 0.0 {
        let sub_step = remaining.min(Params::MAX_SUB_STEP);
        remaining -= sub_step;

        let mut step_events = Events::new();

        // 1. Move ball
        move_ball(state, sub_step);

        // 2. Walls, then paddles
        check_collisions(state, config, &mut step_events);

        // 3. Check scoring (ball exited the field)
        let scored = check_scoring(state, config, &mut step_events).is_some();

        events.merge(step_events);
        if scored {
            break;
        }
    }

    events
}
