use crate::{Config, MatchState, MoveIntent};

/// Apply this tick's move intents to the paddles, in arrival order
pub fn ingest_intents(state: &mut MatchState, intents: &[MoveIntent], config: &Config) {
    for intent in intents {
        let delta = intent.direction.sign() * config.paddle_step;
        state.paddle_mut(intent.side).move_by(delta);
    }
}
