use crate::MatchState;

/// Move ball based on velocity
pub fn move_ball(state: &mut MatchState, dt_scale: f32) {
    state.ball.advance(dt_scale);
}
