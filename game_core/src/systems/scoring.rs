use crate::{Config, Events, MatchState, Side};

/// Check if ball left the field; returns the side that scored
///
/// The ball is re-served from the center toward the scorer.
pub fn check_scoring(state: &mut MatchState, config: &Config, events: &mut Events) -> Option<Side> {
    let boundary = config.score_boundary();

    let scorer = if state.ball.pos.x > boundary {
        // Right player missed
        events.left_scored = true;
        Side::Left
    } else if state.ball.pos.x < -boundary {
        events.right_scored = true;
        Side::Right
    } else {
        return None;
    };

    state.score.increment(scorer);
    state.ball.reset_to_center(scorer.sign());

    tracing::info!(
        ?scorer,
        left = state.score.left(),
        right = state.score.right(),
        "point scored"
    );
    Some(scorer)
}
