use crate::{Aabb, Ball, Config, Events, Field, MatchState, Paddle, Side};
use glam::Vec2;

/// Check ball collisions with walls, then paddles
pub fn check_collisions(state: &mut MatchState, config: &Config, events: &mut Events) {
    resolve_walls(&mut state.ball, &state.field, events);

    let paddles = [state.left, state.right];
    for paddle in &paddles {
        if resolve_paddle(&mut state.ball, paddle, config) {
            events.ball_hit_paddle = true;
        }
    }
}

/// Bounce off the top and bottom walls
pub fn resolve_walls(ball: &mut Ball, field: &Field, events: &mut Events) {
    let wall_y = field.wall_y();
    if ball.pos.y.abs() <= wall_y {
        return;
    }

    ball.pos.y = ball.pos.y.clamp(-wall_y, wall_y);
    ball.reflect_vertical();
    events.ball_hit_wall = true;
    tracing::trace!(y = ball.pos.y, vy = ball.vel.y, "wall bounce");
}

/// X the ball is pushed back to after touching this paddle
pub fn contact_boundary(paddle: &Paddle, config: &Config) -> f32 {
    let reach = paddle.half_width() + config.contact_margin;
    match paddle.side() {
        Side::Left => paddle.x() + reach,
        Side::Right => paddle.x() - reach,
    }
}

/// Region in front of a paddle where the ball counts as touching it
pub fn contact_band(paddle: &Paddle, config: &Config) -> Aabb {
    let boundary = contact_boundary(paddle, config);
    let half_height = paddle.height() / 2.0 + config.contact_tolerance;
    let (min_x, max_x) = match paddle.side() {
        Side::Left => (paddle.x(), boundary),
        Side::Right => (boundary, paddle.x()),
    };
    Aabb::new(
        Vec2::new(min_x, paddle.y() - half_height),
        Vec2::new(max_x, paddle.y() + half_height),
    )
}

/// Bounce the ball off one paddle; returns whether it hit
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    // Only a ball heading at the paddle can hit it, so a ball still inside
    // the band after bouncing is not sent back.
    let approaching = match paddle.side() {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };
    if !approaching || !contact_band(paddle, config).contains_strict(ball.pos) {
        return false;
    }

    // Relative position from -1 (bottom) to 1 (top)
    let offset = ((ball.pos.y - paddle.y()) / (paddle.height() / 2.0)).clamp(-1.0, 1.0);

    ball.pos.x = contact_boundary(paddle, config);
    ball.reflect_horizontal();
    ball.apply_english(offset);

    tracing::debug!(
        side = ?paddle.side(),
        offset,
        vx = ball.vel.x,
        vy = ball.vel.y,
        "paddle hit"
    );
    true
}
