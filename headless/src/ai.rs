use game_core::{BallView, Config, PaddleControl, Side, Snapshot};

/// How far (in pixels) the target may be from the paddle center before it moves
const DEADZONE: f32 = 10.0;

fn incoming(side: Side, vx: f32) -> bool {
    match side {
        Side::Left => vx < 0.0,
        Side::Right => vx > 0.0,
    }
}

/// Pick the ball this paddle should care about: the nearest visible one
/// heading its way, else the nearest visible one.
fn threat(snapshot: &Snapshot, paddle_x: f32, side: Side) -> Option<&BallView> {
    snapshot
        .balls
        .iter()
        .filter(|ball| ball.visible)
        .min_by(|a, b| {
            let rank = |ball: &BallView| {
                (
                    !incoming(side, ball.vel.x),
                    (paddle_x - ball.pos.x).abs(),
                )
            };
            let (a_away, a_dist) = rank(a);
            let (b_away, b_dist) = rank(b);
            a_away.cmp(&b_away).then(a_dist.total_cmp(&b_dist))
        })
}

/// Fold a free-flying y back into the field the way the walls would
fn fold_into_field(y: f32, low: f32, high: f32) -> f32 {
    let span = high - low;
    if span <= 0.0 {
        return low;
    }
    let period = 2.0 * span;
    let t = (y - low).rem_euclid(period);
    if t <= span {
        low + t
    } else {
        high - (t - span)
    }
}

/// Steer the `side` paddle towards where the threatening ball will cross it
pub fn track_ball(snapshot: &Snapshot, side: Side, config: &Config) -> PaddleControl {
    let Some(paddle) = snapshot.paddles.iter().find(|p| p.side == side) else {
        return PaddleControl::default();
    };
    let paddle_x = config.paddle_x(side);

    let target_y = match threat(snapshot, paddle_x, side) {
        Some(ball) => {
            if incoming(side, ball.vel.x) {
                let time_to_reach = (paddle_x - ball.pos.x) / ball.vel.x;
                let predicted_y = ball.pos.y + ball.vel.y * time_to_reach;
                fold_into_field(
                    predicted_y,
                    ball.radius,
                    config.field_height - ball.radius,
                )
            } else {
                // Drift back to the middle while the ball is going away
                config.field_height / 2.0
            }
        }
        None => config.field_height / 2.0,
    };

    let diff = target_y - paddle.pos.y;
    if diff > DEADZONE {
        PaddleControl::down()
    } else if diff < -DEADZONE {
        PaddleControl::up()
    } else {
        PaddleControl::default()
    }
}
