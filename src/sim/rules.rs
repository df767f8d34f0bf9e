//! Gameplay rules that don't depend on any state
//!
//! Paddle clamping, paddle deflection and ball-loss detection, kept as plain
//! functions so they can be property-tested in isolation.

use rand::Rng;

use crate::consts::*;

/// Paddle center for a pointer x, kept `PADDLE_EDGE_MARGIN` away from both sides
#[inline]
pub fn clamp_paddle_x(pointer_x: f32, board_width: f32) -> f32 {
    let mut x = pointer_x;
    if x < PADDLE_EDGE_MARGIN {
        x = PADDLE_EDGE_MARGIN;
    }
    if x > board_width - PADDLE_EDGE_MARGIN {
        x = board_width - PADDLE_EDGE_MARGIN;
    }
    x
}

/// Horizontal ball velocity after bouncing off the paddle.
///
/// Proportional to how far off-center the ball hit. A dead-center hit gets a
/// small random push to the right so the ball never rallies straight up and
/// down forever.
pub fn paddle_deflection<R: Rng + ?Sized>(ball_x: f32, paddle_x: f32, rng: &mut R) -> f32 {
    if ball_x < paddle_x {
        -DEFLECTION_FACTOR * (paddle_x - ball_x)
    } else if ball_x > paddle_x {
        DEFLECTION_FACTOR * (ball_x - paddle_x)
    } else {
        rng.random_range(CENTER_DEFLECTION_MIN..CENTER_DEFLECTION_MAX)
    }
}

/// Whether a ball centered at `ball_y` has dropped out of play
#[inline]
pub fn is_ball_lost(ball_y: f32, board_height: f32) -> bool {
    board_height - ball_y < BALL_LOST_DISTANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp_paddle_x(0.0, 800.0), 40.0);
        assert_eq!(clamp_paddle_x(-500.0, 800.0), 40.0);
        assert_eq!(clamp_paddle_x(800.0, 800.0), 760.0);
        assert_eq!(clamp_paddle_x(400.0, 800.0), 400.0);
        assert_eq!(clamp_paddle_x(40.0, 800.0), 40.0);
        assert_eq!(clamp_paddle_x(760.0, 800.0), 760.0);
    }

    #[test]
    fn test_deflection_examples() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(paddle_deflection(390.0, 400.0, &mut rng), -100.0);
        assert_eq!(paddle_deflection(425.0, 400.0, &mut rng), 250.0);
    }

    #[test]
    fn test_centered_deflection_range() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..1000 {
            let vx = paddle_deflection(400.0, 400.0, &mut rng);
            assert!((2.0..10.0).contains(&vx), "vx = {vx}");
        }
    }

    #[test]
    fn test_centered_deflection_is_seeded() {
        let mut a = Pcg32::seed_from_u64(7);
        let mut b = Pcg32::seed_from_u64(7);
        assert_eq!(
            paddle_deflection(300.0, 300.0, &mut a),
            paddle_deflection(300.0, 300.0, &mut b)
        );
    }

    #[test]
    fn test_ball_lost() {
        assert!(is_ball_lost(592.0, 600.0));
        assert!(!is_ball_lost(590.0, 600.0));
        assert!(!is_ball_lost(478.0, 600.0));
    }

    proptest! {
        #[test]
        fn prop_clamp_keeps_paddle_on_board(x in -2000.0f32..3000.0, width in 100.0f32..2000.0) {
            let clamped = clamp_paddle_x(x, width);
            prop_assert!(clamped >= PADDLE_EDGE_MARGIN);
            prop_assert!(clamped <= width - PADDLE_EDGE_MARGIN);
            if x >= PADDLE_EDGE_MARGIN && x <= width - PADDLE_EDGE_MARGIN {
                prop_assert_eq!(clamped, x);
            } else if x < PADDLE_EDGE_MARGIN {
                prop_assert_eq!(clamped, PADDLE_EDGE_MARGIN);
            } else {
                prop_assert_eq!(clamped, width - PADDLE_EDGE_MARGIN);
            }
        }

        #[test]
        fn prop_left_hits_go_left(paddle_x in 40.0f32..760.0, offset in 0.01f32..40.0) {
            let mut rng = Pcg32::seed_from_u64(0);
            let ball_x = paddle_x - offset;
            let vx = paddle_deflection(ball_x, paddle_x, &mut rng);
            prop_assert!(vx < 0.0);
            prop_assert_eq!(vx, -10.0 * (paddle_x - ball_x));
        }

        #[test]
        fn prop_right_hits_go_right(paddle_x in 40.0f32..760.0, offset in 0.01f32..40.0) {
            let mut rng = Pcg32::seed_from_u64(0);
            let ball_x = paddle_x + offset;
            let vx = paddle_deflection(ball_x, paddle_x, &mut rng);
            prop_assert!(vx > 0.0);
            prop_assert_eq!(vx, 10.0 * (ball_x - paddle_x));
        }
    }
}
