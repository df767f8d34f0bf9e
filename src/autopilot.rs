//! Demo player
//!
//! Plays a session without a human: launches the ball whenever it's parked
//! and steers the pointer under the ball with a drifting offset, so rallies
//! don't settle into a perfect loop.

use crate::states::PlayState;

/// What the autopilot wants done this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Action {
    pub pointer_x: f32,
    pub launch: bool,
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Pointer speed cap in px/s
    pub max_speed: f32,
    pointer_x: Option<f32>,
    time: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(450.0)
    }
}

impl Autopilot {
    pub fn new(max_speed: f32) -> Self {
        Self {
            max_speed,
            pointer_x: None,
            time: 0.0,
        }
    }

    /// Forget the pointer position, e.g. after a new session starts
    pub fn reset(&mut self) {
        self.pointer_x = None;
    }

    pub fn plan(&mut self, play: &PlayState, dt: f32) -> Action {
        self.time += dt;
        let paddle_x = play.paddle().x();
        let current = self.pointer_x.unwrap_or(paddle_x);

        if !play.is_running() {
            self.pointer_x = Some(current);
            return Action {
                pointer_x: current,
                launch: true,
            };
        }

        // Stays within the paddle's half-width
        let t = self.time;
        let offset = (t.sin() * 0.6 + (t * 0.7).sin() * 0.3) * play.paddle().width() / 2.0;
        let target = play.ball().x() + offset;

        let max_step = self.max_speed * dt;
        let next = current + (target - current).clamp(-max_step, max_step);
        self.pointer_x = Some(next);

        Action {
            pointer_x: next,
            launch: false,
        }
    }
}
