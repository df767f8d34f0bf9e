//! Paddle, ball and brick entities

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Body;

/// The player's paddle, positioned by its center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Body,
}

impl Paddle {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        let mut body = Body::centered(center, size);
        body.immovable = true;
        body.collide_world_bounds = true;
        Self { body }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.body.center().x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.body.center().y
    }

    pub fn width(&self) -> f32 {
        self.body.size.x
    }

    /// Move the paddle center horizontally
    pub fn set_x(&mut self, x: f32) {
        self.body.pos.x = x - self.body.size.x / 2.0;
    }
}

/// The ball, positioned by its center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    /// Looping spin animation cue
    pub spinning: bool,
}

impl Ball {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        let mut body = Body::centered(center, size);
        body.collide_world_bounds = true;
        Self {
            body,
            spinning: false,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.body.center().x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.body.center().y
    }

    pub fn width(&self) -> f32 {
        self.body.size.x
    }

    /// Launch with the given velocity and start spinning
    pub fn launch(&mut self, vel: Vec2) {
        self.body.vel = vel;
        self.spinning = true;
    }

    /// Move to `center`, stop, and stop spinning
    pub fn reset(&mut self, center: Vec2) {
        self.body.set_center(center);
        self.body.vel = Vec2::ZERO;
        self.spinning = false;
    }
}

/// A brick, positioned by its top-left corner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub body: Body,
    pub alive: bool,
}

impl Brick {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        let mut body = Body::new(pos, size);
        body.immovable = true;
        Self { body, alive: true }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    /// Take the brick out of play
    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn revive(&mut self) {
        self.alive = true;
    }
}

/// Number of bricks still in play
pub fn count_living(bricks: &[Brick]) -> usize {
    bricks.iter().filter(|b| b.alive).count()
}
