//! Arcade physics: axis-aligned bodies, world bounds, and bounce response
//!
//! Bodies are boxes positioned by their top-left corner. Only one side of a
//! collision ever moves; the other body is treated as immovable, which covers
//! everything in this game (paddle and bricks never get pushed).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::BOUNCE;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from the origin to `size` (the world)
    pub fn from_size(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size)
    }

    /// Strict overlap: boxes that only touch along an edge don't collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// A physics body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Fraction of speed kept when bouncing (1 = elastic)
    pub bounce: f32,
    /// Never moved by integration or collisions
    pub immovable: bool,
    /// Clamp to (and bounce off) the world edges
    pub collide_world_bounds: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            bounce: BOUNCE,
            immovable: false,
            collide_world_bounds: false,
        }
    }

    /// Body centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size / 2.0, size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + self.size)
    }
}

/// Which world edge a body bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEdge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Result of a body-vs-body collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the obstacle toward the moving body
    pub normal: Vec2,
}

/// Advance a body by one step and keep it inside `world`.
///
/// Returns the edges it bounced off this step.
pub fn integrate(body: &mut Body, dt: f32, world: &Aabb) -> Vec<WorldEdge> {
    if body.immovable {
        return Vec::new();
    }
    body.pos += body.vel * dt;

    if body.collide_world_bounds {
        clamp_to_world(body, world)
    } else {
        Vec::new()
    }
}

/// Push a body back inside `world`, reflecting velocity on each edge it crossed
pub fn clamp_to_world(body: &mut Body, world: &Aabb) -> Vec<WorldEdge> {
    let mut edges = Vec::new();

    if body.pos.x < world.min.x {
        body.pos.x = world.min.x;
        body.vel.x = body.vel.x.abs() * body.bounce;
        edges.push(WorldEdge::Left);
    } else if body.pos.x + body.size.x > world.max.x {
        body.pos.x = world.max.x - body.size.x;
        body.vel.x = -body.vel.x.abs() * body.bounce;
        edges.push(WorldEdge::Right);
    }

    if body.pos.y < world.min.y {
        body.pos.y = world.min.y;
        body.vel.y = body.vel.y.abs() * body.bounce;
        edges.push(WorldEdge::Top);
    } else if body.pos.y + body.size.y > world.max.y {
        body.pos.y = world.max.y - body.size.y;
        body.vel.y = -body.vel.y.abs() * body.bounce;
        edges.push(WorldEdge::Bottom);
    }

    edges
}

/// Collide a moving body against an immovable one.
///
/// On overlap the mover is pushed out along the axis of least penetration and
/// its velocity on that axis is turned away from the obstacle, scaled by its
/// bounce. Returns `None` if the boxes don't overlap.
pub fn collide(mover: &mut Body, obstacle: &Body) -> Option<Contact> {
    let a = mover.aabb();
    let b = obstacle.aabb();
    if !a.overlaps(&b) {
        return None;
    }

    let overlap_x = a.max.x.min(b.max.x) - a.min.x.max(b.min.x);
    let overlap_y = a.max.y.min(b.max.y) - a.min.y.max(b.min.y);
    let delta = mover.center() - obstacle.center();

    let contact = if overlap_x < overlap_y {
        let dir = if delta.x < 0.0 { -1.0 } else { 1.0 };
        mover.pos.x += dir * overlap_x;
        mover.vel.x = dir * mover.vel.x.abs() * mover.bounce;
        Contact {
            normal: Vec2::new(dir, 0.0),
        }
    } else {
        let dir = if delta.y < 0.0 { -1.0 } else { 1.0 };
        mover.pos.y += dir * overlap_y;
        mover.vel.y = dir * mover.vel.y.abs() * mover.bounce;
        Contact {
            normal: Vec2::new(0.0, dir),
        }
    };

    Some(contact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(center: Vec2, vel: Vec2) -> Body {
        let mut body = Body::centered(center, Vec2::splat(16.0));
        body.vel = vel;
        body.collide_world_bounds = true;
        body
    }

    fn wall(center: Vec2, size: Vec2) -> Body {
        let mut body = Body::centered(center, size);
        body.immovable = true;
        body
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.overlaps(&b));
        let c = Aabb::new(Vec2::new(9.5, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_integrate_moves_body() {
        let world = Aabb::from_size(Vec2::new(800.0, 600.0));
        let mut ball = ball_at(Vec2::new(400.0, 300.0), Vec2::new(60.0, -120.0));
        let edges = integrate(&mut ball, 0.5, &world);
        assert!(edges.is_empty());
        assert_eq!(ball.center(), Vec2::new(430.0, 240.0));
    }

    #[test]
    fn test_immovable_does_not_integrate() {
        let world = Aabb::from_size(Vec2::new(800.0, 600.0));
        let mut brick = wall(Vec2::new(100.0, 100.0), Vec2::new(32.0, 16.0));
        brick.vel = Vec2::new(100.0, 0.0);
        integrate(&mut brick, 1.0, &world);
        assert_eq!(brick.center(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_world_bounds_bounce() {
        let world = Aabb::from_size(Vec2::new(800.0, 600.0));
        let mut ball = ball_at(Vec2::new(400.0, 10.0), Vec2::new(0.0, -300.0));
        let edges = integrate(&mut ball, 0.1, &world);
        assert_eq!(edges, vec![WorldEdge::Top]);
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel, Vec2::new(0.0, 300.0));
    }

    #[test]
    fn test_corner_bounce_reflects_both_axes() {
        let world = Aabb::from_size(Vec2::new(800.0, 600.0));
        let mut ball = ball_at(Vec2::new(795.0, 595.0), Vec2::new(100.0, 100.0));
        let edges = integrate(&mut ball, 0.1, &world);
        assert_eq!(edges, vec![WorldEdge::Right, WorldEdge::Bottom]);
        assert_eq!(ball.vel, Vec2::new(-100.0, -100.0));
    }

    #[test]
    fn test_collide_from_above() {
        // Ball falling onto a paddle
        let paddle = wall(Vec2::new(400.0, 500.0), Vec2::new(64.0, 16.0));
        let mut ball = ball_at(Vec2::new(410.0, 486.0), Vec2::new(30.0, 300.0));

        let contact = collide(&mut ball, &paddle).expect("should hit");
        assert_eq!(contact.normal, Vec2::new(0.0, -1.0));
        // Pushed out by the 2px overlap
        assert_eq!(ball.pos.y, 476.0);
        assert_eq!(ball.vel, Vec2::new(30.0, -300.0));
        assert!(!ball.aabb().overlaps(&paddle.aabb()));
    }

    #[test]
    fn test_collide_from_side() {
        let brick = wall(Vec2::new(100.0, 100.0), Vec2::new(32.0, 16.0));
        let mut ball = ball_at(Vec2::new(122.0, 100.0), Vec2::new(-200.0, 50.0));

        let contact = collide(&mut ball, &brick).expect("should hit");
        assert_eq!(contact.normal, Vec2::new(1.0, 0.0));
        assert_eq!(ball.vel, Vec2::new(200.0, 50.0));
    }

    #[test]
    fn test_collide_miss() {
        let brick = wall(Vec2::new(100.0, 100.0), Vec2::new(32.0, 16.0));
        let mut ball = ball_at(Vec2::new(200.0, 200.0), Vec2::new(0.0, -300.0));
        assert!(collide(&mut ball, &brick).is_none());
        assert_eq!(ball.vel, Vec2::new(0.0, -300.0));
    }
}
