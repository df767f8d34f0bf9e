//! Game simulation
//!
//! Entities, arcade physics, brick layouts and gameplay rules. Nothing in
//! here knows about states, scenes or input:
//! - Positions in board pixels, y pointing down
//! - Randomness only through a caller-supplied RNG

pub mod collision;
pub mod layout;
pub mod rules;
pub mod state;

pub use collision::{Aabb, Body, Contact, WorldEdge, clamp_to_world, collide, integrate};
pub use layout::{
    FIGURE_1, FIGURE_2, FIGURE_GRID, Figure, GridSpec, TOP_OFFSET, auto_columns, auto_slots,
    figure_for_level, figure_slots, slot_position,
};
pub use rules::{clamp_paddle_x, is_ball_lost, paddle_deflection};
pub use state::{Ball, Brick, Paddle, count_living};
