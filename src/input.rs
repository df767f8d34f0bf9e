//! Pointer and keyboard input
//!
//! The pointer position is sampled every frame; presses arrive as discrete
//! events between frames.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    Char(char),
}

/// Discrete input delivered between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Mouse button or touch start
    PointerDown,
    KeyDown(Key),
}

impl InputEvent {
    /// Pointer press or spacebar: launch the ball, restart after game over
    pub fn is_activate(&self) -> bool {
        matches!(self, InputEvent::PointerDown | InputEvent::KeyDown(Key::Space))
    }
}

/// Last known pointer position in board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
