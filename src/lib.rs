//! Brickfall - a single-screen Breakout game
//!
//! Core modules:
//! - `sim`: Paddle/ball/brick entities, arcade physics, brick layouts, rules
//! - `states`: The play and game-over states plus the transition contract
//! - `app`: State manager that owns the live state and drives frames
//! - `scene`: Retained sprites and text handed to a renderer
//! - `config`: Static game configuration (JSON-loadable)
//! - `autopilot`: Demo player used by the headless driver

pub mod app;
pub mod assets;
pub mod autopilot;
pub mod config;
pub mod input;
pub mod scene;
pub mod sim;
pub mod states;

pub use app::Game;
pub use config::{BrickSource, GameConfig, WavePolicy};
pub use states::{GameOverState, PlayEvent, PlayState, State, Transition};

/// Game configuration constants
pub mod consts {
    /// Fixed frame timestep (60 Hz, one update per rendered frame)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum updates per `advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Paddle center line
    pub const PADDLE_Y: f32 = 500.0;
    /// Paddle center can't get closer than this to either side of the board
    pub const PADDLE_EDGE_MARGIN: f32 = 40.0;

    /// Ball rests this far above the paddle center while parked
    pub const BALL_REST_OFFSET: f32 = 22.0;
    /// Ball is lost once its center is closer than this to the board bottom
    pub const BALL_LOST_DISTANCE: f32 = 10.0;

    /// Horizontal speed per pixel of offset from the paddle center
    pub const DEFLECTION_FACTOR: f32 = 10.0;
    /// Range for the horizontal kick on a dead-center paddle hit
    pub const CENTER_DEFLECTION_MIN: f32 = 2.0;
    pub const CENTER_DEFLECTION_MAX: f32 = 10.0;

    /// Elastic collisions everywhere
    pub const BOUNCE: f32 = 1.0;

    /// Scoring
    pub const BRICK_SCORE: u32 = 1;
    pub const WAVE_CLEAR_BONUS: u32 = 100;
}
