//! Game states and the transition contract
//!
//! Exactly one state is live at a time. The state manager calls `preload`
//! and `create` when a state starts, then `update` once per frame and
//! `handle_input` for each input event between frames. A state asks for the
//! next state through `StateContext::start`; the manager tears the current
//! one down after the call returns.

pub mod game_over;
pub mod play;

pub use game_over::GameOverState;
pub use play::{PlayEvent, PlayState};

use rand_pcg::Pcg32;

use crate::assets::AssetCache;
use crate::config::GameConfig;
use crate::input::{InputEvent, Pointer};
use crate::scene::Scene;

/// Which state to start next, with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Fresh play session
    Play,
    /// Final screen; a missing score shows as 0
    GameOver { score: Option<u32> },
}

impl Transition {
    pub fn name(&self) -> &'static str {
        match self {
            Transition::Play => "play",
            Transition::GameOver { .. } => "gameOver",
        }
    }
}

/// Everything a state may use during a callback
pub struct StateContext<'a> {
    pub config: &'a GameConfig,
    pub assets: &'a AssetCache,
    pub pointer: Pointer,
    pub rng: &'a mut Pcg32,
    next: Option<Transition>,
}

impl<'a> StateContext<'a> {
    pub fn new(
        config: &'a GameConfig,
        assets: &'a AssetCache,
        pointer: Pointer,
        rng: &'a mut Pcg32,
    ) -> Self {
        Self {
            config,
            assets,
            pointer,
            rng,
            next: None,
        }
    }

    /// Request a transition. The latest request wins.
    pub fn start(&mut self, transition: Transition) {
        self.next = Some(transition);
    }

    pub fn pending(&self) -> Option<Transition> {
        self.next
    }

    pub fn take_transition(&mut self) -> Option<Transition> {
        self.next.take()
    }
}

pub trait State {
    fn name(&self) -> &'static str;

    /// Register the images this state draws
    fn preload(&mut self, assets: &mut AssetCache);

    /// Build the scene and initial gameplay values
    fn create(&mut self, ctx: &mut StateContext<'_>);

    /// Advance one frame
    fn update(&mut self, _ctx: &mut StateContext<'_>, _dt: f32) {}

    fn handle_input(&mut self, ctx: &mut StateContext<'_>, event: InputEvent);

    fn scene(&self) -> &Scene;
}
