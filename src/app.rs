//! State manager and frame driver
//!
//! Owns the one live state plus everything shared across states (config,
//! asset cache, pointer, RNG). Frames and input events are forwarded to the
//! live state; a requested transition replaces it right after the callback
//! that asked for it.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::assets::AssetCache;
use crate::config::GameConfig;
use crate::consts::{FRAME_DT, MAX_SUBSTEPS};
use crate::input::{InputEvent, Pointer};
use crate::scene::Scene;
use crate::states::{GameOverState, PlayEvent, PlayState, State, StateContext, Transition};

/// The live state
pub enum ActiveState {
    Play(PlayState),
    GameOver(GameOverState),
}

impl ActiveState {
    fn from_transition(transition: Transition) -> Self {
        match transition {
            Transition::Play => ActiveState::Play(PlayState::new()),
            Transition::GameOver { score } => ActiveState::GameOver(GameOverState::init(score)),
        }
    }

    pub fn as_state(&self) -> &dyn State {
        match self {
            ActiveState::Play(s) => s,
            ActiveState::GameOver(s) => s,
        }
    }

    pub fn as_state_mut(&mut self) -> &mut dyn State {
        match self {
            ActiveState::Play(s) => s,
            ActiveState::GameOver(s) => s,
        }
    }
}

pub struct Game {
    config: GameConfig,
    assets: AssetCache,
    rng: Pcg32,
    pointer: Pointer,
    active: ActiveState,
    accumulator: f32,
    frames: u64,
    sessions: u32,
    events: Vec<PlayEvent>,
}

impl Game {
    /// Start a game on a fresh play session
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let pointer = Pointer::new(config.screen.center_x(), config.screen.height / 2.0);
        let mut game = Self {
            config,
            assets: AssetCache::new(),
            rng: Pcg32::seed_from_u64(seed),
            pointer,
            active: ActiveState::Play(PlayState::new()),
            accumulator: 0.0,
            frames: 0,
            sessions: 0,
            events: Vec::new(),
        };
        game.start(Transition::Play);
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn active(&self) -> &ActiveState {
        &self.active
    }

    pub fn state_name(&self) -> &'static str {
        self.active.as_state().name()
    }

    pub fn scene(&self) -> &Scene {
        self.active.as_state().scene()
    }

    pub fn play(&self) -> Option<&PlayState> {
        match &self.active {
            ActiveState::Play(p) => Some(p),
            ActiveState::GameOver(_) => None,
        }
    }

    pub fn game_over(&self) -> Option<&GameOverState> {
        match &self.active {
            ActiveState::GameOver(g) => Some(g),
            ActiveState::Play(_) => None,
        }
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Frames run since the game was created
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Play sessions started, including the first one
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Play events since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<PlayEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Pointer::new(x, y);
    }

    /// Deliver an input event to the live state
    pub fn input(&mut self, event: InputEvent) {
        let mut ctx = StateContext::new(&self.config, &self.assets, self.pointer, &mut self.rng);
        self.active.as_state_mut().handle_input(&mut ctx, event);
        let next = ctx.take_transition();
        self.collect_events();
        if let Some(next) = next {
            self.start(next);
        }
    }

    /// Run exactly one frame
    pub fn frame(&mut self) {
        self.step(FRAME_DT);
    }

    /// Run as many fixed frames as `dt` seconds cover. Returns the frame count.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= FRAME_DT && substeps < MAX_SUBSTEPS {
            self.step(FRAME_DT);
            self.accumulator -= FRAME_DT;
            substeps += 1;
        }
        substeps
    }

    fn step(&mut self, dt: f32) {
        self.frames += 1;
        let mut ctx = StateContext::new(&self.config, &self.assets, self.pointer, &mut self.rng);
        self.active.as_state_mut().update(&mut ctx, dt);
        let next = ctx.take_transition();
        self.collect_events();
        if let Some(next) = next {
            self.start(next);
        }
    }

    fn collect_events(&mut self) {
        if let ActiveState::Play(play) = &mut self.active {
            self.events.extend(play.drain_events());
        }
    }

    /// Tear down the live state and start `transition`'s state in its place
    fn start(&mut self, transition: Transition) {
        log::info!("Starting state '{}'", transition.name());

        let mut next = ActiveState::from_transition(transition);
        let state = next.as_state_mut();
        state.preload(&mut self.assets);

        let mut ctx = StateContext::new(&self.config, &self.assets, self.pointer, &mut self.rng);
        state.create(&mut ctx);
        let chained = ctx.take_transition();

        self.active = next;
        self.accumulator = 0.0;
        if matches!(transition, Transition::Play) {
            self.sessions += 1;
        }

        if let Some(chained) = chained {
            self.start(chained);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    #[test]
    fn test_starts_in_play() {
        let game = Game::new(GameConfig::default(), 1);
        assert_eq!(game.state_name(), "play");
        assert_eq!(game.sessions(), 1);
        let play = game.play().unwrap();
        assert_eq!(play.lives(), 3);
        assert!(game.scene().find_text("Click to start").is_some());
    }

    #[test]
    fn test_input_reaches_play_state() {
        let mut game = Game::new(GameConfig::default(), 1);
        game.input(InputEvent::PointerDown);
        assert!(game.play().unwrap().is_running());
        assert_eq!(game.drain_events(), vec![PlayEvent::BallLaunched]);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_advance_runs_fixed_frames() {
        let mut game = Game::new(GameConfig::default(), 1);
        assert_eq!(game.advance(FRAME_DT * 3.5), 3);
        assert_eq!(game.frames(), 3);
        // Leftover half frame carries over
        assert_eq!(game.advance(FRAME_DT * 0.6), 1);
        // Long stalls are capped
        assert!(game.advance(10.0) <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_pointer_moves_paddle_next_frame() {
        let mut game = Game::new(GameConfig::default(), 1);
        game.pointer_move(123.0, 10.0);
        assert_eq!(game.play().unwrap().paddle().x(), 400.0);
        game.frame();
        assert_eq!(game.play().unwrap().paddle().x(), 123.0);
    }

    #[test]
    fn test_game_over_ignores_other_keys() {
        let mut game = Game::new(
            GameConfig {
                lives: 1,
                ..GameConfig::default()
            },
            1,
        );
        game.start(Transition::GameOver { score: Some(9) });
        assert_eq!(game.state_name(), "gameOver");
        game.input(InputEvent::KeyDown(Key::Char('z')));
        assert_eq!(game.state_name(), "gameOver");
        game.frame();
        assert_eq!(game.game_over().unwrap().score(), 9);
        game.input(InputEvent::KeyDown(Key::Space));
        assert_eq!(game.state_name(), "play");
        assert_eq!(game.sessions(), 2);
    }
}
