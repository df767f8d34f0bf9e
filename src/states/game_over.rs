//! Game over screen

use glam::Vec2;

use super::{State, StateContext, Transition};
use crate::assets::AssetCache;
use crate::input::InputEvent;
use crate::scene::{Scene, TextStyle};

pub struct GameOverState {
    score: u32,
    scene: Scene,
}

impl GameOverState {
    /// Takes the final score from the transition, 0 if there was none
    pub fn init(score: Option<u32>) -> Self {
        Self {
            score: score.unwrap_or(0),
            scene: Scene::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl State for GameOverState {
    fn name(&self) -> &'static str {
        "gameOver"
    }

    fn preload(&mut self, assets: &mut AssetCache) {
        assets.load_image("background", "assets/images/bg.png");
    }

    fn create(&mut self, ctx: &mut StateContext<'_>) {
        let center_x = ctx.config.screen.center_x();
        let base = TextStyle::base();

        self.scene.clear();
        self.scene.add_sprite("background", Vec2::ZERO, 0.5);
        self.scene
            .add_centered_text(Vec2::new(center_x, 80.0), "Score", base.clone());
        self.scene.add_centered_text(
            Vec2::new(center_x, 140.0),
            self.score.to_string(),
            base.clone().with_font("50px Arial"),
        );
        self.scene.add_centered_text(
            Vec2::new(center_x, 300.0),
            "Game over!",
            base.clone().with_font("80px Arial"),
        );
        self.scene
            .add_centered_text(Vec2::new(center_x, 370.0), "Click to try again", base);

        log::info!("Game over with score {}", self.score);
    }

    fn handle_input(&mut self, ctx: &mut StateContext<'_>, event: InputEvent) {
        if event.is_activate() {
            ctx.start(Transition::Play);
        }
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }
}
