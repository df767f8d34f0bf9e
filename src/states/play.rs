//! Play state: one session from the first wave down to the last life

use glam::Vec2;
use rand::Rng;

use super::{State, StateContext, Transition};
use crate::assets::{AssetCache, ImageInfo};
use crate::config::{BrickSource, ScreenConfig, WavePolicy};
use crate::consts::*;
use crate::input::InputEvent;
use crate::scene::{Align, Scene, TextId, TextStyle};
use crate::sim::collision::{self, Aabb};
use crate::sim::layout::{FIGURE_GRID, auto_slots, figure_for_level, figure_slots};
use crate::sim::rules::{clamp_paddle_x, is_ball_lost, paddle_deflection};
use crate::sim::state::{Ball, Brick, Paddle, count_living};

/// Things that happened during a frame or input callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayEvent {
    BallLaunched,
    PaddleHit { vx: f32 },
    BrickDestroyed { score: u32 },
    WaveCleared { level: u32, score: u32 },
    BallLost { lives: u32 },
    GameOver { score: u32 },
}

/// Outcome of a brick hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickHit {
    /// Bricks remain
    Destroyed,
    /// That was the last living brick
    WaveCleared,
}

#[derive(Debug, Clone, Copy)]
struct Hud {
    score: TextId,
    lives: TextId,
    intro: TextId,
}

/// Layout inputs captured at `create`
#[derive(Debug, Clone, Copy)]
struct BrickSetup {
    source: BrickSource,
    policy: WavePolicy,
    brick: ImageInfo,
    auto_margin: f32,
    auto_lines: u32,
}

pub struct PlayState {
    scene: Scene,
    hud: Hud,
    world: Aabb,
    paddle: Paddle,
    ball: Ball,
    bricks: Vec<Brick>,
    setup: BrickSetup,
    launch_velocity: Vec2,
    is_running: bool,
    score: u32,
    lives: u32,
    level: u32,
    events: Vec<PlayEvent>,
}

impl Default for PlayState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayState {
    pub fn new() -> Self {
        let mut scene = Scene::new();
        let hud = draw_hud(&mut scene, ScreenConfig::default().size(), 0, 0);
        Self {
            scene,
            hud,
            world: Aabb::from_size(Vec2::ZERO),
            paddle: Paddle::new(Vec2::ZERO, Vec2::ZERO),
            ball: Ball::new(Vec2::ZERO, Vec2::ZERO),
            bricks: Vec::new(),
            setup: BrickSetup {
                source: BrickSource::default(),
                policy: WavePolicy::default(),
                brick: ImageInfo::default(),
                auto_margin: 0.0,
                auto_lines: 0,
            },
            launch_velocity: Vec2::ZERO,
            is_running: false,
            score: 0,
            lives: 0,
            level: 1,
            events: Vec::new(),
        }
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn living_bricks(&self) -> usize {
        count_living(&self.bricks)
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Events recorded since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<PlayEvent> {
        std::mem::take(&mut self.events)
    }

    /// Launch the ball from the paddle. Does nothing while it's already in play.
    pub fn start_ball(&mut self) {
        if self.is_running {
            return;
        }
        self.is_running = true;
        self.ball.launch(self.launch_velocity);
        self.scene.set_visible(self.hud.intro, false);
        self.events.push(PlayEvent::BallLaunched);
        log::debug!("Ball launched at {:?}", self.launch_velocity);
    }

    /// Steer the ball by where it landed on the paddle
    pub fn ball_hit_paddle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let vx = paddle_deflection(self.ball.x(), self.paddle.x(), rng);
        self.ball.body.vel.x = vx;
        self.events.push(PlayEvent::PaddleHit { vx });
        log::debug!("Paddle hit at offset {:.1}, vx {:.1}", self.ball.x() - self.paddle.x(), vx);
    }

    /// Destroy the brick at `index` and score it. `None` if there's no living
    /// brick at `index`; nothing is scored then.
    pub fn ball_hit_brick(&mut self, index: usize) -> Option<BrickHit> {
        let brick = self.bricks.get_mut(index).filter(|b| b.alive)?;
        brick.kill();
        self.add_score(BRICK_SCORE);
        self.events.push(PlayEvent::BrickDestroyed { score: self.score });
        log::debug!("Brick {} destroyed, score {}", index, self.score);

        if count_living(&self.bricks) > 0 {
            return Some(BrickHit::Destroyed);
        }

        self.wave_cleared();
        Some(BrickHit::WaveCleared)
    }

    /// Ball dropped past the paddle
    pub fn ball_lost(&mut self, ctx: &mut StateContext<'_>) {
        self.lives = self.lives.saturating_sub(1);
        self.scene.set_text(self.hud.lives, self.lives.to_string());
        self.events.push(PlayEvent::BallLost { lives: self.lives });

        if self.lives == 0 {
            log::info!("Last ball lost, final score {}", self.score);
            self.events.push(PlayEvent::GameOver { score: self.score });
            ctx.start(Transition::GameOver {
                score: Some(self.score),
            });
        } else {
            log::info!("Ball lost, {} lives left", self.lives);
            self.reset_ball();
            self.is_running = false;
        }
    }

    fn wave_cleared(&mut self) {
        self.add_score(WAVE_CLEAR_BONUS);
        self.scene.set_text(self.hud.intro, "Next Level");
        self.scene.set_visible(self.hud.intro, true);

        self.reset_ball();
        self.is_running = false;

        match self.setup.policy {
            WavePolicy::AdvanceLevel => {
                self.level += 1;
                self.bricks.retain(|b| b.alive);
                self.add_bricks();
            }
            WavePolicy::ReviveAll => self.bricks.iter_mut().for_each(Brick::revive),
        }

        self.events.push(PlayEvent::WaveCleared {
            level: self.level,
            score: self.score,
        });
        log::info!(
            "Wave cleared, level {}, score {}, {} bricks",
            self.level,
            self.score,
            self.bricks.len()
        );
    }

    fn add_score(&mut self, amount: u32) {
        self.score += amount;
        self.scene.set_text(self.hud.score, format!("Score: {}", self.score));
    }

    /// Lay out the bricks for the current level
    fn add_bricks(&mut self) {
        let slots = match self.setup.source {
            BrickSource::Figures => figure_slots(Some(figure_for_level(self.level)), &FIGURE_GRID),
            BrickSource::Auto => auto_slots(
                self.world.max.x,
                self.setup.brick.size(),
                self.setup.auto_margin,
                self.setup.auto_lines,
            ),
        };
        let size = self.setup.brick.size();
        self.bricks
            .extend(slots.into_iter().map(|pos| Brick::new(pos, size)));
    }

    /// Park the ball above the paddle's right edge, stopped
    fn reset_ball(&mut self) {
        let center = Vec2::new(
            self.paddle.x() + self.paddle.width() / 2.0,
            self.paddle.y() - BALL_REST_OFFSET,
        );
        self.ball.reset(center);
    }

    fn move_paddle(&mut self, pointer_x: f32) {
        self.paddle.set_x(clamp_paddle_x(pointer_x, self.world.max.x));
    }

    fn check_collisions<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(contact) = collision::collide(&mut self.ball.body, &self.paddle.body) {
            log::trace!("Paddle contact, normal {:?}", contact.normal);
            self.ball_hit_paddle(rng);
        }

        for index in 0..self.bricks.len() {
            if !self.bricks[index].alive {
                continue;
            }
            if collision::collide(&mut self.ball.body, &self.bricks[index].body).is_some()
                && self.ball_hit_brick(index) == Some(BrickHit::WaveCleared)
            {
                break;
            }
        }
    }
}

/// Background, score, lives and intro text. Returns the ids of the texts that change.
fn draw_hud(scene: &mut Scene, board: Vec2, score: u32, lives: u32) -> Hud {
    let small = TextStyle::base().with_font("20px Arial").with_align(Align::Left);

    scene.add_sprite("background", Vec2::ZERO, 0.5);
    let score = scene.add_text(
        Vec2::new(30.0, board.y - 60.0),
        format!("Score: {}", score),
        small.clone(),
    );
    scene.add_sprite("live", Vec2::new(board.x - 60.0, board.y - 59.0), 0.4);
    let lives = scene.add_text(
        Vec2::new(board.x - 80.0, board.y - 60.0),
        lives.to_string(),
        small,
    );
    let intro = scene.add_centered_text(
        Vec2::new(board.x / 2.0, 320.0),
        "Click to start",
        TextStyle::base().with_font("40px Arial"),
    );

    Hud {
        score,
        lives,
        intro,
    }
}

impl State for PlayState {
    fn name(&self) -> &'static str {
        "play"
    }

    fn preload(&mut self, assets: &mut AssetCache) {
        assets.load_image("ball", "assets/images/ball.png");
        assets.load_image("brick", "assets/images/brick.png");
        assets.load_image("paddle", "assets/images/paddle.png");
        assets.load_image("live", "assets/images/live.png");
        assets.load_image("background", "assets/images/bg.png");
    }

    fn create(&mut self, ctx: &mut StateContext<'_>) {
        let config = ctx.config;
        let board = config.screen.size();
        self.world = Aabb::from_size(board);

        self.paddle = Paddle::new(
            Vec2::new(config.screen.center_x(), PADDLE_Y),
            ctx.assets.image_or_empty("paddle").size(),
        );
        self.ball = Ball::new(
            Vec2::new(config.screen.center_x(), PADDLE_Y - BALL_REST_OFFSET),
            ctx.assets.image_or_empty("ball").size(),
        );

        self.setup = BrickSetup {
            source: config.brick_source,
            policy: config.wave_policy,
            brick: ctx.assets.image_or_empty("brick"),
            auto_margin: config.auto_brick_margin,
            auto_lines: config.auto_nb_brick_lines,
        };
        self.launch_velocity = config.ball_velocity;

        self.is_running = false;
        self.score = 0;
        self.level = 1;
        self.lives = config.lives;
        self.events.clear();

        self.bricks.clear();
        self.add_bricks();

        self.scene.clear();
        self.hud = draw_hud(&mut self.scene, board, self.score, self.lives);

        log::info!(
            "Play started: {} lives, {} bricks, {:?} / {}",
            self.lives,
            self.bricks.len(),
            self.setup.source,
            self.setup.policy.as_str()
        );
    }

    fn update(&mut self, ctx: &mut StateContext<'_>, dt: f32) {
        for edge in collision::integrate(&mut self.ball.body, dt, &self.world) {
            log::trace!("Ball bounced off {:?} edge", edge);
        }

        self.move_paddle(ctx.pointer.x);

        if !self.is_running {
            self.ball.body.pos.x = self.paddle.x() - self.ball.width() / 2.0;
        } else if is_ball_lost(self.ball.y(), self.world.max.y) {
            self.ball_lost(ctx);
        } else {
            self.check_collisions(&mut *ctx.rng);
        }
    }

    fn handle_input(&mut self, _ctx: &mut StateContext<'_>, event: InputEvent) {
        if event.is_activate() {
            self.start_ball();
        }
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }
}
