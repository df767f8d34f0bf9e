//! Whole-session scenarios driven through the state manager

use brickfall::input::{InputEvent, Key};
use brickfall::{BrickSource, Game, GameConfig, PlayEvent, WavePolicy};

/// No bricks, so the ball only meets walls and the paddle
fn empty_board() -> GameConfig {
    GameConfig {
        brick_source: BrickSource::Auto,
        auto_nb_brick_lines: 0,
        ..GameConfig::default()
    }
}

/// A single brick low on the board, right above the paddle line at x 400..432
fn one_brick_board() -> GameConfig {
    GameConfig {
        brick_source: BrickSource::Auto,
        auto_nb_brick_lines: 1,
        auto_brick_margin: 400.0,
        wave_policy: WavePolicy::AdvanceLevel,
        ..GameConfig::default()
    }
}

/// Run frames until `pred` matches a drained event, up to `limit` frames
fn run_until(game: &mut Game, limit: u32, pred: impl Fn(&PlayEvent) -> bool) -> Vec<PlayEvent> {
    let mut seen = Vec::new();
    for _ in 0..limit {
        game.frame();
        let events = game.drain_events();
        let done = events.iter().any(&pred);
        seen.extend(events);
        if done {
            return seen;
        }
    }
    panic!("no matching event after {limit} frames: {seen:?}");
}

/// Launch from x 200, then pull the paddle to the far left so the ball drops
fn miss_ball(game: &mut Game) -> Vec<PlayEvent> {
    game.pointer_move(200.0, 300.0);
    game.frame();
    game.input(InputEvent::PointerDown);
    game.pointer_move(0.0, 300.0);
    run_until(game, 400, |e| matches!(e, PlayEvent::BallLost { .. }))
}

#[test]
fn test_lives_count_down_to_game_over() {
    let mut game = Game::new(empty_board(), 7);

    let events = miss_ball(&mut game);
    assert!(events.contains(&PlayEvent::BallLost { lives: 2 }));
    assert_eq!(game.state_name(), "play");
    assert!(!game.play().unwrap().is_running());

    miss_ball(&mut game);
    assert_eq!(game.play().unwrap().lives(), 1);
    assert!(game.scene().find_text("1").is_some());

    let events = miss_ball(&mut game);
    assert!(events.contains(&PlayEvent::BallLost { lives: 0 }));
    assert!(events.contains(&PlayEvent::GameOver { score: 0 }));
    assert_eq!(game.state_name(), "gameOver");
    assert_eq!(game.game_over().unwrap().score(), 0);
    assert!(game.scene().find_text("Game over!").is_some());
}

#[test]
fn test_restart_after_game_over() {
    let mut game = Game::new(
        GameConfig {
            lives: 2,
            ..one_brick_board()
        },
        11,
    );
    assert_eq!(game.play().unwrap().bricks().len(), 1);

    // Clear the only brick so the session ends with progress to undo
    game.pointer_move(416.0, 300.0);
    game.frame();
    game.input(InputEvent::PointerDown);
    let events = run_until(&mut game, 60, |e| matches!(e, PlayEvent::WaveCleared { .. }));
    assert!(events.contains(&PlayEvent::WaveCleared { level: 2, score: 101 }));
    {
        let play = game.play().unwrap();
        assert_eq!(play.score(), 101);
        assert_eq!(play.level(), 2);
        assert_eq!(play.living_bricks(), 1);
    }

    miss_ball(&mut game);
    assert_eq!(game.play().unwrap().lives(), 1);
    let events = miss_ball(&mut game);
    assert!(events.contains(&PlayEvent::GameOver { score: 101 }));
    assert_eq!(game.state_name(), "gameOver");
    assert_eq!(game.game_over().unwrap().score(), 101);

    // Frames don't leave the game over screen on their own
    for _ in 0..30 {
        game.frame();
    }
    assert_eq!(game.state_name(), "gameOver");

    game.input(InputEvent::KeyDown(Key::Space));
    assert_eq!(game.state_name(), "play");
    assert_eq!(game.sessions(), 2);

    let play = game.play().unwrap();
    assert_eq!(play.score(), 0);
    assert_eq!(play.lives(), 2);
    assert_eq!(play.level(), 1);
    assert_eq!(play.living_bricks(), 1);
    assert!(!play.is_running());
    assert!(game.scene().find_text("Score: 0").is_some());
    assert!(game.scene().find_text("Click to start").is_some());
}

#[test]
fn test_centered_rally_gets_a_push() {
    let mut game = Game::new(empty_board(), 3);
    game.input(InputEvent::PointerDown);

    let events = run_until(&mut game, 400, |e| matches!(e, PlayEvent::PaddleHit { .. }));
    let Some(PlayEvent::PaddleHit { vx }) = events.last().copied() else {
        panic!("expected a paddle hit: {events:?}");
    };
    assert!((2.0..10.0).contains(&vx), "vx = {vx}");

    let ball = game.play().unwrap().ball();
    assert!(ball.body.vel.y < 0.0);
    assert_eq!(game.play().unwrap().lives(), 3);
}

#[test]
fn test_game_over_shows_play_score() {
    let mut game = Game::new(
        GameConfig {
            lives: 1,
            ..GameConfig::default()
        },
        5,
    );
    // Straight up under the pyramid's center column
    game.pointer_move(376.0, 300.0);
    game.frame();
    game.input(InputEvent::PointerDown);
    let events = run_until(&mut game, 200, |e| {
        matches!(e, PlayEvent::BrickDestroyed { .. })
    });
    assert!(events.contains(&PlayEvent::BrickDestroyed { score: 1 }));
    let score = game.play().unwrap().score();
    assert_eq!(score, 1);

    game.pointer_move(0.0, 300.0);
    let events = run_until(&mut game, 600, |e| matches!(e, PlayEvent::GameOver { .. }));
    let final_score = game.game_over().unwrap().score();
    assert!(events.contains(&PlayEvent::GameOver { score: final_score }));
    assert_eq!(final_score, score);
    assert!(game.scene().find_text(&final_score.to_string()).is_some());
}
