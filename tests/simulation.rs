//! End-to-end runs of the frame loop against headless collaborators

use glam::Vec2;

use vacuum_chase::platform::{Clock, FixedClock, InputEvent, Key, MouseButton, ScriptedInput};
use vacuum_chase::renderer::MeshRenderer;
use vacuum_chase::{App, Settings, palette};

fn small_app(balls: u32) -> App {
    App::new(Settings {
        balls_count: balls,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_batch_is_collected_and_respawned() {
    let mut app = small_app(3);
    let mut r = MeshRenderer::new();
    let mut clock = FixedClock::new(60);
    let mut input = ScriptedInput::default();

    let mut emptied = false;
    for _ in 0..20_000 {
        let outcome = app.frame(&mut r, &mut clock, &mut input);
        if emptied {
            assert!(outcome.respawned);
            let caught_now = usize::from(outcome.captured.is_some());
            assert_eq!(app.state.balls.len() + caught_now, 3);
            assert_eq!(app.state.cleaner.captured as usize, caught_now);
            assert_eq!(app.state.cycle, 1);
            return;
        }
        if app.state.balls.is_empty() {
            assert_eq!(app.state.cleaner.captured, 3);
            assert_eq!(app.state.cleaner.fill_factor(), 1.0);
            assert_eq!(app.state.target, None);
            emptied = true;
        }
    }
    panic!("batch was never collected");
}

#[test]
fn test_balls_stay_in_field() {
    let mut app = small_app(50);
    let mut r = MeshRenderer::new();
    let mut clock = FixedClock::new(60);
    let mut input = ScriptedInput::default();

    for _ in 0..1000 {
        app.frame(&mut r, &mut clock, &mut input);
        let bounds = app.state.bounds;
        for ball in &app.state.balls {
            assert!(bounds.contains_circle(ball.pos, ball.radius), "{:?}", ball);
        }
    }
}

#[test]
fn test_debug_drag_follows_mouse_until_release() {
    let mut app = small_app(5);
    let mut r = MeshRenderer::new();
    let mut clock = FixedClock::new(60);

    let mut input = ScriptedInput::new(vec![vec![InputEvent::KeyDown(Key::D)]]);
    app.frame(&mut r, &mut clock, &mut input);
    assert!(app.debug);
    assert_eq!(r.last_frame().labels.len(), 9);

    let p1 = app.state.points[1].pos;
    let cursor = Vec2::new(640.0, 100.0);
    let mut input = ScriptedInput::new(vec![
        vec![
            InputEvent::MouseDown {
                button: MouseButton::Left,
                pos: p1,
            },
            InputEvent::MouseMove(cursor),
        ],
        vec![],
    ]);
    app.frame(&mut r, &mut clock, &mut input);
    assert_eq!(app.selected(), Some(1));
    assert_eq!(app.state.points[1].pos, cursor);

    // Still held: stays under the cursor
    app.frame(&mut r, &mut clock, &mut input);
    assert_eq!(app.state.points[1].pos, cursor);

    let mut input = ScriptedInput::new(vec![vec![InputEvent::MouseUp {
        button: MouseButton::Left,
        pos: cursor,
    }]]);
    app.frame(&mut r, &mut clock, &mut input);
    assert_eq!(app.selected(), None);
    assert_eq!(app.state.points[1].pos.y, 720.0 - 340.0);
}

#[test]
fn test_speed_keys_change_frame_delta() {
    let mut app = small_app(5);
    let mut r = MeshRenderer::new();
    let mut clock = FixedClock::new(60);

    let mut input = ScriptedInput::new(vec![
        vec![InputEvent::KeyDown(Key::Up)],
        vec![InputEvent::KeyDown(Key::Down), InputEvent::KeyDown(Key::Down)],
    ]);
    app.frame(&mut r, &mut clock, &mut input);
    assert_eq!(app.fps, 70);
    assert!((clock.delta_seconds() - 1.0 / 70.0).abs() < 1e-6);

    app.frame(&mut r, &mut clock, &mut input);
    assert_eq!(app.fps, 50);
    assert_eq!(r.caption(), "FPS: 70.00");
}

#[test]
fn test_escape_finishes_current_frame() {
    let mut app = small_app(5);
    let mut r = MeshRenderer::new();
    let mut clock = FixedClock::new(60);
    let mut input = ScriptedInput::new(vec![
        vec![],
        vec![InputEvent::KeyDown(Key::Escape), InputEvent::KeyDown(Key::D)],
        vec![InputEvent::KeyDown(Key::Up)],
    ]);

    app.run(&mut r, &mut clock, &mut input);
    assert_eq!(app.frames(), 2);
    assert!(!app.is_running());
    // Events after the quit in the same frame are still handled
    assert!(app.debug);
    assert_eq!(app.fps, 60);
    assert_eq!(r.frames_presented(), 2);
    assert_eq!(r.last_frame().clear_color, palette::BACKGROUND);
}

#[test]
fn test_huge_headless_frame_count_starts() {
    let settings = Settings::from_json(r#"{ "headless_frames": 18446744073709551615, "balls_count": 5 }"#)
        .unwrap();
    assert!(settings.validate().is_ok());

    let mut input = ScriptedInput::close_after(settings.headless_frames);
    let mut app = App::new(settings).unwrap();
    let mut r = MeshRenderer::new();
    let mut clock = FixedClock::new(60);
    for _ in 0..10 {
        app.frame(&mut r, &mut clock, &mut input);
    }
    assert!(app.is_running());
    assert_eq!(app.frames(), 10);
}

#[test]
fn test_settings_file_round_trip() {
    let settings = Settings {
        balls_count: 7,
        trunk_speed: 12.5,
        ..Default::default()
    };
    let path = std::env::temp_dir().join(format!("vacuum_settings_{}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, settings);
    assert!(loaded.validate().is_ok());
}
