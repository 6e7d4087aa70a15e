//! Frame loop
//!
//! One iteration is one rendered frame: drain input, step the simulation
//! with the measured frame delta, draw, then wait for the frame-rate cap.

use glam::Vec2;

use crate::consts::MAX_FRAME_DT;
use crate::error::ConfigError;
use crate::palette;
use crate::platform::{Clock, InputEvent, InputSource, Key, MouseButton};
use crate::renderer::{Renderer, scene};
use crate::settings::Settings;
use crate::sim::{SimState, TickInput, TickOutcome, point_at, tick};

/// Simulation plus the runtime toggles driven by the keyboard and mouse
#[derive(Debug)]
pub struct App {
    settings: Settings,
    pub state: SimState,
    /// Debug overlay (control points, target highlight, dragging)
    pub debug: bool,
    /// Current frame-rate cap
    pub fps: u32,
    running: bool,
    /// Control point picked by the last left click
    selected: Option<usize>,
    /// Simulated frames so far
    frames: u64,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            state: SimState::new(&settings),
            debug: false,
            fps: settings.initial_fps,
            running: true,
            selected: None,
            frames: 0,
            settings,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// React to a single input event
    pub fn handle_event(&mut self, event: &InputEvent, renderer: &mut impl Renderer) {
        match *event {
            InputEvent::KeyDown(Key::D) => {
                self.debug = !self.debug;
                log::info!("Debug overlay: {}", self.debug);
            }
            InputEvent::KeyDown(Key::F) => renderer.toggle_fullscreen(),
            InputEvent::KeyDown(Key::Up) => {
                self.fps = self.settings.faster(self.fps);
                log::info!("Frame-rate cap: {}", self.fps);
            }
            InputEvent::KeyDown(Key::Down) => {
                self.fps = self.settings.slower(self.fps);
                log::info!("Frame-rate cap: {}", self.fps);
            }
            InputEvent::KeyDown(Key::Escape) | InputEvent::Close => {
                log::info!("Quit requested");
                self.running = false;
            }
            InputEvent::MouseDown {
                button: MouseButton::Left,
                pos,
            } => {
                self.selected = point_at(&self.state.points, pos);
            }
            InputEvent::MouseUp {
                button: MouseButton::Left,
                ..
            } => {
                self.selected = None;
            }
            _ => {}
        }
    }

    /// Drag overlay for this frame: only while debugging and holding a point
    fn tick_input(&self, mouse: Vec2) -> TickInput {
        TickInput {
            drag: self.selected.filter(|_| self.debug).map(|idx| (idx, mouse)),
        }
    }

    /// Run one frame. A quit request still lets the current frame finish;
    /// [`App::run`] stops before the next one.
    pub fn frame(
        &mut self,
        renderer: &mut impl Renderer,
        clock: &mut impl Clock,
        input: &mut impl InputSource,
    ) -> TickOutcome {
        for event in input.poll_events() {
            self.handle_event(&event, renderer);
        }

        let dt = clock.delta_seconds().min(MAX_FRAME_DT);
        let tick_input = self.tick_input(input.mouse_position());
        let outcome = tick(&mut self.state, &tick_input, dt);
        self.frames += 1;

        renderer.clear(palette::BACKGROUND);
        scene::draw_help(renderer);
        scene::draw_scene(renderer, &self.state, self.debug);
        renderer.present();
        renderer.set_caption(&format!("FPS: {:.2}", clock.fps()));

        clock.wait_for_next_frame(self.fps);
        outcome
    }

    /// Run frames until a quit is requested
    pub fn run(
        &mut self,
        renderer: &mut impl Renderer,
        clock: &mut impl Clock,
        input: &mut impl InputSource,
    ) {
        log::info!(
            "Running {}x{} field with {} balls at {} fps",
            self.settings.field_width,
            self.settings.field_height,
            self.settings.balls_count,
            self.fps
        );
        while self.running {
            self.frame(renderer, clock, input);
        }
        log::info!(
            "Stopped after {} frames, {} balls captured over {} respawns",
            self.frames,
            self.state.total_captured,
            self.state.cycle
        );
    }
}
