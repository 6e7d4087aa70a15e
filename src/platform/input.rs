//! Input events
//!
//! The frame loop drains an [`InputSource`] once per frame. Events are
//! discrete; the cursor position is tracked separately because the debug
//! drag follows the mouse continuously while the button is held.

use std::collections::VecDeque;

use glam::Vec2;

/// Keys the loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Toggle the debug overlay
    D,
    /// Toggle fullscreen
    F,
    /// Raise the frame-rate cap
    Up,
    /// Lower the frame-rate cap
    Down,
    Escape,
    /// Anything else
    Other,
}

/// Mouse button identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    MouseDown { button: MouseButton, pos: Vec2 },
    MouseUp { button: MouseButton, pos: Vec2 },
    MouseMove(Vec2),
    /// Window close request
    Close,
}

/// Source of input events
pub trait InputSource {
    /// Events received since the previous call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Current cursor position in field coordinates
    fn mouse_position(&self) -> Vec2;
}

/// Replays a fixed per-frame event script
///
/// Frame `n` of the script is returned by the `n`-th call to `poll_events`.
/// Once the script is exhausted the source stays silent, unless a close
/// frame was set, in which case that poll and every later one request a close.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
    mouse: Vec2,
    /// Calls to `poll_events` so far
    polled: u64,
    /// Poll from which a close is requested
    close_at: Option<u64>,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into(),
            mouse: Vec2::ZERO,
            polled: 0,
            close_at: None,
        }
    }

    /// No events for `frames` frames, then a close request
    pub fn close_after(frames: u64) -> Self {
        Self {
            close_at: Some(frames),
            ..Self::default()
        }
    }

    /// Request a close once the script runs out
    pub fn then_close(mut self) -> Self {
        self.close_at = Some(self.polled.saturating_add(self.frames.len() as u64));
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let closing = self.close_at.is_some_and(|at| self.polled >= at);
        self.polled = self.polled.saturating_add(1);

        let events = match self.frames.pop_front() {
            Some(events) => events,
            None if closing => vec![InputEvent::Close],
            None => Vec::new(),
        };

        for event in &events {
            match *event {
                InputEvent::MouseMove(pos)
                | InputEvent::MouseDown { pos, .. }
                | InputEvent::MouseUp { pos, .. } => self.mouse = pos,
                _ => {}
            }
        }

        events
    }

    fn mouse_position(&self) -> Vec2 {
        self.mouse
    }
}
