//! Platform abstraction layer
//!
//! Everything the frame loop needs from the outside world:
//! - Time/frame pacing
//! - Input events

pub mod input;
pub mod time;

pub use input::{InputEvent, InputSource, Key, MouseButton, ScriptedInput};
pub use time::{Clock, FixedClock, SystemClock};
