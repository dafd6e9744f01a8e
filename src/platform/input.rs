//! Input event to lane mapping
//!
//! Both input sources are discrete: arrow keys pick a lane directly, and a
//! tap picks the lane on that half of the canvas.

use crate::{Lane, Viewport};

/// A device-independent input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyLeft,
    KeyRight,
    /// Tap or click at canvas x (pixels)
    Tap { x: f32 },
    /// Pause key
    Pause,
}

/// Lane requested by an event, if any
pub fn lane_for_event(event: InputEvent, viewport: &Viewport) -> Option<Lane> {
    match event {
        InputEvent::KeyLeft => Some(Lane::Left),
        InputEvent::KeyRight => Some(Lane::Right),
        InputEvent::Tap { x } => Some(if x < viewport.width / 2.0 {
            Lane::Left
        } else {
            Lane::Right
        }),
        InputEvent::Pause => None,
    }
}

/// Map a DOM `KeyboardEvent.key` value to an event
pub fn event_for_key(key: &str) -> Option<InputEvent> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(InputEvent::KeyLeft),
        "ArrowRight" | "d" | "D" => Some(InputEvent::KeyRight),
        "Escape" | "p" | "P" => Some(InputEvent::Pause),
        _ => None,
    }
}
