//! Platform abstraction layer
//!
//! Turns device input into simulation commands. Time comes from the host and
//! reaches the simulation through `TickInput::now_ms`.

pub mod input;

pub use input::{InputEvent, event_for_key, lane_for_event};

use crate::sim::TickInput;
use crate::{Lane, Viewport};

/// Collects input between frames and hands it to the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    lane: Option<Lane>,
    pause: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event; the latest lane request wins, pause presses toggle
    pub fn push(&mut self, event: InputEvent, viewport: &Viewport) {
        if event == InputEvent::Pause {
            self.pause = !self.pause;
        } else if let Some(lane) = lane_for_event(event, viewport) {
            self.lane = Some(lane);
        }
    }

    /// Build the tick input for `now_ms` and clear one-shot state
    pub fn take(&mut self, now_ms: f64) -> TickInput {
        TickInput {
            now_ms,
            lane: self.lane.take(),
            pause: std::mem::take(&mut self.pause),
            autoplay: false,
        }
    }
}
