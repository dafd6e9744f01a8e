//! Presentation output
//!
//! The simulation never paints; it produces a list of `DrawCmd`s that the
//! host replays on whatever surface it owns.

pub mod draw;
pub mod scene;

pub use draw::{Color, DrawCmd, colors, css_color};
pub use scene::build_draw_list;
