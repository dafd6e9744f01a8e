//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in through `TickInput::now_ms` only
//! - Seeded RNG only
//! - Pools iterate in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod combat;
pub mod fire;
pub mod movement;
pub mod pickup;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap, rects_overlap_vertical};
pub use combat::HitOutcome;
pub use state::{
    Bullet, Follower, GameEvent, GamePhase, GameState, Player, Survivor, Timers, Zombie,
    ZombieKind,
};
pub use tick::{TickInput, tick};
