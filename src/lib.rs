//! Lane Runner - a two-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, combat, pickups)
//! - `tuning`: Data-driven game balance
//! - `renderer`: Draw list the host paints each frame
//! - `platform`: Input event to lane mapping
//! - `hud`: Debug overlay snapshot

pub mod hud;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants that are geometry, not balance
pub mod consts {
    /// Default canvas size
    pub const DEFAULT_WIDTH: f32 = 400.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Lane centers as a fraction of canvas width
    pub const LANE_X_FRACTIONS: [f32; 2] = [0.25, 0.75];
    /// Player center as a fraction of canvas height
    pub const PLAYER_Y_FRACTION: f32 = 0.85;
    /// A lane is clear for spawning once its front zombie reaches this fraction
    pub const SPAWN_CLEAR_FRACTION: f32 = 0.5;
    /// Bosses start chasing the player's lane below this fraction
    pub const BOSS_CHASE_FRACTION: f32 = 0.3;

    /// Entity sizes (width, height)
    pub const PLAYER_SIZE: (f32, f32) = (50.0, 80.0);
    pub const ZOMBIE_SIZE: (f32, f32) = (40.0, 40.0);
    pub const BOSS_SIZE: (f32, f32) = (80.0, 80.0);
    pub const BULLET_SIZE: (f32, f32) = (6.0, 16.0);
    pub const SURVIVOR_SIZE: (f32, f32) = (30.0, 30.0);
    pub const FOLLOWER_SIZE: (f32, f32) = (30.0, 45.0);

    /// Starting health
    pub const ZOMBIE_HEALTH: u8 = 2;
    pub const BOSS_HEALTH: u8 = 10;

    /// Score per kill
    pub const ZOMBIE_SCORE: u64 = 10;
    pub const BOSS_SCORE: u64 = 50;
}

/// One of the two horizontal tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lane {
    #[default]
    Left,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 2] = [Lane::Left, Lane::Right];

    /// Lane index (0 = left, 1 = right)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Right => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Lane::Left),
            1 => Some(Lane::Right),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Lane::Left => Lane::Right,
            Lane::Right => Lane::Left,
        }
    }
}

/// Canvas dimensions; every screen position is a proportion of these
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: consts::DEFAULT_WIDTH,
            height: consts::DEFAULT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center x of a lane
    #[inline]
    pub fn lane_x(&self, lane: Lane) -> f32 {
        self.width * consts::LANE_X_FRACTIONS[lane.index()]
    }

    /// Fixed vertical center of the player
    #[inline]
    pub fn player_y(&self) -> f32 {
        self.height * consts::PLAYER_Y_FRACTION
    }

    /// Vertical midpoint used for lane-clear gating
    #[inline]
    pub fn spawn_clear_y(&self) -> f32 {
        self.height * consts::SPAWN_CLEAR_FRACTION
    }

    #[inline]
    pub fn boss_chase_y(&self) -> f32 {
        self.height * consts::BOSS_CHASE_FRACTION
    }

    /// Point at the center of a lane at height `y`
    #[inline]
    pub fn lane_point(&self, lane: Lane, y: f32) -> Vec2 {
        Vec2::new(self.lane_x(lane), y)
    }
}

/// Build a size vector from a (width, height) constant
#[inline]
pub fn extent(dims: (f32, f32)) -> Vec2 {
    Vec2::new(dims.0, dims.1)
}
