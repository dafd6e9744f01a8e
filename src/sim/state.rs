//! Game state and core simulation types
//!
//! Everything one run needs lives in `GameState`; the host owns it and
//! hands it to `tick` by mutable reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{Lane, Viewport, extent};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Simulation frozen; timers are rebased on resume
    Paused,
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub lane: Lane,
    pub size: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            lane: Lane::Left,
            size: extent(PLAYER_SIZE),
        }
    }
}

impl Player {
    /// Center of the player for a given viewport
    pub fn pos(&self, viewport: &Viewport) -> Vec2 {
        viewport.lane_point(self.lane, viewport.player_y())
    }

    pub fn rect(&self, viewport: &Viewport) -> Rect {
        Rect::new(self.pos(viewport), self.size)
    }
}

/// Zombie variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZombieKind {
    Regular,
    /// Slow, tough, chases the player's lane and may drop a survivor
    Boss,
}

impl ZombieKind {
    pub fn max_health(self) -> u8 {
        match self {
            ZombieKind::Regular => ZOMBIE_HEALTH,
            ZombieKind::Boss => BOSS_HEALTH,
        }
    }

    pub fn size(self) -> Vec2 {
        match self {
            ZombieKind::Regular => extent(ZOMBIE_SIZE),
            ZombieKind::Boss => extent(BOSS_SIZE),
        }
    }

    pub fn score_value(self) -> u64 {
        match self {
            ZombieKind::Regular => ZOMBIE_SCORE,
            ZombieKind::Boss => BOSS_SCORE,
        }
    }

    /// Descent per tick
    pub fn speed(self, tuning: &Tuning) -> f32 {
        match self {
            ZombieKind::Regular => tuning.zombie_speed,
            ZombieKind::Boss => tuning.boss_speed(),
        }
    }
}

/// A descending enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zombie {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Logical lane; boss drift never changes it
    pub lane: Lane,
    pub kind: ZombieKind,
    pub health: u8,
}

impl Zombie {
    pub fn new(id: u32, kind: ZombieKind, lane: Lane, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: kind.size(),
            lane,
            kind,
            health: kind.max_health(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn is_boss(&self) -> bool {
        self.kind == ZombieKind::Boss
    }
}

/// A projectile travelling up its lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub lane: Lane,
}

impl Bullet {
    pub fn new(id: u32, lane: Lane, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: extent(BULLET_SIZE),
            lane,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A pickup that becomes a follower when the player touches it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survivor {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub lane: Lane,
}

impl Survivor {
    pub fn new(id: u32, lane: Lane, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: extent(SURVIVOR_SIZE),
            lane,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A rescued survivor escorting the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follower {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Mirrors the player's lane every tick
    pub lane: Lane,
}

impl Follower {
    pub fn new(id: u32, lane: Lane, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: extent(FOLLOWER_SIZE),
            lane,
        }
    }
}

/// Notable happenings during a tick, for sound/HUD hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ZombieSpawned { lane: Lane },
    BossSpawned { lane: Lane },
    SurvivorSpawned { lane: Lane },
    BulletFired { lane: Lane },
    ZombieHit { id: u32, health: u8 },
    ZombieKilled { kind: ZombieKind, lane: Lane },
    SurvivorDropped { lane: Lane },
    SurvivorCollected,
    FollowerJoined { count: usize },
}

/// Last-event timestamps in host milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Timers {
    pub last_spawn_ms: f64,
    pub last_boss_ms: f64,
    pub last_fire_ms: f64,
    /// When the current pause began
    pub paused_at_ms: Option<f64>,
}

impl Timers {
    /// Push every timestamp forward so time spent paused does not count
    pub fn rebase(&mut self, paused_for_ms: f64) {
        self.last_spawn_ms += paused_for_ms;
        self.last_boss_ms += paused_for_ms;
        self.last_fire_ms += paused_for_ms;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub player: Player,
    /// Pools, oldest first
    pub zombies: Vec<Zombie>,
    pub bullets: Vec<Bullet>,
    pub survivors: Vec<Survivor>,
    pub followers: Vec<Follower>,
    /// Topmost zombie y per lane, refreshed every tick before spawning
    pub lane_fronts: [Option<f32>; 2],
    pub timers: Timers,
    pub score: u64,
    pub zombies_destroyed: u32,
    /// Ticks simulated (paused ticks excluded)
    pub frame: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game on the default canvas with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Viewport::default(), Tuning::default())
    }

    pub fn with_tuning(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            viewport,
            phase: GamePhase::Playing,
            player: Player::default(),
            zombies: Vec::new(),
            bullets: Vec::new(),
            survivors: Vec::new(),
            followers: Vec::new(),
            lane_fronts: [None; 2],
            timers: Timers::default(),
            score: 0,
            zombies_destroyed: 0,
            frame: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn player_pos(&self) -> Vec2 {
        self.player.pos(&self.viewport)
    }

    pub fn spawn_zombie(&mut self, kind: ZombieKind, lane: Lane, y: f32) -> u32 {
        let id = self.next_entity_id();
        let pos = self.viewport.lane_point(lane, y);
        self.zombies.push(Zombie::new(id, kind, lane, pos));
        id
    }

    pub fn spawn_survivor(&mut self, lane: Lane, y: f32) -> u32 {
        let id = self.next_entity_id();
        let pos = self.viewport.lane_point(lane, y);
        self.survivors.push(Survivor::new(id, lane, pos));
        id
    }

    pub fn spawn_bullet(&mut self, lane: Lane, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.bullets.push(Bullet::new(id, lane, pos));
        id
    }

    /// Append a follower unless the cap is reached
    pub fn try_add_follower(&mut self, pos: Vec2) -> bool {
        if self.followers.len() >= self.tuning.max_followers {
            return false;
        }
        let id = self.next_entity_id();
        let lane = self.player.lane;
        self.followers.push(Follower::new(id, lane, pos));
        true
    }

    /// Formation slot for the follower at `index`
    ///
    /// Slots stack below the player. The gap shrinks when a full formation
    /// would not fit above the bottom edge of the viewport.
    pub fn follower_slot(&self, index: usize) -> Vec2 {
        let base = self.player_pos();
        let lowest = self.viewport.height - FOLLOWER_SIZE.1 * 0.5;
        let room = (lowest - base.y).max(0.0);
        let rows = self.tuning.max_followers.max(1) as f32;
        let spacing = self.tuning.follower_spacing.min(room / rows);
        let y = (base.y + spacing * (index as f32 + 1.0)).min(lowest.max(base.y));
        Vec2::new(base.x, y)
    }

    /// Adopt a new canvas size and snap lane-bound entities to the new lanes
    pub fn resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        self.viewport = viewport;

        for zombie in self.zombies.iter_mut().filter(|z| !z.is_boss()) {
            zombie.pos.x = viewport.lane_x(zombie.lane);
        }
        for bullet in &mut self.bullets {
            bullet.pos.x = viewport.lane_x(bullet.lane);
        }
        for survivor in &mut self.survivors {
            survivor.pos.x = viewport.lane_x(survivor.lane);
        }
        log::info!("Viewport resized to {}x{}", width, height);
    }

    /// Every entity lane, for invariant checks
    pub fn all_lanes(&self) -> impl Iterator<Item = Lane> + '_ {
        std::iter::once(self.player.lane)
            .chain(self.zombies.iter().map(|z| z.lane))
            .chain(self.bullets.iter().map(|b| b.lane))
            .chain(self.survivors.iter().map(|s| s.lane))
            .chain(self.followers.iter().map(|f| f.lane))
    }
}
