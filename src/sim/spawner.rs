//! Zombie, boss and survivor spawning
//!
//! Regular spawns respect a cooldown and a per-lane clearance check so a
//! lane is never flooded; the boss arrives on its own timer regardless.

use rand::Rng;

use super::state::{GameEvent, GameState, ZombieKind};
use crate::Lane;

/// Refresh the topmost (least progressed) zombie y of each lane
pub fn update_lane_fronts(state: &mut GameState) {
    let mut fronts = [None; 2];
    for zombie in &state.zombies {
        let slot: &mut Option<f32> = &mut fronts[zombie.lane.index()];
        *slot = Some(match *slot {
            Some(y) => zombie.pos.y.min(y),
            None => zombie.pos.y,
        });
    }
    state.lane_fronts = fronts;
}

/// A lane is clear when its front zombie has reached the midpoint (or it is empty)
pub fn lane_is_clear(state: &GameState, lane: Lane) -> bool {
    match state.lane_fronts[lane.index()] {
        Some(y) => y >= state.viewport.spawn_clear_y(),
        None => true,
    }
}

/// Pick a clear lane, uniformly at random when both are clear
pub fn choose_spawn_lane(state: &mut GameState) -> Option<Lane> {
    match (
        lane_is_clear(state, Lane::Left),
        lane_is_clear(state, Lane::Right),
    ) {
        (false, false) => None,
        (true, false) => Some(Lane::Left),
        (false, true) => Some(Lane::Right),
        (true, true) => Some(random_lane(state)),
    }
}

fn random_lane(state: &mut GameState) -> Lane {
    if state.rng.random_bool(0.5) {
        Lane::Right
    } else {
        Lane::Left
    }
}

/// Spawn a boss once its interval has elapsed
pub fn spawn_boss_if_due(state: &mut GameState, now_ms: f64) -> bool {
    if now_ms - state.timers.last_boss_ms < state.tuning.boss_interval_ms {
        return false;
    }

    let lane = random_lane(state);
    let y = -state.tuning.spawn_offset;
    let id = state.spawn_zombie(ZombieKind::Boss, lane, y);
    state.timers.last_boss_ms = now_ms;
    state.events.push(GameEvent::BossSpawned { lane });
    log::info!("Boss {} spawned in lane {}", id, lane.index());
    true
}

/// Spawn a regular zombie or a survivor into a clear lane once the cooldown allows
pub fn spawn_regular_if_due(state: &mut GameState, now_ms: f64) -> bool {
    if now_ms - state.timers.last_spawn_ms < state.tuning.spawn_interval_ms {
        return false;
    }

    let Some(lane) = choose_spawn_lane(state) else {
        return false;
    };

    let y = -state.tuning.spawn_offset;
    let roll: f32 = state.rng.random();
    if roll < state.tuning.survivor_chance {
        state.spawn_survivor(lane, y);
        state.events.push(GameEvent::SurvivorSpawned { lane });
    } else {
        state.spawn_zombie(ZombieKind::Regular, lane, y);
        state.events.push(GameEvent::ZombieSpawned { lane });
    }
    state.timers.last_spawn_ms = now_ms;
    true
}

/// Run the spawner for one tick
pub fn run(state: &mut GameState, now_ms: f64) {
    update_lane_fronts(state);
    spawn_boss_if_due(state, now_ms);
    spawn_regular_if_due(state, now_ms);
}
