//! Per-tick movement and off-screen purge

use glam::FloatExt;

use super::state::{GameState, ZombieKind};

/// Advance every pool by one tick, then drop whatever left the screen
pub fn run(state: &mut GameState) {
    move_zombies(state);
    move_bullets(state);
    move_survivors(state);
    move_followers(state);
    purge_offscreen(state);
}

/// Zombies descend; bosses past the chase line drift toward the player's lane
pub fn move_zombies(state: &mut GameState) {
    let tuning = state.tuning;
    let chase_y = state.viewport.boss_chase_y();
    let target_x = state.viewport.lane_x(state.player.lane);

    for zombie in &mut state.zombies {
        zombie.pos.y += zombie.kind.speed(&tuning);
        if zombie.kind == ZombieKind::Boss && zombie.pos.y > chase_y {
            zombie.pos.x = FloatExt::lerp(zombie.pos.x, target_x, tuning.boss_chase_lerp);
        }
    }
}

pub fn move_bullets(state: &mut GameState) {
    let speed = state.tuning.bullet_speed;
    for bullet in &mut state.bullets {
        bullet.pos.y -= speed;
    }
}

pub fn move_survivors(state: &mut GameState) {
    let speed = state.tuning.zombie_speed;
    for survivor in &mut state.survivors {
        survivor.pos.y += speed;
    }
}

/// Followers mirror the player's lane and ease toward their formation slot
pub fn move_followers(state: &mut GameState) {
    let lane = state.player.lane;
    let factor = state.tuning.follower_lerp;
    let slots: Vec<_> = (0..state.followers.len())
        .map(|i| state.follower_slot(i))
        .collect();

    for (follower, slot) in state.followers.iter_mut().zip(slots) {
        follower.lane = lane;
        follower.pos = follower.pos.lerp(slot, factor);
    }
}

/// Remove bullets above the top margin and zombies/survivors below the bottom one
pub fn purge_offscreen(state: &mut GameState) {
    let margin = state.tuning.offscreen_margin;
    let bottom = state.viewport.height + margin;

    state.bullets.retain(|b| b.pos.y >= -margin);
    state.zombies.retain(|z| z.pos.y <= bottom);
    state.survivors.retain(|s| s.pos.y <= bottom);
}
