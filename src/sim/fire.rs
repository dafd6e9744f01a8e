//! Auto-fire
//!
//! The player and every follower shoot one bullet up their lane each time the
//! fire interval elapses.

use glam::Vec2;

use super::state::{GameEvent, GameState};

/// Fire a volley if the fire interval has elapsed. Returns bullets created.
pub fn run(state: &mut GameState, now_ms: f64) -> usize {
    if now_ms - state.timers.last_fire_ms < state.tuning.fire_interval_ms {
        return 0;
    }

    let lane = state.player.lane;
    let muzzle = state.player_pos() - Vec2::new(0.0, state.player.size.y * 0.5);

    let mut origins = Vec::with_capacity(1 + state.followers.len());
    origins.push((lane, muzzle));
    origins.extend(
        state
            .followers
            .iter()
            .map(|f| (f.lane, f.pos - Vec2::new(0.0, f.size.y * 0.5))),
    );

    let fired = origins.len();
    for (lane, pos) in origins {
        state.spawn_bullet(lane, pos);
        state.events.push(GameEvent::BulletFired { lane });
    }
    state.timers.last_fire_ms = now_ms;
    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lane;

    #[test]
    fn test_fire_respects_interval() {
        let mut state = GameState::new(1);
        assert_eq!(run(&mut state, 299.0), 0);
        assert_eq!(run(&mut state, 300.0), 1);
        assert_eq!(run(&mut state, 450.0), 0);
        assert_eq!(run(&mut state, 600.0), 1);
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_bullet_leaves_player_top_edge() {
        let mut state = GameState::new(1);
        state.player.lane = Lane::Right;
        run(&mut state, 300.0);
        let bullet = &state.bullets[0];
        assert_eq!(bullet.lane, Lane::Right);
        assert_eq!(bullet.pos.x, state.viewport.lane_x(Lane::Right));
        assert!(bullet.pos.y < state.player_pos().y);
    }

    #[test]
    fn test_followers_fire_alongside_player() {
        let mut state = GameState::new(1);
        let slot = state.follower_slot(0);
        state.try_add_follower(slot);
        state.try_add_follower(slot);
        assert_eq!(run(&mut state, 300.0), 3);
        assert!(state.bullets.iter().all(|b| b.lane == state.player.lane));
    }
}
