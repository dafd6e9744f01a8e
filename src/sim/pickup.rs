//! Survivor pickup and follower recruitment

use super::collision::rects_overlap;
use super::state::{GameEvent, GameState};

/// Collect every survivor touching the player. Returns how many were collected.
pub fn run(state: &mut GameState) -> usize {
    let player_rect = state.player.rect(&state.viewport);

    let (collected, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut state.survivors)
        .into_iter()
        .partition(|s| rects_overlap(&s.rect(), &player_rect));
    state.survivors = remaining;

    for survivor in &collected {
        state.events.push(GameEvent::SurvivorCollected);
        if state.try_add_follower(survivor.pos) {
            let count = state.followers.len();
            state.events.push(GameEvent::FollowerJoined { count });
            log::info!("Survivor {} joined as follower #{}", survivor.id, count);
        }
    }

    collected.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lane;

    #[test]
    fn test_survivor_in_player_lane_collected() {
        let mut state = GameState::new(1);
        let y = state.player_pos().y - 40.0;
        state.spawn_survivor(Lane::Left, y);

        assert_eq!(run(&mut state), 1);
        assert!(state.survivors.is_empty());
        assert_eq!(state.followers.len(), 1);
        assert!(state.events.contains(&GameEvent::FollowerJoined { count: 1 }));
    }

    #[test]
    fn test_survivor_in_other_lane_passes() {
        let mut state = GameState::new(1);
        let y = state.player_pos().y;
        state.spawn_survivor(Lane::Right, y);

        assert_eq!(run(&mut state), 0);
        assert_eq!(state.survivors.len(), 1);
        assert!(state.followers.is_empty());
    }

    #[test]
    fn test_survivor_above_player_not_collected() {
        let mut state = GameState::new(1);
        state.spawn_survivor(Lane::Left, 100.0);
        assert_eq!(run(&mut state), 0);
        assert_eq!(state.survivors.len(), 1);
    }

    #[test]
    fn test_collection_past_cap_only_removes_survivor() {
        let mut state = GameState::new(1);
        let y = state.player_pos().y;
        for _ in 0..5 {
            state.spawn_survivor(Lane::Left, y);
        }

        assert_eq!(run(&mut state), 5);
        assert!(state.survivors.is_empty());
        assert_eq!(state.followers.len(), 3);
        let collected = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::SurvivorCollected))
            .count();
        assert_eq!(collected, 5);
    }

    #[test]
    fn test_follower_order_follows_collection() {
        let mut state = GameState::new(1);
        let y = state.player_pos().y;
        state.spawn_survivor(Lane::Left, y);
        run(&mut state);
        let first = state.followers[0].id;
        state.spawn_survivor(Lane::Left, y);
        run(&mut state);
        assert_eq!(state.followers[0].id, first);
        assert!(state.followers[1].id > first);
    }
}
