//! Per-frame simulation tick
//!
//! Spawner → auto-fire → movement → combat → pickups, in that order, once per
//! host frame. Timing compares the host's monotonic clock to stored stamps.

use super::state::{GamePhase, GameState};
use super::{combat, fire, movement, pickup, spawner};
use crate::Lane;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Host monotonic clock in milliseconds since the game started
    pub now_ms: f64,
    /// Requested lane (key press or tap)
    pub lane: Option<Lane>,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - pick lanes automatically
    pub autoplay: bool,
}

impl TickInput {
    pub fn at(now_ms: f64) -> Self {
        Self {
            now_ms,
            ..Default::default()
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.timers.paused_at_ms = Some(input.now_ms);
                log::info!("Paused at frame {}", state.frame);
                return;
            }
            GamePhase::Paused => {
                if let Some(paused_at) = state.timers.paused_at_ms.take() {
                    state.timers.rebase((input.now_ms - paused_at).max(0.0));
                }
                state.phase = GamePhase::Playing;
                log::info!("Resumed at frame {}", state.frame);
            }
        }
    }

    if state.phase == GamePhase::Paused {
        return;
    }

    if let Some(lane) = input.lane {
        state.player.lane = lane;
    } else if input.autoplay {
        state.player.lane = autoplay_lane(state);
    }

    let now = input.now_ms;
    spawner::run(state, now);
    fire::run(state, now);
    movement::run(state);
    combat::run(state);
    pickup::run(state);

    state.frame += 1;

    let interval = state.tuning.debug_log_interval;
    if interval > 0 && state.frame % interval == 0 {
        log::debug!(
            "frame={} lane={} zombies={} bullets={} survivors={} followers={} score={} killed={} spawn@{:.0} boss@{:.0}",
            state.frame,
            state.player.lane.index(),
            state.zombies.len(),
            state.bullets.len(),
            state.survivors.len(),
            state.followers.len(),
            state.score,
            state.zombies_destroyed,
            state.timers.last_spawn_ms,
            state.timers.last_boss_ms,
        );
    }
}

/// Demo steering: grab the closest survivor, otherwise face the most advanced zombie
fn autoplay_lane(state: &GameState) -> Lane {
    let player_y = state.viewport.player_y();

    let survivor = state
        .survivors
        .iter()
        .filter(|s| s.pos.y < player_y)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|s| s.lane);
    if let Some(lane) = survivor {
        return lane;
    }

    state
        .zombies
        .iter()
        .filter(|z| z.pos.y > 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|z| z.lane)
        .unwrap_or(state.player.lane)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GameEvent, ZombieKind};

    #[test]
    fn test_lane_input_applies() {
        let mut state = GameState::new(1);
        let input = TickInput {
            now_ms: 16.0,
            lane: Some(Lane::Right),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.lane, Lane::Right);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_tick_pause() {
        let mut state = GameState::new(12345);
        let pause = |now_ms| TickInput {
            now_ms,
            pause: true,
            ..Default::default()
        };

        tick(&mut state, &TickInput::at(100.0));
        tick(&mut state, &pause(200.0));
        assert_eq!(state.phase, GamePhase::Paused);

        // Nothing moves while paused
        let frame = state.frame;
        tick(&mut state, &TickInput::at(5_000.0));
        assert_eq!(state.frame, frame);
        assert!(state.zombies.is_empty());

        // Resume after 10s paused: no spawn burst
        tick(&mut state, &pause(10_200.0));
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.zombies.is_empty() && state.survivors.is_empty());
        assert!((state.timers.last_spawn_ms - 10_000.0).abs() < 0.001);
    }

    #[test]
    fn test_scenario_two_bullets_kill_regular() {
        let mut state = GameState::new(3);
        // Keep the spawner and auto-fire out of the way
        state.tuning.spawn_interval_ms = 1.0e9;
        state.tuning.boss_interval_ms = 1.0e9;
        state.tuning.fire_interval_ms = 1.0e9;

        let player_y = state.player_pos().y;
        let zombie = state.spawn_zombie(ZombieKind::Regular, Lane::Left, player_y - 200.0);
        let muzzle_y = player_y - 40.0;

        for _ in 0..2 {
            let x = state.viewport.lane_x(Lane::Left);
            state.spawn_bullet(Lane::Left, glam::Vec2::new(x, muzzle_y));
        }
        // Second bullet one tick behind the first
        state.bullets[1].pos.y += state.tuning.bullet_speed;

        let mut now = 0.0;
        let mut kill_frame = None;
        for _ in 0..200 {
            now += 16.0;
            tick(&mut state, &TickInput::at(now));
            if state.zombies.iter().all(|z| z.id != zombie) {
                kill_frame = Some(state.frame);
                break;
            }
        }

        assert!(kill_frame.is_some());
        assert_eq!(state.score, 10);
        assert_eq!(state.zombies_destroyed, 1);
        assert!(state.bullets.is_empty());
        assert!(state.events.contains(&GameEvent::ZombieKilled {
            kind: ZombieKind::Regular,
            lane: Lane::Left
        }));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        for frame in 1..=3000u32 {
            let input = TickInput {
                now_ms: frame as f64 * 16.0,
                lane: (frame % 97 == 0).then_some(if frame % 2 == 0 {
                    Lane::Left
                } else {
                    Lane::Right
                }),
                autoplay: true,
                ..Default::default()
            };
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.zombies.len(), state2.zombies.len());
        let ids1: Vec<_> = state1.zombies.iter().map(|z| (z.id, z.pos)).collect();
        let ids2: Vec<_> = state2.zombies.iter().map(|z| (z.id, z.pos)).collect();
        assert_eq!(ids1, ids2);
    }

    #[test]
    fn test_long_run_boss_arrives() {
        let mut state = GameState::new(42);
        let mut saw_boss = false;
        for frame in 1..=3000u32 {
            tick(&mut state, &TickInput::at(frame as f64 * 16.0));
            saw_boss |= state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::BossSpawned { .. }));
        }
        // 3000 frames at 16ms = 48s, past the 45s boss timer
        assert!(saw_boss);
        assert!(state.followers.len() <= state.tuning.max_followers);
    }

    #[test]
    fn test_autoplay_chases_survivor() {
        let mut state = GameState::new(1);
        state.spawn_zombie(ZombieKind::Regular, Lane::Left, 300.0);
        state.spawn_survivor(Lane::Right, 200.0);
        assert_eq!(autoplay_lane(&state), Lane::Right);

        state.survivors.clear();
        assert_eq!(autoplay_lane(&state), Lane::Left);
    }
}
