//! Debug overlay
//!
//! A read-only snapshot of the simulation for on-screen diagnostics.

use serde::Serialize;

use crate::sim::GameState;

/// Everything the debug overlay reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugStats {
    pub frame: u64,
    pub lane: usize,
    pub zombies: usize,
    pub bosses: usize,
    pub bullets: usize,
    pub survivors: usize,
    pub followers: usize,
    pub score: u64,
    pub destroyed: u32,
    /// Milliseconds since the last regular spawn / boss spawn
    pub since_spawn_ms: f64,
    pub since_boss_ms: f64,
}

impl DebugStats {
    pub fn from_state(state: &GameState, now_ms: f64) -> Self {
        // Timers stop while paused; resume rebases them past the gap
        let clock = state.timers.paused_at_ms.unwrap_or(now_ms);
        Self {
            frame: state.frame,
            lane: state.player.lane.index(),
            zombies: state.zombies.len(),
            bosses: state.zombies.iter().filter(|z| z.is_boss()).count(),
            bullets: state.bullets.len(),
            survivors: state.survivors.len(),
            followers: state.followers.len(),
            score: state.score,
            destroyed: state.zombies_destroyed,
            since_spawn_ms: (clock - state.timers.last_spawn_ms).max(0.0),
            since_boss_ms: (clock - state.timers.last_boss_ms).max(0.0),
        }
    }

    /// Overlay text, one entry per line
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Frame: {}", self.frame),
            format!("Lane: {}", self.lane),
            format!("Zombies: {} (bosses: {})", self.zombies, self.bosses),
            format!("Bullets: {}", self.bullets),
            format!("Survivors: {}", self.survivors),
            format!("Followers: {}", self.followers),
            format!("Score: {}  Killed: {}", self.score, self.destroyed),
            format!(
                "Spawn: {:.1}s  Boss: {:.1}s",
                self.since_spawn_ms / 1000.0,
                self.since_boss_ms / 1000.0
            ),
        ]
    }
}
