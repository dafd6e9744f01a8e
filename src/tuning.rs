//! Game balance knobs
//!
//! Every timing, speed and probability the simulation uses lives here so a
//! host can load a JSON override without recompiling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    /// The JSON did not parse into a `Tuning`
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but its value is out of range
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Balance parameters. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Timers (milliseconds) ===
    /// Minimum gap between regular zombie/survivor spawns
    pub spawn_interval_ms: f64,
    /// Gap between boss spawns
    pub boss_interval_ms: f64,
    /// Auto-fire period for the player and every follower
    pub fire_interval_ms: f64,

    // === Probabilities ===
    /// Chance a regular spawn is a survivor instead of a zombie
    pub survivor_chance: f32,
    /// Chance a killed boss drops a survivor
    pub boss_drop_chance: f32,

    // === Speeds (pixels per tick) ===
    pub zombie_speed: f32,
    /// Boss speed as a fraction of `zombie_speed`
    pub boss_speed_factor: f32,
    pub bullet_speed: f32,

    // === Easing ===
    /// Per-tick lerp factor of a boss toward the player's lane
    pub boss_chase_lerp: f32,
    /// Per-tick lerp factor of a follower toward its slot
    pub follower_lerp: f32,
    /// Vertical gap between formation slots
    pub follower_spacing: f32,

    // === Pools ===
    pub max_followers: usize,
    /// Spawns start this far above the top edge
    pub spawn_offset: f32,
    /// Entities this far past an edge are discarded
    pub offscreen_margin: f32,

    // === Debug ===
    /// Emit a debug log line every N frames (0 disables)
    pub debug_log_interval: u64,
    pub show_debug_overlay: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 1000.0,
            boss_interval_ms: 45_000.0,
            fire_interval_ms: 300.0,

            survivor_chance: 0.01,
            boss_drop_chance: 0.7,

            zombie_speed: 2.0,
            boss_speed_factor: 0.7,
            bullet_speed: 8.0,

            boss_chase_lerp: 0.02,
            follower_lerp: 0.15,
            follower_spacing: 30.0,

            max_followers: 3,
            spawn_offset: 50.0,
            offscreen_margin: 50.0,

            debug_log_interval: 120,
            show_debug_overlay: false,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f64) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        fn probability(field: &'static str, value: f32) -> Result<(), TuningError> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be between 0 and 1",
                })
            }
        }

        fn lerp_factor(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value > 0.0 && value <= 1.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be in (0, 1]",
                })
            }
        }

        fn margin(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a non-negative number",
                })
            }
        }

        positive("spawn_interval_ms", self.spawn_interval_ms)?;
        positive("boss_interval_ms", self.boss_interval_ms)?;
        positive("fire_interval_ms", self.fire_interval_ms)?;
        probability("survivor_chance", self.survivor_chance)?;
        probability("boss_drop_chance", self.boss_drop_chance)?;
        positive("zombie_speed", self.zombie_speed as f64)?;
        positive("boss_speed_factor", self.boss_speed_factor as f64)?;
        positive("bullet_speed", self.bullet_speed as f64)?;
        lerp_factor("boss_chase_lerp", self.boss_chase_lerp)?;
        lerp_factor("follower_lerp", self.follower_lerp)?;

        if self.max_followers == 0 {
            return Err(TuningError::Invalid {
                field: "max_followers",
                reason: "must be at least 1",
            });
        }
        margin("spawn_offset", self.spawn_offset)?;
        margin("offscreen_margin", self.offscreen_margin)?;

        Ok(())
    }

    /// Boss descent speed
    #[inline]
    pub fn boss_speed(&self) -> f32 {
        self.zombie_speed * self.boss_speed_factor
    }
}
