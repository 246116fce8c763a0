//! Data-driven game balance
//!
//! Every gameplay-feel constant lives in [`Tuning`] so balance can be
//! adjusted from a JSON table without recompiling. Defaults reproduce the
//! reference behavior.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE;

/// Gameplay balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward position delta applied to the player every tick.
    /// Per-frame, not time-scaled: frame-rate dependent by design.
    pub gravity_per_tick: f32,
    /// Total upward travel of one jump (scene units)
    pub jump_impulse: f32,
    /// Ticks a single jump takes to settle
    pub jump_settle_ticks: u32,
    /// Player body inset from the sprite frame, left and right
    pub player_inset_side: f32,
    /// Player body inset at the top of the frame
    pub player_inset_top: f32,
    /// Player body inset at the bottom; deeper than the other margins so
    /// feet-first grazes read as near-misses
    pub player_inset_bottom: f32,
    /// Length of one obstacle scroll step (scene units)
    pub obstacle_step: f32,
    /// Ticks one obstacle step is animated over
    pub obstacle_step_ticks: u32,
    /// Seconds a backdrop strip takes to scroll its own width
    pub backdrop_scroll_secs: f32,
    /// Frames between obstacle spawns, at the nominal tick rate
    pub spawn_interval_frames: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity_per_tick: 4.0,
            jump_impulse: 50.0,
            jump_settle_ticks: 30,
            player_inset_side: 5.0,
            player_inset_top: 10.0,
            player_inset_bottom: 40.0,
            obstacle_step: 20.0,
            obstacle_step_ticks: 30,
            backdrop_scroll_secs: 20.0,
            spawn_interval_frames: 70,
        }
    }
}

impl Tuning {
    /// Load a tuning table from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Real-time spawn cadence in seconds
    pub fn spawn_interval_secs(&self) -> f32 {
        self.spawn_interval_frames as f32 / TICK_RATE
    }

    /// Obstacle scroll rate in scene units per tick
    pub fn obstacle_rate(&self) -> f32 {
        self.obstacle_step / self.obstacle_step_ticks as f32
    }

    /// Backdrop scroll rate in scene units per tick, for a strip of the
    /// given width
    pub fn backdrop_rate(&self, strip_width: f32) -> f32 {
        strip_width / (self.backdrop_scroll_secs * TICK_RATE)
    }

    /// Contract checks on values the sim divides by or steps with.
    /// Violations are programming errors, not runtime conditions.
    pub fn validate(&self) {
        assert!(self.jump_settle_ticks > 0, "jump_settle_ticks must be > 0");
        assert!(self.obstacle_step > 0.0, "obstacle_step must be > 0");
        assert!(self.obstacle_step_ticks > 0, "obstacle_step_ticks must be > 0");
        assert!(
            self.backdrop_scroll_secs > 0.0,
            "backdrop_scroll_secs must be > 0"
        );
        assert!(
            self.spawn_interval_frames > 0,
            "spawn_interval_frames must be > 0"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference() {
        let t = Tuning::default();
        assert_eq!(t.gravity_per_tick, 4.0);
        assert_eq!(t.jump_impulse, 50.0);
        // Original margins: 10 total horizontal, 50 total vertical
        assert_eq!(t.player_inset_side * 2.0, 10.0);
        assert_eq!(t.player_inset_top + t.player_inset_bottom, 50.0);
        assert!(t.player_inset_bottom > t.player_inset_top);
        assert_eq!(t.spawn_interval_frames, 70);
        t.validate();
    }

    #[test]
    fn test_spawn_interval_secs() {
        let t = Tuning::default();
        assert!((t.spawn_interval_secs() - 70.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_json_partial_override() {
        let t = Tuning::from_json(r#"{"gravity_per_tick": 6.0}"#).unwrap();
        assert_eq!(t.gravity_per_tick, 6.0);
        // Untouched fields fall back to defaults
        assert_eq!(t.obstacle_step, 20.0);
    }

    #[test]
    #[should_panic(expected = "obstacle_step_ticks")]
    fn test_validate_rejects_zero_step_ticks() {
        let t = Tuning {
            obstacle_step_ticks: 0,
            ..Default::default()
        };
        t.validate();
    }
}
