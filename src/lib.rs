//! Alien Drift - a side-scrolling dodge-the-crates arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `audio`: Sound effect vocabulary and fire-and-forget output sink
//! - `platform`: Host collaborator traits (renderer, clock)

pub mod audio;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate; per-tick deltas are calibrated against it
    pub const TICK_RATE: f32 = 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default playfield dimensions (portrait)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player sprite frame
    pub const PLAYER_WIDTH: f32 = 66.0;
    pub const PLAYER_HEIGHT: f32 = 92.0;

    /// Obstacle crate frame
    pub const OBSTACLE_WIDTH: f32 = 64.0;
    pub const OBSTACLE_HEIGHT: f32 = 64.0;

    /// Slack for the "destination reached" predicate on animated scroll
    /// steps. The original trigger was exact float equality, which an
    /// animation overshoot can skip; any position within this band counts
    /// as arrived and is snapped.
    pub const REACH_EPSILON: f32 = 0.001;
}

/// Step `current` toward `target`, moving at most `max_delta`
#[inline]
pub fn step_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + max_delta.copysign(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_toward() {
        assert_eq!(step_toward(10.0, 0.0, 3.0), 7.0);
        assert_eq!(step_toward(0.0, 10.0, 3.0), 3.0);
        // Lands exactly on the target when within range
        assert_eq!(step_toward(1.0, 0.0, 3.0), 0.0);
        assert_eq!(step_toward(5.0, 5.0, 3.0), 5.0);
    }
}
