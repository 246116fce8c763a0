//! Fixed timestep simulation tick
//!
//! Advances one frame to completion before the next begins; nothing
//! suspends mid-frame. Per-frame order: player gravity + clamp, spawn
//! timer poll, collision pass with the player as subject, then `update` on
//! every live entity (obstacle scroll steps and retirement, backdrop
//! wraps).

use super::collision;
use super::entity::{EntityKind, Glide};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::step_toward;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// One-shot jump (tap), consumed by this tick
    pub jump: bool,
}

/// Advance the game state by one frame.
///
/// Ticking a finished session is a no-op; restart means constructing a new
/// [`GameState`]. A game-over triggered by this frame's collision pass is
/// surfaced in this frame's events.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.time_ticks += 1;

    integrate_player(state, input);
    poll_spawn_timer(state, dt);
    if let Some(player_id) = state.player_id() {
        collision::detect(state, player_id);
    }
    update_entities(state);
}

/// Gravity, jump glide, and the playfield clamp
fn integrate_player(state: &mut GameState, input: &TickInput) {
    let gravity = state.tuning.gravity_per_tick;
    let impulse = state.tuning.jump_impulse;
    let settle = state.tuning.jump_settle_ticks;
    let bounds = state.playfield;

    let mut jumped = false;
    if let Some(player) = state.player_mut() {
        player.pos.y -= gravity;

        if let EntityKind::Player { glide } = &mut player.kind {
            if input.jump {
                match glide {
                    Some(g) => g.add(impulse, settle),
                    None => *glide = Some(Glide::new(impulse, settle)),
                }
                jumped = true;
            }
            if let Some(g) = glide {
                player.pos.y += g.step();
                if g.done() {
                    *glide = None;
                }
            }
        }

        player.pos.x = player.pos.x.clamp(0.0, bounds.width);
        player.pos.y = player.pos.y.clamp(0.0, bounds.height);
    }
    if jumped {
        state.push_event(GameEvent::Jump);
    }
}

/// Polled spawn cadence: accumulate elapsed real time, spawn exactly one
/// crate when the threshold is reached, reset.
fn poll_spawn_timer(state: &mut GameState, dt: f32) {
    state.spawn_clock += dt;
    if state.spawn_clock >= state.tuning.spawn_interval_secs() {
        state.spawn_obstacle();
        state.spawn_clock = 0.0;
    }
}

/// Variant-specific per-frame updates for every live entity
fn update_entities(state: &mut GameState) {
    let obstacle_rate = state.tuning.obstacle_rate();
    let obstacle_step = state.tuning.obstacle_step;
    let backdrop_scroll_ticks = state.tuning.backdrop_scroll_secs * TICK_RATE;
    let retire_x = -state.playfield.width / 2.0;

    let mut retired: Vec<u32> = Vec::new();
    let mut wrapped: Vec<u32> = Vec::new();

    for entity in &mut state.entities {
        match &mut entity.kind {
            // Integrated in the player step
            EntityKind::Player { .. } => {}

            EntityKind::Obstacle { dest_x } => {
                entity.pos.x = step_toward(entity.pos.x, *dest_x, obstacle_rate);
                if (entity.pos.x - *dest_x).abs() <= REACH_EPSILON {
                    // Step complete: snap and queue the next one
                    entity.pos.x = *dest_x;
                    *dest_x = entity.pos.x - obstacle_step;
                }
                if entity.pos.x <= retire_x {
                    retired.push(entity.id);
                }
            }

            EntityKind::Backdrop { dest_x } => {
                let rate = entity.size.x / backdrop_scroll_ticks;
                entity.pos.x = step_toward(entity.pos.x, *dest_x, rate);
                if (entity.pos.x - *dest_x).abs() <= REACH_EPSILON {
                    // Fully off-screen: recycle behind the partner strip
                    // and start the next pass. The destination value is
                    // unchanged, so the strip oscillates forever between
                    // its start position and one width to the left.
                    entity.pos.x = *dest_x + entity.size.x;
                    *dest_x = entity.pos.x - entity.size.x;
                    wrapped.push(entity.id);
                }
            }
        }
    }

    for id in retired {
        log::debug!("obstacle {id} retired");
        state.remove_entity(id);
        state.push_event(GameEvent::ObstacleRetired(id));
    }
    for id in wrapped {
        state.push_event(GameEvent::StripWrapped(id));
    }
}
