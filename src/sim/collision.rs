//! Collision detection and dispatch
//!
//! Detection is a strict AABB overlap between collision bodies. Dispatch
//! routes each overlapping (subject, other) pair through a handler table
//! keyed by the two variants and resolved once at state construction, so
//! every valid collision pair is enumerable. A pair without a handler is an
//! expected no-op, not an error.

use super::entity::Variant;
use super::state::{GameEvent, GamePhase, GameState};

/// A collision handler resolves one (subject, other) hit
pub type Handler = fn(&mut GameState, subject_id: u32, other_id: u32);

const VARIANT_COUNT: usize = 3;

fn slot(v: Variant) -> usize {
    match v {
        Variant::Player => 0,
        Variant::Obstacle => 1,
        Variant::Backdrop => 2,
    }
}

/// Handler table keyed by (subject variant, other variant)
#[derive(Clone)]
pub struct CollisionTable {
    handlers: [[Option<Handler>; VARIANT_COUNT]; VARIANT_COUNT],
}

impl CollisionTable {
    /// Build the table. All registered pairs live here.
    pub fn new() -> Self {
        let mut handlers = [[None; VARIANT_COUNT]; VARIANT_COUNT];
        handlers[slot(Variant::Player)][slot(Variant::Obstacle)] =
            Some(player_hit_obstacle as Handler);
        Self { handlers }
    }

    pub fn get(&self, subject: Variant, other: Variant) -> Option<Handler> {
        self.handlers[slot(subject)][slot(other)]
    }
}

impl Default for CollisionTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Player ran into a crate: remove the player and end the session. The
/// game-over is surfaced as an explicit event, not just by absence.
fn player_hit_obstacle(state: &mut GameState, subject_id: u32, other_id: u32) {
    log::info!("player {subject_id} hit obstacle {other_id}");
    state.remove_entity(subject_id);
    state.phase = GamePhase::GameOver;
    state.push_event(GameEvent::GameOver);
}

/// Run the per-frame collision pass with `subject_id` as the subject.
///
/// Candidates are tested in current iteration order, and every overlapping
/// pair dispatches. Once a handler has removed the subject from the live
/// set, the remaining candidates are skipped.
pub fn detect(state: &mut GameState, subject_id: u32) {
    let candidates: Vec<u32> = state
        .entities
        .iter()
        .filter(|e| e.id != subject_id)
        .map(|e| e.id)
        .collect();

    for other_id in candidates {
        // Subject may have been removed by a previous handler
        let Some(subject) = state.entity(subject_id) else {
            return;
        };
        let Some(other) = state.entity(other_id) else {
            continue;
        };

        let subject_variant = subject.variant();
        let other_variant = other.variant();
        if !subject
            .body(&state.tuning)
            .intersects(&other.body(&state.tuning))
        {
            continue;
        }

        if let Some(handler) = state.collisions.get(subject_variant, other_variant) {
            handler(state, subject_id, other_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::entity::Entity;
    use crate::sim::state::Playfield;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn test_state() -> GameState {
        GameState::new(
            1,
            Playfield::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
            Tuning::default(),
        )
    }

    #[test]
    fn test_table_registers_player_obstacle_only() {
        let table = CollisionTable::new();
        assert!(table.get(Variant::Player, Variant::Obstacle).is_some());
        // Everything else is a no-op pairing
        assert!(table.get(Variant::Player, Variant::Backdrop).is_none());
        assert!(table.get(Variant::Player, Variant::Player).is_none());
        assert!(table.get(Variant::Obstacle, Variant::Player).is_none());
        assert!(table.get(Variant::Obstacle, Variant::Obstacle).is_none());
        assert!(table.get(Variant::Backdrop, Variant::Backdrop).is_none());
    }

    #[test]
    fn test_player_obstacle_hit_ends_session() {
        let mut state = test_state();
        let player_id = state.player_id().unwrap();
        let player_pos = state.player().unwrap().pos;

        let tuning = state.tuning.clone();
        let id = state.next_entity_id();
        state
            .entities
            .push(Entity::obstacle(id, player_pos, &tuning));

        detect(&mut state, player_id);

        assert!(state.player().is_none());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_dispatch_stops_once_subject_removed() {
        let mut state = test_state();
        let player_id = state.player_id().unwrap();
        let player_pos = state.player().unwrap().pos;

        // Two crates overlapping the player simultaneously
        let tuning = state.tuning.clone();
        for _ in 0..2 {
            let id = state.next_entity_id();
            state
                .entities
                .push(Entity::obstacle(id, player_pos, &tuning));
        }

        detect(&mut state, player_id);

        // First hit removed the player; the second crate was never dispatched
        let game_overs = state
            .events
            .iter()
            .filter(|e| **e == GameEvent::GameOver)
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_backdrop_overlap_is_a_no_op() {
        let mut state = test_state();
        let player_id = state.player_id().unwrap();

        // The player always overlaps the playfield-sized backdrop strips
        let overlapping = state
            .backdrops()
            .filter(|b| {
                b.body(&state.tuning)
                    .intersects(&state.player().unwrap().body(&state.tuning))
            })
            .count();
        assert!(overlapping > 0);

        detect(&mut state, player_id);
        assert!(state.player().is_some());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_distant_obstacle_is_a_miss() {
        let mut state = test_state();
        let player_id = state.player_id().unwrap();

        let tuning = state.tuning.clone();
        let id = state.next_entity_id();
        state
            .entities
            .push(Entity::obstacle(id, Vec2::new(390.0, 550.0), &tuning));

        detect(&mut state, player_id);
        assert!(state.player().is_some());
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
