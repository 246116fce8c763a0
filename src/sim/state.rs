//! Game state and entity lifecycle
//!
//! One [`GameState`] is one session. Dropping it is the whole shutdown
//! protocol: there is no persisted state and restart means constructing a
//! fresh one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::CollisionTable;
use super::entity::Entity;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// Terminal: the player was removed by a collision handler
    GameOver,
}

/// Events surfaced to the caller, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player jump started (audio cue)
    Jump,
    ObstacleSpawned(u32),
    /// Obstacle scrolled fully past the left edge and left the live set
    ObstacleRetired(u32),
    /// A backdrop strip wrapped back behind its partner
    StripWrapped(u32),
    /// The session ended this frame
    GameOver,
}

/// Visible scene bounds, read by every component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        assert!(width > 0.0 && height > 0.0, "degenerate playfield");
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Uniform integer draw over an inclusive range.
///
/// An inverted range is a programming error, not a runtime condition.
pub fn uniform_inclusive(rng: &mut Pcg32, lo: i32, hi: i32) -> i32 {
    assert!(lo <= hi, "inverted random range {lo}..={hi}");
    rng.random_range(lo..=hi)
}

/// Complete state of one session
#[derive(Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub playfield: Playfield,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Elapsed real time since the last spawn; polled, never scheduled
    pub spawn_clock: f32,
    /// Live entity set. Mutated only from within the tick; iteration order
    /// is insertion order.
    pub entities: Vec<Entity>,
    /// Events for the caller, drained each frame
    pub events: Vec<GameEvent>,
    /// Collision handler table, resolved once here
    pub collisions: CollisionTable,
    pub rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a session: two backdrop strips tiled edge to edge, and the
    /// player a quarter of the way in, vertically centered.
    pub fn new(seed: u64, playfield: Playfield, tuning: Tuning) -> Self {
        tuning.validate();
        let mut state = Self {
            seed,
            playfield,
            tuning,
            phase: GamePhase::Playing,
            time_ticks: 0,
            spawn_clock: 0.0,
            entities: Vec::new(),
            events: Vec::new(),
            collisions: CollisionTable::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };

        let strip = playfield.size();
        let mid_y = playfield.height / 2.0;
        let id = state.next_entity_id();
        state
            .entities
            .push(Entity::backdrop(id, Vec2::new(playfield.width * 0.5, mid_y), strip));
        let id = state.next_entity_id();
        state
            .entities
            .push(Entity::backdrop(id, Vec2::new(playfield.width * 1.5, mid_y), strip));

        let id = state.next_entity_id();
        state
            .entities
            .push(Entity::player(id, Vec2::new(playfield.width / 4.0, mid_y)));

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn entity(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: u32) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn remove_entity(&mut self, id: u32) {
        self.entities.retain(|e| e.id != id);
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand this frame's events to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.is_player())
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.is_player())
    }

    pub fn player_id(&self) -> Option<u32> {
        self.player().map(|p| p.id)
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_obstacle())
    }

    pub fn backdrops(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_backdrop())
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Spawn one crate at the right edge, at a uniformly random height
    pub fn spawn_obstacle(&mut self) -> u32 {
        let x = self.playfield.width;
        let y = uniform_inclusive(&mut self.rng, 0, self.playfield.height as i32) as f32;
        let id = self.next_entity_id();
        let obstacle = Entity::obstacle(id, Vec2::new(x, y), &self.tuning);
        log::trace!("spawn {:?} body={:?}", obstacle.id, obstacle.frame());
        self.entities.push(obstacle);
        self.push_event(GameEvent::ObstacleSpawned(id));
        id
    }
}
