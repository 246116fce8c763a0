//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (entity insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::CollisionTable;
pub use entity::{Entity, EntityKind, Glide, Variant};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState, Playfield, uniform_inclusive};
pub use tick::{TickInput, tick};
