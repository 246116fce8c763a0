//! Entity identity and the closed variant set
//!
//! Everything that moves in the scene is an [`Entity`]: the player, the
//! obstacle crates, and the two tiling backdrop strips. The variant set is
//! fixed and small, so variant behavior dispatches statically over
//! [`EntityKind`] rather than through trait objects.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// In-flight jump tween: remaining upward travel, released at a fixed rate
/// per tick. Tapping again while airborne stacks more travel onto the same
/// glide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glide {
    remaining: f32,
    rate: f32,
}

impl Glide {
    pub fn new(total: f32, settle_ticks: u32) -> Self {
        Self {
            remaining: total,
            rate: total / settle_ticks.max(1) as f32,
        }
    }

    /// Stack another impulse onto an in-flight glide. Stacked impulses
    /// release concurrently, so the rate grows with each one.
    pub fn add(&mut self, total: f32, settle_ticks: u32) {
        self.remaining += total;
        self.rate += total / settle_ticks.max(1) as f32;
    }

    /// Release this tick's share of the travel
    pub fn step(&mut self) -> f32 {
        let d = self.rate.min(self.remaining);
        self.remaining -= d;
        d
    }

    pub fn done(&self) -> bool {
        self.remaining <= 0.0
    }
}

/// Closed set of entity variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    Player { glide: Option<Glide> },
    /// `dest_x` is the target of the current scroll step
    Obstacle { dest_x: f32 },
    /// `dest_x` is the wrap point of the current scroll pass
    Backdrop { dest_x: f32 },
}

/// Variant tag, used to key the collision handler table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Player,
    Obstacle,
    Backdrop,
}

/// A movable, collidable scene object. Positions are center-anchored.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Unique, monotonically increasing, never reused
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: EntityKind,
}

impl Entity {
    pub fn player(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            kind: EntityKind::Player { glide: None },
        }
    }

    /// A crate at its spawn position, with the first scroll step queued
    pub fn obstacle(id: u32, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos,
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            kind: EntityKind::Obstacle {
                dest_x: pos.x - tuning.obstacle_step,
            },
        }
    }

    /// A background strip with its first full-width scroll pass queued
    pub fn backdrop(id: u32, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            pos,
            size,
            kind: EntityKind::Backdrop {
                dest_x: pos.x - size.x,
            },
        }
    }

    pub fn variant(&self) -> Variant {
        match self.kind {
            EntityKind::Player { .. } => Variant::Player,
            EntityKind::Obstacle { .. } => Variant::Obstacle,
            EntityKind::Backdrop { .. } => Variant::Backdrop,
        }
    }

    pub fn is_player(&self) -> bool {
        self.variant() == Variant::Player
    }

    pub fn is_obstacle(&self) -> bool {
        self.variant() == Variant::Obstacle
    }

    pub fn is_backdrop(&self) -> bool {
        self.variant() == Variant::Backdrop
    }

    /// Visual rectangle, centered on the position
    pub fn frame(&self) -> Rect {
        Rect::centered(self.pos, self.size)
    }

    /// Collision rectangle, recomputed from the current position so it can
    /// never go stale. Defaults to the full frame; the player's is inset so
    /// grazing a crate with the sprite's edge reads as a near-miss.
    pub fn body(&self, tuning: &Tuning) -> Rect {
        match self.kind {
            EntityKind::Player { .. } => self.frame().inset(
                tuning.player_inset_side,
                tuning.player_inset_side,
                tuning.player_inset_bottom,
                tuning.player_inset_top,
            ),
            _ => self.frame(),
        }
    }
}
