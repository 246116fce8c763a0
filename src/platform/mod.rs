//! Host collaborator boundaries
//!
//! The simulation core is headless. Presentation and wall-clock time come
//! from the host through these traits, and the core never queries back.

use std::time::Instant;

use glam::Vec2;

use crate::sim::{GameState, Variant};

/// Which sprite-sheet entry an entity presents as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualId {
    Alien,
    Crate,
    Grass,
}

impl VisualId {
    pub fn asset_name(&self) -> &'static str {
        match self {
            VisualId::Alien => "plf:AlienBlue_swim1",
            VisualId::Crate => "plf:Tile_BoxCrate",
            VisualId::Grass => "plf:BG_Colored_grass",
        }
    }
}

/// One entity's presentation data for a frame
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub entity: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub visual: VisualId,
}

/// Accepts sprites for presentation
pub trait Renderer {
    fn draw(&mut self, sprite: Sprite);
}

/// Swallows draw calls (tests, headless runs)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _sprite: Sprite) {}
}

/// Feed every live entity to the renderer, in scene order (backdrops were
/// inserted first, so they land underneath)
pub fn present(state: &GameState, renderer: &mut dyn Renderer) {
    for entity in &state.entities {
        let visual = match entity.variant() {
            Variant::Player => VisualId::Alien,
            Variant::Obstacle => VisualId::Crate,
            Variant::Backdrop => VisualId::Grass,
        };
        renderer.draw(Sprite {
            entity: entity.id,
            pos: entity.pos,
            size: entity.size,
            visual,
        });
    }
}

/// Monotonic elapsed-time source for the host loop
pub trait Clock {
    fn elapsed_secs(&self) -> f64;
}

/// Wall clock backed by `std::time::Instant`
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
