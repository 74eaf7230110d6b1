//! Scrolling world entities: fire obstacles and coins
//!
//! Both spawn at the right edge and drift left at the base scroll rate; the
//! spawner decides when, these types decide what.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{Bounds, Shape};
use crate::config::Span;
use crate::consts::{BASE_SPEED, COIN_DIAMETER, COIN_SPRITE_H, FOOT_SINK, GROUND_LINE, WORLD_W};

/// The three fire sizes, drawn uniformly at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Small,
    Medium,
    Large,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Small,
        ObstacleKind::Medium,
        ObstacleKind::Large,
    ];

    /// Sprite size, also the collision box
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::Small => Vec2::new(50.0, 50.0),
            ObstacleKind::Medium => Vec2::new(70.0, 70.0),
            ObstacleKind::Large => Vec2::new(100.0, 65.0),
        }
    }
}

/// A fire sitting on the ground
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: f32,
}

impl Obstacle {
    /// Random kind, placed at the right edge
    pub fn spawn(rng: &mut Pcg32) -> Self {
        let kind = ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())];
        Self { kind, x: WORLD_W }
    }

    pub fn update(&mut self, dt: f32) {
        self.x -= BASE_SPEED * dt;
    }

    pub fn bounds(&self) -> Bounds {
        let size = self.kind.size();
        Bounds {
            pos: Vec2::new(self.x, GROUND_LINE - size.y + FOOT_SINK),
            size,
            shape: Shape::Box,
        }
    }

    /// Fully past the left edge
    pub fn off_screen(&self) -> bool {
        self.x + self.kind.size().x < 0.0
    }
}

/// A floating coin with a circular footprint
///
/// The sprite is 30x37 but only the 30-unit circle collides.
#[derive(Debug, Clone)]
pub struct Coin {
    pub pos: Vec2,
}

impl Coin {
    /// Placed at the right edge, at a random height above the ground line
    pub fn spawn(rng: &mut Pcg32, band: Span) -> Self {
        let height = rng.random_range(band.min..band.max);
        Self {
            pos: Vec2::new(WORLD_W, GROUND_LINE - height),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.x -= BASE_SPEED * dt;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            pos: self.pos,
            size: Vec2::new(COIN_DIAMETER, COIN_SPRITE_H),
            shape: Shape::Circle,
        }
    }

    /// Fully past the left edge
    pub fn off_screen(&self) -> bool {
        self.pos.x + COIN_DIAMETER < 0.0
    }
}
