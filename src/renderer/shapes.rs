//! Shape generation for the placeholder scene
//!
//! No textures: every sprite id maps to flat-colored triangles. The scene
//! builder paints back-to-front, so overdraw does the layering.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::assets::SpriteId;
use crate::consts::{GROUND_LINE, MOUNTAIN_H, WORLD_H, WORLD_W};
use crate::frame::{Frame, SpriteInstance};

/// Filled axis-aligned rectangle, two triangles
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y1, color),
    ]
}

/// Filled circle, triangle fan around the center
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Mountain silhouette across one tile: a row of uneven triangle peaks
pub fn ridge(tile_x: f32, color: [f32; 4]) -> Vec<Vertex> {
    const PEAK_SCALE: [f32; 5] = [1.0, 0.65, 0.85, 0.55, 0.9];
    let peak_w = WORLD_W / PEAK_SCALE.len() as f32;
    let mut vertices = Vec::with_capacity(PEAK_SCALE.len() * 3);

    for (i, scale) in PEAK_SCALE.iter().enumerate() {
        let x0 = tile_x + i as f32 * peak_w;
        vertices.push(Vertex::new(x0, GROUND_LINE, color));
        vertices.push(Vertex::new(
            x0 + peak_w / 2.0,
            GROUND_LINE - MOUNTAIN_H * scale,
            color,
        ));
        vertices.push(Vertex::new(x0 + peak_w, GROUND_LINE, color));
    }

    vertices
}

/// Placeholder geometry for one sprite instance
pub fn sprite(instance: &SpriteInstance) -> Vec<Vertex> {
    match instance.sprite {
        SpriteId::Runner(frame) => {
            let color = colors::RUNNER_FRAMES[frame as usize % colors::RUNNER_FRAMES.len()];
            rect(instance.pos, instance.size, color)
        }
        SpriteId::FireSmall | SpriteId::FireMedium | SpriteId::FireLarge => {
            let mut v = rect(instance.pos, instance.size, colors::FIRE);
            // Brighter core low in the flame
            let core_pos = instance.pos + instance.size * Vec2::new(0.25, 0.4);
            let core_size = instance.size * Vec2::new(0.5, 0.6);
            v.extend(rect(core_pos, core_size, colors::FIRE_CORE));
            v
        }
        SpriteId::Coin => {
            let radius = instance.size.x / 2.0;
            circle(instance.pos + Vec2::splat(radius), radius, colors::COIN, 20)
        }
        // Background layers are painted by `scene` from the offsets; a bare
        // instance still renders as a flat quad
        SpriteId::Backdrop | SpriteId::Mountains | SpriteId::Ground => {
            rect(instance.pos, instance.size, colors::SKY)
        }
    }
}

/// Build the whole frame back-to-front: sky, mountains, ground, sprites
pub fn scene(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(512);

    vertices.extend(rect(
        Vec2::ZERO,
        Vec2::new(WORLD_W, WORLD_H),
        colors::SKY,
    ));

    // Three tiles of each scrolling layer cover every wrapped offset
    for tile in [-1.0f32, 0.0, 1.0] {
        vertices.extend(ridge(
            frame.mountain_offset + tile * WORLD_W,
            colors::MOUNTAIN,
        ));
    }
    for tile in [-1.0f32, 0.0, 1.0] {
        vertices.extend(ground_tile(frame.ground_offset + tile * WORLD_W));
    }

    for instance in &frame.sprites {
        vertices.extend(sprite(instance));
    }

    vertices
}

/// One world-width of ground: grass lip over dirt, speckled so the scroll
/// reads even without textures
fn ground_tile(x: f32) -> Vec<Vertex> {
    const GRASS_H: f32 = 22.0;
    const SPECKLES: [(f32, f32, f32); 4] = [
        (90.0, 60.0, 26.0),
        (310.0, 95.0, 18.0),
        (520.0, 45.0, 30.0),
        (680.0, 110.0, 22.0),
    ];

    let mut v = rect(
        Vec2::new(x, GROUND_LINE),
        Vec2::new(WORLD_W, GRASS_H),
        colors::GRASS,
    );
    v.extend(rect(
        Vec2::new(x, GROUND_LINE + GRASS_H),
        Vec2::new(WORLD_W, WORLD_H - GROUND_LINE - GRASS_H),
        colors::DIRT,
    ));
    for (dx, dy, w) in SPECKLES {
        v.extend(rect(
            Vec2::new(x + dx, GROUND_LINE + dy),
            Vec2::new(w, w * 0.4),
            colors::DIRT_SPECKLE,
        ));
    }
    v
}
