//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Placeholder palette for the sprite ids
pub mod colors {
    pub const SKY: [f32; 4] = [0.53, 0.80, 0.92, 1.0];
    pub const MOUNTAIN: [f32; 4] = [0.44, 0.48, 0.58, 1.0];
    pub const GRASS: [f32; 4] = [0.33, 0.62, 0.24, 1.0];
    pub const DIRT: [f32; 4] = [0.48, 0.35, 0.22, 1.0];
    pub const DIRT_SPECKLE: [f32; 4] = [0.38, 0.27, 0.16, 1.0];
    /// Run frames cycle through these shades so the gait reads
    pub const RUNNER_FRAMES: [[f32; 4]; 3] = [
        [0.18, 0.52, 0.28, 1.0],
        [0.22, 0.60, 0.32, 1.0],
        [0.16, 0.46, 0.25, 1.0],
    ];
    pub const FIRE: [f32; 4] = [0.93, 0.42, 0.10, 1.0];
    pub const FIRE_CORE: [f32; 4] = [1.00, 0.78, 0.25, 1.0];
    pub const COIN: [f32; 4] = [1.00, 0.84, 0.18, 1.0];
    /// Letterbox bars outside the 4:3 world
    pub const VOID: [f32; 4] = [0.04, 0.05, 0.08, 1.0];
}
