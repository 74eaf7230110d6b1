//! Ember Run - a side-scrolling jump-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `frame`: Draw instruction captured from simulation state
//! - `renderer`: WebGPU rendering pipeline
//! - `assets`: Logical sprite ids and HUD font sizes
//! - `config`: Spawn tuning with startup validation

pub mod assets;
pub mod config;
pub mod frame;
pub mod renderer;
pub mod sim;

pub use config::SimConfig;
pub use frame::Frame;

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate; the loop runs one tick per animation frame
    pub const TICK_RATE_HZ: f32 = 60.0;

    /// World dimensions in game units (y grows downward)
    pub const WORLD_W: f32 = 800.0;
    pub const WORLD_H: f32 = 600.0;
    /// Ground strip height; the ground line is where entities stand
    pub const GROUND_H: f32 = 153.0;
    pub const GROUND_LINE: f32 = WORLD_H - GROUND_H;
    /// Mountain layer sprite height, drawn resting on the ground line
    pub const MOUNTAIN_H: f32 = 134.0;
    /// Entities sink this far into the grass so feet overlap the blades
    pub const FOOT_SINK: f32 = 10.0;

    /// Scroll rate for ground, obstacles, coins and spawn countdowns
    /// (units per simulated second - the speed multiplier scales dt, not this)
    pub const BASE_SPEED: f32 = 200.0;
    /// Mountains drift at a tenth of the ground rate
    pub const MOUNTAIN_SPEED: f32 = BASE_SPEED / 10.0;

    /// Jump physics
    pub const GRAVITY: f32 = 400.0;
    pub const JUMP_SPEED: f32 = 400.0;

    /// Player box and placement
    pub const PLAYER_X: f32 = 60.0;
    pub const PLAYER_SIZE: f32 = 90.0;
    /// Run cycle: three frames at a fixed cadence
    pub const RUN_FRAME_COUNT: usize = 3;
    pub const RUN_FRAME_SECS: f32 = 0.25;

    /// Coin footprint is a circle; the sprite is slightly taller than wide
    pub const COIN_DIAMETER: f32 = 30.0;
    pub const COIN_SPRITE_H: f32 = 37.0;

    /// Scoring
    pub const COIN_SCORE: u64 = 1000;
    /// Speed multiplier applied per coin (compounding)
    pub const COIN_BOOST: f32 = 1.05;
    /// Displayed score accrues this many points per simulated second
    pub const TIME_SCORE_RATE: f32 = 50.0;
}

/// Wrap a leftward scroll offset back into [0, span)
#[inline]
pub fn wrap_scroll(mut offset: f32, span: f32) -> f32 {
    if offset < 0.0 {
        offset += span;
    }
    offset
}
