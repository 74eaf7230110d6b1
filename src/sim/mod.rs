//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, dt derived from game speed only
//! - Seeded RNG only, owned by the state
//! - Stable iteration and spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Bounds, Shape, overlaps};
pub use entity::{Coin, Obstacle, ObstacleKind};
pub use player::Player;
pub use spawn::Spawner;
pub use state::GameState;
pub use tick::{TickInput, tick};
