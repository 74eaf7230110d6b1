//! Distance-driven entity spawner
//!
//! Two independent countdown clocks, one per entity stream, measured in
//! scroll units rather than seconds so spacing reads directly as world
//! distance between spawns.

use rand::Rng;
use rand_pcg::Pcg32;

use super::entity::{Coin, Obstacle};
use crate::config::SimConfig;
use crate::consts::BASE_SPEED;

/// Remaining scroll distance until the next spawn of each stream
///
/// On spawn the next interval is added to the negative remainder, not
/// assigned over it, so overshoot from a large tick carries forward.
#[derive(Debug, Clone)]
pub struct Spawner {
    pub obstacle_clearance: f32,
    pub coin_clearance: f32,
}

impl Spawner {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            obstacle_clearance: config.initial_obstacle_clearance,
            coin_clearance: config.initial_coin_clearance,
        }
    }

    pub fn reset(&mut self, config: &SimConfig) {
        self.obstacle_clearance = config.initial_obstacle_clearance;
        self.coin_clearance = config.initial_coin_clearance;
    }

    /// Advance both clocks; at most one spawn per stream per tick
    ///
    /// Coins draw from the RNG before obstacles every tick, so a seed pins
    /// the entire spawn sequence.
    pub fn step(
        &mut self,
        dt: f32,
        config: &SimConfig,
        rng: &mut Pcg32,
        obstacles: &mut Vec<Obstacle>,
        coins: &mut Vec<Coin>,
    ) {
        let scrolled = dt * BASE_SPEED;

        self.coin_clearance -= scrolled;
        if self.coin_clearance < 0.0 {
            coins.push(Coin::spawn(rng, config.coin_band));
            self.coin_clearance +=
                rng.random_range(config.coin_spacing.min..config.coin_spacing.max);
        }

        self.obstacle_clearance -= scrolled;
        if self.obstacle_clearance < 0.0 {
            obstacles.push(Obstacle::spawn(rng));
            self.obstacle_clearance +=
                rng.random_range(config.obstacle_spacing.min..config.obstacle_spacing.max);
        }
    }
}
