//! Run state: scrolling floor, score, and the entity collections

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Coin, Obstacle};
use super::player::Player;
use super::spawn::Spawner;
use crate::config::SimConfig;
use crate::consts::*;
use crate::wrap_scroll;

/// Complete run state (deterministic)
///
/// Everything a tick reads or writes lives here, including the RNG; a seed
/// plus an input sequence replays a run exactly.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Validated spawn tuning
    pub config: SimConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulated seconds since the run started
    pub t: f32,
    /// Difficulty multiplier; scales dt and grows 5% per coin
    pub speed: f32,
    /// Banked coin points; the time bonus is added on display
    pub score: u64,
    /// Parallax offsets, wrapped to [0, WORLD_W)
    pub ground_x: f32,
    pub mountain_x: f32,
    pub game_over: bool,
    pub player: Player,
    /// Spawn order preserved: oldest first
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub spawner: Spawner,
}

impl GameState {
    /// Fresh run. The config must already be validated.
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let spawner = Spawner::new(&config);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            t: 0.0,
            speed: 1.0,
            score: 0,
            ground_x: 0.0,
            mountain_x: 0.0,
            game_over: false,
            player: Player::new(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            spawner,
            config,
        }
    }

    /// Begin a new run after game over
    ///
    /// The RNG stream continues (no reseed) so successive runs differ, and
    /// the parallax offsets carry over so the backdrop does not snap.
    pub fn restart(&mut self) {
        self.t = 0.0;
        self.speed = 1.0;
        self.score = 0;
        self.obstacles.clear();
        self.coins.clear();
        self.spawner.reset(&self.config);
        self.player.reset();
        self.game_over = false;
    }

    /// Score shown on the HUD: banked coins plus 50 points per second
    pub fn displayed_score(&self) -> u64 {
        self.score + (self.t * TIME_SCORE_RATE).floor() as u64
    }

    /// Scroll both background layers, wrapping at one world width
    pub fn scroll_layers(&mut self, dt: f32) {
        self.ground_x = wrap_scroll(self.ground_x - dt * BASE_SPEED, WORLD_W);
        self.mountain_x = wrap_scroll(self.mountain_x - dt * MOUNTAIN_SPEED, WORLD_W);
    }
}
