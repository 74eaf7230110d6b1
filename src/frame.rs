//! Per-frame draw instruction
//!
//! `Frame::capture` snapshots the simulation into the only vocabulary the
//! renderer understands: parallax offsets, sprites in paint order, and HUD
//! overlay text. The renderer never reads `GameState`.

use glam::Vec2;

use crate::assets::SpriteId;
use crate::sim::{GameState, ObstacleKind};

/// One sprite to paint: logical id plus world-space rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInstance {
    pub sprite: SpriteId,
    pub pos: Vec2,
    pub size: Vec2,
}

/// HUD text for this frame
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// Live run: the ticking score line
    Score(String),
    /// Frozen frame: banner, final score, restart prompt
    GameOver {
        banner: String,
        score: String,
        prompt: String,
    },
}

/// Read-only draw instruction for one frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Parallax offsets, wrapped to [0, WORLD_W)
    pub ground_offset: f32,
    pub mountain_offset: f32,
    /// Paint order: runner, then fires, then coins on top
    pub sprites: Vec<SpriteInstance>,
    pub overlay: Overlay,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let mut sprites = Vec::with_capacity(1 + state.obstacles.len() + state.coins.len());

        let player = state.player.bounds();
        sprites.push(SpriteInstance {
            sprite: SpriteId::Runner(state.player.run_frame as u8),
            pos: player.pos,
            size: player.size,
        });

        for obstacle in &state.obstacles {
            let b = obstacle.bounds();
            sprites.push(SpriteInstance {
                sprite: fire_sprite(obstacle.kind),
                pos: b.pos,
                size: b.size,
            });
        }

        for coin in &state.coins {
            let b = coin.bounds();
            sprites.push(SpriteInstance {
                sprite: SpriteId::Coin,
                pos: b.pos,
                size: b.size,
            });
        }

        let score_line = format!("SCORE   {}", state.displayed_score());
        let overlay = if state.game_over {
            Overlay::GameOver {
                banner: "GAME    OVER".to_string(),
                score: score_line,
                prompt: "PRESS   SPACE   TO   PLAY   AGAIN".to_string(),
            }
        } else {
            Overlay::Score(score_line)
        };

        Self {
            ground_offset: state.ground_x,
            mountain_offset: state.mountain_x,
            sprites,
            overlay,
        }
    }
}

fn fire_sprite(kind: ObstacleKind) -> SpriteId {
    match kind {
        ObstacleKind::Small => SpriteId::FireSmall,
        ObstacleKind::Medium => SpriteId::FireMedium,
        ObstacleKind::Large => SpriteId::FireLarge,
    }
}
