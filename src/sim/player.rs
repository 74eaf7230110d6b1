//! The runner: fixed horizontal position, jump physics, run-cycle animation

use glam::Vec2;

use super::collision::{Bounds, Shape};
use crate::consts::{
    FOOT_SINK, GRAVITY, GROUND_LINE, JUMP_SPEED, PLAYER_SIZE, PLAYER_X, RUN_FRAME_COUNT,
    RUN_FRAME_SECS,
};

/// Player character
///
/// Two states: grounded (`jumping == false`, height 0) and airborne. The x
/// position never changes; the world scrolls past instead.
#[derive(Debug, Clone)]
pub struct Player {
    /// Height above the ground line, >= 0
    pub jump_height: f32,
    /// Upward velocity while airborne (positive = rising)
    pub vertical_vel: f32,
    pub jumping: bool,
    /// Run-cycle frame timer; keeps its remainder on advance
    pub frame_timer: f32,
    pub run_frame: usize,
}

impl Player {
    pub fn new() -> Self {
        Self {
            jump_height: 0.0,
            vertical_vel: 0.0,
            jumping: false,
            frame_timer: 0.0,
            run_frame: 0,
        }
    }

    /// Launch a jump; ignored while airborne
    pub fn jump(&mut self) {
        if !self.jumping {
            self.vertical_vel = JUMP_SPEED;
            self.jumping = true;
        }
    }

    /// Back to grounded. The animation phase carries across runs.
    pub fn reset(&mut self) {
        self.jump_height = 0.0;
        self.vertical_vel = 0.0;
        self.jumping = false;
    }

    pub fn update(&mut self, dt: f32) {
        if self.jumping {
            // Trapezoidal integration: exact for constant gravity
            let next_vel = self.vertical_vel - dt * GRAVITY;
            self.jump_height += (self.vertical_vel + next_vel) / 2.0 * dt;
            self.vertical_vel = next_vel;
            if self.jump_height < 0.0 {
                self.jump_height = 0.0;
                self.vertical_vel = 0.0;
                self.jumping = false;
            }
        }

        // The run cycle keeps going mid-air
        self.frame_timer += dt;
        if self.frame_timer >= RUN_FRAME_SECS {
            self.frame_timer -= RUN_FRAME_SECS;
            self.run_frame = (self.run_frame + 1) % RUN_FRAME_COUNT;
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            pos: Vec2::new(
                PLAYER_X,
                GROUND_LINE - PLAYER_SIZE + FOOT_SINK - self.jump_height,
            ),
            size: Vec2::splat(PLAYER_SIZE),
            shape: Shape::Box,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
