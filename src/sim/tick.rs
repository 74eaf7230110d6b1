//! Per-frame simulation step
//!
//! One tick per animation frame. dt derives from the speed multiplier and
//! the nominal 60 Hz frame rate, never from the wall clock, so a run plays
//! out identically wherever the seed and inputs match.

use super::collision::overlaps;
use super::state::GameState;
use crate::consts::{COIN_BOOST, COIN_SCORE, TICK_RATE_HZ};

/// Input gathered since the previous tick (one-shot, cleared by the driver)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// The single action button: jump mid-run, restart after game over
    pub action: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Action dispatch sits between frames: restart swaps in a fresh run
    // that is then simulated below like any other
    if input.action {
        if state.game_over {
            state.restart();
        } else {
            state.player.jump();
        }
    }

    // A finished run renders frozen until restarted
    if state.game_over {
        return;
    }

    // Faster games burn more simulated time per frame
    let dt = state.speed / TICK_RATE_HZ;
    state.t += dt;

    state.scroll_layers(dt);
    state.spawner.step(
        dt,
        &state.config,
        &mut state.rng,
        &mut state.obstacles,
        &mut state.coins,
    );

    state.player.update(dt);
    for obstacle in &mut state.obstacles {
        obstacle.update(dt);
    }
    for coin in &mut state.coins {
        coin.update(dt);
    }

    resolve_collisions(state);

    // Nothing behind the left edge ever comes back
    state.obstacles.retain(|o| !o.off_screen());
    state.coins.retain(|c| !c.off_screen());
}

/// Coin pickups and burn-ups, then the fatal obstacle check
fn resolve_collisions(state: &mut GameState) {
    let player_bounds = state.player.bounds();

    // Decide every coin's fate in one pass, then apply the effects
    let obstacles = &state.obstacles;
    let mut picked = 0u32;
    state.coins.retain(|coin| {
        let bounds = coin.bounds();
        if overlaps(&bounds, &player_bounds) {
            // A pickup trumps burning up on a fire
            picked += 1;
            return false;
        }
        // The first overlapping fire, in spawn order, burns the coin
        !obstacles.iter().any(|o| overlaps(&bounds, &o.bounds()))
    });

    for _ in 0..picked {
        state.score += COIN_SCORE;
        state.speed *= COIN_BOOST;
    }

    if state
        .obstacles
        .iter()
        .any(|o| overlaps(&o.bounds(), &player_bounds))
    {
        state.game_over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::consts::{BASE_SPEED, WORLD_W};
    use crate::sim::entity::{Coin, Obstacle, ObstacleKind};
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn new_state() -> GameState {
        GameState::new(SimConfig::default(), 42)
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    fn press() -> TickInput {
        TickInput { action: true }
    }

    #[test]
    fn test_dt_scales_with_speed() {
        let mut state = new_state();
        tick(&mut state, &idle());
        assert_eq!(state.t, 1.0 / 60.0);

        let mut fast = new_state();
        fast.speed = 1.5;
        tick(&mut fast, &idle());
        assert_eq!(fast.t, 1.5 / 60.0);
    }

    #[test]
    fn test_first_tick_spawns_one_obstacle() {
        let mut state = new_state();
        tick(&mut state, &idle());

        // Spawned at the right edge, then scrolled within the same tick
        assert_eq!(state.obstacles.len(), 1);
        let expected_x = WORLD_W - DT * BASE_SPEED;
        assert!((state.obstacles[0].x - expected_x).abs() < 1e-3);
        assert!(state.coins.is_empty());
    }

    #[test]
    fn test_action_launches_jump() {
        let mut state = new_state();
        tick(&mut state, &press());
        assert!(state.player.jumping);
        assert!(state.player.jump_height > 0.0);
    }

    #[test]
    fn test_coin_pickup_scores_and_boosts() {
        let mut state = new_state();
        // Dead center of the player box
        state.coins.push(Coin {
            pos: Vec2::new(90.0, 397.0),
        });

        tick(&mut state, &idle());

        assert!(state.coins.is_empty());
        assert_eq!(state.score, 1000);
        assert_eq!(state.speed, 1.05);
        assert!(!state.game_over);
    }

    #[test]
    fn test_two_coins_picked_up_in_one_tick() {
        let mut state = new_state();
        // Both inside the player box, near enough to overlap each other too
        state.coins.push(Coin {
            pos: Vec2::new(90.0, 380.0),
        });
        state.coins.push(Coin {
            pos: Vec2::new(110.0, 400.0),
        });

        tick(&mut state, &idle());

        assert!(state.coins.is_empty());
        assert_eq!(state.score, 2000);
        assert_eq!(state.speed, 1.05 * 1.05);
        assert!(!state.game_over);
    }

    #[test]
    fn test_coin_burns_on_fire_without_score() {
        let mut state = new_state();
        state.spawner.obstacle_clearance = 10_000.0;
        state.obstacles.push(Obstacle {
            kind: ObstacleKind::Small,
            x: 400.0,
        });
        // Inside that fire's box, far from the player
        state.coins.push(Coin {
            pos: Vec2::new(410.0, 410.0),
        });

        tick(&mut state, &idle());

        assert!(state.coins.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 1.0);
    }

    #[test]
    fn test_pickup_trumps_burn() {
        let mut state = new_state();
        state.spawner.obstacle_clearance = 10_000.0;
        // Overlaps the coin but not the player
        state.obstacles.push(Obstacle {
            kind: ObstacleKind::Medium,
            x: 160.0,
        });
        // Overlaps both player (via the right face) and the fire
        state.coins.push(Coin {
            pos: Vec2::new(140.0, 380.0),
        });

        tick(&mut state, &idle());

        assert!(state.coins.is_empty());
        assert_eq!(state.score, 1000);
        assert_eq!(state.speed, 1.05);
        assert!(!state.game_over);
    }

    #[test]
    fn test_obstacle_hit_freezes_the_run() {
        let mut state = new_state();
        state.spawner.obstacle_clearance = 10_000.0;
        state.obstacles.push(Obstacle {
            kind: ObstacleKind::Small,
            x: 100.0,
        });

        tick(&mut state, &idle());
        assert!(state.game_over);

        // Frozen: nothing advances until restart
        let t = state.t;
        let x = state.obstacles[0].x;
        let ground_x = state.ground_x;
        tick(&mut state, &idle());
        assert_eq!(state.t, t);
        assert_eq!(state.obstacles[0].x, x);
        assert_eq!(state.ground_x, ground_x);
    }

    #[test]
    fn test_action_restarts_after_game_over() {
        let mut state = new_state();
        state.spawner.obstacle_clearance = 10_000.0;
        state.obstacles.push(Obstacle {
            kind: ObstacleKind::Small,
            x: 100.0,
        });
        state.score = 4000;
        state.speed = 1.3;
        tick(&mut state, &idle());
        assert!(state.game_over);

        tick(&mut state, &press());

        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        // The restarted run ticks immediately: t moved one fresh frame and
        // the reset clearance spawned a new obstacle at the right edge
        assert_eq!(state.t, 1.0 / 60.0);
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.obstacles[0].x > 700.0);
    }

    #[test]
    fn test_culling_drops_entities_past_left_edge() {
        let mut state = new_state();
        state.spawner.obstacle_clearance = 10_000.0;
        state.obstacles.push(Obstacle {
            kind: ObstacleKind::Small,
            x: -49.0,
        });
        state.obstacles.push(Obstacle {
            kind: ObstacleKind::Small,
            x: 300.0,
        });
        state.coins.push(Coin {
            pos: Vec2::new(-29.0, 300.0),
        });

        tick(&mut state, &idle());

        assert_eq!(state.obstacles.len(), 1);
        assert!((state.obstacles[0].x - 300.0).abs() < 10.0);
        assert!(state.coins.is_empty());
    }

    #[test]
    fn test_idle_run_plays_out_deterministically() {
        let mut a = new_state();
        let mut b = new_state();
        for _ in 0..300 {
            tick(&mut a, &idle());
            tick(&mut b, &idle());
        }
        assert_eq!(a.t, b.t);
        assert_eq!(a.score, b.score);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.x, ob.x);
            assert_eq!(oa.kind, ob.kind);
        }
        for (ca, cb) in a.coins.iter().zip(&b.coins) {
            assert_eq!(ca.pos, cb.pos);
        }
    }

    #[test]
    fn test_idle_run_ends_in_game_over() {
        let mut state = new_state();
        let mut prev_displayed = 0;
        for _ in 0..2000 {
            tick(&mut state, &idle());
            if state.game_over {
                break;
            }
            assert!(state.speed >= 1.0);
            assert!(state.displayed_score() >= prev_displayed);
            prev_displayed = state.displayed_score();
            // Spawn order matches left-to-right order on screen
            for pair in state.obstacles.windows(2) {
                assert!(pair[0].x <= pair[1].x);
            }
            for pair in state.coins.windows(2) {
                assert!(pair[0].pos.x <= pair[1].pos.x);
            }
        }
        // Never jumping, the runner meets a fire within the first stretch
        assert!(state.game_over);
    }
}
