//! Per-frame simulation tick
//!
//! Advances one frame of gameplay. Motion is in pixels per tick, so the
//! game runs at the display's frame rate; `dt` only drives animation timing.

use rand::Rng;

use super::collision::first_hit;
use super::machine::game_over;
use super::state::{GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Pose};
use crate::consts::*;

/// Level-triggered input sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Duck key currently held
    pub duck_held: bool,
}

/// Advance the game state by one frame. `dt` is elapsed wall time in ms.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    update_player(state, input, dt);
    update_obstacles(state);
    update_clouds(state);
    update_progress(state);

    if let Some(index) = first_hit(&state.player, &state.obstacles) {
        log::debug!("Hit {:?}", state.obstacles[index].kind);
        game_over(state);
    }
}

fn update_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let player = &mut state.player;

    // Ducking lasts exactly as long as the key is held
    match player.pose {
        Pose::Ducking if !input.duck_held => player.pose = Pose::Running,
        Pose::Running if input.duck_held && player.is_grounded() => player.pose = Pose::Ducking,
        _ => {}
    }

    player.vel_y = (player.vel_y + GRAVITY).min(MAX_FALL_SPEED);
    player.pos.y += player.vel_y;

    if player.pos.y >= PLAYER_GROUND_Y {
        player.pos.y = PLAYER_GROUND_Y;
        player.vel_y = 0.0;
        if player.pose == Pose::Jumping {
            player.pose = Pose::Running;
        }
    }

    player.anim_timer += dt;
    let frame_ms = player.pose.frame_ms();
    if frame_ms > 0.0 && player.anim_timer >= frame_ms {
        player.anim_timer = 0.0;
        player.anim_frame = (player.anim_frame + 1) % player.pose.frame_count();
    }
}

fn update_obstacles(state: &mut GameState) {
    let speed = state.speed;
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= speed;
    }
    state.obstacles.retain(|o| o.right() > 0.0);

    state.next_obstacle_distance -= speed;
    if state.next_obstacle_distance <= 0.0 {
        spawn_obstacle(state);
        state.next_obstacle_distance = state
            .rng
            .random_range(OBSTACLE_MIN_DISTANCE..OBSTACLE_MAX_DISTANCE);
    }
}

/// Add a random obstacle just past the right edge of the world
pub fn spawn_obstacle(state: &mut GameState) {
    let kind = ObstacleKind::ALL[state.rng.random_range(0..ObstacleKind::ALL.len())];
    log::debug!("Spawning {:?} at speed {}", kind, state.speed);
    state.obstacles.push(Obstacle::new(kind, WORLD_WIDTH));
}

fn update_clouds(state: &mut GameState) {
    for cloud in &mut state.clouds {
        cloud.pos.x -= cloud.speed;
        if cloud.pos.x + CLOUD_WIDTH < 0.0 {
            cloud.pos.x = WORLD_WIDTH + state.rng.random::<f32>() * CLOUD_RESPAWN_SPREAD;
            cloud.pos.y = CLOUD_MIN_Y + state.rng.random::<f32>() * CLOUD_Y_RANGE;
        }
    }
}

fn update_progress(state: &mut GameState) {
    let before = state.display_score();
    state.score += SCORE_PER_TICK;
    let after = state.display_score();

    if after > before {
        if after % SPEED_INCREASE_INTERVAL == 0 {
            state.speed = (state.speed + SPEED_INCREASE).min(MAX_SPEED);
        }
        if after % SCORE_CUE_INTERVAL == 0 {
            state.events.push(GameEvent::ScoreMilestone);
        }
    }

    state.ground_offset -= state.speed;
    if state.ground_offset <= GROUND_WRAP {
        state.ground_offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::machine::{Action, apply_action, start_run};

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(seed, 0);
        start_run(&mut state);
        state
    }

    #[test]
    fn test_tick_menu_is_frozen() {
        let mut state = GameState::new(12345, 0);
        let clouds = state.clouds.clone();
        for _ in 0..100 {
            tick(&mut state, &TickInput { duck_held: true }, 16.0);
        }
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.clouds, clouds);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_score_ignores_dt() {
        let mut a = playing(1);
        let mut b = playing(1);
        tick(&mut a, &TickInput::default(), 1.0);
        tick(&mut b, &TickInput::default(), 1000.0);
        assert_eq!(a.score, b.score);
        assert_eq!(a.score, SCORE_PER_TICK);
    }

    #[test]
    fn test_jump_arc_lands_running() {
        let mut state = playing(3);
        apply_action(&mut state, Action::Activate);
        let mut peak = PLAYER_GROUND_Y;
        let mut ticks = 0;
        while state.player.pose == Pose::Jumping {
            // Keep the track clear so the arc completes
            state.obstacles.clear();
            state.next_obstacle_distance = OBSTACLE_MAX_DISTANCE;
            tick(&mut state, &TickInput::default(), 16.0);
            peak = peak.min(state.player.pos.y);
            ticks += 1;
            assert!(ticks < 200, "never landed");
        }
        assert_eq!(state.player.pose, Pose::Running);
        assert_eq!(state.player.pos.y, PLAYER_GROUND_Y);
        assert_eq!(state.player.vel_y, 0.0);
        assert!(peak < PLAYER_GROUND_Y - 50.0);
        assert!(peak > 0.0);
    }

    #[test]
    fn test_duck_follows_key() {
        let mut state = playing(4);
        tick(&mut state, &TickInput { duck_held: true }, 16.0);
        assert_eq!(state.player.pose, Pose::Ducking);
        tick(&mut state, &TickInput { duck_held: true }, 16.0);
        assert_eq!(state.player.pose, Pose::Ducking);
        tick(&mut state, &TickInput { duck_held: false }, 16.0);
        assert_eq!(state.player.pose, Pose::Running);
    }

    #[test]
    fn test_duck_released_in_air_lands_running() {
        let mut state = playing(5);
        apply_action(&mut state, Action::Activate);
        // Held while rising, released before landing
        for i in 0..200 {
            state.obstacles.clear();
            state.next_obstacle_distance = OBSTACLE_MAX_DISTANCE;
            let held = i < 10;
            if held {
                apply_action(&mut state, Action::Duck);
            }
            tick(&mut state, &TickInput { duck_held: held }, 16.0);
            if held {
                assert_eq!(state.player.pose, Pose::Jumping);
            }
            if state.player.is_grounded() {
                break;
            }
        }
        assert!(state.player.is_grounded());
        assert_eq!(state.player.pose, Pose::Running);
    }

    #[test]
    fn test_obstacles_scroll_and_retire() {
        let mut state = playing(6);
        state.obstacles.push(Obstacle::new(ObstacleKind::CactusSmall, 2.0));
        state.obstacles.push(Obstacle::new(ObstacleKind::BirdHigh, 400.0));
        state.obstacles.push(Obstacle::new(ObstacleKind::CactusLarge, -19.0));
        state.next_obstacle_distance = OBSTACLE_MAX_DISTANCE;
        tick(&mut state, &TickInput::default(), 16.0);

        // 2 + 17 - 6 = 13 > 0 stays, -19 + 25 - 6 = 0 is gone
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.obstacles[0].pos.x, 2.0 - INITIAL_SPEED);
        assert_eq!(state.obstacles[1].pos.x, 400.0 - INITIAL_SPEED);
    }

    #[test]
    fn test_spawn_at_right_edge() {
        let mut state = playing(7);
        state.next_obstacle_distance = 1.0;
        tick(&mut state, &TickInput::default(), 16.0);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, WORLD_WIDTH);
        assert!(state.next_obstacle_distance >= OBSTACLE_MIN_DISTANCE);
        assert!(state.next_obstacle_distance < OBSTACLE_MAX_DISTANCE);
    }

    #[test]
    fn test_all_kinds_spawn() {
        let mut state = playing(8);
        for _ in 0..200 {
            spawn_obstacle(&mut state);
        }
        for kind in ObstacleKind::ALL {
            assert!(state.obstacles.iter().any(|o| o.kind == kind), "{kind:?} never spawned");
        }
    }

    #[test]
    fn test_speed_steps_at_interval() {
        let mut state = playing(9);
        state.score = SPEED_INCREASE_INTERVAL as f64 - 0.05;
        state.next_obstacle_distance = f32::MAX;
        tick(&mut state, &TickInput::default(), 16.0);
        assert_eq!(state.speed, INITIAL_SPEED + SPEED_INCREASE);
        assert_eq!(state.drain_events(), vec![GameEvent::ScoreMilestone]);

        // Still on the same multiple: no further step
        tick(&mut state, &TickInput::default(), 16.0);
        assert_eq!(state.speed, INITIAL_SPEED + SPEED_INCREASE);
    }

    #[test]
    fn test_speed_capped() {
        let mut state = playing(10);
        state.speed = MAX_SPEED - 0.1;
        state.score = SPEED_INCREASE_INTERVAL as f64 * 3.0 - 0.05;
        state.next_obstacle_distance = f32::MAX;
        tick(&mut state, &TickInput::default(), 16.0);
        assert_eq!(state.speed, MAX_SPEED);
    }

    #[test]
    fn test_ground_offset_wraps() {
        let mut state = playing(11);
        state.next_obstacle_distance = f32::MAX;
        for _ in 0..50 {
            tick(&mut state, &TickInput::default(), 16.0);
            assert!(state.ground_offset <= 0.0);
            assert!(state.ground_offset > GROUND_WRAP);
        }
    }

    #[test]
    fn test_clouds_recycle_keep_speed() {
        let mut state = playing(12);
        state.next_obstacle_distance = f32::MAX;
        state.clouds[0].pos.x = -CLOUD_WIDTH;
        let speed = state.clouds[0].speed;
        tick(&mut state, &TickInput::default(), 16.0);
        let cloud = &state.clouds[0];
        assert!(cloud.pos.x >= WORLD_WIDTH);
        assert!(cloud.pos.y >= CLOUD_MIN_Y && cloud.pos.y < CLOUD_MIN_Y + CLOUD_Y_RANGE);
        assert_eq!(cloud.speed, speed);
    }

    #[test]
    fn test_collision_ends_run() {
        let mut state = playing(13);
        state.next_obstacle_distance = f32::MAX;
        state.score = 57.3;
        state
            .obstacles
            .push(Obstacle::new(ObstacleKind::CactusSmall, PLAYER_X + INITIAL_SPEED));
        tick(&mut state, &TickInput::default(), 16.0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.player.pose, Pose::Dead);
        assert_eq!(state.high_score, 57);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::Hit));
        assert!(events.contains(&GameEvent::NewHighScore(57)));

        // Dead game stays put
        let score = state.score;
        tick(&mut state, &TickInput::default(), 16.0);
        assert_eq!(state.score, score);
    }

    #[test]
    fn test_running_animation_cycles() {
        let mut state = playing(14);
        state.next_obstacle_distance = f32::MAX;
        tick(&mut state, &TickInput::default(), RUN_FRAME_MS);
        assert_eq!(state.player.anim_frame, 1);
        assert_eq!(state.player.anim_timer, 0.0);
        tick(&mut state, &TickInput::default(), RUN_FRAME_MS / 2.0);
        assert_eq!(state.player.anim_frame, 1);
        tick(&mut state, &TickInput::default(), RUN_FRAME_MS / 2.0);
        assert_eq!(state.player.anim_frame, 0);
    }

    #[test]
    fn test_determinism() {
        let mut a = playing(99999);
        let mut b = playing(99999);
        for i in 0..600 {
            let input = TickInput { duck_held: i % 90 < 20 };
            if i % 45 == 0 {
                apply_action(&mut a, Action::Activate);
                apply_action(&mut b, Action::Activate);
            }
            tick(&mut a, &input, 16.0);
            tick(&mut b, &input, 16.0);
        }
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.player, b.player);
    }
}
