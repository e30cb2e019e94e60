//! Frame composition
//!
//! Reads game state and emits draw commands back to front: sky, clouds,
//! ground, obstacles, player, HUD.

use super::colors::*;
use super::{DrawCommand, RenderSink, TextAlign};
use crate::consts::*;
use crate::sim::{Cloud, GamePhase, GameState, Obstacle, ObstacleKind, Player, Pose};

/// Ground texture dot spacing
const GROUND_DOT_SPACING: f32 = 24.0;

/// Per-frame inputs that do not live in the game state
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInfo {
    /// Wall clock in ms, drives the bird wing flap
    pub wall_ms: f64,
    /// Hold wings still
    pub reduced_motion: bool,
}

/// Draw a complete frame
pub fn draw_frame(state: &GameState, info: &FrameInfo, sink: &mut dyn RenderSink) {
    sink.draw(DrawCommand::Clear { color: BACKGROUND });

    for cloud in &state.clouds {
        draw_cloud(cloud, sink);
    }

    draw_ground(state.ground_offset, sink);

    let wing_offset = if info.reduced_motion {
        0.0
    } else {
        ((info.wall_ms * 0.01).sin() * 3.0) as f32
    };
    for obstacle in &state.obstacles {
        draw_obstacle(obstacle, wing_offset, sink);
    }

    draw_player(&state.player, sink);
    draw_hud(state, sink);
}

fn rect(x: f32, y: f32, width: f32, height: f32, color: &'static str) -> DrawCommand {
    DrawCommand::FillRect {
        x,
        y,
        width,
        height,
        color,
    }
}

fn draw_cloud(cloud: &Cloud, sink: &mut dyn RenderSink) {
    for (dx, radius) in [(0.0, 8.0), (12.0, 12.0), (24.0, 8.0)] {
        sink.draw(DrawCommand::FillCircle {
            x: cloud.pos.x + dx,
            y: cloud.pos.y,
            radius,
            color: CLOUD,
        });
    }
}

/// Cheap stable hash so the same dots show up every frame
fn has_ground_dot(slot: u32) -> bool {
    (slot.wrapping_mul(2654435761) >> 16) % 10 >= 7
}

fn draw_ground(offset: f32, sink: &mut dyn RenderSink) {
    sink.draw(rect(0.0, GROUND_Y, WORLD_WIDTH, 2.0, INK));

    let mut x = offset;
    let mut slot = 0u32;
    while x < WORLD_WIDTH {
        if has_ground_dot(slot) {
            sink.draw(rect(x, GROUND_Y + 2.0, 2.0, 2.0, GROUND_DOT));
        }
        x += GROUND_DOT_SPACING;
        slot += 1;
    }
}

fn draw_obstacle(obstacle: &Obstacle, wing_offset: f32, sink: &mut dyn RenderSink) {
    let (x, y) = (obstacle.pos.x, obstacle.pos.y);
    let (w, h) = (obstacle.size.x, obstacle.size.y);

    match obstacle.kind {
        ObstacleKind::CactusSmall => sink.draw(rect(x, y, w, h, INK)),
        ObstacleKind::CactusLarge => {
            sink.draw(rect(x, y, w, h, INK));
            // Arms
            sink.draw(rect(x - 4.0, y + 10.0, 8.0, 3.0, INK));
            sink.draw(rect(x + w - 4.0, y + 20.0, 8.0, 3.0, INK));
        }
        ObstacleKind::BirdHigh | ObstacleKind::BirdLow => {
            let y = y + wing_offset;
            sink.draw(rect(x, y, w, h, INK));
            // Wings
            sink.draw(rect(x + 5.0, y - 5.0, 15.0, 3.0, INK));
            sink.draw(rect(x + 5.0, y + h + 2.0, 15.0, 3.0, INK));
        }
    }
}

fn draw_player(player: &Player, sink: &mut dyn RenderSink) {
    let (x, top) = (player.pos.x, player.pos.y);
    let height = player.height();
    sink.draw(rect(x, top, PLAYER_WIDTH, height, INK));

    // Stride: notch out alternating feet while running
    if matches!(player.pose, Pose::Running | Pose::Ducking) {
        let foot_x = if player.anim_frame % 2 == 0 {
            x + 8.0
        } else {
            x + PLAYER_WIDTH - 16.0
        };
        sink.draw(rect(foot_x, top + height - 4.0, 8.0, 4.0, BACKGROUND));
    }

    let eye = if player.pose == Pose::Dead { DEAD_EYE } else { EYE };
    sink.draw(rect(x + 25.0, top + 8.0, 3.0, 3.0, eye));
}

/// `HI 00123 00045`
pub fn hud_text(high_score: u64, score: u64) -> String {
    format!("HI {:05} {:05}", high_score, score)
}

fn draw_hud(state: &GameState, sink: &mut dyn RenderSink) {
    sink.draw(DrawCommand::Text {
        text: hud_text(state.high_score, state.display_score()),
        x: WORLD_WIDTH - 20.0,
        y: 30.0,
        size: 16.0,
        align: TextAlign::Right,
        color: INK,
    });

    let center_x = WORLD_WIDTH / 2.0;
    let center_y = WORLD_HEIGHT / 2.0;
    let centered = |text: &str, y: f32, size: f32| DrawCommand::Text {
        text: text.to_string(),
        x: center_x,
        y,
        size,
        align: TextAlign::Center,
        color: INK,
    };

    match state.phase {
        GamePhase::Menu => sink.draw(centered("PRESS SPACE TO START", center_y - 20.0, 24.0)),
        GamePhase::GameOver => {
            sink.draw(centered("GAME OVER", center_y - 40.0, 24.0));
            sink.draw(centered("PRESS SPACE TO RESTART", center_y - 10.0, 16.0));
        }
        GamePhase::Playing => {}
    }
}
