//! Rendering module
//!
//! The game describes each frame as a flat list of 2D draw commands. A sink
//! turns them into pixels (canvas 2D on the web) or just collects them.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSink;
pub use scene::{FrameInfo, draw_frame, hud_text};

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// One primitive, in world pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear { color: &'static str },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &'static str,
    },
    FillCircle {
        x: f32,
        y: f32,
        radius: f32,
        color: &'static str,
    },
    /// Monospace text, baseline at `y`
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        align: TextAlign,
        color: &'static str,
    },
}

/// Consumer of draw commands
pub trait RenderSink {
    fn draw(&mut self, command: DrawCommand);
}

impl RenderSink for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

/// Palette
pub mod colors {
    pub const BACKGROUND: &str = "#f7f7f7";
    pub const CLOUD: &str = "#c0c0c0";
    pub const INK: &str = "#535353";
    pub const GROUND_DOT: &str = "#b0b0b0";
    pub const EYE: &str = "#ffffff";
    pub const DEAD_EYE: &str = "#ff0000";
}
