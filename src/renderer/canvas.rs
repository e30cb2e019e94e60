//! Canvas 2D render sink

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DrawCommand, RenderSink};

/// Draws commands onto an HTML canvas
pub struct CanvasSink {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSink {
    /// Wrap a canvas' 2D context. `None` if the browser will not give one.
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl RenderSink for CanvasSink {
    fn draw(&mut self, command: DrawCommand) {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear { color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(0.0, 0.0, self.width, self.height);
            }
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(x as f64, y as f64, width as f64, height as f64);
            }
            DrawCommand::FillCircle {
                x,
                y,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                if ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU).is_ok() {
                    ctx.fill();
                }
            }
            DrawCommand::Text {
                text,
                x,
                y,
                size,
                align,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.set_font(&format!("{}px monospace", size));
                ctx.set_text_align(align.as_str());
                let _ = ctx.fill_text(&text, x as f64, y as f64);
            }
        }
    }
}
