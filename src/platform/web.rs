//! Browser frame scheduling via requestAnimationFrame

use super::frame::{FrameId, FrameScheduler};

/// Schedules frames with `window.requestAnimationFrame`.
///
/// The callback is installed after construction because it usually needs
/// a handle to whatever owns this scheduler.
#[derive(Default)]
pub struct RafScheduler {
    callback: Option<js_sys::Function>,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_callback(&mut self, callback: js_sys::Function) {
        self.callback = Some(callback);
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        let (Some(window), Some(callback)) = (web_sys::window(), &self.callback) else {
            log::warn!("requestAnimationFrame unavailable");
            return None;
        };
        match window.request_animation_frame(callback) {
            Ok(handle) => Some(FrameId(handle as i64)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.cancel_animation_frame(id.0 as i32) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }
}
