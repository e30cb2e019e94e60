//! Frame scheduling
//!
//! `FrameLoop` owns the single outstanding frame request for an engine. The
//! host's scheduler calls back into it once per display frame; stopping
//! cancels whatever request is pending so no tick can run afterwards.

/// Handle for one outstanding frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameId(pub i64);

/// Something that can deliver a callback on the next display frame
pub trait FrameScheduler {
    /// Ask for one callback on the next frame. `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameId>;
    /// Withdraw a request made with `request_frame`
    fn cancel_frame(&mut self, id: FrameId);
}

/// Start/stop state plus frame timing for one tick stream
#[derive(Debug)]
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<FrameId>,
    last_time: f64,
    running: bool,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            last_time: 0.0,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request the first frame. No-op when already running.
    pub fn start(&mut self, now_ms: f64) {
        if self.running {
            return;
        }
        self.last_time = now_ms;
        self.pending = self.scheduler.request_frame();
        self.running = self.pending.is_some();
        if !self.running {
            log::warn!("Frame request refused, loop not started");
        }
    }

    /// Cancel the pending frame. No-op when already stopped.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
    }

    /// A frame callback fired at `now_ms`. Returns the elapsed ms to tick
    /// with and schedules the next frame, or `None` if the loop was stopped
    /// or nothing was pending. If the next request is refused the loop drops
    /// back to stopped so a later `start` can revive it.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<f64> {
        if !self.running || self.pending.take().is_none() {
            return None;
        }
        let dt = now_ms - self.last_time;
        self.last_time = now_ms;
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("Frame request refused, loop stopped");
            self.running = false;
        }
        Some(dt)
    }

    pub fn pending(&self) -> Option<FrameId> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

/// Scheduler for headless use: frames fire only when the caller says so
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i64,
    outstanding: Option<FrameId>,
    /// Total requests ever made
    pub requested: u32,
    /// Total cancellations ever made
    pub cancelled: u32,
    /// Refuse every request while set
    pub refuse: bool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The request waiting to fire, if any
    pub fn outstanding(&self) -> Option<FrameId> {
        self.outstanding
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        self.requested += 1;
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        let id = FrameId(self.next_id);
        self.outstanding = Some(id);
        Some(id)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if self.outstanding == Some(id) {
            self.outstanding = None;
            self.cancelled += 1;
        }
    }
}
