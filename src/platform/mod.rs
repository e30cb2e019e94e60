//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events
//! - Storage (LocalStorage on web)
//! - Frame scheduling (requestAnimationFrame on web)

pub mod frame;
pub mod input;
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use frame::{FrameId, FrameLoop, FrameScheduler, ManualScheduler};
pub use input::{InputTracker, Key};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
