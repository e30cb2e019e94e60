//! Shared fakes for driving the engine headlessly

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dino_runner::Engine;
use dino_runner::audio::{AudioSink, Cue};
use dino_runner::platform::{KeyValueStore, StorageError};

/// Store whose contents stay visible to the test after the engine takes it
#[derive(Clone, Default)]
pub struct SharedStore(pub Rc<RefCell<HashMap<String, String>>>);

impl SharedStore {
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.into(), value.into());
    }
}

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.get_raw(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }
}

/// Audio sink that remembers what it was asked to play
#[derive(Clone, Default)]
pub struct RecordingAudio {
    pub played: Rc<RefCell<Vec<(Cue, f32)>>>,
    pub unlocks: Rc<RefCell<u32>>,
}

impl RecordingAudio {
    pub fn cues(&self) -> Vec<Cue> {
        self.played.borrow().iter().map(|(cue, _)| *cue).collect()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: Cue, volume: f32) {
        self.played.borrow_mut().push((cue, volume));
    }

    fn unlock(&mut self) {
        *self.unlocks.borrow_mut() += 1;
    }
}

/// Engine wired to inspectable fakes
pub fn engine_with_fakes(seed: u64) -> (Engine, SharedStore, RecordingAudio) {
    let store = SharedStore::default();
    let audio = RecordingAudio::default();
    let engine = Engine::new(seed, Box::new(store.clone()), Box::new(audio.clone()));
    (engine, store, audio)
}
