//! Sound cues
//!
//! The game only ever asks for a cue to be played. Backends decide how, and
//! must never fail loudly: a missing or locked audio device means silence.

/// Named sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Player left the ground
    Jump,
    /// Score milestone reached
    Score,
    /// Player hit an obstacle
    Hit,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Jump => "jump",
            Cue::Score => "score",
            Cue::Hit => "hit",
        }
    }
}

/// Fire-and-forget audio output
pub trait AudioSink {
    /// Play a cue at `volume` (0.0 - 1.0). Must not block.
    fn play(&mut self, cue: Cue, volume: f32);

    /// Called on every user gesture; backends that need one to start may
    /// use it to unlock output.
    fn unlock(&mut self) {}
}

/// Audio sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: Cue, _volume: f32) {}
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, Cue};

    /// Procedural cues through the Web Audio API - no sound files needed
    pub struct WebAudio {
        ctx: Option<AudioContext>,
    }

    impl Default for WebAudio {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudio {
        pub fn new() -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx }
        }

        /// Create an oscillator routed through a gain node
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Jump - quick rising blip
        fn play_jump(ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = Self::create_osc(ctx, 400.0, OscillatorType::Square) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.5, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                .ok();
            osc.frequency().set_value_at_time(400.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(800.0, t + 0.1)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.12).ok();
        }

        /// Score - two-note chime
        fn play_score(ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();
            for (i, freq) in [880.0, 1320.0].into_iter().enumerate() {
                let start = t + i as f64 * 0.08;
                if let Some((osc, gain)) = Self::create_osc(ctx, freq, OscillatorType::Square) {
                    gain.gain().set_value_at_time(vol * 0.4, start).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, start + 0.08)
                        .ok();
                    osc.start_with_when(start).ok();
                    osc.stop_with_when(start + 0.1).ok();
                }
            }
        }

        /// Hit - falling buzz
        fn play_hit(ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = Self::create_osc(ctx, 300.0, OscillatorType::Sawtooth) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.6, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                .ok();
            osc.frequency().set_value_at_time(300.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(60.0, t + 0.3)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.35).ok();
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, cue: Cue, volume: f32) {
            if volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() != AudioContextState::Running {
                log::debug!("Audio locked, dropping {} cue", cue.as_str());
                return;
            }

            match cue {
                Cue::Jump => Self::play_jump(ctx, volume),
                Cue::Score => Self::play_score(ctx, volume),
                Cue::Hit => Self::play_hit(ctx, volume),
            }
        }

        fn unlock(&mut self) {
            if let Some(ctx) = &self.ctx {
                if ctx.state() == AudioContextState::Suspended {
                    let _ = ctx.resume();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_names() {
        assert_eq!(Cue::Jump.as_str(), "jump");
        assert_eq!(Cue::Score.as_str(), "score");
        assert_eq!(Cue::Hit.as_str(), "hit");
    }

    #[test]
    fn test_null_audio_accepts_anything() {
        let mut audio = NullAudio;
        audio.unlock();
        audio.play(Cue::Hit, 1.0);
        audio.play(Cue::Jump, 0.0);
    }
}
