//! Keystroke sounds for tallypad.
//!
//! Two engines implement [`KeySound`]: [`SynthKeySound`] renders a short
//! click for every key, [`SampledKeySound`] replays a decoded audio file.
//! Both hand their output to an [`AudioOutput`], which is the real device in
//! the application and a recorder in tests.
//!
//! Whether a key produces a sound at all is decided by the caller; engines
//! play whenever asked.

pub mod biquad;
pub mod output;
pub mod sampled;
pub mod synth;

use std::path::PathBuf;

use tallypad_config::{SoundSettings, SoundVariant};

pub use output::{
    AudioOutput, BoxedSource, RecordedSound, RecordingOutput, RodioOutput, SilentOutput,
};
pub use sampled::{DecodedSample, SampledKeySound};
pub use synth::SynthKeySound;

/// A sound engine for keystrokes.
pub trait KeySound {
    /// Play one keystroke, fire-and-forget.
    fn play_key(&mut self);

    /// Pick up results of background work. Called on every tick.
    fn poll(&mut self) {}
}

/// Open the default audio device, falling back to silence.
pub fn open_output(volume: f32) -> Box<dyn AudioOutput> {
    match RodioOutput::try_default(volume) {
        Ok(output) => Box::new(output),
        Err(e) => {
            tallypad_logger::warn(format!("Sound disabled, no audio output: {:#}", e));
            Box::new(SilentOutput)
        }
    }
}

/// Build the engine described by `settings` on top of `output`.
///
/// A sampled engine without a sample path falls back to the synthesized one.
pub fn engine_from_settings(
    settings: &SoundSettings,
    output: Box<dyn AudioOutput>,
) -> Box<dyn KeySound> {
    match (settings.variant, &settings.sample_path) {
        (SoundVariant::Sampled, Some(path)) => {
            tallypad_logger::info(format!("Loading key sound from {}", path));
            Box::new(SampledKeySound::load(PathBuf::from(path), output))
        }
        (SoundVariant::Sampled, None) => {
            tallypad_logger::warn("Sampled key sound selected without sample_path");
            Box::new(SynthKeySound::new(output))
        }
        (SoundVariant::Synthesized, _) => Box::new(SynthKeySound::new(output)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_build_synth_engine() {
        let recorder = RecordingOutput::new();
        let mut engine =
            engine_from_settings(&SoundSettings::default(), Box::new(recorder.clone()));
        engine.poll();
        engine.play_key();
        assert_eq!(recorder.play_count(), 4);
    }

    #[test]
    fn test_sampled_without_path_falls_back() {
        let settings = SoundSettings {
            variant: SoundVariant::Sampled,
            sample_path: None,
            ..SoundSettings::default()
        };
        let recorder = RecordingOutput::new();
        let mut engine = engine_from_settings(&settings, Box::new(recorder.clone()));
        engine.play_key();
        assert_eq!(recorder.play_count(), 4);
    }

    #[test]
    fn test_sampled_with_unreadable_path_stays_silent() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SoundSettings {
            variant: SoundVariant::Sampled,
            sample_path: Some(dir.path().join("nope.ogg").display().to_string()),
            ..SoundSettings::default()
        };
        let recorder = RecordingOutput::new();
        let mut engine = engine_from_settings(&settings, Box::new(recorder.clone()));
        for _ in 0..200 {
            engine.poll();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        engine.play_key();
        assert_eq!(recorder.play_count(), 0);
    }
}
