//! Where rendered sounds go.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

/// A boxed, sendable mono or multi-channel source.
pub type BoxedSource = Box<dyn Source<Item = f32> + Send>;

/// Sink for fire-and-forget sounds.
pub trait AudioOutput {
    /// Start playing `source` without waiting for it to finish.
    fn play(&mut self, source: BoxedSource);
}

/// Default audio device.
///
/// Every call to [`AudioOutput::play`] gets its own detached [`Sink`], so
/// overlapping sounds mix freely.
pub struct RodioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    volume: f32,
}

impl RodioOutput {
    pub fn try_default(volume: f32) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("Failed to open default audio device")?;
        Ok(Self {
            _stream: stream,
            handle,
            volume,
        })
    }
}

impl AudioOutput for RodioOutput {
    fn play(&mut self, source: BoxedSource) {
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.set_volume(self.volume);
                sink.append(source);
                sink.detach();
            }
            Err(e) => tallypad_logger::warn(format!("Audio sink unavailable: {}", e)),
        }
    }
}

impl std::fmt::Debug for RodioOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioOutput")
            .field("volume", &self.volume)
            .finish()
    }
}

/// Output used when no audio device could be opened. Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentOutput;

impl AudioOutput for SilentOutput {
    fn play(&mut self, _source: BoxedSource) {}
}

/// One captured playback.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSound {
    pub channels: u16,
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

/// Output that renders every source into memory instead of a device.
///
/// Clones share the same recording.
#[derive(Debug, Default, Clone)]
pub struct RecordingOutput {
    played: Rc<RefCell<Vec<RecordedSound>>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<RecordedSound> {
        self.played.borrow().clone()
    }

    pub fn play_count(&self) -> usize {
        self.played.borrow().len()
    }
}

impl AudioOutput for RecordingOutput {
    fn play(&mut self, source: BoxedSource) {
        let channels = source.channels();
        let sample_rate = source.sample_rate();
        let samples = source.collect();
        self.played.borrow_mut().push(RecordedSound {
            channels,
            sample_rate,
            samples,
        });
    }
}
