//! Key sound played from a recorded sample.
//!
//! The file is decoded once on a background thread; until the decoded
//! buffer arrives (or if decoding fails) keystrokes are silent. Each
//! keystroke replays the shared buffer at a slightly random speed.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rodio::{Decoder, Source};

use crate::output::AudioOutput;
use crate::KeySound;

/// Playback speed range, as a multiple of the recorded speed.
pub const MIN_SPEED: f32 = 0.95;
pub const MAX_SPEED: f32 = 1.05;

/// Fully decoded audio, shared between every playback.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSample {
    pub samples: Arc<[f32]>,
    pub channels: u16,
    pub sample_rate: u32,
}

/// Decode a whole audio file (wav, mp3, flac or ogg) into memory.
pub fn decode_file(path: &Path) -> Result<DecodedSample> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open sound file: {}", path.display()))?;
    let decoder = Decoder::new(BufReader::new(file))
        .with_context(|| format!("Failed to decode sound file: {}", path.display()))?;

    let channels = decoder.channels();
    let sample_rate = decoder.sample_rate();
    let samples: Vec<f32> = decoder.convert_samples::<f32>().collect();
    if samples.is_empty() {
        anyhow::bail!("Sound file has no samples: {}", path.display());
    }

    Ok(DecodedSample {
        samples: samples.into(),
        channels,
        sample_rate,
    })
}

/// Source replaying a [`DecodedSample`] from the start.
#[derive(Debug, Clone)]
pub struct SharedSamples {
    sample: DecodedSample,
    pos: usize,
}

impl SharedSamples {
    pub fn new(sample: DecodedSample) -> Self {
        Self { sample, pos: 0 }
    }
}

impl Iterator for SharedSamples {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let s = self.sample.samples.get(self.pos).copied()?;
        self.pos += 1;
        Some(s)
    }
}

impl Source for SharedSamples {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.sample.samples.len() - self.pos)
    }

    fn channels(&self) -> u16 {
        self.sample.channels
    }

    fn sample_rate(&self) -> u32 {
        self.sample.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        let frames = self.sample.samples.len() as f64 / self.sample.channels.max(1) as f64;
        Some(Duration::from_secs_f64(
            frames / self.sample.sample_rate.max(1) as f64,
        ))
    }
}

pub struct SampledKeySound {
    output: Box<dyn AudioOutput>,
    pending: Option<Receiver<Result<DecodedSample>>>,
    sample: Option<DecodedSample>,
    rng: StdRng,
}

impl SampledKeySound {
    /// Start decoding `path` in the background.
    pub fn load(path: PathBuf, output: Box<dyn AudioOutput>) -> Self {
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("sound-decode".to_string())
            .spawn(move || {
                let _ = tx.send(decode_file(&path));
            });

        let pending = match spawned {
            Ok(_) => Some(rx),
            Err(e) => {
                tallypad_logger::warn(format!("Failed to start sound decoder: {}", e));
                None
            }
        };

        Self::with_receiver(pending, output, StdRng::from_entropy())
    }

    /// Engine fed by an existing channel.
    pub fn with_receiver(
        pending: Option<Receiver<Result<DecodedSample>>>,
        output: Box<dyn AudioOutput>,
        rng: StdRng,
    ) -> Self {
        Self {
            output,
            pending,
            sample: None,
            rng,
        }
    }

    /// Whether the sample has been decoded.
    pub fn is_ready(&self) -> bool {
        self.sample.is_some()
    }

    /// Whether decoding is still in progress.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}

impl KeySound for SampledKeySound {
    fn play_key(&mut self) {
        let Some(sample) = &self.sample else {
            return;
        };
        let speed = self.rng.gen_range(MIN_SPEED..=MAX_SPEED);
        self.output
            .play(Box::new(SharedSamples::new(sample.clone()).speed(speed)));
    }

    fn poll(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(sample)) => {
                tallypad_logger::info(format!(
                    "Key sound loaded: {} samples, {} ch, {} Hz",
                    sample.samples.len(),
                    sample.channels,
                    sample.sample_rate
                ));
                self.sample = Some(sample);
                self.pending = None;
            }
            Ok(Err(e)) => {
                tallypad_logger::warn(format!("Key sound disabled: {:#}", e));
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                tallypad_logger::warn("Key sound decoder exited without a result");
                self.pending = None;
            }
        }
    }
}

impl std::fmt::Debug for SampledKeySound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampledKeySound")
            .field("ready", &self.is_ready())
            .field("loading", &self.is_loading())
            .finish()
    }
}
