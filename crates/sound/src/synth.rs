//! Synthesized mechanical-keyboard click.
//!
//! A keystroke is four short voices rendered at 44.1 kHz and played
//! independently:
//!
//! | voice | waveform        | frequency | gain            | length |
//! |-------|-----------------|-----------|-----------------|--------|
//! | click | square          | f         | 0.08 → 0.001    | 20 ms  |
//! | body  | triangle        | 1.5 f     | 0.04 → 0.001    | 80 ms  |
//! | thock | sine            | 0.8 f     | 0.06 → 0.001    | 60 ms  |
//! | noise | band-passed noise at 2 f, Q 2 | | 0.03 → 0.001 | 30 ms |
//!
//! The thock starts at 10 ms and stays silent until 15 ms.
//! `f` is picked at random from [`BASE_FREQUENCIES`] for every keystroke.
//! Gains fall exponentially.

use std::f32::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rodio::buffer::SamplesBuffer;

use crate::biquad::Biquad;
use crate::output::AudioOutput;
use crate::KeySound;

pub const SAMPLE_RATE: u32 = 44_100;
pub const BASE_FREQUENCIES: [f32; 3] = [150.0, 200.0, 250.0];

/// Level every ramp ends at.
const RAMP_FLOOR: f32 = 0.001;
const NOISE_Q: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Square,
    Triangle,
    Sine,
}

impl Waveform {
    /// Value at `phase` (in cycles, any real number).
    fn sample(self, phase: f32) -> f32 {
        let p = phase.rem_euclid(1.0);
        match self {
            Waveform::Sine => (2.0 * PI * p).sin(),
            Waveform::Square => {
                if p < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            // Starts at zero and rises, like the sine
            Waveform::Triangle => {
                if p < 0.25 {
                    4.0 * p
                } else if p < 0.75 {
                    2.0 - 4.0 * p
                } else {
                    4.0 * p - 4.0
                }
            }
        }
    }
}

/// One oscillator voice. All times in seconds from the keystroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    pub frequency: f32,
    /// Oscillator start
    pub start: f32,
    /// Gain is zero before this point, `peak` at it
    pub attack: f32,
    pub peak: f32,
    /// Gain has reached the ramp floor and the oscillator stops
    pub stop: f32,
}

impl Tone {
    pub fn click(base: f32) -> Self {
        Self {
            waveform: Waveform::Square,
            frequency: base,
            start: 0.0,
            attack: 0.0,
            peak: 0.08,
            stop: 0.02,
        }
    }

    pub fn body(base: f32) -> Self {
        Self {
            waveform: Waveform::Triangle,
            frequency: base * 1.5,
            start: 0.0,
            attack: 0.0,
            peak: 0.04,
            stop: 0.08,
        }
    }

    pub fn thock(base: f32) -> Self {
        Self {
            waveform: Waveform::Sine,
            frequency: base * 0.8,
            start: 0.01,
            attack: 0.015,
            peak: 0.06,
            stop: 0.06,
        }
    }

    /// Render from the keystroke (t = 0) until `stop`.
    pub fn render(&self) -> Vec<f32> {
        let len = samples_for(self.stop);
        let sr = SAMPLE_RATE as f32;
        (0..len)
            .map(|i| {
                let t = i as f32 / sr;
                if t < self.start {
                    return 0.0;
                }
                let gain = exp_ramp(self.peak, t - self.attack, self.stop - self.attack);
                let phase = self.frequency * (t - self.start);
                self.waveform.sample(phase) * gain
            })
            .collect()
    }
}

/// Gain of an exponential ramp from `peak` to [`RAMP_FLOOR`] over
/// `duration`, `elapsed` into it. Zero before the ramp starts.
fn exp_ramp(peak: f32, elapsed: f32, duration: f32) -> f32 {
    if elapsed < 0.0 {
        return 0.0;
    }
    let progress = (elapsed / duration).min(1.0);
    peak * (RAMP_FLOOR / peak).powf(progress)
}

fn samples_for(seconds: f32) -> usize {
    (seconds * SAMPLE_RATE as f32).round() as usize
}

/// 30 ms of white noise band-passed around `2 * base`.
pub fn render_noise(base: f32, rng: &mut impl Rng) -> Vec<f32> {
    const DURATION: f32 = 0.03;
    const PEAK: f32 = 0.03;

    let sr = SAMPLE_RATE as f32;
    let mut filter = Biquad::band_pass(base * 2.0, NOISE_Q, sr);
    (0..samples_for(DURATION))
        .map(|i| {
            let white = rng.gen_range(-1.0f32..1.0);
            filter.process(white) * exp_ramp(PEAK, i as f32 / sr, DURATION)
        })
        .collect()
}

/// Every voice of one keystroke at base frequency `base`.
pub fn render_voices(base: f32, rng: &mut impl Rng) -> [Vec<f32>; 4] {
    [
        Tone::click(base).render(),
        Tone::body(base).render(),
        Tone::thock(base).render(),
        render_noise(base, rng),
    ]
}

/// Key sound rendered on the fly for every keystroke.
pub struct SynthKeySound {
    output: Box<dyn AudioOutput>,
    rng: StdRng,
}

impl SynthKeySound {
    pub fn new(output: Box<dyn AudioOutput>) -> Self {
        Self::with_rng(output, StdRng::from_entropy())
    }

    pub fn with_rng(output: Box<dyn AudioOutput>, rng: StdRng) -> Self {
        Self { output, rng }
    }
}

impl KeySound for SynthKeySound {
    fn play_key(&mut self) {
        let base = BASE_FREQUENCIES[self.rng.gen_range(0..BASE_FREQUENCIES.len())];
        for voice in render_voices(base, &mut self.rng) {
            self.output
                .play(Box::new(SamplesBuffer::new(1, SAMPLE_RATE, voice)));
        }
    }
}

impl std::fmt::Debug for SynthKeySound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthKeySound").finish_non_exhaustive()
    }
}
