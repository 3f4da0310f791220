//! Second-order IIR filter.
//!
//! Only the band-pass response is needed here: constant 0 dB peak gain,
//! RBJ cookbook coefficients.

use std::f32::consts::PI;

#[derive(Debug, Clone, Copy)]
pub struct Biquad {
    a0: f32,
    a1: f32,
    a2: f32,
    b1: f32,
    b2: f32,
    z1: f32,
    z2: f32,
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new()
    }
}

impl Biquad {
    /// Pass-through filter.
    pub fn new() -> Self {
        Self {
            a0: 1.0,
            a1: 0.0,
            a2: 0.0,
            b1: 0.0,
            b2: 0.0,
            z1: 0.0,
            z2: 0.0,
        }
    }

    pub fn band_pass(center: f32, q: f32, sr: f32) -> Self {
        let mut filter = Self::new();
        filter.update_bpf(center, q, sr);
        filter
    }

    /// Process a single sample
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let out = input * self.a0 + self.z1;
        self.z1 = input * self.a1 + self.z2 - self.b1 * out;
        self.z2 = input * self.a2 - self.b2 * out;
        out
    }

    pub fn update_bpf(&mut self, center: f32, q: f32, sr: f32) {
        let w0 = 2.0 * PI * center / sr;
        let alpha = w0.sin() / (2.0 * q.max(1e-6));
        let cw0 = w0.cos();

        let inv_a0 = 1.0 / (1.0 + alpha);

        self.a0 = alpha * inv_a0;
        self.a1 = 0.0;
        self.a2 = -alpha * inv_a0;
        self.b1 = (-2.0 * cw0) * inv_a0;
        self.b2 = (1.0 - alpha) * inv_a0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak_after_settling(filter: &mut Biquad, freq: f32, sr: f32) -> f32 {
        let n = sr as usize / 10;
        let mut peak = 0.0f32;
        for i in 0..n {
            let x = (2.0 * PI * freq * i as f32 / sr).sin();
            let y = filter.process(x);
            if i > n / 2 {
                peak = peak.max(y.abs());
            }
        }
        peak
    }

    #[test]
    fn test_bandpass_passes_center() {
        let mut f = Biquad::band_pass(400.0, 2.0, 44_100.0);
        let peak = peak_after_settling(&mut f, 400.0, 44_100.0);
        assert!((peak - 1.0).abs() < 0.05, "peak {}", peak);
    }

    #[test]
    fn test_bandpass_attenuates_far_frequencies() {
        let mut low = Biquad::band_pass(400.0, 2.0, 44_100.0);
        assert!(peak_after_settling(&mut low, 40.0, 44_100.0) < 0.2);

        let mut high = Biquad::band_pass(400.0, 2.0, 44_100.0);
        assert!(peak_after_settling(&mut high, 8_000.0, 44_100.0) < 0.2);
    }

    #[test]
    fn test_default_is_passthrough() {
        let mut f = Biquad::default();
        assert_eq!(f.process(0.25), 0.25);
        assert_eq!(f.process(-1.0), -1.0);
    }
}
