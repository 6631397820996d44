use mg_core::NoiseStrategy;
use serde::{Deserialize, Serialize};

use crate::sampler::GradientNoise;

/// One layer of the fractal sum.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OctaveParams {
    /// Size of one noise cell in map pixels.
    pub wavelength: f64,
    /// Multiplier applied to this layer's sample.
    pub weight: f64,
    /// Shift applied in noise space after scaling, so layers do not share lattice points.
    pub offset: (f64, f64),
}

impl OctaveParams {
    pub const fn new(wavelength: f64, weight: f64) -> Self {
        Self {
            wavelength,
            weight,
            offset: (0.0, 0.0),
        }
    }

    pub const fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset = (x, y);
        self
    }

    /// The default three-layer stack: broad shapes, mid detail, fine grain.
    pub fn default_stack() -> Vec<OctaveParams> {
        vec![
            Self::new(100.0, 0.5).with_offset(0.325, 0.0),
            Self::new(20.0, 0.25).with_offset(15.135, 0.0),
            Self::new(5.0, 0.1).with_offset(152.25235, 0.0),
        ]
    }
}

/// Weighted sum of gradient noise at several wavelengths.
///
/// The result is not normalised: with the default weights it stays within
/// about ±0.6.
#[derive(Clone, Debug)]
pub struct OctaveStack {
    noise: GradientNoise,
    octaves: Vec<OctaveParams>,
}

impl OctaveStack {
    pub fn new(seed: u32, octaves: Vec<OctaveParams>) -> Self {
        Self::from_noise(GradientNoise::new(seed), octaves)
    }

    pub fn from_noise(noise: GradientNoise, octaves: Vec<OctaveParams>) -> Self {
        Self { noise, octaves }
    }

    pub fn octaves(&self) -> &[OctaveParams] {
        &self.octaves
    }

    /// Sum of all layers at a map position.
    pub fn height(&self, x: f64, y: f64) -> f64 {
        self.octaves
            .iter()
            .map(|octave| {
                let nx = x / octave.wavelength + octave.offset.0;
                let ny = y / octave.wavelength + octave.offset.1;
                self.noise.sample(nx, ny) * octave.weight
            })
            .sum()
    }

    /// Upper bound of `|height|`, from the weights alone.
    pub fn max_amplitude(&self) -> f64 {
        self.octaves.iter().map(|o| o.weight.abs()).sum::<f64>() * 0.75
    }
}

impl NoiseStrategy for OctaveStack {
    fn generate(&self, x: f64, y: f64) -> f64 {
        self.height(x, y)
    }

    fn name(&self) -> &'static str {
        "Octaves"
    }
}
