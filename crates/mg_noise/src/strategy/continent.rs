use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Large-scale bias added on top of the octave sum.
///
/// The bias is a smooth cosine of absolute map position and decides where land
/// masses form; the noise only roughens their outline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ContinentShape {
    /// One land mass on the west edge, sinking into ocean towards the east.
    Coast { amplitude: f64, offset: f64 },
    /// Repeating islands centred on the middle of the map.
    Archipelago {
        period: f64,
        amplitude: f64,
        offset: f64,
    },
}

impl ContinentShape {
    pub const COAST: Self = Self::Coast {
        amplitude: 1.3,
        offset: -0.6,
    };

    pub const ARCHIPELAGO: Self = Self::Archipelago {
        period: 40.0,
        amplitude: 0.3,
        offset: 0.2,
    };

    /// Pick one of the built-in shapes from the seed.
    pub fn from_seed(seed: u32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
        if rng.gen_bool(0.5) {
            Self::COAST
        } else {
            Self::ARCHIPELAGO
        }
    }

    /// Look up a built-in shape by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "coast" => Some(Self::COAST),
            "archipelago" => Some(Self::ARCHIPELAGO),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Coast { .. } => "Coast",
            Self::Archipelago { .. } => "Archipelago",
        }
    }

    /// Bias at pixel `(x, y)` of a `width` × `height` map.
    pub fn bias(&self, x: f64, y: f64, width: f64, height: f64) -> f64 {
        match *self {
            Self::Coast { amplitude, offset } => (x / width).cos() * amplitude + offset,
            Self::Archipelago {
                period,
                amplitude,
                offset,
            } => {
                let horizontal = (x / period - width / (2.0 * period)).cos() * amplitude;
                let vertical = (y / period - height / (2.0 * period)).cos() * amplitude;
                horizontal + vertical + offset
            }
        }
    }
}
