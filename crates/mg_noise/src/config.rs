use serde::{Deserialize, Serialize};

use crate::strategy::{ContinentShape, OctaveParams};

/// Terrain generation parameters.
///
/// Serializable so a map recipe can be saved next to its seed and replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Layers of the fractal sum, broadest first.
    pub octaves: Vec<OctaveParams>,
    /// Continent bias. `None` lets the seed choose one.
    #[serde(default)]
    pub continent: Option<ContinentShape>,
}

impl TerrainConfig {
    /// The continent shape actually used for `seed`.
    pub fn resolved_continent(&self, seed: u32) -> ContinentShape {
        self.continent.unwrap_or_else(|| ContinentShape::from_seed(seed))
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            octaves: OctaveParams::default_stack(),
            continent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_three_octaves() {
        let config = TerrainConfig::default();
        let wavelengths: Vec<f64> = config.octaves.iter().map(|o| o.wavelength).collect();
        let weights: Vec<f64> = config.octaves.iter().map(|o| o.weight).collect();
        assert_eq!(wavelengths, vec![100.0, 20.0, 5.0]);
        assert_eq!(weights, vec![0.5, 0.25, 0.1]);
    }

    #[test]
    fn explicit_shape_wins_over_seed() {
        let config = TerrainConfig {
            continent: Some(ContinentShape::ARCHIPELAGO),
            ..Default::default()
        };
        for seed in 0..20 {
            assert_eq!(config.resolved_continent(seed), ContinentShape::ARCHIPELAGO);
        }
    }
}
