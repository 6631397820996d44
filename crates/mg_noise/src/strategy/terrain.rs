use mg_core::{Band, NoiseStrategy};

use super::continent::ContinentShape;
use super::octaves::OctaveStack;
use crate::config::TerrainConfig;

/// Final terrain height for a bounded map: octave sum plus continent bias,
/// clamped to [0, 1].
pub struct TerrainStrategy {
    octaves: OctaveStack,
    shape: ContinentShape,
    width: f64,
    height: f64,
}

impl TerrainStrategy {
    /// Build the strategy for a `width` × `height` map.
    ///
    /// When the config does not fix a continent shape, one is chosen from the seed.
    pub fn new(seed: u32, config: &TerrainConfig, width: usize, height: usize) -> Self {
        Self {
            octaves: OctaveStack::new(seed, config.octaves.clone()),
            shape: config.resolved_continent(seed),
            width: width as f64,
            height: height as f64,
        }
    }

    pub fn shape(&self) -> ContinentShape {
        self.shape
    }

    /// Height before clamping.
    pub fn raw_height(&self, x: f64, y: f64) -> f64 {
        self.octaves.height(x, y) + self.shape.bias(x, y, self.width, self.height)
    }

    pub fn band_at(&self, x: f64, y: f64) -> Band {
        Band::from_height(self.generate(x, y))
    }
}

impl NoiseStrategy for TerrainStrategy {
    fn generate(&self, x: f64, y: f64) -> f64 {
        self.raw_height(x, y).clamp(0.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "Terrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::OctaveParams;

    fn config(shape: ContinentShape) -> TerrainConfig {
        TerrainConfig {
            continent: Some(shape),
            ..Default::default()
        }
    }

    #[test]
    fn terrain_is_clamped() {
        let strategy = TerrainStrategy::new(42, &config(ContinentShape::COAST), 256, 160);
        for x in (0..256).step_by(5) {
            for y in (0..160).step_by(5) {
                let h = strategy.generate(x as f64, y as f64);
                assert!((0.0..=1.0).contains(&h), "height {} out of range", h);
            }
        }
    }

    #[test]
    fn bias_dominates_without_octaves() {
        let config = TerrainConfig {
            octaves: Vec::new(),
            continent: Some(ContinentShape::COAST),
        };
        let strategy = TerrainStrategy::new(3, &config, 256, 160);
        assert!((strategy.generate(0.0, 0.0) - 0.7).abs() < 1e-12);
        assert_eq!(strategy.band_at(0.0, 0.0), Band::Forest);
    }

    #[test]
    fn raw_height_adds_octaves_and_bias() {
        let octaves = vec![OctaveParams::new(10.0, 1.0)];
        let config = TerrainConfig {
            octaves: octaves.clone(),
            continent: Some(ContinentShape::ARCHIPELAGO),
        };
        let strategy = TerrainStrategy::new(9, &config, 100, 100);
        let stack = OctaveStack::new(9, octaves);
        let bias = ContinentShape::ARCHIPELAGO.bias(37.0, 12.0, 100.0, 100.0);
        assert_eq!(strategy.raw_height(37.0, 12.0), stack.height(37.0, 12.0) + bias);
    }

    #[test]
    fn unset_shape_follows_seed() {
        let strategy = TerrainStrategy::new(77, &TerrainConfig::default(), 64, 64);
        assert_eq!(strategy.shape(), ContinentShape::from_seed(77));
    }
}
