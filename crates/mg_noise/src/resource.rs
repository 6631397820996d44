use bevy::prelude::*;

use crate::config::TerrainConfig;
use crate::sampler::GradientNoise;
use crate::terrain_map::TerrainMap;

/// Bevy resource holding the world seed, terrain recipe and shared sampler.
#[derive(Resource, Debug, Clone)]
pub struct TerrainNoise {
    /// Gradient noise for the seed, usable directly for ad-hoc sampling.
    pub sampler: GradientNoise,
    /// Terrain recipe used for map generation.
    pub config: TerrainConfig,
}

impl TerrainNoise {
    /// Create a new TerrainNoise resource with the given seed and default recipe.
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, TerrainConfig::default())
    }

    /// Create with a custom terrain recipe.
    pub fn with_config(seed: u32, config: TerrainConfig) -> Self {
        Self {
            sampler: GradientNoise::new(seed),
            config,
        }
    }

    pub fn seed(&self) -> u32 {
        self.sampler.seed()
    }

    /// Sample raw gradient noise at a position.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.sampler.sample(x, y)
    }

    /// Generate a full map for this seed and recipe.
    pub fn generate_map(&self, width: usize, height: usize) -> TerrainMap {
        TerrainMap::generate(self.seed(), width, height, &self.config)
    }
}

impl Default for TerrainNoise {
    fn default() -> Self {
        Self::new(42)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MgNoisePlugin;

    #[test]
    fn plugin_registers_default_resource() {
        let mut app = App::new();
        app.add_plugins(MgNoisePlugin);
        let noise = app.world().resource::<TerrainNoise>();
        assert_eq!(noise.seed(), 42);
        assert_eq!(noise.config, TerrainConfig::default());
    }

    #[test]
    fn plugin_keeps_an_inserted_resource() {
        let mut app = App::new();
        app.insert_resource(TerrainNoise::new(7));
        app.add_plugins(MgNoisePlugin);
        assert_eq!(app.world().resource::<TerrainNoise>().seed(), 7);
    }

    #[test]
    fn generated_map_uses_resource_seed() {
        let noise = TerrainNoise::new(13);
        let map = noise.generate_map(16, 16);
        assert_eq!(map.seed, 13);
        assert_eq!(map.heights, TerrainMap::generate(13, 16, 16, &noise.config).heights);
    }

    #[test]
    fn sample_matches_sampler() {
        let noise = TerrainNoise::new(5);
        assert_eq!(noise.sample(1.5, 2.5), GradientNoise::new(5).sample(1.5, 2.5));
    }
}
