use bevy::prelude::*;

pub mod config;
pub mod gradient;
pub mod progress;
pub mod resource;
pub mod sampler;
pub mod strategy;
pub mod terrain_map;
pub mod visualization;

pub use config::TerrainConfig;
pub use gradient::GradientField;
pub use progress::GenerationProgress;
pub use resource::TerrainNoise;
pub use sampler::{cos_interpolate, GradientNoise};
pub use strategy::{ContinentShape, OctaveParams, OctaveStack, TerrainStrategy};
pub use terrain_map::TerrainMap;
pub use visualization::MapLayer;

/// Noise generation plugin.
/// Provides the shared gradient noise sampler and terrain configuration.
pub struct MgNoisePlugin;

impl Plugin for MgNoisePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainNoise>();
    }
}
