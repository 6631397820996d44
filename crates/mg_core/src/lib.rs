use bevy::prelude::*;

pub mod band;
pub mod coords;
pub mod noise;
pub mod seed;

pub use band::Band;
pub use coords::{Corner, GridCell, Vec2};
pub use noise::NoiseStrategy;
pub use seed::{seed_from_clock, seed_from_text};

/// Plugin marking the value types every map crate builds on.
pub struct MgCorePlugin;

impl Plugin for MgCorePlugin {
    fn build(&self, _app: &mut App) {
        // Bands, lattice coordinates and seeds are plain values; nothing runs per frame.
    }
}
