use mg_core::GridCell;
use std::f64::consts::TAU;

/// Deterministic gradient directions for every lattice point of the grid.
///
/// The angle of a cell is a pure function of `(seed, cell)`: it is hashed on
/// demand rather than drawn from a stream, so nothing is cached and the field
/// can be queried in any order from any number of threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientField {
    seed: u32,
}

impl GradientField {
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Gradient angle at `cell`, in radians within [0, 2π).
    pub fn angle_at(&self, cell: GridCell) -> f64 {
        let key = cell_key(self.seed, cell);
        // 2^32 keeps the unit value strictly below 1.0.
        (key as f64 / 4_294_967_296.0) * TAU
    }
}

/// Fold the seed and both coordinates into one well-mixed 32-bit key.
///
/// Each coordinate is spread by its own odd multiplier before an avalanche
/// pass, so neither axis nor the diagonal share keys.
fn cell_key(seed: u32, cell: GridCell) -> u32 {
    let mut h = avalanche(seed ^ 0x9E37_79B9);
    h = avalanche(h ^ (cell.x as u32).wrapping_mul(0x85EB_CA6B));
    h = avalanche(h.rotate_left(13) ^ (cell.y as u32).wrapping_mul(0xC2B2_AE35));
    h
}

/// Murmur3 32-bit finaliser.
fn avalanche(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h
}
