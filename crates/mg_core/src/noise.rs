/// A scalar field sampled at continuous 2D coordinates.
///
/// Implementations must be pure in `(x, y)`: the same coordinates always yield
/// the same value, whatever the call order or thread. That lets a map be
/// generated in parallel without any coordination between workers.
pub trait NoiseStrategy: Send + Sync {
    /// Sample the field at the given position.
    ///
    /// # Arguments
    /// * `x` - Horizontal coordinate (f64 for precision)
    /// * `y` - Vertical coordinate
    ///
    /// # Returns
    /// The field value. The range depends on the strategy; raw gradient noise
    /// stays within roughly [-0.71, 0.71] while terrain strategies clamp to [0, 1].
    fn generate(&self, x: f64, y: f64) -> f64;

    /// Returns the name of this noise strategy for debugging.
    fn name(&self) -> &'static str {
        "NoiseStrategy"
    }
}
