/// Layers of a terrain map that can be turned into pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MapLayer {
    /// Band colours, the regular map view.
    #[default]
    Bands,
    /// Clamped height as grayscale.
    Height,
}

impl MapLayer {
    /// Returns all map layers.
    pub fn all() -> &'static [MapLayer] {
        &[Self::Bands, Self::Height]
    }

    /// Returns the display name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bands => "Bands",
            Self::Height => "Height",
        }
    }
}

/// Convert a grayscale value to RGBA.
pub fn grayscale_to_rgba(value: f64, min: f64, max: f64) -> [u8; 4] {
    let normalized = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let gray = (normalized * 255.0) as u8;
    [gray, gray, gray, 255]
}
