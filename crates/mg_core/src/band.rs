/// Terrain bands a summed height value is bucketed into for colouring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Band {
    #[default]
    DeepWater,
    ShallowWater,
    Beach,
    Grassland,
    Forest,
    Mountain,
    Snow,
}

impl Band {
    /// Returns all bands from lowest to highest.
    pub fn all() -> &'static [Band] {
        &[
            Self::DeepWater,
            Self::ShallowWater,
            Self::Beach,
            Self::Grassland,
            Self::Forest,
            Self::Mountain,
            Self::Snow,
        ]
    }

    /// Classify a height value.
    ///
    /// Bands are half-open intervals: a value exactly on a threshold belongs to
    /// the higher band. Anything at or above 0.9 is snow, NaN falls through to
    /// snow as well.
    pub fn from_height(height: f64) -> Self {
        if height < 0.4 {
            Self::DeepWater
        } else if height < 0.5 {
            Self::ShallowWater
        } else if height < 0.53 {
            Self::Beach
        } else if height < 0.6 {
            Self::Grassland
        } else if height < 0.75 {
            Self::Forest
        } else if height < 0.9 {
            Self::Mountain
        } else {
            Self::Snow
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DeepWater => "Deep Water",
            Self::ShallowWater => "Shallow Water",
            Self::Beach => "Beach",
            Self::Grassland => "Grassland",
            Self::Forest => "Forest",
            Self::Mountain => "Mountain",
            Self::Snow => "Snow",
        }
    }

    /// Returns the RGB color for this band.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Self::DeepWater => rgb_from_unit(0.1, 0.5, 0.7),
            Self::ShallowWater => rgb_from_unit(0.01, 0.7, 0.9),
            Self::Beach => rgb_from_unit(0.75, 0.75, 0.6),
            Self::Grassland => rgb_from_unit(0.26, 0.69, 0.3),
            Self::Forest => rgb_from_unit(0.1, 0.4, 0.15),
            Self::Mountain => rgb_from_unit(0.16, 0.14, 0.14),
            Self::Snow => [255, 255, 255],
        }
    }

    /// Returns the RGBA color for this band.
    pub fn color(&self) -> [u8; 4] {
        let [r, g, b] = self.rgb();
        [r, g, b, 255]
    }

    /// Single character used by the text preview.
    pub fn glyph(&self) -> char {
        match self {
            Self::DeepWater => '~',
            Self::ShallowWater => '-',
            Self::Beach => '.',
            Self::Grassland => ',',
            Self::Forest => '%',
            Self::Mountain => '^',
            Self::Snow => '*',
        }
    }
}

// Channel values truncate like the float-to-byte conversion of the palette.
fn rgb_from_unit(r: f32, g: f32, b: f32) -> [u8; 3] {
    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_water_below_threshold() {
        assert_eq!(Band::from_height(0.0), Band::DeepWater);
        assert_eq!(Band::from_height(0.399), Band::DeepWater);
    }

    #[test]
    fn threshold_belongs_to_higher_band() {
        assert_eq!(Band::from_height(0.4), Band::ShallowWater);
        assert_eq!(Band::from_height(0.5), Band::Beach);
        assert_eq!(Band::from_height(0.53), Band::Grassland);
        assert_eq!(Band::from_height(0.6), Band::Forest);
        assert_eq!(Band::from_height(0.75), Band::Mountain);
        assert_eq!(Band::from_height(0.9), Band::Snow);
    }

    #[test]
    fn clamped_maximum_is_snow() {
        assert_eq!(Band::from_height(1.0), Band::Snow);
    }

    #[test]
    fn bands_are_ordered_by_height() {
        let mut previous = None;
        for step in 0..=100 {
            let band = Band::from_height(step as f64 / 100.0);
            let index = Band::all().iter().position(|b| *b == band).unwrap();
            if let Some(prev) = previous {
                assert!(index >= prev, "band order regressed at {}", step);
            }
            previous = Some(index);
        }
    }

    #[test]
    fn palette_matches_unit_floats() {
        assert_eq!(Band::DeepWater.rgb(), [25, 127, 178]);
        assert_eq!(Band::Snow.color(), [255, 255, 255, 255]);
    }

    #[test]
    fn glyphs_are_unique() {
        let mut glyphs: Vec<_> = Band::all().iter().map(|b| b.glyph()).collect();
        glyphs.sort();
        glyphs.dedup();
        assert_eq!(glyphs.len(), Band::all().len());
    }
}
