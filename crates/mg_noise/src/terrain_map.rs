use bevy::prelude::*;
use mg_core::{Band, NoiseStrategy};
use rayon::prelude::*;

use crate::config::TerrainConfig;
use crate::progress::GenerationProgress;
use crate::strategy::{ContinentShape, TerrainStrategy};
use crate::visualization::{grayscale_to_rgba, MapLayer};

/// A generated map: clamped heights and the band each pixel falls into.
///
/// This is what a renderer consumes. Storage is row-major.
#[derive(Resource, Clone, Debug)]
pub struct TerrainMap {
    pub seed: u32,
    pub width: usize,
    pub height: usize,
    /// Continent bias the map was generated with
    pub shape: ContinentShape,
    /// Clamped height in [0, 1] for each pixel
    pub heights: Vec<f64>,
    /// Band for each pixel
    pub bands: Vec<Band>,
}

impl TerrainMap {
    /// Generate a terrain map using parallel processing.
    ///
    /// # Arguments
    /// * `seed` - Random seed for noise generation
    /// * `width` - Map width in pixels (e.g., 256)
    /// * `height` - Map height in pixels (e.g., 160)
    /// * `config` - Octave stack and continent shape
    pub fn generate(seed: u32, width: usize, height: usize, config: &TerrainConfig) -> Self {
        Self::generate_with_progress(seed, width, height, config, &GenerationProgress::new(height))
    }

    /// Same as [`TerrainMap::generate`], reporting finished rows to `progress`.
    pub fn generate_with_progress(
        seed: u32,
        width: usize,
        height: usize,
        config: &TerrainConfig,
        progress: &GenerationProgress,
    ) -> Self {
        progress.reset(height);
        let strategy = TerrainStrategy::new(seed, config, width, height);
        debug!(
            "Generating {}x{} terrain, seed {}, {} continent",
            width,
            height,
            seed,
            strategy.shape().name()
        );

        let mut heights = vec![0.0; width * height];
        if width > 0 {
            heights
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, cell) in row.iter_mut().enumerate() {
                        *cell = strategy.generate(x as f64, y as f64);
                    }
                    progress.increment(1);
                });
        } else {
            progress.increment(height);
        }

        let bands = heights.par_iter().map(|h| Band::from_height(*h)).collect();

        Self {
            seed,
            width,
            height,
            shape: strategy.shape(),
            heights,
            bands,
        }
    }

    /// Generate a zoomed view of the map.
    ///
    /// Samples an `output_width` × `output_height` window whose top-left pixel
    /// sits at `(origin_x, origin_y)` in map pixels, stepping `scale` map pixels
    /// per output pixel. The continent bias is still laid out over the full
    /// `map_width` × `map_height` map, so a region lines up with the whole.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_region(
        seed: u32,
        config: &TerrainConfig,
        map_width: usize,
        map_height: usize,
        origin_x: f64,
        origin_y: f64,
        scale: f64,
        output_width: usize,
        output_height: usize,
    ) -> Self {
        let strategy = TerrainStrategy::new(seed, config, map_width, map_height);

        let indices: Vec<(usize, usize)> = (0..output_height)
            .flat_map(|y| (0..output_width).map(move |x| (x, y)))
            .collect();

        let heights: Vec<f64> = indices
            .par_iter()
            .map(|&(x, y)| {
                let wx = origin_x + x as f64 * scale;
                let wy = origin_y + y as f64 * scale;
                strategy.generate(wx, wy)
            })
            .collect();
        let bands = heights.iter().map(|h| Band::from_height(*h)).collect();

        Self {
            seed,
            width: output_width,
            height: output_height,
            shape: strategy.shape(),
            heights,
            bands,
        }
    }

    /// Get height at specific coordinates.
    pub fn get_height(&self, x: usize, y: usize) -> Option<f64> {
        if x < self.width && y < self.height {
            Some(self.heights[y * self.width + x])
        } else {
            None
        }
    }

    /// Get band at specific coordinates.
    pub fn get_band(&self, x: usize, y: usize) -> Option<Band> {
        if x < self.width && y < self.height {
            Some(self.bands[y * self.width + x])
        } else {
            None
        }
    }

    /// Pixel count per band, in [`Band::all`] order.
    pub fn band_counts(&self) -> Vec<(Band, usize)> {
        Band::all()
            .iter()
            .map(|band| (*band, self.bands.iter().filter(|b| *b == band).count()))
            .collect()
    }

    /// Share of pixels that are not water.
    pub fn land_fraction(&self) -> f64 {
        if self.bands.is_empty() {
            return 0.0;
        }
        let land = self
            .bands
            .iter()
            .filter(|b| !matches!(b, Band::DeepWater | Band::ShallowWater))
            .count();
        land as f64 / self.bands.len() as f64
    }

    /// Convert any layer to RGBA image bytes.
    pub fn to_layer_image(&self, layer: MapLayer) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.width * self.height * 4);

        for (band, height) in self.bands.iter().zip(&self.heights) {
            let color = match layer {
                MapLayer::Bands => band.color(),
                MapLayer::Height => grayscale_to_rgba(*height, 0.0, 1.0),
            };
            data.extend_from_slice(&color);
        }

        data
    }

    /// Per-pixel band colours as a 2D grid of rows.
    pub fn color_grid(&self) -> Vec<Vec<[u8; 4]>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        self.bands
            .chunks(self.width)
            .map(|row| row.iter().map(|band| band.color()).collect())
            .collect()
    }

    /// Text preview, one glyph per `step` × `step` block (top-left pixel of each block).
    pub fn to_ascii(&self, step: usize) -> String {
        let step = step.max(1);
        let mut out = String::new();
        for y in (0..self.height).step_by(step) {
            for x in (0..self.width).step_by(step) {
                out.push(self.bands[y * self.width + x].glyph());
            }
            out.push('\n');
        }
        out
    }
}
