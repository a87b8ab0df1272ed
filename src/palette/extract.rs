use image::RgbaImage;

use crate::{
    engine::config::EngineConfig,
    foundation::{color::Rgb, math::Rng64},
    sampler::raster::ScratchRaster,
};

/// One extracted palette entry: the cluster center and its derived hex form.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PaletteColor {
    /// Cluster center rounded to the nearest integer per channel.
    pub rgb: Rgb,
    /// Lowercase `#rrggbb` form of `rgb`.
    pub hex: String,
}

impl PaletteColor {
    /// Pair a color with its derived hex string.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
        }
    }
}

/// Ordered sequence of representative colors. Order is cluster index order,
/// not perceptually meaningful.
pub type Palette = Vec<PaletteColor>;

/// Hex forms of the fallback colors, in palette order. Stable across
/// releases.
pub const FALLBACK_HEX: [&str; 8] = [
    "#f8b4d9", "#a78bfa", "#60a5fa", "#34d399", "#fbbf24", "#f87171", "#c4b5fd", "#fcd34d",
];

const FALLBACK_RGB: [Rgb; 8] = [
    Rgb::new(248, 180, 217),
    Rgb::new(167, 139, 250),
    Rgb::new(96, 165, 250),
    Rgb::new(52, 211, 153),
    Rgb::new(251, 191, 36),
    Rgb::new(248, 113, 113),
    Rgb::new(196, 181, 253),
    Rgb::new(252, 211, 77),
];

/// Build the fixed 8-entry fallback palette.
pub fn fallback_palette() -> Palette {
    FALLBACK_RGB.iter().map(|&rgb| PaletteColor::from_rgb(rgb)).collect()
}

/// Derives a representative palette from an image by clustering a sparse
/// random pixel sample.
///
/// Owns the scratch raster and the sampling RNG; extraction is synchronous
/// and must not be shared across threads (one extractor per engine).
#[derive(Debug)]
pub struct PaletteExtractor {
    raster: ScratchRaster,
    rng: Rng64,
    sample_count: usize,
    cluster_count: usize,
    iterations: usize,
}

impl PaletteExtractor {
    /// Construct from engine configuration.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            raster: ScratchRaster::new(),
            rng: Rng64::new(config.seed),
            sample_count: config.sample_count,
            cluster_count: config.cluster_count,
            iterations: config.kmeans_iterations,
        }
    }

    /// Extract a palette of `cluster_count` colors from `image`.
    ///
    /// Never fails: when sampling signals `SampleUnavailable` the fixed
    /// fallback palette is returned instead.
    #[tracing::instrument(skip(self, image))]
    pub fn extract(&mut self, image: &RgbaImage) -> Palette {
        let samples = match self
            .raster
            .sample_pixels(image, self.sample_count, &mut self.rng)
        {
            Ok(samples) => samples,
            Err(err) => {
                tracing::debug!(%err, "sampling failed, substituting fallback palette");
                return fallback_palette();
            }
        };
        k_means(&samples, self.cluster_count, self.iterations)
            .into_iter()
            .map(PaletteColor::from_rgb)
            .collect()
    }
}

/// k-means over RGB samples with Euclidean distance.
///
/// Initial centers are the first `k` samples verbatim, iteration count is
/// fixed with no convergence check, and an empty cluster retains its prior
/// center. These choices are observable output contract, not tuning knobs:
/// reseeding (e.g. k-means++) or early exit would change extracted palettes.
pub(crate) fn k_means(samples: &[Rgb], k: usize, iterations: usize) -> Vec<Rgb> {
    let k = k.min(samples.len());
    let mut centers: Vec<Rgb> = samples[..k].to_vec();

    for _ in 0..iterations {
        let mut sums = vec![[0u64; 3]; k];
        let mut counts = vec![0u64; k];

        for &px in samples {
            let mut closest = 0;
            let mut min_dist = f64::INFINITY;
            for (i, &center) in centers.iter().enumerate() {
                let dist = px.distance(center);
                if dist < min_dist {
                    min_dist = dist;
                    closest = i;
                }
            }
            sums[closest][0] += u64::from(px.r);
            sums[closest][1] += u64::from(px.g);
            sums[closest][2] += u64::from(px.b);
            counts[closest] += 1;
        }

        for i in 0..k {
            if counts[i] == 0 {
                continue; // retain the previous center unchanged
            }
            let avg = |c: u64| (c as f64 / counts[i] as f64).round() as u8;
            centers[i] = Rgb::new(avg(sums[i][0]), avg(sums[i][1]), avg(sums[i][2]));
        }
    }

    centers
}

#[cfg(test)]
#[path = "../../tests/unit/palette/extract.rs"]
mod tests;
