use image::RgbaImage;

use crate::foundation::{
    color::Rgb,
    error::{AquaglowError, AquaglowResult},
    math::Rng64,
};

/// Reusable scratch raster that source images are blitted into before
/// sampling.
///
/// Owned by the caller (one per [`crate::PaletteExtractor`]) and resized to
/// each image's dimensions on every call, so contents never survive across
/// images. Callers must not assume the buffer is unchanged between calls.
#[derive(Debug, Default)]
pub struct ScratchRaster {
    width: u32,
    height: u32,
    rgba8: Vec<u8>,
}

impl ScratchRaster {
    /// Empty scratch buffer; allocates lazily on first blit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer dimensions, from the most recent blit.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Blit `image` into the scratch buffer, then read `count` pixels at
    /// independently uniform random coordinates (with replacement, no
    /// deduplication).
    ///
    /// Signals [`AquaglowError::SampleUnavailable`] when the image has a zero
    /// dimension; no retry is attempted.
    pub fn sample_pixels(
        &mut self,
        image: &RgbaImage,
        count: usize,
        rng: &mut Rng64,
    ) -> AquaglowResult<Vec<Rgb>> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(AquaglowError::sample_unavailable(format!(
                "source image has zero dimension ({width}x{height})"
            )));
        }

        self.width = width;
        self.height = height;
        self.rgba8.clear();
        self.rgba8.extend_from_slice(image.as_raw());

        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            let x = rng.next_index(width as usize);
            let y = rng.next_index(height as usize);
            let idx = (y * width as usize + x) * 4;
            samples.push(Rgb::new(
                self.rgba8[idx],
                self.rgba8[idx + 1],
                self.rgba8[idx + 2],
            ));
        }
        tracing::trace!(count = samples.len(), width, height, "sampled pixels");
        Ok(samples)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sampler/raster.rs"]
mod tests;
