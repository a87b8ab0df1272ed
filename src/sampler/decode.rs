use image::RgbaImage;

use crate::foundation::error::{AquaglowError, AquaglowResult};

/// Decode encoded image bytes into straight RGBA8 ready for sampling.
///
/// Undecodable bytes signal [`AquaglowError::SampleUnavailable`]; the host
/// then skips `notify_image_ready`, leaving the item pending so hover falls
/// back to its static color.
pub fn decode_image(bytes: &[u8]) -> AquaglowResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| AquaglowError::sample_unavailable(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/sampler/decode.rs"]
mod tests;
