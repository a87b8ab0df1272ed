//! Aquaglow renders an ambient, color-reactive background effect.
//!
//! When a pointer hovers a gallery item, the engine samples the item's image,
//! derives a representative palette by k-means clustering, and drives a
//! continuously animated field of gradient "bubbles" whose composition
//! approximates that palette, fading smoothly in and out with hover state.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `RgbaImage -> Vec<Rgb>` via a bounded random pixel read
//!    through an owned [`ScratchRaster`]
//! 2. **Extract**: `Vec<Rgb> -> Palette` (deterministic k-means, fixed
//!    iteration count, fallback palette on sampling failure)
//! 3. **Cache**: one palette per item, populated once on image load,
//!    read synchronously on hover ([`PaletteCache`])
//! 4. **Seed**: `Palette -> BubbleField` (two passes plus extras, jittered
//!    sinusoidal motion parameters)
//! 5. **Drive**: one [`Engine::tick`] per display frame composes a
//!    [`BackgroundPaint`] (layered radial gradients over a solid tint) until
//!    the fade-out completes
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: clustering and seeding are stable for a
//!   given configuration seed.
//! - **No IO, no layout**: image loading and applying the paint to a visible
//!   surface are the host's concern; the engine only maps inputs to one
//!   composed background value per frame.
//! - **No fatal paths**: every anticipated failure has a silent, visually
//!   reasonable fallback (fallback palette, per-item static color).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod field;
mod foundation;
mod palette;
mod sampler;

pub use engine::config::EngineConfig;
pub use engine::driver::{Engine, HoverResponse, Phase};
pub use engine::paint::{
    BackgroundPaint, GradientLayer, GradientStop, STOP_ALPHAS, STOP_POSITIONS,
};
pub use field::bubble::{Bubble, BubbleField, EXTRA_BUBBLES, Oscillator};
pub use foundation::color::Rgb;
pub use foundation::error::{AquaglowError, AquaglowResult};
pub use foundation::math::Rng64;
pub use palette::cache::{ItemId, PaletteCache, PaletteLookup};
pub use palette::extract::{FALLBACK_HEX, Palette, PaletteColor, PaletteExtractor, fallback_palette};
pub use sampler::decode::decode_image;
pub use sampler::raster::ScratchRaster;
