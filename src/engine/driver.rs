use image::RgbaImage;

use crate::{
    engine::{
        config::EngineConfig,
        paint::{BackgroundPaint, GradientLayer},
    },
    field::bubble::BubbleField,
    foundation::{
        color::Rgb,
        error::AquaglowResult,
        math::Rng64,
    },
    palette::{
        cache::{ItemId, PaletteCache, PaletteLookup},
        extract::PaletteExtractor,
    },
};

/// Where the animation loop currently is.
///
/// `Idle` is both the initial and the terminal state; the loop runs in the
/// three other phases and the host keeps calling [`Engine::tick`] once per
/// display frame until it returns `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No frame scheduled, field empty, background is pure white.
    Idle,
    /// Opacity climbing toward 1.
    FadingIn,
    /// Opacity at 1; bubble motion still recomputed every frame.
    Holding,
    /// Opacity descending toward 0 using the current bubbles.
    FadingOut,
}

/// Outcome of a hover-enter notification.
#[derive(Clone, Debug)]
pub enum HoverResponse {
    /// A palette was available; the field was re-seeded and the host should
    /// drive [`Engine::tick`] every frame.
    Animating,
    /// No palette yet; apply this static paint once and do not animate.
    Static(BackgroundPaint),
}

/// The palette-extraction-and-animation engine.
///
/// Single-threaded and cooperative: the host wires hover events to
/// [`Engine::notify_hover_enter`] / [`Engine::notify_hover_leave`], feeds
/// loaded images through [`Engine::notify_image_ready`], and calls
/// [`Engine::tick`] once per display frame while a paint is produced. At most
/// one loop exists per engine; a hover during a fade-out re-targets the
/// running loop rather than starting a second one.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    cache: PaletteCache,
    extractor: PaletteExtractor,
    rng: Rng64,
    field: BubbleField,
    phase: Phase,
    elapsed: f64,
    current_opacity: f64,
    target_opacity: f64,
}

impl Engine {
    /// Construct with a validated configuration.
    pub fn new(config: EngineConfig) -> AquaglowResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Construct with the default configuration.
    pub fn with_defaults() -> Self {
        Self::from_config(EngineConfig::default())
    }

    fn from_config(config: EngineConfig) -> Self {
        Self {
            extractor: PaletteExtractor::new(&config),
            // Jitter stream is decorrelated from the sampling stream.
            rng: Rng64::new(config.seed ^ 0x6A09_E667_F3BC_C908),
            config,
            cache: PaletteCache::new(),
            field: BubbleField::default(),
            phase: Phase::Idle,
            elapsed: 0.0,
            current_opacity: 0.0,
            target_opacity: 0.0,
        }
    }

    /// Register a gallery item and its static fallback color before its
    /// image has loaded.
    pub fn register_item(&mut self, item: ItemId, fallback: Rgb) {
        self.cache.register(item, fallback);
    }

    /// An item's image finished loading: extract its palette and populate
    /// the cache. Runs at most once per item; later calls are ignored.
    ///
    /// Completion may arrive before, during, or after any hover on the item;
    /// a late palette only affects future hovers, never an animation already
    /// in progress.
    pub fn notify_image_ready(&mut self, item: ItemId, image: &RgbaImage) {
        if self.cache.is_ready(item) {
            tracing::debug!(item = item.0, "palette already extracted, skipping");
            return;
        }
        let palette = self.extractor.extract(image);
        self.cache.store(item, palette);
    }

    /// Hover entered `item`.
    ///
    /// With a ready palette this discards any previous field, seeds a fresh
    /// one, and targets full opacity; an in-progress fade-out is re-targeted
    /// without stopping the loop, so there is no flash to blank. Without a
    /// palette the item's static fallback color is returned for the host to
    /// paint directly.
    pub fn notify_hover_enter(&mut self, item: ItemId) -> HoverResponse {
        match self.cache.lookup(item) {
            PaletteLookup::Ready(palette) => {
                self.field = BubbleField::seed(palette, &mut self.rng, &self.config);
                self.target_opacity = 1.0;
                self.phase = if self.current_opacity >= 1.0 {
                    Phase::Holding
                } else {
                    Phase::FadingIn
                };
                tracing::debug!(item = item.0, bubbles = self.field.len(), "hover enter, field seeded");
                HoverResponse::Animating
            }
            PaletteLookup::Pending { fallback } => {
                tracing::debug!(item = item.0, "palette pending, static fallback");
                HoverResponse::Static(BackgroundPaint::solid(fallback))
            }
            PaletteLookup::Unknown => {
                tracing::debug!(item = item.0, "unknown item, static white");
                HoverResponse::Static(BackgroundPaint::solid(Rgb::WHITE))
            }
        }
    }

    /// Hover left the active item: fade out using the current bubbles. The
    /// field is kept until opacity reaches zero.
    pub fn notify_hover_leave(&mut self) {
        self.target_opacity = 0.0;
        if self.phase != Phase::Idle {
            self.phase = Phase::FadingOut;
        }
    }

    /// Advance one frame and compose the background for it.
    ///
    /// Returns `None` while idle. The frame that completes a fade-out
    /// returns the pure-white reset paint, clears the field, and goes idle.
    /// Time advances by the nominal `time_step` per call regardless of
    /// wall-clock frame delta.
    pub fn tick(&mut self) -> Option<BackgroundPaint> {
        if self.phase == Phase::Idle {
            return None;
        }

        self.elapsed += self.config.time_step;
        self.step_opacity();

        if self.current_opacity == 0.0 && self.target_opacity == 0.0 {
            self.field.clear();
            self.phase = Phase::Idle;
            tracing::debug!("fade-out complete, loop released");
            return Some(BackgroundPaint::solid(Rgb::WHITE));
        }

        self.phase = if self.target_opacity >= 1.0 {
            if self.current_opacity >= 1.0 {
                Phase::Holding
            } else {
                Phase::FadingIn
            }
        } else {
            Phase::FadingOut
        };

        let base = self
            .field
            .base_color
            .toward_white(1.0 - self.current_opacity);
        let layers = self
            .field
            .bubbles
            .iter()
            .map(|b| GradientLayer::from_bubble(b, self.elapsed, self.current_opacity))
            .collect();
        Some(BackgroundPaint { layers, base })
    }

    /// Move opacity toward its target by one fixed step, landing exactly on
    /// the target once within a step of it. The tolerance absorbs float
    /// error accumulated over repeated steps so the endpoint is exact.
    fn step_opacity(&mut self) {
        const SNAP: f64 = 1e-9;
        let delta = self.target_opacity - self.current_opacity;
        if delta.abs() <= self.config.opacity_step + SNAP {
            self.current_opacity = self.target_opacity;
        } else {
            self.current_opacity += self.config.opacity_step * delta.signum();
        }
    }

    /// Current animation phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while the loop needs per-frame ticks.
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Interpolated field-wide opacity.
    pub fn current_opacity(&self) -> f64 {
        self.current_opacity
    }

    /// The active bubble field.
    pub fn field(&self) -> &BubbleField {
        &self.field
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/driver.rs"]
mod tests;
