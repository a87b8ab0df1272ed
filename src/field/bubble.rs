use kurbo::Vec2;

use crate::{
    engine::config::EngineConfig,
    foundation::{color::Rgb, math::Rng64},
    palette::extract::Palette,
};

// Creation ranges, in percent-of-container units. Fixed by contract: the
// rendered effect is tuned around these, so they are constants rather than
// configuration.
const BAND_X_MIN: f64 = 10.0;
const BAND_X_SPAN: f64 = 80.0;
const JITTER_X: f64 = 20.0;
const BAND_Y_MIN: f64 = 20.0;
const BAND_Y_SPAN: f64 = 60.0;
const SIZE_MIN: f64 = 50.0;
const SIZE_SPAN: f64 = 60.0;
const X_SPEED: (f64, f64) = (0.0003, 0.0008);
const Y_SPEED: (f64, f64) = (0.0002, 0.0006);
const SIZE_SPEED: (f64, f64) = (0.0001, 0.0003);
const X_AMP: (f64, f64) = (8.0, 23.0);
const Y_AMP: (f64, f64) = (5.0, 15.0);
const SIZE_AMP: (f64, f64) = (10.0, 25.0);
const OPACITY: (f64, f64) = (0.7, 0.95);

/// Number of extra randomly-placed bubbles appended after the two palette
/// passes.
pub const EXTRA_BUBBLES: usize = 4;

/// Sinusoidal motion on one axis: `amplitude * sin(elapsed * speed + phase)`.
///
/// Parameters are drawn once at bubble creation and never altered; only the
/// elapsed-time argument advances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    /// Angular speed per elapsed time unit.
    pub speed: f64,
    /// Peak offset from the base value.
    pub amplitude: f64,
    /// Phase in radians, drawn from `[0, 2π)`.
    pub phase: f64,
}

impl Oscillator {
    fn draw(rng: &mut Rng64, speed: (f64, f64), amp: (f64, f64)) -> Self {
        Self {
            speed: rng.next_f64_in(speed.0, speed.1),
            amplitude: rng.next_f64_in(amp.0, amp.1),
            phase: rng.next_f64_in(0.0, std::f64::consts::TAU),
        }
    }

    /// Offset at `elapsed` time units.
    pub fn offset(self, elapsed: f64) -> f64 {
        self.amplitude * (elapsed * self.speed + self.phase).sin()
    }
}

/// One animated gradient blob.
///
/// Stored fields never mutate after creation; the rendered position, size,
/// and opacity are pure functions of global elapsed time.
#[derive(Clone, Debug)]
pub struct Bubble {
    /// Palette color painted by this bubble.
    pub color: Rgb,
    /// Base center in percent-of-container units.
    pub center: Vec2,
    /// Base size in percent units.
    pub size: f64,
    /// Horizontal drift.
    pub x_motion: Oscillator,
    /// Vertical drift.
    pub y_motion: Oscillator,
    /// Breathing of the size.
    pub size_motion: Oscillator,
    /// Base opacity, scaled by the field-wide opacity each frame.
    pub opacity: f64,
}

impl Bubble {
    /// Create a bubble for palette position `index` out of `total`, with
    /// random jitter. `index` is fractional to allow the half-offset second
    /// seeding pass.
    fn create(color: Rgb, index: f64, total: f64, rng: &mut Rng64) -> Self {
        let x = BAND_X_MIN
            + (index / total) * BAND_X_SPAN
            + (rng.next_f64_01() - 0.5) * JITTER_X;
        let y = BAND_Y_MIN + rng.next_f64_01() * BAND_Y_SPAN;
        Self {
            color,
            center: Vec2::new(x, y),
            size: SIZE_MIN + rng.next_f64_01() * SIZE_SPAN,
            x_motion: Oscillator::draw(rng, X_SPEED, X_AMP),
            y_motion: Oscillator::draw(rng, Y_SPEED, Y_AMP),
            size_motion: Oscillator::draw(rng, SIZE_SPEED, SIZE_AMP),
            opacity: rng.next_f64_in(OPACITY.0, OPACITY.1),
        }
    }

    /// Center at `elapsed` time units.
    pub fn rendered_center(&self, elapsed: f64) -> Vec2 {
        Vec2::new(
            self.center.x + self.x_motion.offset(elapsed),
            self.center.y + self.y_motion.offset(elapsed),
        )
    }

    /// Size at `elapsed` time units.
    pub fn rendered_size(&self, elapsed: f64) -> f64 {
        self.size + self.size_motion.offset(elapsed)
    }
}

/// The animated visual state seeded from one palette.
///
/// Created fresh on each hover-enter and discarded when the fade-out
/// completes; never reused across hovers.
#[derive(Clone, Debug)]
pub struct BubbleField {
    /// Bubbles in seeding order.
    pub bubbles: Vec<Bubble>,
    /// Desaturated tint derived from the palette, blended toward white as
    /// the field fades.
    pub base_color: Rgb,
}

impl Default for BubbleField {
    fn default() -> Self {
        Self {
            bubbles: Vec::new(),
            base_color: Rgb::WHITE,
        }
    }
}

impl BubbleField {
    /// Seed a fresh field from `palette`.
    ///
    /// Three groups: one bubble per palette color along a horizontal band,
    /// a second pass over the same palette offset by half the palette length
    /// in index space (denser coverage without a second seed structure), and
    /// [`EXTRA_BUBBLES`] bubbles at random palette color and position. Total
    /// `2 * palette.len() + EXTRA_BUBBLES`.
    pub fn seed(palette: &Palette, rng: &mut Rng64, config: &EngineConfig) -> Self {
        let len = palette.len() as f64;
        let mut bubbles = Vec::with_capacity(palette.len() * 2 + EXTRA_BUBBLES);

        for (i, color) in palette.iter().enumerate() {
            bubbles.push(Bubble::create(color.rgb, i as f64, len, rng));
        }
        for (i, color) in palette.iter().enumerate() {
            bubbles.push(Bubble::create(
                color.rgb,
                i as f64 + len * 0.5,
                len * 1.5,
                rng,
            ));
        }
        if !palette.is_empty() {
            for _ in 0..EXTRA_BUBBLES {
                let color = palette[rng.next_index(palette.len())].rgb;
                bubbles.push(Bubble::create(color, rng.next_f64_01() * len, len, rng));
            }
        }

        Self {
            bubbles,
            base_color: base_tint(palette, config.tint_damping, config.tint_offset),
        }
    }

    /// Drop all bubbles and reset the tint to white.
    pub fn clear(&mut self) {
        self.bubbles.clear();
        self.base_color = Rgb::WHITE;
    }

    /// Number of live bubbles.
    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    /// True when the field holds no bubbles.
    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}

/// Per-channel palette average, damped and offset toward white, clamped to
/// 255. A desaturated tint rather than the raw average.
pub(crate) fn base_tint(palette: &Palette, damping: f64, offset: f64) -> Rgb {
    if palette.is_empty() {
        return Rgb::WHITE;
    }
    let len = palette.len() as f64;
    let mut sum = [0.0f64; 3];
    for color in palette {
        sum[0] += f64::from(color.rgb.r);
        sum[1] += f64::from(color.rgb.g);
        sum[2] += f64::from(color.rgb.b);
    }
    let tint = |s: f64| (s / len * damping + offset).round().min(255.0) as u8;
    Rgb::new(tint(sum[0]), tint(sum[1]), tint(sum[2]))
}
