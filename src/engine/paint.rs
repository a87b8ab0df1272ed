use std::fmt::Write as _;

use kurbo::Vec2;

use crate::{field::bubble::Bubble, foundation::color::Rgb};

/// Opacity band positions along each radial gradient, in percent.
pub const STOP_POSITIONS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// Alpha factor applied to the bubble's rendered opacity at each band.
pub const STOP_ALPHAS: [f64; 5] = [1.0, 0.85, 0.6, 0.3, 0.0];

/// One concentric opacity band of a gradient layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Distance from the gradient center, in percent.
    pub position: f64,
    /// Absolute alpha at this band.
    pub alpha: f64,
}

/// One bubble rendered as an elliptical radial gradient, positioned and
/// sized in percent-of-container units.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientLayer {
    /// Gradient center for this frame.
    pub center: Vec2,
    /// Horizontal radius.
    pub radius_x: f64,
    /// Vertical radius (80% of the horizontal).
    pub radius_y: f64,
    /// Bubble color.
    pub color: Rgb,
    /// Five concentric bands fading to transparent.
    pub stops: [GradientStop; 5],
}

impl GradientLayer {
    /// Render `bubble` at `elapsed` time units with the field-wide
    /// `current_opacity` applied.
    pub fn from_bubble(bubble: &Bubble, elapsed: f64, current_opacity: f64) -> Self {
        let opacity = bubble.opacity * current_opacity;
        let size = bubble.rendered_size(elapsed);
        let mut stops = [GradientStop {
            position: 0.0,
            alpha: 0.0,
        }; 5];
        for (i, stop) in stops.iter_mut().enumerate() {
            *stop = GradientStop {
                position: STOP_POSITIONS[i],
                alpha: opacity * STOP_ALPHAS[i],
            };
        }
        Self {
            center: bubble.rendered_center(elapsed),
            radius_x: size,
            radius_y: size * 0.8,
            color: bubble.color,
            stops,
        }
    }
}

/// The single per-frame output of the engine: an ordered list of gradient
/// layers over a solid base color. Applying it to a visible surface is the
/// host's concern.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundPaint {
    /// Gradient layers, front to back.
    pub layers: Vec<GradientLayer>,
    /// Solid color painted behind all layers.
    pub base: Rgb,
}

impl BackgroundPaint {
    /// A paint with no gradient layers, just a solid color.
    pub fn solid(color: Rgb) -> Self {
        Self {
            layers: Vec::new(),
            base: color,
        }
    }

    /// Compose the CSS `background` value for this paint: one
    /// `radial-gradient(...)` per layer, the solid base last.
    pub fn to_css_background(&self) -> String {
        let mut css = String::new();
        for layer in &self.layers {
            let Rgb { r, g, b } = layer.color;
            let _ = write!(
                css,
                "radial-gradient(ellipse {:.1}% {:.1}% at {:.1}% {:.1}%, ",
                layer.radius_x, layer.radius_y, layer.center.x, layer.center.y
            );
            for (i, stop) in layer.stops.iter().enumerate() {
                if i > 0 {
                    css.push_str(", ");
                }
                let _ = write!(
                    css,
                    "rgba({r}, {g}, {b}, {:.3}) {:.0}%",
                    stop.alpha, stop.position
                );
            }
            css.push_str("), ");
        }
        let _ = write!(css, "rgb({}, {}, {})", self.base.r, self.base.g, self.base.b);
        css
    }
}
