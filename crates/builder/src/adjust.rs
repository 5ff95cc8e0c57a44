//! Color adjustment collaborators.
//!
//! The builder derives scale steps through a [`ColorAdjuster`]. The
//! stock [`PassthroughAdjuster`] returns its input unchanged; real
//! colorimetric adjusters can be swapped in without touching the builder.

/// Warmth-adjust `color` by `factor` (0.0..=1.0). Returns the input unchanged.
pub fn adjust_color_warmth(color: &str, _factor: f64) -> String {
    color.to_string()
}

/// Brightness-adjust `color` by `delta` units. Returns the input unchanged.
pub fn adjust_brightness(color: &str, _delta: i32) -> String {
    color.to_string()
}

/// Pure `(color, parameter) -> color` transforms used during derivation.
///
/// Implementations must not have side effects; the builder may call them
/// any number of times for the same input.
pub trait ColorAdjuster: Send + Sync {
    fn adjust_warmth(&self, color: &str, factor: f64) -> String;

    fn adjust_brightness(&self, color: &str, delta: i32) -> String;
}

/// Default adjuster that delegates to the free functions above.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughAdjuster;

impl ColorAdjuster for PassthroughAdjuster {
    fn adjust_warmth(&self, color: &str, factor: f64) -> String {
        adjust_color_warmth(color, factor)
    }

    fn adjust_brightness(&self, color: &str, delta: i32) -> String {
        adjust_brightness(color, delta)
    }
}
