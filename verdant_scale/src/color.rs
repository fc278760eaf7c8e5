// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

/// An 8-bit RGB color produced by the scale functions.
///
/// This is a plain value type so that scale output stays exact and cheap to
/// compare; rendering collaborators convert it at the boundary, either via
/// [`Rgb::css`] or (with the `peniko` feature) [`Rgb::to_peniko`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// The neutral fill used where no finite value is available.
pub const UNAVAILABLE: Rgb = Rgb::new(204, 204, 204);

/// Categorical colors for multi-county comparison, assigned by selection
/// order.
pub const COMPARE_PALETTE: [Rgb; 3] = [
    Rgb::new(30, 136, 229),
    Rgb::new(224, 64, 251),
    Rgb::new(34, 34, 34),
];

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the color as a CSS `rgb(r,g,b)` string.
    #[must_use]
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Converts into a `peniko` color for rendering collaborators.
    #[cfg(feature = "peniko")]
    #[must_use]
    pub fn to_peniko(self) -> peniko::Color {
        peniko::Color::from_rgb8(self.r, self.g, self.b)
    }

    /// Perceived brightness on the 0–255 scale, using the Rec. 601 luma
    /// weights.
    #[must_use]
    pub fn perceived_brightness(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// Returns a variant of this color readable as text on a light surface.
    ///
    /// Colors brighter than 180 are darkened by scaling every channel to
    /// 70%; darker colors pass through unchanged.
    #[must_use]
    pub fn readable(self) -> Self {
        if self.perceived_brightness() <= 180.0 {
            return self;
        }
        let dim = |c: u8| libm::floor(f64::from(c) * 0.7) as u8;
        Self::new(dim(self.r), dim(self.g), dim(self.b))
    }
}

/// Returns the categorical comparison color for a county's position in the
/// selection order, wrapping past the end of the palette.
#[must_use]
pub fn compare_color(index: usize) -> Rgb {
    COMPARE_PALETTE[index % COMPARE_PALETTE.len()]
}

/// Interpolates the diverging green → yellow → red ramp.
///
/// `0.0` is green `(34,195,74)`, `0.5` is yellow `(255,255,0)`, and `1.0` is
/// red `(255,0,0)`. The green half raises red and green while blue falls to
/// zero; the red half holds red at full and drains green.
///
/// Callers clamp `percent` into `[0, 1]`; this function does not.
#[must_use]
pub fn green_yellow_red(percent: f64) -> Rgb {
    if percent <= 0.5 {
        let t = percent / 0.5;
        Rgb::new(
            libm::round(34.0 + t * (255.0 - 34.0)) as u8,
            libm::round(195.0 + t * (255.0 - 195.0)) as u8,
            libm::round(74.0 - t * 74.0) as u8,
        )
    } else {
        let t = (percent - 0.5) / 0.5;
        Rgb::new(255, libm::round(255.0 - t * 255.0) as u8, 0)
    }
}

/// Maps a signed value onto the diverging ramp with the midpoint pinned to
/// zero.
///
/// Negative values (improvement) scale into the green half by `|value| /
/// |min|`; non-negative values scale into the red half by `value / max`.
/// The midpoint stays at zero however asymmetric `min` and `max` are, so "no
/// change" always renders as the same yellow. The half-scale factor is
/// clamped into `[0, 1]`, and a non-finite factor (a zero or non-finite
/// bound) falls back to the midpoint.
#[must_use]
pub fn color_for_signed(value: f64, min: f64, max: f64) -> Rgb {
    let percent = if value < 0.0 {
        0.5 - 0.5 * half_scale(libm::fabs(value) / libm::fabs(min))
    } else {
        0.5 + 0.5 * half_scale(value / max)
    };
    green_yellow_red(percent)
}

fn half_scale(t: f64) -> f64 {
    if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 }
}
