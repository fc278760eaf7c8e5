// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Verdant Scale: headless axis tick and color scale primitives.
//!
//! This crate holds the pure numeric and color functions shared by the map
//! and chart surfaces of the emissions atlas:
//!
//! - [`nice_ticks`]: "nice" axis label generation for a vertically stacked
//!   axis, ordered top-to-bottom.
//! - [`green_yellow_red`]: the diverging green → yellow → red interpolation.
//! - [`color_for_signed`]: the zero-anchored signed mapping built on top of
//!   it, used for percent-change-from-baseline fills.
//! - [`quantiles`]: quantile cut points for legend tick placement.
//! - [`nice_number`] and [`legend_bounds`]: label and legend rounding.
//! - [`compare_color`]: the categorical palette for multi-county comparison.
//!
//! It knows nothing about counties, datasets, or rendering backends; callers
//! feed it numbers and receive numbers or [`Rgb`] values back. Rendering
//! collaborators that want a `peniko` color can convert via
//! [`Rgb::to_peniko`] (behind the `peniko` feature).
//!
//! ## Minimal example
//!
//! ```rust
//! use verdant_scale::{color_for_signed, green_yellow_red, nice_ticks, Rgb};
//!
//! // Axis labels for a 0..=47 domain, top to bottom.
//! let ticks = nice_ticks(0.0, 47.0, 5);
//! assert_eq!(ticks.first(), Some(&47.0));
//!
//! // Zero percent change always renders as the same yellow, however
//! // asymmetric the domain is.
//! assert_eq!(color_for_signed(0.0, -10.0, 90.0), Rgb::new(255, 255, 0));
//! assert_eq!(green_yellow_red(0.5), Rgb::new(255, 255, 0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod quantile;
mod ticks;

pub use color::{
    COMPARE_PALETTE, Rgb, UNAVAILABLE, color_for_signed, compare_color, green_yellow_red,
};
pub use quantile::quantiles;
pub use ticks::{Round, legend_bounds, nice_number, nice_ticks};
