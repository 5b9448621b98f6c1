//! Domain types for threshold secret reconstruction
//!
//! This module contains validated newtypes and the share representation:
//! - [`Threshold`] - Number of shares that fix the polynomial (k >= 1)
//! - [`Radix`] - Positional base of an encoded share value (2..=36)
//! - [`Point`] - A decoded share `(x, y)`
//! - [`SchemeParams`] - Validated threshold and share count pair

mod params;
mod point;
mod radix;
mod threshold;

pub use params::SchemeParams;
pub use point::Point;
pub use radix::Radix;
pub use threshold::Threshold;
