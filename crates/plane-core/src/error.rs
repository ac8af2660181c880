// File: crates/plane-core/src/error.rs
// Summary: Typed errors for the rendering core.

use thiserror::Error;

/// Errors the rendering core can signal to its caller.
///
/// Only configuration-wiring defects are errors; malformed numeric
/// properties, degenerate rectangles, and inapplicable-field access all have
/// defined recovery behavior and never reach this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaneError {
    /// A line-category lookup used a name outside the four fixed categories.
    /// The core cannot render without its categories, so this is fatal to
    /// the caller rather than recovered per-frame.
    #[error("unknown line category: {name:?}")]
    UnknownCategory { name: String },
}
