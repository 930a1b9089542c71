//! Pixel dimensions.

use serde::{Deserialize, Serialize};

/// Width and height of a stored asset, as reported by the provider.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}x{}", width, height)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Create a new dimensions pair.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
