// crates/blockstack-layout/src/config.rs

use blockstack_core::Alignment;
use serde::{Deserialize, Serialize};

/// Empty space between the container's content edge and the stacked
/// elements. Only applied when the stack has at least one element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(padding: i32) -> Self {
        Self::new(padding, padding, padding, padding)
    }

    pub fn horizontal(&self) -> i32 {
        self.left.wrapping_add(self.right)
    }

    pub fn vertical(&self) -> i32 {
        self.top.wrapping_add(self.bottom)
    }
}

/// Layout-wide settings. None of the values are validated; negative gaps or
/// padding simply pull elements closer or outside the container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Used for every element whose constraints say `Inherit`.
    pub default_alignment: Alignment,
    pub vertical_gap: i32,
    pub padding: Padding,
}

impl LayoutConfig {
    pub fn new(default_alignment: Alignment, vertical_gap: i32, padding: Padding) -> Self {
        Self {
            default_alignment,
            vertical_gap,
            padding,
        }
    }
}
