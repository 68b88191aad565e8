// crates/blockstack-core/src/geometry.rs
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Border decoration reserved by a host container on each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0, 0, 0, 0);

    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(inset: i32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Combined left + right thickness.
    pub fn horizontal(&self) -> i32 {
        self.left.wrapping_add(self.right)
    }

    /// Combined top + bottom thickness.
    pub fn vertical(&self) -> i32 {
        self.top.wrapping_add(self.bottom)
    }
}

/// Position and size assigned to an element, in container coordinates.
///
/// Sizes are `IVec2` with `x` as width and `y` as height. Negative extents
/// are representable and are passed through untouched. Edge sums wrap
/// rather than panic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub position: IVec2,
    pub size: IVec2,
}

impl Bounds {
    pub const ZERO: Bounds = Bounds {
        position: IVec2::ZERO,
        size: IVec2::ZERO,
    };

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            position: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.position.x.wrapping_add(self.size.x)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.position.y.wrapping_add(self.size.y)
    }
}

/// The saturating "never caps growth" size.
pub const UNBOUNDED_SIZE: IVec2 = IVec2::new(i32::MAX, i32::MAX);
