// crates/blockstack-layout/src/lib.rs

use blockstack_core::{Bounds, ElementId, Insets, LayoutHost};
use glam::IVec2;

pub mod block;
pub mod config;

pub use block::*;
pub use config::*;

/// Which natural size of each element a measurement aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    Minimum,
    Preferred,
}

impl MeasureMode {
    pub fn size_of<H: LayoutHost + ?Sized>(self, host: &H, id: ElementId) -> IVec2 {
        match self {
            MeasureMode::Minimum => host.minimum_size(id),
            MeasureMode::Preferred => host.preferred_size(id),
        }
    }
}

/// One bounding box assigned during a placement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub element: ElementId,
    pub bounds: Bounds,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutResult {
    /// Assignments in stacking order. An element added twice appears twice.
    pub placements: Vec<Placement>,
    /// Vertical cursor after the last element, including its bottom margin
    /// and trailing gap.
    pub cursor_end: i32,
}

impl LayoutResult {
    /// Bounds the element ended up with, i.e. its last assignment.
    pub fn bounds_of(&self, element: ElementId) -> Option<Bounds> {
        self.placements
            .iter()
            .rev()
            .find(|placement| placement.element == element)
            .map(|placement| placement.bounds)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Size negotiation and placement protocol between a container and its
/// layout manager.
///
/// Callers must hold exclusive access to both the layout and the host tree
/// for the duration of each call. The `&mut H` host borrow taken by
/// `layout`, together with `&mut self` on `BlockLayout`'s `add`, `remove`
/// and setters, stands in for the toolkit's tree lock. Shared hosts must
/// serialize access themselves.
pub trait ContainerLayout {
    fn measure<H: LayoutHost + ?Sized>(&self, mode: MeasureMode, host: &H, insets: Insets) -> IVec2;

    fn minimum_size<H: LayoutHost + ?Sized>(&self, host: &H, insets: Insets) -> IVec2 {
        self.measure(MeasureMode::Minimum, host, insets)
    }

    fn preferred_size<H: LayoutHost + ?Sized>(&self, host: &H, insets: Insets) -> IVec2 {
        self.measure(MeasureMode::Preferred, host, insets)
    }

    fn maximum_size(&self) -> IVec2 {
        blockstack_core::UNBOUNDED_SIZE
    }

    /// Horizontal alignment of the container within its own parent.
    fn alignment_x(&self) -> f32 {
        0.5
    }

    fn alignment_y(&self) -> f32 {
        0.5
    }

    /// Drop any cached measurement.
    fn invalidate(&mut self) {}

    fn layout<H: LayoutHost + ?Sized>(
        &self,
        container_size: IVec2,
        insets: Insets,
        host: &mut H,
    ) -> LayoutResult;
}
