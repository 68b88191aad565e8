//! Block stack layout: arranges host-owned elements top to bottom with
//! per-element alignment and margins, a vertical gap and container padding.
//!
//! The layout keeps only [`ElementId`] handles. Sizes are read from, and
//! bounds written back to, a [`LayoutHost`] supplied on each call.

pub use blockstack_core::*;
pub use blockstack_layout::*;

pub use glam::IVec2;
