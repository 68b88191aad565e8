// crates/blockstack-core/src/elements.rs
use glam::IVec2;
use std::collections::HashMap;
use tracing::warn;

use crate::Bounds;

/// Non-owning handle to an element that lives in the host's tree.
pub type ElementId = u32;

/// What a layout needs from the toolkit that owns the elements.
///
/// The layout only ever holds `ElementId`s; the host keeps the elements
/// alive and must tell the layout when one is removed. Sizes are queried
/// fresh on every call and never cached by the layout.
pub trait LayoutHost {
    /// Natural size the element would like to have.
    fn preferred_size(&self, id: ElementId) -> IVec2;

    /// Smallest size the element can still be drawn at.
    fn minimum_size(&self, id: ElementId) -> IVec2;

    /// Resize without moving. Hosts whose preferred height depends on
    /// width (wrapping text) recompute it here.
    fn set_size(&mut self, id: ElementId, size: IVec2);

    fn set_bounds(&mut self, id: ElementId, bounds: Bounds);

    /// Bounds as currently assigned, which may differ from what was
    /// requested if the host adjusts them.
    fn bounds(&self, id: ElementId) -> Bounds;
}

/// A host-side element with fixed natural sizes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub preferred_size: IVec2,
    pub minimum_size: IVec2,
    pub bounds: Bounds,
}

impl Element {
    pub fn new(name: impl Into<String>, preferred_size: IVec2) -> Self {
        Self {
            name: name.into(),
            preferred_size,
            minimum_size: preferred_size,
            bounds: Bounds::ZERO,
        }
    }

    pub fn with_minimum_size(mut self, minimum_size: IVec2) -> Self {
        self.minimum_size = minimum_size;
        self
    }
}

/// Retained element tree for headless hosts.
///
/// Handles are allocated in increasing order and never reused.
#[derive(Debug, Default)]
pub struct ElementStore {
    elements: HashMap<ElementId, Element>,
    next_id: ElementId,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: Element) -> ElementId {
        let id = self.next_id;
        self.next_id += 1;
        self.elements.insert(id, element);
        id
    }

    /// Drops the element. The caller is responsible for also removing the
    /// handle from any layout that references it.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.elements.remove(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl LayoutHost for ElementStore {
    fn preferred_size(&self, id: ElementId) -> IVec2 {
        match self.elements.get(&id) {
            Some(element) => element.preferred_size,
            None => {
                warn!("preferred size requested for unknown element {}", id);
                IVec2::ZERO
            }
        }
    }

    fn minimum_size(&self, id: ElementId) -> IVec2 {
        match self.elements.get(&id) {
            Some(element) => element.minimum_size,
            None => {
                warn!("minimum size requested for unknown element {}", id);
                IVec2::ZERO
            }
        }
    }

    fn set_size(&mut self, id: ElementId, size: IVec2) {
        match self.elements.get_mut(&id) {
            Some(element) => element.bounds.size = size,
            None => warn!("ignoring resize of unknown element {}", id),
        }
    }

    fn set_bounds(&mut self, id: ElementId, bounds: Bounds) {
        match self.elements.get_mut(&id) {
            Some(element) => element.bounds = bounds,
            None => warn!("ignoring bounds for unknown element {}", id),
        }
    }

    fn bounds(&self, id: ElementId) -> Bounds {
        self.elements
            .get(&id)
            .map(|element| element.bounds)
            .unwrap_or(Bounds::ZERO)
    }
}
