// crates/blockstack-layout/src/block.rs
//! Vertical block stacking, like `display: block` flow in a document.
//!
//! Elements are placed one beneath another in the order they were added.
//! Each element is aligned horizontally inside the container's padded
//! content box according to its own constraints (or the layout default),
//! and is separated from its neighbours by its margins plus a fixed
//! vertical gap.

use std::any::Any;

use blockstack_core::{
    Alignment, Bounds, Constraints, ElementAlignment, ElementId, Insets, LayoutError, LayoutHost,
    Result,
};
use glam::IVec2;
use tracing::{debug, trace};

use crate::{ContainerLayout, LayoutConfig, LayoutResult, MeasureMode, Padding, Placement};

/// An element handle paired with its constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEntry {
    pub element: ElementId,
    pub constraints: Constraints,
}

#[derive(Debug, Clone, Default)]
pub struct BlockLayout {
    config: LayoutConfig,
    entries: Vec<LayoutEntry>,
}

impl BlockLayout {
    /// Centred elements, no gap, no padding.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alignment(default_alignment: Alignment) -> Self {
        Self::with_gap(default_alignment, 0)
    }

    pub fn with_gap(default_alignment: Alignment, vertical_gap: i32) -> Self {
        Self::with_padding(default_alignment, vertical_gap, 0)
    }

    pub fn with_padding(default_alignment: Alignment, vertical_gap: i32, padding: i32) -> Self {
        Self::with_sides(default_alignment, vertical_gap, padding, padding, padding, padding)
    }

    pub fn with_sides(
        default_alignment: Alignment,
        vertical_gap: i32,
        top: i32,
        right: i32,
        bottom: i32,
        left: i32,
    ) -> Self {
        Self::from_config(LayoutConfig::new(
            default_alignment,
            vertical_gap,
            Padding::new(top, right, bottom, left),
        ))
    }

    pub fn from_config(config: LayoutConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    pub fn alignment(mut self, default_alignment: Alignment) -> Self {
        self.config.default_alignment = default_alignment;
        self
    }

    pub fn gap(mut self, vertical_gap: i32) -> Self {
        self.config.vertical_gap = vertical_gap;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.config.padding = padding;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut LayoutConfig {
        &mut self.config
    }

    pub fn default_alignment(&self) -> Alignment {
        self.config.default_alignment
    }

    pub fn set_default_alignment(&mut self, alignment: Alignment) {
        self.config.default_alignment = alignment;
    }

    pub fn vertical_gap(&self) -> i32 {
        self.config.vertical_gap
    }

    pub fn set_vertical_gap(&mut self, vertical_gap: i32) {
        self.config.vertical_gap = vertical_gap;
    }

    pub fn padding_sides(&self) -> Padding {
        self.config.padding
    }

    pub fn set_padding(&mut self, top: i32, right: i32, bottom: i32, left: i32) {
        self.config.padding = Padding::new(top, right, bottom, left);
    }

    pub fn set_uniform_padding(&mut self, padding: i32) {
        self.config.padding = Padding::uniform(padding);
    }

    /// Append an element to the bottom of the stack. `None` means
    /// `Inherit` alignment with zero margins.
    pub fn add(&mut self, element: ElementId, constraints: Option<Constraints>) {
        let constraints = constraints.unwrap_or_default();
        trace!("adding element {} with {:?}", element, constraints);
        self.entries.push(LayoutEntry {
            element,
            constraints,
        });
    }

    /// Like [`BlockLayout::add`], for hosts that carry per-child constraints
    /// as type-erased values.
    pub fn add_dyn(&mut self, element: ElementId, constraints: Option<&dyn Any>) -> Result<()> {
        match constraints {
            None => self.add(element, None),
            Some(value) => match value.downcast_ref::<Constraints>() {
                Some(constraints) => self.add(element, Some(*constraints)),
                None => {
                    return Err(LayoutError::InvalidArgument(
                        "constraint must be a valid Constraints value or none".to_string(),
                    ))
                }
            },
        }
        Ok(())
    }

    /// Add with an alignment given by name ("Left", "Right", "Center",
    /// "Justify", any case). Unrecognised names inherit the default.
    #[deprecated(note = "use `BlockLayout::add` with `Constraints`")]
    pub fn add_named(&mut self, element: ElementId, name: &str) {
        self.add(element, Some(Constraints::new(ElementAlignment::from_name(name))));
    }

    /// Remove every entry for `element`, returning how many were dropped.
    pub fn remove(&mut self, element: ElementId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.element != element);
        let removed = before - self.entries.len();
        if removed > 0 {
            trace!("removed {} entries for element {}", removed, element);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.entries.iter().any(|entry| entry.element == element)
    }

    /// Constraints of the first entry for `element`.
    pub fn constraints(&self, element: ElementId) -> Option<&Constraints> {
        self.entries
            .iter()
            .find(|entry| entry.element == element)
            .map(|entry| &entry.constraints)
    }

    pub fn constraints_mut(&mut self, element: ElementId) -> Option<&mut Constraints> {
        self.entries
            .iter_mut()
            .find(|entry| entry.element == element)
            .map(|entry| &mut entry.constraints)
    }
}

impl ContainerLayout for BlockLayout {
    fn measure<H: LayoutHost + ?Sized>(&self, mode: MeasureMode, host: &H, insets: Insets) -> IVec2 {
        let padding = self.config.padding;
        let gap = self.config.vertical_gap;
        let mut size = IVec2::ZERO;

        if !self.entries.is_empty() {
            size.y = size.y.wrapping_add(padding.vertical());
            // Gap is charged once per element below; n elements need n - 1.
            size.y = size.y.wrapping_sub(gap);
        }

        for entry in &self.entries {
            let natural = mode.size_of(host, entry.element);
            let constraints = &entry.constraints;
            size.y = size
                .y
                .wrapping_add(natural.y)
                .wrapping_add(gap)
                .wrapping_add(constraints.vertical_margin());
            size.x = size.x.max(
                natural
                    .x
                    .wrapping_add(padding.horizontal())
                    .wrapping_add(constraints.horizontal_margin()),
            );
        }

        size.x = size.x.wrapping_add(insets.horizontal());
        size.y = size.y.wrapping_add(insets.vertical());

        debug!("{:?} size of {} entries: {:?}", mode, self.entries.len(), size);
        size
    }

    fn layout<H: LayoutHost + ?Sized>(
        &self,
        container_size: IVec2,
        insets: Insets,
        host: &mut H,
    ) -> LayoutResult {
        let padding = self.config.padding;
        let gap = self.config.vertical_gap;

        // Offsets wrap on overflow, like the host's integer coordinates.
        let mut top = insets.top.wrapping_add(padding.top);
        let left = insets.left.wrapping_add(padding.left);
        let right = container_size
            .x
            .wrapping_sub(insets.right)
            .wrapping_sub(padding.right);

        let mut placements = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let id = entry.element;
            let constraints = &entry.constraints;
            let alignment = constraints.alignment.resolve(self.config.default_alignment);

            top = top.wrapping_add(constraints.margin_top);

            let inner_left = left.wrapping_add(constraints.margin_left);
            let inner_right = right.wrapping_sub(constraints.margin_right);

            let natural = host.preferred_size(id);
            let (x, width) = match alignment {
                Alignment::Left => (inner_left, natural.x),
                Alignment::Right => (inner_right.wrapping_sub(natural.x), natural.x),
                Alignment::Justify => (inner_left, inner_right.wrapping_sub(inner_left)),
                // Measured from the container origin, not from inner_left.
                Alignment::Center => (
                    inner_right.wrapping_sub(inner_left).wrapping_sub(natural.x) / 2,
                    natural.x,
                ),
            };

            // Height may depend on the width just assigned.
            host.set_size(id, IVec2::new(width, natural.y));
            let height = host.preferred_size(id).y;

            let bounds = Bounds::new(x, top, width, height);
            host.set_bounds(id, bounds);
            trace!("placed element {} ({:?}) at {:?}", id, alignment, bounds);
            placements.push(Placement { element: id, bounds });

            top = top
                .wrapping_add(host.bounds(id).height())
                .wrapping_add(constraints.margin_bottom)
                .wrapping_add(gap);
        }

        debug!(
            "laid out {} entries in {:?} (insets {:?}), cursor ends at {}",
            placements.len(),
            container_size,
            insets,
            top
        );

        LayoutResult {
            placements,
            cursor_end: top,
        }
    }
}
