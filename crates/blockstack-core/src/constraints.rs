// crates/blockstack-core/src/constraints.rs
use serde::{Deserialize, Serialize};

/// Resolved horizontal placement of an element inside its row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    /// Centred horizontally.
    #[default]
    Center,
    Left,
    Right,
    /// Stretched to the full span between the margins.
    Justify,
}

impl Alignment {
    pub const CENTER_CODE: i32 = 0;
    pub const LEFT_CODE: i32 = 1;
    pub const RIGHT_CODE: i32 = 2;
    pub const JUSTIFY_CODE: i32 = 3;

    /// Integer code used by older configuration surfaces.
    pub fn code(self) -> i32 {
        match self {
            Alignment::Center => Self::CENTER_CODE,
            Alignment::Left => Self::LEFT_CODE,
            Alignment::Right => Self::RIGHT_CODE,
            Alignment::Justify => Self::JUSTIFY_CODE,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            Self::CENTER_CODE => Some(Alignment::Center),
            Self::LEFT_CODE => Some(Alignment::Left),
            Self::RIGHT_CODE => Some(Alignment::Right),
            Self::JUSTIFY_CODE => Some(Alignment::Justify),
            _ => None,
        }
    }
}

/// Per-element alignment. `Inherit` defers to the layout's default and is
/// only resolved while laying out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementAlignment {
    Center,
    Left,
    Right,
    Justify,
    #[default]
    Inherit,
}

impl ElementAlignment {
    pub const INHERIT_CODE: i32 = -1;

    pub fn resolve(self, fallback: Alignment) -> Alignment {
        match self {
            ElementAlignment::Center => Alignment::Center,
            ElementAlignment::Left => Alignment::Left,
            ElementAlignment::Right => Alignment::Right,
            ElementAlignment::Justify => Alignment::Justify,
            ElementAlignment::Inherit => fallback,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            ElementAlignment::Inherit => Self::INHERIT_CODE,
            other => other.resolve(Alignment::Center).code(),
        }
    }

    /// Unknown codes are not an error; they behave like `Inherit`.
    pub fn from_code(code: i32) -> Self {
        Alignment::from_code(code).map_or(ElementAlignment::Inherit, Self::from)
    }

    /// Parse one of the legacy names ("Left", "Right", "Center", "Justify"),
    /// ignoring ASCII case. Anything else is `Inherit`.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("left") {
            ElementAlignment::Left
        } else if name.eq_ignore_ascii_case("right") {
            ElementAlignment::Right
        } else if name.eq_ignore_ascii_case("center") {
            ElementAlignment::Center
        } else if name.eq_ignore_ascii_case("justify") {
            ElementAlignment::Justify
        } else {
            ElementAlignment::Inherit
        }
    }
}

impl From<Alignment> for ElementAlignment {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Center => ElementAlignment::Center,
            Alignment::Left => ElementAlignment::Left,
            Alignment::Right => ElementAlignment::Right,
            Alignment::Justify => ElementAlignment::Justify,
        }
    }
}

/// Alignment and margins attached to one element of a block stack.
///
/// Margins are not validated; negative values shift and shrink the element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub alignment: ElementAlignment,
    pub margin_top: i32,
    pub margin_right: i32,
    pub margin_bottom: i32,
    pub margin_left: i32,
}

impl Constraints {
    pub fn new(alignment: impl Into<ElementAlignment>) -> Self {
        Self {
            alignment: alignment.into(),
            ..Self::default()
        }
    }

    /// Same margin on all four sides.
    pub fn with_margin(alignment: impl Into<ElementAlignment>, margin: i32) -> Self {
        Self::with_margins(alignment, margin, margin, margin, margin)
    }

    pub fn with_margins(
        alignment: impl Into<ElementAlignment>,
        top: i32,
        right: i32,
        bottom: i32,
        left: i32,
    ) -> Self {
        let mut constraints = Self::new(alignment);
        constraints.set_margin(top, right, bottom, left);
        constraints
    }

    pub fn set_alignment(&mut self, alignment: impl Into<ElementAlignment>) {
        self.alignment = alignment.into();
    }

    pub fn set_margin(&mut self, top: i32, right: i32, bottom: i32, left: i32) {
        self.margin_top = top;
        self.margin_right = right;
        self.margin_bottom = bottom;
        self.margin_left = left;
    }

    pub fn horizontal_margin(&self) -> i32 {
        self.margin_left.wrapping_add(self.margin_right)
    }

    pub fn vertical_margin(&self) -> i32 {
        self.margin_top.wrapping_add(self.margin_bottom)
    }
}
