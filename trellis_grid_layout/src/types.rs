// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: element identities, separator styling, and placed elements.

use kurbo::{Insets, Rect};

/// The decoration kind used for separators.
///
/// Separators are the only decoration a [`GridLayout`](crate::GridLayout) produces;
/// the kind is registered once when the engine is constructed.
pub const SEPARATOR_DECORATION_KIND: &str = "horizontal-separator";

/// What a placed element represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// A content item (a table row).
    Item,
    /// A section header.
    Header,
    /// A section footer.
    Footer,
    /// A thin separator between two consecutive items of a section.
    Separator,
}

bitflags::bitflags! {
    /// A set of [`ElementKind`]s, used to filter rectangle queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementKinds: u8 {
        /// Content items.
        const ITEM      = 0b0000_0001;
        /// Section headers.
        const HEADER    = 0b0000_0010;
        /// Section footers.
        const FOOTER    = 0b0000_0100;
        /// Separators.
        const SEPARATOR = 0b0000_1000;
        /// Headers and footers.
        const SUPPLEMENTARY = Self::HEADER.bits() | Self::FOOTER.bits();
    }
}

impl Default for ElementKinds {
    fn default() -> Self {
        Self::all()
    }
}

impl From<ElementKind> for ElementKinds {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Item => Self::ITEM,
            ElementKind::Header => Self::HEADER,
            ElementKind::Footer => Self::FOOTER,
            ElementKind::Separator => Self::SEPARATOR,
        }
    }
}

/// Identity of a placed element: `(kind, section, item)`.
///
/// Headers and footers always carry `item == 0`. A separator carries the index of
/// the item it follows. No two elements of one layout pass share an identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId {
    /// Element kind.
    pub kind: ElementKind,
    /// Section index.
    pub section: usize,
    /// Item index within the section.
    pub item: usize,
}

impl ElementId {
    /// Identity of item `item` in `section`.
    #[must_use]
    pub const fn item(section: usize, item: usize) -> Self {
        Self {
            kind: ElementKind::Item,
            section,
            item,
        }
    }

    /// Identity of the header of `section`.
    #[must_use]
    pub const fn header(section: usize) -> Self {
        Self {
            kind: ElementKind::Header,
            section,
            item: 0,
        }
    }

    /// Identity of the footer of `section`.
    #[must_use]
    pub const fn footer(section: usize) -> Self {
        Self {
            kind: ElementKind::Footer,
            section,
            item: 0,
        }
    }

    /// Identity of the separator placed directly below item `item` in `section`.
    #[must_use]
    pub const fn separator(section: usize, item: usize) -> Self {
        Self {
            kind: ElementKind::Separator,
            section,
            item,
        }
    }
}

/// An 8-bit-per-channel RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha (255 is opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opaque light gray.
    pub const LIGHT_GRAY: Self = Self::rgb(170, 170, 170);

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Styling carried by a placed separator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeparatorStyle {
    /// Line color. `None` leaves the color to the host.
    pub color: Option<Rgba8>,
    /// Horizontal insets of the visible line. `y0`/`y1` are always zero.
    pub insets: Insets,
}

impl SeparatorStyle {
    /// Creates a style, discarding the top and bottom insets.
    #[must_use]
    pub fn new(color: Option<Rgba8>, insets: Insets) -> Self {
        Self {
            color,
            insets: Insets::new(insets.x0, 0.0, insets.x1, 0.0),
        }
    }

    /// The visible line inside a separator `frame`: the frame shrunk by the left
    /// and right insets, keeping its full height.
    ///
    /// Insets wider than the frame collapse the line to zero width at the left inset.
    ///
    /// ```
    /// use kurbo::{Insets, Rect};
    /// use trellis_grid_layout::SeparatorStyle;
    ///
    /// let style = SeparatorStyle::new(None, Insets::new(25.0, 0.0, 0.0, 0.0));
    /// let frame = Rect::new(0.0, 44.0, 320.0, 44.5);
    /// assert_eq!(style.line_rect(frame), Rect::new(25.0, 44.0, 320.0, 44.5));
    /// ```
    #[must_use]
    pub fn line_rect(&self, frame: Rect) -> Rect {
        let x0 = frame.x0 + self.insets.x0;
        let x1 = (frame.x1 - self.insets.x1).max(x0);
        Rect::new(x0, frame.y0, x1, frame.y1)
    }
}

impl Default for SeparatorStyle {
    fn default() -> Self {
        Self {
            color: None,
            insets: Insets::ZERO,
        }
    }
}

/// Kind-specific data attached to a placed element.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decoration {
    /// Items, headers, and footers carry nothing beyond their frame.
    #[default]
    None,
    /// Separator styling.
    Separator(SeparatorStyle),
}

/// The output of layout for one element: identity, frame, and decoration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedElement {
    /// Identity of the element.
    pub id: ElementId,
    /// Frame in content coordinates.
    pub frame: Rect,
    /// Kind-specific data.
    pub decoration: Decoration,
}

impl PlacedElement {
    /// The element kind.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.id.kind
    }

    /// Separator styling, if this element is a separator.
    #[must_use]
    pub const fn separator_style(&self) -> Option<&SeparatorStyle> {
        match &self.decoration {
            Decoration::Separator(style) => Some(style),
            Decoration::None => None,
        }
    }
}
