// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement helpers: turn an origin, a size, and an identity into a [`PlacedElement`].
//!
//! These are pure and total. Zero widths or heights are legal and produce zero-area
//! frames; sizing callbacks return zero to hide an element.

use kurbo::{Point, Rect, Size};

use crate::types::{Decoration, ElementId, PlacedElement, SeparatorStyle};

/// Place an element with an explicit decoration.
#[must_use]
pub fn place(
    id: ElementId,
    origin: Point,
    width: f64,
    height: f64,
    decoration: Decoration,
) -> PlacedElement {
    debug_assert!(
        width >= 0.0 && height >= 0.0,
        "element sizes must be non-negative, got {width}x{height} for {id:?}"
    );
    PlacedElement {
        id,
        frame: Rect::from_origin_size(origin, Size::new(width, height)),
        decoration,
    }
}

/// Place item `item` of `section`.
#[must_use]
pub fn place_item(
    section: usize,
    item: usize,
    origin: Point,
    width: f64,
    height: f64,
) -> PlacedElement {
    place(
        ElementId::item(section, item),
        origin,
        width,
        height,
        Decoration::None,
    )
}

/// Place the header of `section`.
#[must_use]
pub fn place_header(section: usize, origin: Point, width: f64, height: f64) -> PlacedElement {
    place(
        ElementId::header(section),
        origin,
        width,
        height,
        Decoration::None,
    )
}

/// Place the footer of `section`.
#[must_use]
pub fn place_footer(section: usize, origin: Point, width: f64, height: f64) -> PlacedElement {
    place(
        ElementId::footer(section),
        origin,
        width,
        height,
        Decoration::None,
    )
}

/// Place the separator that follows item `item` of `section`.
#[must_use]
pub fn place_separator(
    section: usize,
    item: usize,
    origin: Point,
    width: f64,
    height: f64,
    style: SeparatorStyle,
) -> PlacedElement {
    place(
        ElementId::separator(section, item),
        origin,
        width,
        height,
        Decoration::Separator(style),
    )
}
