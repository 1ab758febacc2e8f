// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pass: one deterministic top-to-bottom walk over the structure.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::config::{ContentWidth, Flow, LayoutConfig};
use crate::placement::{place_footer, place_header, place_item, place_separator};
use crate::sizing::SizingPolicy;
use crate::structure::StructureSource;
use crate::types::{ElementId, PlacedElement};

/// The complete result of one layout pass.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LayoutSnapshot {
    /// Every placed element, in placement order: per section the header, then each
    /// item followed by its separator (if any), then the footer.
    pub elements: Vec<PlacedElement>,
    /// Size of the scrollable content enclosing all elements.
    pub content_size: Size,
}

/// Number of elements a structure produces: a header and a footer per section,
/// every item, and a separator between each pair of consecutive items.
pub fn element_count<S: StructureSource + ?Sized>(structure: &S) -> usize {
    (0..structure.section_count())
        .map(|s| {
            let items = structure.item_count(s);
            2 + items + items.saturating_sub(1)
        })
        .sum()
}

/// Cursor state of a paged run: consecutive narrow sections sharing a top edge.
#[derive(Copy, Clone, Debug)]
struct PageRun {
    top: f64,
    bottom: f64,
}

/// Compute the layout of `structure` for a viewport `viewport_width` wide.
///
/// This is a pure function of its inputs: calling it twice with identical inputs
/// yields identical snapshots.
///
/// ```
/// use trellis_grid_layout::{LayoutConfig, SizingPolicy, UniformStructure, compute_layout};
///
/// let sizing = SizingPolicy::new()
///     .uniform_header_height(50.0)
///     .uniform_footer_height(44.0)
///     .uniform_item_height(44.0)
///     .with_separator_height(0.5);
/// let snapshot = compute_layout(
///     &UniformStructure::new(1, 3),
///     320.0,
///     &sizing,
///     LayoutConfig::default(),
/// );
///
/// // header, 3 items, 2 separators, footer
/// assert_eq!(snapshot.elements.len(), 7);
/// assert_eq!(snapshot.content_size.height, 50.0 + 3.0 * 44.0 + 2.0 * 0.5 + 44.0);
/// ```
pub fn compute_layout<S: StructureSource + ?Sized>(
    structure: &S,
    viewport_width: f64,
    sizing: &SizingPolicy,
    config: LayoutConfig,
) -> LayoutSnapshot {
    debug_assert!(
        viewport_width >= 0.0,
        "viewport width must be non-negative, got {viewport_width}"
    );

    let mut elements = Vec::with_capacity(element_count(structure));
    let separator_height = sizing.separator_height();
    let separator_style = sizing.separator_style();

    let mut x = 0.0_f64;
    let mut y = 0.0_f64;
    let mut run: Option<PageRun> = None;
    let mut extent = 0.0_f64;

    for section in 0..structure.section_count() {
        let width = sizing.section_width(section, viewport_width);
        let narrow = config.flow == Flow::Paged && width < viewport_width;

        if narrow {
            let open = *run.get_or_insert(PageRun { top: y, bottom: y });
            y = open.top;
        } else if let Some(closed) = run.take() {
            x = 0.0;
            y = closed.bottom;
        }

        log::trace!(
            "section {section}: origin ({x}, {y}), width {width}, {}",
            if narrow { "paged" } else { "full" }
        );

        let header = place_header(
            section,
            Point::new(x, y),
            width,
            sizing.header_height(section),
        );
        y = header.frame.y1;
        elements.push(header);

        let items = structure.item_count(section);
        for item in 0..items {
            let placed = place_item(
                section,
                item,
                Point::new(x, y),
                width,
                sizing.item_height(ElementId::item(section, item)),
            );
            y = placed.frame.y1;
            elements.push(placed);

            if item + 1 < items {
                let separator = place_separator(
                    section,
                    item,
                    Point::new(x, y),
                    width,
                    separator_height,
                    separator_style,
                );
                y = separator.frame.y1;
                elements.push(separator);
            }
        }

        let footer = place_footer(
            section,
            Point::new(x, y),
            width,
            sizing.footer_height(section),
        );
        y = footer.frame.y1;
        elements.push(footer);

        extent = extent.max(x + width);
        if let Some(open) = run.as_mut() {
            open.bottom = open.bottom.max(y);
            x += width;
        }
    }

    if let Some(closed) = run {
        y = closed.bottom;
    }

    let content_width = match config.content_width {
        ContentWidth::Viewport => viewport_width,
        ContentWidth::Extent => extent,
    };

    LayoutSnapshot {
        elements,
        content_size: Size::new(content_width, y),
    }
}
