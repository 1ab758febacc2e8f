// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end properties of the layout engine.

use std::panic::{AssertUnwindSafe, catch_unwind};

use kurbo::{Insets, Point, Rect, Size};
use trellis_grid_layout::{
    ElementId, ElementKind, GridLayout, LayoutConfig, LayoutState, PlacedElement, Rgba8,
    SizingPolicy, UniformStructure, compute_layout, element_count,
};

fn table_sizing() -> SizingPolicy {
    SizingPolicy::new()
        .uniform_header_height(50.0)
        .uniform_footer_height(44.0)
        .uniform_item_height(44.0)
        .with_separator_height(0.5)
        .with_separator_color(Rgba8::BLUE)
        .with_separator_insets(Insets::new(25.0, 0.0, 0.0, 0.0))
}

/// Irregular heights so that ordering checks are not trivially uniform.
fn ragged_sizing() -> SizingPolicy {
    SizingPolicy::new()
        .with_header_height(|s| if s % 2 == 0 { 30.0 } else { 0.0 })
        .with_footer_height(|s| 10.0 + s as f64)
        .with_item_height(|id: ElementId| 20.0 + (id.item % 3) as f64 * 12.5)
        .with_separator_height(1.0)
}

fn brute_force(elements: &[PlacedElement], rect: Rect) -> Vec<PlacedElement> {
    elements
        .iter()
        .filter(|e| {
            let i = e.frame.intersect(rect);
            i.width() > 0.0 && i.height() > 0.0
        })
        .copied()
        .collect()
}

#[test]
fn literal_table_scenario() {
    let mut layout = GridLayout::new();
    let size = layout.compute_layout(&UniformStructure::new(5, 15), 320.0, &table_sizing());

    assert_eq!(layout.len(), 155);
    assert_eq!(size, Size::new(320.0, 3805.0));

    let count = |kind: ElementKind| {
        layout
            .elements()
            .iter()
            .filter(|e| e.kind() == kind)
            .count()
    };
    assert_eq!(count(ElementKind::Header), 5);
    assert_eq!(count(ElementKind::Footer), 5);
    assert_eq!(count(ElementKind::Item), 75);
    assert_eq!(count(ElementKind::Separator), 70);

    // Every section starts at x = 0 and spans the viewport.
    for section in 0..5 {
        let header = layout.header_at(section).copied();
        assert_eq!(
            header.map(|e| e.frame),
            Some(Rect::from_origin_size(
                Point::new(0.0, 761.0 * section as f64),
                Size::new(320.0, 50.0)
            ))
        );
    }

    let style = layout.separator_at(0, 0).and_then(|e| e.separator_style()).copied();
    assert_eq!(style.map(|s| s.color), Some(Some(Rgba8::BLUE)));
    assert_eq!(style.map(|s| s.insets.x0), Some(25.0));
}

#[test]
fn layout_is_deterministic() {
    let counts = vec![3_usize, 0, 7, 1, 12];
    let a = compute_layout(&counts, 375.0, &ragged_sizing(), LayoutConfig::default());
    let b = compute_layout(&counts, 375.0, &ragged_sizing(), LayoutConfig::default());
    assert_eq!(a, b);

    let mut layout = GridLayout::new();
    layout.compute_layout(&counts, 375.0, &ragged_sizing());
    let first: Vec<_> = layout.elements().to_vec();
    layout.invalidate();
    layout.compute_layout(&counts, 375.0, &ragged_sizing());
    assert_eq!(layout.elements(), &first[..]);
}

#[test]
fn coverage_matches_structure() {
    let counts = vec![0_usize, 1, 2, 9, 0, 4];
    let snapshot = compute_layout(&counts, 320.0, &ragged_sizing(), LayoutConfig::default());
    let expected: usize = counts.iter().map(|&m| 2 + m + m.saturating_sub(1)).sum();
    assert_eq!(snapshot.elements.len(), expected);
    assert_eq!(element_count(&counts), expected);

    // Identities are unique.
    let mut ids: Vec<_> = snapshot.elements.iter().map(|e| e.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), expected);
}

#[test]
fn sections_flow_top_to_bottom_without_gaps() {
    let counts = vec![4_usize, 1, 6];
    let snapshot = compute_layout(&counts, 320.0, &ragged_sizing(), LayoutConfig::default());

    let mut y = 0.0;
    for element in &snapshot.elements {
        assert_eq!(element.frame.y0, y, "{:?} does not adjoin its predecessor", element.id);
        assert_eq!(element.frame.x0, 0.0);
        y = element.frame.y1;
    }
    assert_eq!(snapshot.content_size.height, y);
}

#[test]
fn empty_section_yields_header_and_footer_only() {
    let counts = vec![0_usize];
    let snapshot = compute_layout(&counts, 320.0, &table_sizing(), LayoutConfig::default());
    let ids: Vec<_> = snapshot.elements.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![ElementId::header(0), ElementId::footer(0)]);
    assert_eq!(snapshot.elements[1].frame.y0, 50.0);
    assert_eq!(snapshot.content_size.height, 94.0);
}

#[test]
fn missing_callbacks_place_zero_sized_elements() {
    let mut layout = GridLayout::new();
    let size = layout.compute_layout(&UniformStructure::new(2, 3), 320.0, &SizingPolicy::new());

    assert_eq!(layout.len(), 2 * (2 + 3 + 2));
    assert_eq!(size, Size::new(320.0, 0.0));
    assert!(layout.elements().iter().all(|e| e.frame.height() == 0.0));
    assert!(layout.elements().iter().all(|e| e.frame.width() == 320.0));
    // Zero-area elements exist but never show up in a query.
    assert!(layout.query(Rect::new(-10.0, -10.0, 400.0, 10.0)).is_empty());
}

#[test]
fn query_matches_brute_force_scan() {
    let counts = vec![5_usize, 0, 8, 2];
    let mut layout = GridLayout::new();
    let size = layout.compute_layout(&counts, 320.0, &ragged_sizing());

    let mut rects = vec![
        Rect::from_origin_size(Point::ZERO, size),
        Rect::new(0.0, 0.0, 320.0, 30.0),
        Rect::new(0.0, 30.0, 320.0, 30.0),
        Rect::new(319.0, 0.0, 500.0, size.height),
        Rect::new(320.0, 0.0, 500.0, size.height),
        Rect::new(-50.0, -50.0, 0.0, 0.0),
    ];
    for i in 0..40 {
        let top = i as f64 * 13.75;
        rects.push(Rect::new(10.0, top, 200.0, top + 96.0));
    }

    for rect in rects {
        assert_eq!(
            layout.query(rect),
            brute_force(layout.elements(), rect),
            "query mismatch for {rect:?}"
        );
    }
}

#[test]
fn query_excludes_elements_flush_against_the_rect() {
    let mut layout = GridLayout::new();
    layout.compute_layout(&UniformStructure::new(1, 2), 320.0, &table_sizing());

    let first_item = layout.item_at(0, 0).map(|e| e.frame);
    let Some(frame) = first_item else {
        panic!("first item must be placed");
    };

    let ids: Vec<_> = layout.query(frame).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![ElementId::item(0, 0)]);
}

#[test]
fn lookup_round_trips_every_identity() {
    let counts = vec![2_usize, 0, 5];
    let mut layout = GridLayout::new();
    layout.compute_layout(&counts, 320.0, &ragged_sizing());

    for element in layout.elements() {
        assert_eq!(layout.lookup(element.id), Some(element));
    }
    assert_eq!(layout.lookup(ElementId::item(2, 5)), None);
    assert_eq!(layout.lookup(ElementId::header(3)), None);
}

#[test]
fn paging_boundary_width_equal_to_viewport_stacks() {
    let sizing = table_sizing().with_section_width(|_| 320.0);
    let snapshot = compute_layout(
        &UniformStructure::new(2, 2),
        320.0,
        &sizing,
        LayoutConfig::paged(),
    );
    let header = snapshot
        .elements
        .iter()
        .find(|e| e.id == ElementId::header(1))
        .map(|e| e.frame.origin());
    // 50 + 2*44 + 0.5 + 44 = 182.5
    assert_eq!(header, Some(Point::new(0.0, 182.5)));
}

#[test]
fn paging_just_below_viewport_width_pages() {
    let sizing = table_sizing().with_section_width(|_| 319.5);
    let snapshot = compute_layout(
        &UniformStructure::new(2, 2),
        320.0,
        &sizing,
        LayoutConfig::paged(),
    );
    let header = snapshot
        .elements
        .iter()
        .find(|e| e.id == ElementId::header(1))
        .map(|e| e.frame.origin());
    assert_eq!(header, Some(Point::new(319.5, 0.0)));
    assert_eq!(snapshot.content_size, Size::new(639.0, 182.5));
}

#[test]
fn wide_screen_pages_sections_into_columns() {
    // A viewport wider than 414 gives every section an equal share.
    let viewport = 1024.0;
    let sections = 4;
    let sizing = table_sizing().with_section_width(move |_| viewport / sections as f64);
    let mut layout = GridLayout::with_config(LayoutConfig::paged());
    let size = layout.compute_layout(&UniformStructure::new(sections, 3), viewport, &sizing);

    assert_eq!(size.width, 1024.0);
    for section in 0..sections {
        let origin = layout.header_at(section).map(|e| e.frame.origin());
        assert_eq!(origin, Some(Point::new(256.0 * section as f64, 0.0)));
    }

    // A column-shaped query hits only the third section.
    let hits = layout.query(Rect::new(600.0, 0.0, 700.0, size.height));
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|e| e.id.section == 2));
}

#[test]
fn panicking_callback_keeps_the_previous_layout() {
    let structure = UniformStructure::new(2, 3);
    let mut layout = GridLayout::new();
    layout.compute_layout(&structure, 320.0, &table_sizing());
    let elements = layout.elements().to_vec();
    let size = layout.content_size();

    let failing = table_sizing().with_item_height(|id: ElementId| {
        assert!(id.section == 0, "no height known for {id:?}");
        44.0
    });
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        layout.compute_layout(&structure, 480.0, &failing)
    }));
    assert!(outcome.is_err(), "the failing callback must abort the pass");

    assert_eq!(layout.elements(), &elements[..]);
    assert_eq!(layout.content_size(), size);
    assert_eq!(layout.state(), LayoutState::Fresh);
    assert_eq!(
        layout.header_at(1).map(|e| e.frame.width()),
        Some(320.0),
        "lookups still answer from the previous pass"
    );
}

#[cfg(feature = "backend_bands")]
#[test]
fn far_reaching_queries_on_the_band_backend_return_everything() {
    use trellis_index::backends::Bands;

    let structure = UniformStructure::new(1, 3);
    let mut flat = GridLayout::new();
    let mut banded = GridLayout::with_backend(Bands::new(256.0));
    flat.compute_layout(&structure, 320.0, &table_sizing());
    banded.compute_layout(&structure, 320.0, &table_sizing());

    for rect in [
        Rect::new(-2e6, -2e6, 2e6, 2e6),
        Rect::new(-1e9, -1e9, 1e9, 1e9),
        Rect::new(f64::MIN, f64::MIN, f64::MAX, f64::MAX),
    ] {
        let hits = banded.query(rect);
        assert_eq!(hits.len(), flat.len(), "every element lies inside {rect:?}");
        assert_eq!(hits, flat.query(rect));
    }
}
