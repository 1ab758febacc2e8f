// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A table of five sections that pages into columns on wide screens.
//!
//! This example shows how a host drives `trellis_grid_layout`:
//! - describe the structure and sizing,
//! - run a pass for the current viewport,
//! - query the visible rectangle and realize views for what comes back,
//! - re-run the pass after a bounds change.
//!
//! Run:
//! - `cargo run -p trellis_demos --example grid_view`
//! - `RUST_LOG=debug cargo run -p trellis_demos --example grid_view -- 1024`
//!
//! The optional argument is the viewport width (default 320).

use kurbo::{Insets, Point, Rect, Size};
use trellis_grid_layout::{
    ElementKind, GridLayout, LayoutConfig, PlacedElement, Rgba8, SizingPolicy, UniformStructure,
};
use trellis_index::backends::Bands;

const SECTIONS: usize = 5;
const ITEMS_PER_SECTION: usize = 15;
/// Widest phone viewport; anything wider gets one column per section.
const PAGING_THRESHOLD: f64 = 414.0;

fn sizing_for(viewport_width: f64) -> SizingPolicy {
    SizingPolicy::new()
        .uniform_header_height(50.0)
        .uniform_footer_height(44.0)
        .uniform_item_height(44.0)
        .with_separator_height(0.5)
        .with_separator_color(Rgba8::BLUE)
        .with_separator_insets(Insets::new(25.0, 0.0, 0.0, 0.0))
        .with_section_width(move |_| {
            if viewport_width > PAGING_THRESHOLD {
                viewport_width / SECTIONS as f64
            } else {
                viewport_width
            }
        })
}

/// Background of an item cell: even sections are light gray, odd ones white.
fn item_background(section: usize) -> Rgba8 {
    if section % 2 == 0 {
        Rgba8::LIGHT_GRAY
    } else {
        Rgba8::WHITE
    }
}

/// What a host would paint for each visible element.
fn describe(element: &PlacedElement) -> String {
    let what = match element.kind() {
        ElementKind::Header => "header",
        ElementKind::Footer => "footer",
        ElementKind::Item => "item",
        ElementKind::Separator => "separator",
    };
    let f = element.frame;
    let mut line = format!(
        "{what:>9} s{}:{:<2} at ({:>6.1}, {:>7.1}) {:>6.1} x {:>4.1}",
        element.id.section,
        element.id.item,
        f.x0,
        f.y0,
        f.width(),
        f.height()
    );
    if element.kind() == ElementKind::Item {
        let Rgba8 { r, g, b, .. } = item_background(element.id.section);
        line.push_str(&format!(" on #{r:02x}{g:02x}{b:02x}"));
    }
    line
}

fn show(layout: &GridLayout<Bands>, viewport: Size) {
    let visible = layout.query(Rect::from_origin_size(Point::ZERO, viewport));
    println!(
        "viewport {}x{}: content {}x{}, {} of {} elements visible",
        viewport.width,
        viewport.height,
        layout.content_size().width,
        layout.content_size().height,
        visible.len(),
        layout.len()
    );
    for element in &visible {
        println!("{}", describe(element));
    }

    if let Some(line) = layout
        .separator_at(0, 0)
        .and_then(|e| e.separator_style().map(|s| s.line_rect(e.frame)))
    {
        println!("first separator line: {line:?}");
    }

    match serde_json::to_string_pretty(&visible.first()) {
        Ok(json) => println!("first visible element as JSON:\n{json}"),
        Err(err) => log::warn!("could not serialize element: {err}"),
    }
}

fn main() {
    env_logger::init();

    let width = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .unwrap_or(320.0);
    let viewport = Size::new(width, 568.0);

    let structure = UniformStructure::new(SECTIONS, ITEMS_PER_SECTION);
    // One band per screenful keeps every viewport query to two or three bands.
    let mut layout = GridLayout::with_backend(Bands::new(viewport.height));
    layout.set_config(LayoutConfig::paged());

    layout.compute_layout(&structure, viewport.width, &sizing_for(viewport.width));
    show(&layout, viewport);

    // Rotate the device: the bounds change invalidates the layout.
    let rotated = Size::new(viewport.height, viewport.width);
    if layout.invalidate_for_bounds_change(Rect::from_origin_size(Point::ZERO, rotated)) {
        layout.compute_layout(&structure, rotated.width, &sizing_for(rotated.width));
    }
    println!();
    show(&layout, rotated);
}
