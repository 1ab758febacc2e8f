// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Grid Layout: table-style section layout with optional horizontal paging.
//!
//! Given a logical structure of sections and items plus a set of sizing callbacks,
//! this crate computes a frame for every visual element of a table:
//!
//! - a header and a footer per section,
//! - every item,
//! - a separator between each pair of consecutive items in a section.
//!
//! The layout is a deterministic, single-pass, top-to-bottom flow. With
//! [`Flow::Paged`], sections narrower than the viewport are laid out side by side
//! as vertical strips, which turns a table into horizontally scrolling columns on
//! wide screens.
//!
//! The core pieces are:
//!
//! - [`StructureSource`]: section and item counts, owned by the host.
//! - [`SizingPolicy`]: optional callbacks for heights, section widths, and separator
//!   styling, each with a documented default.
//! - [`compute_layout`]: the pure layout pass producing a [`LayoutSnapshot`].
//! - [`GridLayout`]: an engine that caches the last completed pass, tracks
//!   staleness, and answers rectangle queries (through a [`trellis_index`] spatial
//!   index) and identity lookups.
//!
//! This crate does not render anything, recycle views, or handle input. Hosts are
//! responsible for:
//!
//! - calling [`GridLayout::compute_layout`] whenever the viewport bounds or the
//!   structure change,
//! - sizing their scroll canvas to [`GridLayout::content_size`],
//! - realizing views for the elements returned by [`GridLayout::query`] for the
//!   visible rectangle, and applying [`SeparatorStyle`] to separators.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Rect};
//! use trellis_grid_layout::{GridLayout, Rgba8, SizingPolicy, UniformStructure};
//!
//! let sizing = SizingPolicy::new()
//!     .uniform_header_height(50.0)
//!     .uniform_footer_height(44.0)
//!     .uniform_item_height(44.0)
//!     .with_separator_height(0.5)
//!     .with_separator_color(Rgba8::BLUE)
//!     .with_separator_insets(Insets::new(25.0, 0.0, 0.0, 0.0));
//!
//! let mut layout = GridLayout::new();
//! let size = layout.compute_layout(&UniformStructure::new(5, 15), 320.0, &sizing);
//! assert_eq!(size.width, 320.0);
//! assert_eq!(size.height, 3805.0);
//!
//! let visible = layout.query(Rect::new(0.0, 0.0, 320.0, 568.0));
//! assert!(!visible.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: enables `kurbo/std`. Use `libm` instead for `no_std` targets.
//! - `backend_bands` *(default)*: exposes the band index backend for long tables.
//! - `serde`: `Serialize`/`Deserialize` for the public data types.
//!
//! All sizes are expected to be finite and non-negative; debug builds assert this.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod pass;
mod placement;
mod sizing;
mod structure;
mod types;

pub use config::{ContentWidth, Flow, LayoutConfig};
pub use engine::{GridLayout, LayoutState};
pub use pass::{LayoutSnapshot, compute_layout, element_count};
pub use placement::{place, place_footer, place_header, place_item, place_separator};
pub use sizing::SizingPolicy;
pub use structure::{StructureSource, UniformStructure};
pub use types::{
    Decoration, ElementId, ElementKind, ElementKinds, PlacedElement, Rgba8,
    SEPARATOR_DECORATION_KIND, SeparatorStyle,
};
