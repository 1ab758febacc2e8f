// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing policy: optional callbacks that decide element heights, section widths,
//! and separator styling.
//!
//! Every callback is optional. Missing callbacks fall back to documented defaults:
//!
//! | Callback | Default |
//! |---|---|
//! | header height | `0` |
//! | footer height | `0` |
//! | item height | `0` |
//! | section width | the viewport width |
//! | separator height | `0` |
//! | separator color | `None` |
//! | separator insets | zero (top and bottom are always ignored) |
//!
//! A zero size still places the element; it just has no area.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Insets;

use crate::types::{ElementId, Rgba8, SeparatorStyle};

type SectionFn = Box<dyn Fn(usize) -> f64>;
type ItemFn = Box<dyn Fn(ElementId) -> f64>;

/// Caller-supplied sizing callbacks.
///
/// Built with the `with_*` methods (closures) or the `uniform_*` methods (constants):
///
/// ```
/// use trellis_grid_layout::{ElementId, SizingPolicy};
///
/// let sizing = SizingPolicy::new()
///     .uniform_header_height(50.0)
///     .with_item_height(|id: ElementId| if id.item == 0 { 60.0 } else { 44.0 });
///
/// assert_eq!(sizing.header_height(3), 50.0);
/// assert_eq!(sizing.item_height(ElementId::item(0, 0)), 60.0);
/// assert_eq!(sizing.footer_height(0), 0.0);
/// assert_eq!(sizing.section_width(0, 320.0), 320.0);
/// ```
#[derive(Default)]
pub struct SizingPolicy {
    header_height: Option<SectionFn>,
    footer_height: Option<SectionFn>,
    item_height: Option<ItemFn>,
    section_width: Option<SectionFn>,
    separator_height: Option<f64>,
    separator_color: Option<Rgba8>,
    separator_insets: Option<Insets>,
}

impl fmt::Debug for SizingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizingPolicy")
            .field("header_height", &self.header_height.is_some())
            .field("footer_height", &self.footer_height.is_some())
            .field("item_height", &self.item_height.is_some())
            .field("section_width", &self.section_width.is_some())
            .field("separator_height", &self.separator_height)
            .field("separator_color", &self.separator_color)
            .field("separator_insets", &self.separator_insets)
            .finish()
    }
}

impl SizingPolicy {
    /// A policy with no callbacks; every size takes its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header height callback.
    #[must_use]
    pub fn with_header_height(mut self, f: impl Fn(usize) -> f64 + 'static) -> Self {
        self.header_height = Some(Box::new(f));
        self
    }

    /// Sets the footer height callback.
    #[must_use]
    pub fn with_footer_height(mut self, f: impl Fn(usize) -> f64 + 'static) -> Self {
        self.footer_height = Some(Box::new(f));
        self
    }

    /// Sets the item height callback. It receives the item's identity.
    #[must_use]
    pub fn with_item_height(mut self, f: impl Fn(ElementId) -> f64 + 'static) -> Self {
        self.item_height = Some(Box::new(f));
        self
    }

    /// Sets the section width callback.
    ///
    /// In a paged flow, sections narrower than the viewport are laid out side by side.
    #[must_use]
    pub fn with_section_width(mut self, f: impl Fn(usize) -> f64 + 'static) -> Self {
        self.section_width = Some(Box::new(f));
        self
    }

    /// Every header has the same height.
    #[must_use]
    pub fn uniform_header_height(self, height: f64) -> Self {
        self.with_header_height(move |_| height)
    }

    /// Every footer has the same height.
    #[must_use]
    pub fn uniform_footer_height(self, height: f64) -> Self {
        self.with_footer_height(move |_| height)
    }

    /// Every item has the same height.
    #[must_use]
    pub fn uniform_item_height(self, height: f64) -> Self {
        self.with_item_height(move |_| height)
    }

    /// Sets the height of every separator.
    #[must_use]
    pub fn with_separator_height(mut self, height: f64) -> Self {
        self.separator_height = Some(height);
        self
    }

    /// Sets the color of every separator.
    #[must_use]
    pub fn with_separator_color(mut self, color: Rgba8) -> Self {
        self.separator_color = Some(color);
        self
    }

    /// Sets the separator insets. Only the left (`x0`) and right (`x1`) insets are used.
    #[must_use]
    pub fn with_separator_insets(mut self, insets: Insets) -> Self {
        self.separator_insets = Some(insets);
        self
    }

    /// Height of the header of `section`.
    pub fn header_height(&self, section: usize) -> f64 {
        self.header_height.as_ref().map_or(0.0, |f| f(section))
    }

    /// Height of the footer of `section`.
    pub fn footer_height(&self, section: usize) -> f64 {
        self.footer_height.as_ref().map_or(0.0, |f| f(section))
    }

    /// Height of the item identified by `id`.
    pub fn item_height(&self, id: ElementId) -> f64 {
        self.item_height.as_ref().map_or(0.0, |f| f(id))
    }

    /// Width of `section` given the current viewport width.
    pub fn section_width(&self, section: usize, viewport_width: f64) -> f64 {
        self.section_width
            .as_ref()
            .map_or(viewport_width, |f| f(section))
    }

    /// Height of every separator.
    pub fn separator_height(&self) -> f64 {
        self.separator_height.unwrap_or(0.0)
    }

    /// Style applied to every separator.
    pub fn separator_style(&self) -> SeparatorStyle {
        SeparatorStyle::new(
            self.separator_color,
            self.separator_insets.unwrap_or(Insets::ZERO),
        )
    }
}
