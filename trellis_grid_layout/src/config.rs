// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration: flow direction and content-width policy.

/// How sections are arranged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flow {
    /// Every section stacks below the previous one at `x = 0`.
    #[default]
    Vertical,
    /// Sections strictly narrower than the viewport are laid out side by side as
    /// vertical strips sharing a common top edge. A section at least as wide as
    /// the viewport starts a new full-width band below the tallest strip.
    Paged,
}

/// How the content width reported after a pass is chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentWidth {
    /// Content is exactly as wide as the viewport.
    #[default]
    Viewport,
    /// Content is as wide as the right-most edge of any placed section. For a
    /// paged flow ending in narrow sections this is the final horizontal cursor.
    Extent,
}

/// Layout configuration.
///
/// ```
/// use trellis_grid_layout::{ContentWidth, Flow, LayoutConfig};
///
/// assert_eq!(LayoutConfig::default().flow, Flow::Vertical);
/// assert_eq!(LayoutConfig::paged().content_width, ContentWidth::Extent);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Section arrangement.
    pub flow: Flow,
    /// Content-width policy.
    pub content_width: ContentWidth,
}

impl LayoutConfig {
    /// Vertical flow, content as wide as the viewport.
    #[must_use]
    pub const fn vertical() -> Self {
        Self {
            flow: Flow::Vertical,
            content_width: ContentWidth::Viewport,
        }
    }

    /// Paged flow, content as wide as the placed sections.
    #[must_use]
    pub const fn paged() -> Self {
        Self {
            flow: Flow::Paged,
            content_width: ContentWidth::Extent,
        }
    }

    /// Replaces the content-width policy.
    #[must_use]
    pub const fn with_content_width(mut self, content_width: ContentWidth) -> Self {
        self.content_width = content_width;
        self
    }
}
