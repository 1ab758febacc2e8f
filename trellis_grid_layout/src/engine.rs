// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine: owns the last completed pass and answers queries against it.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Rect, Size};
use trellis_index::{Aabb2D, Backend, IndexGeneric, backends::FlatVec};

use crate::config::LayoutConfig;
use crate::pass::{LayoutSnapshot, compute_layout};
use crate::sizing::SizingPolicy;
use crate::structure::StructureSource;
use crate::types::{ElementId, ElementKinds, PlacedElement, SEPARATOR_DECORATION_KIND};

/// Whether the cached layout reflects the current structure and viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutState {
    /// The structure or viewport changed since the last completed pass (or no pass
    /// has run yet). Queries still answer from the last completed pass.
    Stale,
    /// A pass has completed and nothing has been invalidated since.
    Fresh,
}

/// Section/item layout engine.
///
/// The type parameter `B` selects the spatial index backend used by
/// [`GridLayout::query`]. It defaults to a flat-vector backend, which is the
/// right choice for a few hundred elements; very long tables can opt into
/// [`Bands`](trellis_index::backends::Bands) via [`GridLayout::with_backend`].
///
/// A pass replaces every cached element at once. There is no incremental update.
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use trellis_grid_layout::{ElementId, GridLayout, SizingPolicy, UniformStructure};
///
/// let sizing = SizingPolicy::new()
///     .uniform_header_height(50.0)
///     .uniform_item_height(44.0);
///
/// let mut layout = GridLayout::new();
/// let size = layout.compute_layout(&UniformStructure::new(2, 10), 320.0, &sizing);
/// assert_eq!(size.height, 2.0 * (50.0 + 10.0 * 44.0));
///
/// // The first screenful.
/// let visible = layout.query(Rect::new(0.0, 0.0, 320.0, 480.0));
/// assert_eq!(visible.first().map(|e| e.id), Some(ElementId::header(0)));
///
/// let item = layout.lookup(ElementId::item(1, 0)).unwrap();
/// assert_eq!(item.frame.y0, 490.0 + 50.0);
/// ```
pub struct GridLayout<B: Backend<f64> = FlatVec<f64>> {
    config: LayoutConfig,
    state: LayoutState,
    snapshot: LayoutSnapshot,
    by_id: HashMap<ElementId, usize>,
    index: IndexGeneric<f64, usize, B>,
}

impl<B: Backend<f64> + core::fmt::Debug> core::fmt::Debug for GridLayout<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridLayout")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("elements", &self.snapshot.elements.len())
            .field("content_size", &self.snapshot.content_size)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<B: Backend<f64> + Default> Default for GridLayout<B> {
    fn default() -> Self {
        Self::with_backend(B::default())
    }
}

impl GridLayout {
    /// Create an engine with the default configuration and a flat-vector index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with `config` and a flat-vector index.
    pub fn with_config(config: LayoutConfig) -> Self {
        let mut layout = Self::default();
        layout.config = config;
        layout
    }
}

impl<B: Backend<f64>> GridLayout<B> {
    /// Create an engine with the default configuration using an explicit index backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            config: LayoutConfig::default(),
            state: LayoutState::Stale,
            snapshot: LayoutSnapshot::default(),
            by_id: HashMap::new(),
            index: IndexGeneric::with_backend(backend),
        }
    }

    /// The current configuration.
    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    /// Replace the configuration. Marks the layout stale if it changed.
    pub fn set_config(&mut self, config: LayoutConfig) {
        if config != self.config {
            self.config = config;
            self.invalidate();
        }
    }

    /// Decoration kinds this engine produces. Registered once, at construction.
    pub fn decoration_kinds(&self) -> &'static [&'static str] {
        &[SEPARATOR_DECORATION_KIND]
    }

    /// Run a full layout pass and make it the current snapshot.
    ///
    /// The pass is computed completely before any cached state is touched, so a
    /// panicking sizing callback leaves the previous snapshot in place.
    ///
    /// Returns the new content size.
    pub fn compute_layout<S: StructureSource + ?Sized>(
        &mut self,
        structure: &S,
        viewport_width: f64,
        sizing: &SizingPolicy,
    ) -> Size {
        let snapshot = compute_layout(structure, viewport_width, sizing, self.config);

        self.by_id.clear();
        self.by_id.reserve(snapshot.elements.len());
        self.index.clear();
        self.index.reserve(snapshot.elements.len());
        for (i, element) in snapshot.elements.iter().enumerate() {
            let previous = self.by_id.insert(element.id, i);
            debug_assert!(
                previous.is_none(),
                "element identity placed twice in one pass: {:?}",
                element.id
            );
            let slot = self.index.insert(rect_to_aabb(element.frame), i);
            debug_assert_eq!(slot, i, "index slots must follow placement order");
        }
        self.snapshot = snapshot;
        self.state = LayoutState::Fresh;

        log::debug!(
            "layout pass: {} elements, content {}x{}",
            self.snapshot.elements.len(),
            self.snapshot.content_size.width,
            self.snapshot.content_size.height
        );
        self.snapshot.content_size
    }

    /// Mark the layout stale after a structure change.
    pub fn invalidate(&mut self) {
        if self.state == LayoutState::Fresh {
            log::debug!("layout invalidated");
        }
        self.state = LayoutState::Stale;
    }

    /// Mark the layout stale after a viewport bounds change.
    ///
    /// Always returns `true`: any bounds change (including scrolling) may change
    /// section widths, so the host must run a new pass.
    pub fn invalidate_for_bounds_change(&mut self, new_bounds: Rect) -> bool {
        log::trace!("bounds changed to {new_bounds:?}");
        self.invalidate();
        true
    }

    /// Elements whose frame overlaps `rect` with positive area, in placement order.
    ///
    /// Elements that only touch `rect` along an edge are excluded, as are zero-area
    /// elements.
    pub fn query(&self, rect: Rect) -> Vec<PlacedElement> {
        self.query_kinds(rect, ElementKinds::all())
    }

    /// Like [`query`][Self::query], restricted to the given element kinds.
    pub fn query_kinds(&self, rect: Rect, kinds: ElementKinds) -> Vec<PlacedElement> {
        self.index
            .query_rect(rect_to_aabb(rect))
            .filter_map(|(_, i)| self.snapshot.elements.get(i))
            .filter(|e| kinds.contains(e.kind().into()))
            .copied()
            .collect()
    }

    /// The element with identity `id` from the last completed pass, if any.
    pub fn lookup(&self, id: ElementId) -> Option<&PlacedElement> {
        let i = *self.by_id.get(&id)?;
        self.snapshot.elements.get(i)
    }

    /// Item `item` of `section`.
    pub fn item_at(&self, section: usize, item: usize) -> Option<&PlacedElement> {
        self.lookup(ElementId::item(section, item))
    }

    /// Header of `section`.
    pub fn header_at(&self, section: usize) -> Option<&PlacedElement> {
        self.lookup(ElementId::header(section))
    }

    /// Footer of `section`.
    pub fn footer_at(&self, section: usize) -> Option<&PlacedElement> {
        self.lookup(ElementId::footer(section))
    }

    /// Separator following item `item` of `section`.
    pub fn separator_at(&self, section: usize, item: usize) -> Option<&PlacedElement> {
        self.lookup(ElementId::separator(section, item))
    }

    /// Size of the content produced by the last completed pass.
    pub fn content_size(&self) -> Size {
        self.snapshot.content_size
    }

    /// Every element of the last completed pass, in placement order.
    pub fn elements(&self) -> &[PlacedElement] {
        &self.snapshot.elements
    }

    /// Number of placed elements.
    pub fn len(&self) -> usize {
        self.snapshot.elements.len()
    }

    /// Returns `true` if the last completed pass placed nothing (or none has run).
    pub fn is_empty(&self) -> bool {
        self.snapshot.elements.is_empty()
    }

    /// Current state.
    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// Returns `true` if the cached layout is up to date.
    pub fn is_fresh(&self) -> bool {
        self.state == LayoutState::Fresh
    }
}

fn rect_to_aabb(r: Rect) -> Aabb2D<f64> {
    Aabb2D::new(r.x0, r.y0, r.x1, r.y1)
}
