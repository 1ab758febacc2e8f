// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for spatial indexing implementations.

use core::fmt::Debug;

use crate::types::Aabb2D;

/// Spatial backend abstraction used by [`IndexGeneric`][crate::IndexGeneric].
///
/// Slots are dense indices handed out by the index in insertion order. Backends
/// only store geometry, and are filled once per layout pass and then cleared.
pub trait Backend<T: Copy + PartialOrd + Debug> {
    /// Record the box of a new slot.
    fn insert(&mut self, slot: usize, aabb: Aabb2D<T>);

    /// Forget every slot.
    fn clear(&mut self);

    /// Visit slots whose AABB intersects the rectangle with positive area.
    ///
    /// Each matching slot is visited exactly once. The order is backend-dependent.
    fn visit_rect<F: FnMut(usize)>(&self, rect: Aabb2D<T>, f: F);
}
