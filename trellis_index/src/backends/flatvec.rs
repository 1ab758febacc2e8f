// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend: a linear scan over every box.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::Aabb2D;

/// Linear-scan backend.
///
/// Queries are `O(n)`, but with no per-query allocation and excellent cache
/// behavior this is the right choice for a few hundred boxes.
pub struct FlatVec<T: Copy + PartialOrd + Debug> {
    boxes: Vec<Option<Aabb2D<T>>>,
}

impl<T: Copy + PartialOrd + Debug> Default for FlatVec<T> {
    fn default() -> Self {
        Self { boxes: Vec::new() }
    }
}

impl<T: Copy + PartialOrd + Debug> Debug for FlatVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("slots", &self.boxes.len())
            .finish_non_exhaustive()
    }
}

impl<T: Copy + PartialOrd + Debug> Backend<T> for FlatVec<T> {
    fn insert(&mut self, slot: usize, aabb: Aabb2D<T>) {
        if self.boxes.len() <= slot {
            self.boxes.resize_with(slot + 1, || None);
        }
        self.boxes[slot] = Some(aabb);
    }

    fn clear(&mut self) {
        self.boxes.clear();
    }

    fn visit_rect<F: FnMut(usize)>(&self, rect: Aabb2D<T>, mut f: F) {
        for (slot, aabb) in self.boxes.iter().enumerate() {
            if let Some(aabb) = aabb
                && aabb.intersects(&rect)
            {
                f(slot);
            }
        }
    }
}
