// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Index` API and generic implementation over a pluggable backend.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::marker::PhantomData;

use crate::backend::Backend;
use crate::types::Aabb2D;

/// A generic AABB index parameterized by a spatial backend.
///
/// Entries are addressed by dense slots handed out in insertion order. The index
/// is meant to be filled once per layout pass and cleared before the next one, so
/// there is no per-entry removal.
#[derive(Debug)]
pub struct IndexGeneric<T: Copy + PartialOrd + Debug, P: Copy + Debug, B: Backend<T>> {
    payloads: Vec<P>,
    backend: B,
    scalar: PhantomData<T>,
}

impl<T, P, B> IndexGeneric<T, P, B>
where
    T: Copy + PartialOrd + Debug,
    P: Copy + Debug,
    B: Backend<T> + Default,
{
    /// Create an empty index using the backend's default constructor.
    pub fn new() -> Self {
        Self::with_backend(B::default())
    }
}

impl<T, P, B> IndexGeneric<T, P, B>
where
    T: Copy + PartialOrd + Debug,
    P: Copy + Debug,
    B: Backend<T>,
{
    /// Create an empty index using an explicit backend instance.
    ///
    /// This is how higher layers pick a backend that needs configuring, such as
    /// the band height of [`Bands`](crate::backends::Bands).
    pub fn with_backend(backend: B) -> Self {
        Self {
            payloads: Vec::new(),
            backend,
            scalar: PhantomData,
        }
    }

    /// Reserve space for at least `n` additional entries.
    pub fn reserve(&mut self, n: usize) {
        self.payloads.reserve(n);
    }

    /// Insert a new AABB with payload. Returns its slot.
    pub fn insert(&mut self, aabb: Aabb2D<T>, payload: P) -> usize {
        let slot = self.payloads.len();
        self.payloads.push(payload);
        self.backend.insert(slot, aabb);
        slot
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.payloads.clear();
        self.backend.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    /// Returns `true` if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// Entries whose AABB intersects `rect` with positive area.
    ///
    /// Results are `(slot, payload)` pairs in ascending slot order, whatever the
    /// backend visits first.
    pub fn query_rect(&self, rect: Aabb2D<T>) -> impl Iterator<Item = (usize, P)> + '_ {
        let mut slots = Vec::new();
        self.backend.visit_rect(rect, |slot| slots.push(slot));
        slots.sort_unstable();
        slots
            .into_iter()
            .filter_map(|slot| self.payloads.get(slot).map(|&p| (slot, p)))
    }
}

/// Default index using a flat vector backend.
pub type Index<T, P> = IndexGeneric<T, P, crate::backends::FlatVec<T>>;

impl<T: Copy + PartialOrd + Debug, P: Copy + Debug> Default for Index<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
