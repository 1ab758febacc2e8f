// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The logical structure a layout walks: sections and their item counts.

use alloc::vec::Vec;

/// Read-only source of the section/item structure.
///
/// Counts must not change during a single [`compute_layout`](crate::compute_layout)
/// call. The engine never owns or mutates the structure.
pub trait StructureSource {
    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of items in `section`, for `section < section_count()`.
    fn item_count(&self, section: usize) -> usize;
}

impl<T: StructureSource + ?Sized> StructureSource for &T {
    fn section_count(&self) -> usize {
        (**self).section_count()
    }

    fn item_count(&self, section: usize) -> usize {
        (**self).item_count(section)
    }
}

/// A slice of per-section item counts.
impl StructureSource for [usize] {
    fn section_count(&self) -> usize {
        self.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.get(section).copied().unwrap_or(0)
    }
}

impl StructureSource for Vec<usize> {
    fn section_count(&self) -> usize {
        self.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.as_slice().item_count(section)
    }
}

/// Every section has the same number of items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct UniformStructure {
    /// Number of sections.
    pub sections: usize,
    /// Items in each section.
    pub items_per_section: usize,
}

impl UniformStructure {
    /// Creates a uniform structure.
    #[must_use]
    pub const fn new(sections: usize, items_per_section: usize) -> Self {
        Self {
            sections,
            items_per_section,
        }
    }
}

impl StructureSource for UniformStructure {
    fn section_count(&self) -> usize {
        self.sections
    }

    fn item_count(&self, section: usize) -> usize {
        if section < self.sections {
            self.items_per_section
        } else {
            0
        }
    }
}
