// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal band backend for tall, vertically flowing content.
//!
//! The content is cut into horizontal bands of fixed height, and each box is
//! listed in every band its vertical extent covers. A query walks only the
//! occupied bands between the top and bottom of the query rectangle, so its cost
//! follows the number of stored boxes near the rectangle, never the rectangle's
//! area. The x axis is not bucketed: a table places one box per row, and paged
//! strips add only a handful of columns.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt::Debug;

use smallvec::SmallVec;

use crate::backend::Backend;
use crate::types::Aabb2D;

/// Boxes covering more bands than this are kept on a separate list that every
/// query scans.
const MAX_BAND_SPAN: i64 = 64;

/// Band backend over `f64` coordinates.
///
/// A band about as tall as the viewport keeps a typical query to two or three
/// bands.
pub struct Bands {
    band_height: f64,
    bands: BTreeMap<i64, SmallVec<[usize; 8]>>,
    // Boxes spanning more than `MAX_BAND_SPAN` bands.
    tall: Vec<usize>,
    entries: Vec<Option<Banded>>,
}

#[derive(Copy, Clone, Debug)]
struct Banded {
    aabb: Aabb2D<f64>,
    // First band holding this box, or `None` when it lives on the tall list.
    first_band: Option<i64>,
}

impl Bands {
    /// Create an empty backend with bands `band_height` tall.
    pub fn new(band_height: f64) -> Self {
        debug_assert!(
            band_height > 0.0 && band_height.is_finite(),
            "band height must be positive and finite, got {band_height}"
        );
        Self {
            band_height,
            bands: BTreeMap::new(),
            tall: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Height of one band.
    pub fn band_height(&self) -> f64 {
        self.band_height
    }

    /// Number of bands holding at least one box.
    pub fn occupied_bands(&self) -> usize {
        self.bands.len()
    }

    /// Band containing `y`, rounding towards negative infinity.
    ///
    /// Coordinates beyond the `i64` range saturate, which keeps the mapping
    /// monotonic.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Band indices saturate for coordinates beyond the i64 range."
    )]
    fn band_of(&self, y: f64) -> i64 {
        let t = y / self.band_height;
        let band = t as i64;
        if (band as f64) > t {
            band.saturating_sub(1)
        } else {
            band
        }
    }
}

impl Debug for Bands {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bands")
            .field("band_height", &self.band_height)
            .field("occupied_bands", &self.bands.len())
            .field("tall", &self.tall.len())
            .field("slots", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Backend<f64> for Bands {
    fn insert(&mut self, slot: usize, aabb: Aabb2D<f64>) {
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        debug_assert!(
            self.entries[slot].is_none(),
            "slot {slot} inserted twice without a clear"
        );

        // Zero-area boxes never match a query.
        if aabb.is_empty() {
            return;
        }

        let first = self.band_of(aabb.min_y);
        let last = self.band_of(aabb.max_y);
        let first_band = if last.saturating_sub(first) > MAX_BAND_SPAN {
            self.tall.push(slot);
            None
        } else {
            for band in first..=last {
                self.bands.entry(band).or_default().push(slot);
            }
            Some(first)
        };
        self.entries[slot] = Some(Banded { aabb, first_band });
    }

    fn clear(&mut self) {
        self.bands.clear();
        self.tall.clear();
        self.entries.clear();
    }

    fn visit_rect<F: FnMut(usize)>(&self, rect: Aabb2D<f64>, mut f: F) {
        if rect.is_empty() {
            return;
        }
        let top = self.band_of(rect.min_y);
        let bottom = self.band_of(rect.max_y);

        for (&band, slots) in self.bands.range(top..=bottom) {
            for &slot in slots {
                let Some(Some(entry)) = self.entries.get(slot) else {
                    continue;
                };
                // A box spanning several bands is reported from the first band
                // it shares with the query.
                let Some(first) = entry.first_band else {
                    continue;
                };
                if band == first.max(top) && entry.aabb.intersects(&rect) {
                    f(slot);
                }
            }
        }

        for &slot in &self.tall {
            if let Some(Some(entry)) = self.entries.get(slot)
                && entry.aabb.intersects(&rect)
            {
                f(slot);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn hits(bands: &Bands, rect: Aabb2D<f64>) -> Vec<usize> {
        let mut out = Vec::new();
        bands.visit_rect(rect, |s| out.push(s));
        out.sort_unstable();
        out
    }

    fn rows(count: usize, height: f64) -> Bands {
        let mut bands = Bands::new(100.0);
        for row in 0..count {
            let y = row as f64 * height;
            bands.insert(row, Aabb2D::new(0.0, y, 320.0, y + height));
        }
        bands
    }

    #[test]
    fn box_spanning_several_bands_is_reported_once() {
        let mut bands = Bands::new(10.0);
        bands.insert(0, Aabb2D::new(0.0, 5.0, 10.0, 45.0));
        assert_eq!(bands.occupied_bands(), 5);

        assert_eq!(hits(&bands, Aabb2D::new(0.0, 0.0, 10.0, 50.0)), vec![0]);
        assert_eq!(hits(&bands, Aabb2D::new(0.0, 22.0, 10.0, 38.0)), vec![0]);
        assert_eq!(hits(&bands, Aabb2D::new(0.0, 45.0, 10.0, 60.0)), Vec::<usize>::new());
    }

    #[test]
    fn viewport_query_matches_linear_scan() {
        let bands = rows(200, 44.0);
        for i in 0..60 {
            let top = i as f64 * 97.25 - 50.0;
            let rect = Aabb2D::new(0.0, top, 320.0, top + 568.0);
            let expected: Vec<usize> = (0..200)
                .filter(|&row| {
                    let y = row as f64 * 44.0;
                    Aabb2D::new(0.0, y, 320.0, y + 44.0).intersects(&rect)
                })
                .collect();
            assert_eq!(hits(&bands, rect), expected, "mismatch at top {top}");
        }
    }

    #[test]
    fn huge_query_visits_only_occupied_bands() {
        let bands = rows(4, 44.0);
        let all = vec![0, 1, 2, 3];
        assert_eq!(hits(&bands, Aabb2D::new(-2e6, -2e6, 2e6, 2e6)), all);
        assert_eq!(hits(&bands, Aabb2D::new(-1e300, -1e300, 1e300, 1e300)), all);
        assert_eq!(
            hits(&bands, Aabb2D::new(f64::MIN, f64::MIN, f64::MAX, f64::MAX)),
            all
        );
    }

    #[test]
    fn negative_coordinates_round_down() {
        let mut bands = Bands::new(10.0);
        bands.insert(0, Aabb2D::new(0.0, -15.0, 10.0, -5.0));
        assert_eq!(hits(&bands, Aabb2D::new(0.0, -6.0, 10.0, -1.0)), vec![0]);
        assert_eq!(hits(&bands, Aabb2D::new(0.0, -5.0, 10.0, 0.0)), Vec::<usize>::new());
    }

    #[test]
    fn very_tall_box_goes_on_the_tall_list() {
        let mut bands = Bands::new(1.0);
        bands.insert(0, Aabb2D::new(0.0, 0.0, 10.0, 1e12));
        bands.insert(1, Aabb2D::new(20.0, 5.0, 30.0, 6.0));
        assert_eq!(bands.occupied_bands(), 2);

        assert_eq!(hits(&bands, Aabb2D::new(0.0, 5.0, 30.0, 6.0)), vec![0, 1]);
        assert_eq!(hits(&bands, Aabb2D::new(0.0, 1e11, 10.0, 2e11)), vec![0]);
    }

    #[test]
    fn zero_area_boxes_and_queries_match_nothing() {
        let mut bands = Bands::new(10.0);
        bands.insert(0, Aabb2D::new(0.0, 5.0, 10.0, 5.0));
        bands.insert(1, Aabb2D::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(hits(&bands, Aabb2D::new(-5.0, -5.0, 20.0, 20.0)), vec![1]);
        assert!(hits(&bands, Aabb2D::new(0.0, 5.0, 10.0, 5.0)).is_empty());
    }

    #[test]
    fn clear_forgets_everything() {
        let mut bands = rows(10, 44.0);
        bands.clear();
        assert_eq!(bands.occupied_bands(), 0);
        assert!(hits(&bands, Aabb2D::new(0.0, 0.0, 320.0, 440.0)).is_empty());

        bands.insert(0, Aabb2D::new(0.0, 0.0, 320.0, 44.0));
        assert_eq!(hits(&bands, Aabb2D::new(0.0, 0.0, 320.0, 440.0)), vec![0]);
    }
}
