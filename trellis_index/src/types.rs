// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned boxes and the overlap test every backend shares.

/// Axis-aligned bounding box in 2D, given by its min and max corners.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb2D<T> {
    /// Left edge.
    pub min_x: T,
    /// Top edge.
    pub min_y: T,
    /// Right edge.
    pub max_x: T,
    /// Bottom edge.
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a box from its min and max corners.
    #[inline(always)]
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy + PartialOrd> Aabb2D<T> {
    /// The overlap of two boxes.
    ///
    /// Disjoint boxes produce an inverted box, which [`is_empty`][Self::is_empty]
    /// reports as empty.
    #[inline]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            min_x: later(self.min_x, other.min_x),
            min_y: later(self.min_y, other.min_y),
            max_x: earlier(self.max_x, other.max_x),
            max_y: earlier(self.max_y, other.max_y),
        }
    }

    /// Returns `true` if the box has no interior.
    ///
    /// Boxes with zero width or height are empty, as are inverted boxes and boxes
    /// with NaN edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.min_x < self.max_x && self.min_y < self.max_y)
    }

    /// Positive-area overlap: shared edges or corners do not count.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !self.intersect(other).is_empty()
    }
}

#[inline]
fn earlier<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline]
fn later<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

#[cfg(test)]
mod tests {
    use super::Aabb2D;

    #[test]
    fn zero_area_and_inverted_boxes_are_empty() {
        assert!(!Aabb2D::new(5.0, 7.0, 10.0, 9.0).is_empty());
        assert!(Aabb2D::new(5.0, 7.0, 5.0, 9.0).is_empty());
        assert!(Aabb2D::new(5.0, 7.0, 10.0, 7.0).is_empty());
        assert!(Aabb2D::new(5.0, 7.0, -10.0, 9.0).is_empty());
        assert!(Aabb2D::new(0.0, f64::NAN, 1.0, 1.0).is_empty());
    }

    #[test]
    fn corner_contact_is_not_an_intersection() {
        let a = Aabb2D::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb2D::new(10.0, 10.0, 20.0, 20.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn intersection_is_symmetric() {
        let a = Aabb2D::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb2D::new(9.5, -3.0, 12.0, 0.5);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert_eq!(a.intersect(&b), Aabb2D::new(9.5, 0.0, 10.0, 0.5));
    }

    #[test]
    fn zero_area_box_never_intersects() {
        let line = Aabb2D::new(0.0, 5.0, 10.0, 5.0);
        let all = Aabb2D::new(-100.0, -100.0, 100.0, 100.0);
        assert!(!line.intersects(&all));
        assert!(!all.intersects(&line));
    }
}
