// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Index: a small 2D AABB index for layout results.
//!
//! A layout pass produces a flat list of boxes; hosts then ask "which boxes are
//! inside this viewport?" many times before the next pass. This crate answers that
//! question.
//!
//! - Insert axis-aligned bounding boxes (AABBs) with a copyable payload.
//! - Query by rectangle, using positive-area intersection: boxes that only touch
//!   the query rectangle along an edge are not reported, and zero-area boxes are
//!   never reported.
//! - Clear and rebuild wholesale between passes.
//!
//! It does not depend on any geometry crate.
//!
//! Backends are pluggable via the [`Backend`] trait. The default backend is a flat
//! vector (linear scan). The [`Bands`](backends::Bands) backend, enabled by the
//! `backend_bands` feature, buckets boxes into horizontal bands so that viewport
//! queries over long vertical content only touch nearby boxes.
//!
//! ## Features
//!
//! - `backend_bands` *(default)*: enables the band backend, which uses `smallvec`.
//!
//! # Example
//!
//! ```rust
//! use trellis_index::{Aabb2D, Index};
//!
//! let mut idx: Index<f64, u32> = Index::new();
//! idx.insert(Aabb2D::new(0.0, 0.0, 320.0, 44.0), 1);
//! idx.insert(Aabb2D::new(0.0, 44.0, 320.0, 88.0), 2);
//!
//! // The query touches the second box only along its top edge.
//! let hits: Vec<_> = idx.query_rect(Aabb2D::new(0.0, 0.0, 320.0, 44.0)).collect();
//! assert_eq!(hits, vec![(0, 1)]);
//! ```
//!
//! With the `backend_bands` feature enabled (default):
//!
//! ```rust
//! # #[cfg(feature = "backend_bands")]
//! # {
//! use trellis_index::{Aabb2D, IndexGeneric, backends::Bands};
//!
//! let mut idx = IndexGeneric::<f64, u32, _>::with_backend(Bands::new(568.0));
//! for row in 0..1000_u32 {
//!     let y = f64::from(row) * 44.0;
//!     idx.insert(Aabb2D::new(0.0, y, 320.0, y + 44.0), row);
//! }
//!
//! let rows: Vec<_> = idx
//!     .query_rect(Aabb2D::new(0.0, 440.0, 320.0, 528.0))
//!     .map(|(_, row)| row)
//!     .collect();
//! assert_eq!(rows, vec![10, 11]);
//! # }
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. A query rectangle
//! with a NaN edge matches nothing.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod backend;
pub mod backends;
mod index;
mod types;

pub use backend::Backend;
pub use index::{Index, IndexGeneric};
pub use types::Aabb2D;
