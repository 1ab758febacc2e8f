// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different spatial strategies.
//!
//! - `flatvec`: flat vector with linear scans (small, simple, the default).
//! - `bands` (feature `backend_bands`): horizontal bands for long vertical content.
//!
//! Layout passes rebuild the index from scratch, so neither backend supports
//! in-place updates.

pub(crate) mod flatvec;
#[cfg(feature = "backend_bands")]
pub(crate) mod bands;

#[cfg(feature = "backend_bands")]
pub use bands::Bands;
pub use flatvec::FlatVec;
