// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Errors reported when building or re-deriving bounding volumes.
//!
//! Queries never fail: misses are `false` or `None`. Errors only arise from
//! invalid inputs handed to constructors and `update`.

use thiserror::Error;

/// Invalid-input errors for geometry construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// The local-to-world transform of an oriented box cannot be inverted.
    ///
    /// Typically a zero scale on some axis. The box's derived state is left
    /// as it was before the failed update.
    #[error("transform is not invertible (determinant {determinant})")]
    SingularTransform {
        /// Determinant of the rejected matrix.
        determinant: f32,
    },

    /// A view-projection matrix cannot be inverted, so frustum corners
    /// cannot be unprojected.
    #[error("view-projection matrix is not invertible (determinant {determinant})")]
    SingularProjection {
        /// Determinant of the rejected matrix.
        determinant: f32,
    },

    /// Box bounds where some `min` component exceeds its `max` counterpart.
    #[error("invalid bounds: min {min:?} exceeds max {max:?}")]
    InvalidBounds {
        /// Requested minimum corner.
        min: [f32; 3],
        /// Requested maximum corner.
        max: [f32; 3],
    },
}
