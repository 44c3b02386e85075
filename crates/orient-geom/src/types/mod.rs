// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Core geometry types used to place bounding volumes (AABB, transform).
//!
//! - Containment and overlap are inclusive on faces.
//! - Affine math is plain `f32`; see `orient_core::math` for conventions.

#[doc = "Axis-aligned bounding boxes."]
pub mod aabb;
#[doc = "Translation/rotation/scale transforms."]
pub mod transform;
