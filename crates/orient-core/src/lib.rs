// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! orient-core: the geometry kernel underneath Orient's bounding volumes.
//!
//! Everything here is a small `Copy` value type operating in `f32`:
//! vectors, column-major matrices, quaternions, planes, rays and spheres.
//! Higher-level shapes (axis-aligned boxes, oriented boxes, frusta) live in
//! `orient-geom` and are built from these primitives.

pub mod math;
