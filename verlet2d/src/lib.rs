// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! # Verlet2D
//!
//! A minimal 2D rigid-circle physics simulator. Bodies advance under a
//! uniform gravity field using Störmer–Verlet integration, and pairwise
//! circle overlaps are resolved with a direct, mass-weighted positional
//! correction.
//!
//! ## Features
//!
//! - **Störmer–Verlet integration**: velocity is encoded implicitly in the
//!   current/previous position pair, never stored
//! - **All-pairs collision detection**: O(n²) pairwise overlap tests with
//!   in-place resolution
//! - **Mass-weighted positional correction**: overlapping circles are pushed
//!   apart in proportion to the other body's share of the pair mass
//! - **Parallelization**: optional Rayon integration for the per-body force
//!   and integration loops
//!
//! ## Example
//!
//! ```rust
//! use verlet2d::{Body, Vec2, World};
//!
//! let mut world = World::new(0.1, Vec2::new(0.0, -9.81));
//! world.add_body(Body::new(Vec2::ZERO, Vec2::ZERO, 1.0, 1.0, 0.1));
//!
//! world.update();
//! assert!(world.bodies()[0].position().y < 0.0);
//! ```

#![warn(missing_docs)]

/// 2D vector arithmetic
pub mod vector;

/// Circular rigid-body state
pub mod body;

/// Pairwise overlap detection and positional resolution
pub mod collision;

/// Simulation container and tick orchestration
pub mod world;

pub use body::Body;
pub use vector::Vec2;
pub use world::World;
