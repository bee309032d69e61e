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
//! Pairwise circle-circle detection and positional resolution
//!
//! Detection is all-pairs, O(n²): every unordered pair `(i, j)` with
//! `i < j` is tested exactly once per tick in ascending lexicographic
//! order. Detection and resolution are interleaved pair-by-pair, so
//! resolving pair `(i, j)` can move positions that affect a later pair
//! `(i, k)` evaluated in the same pass. That ordering dependency is part
//! of the observable behavior; the pass is deliberately sequential and
//! must not be parallelized without redesigning the conflict-resolution
//! order. Pairs are not re-checked after resolution within a pass.
//!
//! # Algorithm
//!
//! Resolution is a purely kinematic positional correction, not an impulse
//! exchange: overlapping circles are displaced along the center-to-center
//! normal, split in proportion to the *other* body's share of the pair
//! mass, so heavier bodies move less. No velocity or momentum is
//! exchanged; post-resolution trajectories are de-overlapped, not bounced.

use crate::body::Body;

/// Run one all-pairs collision pass over the bodies, in place
///
/// Visits pairs in ascending `(i, j)` order with `i < j` and resolves each
/// detected overlap immediately. Bodies farther apart than the sum of
/// their radii are left untouched.
pub fn check_collisions(bodies: &mut [Body]) {
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let first = &mut head[i];
        for second in tail.iter_mut() {
            if first.collides_with(second) {
                resolve_pair(first, second);
            }
        }
    }
}

/// Push two overlapping bodies apart along the center-to-center normal
///
/// The overlap is split by mass: the first body moves by
/// `-normal * overlap * (m2 / (m1 + m2))` and the second by
/// `+normal * overlap * (m1 / (m1 + m2))`.
///
/// Exactly coincident centers leave no direction to separate along; that
/// degenerate pair is skipped entirely and remains overlapping. This is a
/// documented limitation, not an error.
pub fn resolve_pair(first: &mut Body, second: &mut Body) {
    let normal = second.position() - first.position();
    let distance = normal.magnitude();

    if distance == 0.0 {
        return;
    }

    let overlap = (first.radius() + second.radius()) - distance;
    let normal = normal / distance;

    let total_mass = first.mass() + second.mass();
    first.translate(-normal * (overlap * (second.mass() / total_mass)));
    second.translate(normal * (overlap * (first.mass() / total_mass)));
}
