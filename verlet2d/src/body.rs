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
//! Circular rigid-body state and Störmer–Verlet stepping
//!
//! A [`Body`] stores its current and previous position rather than an
//! explicit velocity. The pair implicitly encodes velocity, which is the
//! intended design of the position-Verlet scheme: do not add a redundant
//! velocity field, as it could desynchronize from the position history.
//!
//! # Algorithm
//!
//! Each tick the body advances with the Störmer–Verlet recurrence:
//!
//! ```text
//! x(t + dt) = 2*x(t) - x(t - dt) + a(t)*dt²
//! ```
//!
//! The acceleration accumulator collects forces applied during the current
//! tick only and is reset to zero exactly once per tick, after integration
//! consumes it.
//!
//! # References
//!
//! - Verlet, L. (1967). Computer "Experiments" on Classical Fluids. I.
//!   Thermodynamical Properties of Lennard-Jones Molecules.
//!   Physical Review, 159(1), 98-103.

use crate::vector::Vec2;

/// A circular rigid body
///
/// Bodies are constructed from an initial position/velocity pair and then
/// owned and mutated exclusively by a [`World`](crate::World) for their
/// entire lifetime. The only mutating operations exposed are the two the
/// simulation tick needs: [`apply_acceleration`](Body::apply_acceleration)
/// and [`integrate`](Body::integrate).
///
/// # Examples
///
/// ```
/// use verlet2d::{Body, Vec2};
///
/// let body = Body::new(Vec2::new(0.0, 10.0), Vec2::new(1.0, 0.0), 2.0, 0.5, 0.1);
/// assert_eq!(body.position(), Vec2::new(0.0, 10.0));
/// assert_eq!(body.radius(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    position: Vec2,
    last_position: Vec2,
    acceleration: Vec2,
    mass: f64,
    radius: f64,
}

impl Body {
    /// Create a new body from initial conditions
    ///
    /// The previous position is back-extrapolated as
    /// `position - velocity * time_step` so that the first integration step
    /// reproduces the given initial velocity.
    ///
    /// # Panics
    ///
    /// Panics if mass is non-positive or not finite, radius is negative or
    /// not finite, or the timestep is non-positive or not finite. For
    /// fallible construction, use [`try_new`](Body::try_new).
    pub fn new(position: Vec2, velocity: Vec2, mass: f64, radius: f64, time_step: f64) -> Self {
        assert!(
            mass > 0.0 && mass.is_finite(),
            "Mass must be positive and finite"
        );
        assert!(
            radius >= 0.0 && radius.is_finite(),
            "Radius must be non-negative and finite"
        );
        assert!(
            time_step > 0.0 && time_step.is_finite(),
            "Timestep must be positive and finite"
        );

        Body {
            position,
            last_position: position - velocity * time_step,
            acceleration: Vec2::ZERO,
            mass,
            radius,
        }
    }

    /// Try to create a new body from initial conditions
    ///
    /// Returns `None` if mass is non-positive or not finite, radius is
    /// negative or not finite, or the timestep is non-positive or not
    /// finite. Rejecting these at construction prevents them from silently
    /// corrupting the mass-weighted division during collision resolution.
    pub fn try_new(
        position: Vec2,
        velocity: Vec2,
        mass: f64,
        radius: f64,
        time_step: f64,
    ) -> Option<Self> {
        if mass > 0.0
            && mass.is_finite()
            && radius >= 0.0
            && radius.is_finite()
            && time_step > 0.0
            && time_step.is_finite()
        {
            Some(Body::new(position, velocity, mass, radius, time_step))
        } else {
            None
        }
    }

    /// Get the current position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Get the position one tick ago
    pub fn last_position(&self) -> Vec2 {
        self.last_position
    }

    /// Get the acceleration accumulated so far this tick
    ///
    /// Outside of an [`update`](crate::World::update) this is always the
    /// zero vector.
    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Get the mass in kilograms
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Get the circle radius in meters
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Derive the velocity from the position history
    ///
    /// The Verlet scheme never stores velocity; this reconstructs it as
    /// `(position - last_position) / time_step` for diagnostics and
    /// rendering. `time_step` must be the same fixed step the owning world
    /// integrates with.
    pub fn velocity(&self, time_step: f64) -> Vec2 {
        (self.position - self.last_position) / time_step
    }

    /// Test whether this body overlaps another
    ///
    /// Pure, symmetric predicate: true iff the distance between centers is
    /// strictly less than the sum of radii. Two circles exactly touching do
    /// not collide.
    ///
    /// # Examples
    ///
    /// ```
    /// use verlet2d::{Body, Vec2};
    ///
    /// let a = Body::new(Vec2::ZERO, Vec2::ZERO, 1.0, 1.0, 0.1);
    /// let b = Body::new(Vec2::new(1.5, 0.0), Vec2::ZERO, 1.0, 1.0, 0.1);
    /// assert!(a.collides_with(&b));
    /// assert!(b.collides_with(&a));
    /// ```
    pub fn collides_with(&self, other: &Body) -> bool {
        let radii = self.radius + other.radius;
        // Squared comparison preserves the strict-< semantics without a sqrt
        (self.position - other.position).magnitude_squared() < radii * radii
    }

    /// Accumulate an acceleration for the current tick
    ///
    /// Additive: multiple force sources compose within one tick. The world
    /// applies gravity through this each tick; the accumulator is consumed
    /// and reset by [`integrate`](Body::integrate).
    pub fn apply_acceleration(&mut self, acceleration: Vec2) {
        self.acceleration += acceleration;
    }

    /// Advance one Störmer–Verlet step with the given fixed timestep
    ///
    /// Consumes the acceleration accumulated this tick and resets it to
    /// zero. Called once per body per tick by the owning world, strictly
    /// after all accelerations for the tick have been applied.
    pub fn integrate(&mut self, dt: f64) {
        let next_position = self.position * 2.0 - self.last_position + self.acceleration * (dt * dt);
        self.last_position = self.position;
        self.position = next_position;
        self.acceleration = Vec2::ZERO;
    }

    /// Displace the body during collision resolution
    pub(crate) fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }
}
