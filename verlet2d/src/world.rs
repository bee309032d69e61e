//! World management
//!
//! The World owns the body collection, the fixed timestep, and the gravity
//! vector, and orchestrates one simulation tick: resolve collisions, apply
//! gravity, integrate.

use crate::body::Body;
use crate::collision;
use crate::vector::Vec2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The simulation container
///
/// A `World` exclusively owns an insertion-ordered collection of bodies.
/// The timestep and gravity are fixed at construction; changing them
/// mid-simulation is unsupported. A world must be owned by one execution
/// context at a time — there is no internal synchronization of the body
/// collection.
///
/// # Examples
///
/// ```
/// use verlet2d::{Body, Vec2, World};
///
/// let mut world = World::new(0.1, Vec2::new(0.0, -9.81));
/// world.add_body(Body::new(Vec2::ZERO, Vec2::ZERO, 1.0, 1.0, world.time_step()));
///
/// for _ in 0..10 {
///     world.update();
/// }
/// assert_eq!(world.body_count(), 1);
/// ```
pub struct World {
    bodies: Vec<Body>,
    time_step: f64,
    gravity: Vec2,
}

impl World {
    /// Create a new empty world with a fixed timestep and gravity vector
    ///
    /// # Panics
    ///
    /// Panics if the timestep is non-positive, NaN, or infinite. For
    /// fallible construction, use [`try_new`](World::try_new).
    pub fn new(time_step: f64, gravity: Vec2) -> Self {
        assert!(
            time_step > 0.0 && time_step.is_finite(),
            "Timestep must be positive and finite"
        );

        World {
            bodies: Vec::new(),
            time_step,
            gravity,
        }
    }

    /// Try to create a new world with a fixed timestep and gravity vector
    ///
    /// Returns `None` if the timestep is non-positive, NaN, or infinite.
    pub fn try_new(time_step: f64, gravity: Vec2) -> Option<Self> {
        if time_step > 0.0 && time_step.is_finite() {
            Some(World::new(time_step, gravity))
        } else {
            None
        }
    }

    /// Append a body to the simulation
    ///
    /// Bodies may be added any time between ticks. Removal during
    /// simulation is not supported, so indices into [`bodies`](World::bodies)
    /// are stable across a tick.
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Read access to the bodies, in insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Get the fixed timestep in seconds
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Get the gravity vector in m/s²
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Advance the simulation by exactly one timestep
    ///
    /// Runs to completion before returning, in strict order:
    ///
    /// 1. Collision pass: all pairs in ascending order, detection and
    ///    resolution interleaved (sequential — a pair's resolution can
    ///    influence later pairs in the same pass).
    /// 2. Gravity is accumulated into every body's acceleration.
    /// 3. Every body takes one Verlet step, consuming and resetting its
    ///    acceleration.
    ///
    /// Step 3 begins only after step 2 has completed for all bodies, so
    /// each step integrates the full set of forces for the tick. Bodies
    /// are independent of each other within steps 2 and 3; with the
    /// `parallel` feature those two loops fan out across threads via
    /// Rayon while preserving the step boundary.
    pub fn update(&mut self) {
        collision::check_collisions(&mut self.bodies);

        let gravity = self.gravity;
        let dt = self.time_step;

        #[cfg(feature = "parallel")]
        {
            self.bodies
                .par_iter_mut()
                .for_each(|body| body.apply_acceleration(gravity));
            self.bodies.par_iter_mut().for_each(|body| body.integrate(dt));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for body in &mut self.bodies {
                body.apply_acceleration(gravity);
            }
            for body in &mut self.bodies {
                body.integrate(dt);
            }
        }
    }

    /// Run one collision pass without integrating
    ///
    /// Exposed for diagnostic and test use; [`update`](World::update) runs
    /// this automatically as its first step.
    pub fn check_collisions(&mut self) {
        collision::check_collisions(&mut self.bodies);
    }

    /// Total kinetic energy of the system
    ///
    /// KE = Σ ½·m·|v|², with velocity reconstructed from each body's
    /// position history. Useful for drift tracking in drivers and tests.
    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .map(|body| {
                let v = body.velocity(self.time_step);
                0.5 * body.mass() * v.magnitude_squared()
            })
            .sum()
    }
}
