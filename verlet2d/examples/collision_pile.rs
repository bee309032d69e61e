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
//! Collision Pile Example
//!
//! Spawns a deterministically seeded cloud of overlapping circles and lets
//! the all-pairs pass untangle it while gravity pulls the pile down. It
//! showcases:
//!
//! - O(n²) pairwise detection with interleaved positional resolution
//! - Mass-weighted correction on a heterogeneous pile
//! - Deterministic initial conditions from a seeded LCG
//! - Per-step timing statistics
//!
//! # Running
//!
//! ```bash
//! cargo run --example collision_pile --release
//!
//! # Larger pile, custom seed
//! cargo run --example collision_pile --release -- --bodies 500 --seed 42
//! ```

use std::time::Instant;
use verlet2d::{Body, Vec2, World};

/// Simple pseudo-random number generator for deterministic results
///
/// Linear congruential generator with Knuth's 64-bit multiplier; good
/// enough statistical properties for scattering initial conditions.
struct SimpleRng {
    state: u64,
}

/// Maximum value for the 53-bit mantissa (2^53) used in float conversion
const F64_MANTISSA_MAX: f64 = 9007199254740992.0;

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        // Upper 53 bits normalized to [0, 1)
        (self.next_u64() >> 11) as f64 / F64_MANTISSA_MAX
    }

    fn next_f64_range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }
}

struct PileConfig {
    num_bodies: usize,
    timestep: f64,
    steps: usize,
    seed: u64,
    spawn_extent: f64,
    radius_range: (f64, f64),
    mass_range: (f64, f64),
}

impl Default for PileConfig {
    fn default() -> Self {
        PileConfig {
            num_bodies: 100,
            timestep: 0.01,
            steps: 500,
            seed: 12345,
            spawn_extent: 10.0,
            radius_range: (0.3, 1.0),
            mass_range: (1.0, 10.0),
        }
    }
}

/// Count overlapping pairs without resolving them
fn count_overlaps(world: &World) -> usize {
    let bodies = world.bodies();
    let mut overlaps = 0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if bodies[i].collides_with(&bodies[j]) {
                overlaps += 1;
            }
        }
    }
    overlaps
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut config = PileConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bodies" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<usize>() {
                        Ok(value) => config.num_bodies = value,
                        Err(_) => {
                            eprintln!(
                                "Warning: Invalid bodies '{}', using default 100",
                                args[i + 1]
                            );
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --bodies requires an argument");
                    std::process::exit(1);
                }
            }
            "--steps" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<usize>() {
                        Ok(value) => config.steps = value,
                        Err(_) => {
                            eprintln!("Warning: Invalid steps '{}', using default 500", args[i + 1]);
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --steps requires an argument");
                    std::process::exit(1);
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<u64>() {
                        Ok(value) => config.seed = value,
                        Err(_) => {
                            eprintln!(
                                "Warning: Invalid seed '{}', using default 12345",
                                args[i + 1]
                            );
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --seed requires an argument");
                    std::process::exit(1);
                }
            }
            _ => {
                i += 1;
            }
        }
    }

    println!("==========================================================");
    println!("             Circle Pile Collision Simulation");
    println!("==========================================================");
    println!();
    println!("Configuration:");
    println!("  Bodies:   {}", config.num_bodies);
    println!("  Timestep: {:.3} s", config.timestep);
    println!("  Steps:    {}", config.steps);
    println!("  Seed:     {}", config.seed);
    println!();

    let mut rng = SimpleRng::new(config.seed);
    let mut world = World::new(config.timestep, Vec2::new(0.0, -9.81));

    for _ in 0..config.num_bodies {
        let position = Vec2::new(
            rng.next_f64_range(-config.spawn_extent, config.spawn_extent),
            rng.next_f64_range(-config.spawn_extent, config.spawn_extent),
        );
        let radius = rng.next_f64_range(config.radius_range.0, config.radius_range.1);
        let mass = rng.next_f64_range(config.mass_range.0, config.mass_range.1);
        world.add_body(Body::new(position, Vec2::ZERO, mass, radius, config.timestep));
    }

    let pairs = config.num_bodies * (config.num_bodies.saturating_sub(1)) / 2;
    println!(
        "Initial overlapping pairs: {} of {} tested per step",
        count_overlaps(&world),
        pairs
    );
    println!();

    let start = Instant::now();
    let mut step_times = Vec::with_capacity(config.steps);
    let report_every = (config.steps / 10).max(1);

    for step in 0..config.steps {
        let step_start = Instant::now();
        world.update();
        step_times.push(step_start.elapsed().as_secs_f64());

        if step % report_every == 0 {
            println!(
                "step {:5}: overlaps = {:4}, KE = {:10.2} J",
                step,
                count_overlaps(&world),
                world.total_kinetic_energy()
            );
        }
    }

    let total = start.elapsed();

    println!();
    println!("==========================================================");
    println!("                  SIMULATION COMPLETE");
    println!("==========================================================");
    println!("  Remaining overlaps: {}", count_overlaps(&world));
    println!("  Total time: {:.3} s", total.as_secs_f64());
    println!(
        "  Average step time: {:.3} ms",
        step_times.iter().sum::<f64>() / step_times.len() as f64 * 1000.0
    );
    println!(
        "  Pairwise tests per step: {} (O(n²) detection, no broad phase)",
        pairs
    );

    #[cfg(feature = "parallel")]
    println!("  Parallel integration: ENABLED");
    #[cfg(not(feature = "parallel"))]
    println!("  Parallel integration: DISABLED");
}
