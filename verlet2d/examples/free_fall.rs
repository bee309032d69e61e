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
//! Free Fall Example
//!
//! Drops a small column of circles under gravity and prints positions and
//! reconstructed velocities at intervals. This is the driving loop the
//! simulator treats as an external collaborator: it owns the frame cadence
//! and reads back each body's position and radius after every tick.
//!
//! # Running
//!
//! ```bash
//! cargo run --example free_fall
//!
//! # Custom step count and timestep
//! cargo run --example free_fall -- --steps 200 --timestep 0.05
//! ```

use verlet2d::{Body, Vec2, World};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut steps: usize = 100;
    let mut timestep: f64 = 0.1;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--steps" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<usize>() {
                        Ok(value) => steps = value,
                        Err(_) => {
                            eprintln!("Warning: Invalid steps '{}', using default 100", args[i + 1]);
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --steps requires an argument");
                    std::process::exit(1);
                }
            }
            "--timestep" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<f64>() {
                        Ok(value) if value > 0.0 && value.is_finite() => timestep = value,
                        _ => {
                            eprintln!(
                                "Warning: Invalid timestep '{}', using default 0.1 s",
                                args[i + 1]
                            );
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --timestep requires an argument");
                    std::process::exit(1);
                }
            }
            _ => {
                i += 1;
            }
        }
    }

    println!("=== Free Fall Simulation ===");
    println!("Timestep: {:.3} s, Steps: {}", timestep, steps);
    println!();

    let mut world = World::new(timestep, Vec2::new(0.0, -9.81));

    // A vertical column of three circles, spaced so they stay contact-free
    for level in 0..3 {
        world.add_body(Body::new(
            Vec2::new(0.0, 50.0 + level as f64 * 3.0),
            Vec2::ZERO,
            1.0 + level as f64,
            1.0,
            timestep,
        ));
    }

    println!(
        "Dropping {} bodies from rest under g = {:?} m/s²",
        world.body_count(),
        world.gravity()
    );
    println!();

    let report_every = (steps / 10).max(1);
    for step in 0..steps {
        world.update();

        if step % report_every == 0 || step == steps - 1 {
            let time = (step + 1) as f64 * timestep;
            println!("t = {:6.2} s", time);
            for (index, body) in world.bodies().iter().enumerate() {
                let velocity = body.velocity(timestep);
                println!(
                    "  body {}: pos = ({:8.3}, {:8.3}) m, vel = ({:7.3}, {:7.3}) m/s, r = {:.1} m",
                    index,
                    body.position().x,
                    body.position().y,
                    velocity.x,
                    velocity.y,
                    body.radius()
                );
            }
        }
    }

    println!();
    println!("Final kinetic energy: {:.3} J", world.total_kinetic_energy());
}
