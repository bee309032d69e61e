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
//! Simulation correctness tests
//!
//! Verifies the Verlet recurrence, the per-tick acceleration reset, and the
//! collision pass semantics end to end through `World::update`.

use verlet2d::{Body, Vec2, World};

const TOLERANCE: f64 = 1e-10;

fn approx_eq(a: Vec2, b: Vec2, tolerance: f64) -> bool {
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
}

#[test]
fn test_verlet_integration_reproduces_initial_velocity() {
    let time_step = 0.1;
    let mut world = World::new(time_step, Vec2::ZERO);
    let initial_position = Vec2::new(1.0, 2.0);
    let initial_velocity = Vec2::new(0.5, 0.3);
    world.add_body(Body::new(initial_position, initial_velocity, 1.0, 1.0, time_step));

    world.update();

    // With zero gravity the first step reduces to a plain Euler step:
    // p1 = p0 + v0*dt
    let expected = initial_position + initial_velocity * time_step;
    let body = &world.bodies()[0];
    assert!(approx_eq(body.position(), expected, TOLERANCE));
    assert!(approx_eq(body.last_position(), initial_position, TOLERANCE));

    world.update();

    // Second step follows the recurrence: p2 = 2*p1 - p0
    let expected2 = expected * 2.0 - initial_position;
    let body = &world.bodies()[0];
    assert!(approx_eq(body.position(), expected2, TOLERANCE));
    assert!(approx_eq(body.last_position(), expected, TOLERANCE));
}

#[test]
fn test_acceleration_never_leaks_between_ticks() {
    let mut world = World::new(0.1, Vec2::new(0.0, -9.81));
    world.add_body(Body::new(Vec2::ZERO, Vec2::ZERO, 1.0, 1.0, 0.1));
    world.add_body(Body::new(Vec2::new(5.0, 0.0), Vec2::new(1.0, 0.0), 3.0, 0.5, 0.1));

    for _ in 0..25 {
        world.update();
        for body in world.bodies() {
            assert_eq!(body.acceleration(), Vec2::ZERO);
        }
    }
}

#[test]
fn test_free_fall_from_rest_single_step() {
    let mut world = World::new(0.1, Vec2::new(0.0, -9.81));
    world.add_body(Body::new(Vec2::ZERO, Vec2::ZERO, 1.0, 1.0, 0.1));

    world.update();

    let body = &world.bodies()[0];
    assert_eq!(body.position().x, 0.0);
    assert!((body.position().y - (-9.81 * 0.01)).abs() < TOLERANCE);
    assert_eq!(body.acceleration(), Vec2::ZERO);
}

#[test]
fn test_free_fall_multi_step_closed_form() {
    // Under constant acceleration g from rest, the position-Verlet
    // recurrence gives y_n = n*(n+1)/2 * g * dt² exactly.
    let dt = 0.1;
    let g = -9.81;
    let mut world = World::new(dt, Vec2::new(0.0, g));
    world.add_body(Body::new(Vec2::ZERO, Vec2::ZERO, 1.0, 1.0, dt));

    let steps = 10;
    for _ in 0..steps {
        world.update();
    }

    let n = steps as f64;
    let expected_y = n * (n + 1.0) / 2.0 * g * dt * dt;
    let body = &world.bodies()[0];
    assert!((body.position().y - expected_y).abs() < 1e-9);
}

#[test]
fn test_collision_detection_symmetry() {
    let dt = 0.1;
    let cases = [
        (Vec2::new(0.0, 0.0), 1.0, Vec2::new(1.5, 0.0), 1.0),
        (Vec2::new(0.0, 0.0), 0.2, Vec2::new(3.0, 4.0), 0.3),
        (Vec2::new(-1.0, 2.5), 2.0, Vec2::new(0.5, 2.5), 0.1),
        (Vec2::new(0.7, 0.7), 1.0, Vec2::new(0.7, 0.7), 1.0),
    ];

    for (pos_a, radius_a, pos_b, radius_b) in cases {
        let a = Body::new(pos_a, Vec2::ZERO, 1.0, radius_a, dt);
        let b = Body::new(pos_b, Vec2::ZERO, 2.0, radius_b, dt);
        assert_eq!(a.collides_with(&b), b.collides_with(&a));
    }
}

#[test]
fn test_check_collisions_separates_overlapping_pair() {
    let mut world = World::new(0.1, Vec2::ZERO);
    world.add_body(Body::new(Vec2::ZERO, Vec2::ZERO, 1.0, 1.0, 0.1));
    world.add_body(Body::new(Vec2::new(1.5, 0.0), Vec2::ZERO, 1.0, 1.0, 0.1));

    assert!(world.bodies()[0].collides_with(&world.bodies()[1]));
    world.check_collisions();
    assert!(!world.bodies()[0].collides_with(&world.bodies()[1]));

    // Equal masses: fully separated to exact contact in one pass
    let distance = (world.bodies()[1].position() - world.bodies()[0].position()).magnitude();
    assert!((distance - 2.0).abs() < TOLERANCE);
}

#[test]
fn test_mass_weighted_positional_correction() {
    // m1=1, m2=3, overlap 0.5: body 1 takes 3/4 of the correction
    let mut world = World::new(0.1, Vec2::ZERO);
    world.add_body(Body::new(Vec2::ZERO, Vec2::ZERO, 1.0, 1.0, 0.1));
    world.add_body(Body::new(Vec2::new(1.5, 0.0), Vec2::ZERO, 3.0, 1.0, 0.1));

    world.check_collisions();

    assert!((world.bodies()[0].position().x - (-0.375)).abs() < TOLERANCE);
    assert!((world.bodies()[1].position().x - 1.625).abs() < TOLERANCE);
}

#[test]
fn test_overlap_strictly_decreases_toward_contact() {
    let mut world = World::new(0.1, Vec2::ZERO);
    world.add_body(Body::new(Vec2::ZERO, Vec2::ZERO, 2.0, 1.0, 0.1));
    world.add_body(Body::new(Vec2::new(0.6, 0.8), Vec2::ZERO, 7.0, 1.0, 0.1));

    let contact = 2.0;
    let before = (world.bodies()[1].position() - world.bodies()[0].position()).magnitude();
    world.check_collisions();
    let after = (world.bodies()[1].position() - world.bodies()[0].position()).magnitude();

    assert!((contact - after).abs() < (contact - before).abs());
}

#[test]
fn test_coincident_centers_left_unmoved() {
    let mut world = World::new(0.1, Vec2::ZERO);
    world.add_body(Body::new(Vec2::new(2.0, 2.0), Vec2::ZERO, 1.0, 1.0, 0.1));
    world.add_body(Body::new(Vec2::new(2.0, 2.0), Vec2::ZERO, 5.0, 1.0, 0.1));

    world.check_collisions();

    assert_eq!(world.bodies()[0].position(), Vec2::new(2.0, 2.0));
    assert_eq!(world.bodies()[1].position(), Vec2::new(2.0, 2.0));
    assert!(world.bodies()[0].position().is_valid());
    assert!(world.bodies()[1].position().is_valid());
}

#[test]
fn test_no_collision_leaves_positions_untouched() {
    let mut world = World::new(0.1, Vec2::ZERO);
    world.add_body(Body::new(Vec2::ZERO, Vec2::ZERO, 1.0, 1.0, 0.1));
    world.add_body(Body::new(Vec2::new(3.0, 0.0), Vec2::ZERO, 1.0, 1.0, 0.1));

    world.check_collisions();

    assert_eq!(world.bodies()[0].position(), Vec2::ZERO);
    assert_eq!(world.bodies()[1].position(), Vec2::new(3.0, 0.0));
}

#[test]
fn test_collision_pass_visits_pairs_in_ascending_order() {
    // A chain of three overlapping circles: the (0,1) resolution moves
    // body 1 before the (1,2) pair is tested, so the final positions pin
    // down the ascending visit order.
    let mut world = World::new(0.1, Vec2::ZERO);
    world.add_body(Body::new(Vec2::ZERO, Vec2::ZERO, 1.0, 1.0, 0.1));
    world.add_body(Body::new(Vec2::new(1.5, 0.0), Vec2::ZERO, 1.0, 1.0, 0.1));
    world.add_body(Body::new(Vec2::new(3.0, 0.0), Vec2::ZERO, 1.0, 1.0, 0.1));

    world.check_collisions();

    assert!((world.bodies()[0].position().x - (-0.25)).abs() < TOLERANCE);
    assert!((world.bodies()[1].position().x - 1.375).abs() < TOLERANCE);
    assert!((world.bodies()[2].position().x - 3.375).abs() < TOLERANCE);
}

#[test]
fn test_update_is_deterministic() {
    let build = || {
        let mut world = World::new(0.05, Vec2::new(0.0, -9.81));
        for i in 0..20 {
            let x = (i % 5) as f64 * 0.9;
            let y = (i / 5) as f64 * 0.9;
            world.add_body(Body::new(Vec2::new(x, y), Vec2::ZERO, 1.0 + i as f64 * 0.1, 0.5, 0.05));
        }
        world
    };

    let mut a = build();
    let mut b = build();
    for _ in 0..50 {
        a.update();
        b.update();
    }

    for (body_a, body_b) in a.bodies().iter().zip(b.bodies()) {
        assert_eq!(body_a.position(), body_b.position());
        assert_eq!(body_a.last_position(), body_b.last_position());
    }
}
