//! Property-based tests for the orbit model using proptest.
//!
//! These tests verify the kinematic invariants across a wide range of speeds,
//! radii and multipliers.

use bevy::prelude::Transform;
use proptest::prelude::*;

use crate::frame::tick;
use crate::orbit::Body;
use crate::test_utils::{assertions, fixtures};
use crate::types::SimulationState;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// After `n` unpaused ticks the angle is `n · speed · multiplier`.
    #[test]
    fn prop_angle_is_linear_in_ticks(
        speed in 0.0f64..0.5,
        multiplier in 0.0f64..3.0,
        radius in 0.0f64..50.0,
        n in 0u32..2000,
    ) {
        let mut body = fixtures::body("P", speed, radius);
        body.set_speed_multiplier(multiplier);

        for _ in 0..n {
            body.advance(1.0);
        }

        let expected = n as f64 * speed * multiplier;
        let tolerance = 1e-9 * (1.0 + expected.abs());
        prop_assert!(
            (body.angle - expected).abs() <= tolerance,
            "angle {} drifted from {} after {} ticks", body.angle, expected, n
        );
    }

    /// Ticks while paused never change any angle.
    #[test]
    fn prop_pause_is_idempotent(
        speeds in prop::collection::vec(0.0f64..1.0, 1..8),
        warmup in 0u32..50,
        paused_ticks in 1u32..200,
    ) {
        let mut bodies: Vec<(Body, Transform)> = speeds
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                let body = fixtures::body("P", s, 3.0 + i as f64);
                (body, Transform::default())
            })
            .collect();

        let mut state = SimulationState::default();
        for _ in 0..warmup {
            tick(&state, bodies.iter_mut().map(|(b, t)| (b, t)));
        }

        let before: Vec<f64> = bodies.iter().map(|(b, _)| b.angle).collect();
        state.paused = true;
        for _ in 0..paused_ticks {
            prop_assert!(!tick(&state, bodies.iter_mut().map(|(b, t)| (b, t))));
        }
        let after: Vec<f64> = bodies.iter().map(|(b, _)| b.angle).collect();

        prop_assert_eq!(before, after);
    }

    /// Changing one multiplier leaves every other body's progression intact.
    #[test]
    fn prop_multiplier_isolation(
        index in 0usize..8,
        multiplier in 0.0f64..3.0,
        n in 1u32..500,
    ) {
        let mut control = fixtures::planets();
        let mut adjusted = fixtures::planets();
        adjusted[index].set_speed_multiplier(multiplier);

        for _ in 0..n {
            control.iter_mut().for_each(|b| b.advance(1.0));
            adjusted.iter_mut().for_each(|b| b.advance(1.0));
        }

        for (i, (c, a)) in control.iter().zip(&adjusted).enumerate() {
            if i != index {
                prop_assert_eq!(c.angle, a.angle);
            }
        }
    }

    /// The transform written by a tick always matches `(r·cos θ, 0, r·sin θ)`.
    #[test]
    fn prop_transform_tracks_angle(
        speed in 0.0f64..1.0,
        radius in 0.0f64..40.0,
        n in 1u32..300,
    ) {
        let mut body = fixtures::body("P", speed, radius);
        let mut transform = Transform::default();
        let state = SimulationState::default();

        for _ in 0..n {
            tick(&state, [(&mut body, &mut transform)]);
            let expected = assertions::expected_position(&body).as_vec3();
            prop_assert!(
                transform.translation.distance(expected) < 1e-4,
                "transform {:?} does not match {:?}", transform.translation, expected
            );
        }
    }
}
