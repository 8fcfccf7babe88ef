//! Frame driver for the orbit simulation.
//!
//! One tick per `Update`: orbital timing is tick-based rather than wall-clock
//! based, so orbital speed follows the display refresh rate. Wall-clock time
//! is tracked only for cosmetic animation.

use bevy::prelude::*;

use crate::config::SPIN_PER_TICK;
use crate::orbit::Body;
use crate::types::{FrameSet, SimulationClock, SimulationState};

/// Plugin providing the per-frame orbit advancement.
pub struct FramePlugin;

impl Plugin for FramePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationState>()
            .init_resource::<SimulationClock>()
            .configure_sets(
                Update,
                (
                    FrameSet::Pointer,
                    FrameSet::Input,
                    FrameSet::Advance,
                    FrameSet::Cosmetic,
                )
                    .chain(),
            )
            .add_systems(Update, advance_frame.in_set(FrameSet::Advance));
    }
}

/// Run one simulation tick over the given bodies.
///
/// When not paused, every body advances one tick, its transform is moved to
/// the derived orbital position and it spins by a fixed increment. Returns
/// whether the bodies advanced.
pub fn tick<'a>(
    state: &SimulationState,
    bodies: impl IntoIterator<Item = (&'a mut Body, &'a mut Transform)>,
) -> bool {
    if state.paused {
        return false;
    }

    for (body, transform) in bodies {
        body.advance(1.0);
        transform.translation = body.render_position();
        transform.rotate_local_y(SPIN_PER_TICK);
    }

    true
}

/// Advance all bodies and the frame clock.
fn advance_frame(
    state: Res<SimulationState>,
    time: Res<Time>,
    mut clock: ResMut<SimulationClock>,
    mut bodies: Query<(&mut Body, &mut Transform)>,
) {
    clock.elapsed = time.elapsed_secs();

    let advanced = tick(
        &state,
        bodies
            .iter_mut()
            .map(|(body, transform)| (body.into_inner(), transform.into_inner())),
    );

    if advanced {
        clock.ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;
    use approx::assert_relative_eq;

    #[test]
    fn test_tick_moves_transform_to_orbit() {
        let mut body = fixtures::body("Test", 0.5, 4.0);
        let mut transform = Transform::default();
        let state = SimulationState::default();

        assert!(tick(&state, [(&mut body, &mut transform)]));

        assert_relative_eq!(body.angle, 0.5);
        assert_relative_eq!(transform.translation.x, 4.0 * 0.5f32.cos(), epsilon = 1e-6);
        assert_eq!(transform.translation.y, 0.0);
        assert_relative_eq!(transform.translation.z, 4.0 * 0.5f32.sin(), epsilon = 1e-6);
    }

    #[test]
    fn test_tick_spins_body() {
        let mut body = fixtures::body("Test", 0.1, 4.0);
        let mut transform = Transform::default();
        let state = SimulationState::default();

        for _ in 0..10 {
            tick(&state, [(&mut body, &mut transform)]);
        }

        let (axis, angle) = transform.rotation.to_axis_angle();
        assert_relative_eq!(angle, SPIN_PER_TICK * 10.0, epsilon = 1e-5);
        assert_relative_eq!(axis.y.abs(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_paused_tick_changes_nothing() {
        let mut body = fixtures::body("Test", 0.5, 4.0);
        let mut transform = Transform::from_xyz(1.0, 2.0, 3.0);
        let state = SimulationState {
            paused: true,
            ..default()
        };

        assert!(!tick(&state, [(&mut body, &mut transform)]));
        assert_eq!(body.angle, 0.0);
        assert_eq!(transform, Transform::from_xyz(1.0, 2.0, 3.0));
    }
}
