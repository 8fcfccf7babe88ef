//! Celestial body rendering and spawning.
//!
//! Handles the visual representation of the sun and the planets.

use bevy::prelude::*;

use crate::config::{PLANETS, SUN_RADIUS, SUN_TEXTURE, SolarConfig};
use crate::orbit::bodies_from_table;

/// Sphere tessellation used for every body.
const SECTORS: u32 = 64;
const STACKS: u32 = 64;

fn sphere_mesh(radius: f32) -> Mesh {
    Sphere::new(radius).mesh().uv(SECTORS, STACKS)
}

/// Marker for the static, decorative sun.
#[derive(Component)]
pub struct Sun;

/// Plugin providing celestial body spawning functionality.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SolarConfig>()
            .add_systems(Startup, (spawn_sun, spawn_planets));
    }
}

/// Spawn the sun at the origin. It glows with its own texture.
fn spawn_sun(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let texture: Handle<Image> = asset_server.load(SUN_TEXTURE);

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(texture.clone()),
        emissive: LinearRgba::WHITE,
        emissive_texture: Some(texture),
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(sphere_mesh(SUN_RADIUS))),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Sun,
        Name::new("Sun"),
    ));
}

/// Spawn every valid planet from the table at its starting orbital position.
///
/// Textures load in the background; until one arrives (or if it never does)
/// the planet renders untextured.
fn spawn_planets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    solar: Res<SolarConfig>,
) {
    let planets = bodies_from_table(&PLANETS, &solar);

    for (planet, body) in &planets {
        let material = materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load(planet.texture_path())),
            perceptual_roughness: 0.9,
            ..default()
        });

        commands.spawn((
            Mesh3d(meshes.add(sphere_mesh(planet.radius))),
            MeshMaterial3d(material),
            Transform::from_translation(body.render_position()),
            Name::new(planet.name),
            body.clone(),
        ));
    }

    info!("Spawned {} planets", planets.len());
}
