//! Background rendering for the solar system visualization.
//!
//! Provides lighting and the starfield. The starfield only appears once its
//! texture has finished loading; if the load fails it never appears.

use bevy::asset::{LoadState, RenderAssetUsages};
use bevy::color::{Alpha, ColorToComponents};
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use rand::Rng;

use crate::config::StarfieldSettings;
use crate::types::{FrameSet, SimulationClock};

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StarfieldSettings>()
            .add_systems(Startup, (request_starfield_texture, spawn_lighting))
            .add_systems(
                Update,
                (splice_starfield, animate_starfield)
                    .chain()
                    .in_set(FrameSet::Cosmetic),
            );
    }
}

/// Starfield texture still in flight.
#[derive(Resource)]
struct PendingStarfield(Handle<Image>);

/// The starfield node, present only after its texture arrived.
#[derive(Component)]
pub struct Starfield {
    /// Shared material, its alpha carries the twinkle.
    pub material: Handle<StandardMaterial>,
}

/// One generated star.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    /// Linear RGBA vertex color.
    pub color: [f32; 4],
    pub size: f32,
}

/// Z offset of the starfield at `elapsed` seconds.
pub fn starfield_drift(elapsed: f32) -> f32 {
    (elapsed * 0.02).sin() * 10.0
}

/// Starfield opacity at `elapsed` seconds, in [0.75, 0.95].
pub fn starfield_opacity(elapsed: f32) -> f32 {
    0.85 + (elapsed * 1.5).sin() * 0.1
}

/// Scatter stars uniformly in a cube with a bluish tint.
pub fn generate_stars(settings: &StarfieldSettings, rng: &mut impl Rng) -> Vec<Star> {
    let half = settings.spread / 2.0;

    (0..settings.count)
        .map(|_| {
            let position = Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            );

            let hue = settings.hue + (rng.r#gen::<f32>() - 0.5) * settings.hue_jitter;
            let color = Color::hsl(
                hue.rem_euclid(1.0) * 360.0,
                settings.saturation,
                settings.lightness,
            )
            .to_linear()
            .to_f32_array();

            let size = rng.gen_range(settings.min_size..settings.max_size);

            Star {
                position,
                color,
                size,
            }
        })
        .collect()
}

/// Build a single mesh holding every star as a small octahedron.
fn starfield_mesh(stars: &[Star]) -> Mesh {
    const CORNERS: [Vec3; 6] = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
    const UVS: [[f32; 2]; 6] = [
        [1.0, 0.5],
        [0.0, 0.5],
        [0.5, 0.0],
        [0.5, 1.0],
        [0.5, 0.5],
        [0.5, 0.5],
    ];
    const FACES: [[u32; 3]; 8] = [
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];

    let mut positions = Vec::with_capacity(stars.len() * 6);
    let mut uvs = Vec::with_capacity(stars.len() * 6);
    let mut colors = Vec::with_capacity(stars.len() * 6);
    let mut indices = Vec::with_capacity(stars.len() * 24);

    for (i, star) in stars.iter().enumerate() {
        let base = (i * CORNERS.len()) as u32;
        let half = star.size * 0.5;

        for (corner, uv) in CORNERS.iter().zip(UVS) {
            positions.push((star.position + *corner * half).to_array());
            uvs.push(uv);
            colors.push(star.color);
        }
        for face in FACES {
            indices.extend(face.iter().map(|v| base + v));
        }
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
    .with_inserted_indices(Indices::U32(indices))
}

/// Kick off the one-shot starfield texture load.
fn request_starfield_texture(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<StarfieldSettings>,
) {
    let handle: Handle<Image> = asset_server.load(settings.texture.clone());
    commands.insert_resource(PendingStarfield(handle));
}

/// Splice the starfield into the scene once its texture has loaded.
fn splice_starfield(
    mut commands: Commands,
    pending: Option<Res<PendingStarfield>>,
    asset_server: Res<AssetServer>,
    settings: Res<StarfieldSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(pending) = pending else {
        return;
    };

    match asset_server.load_state(pending.0.id()) {
        LoadState::Loaded => {}
        LoadState::Failed(err) => {
            // No retry; the scene simply has no stars
            warn!("Starfield texture failed to load: {err}");
            commands.remove_resource::<PendingStarfield>();
            return;
        }
        _ => return,
    }

    let stars = generate_stars(&settings, &mut rand::thread_rng());

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(pending.0.clone()),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(starfield_mesh(&stars))),
        MeshMaterial3d(material.clone()),
        Transform::IDENTITY,
        Starfield { material },
        Name::new("Starfield"),
    ));
    commands.remove_resource::<PendingStarfield>();

    info!("Spawned {} background stars", stars.len());
}

/// Drift and twinkle the starfield. Runs whether or not orbits are paused.
fn animate_starfield(
    clock: Res<SimulationClock>,
    mut starfield: Query<(&mut Transform, &Starfield)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Absent until the texture arrives
    let Ok((mut transform, starfield)) = starfield.single_mut() else {
        return;
    };

    transform.translation.z = starfield_drift(clock.elapsed);

    if let Some(material) = materials.get_mut(&starfield.material) {
        material.base_color = material.base_color.with_alpha(starfield_opacity(clock.elapsed));
    }
}

/// Light the planets. The sun is unlit and glows on its own.
///
/// A gray ambient term keeps the far side of every planet readable against
/// the black backdrop; one directional key light from above the ecliptic
/// gives each sphere a visible day side from the default camera angle.
fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb_u8(0x88, 0x88, 0x88),
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 5000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(30.0, 40.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Key light"),
    ));

    debug!("Planet lighting spawned");
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_drift_and_opacity_at_start() {
        assert_eq!(starfield_drift(0.0), 0.0);
        assert_relative_eq!(starfield_opacity(0.0), 0.85);
    }

    #[test]
    fn test_opacity_bounds() {
        for i in 0..1000 {
            let o = starfield_opacity(i as f32 * 0.037);
            assert!((0.75 - 1e-6..=0.95 + 1e-6).contains(&o));
        }
    }

    #[test]
    fn test_drift_bounds() {
        for i in 0..1000 {
            assert!(starfield_drift(i as f32 * 3.1).abs() <= 10.0 + 1e-4);
        }
    }

    #[test]
    fn test_generated_stars_inside_cube() {
        let settings = StarfieldSettings::default();
        let stars = generate_stars(&settings, &mut StdRng::seed_from_u64(7));

        assert_eq!(stars.len(), 3000);
        for star in &stars {
            assert!(star.position.abs().max_element() <= 300.0);
            assert!((0.4..1.2).contains(&star.size));
            assert_eq!(star.color[3], 1.0);
        }
    }

    #[test]
    fn test_stars_are_bluish() {
        let settings = StarfieldSettings {
            count: 200,
            ..default()
        };
        let stars = generate_stars(&settings, &mut StdRng::seed_from_u64(11));
        for star in &stars {
            // Blue channel dominates red at hue ~200 degrees
            assert!(star.color[2] >= star.color[0]);
        }
    }

    #[test]
    fn test_starfield_mesh_counts() {
        let settings = StarfieldSettings {
            count: 10,
            ..default()
        };
        let stars = generate_stars(&settings, &mut StdRng::seed_from_u64(3));
        let mesh = starfield_mesh(&stars);

        assert_eq!(mesh.count_vertices(), 60);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(240));
    }
}
