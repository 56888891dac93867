//! Builds the declarative scene description for one frame.

use std::path::Path;

use scene::{
    AovKind, AovOutput, Bsdf, Emitter, Film, Geometry, Integrator, MeshBounds, PixelFormat,
    Sampler, Scene, Sensor, Shape, Transform,
};

use crate::config::GenConfig;
use crate::params::{FrameParams, spherical_dir};

pub fn build_scene(
    params: &FrameParams,
    mesh_path: &Path,
    bounds: &MeshBounds,
    cfg: &GenConfig,
) -> Scene {
    let center = bounds.center();
    // Framing scales with the object so large capes and small napkins fill
    // the frame alike.
    let distance = bounds.max_extent() * params.camera.distance_scale + cfg.distance_pad;
    let origin =
        center + spherical_dir(params.camera.azimuth_deg, params.camera.elevation_deg) * distance;

    let cloth = Shape::new(
        "cloth_object",
        Geometry::Obj {
            filename: mesh_path.to_path_buf(),
        },
    )
    .with_transform(Transform::about(
        center,
        Transform::new()
            .rotate_y(params.pose.yaw_deg)
            .rotate_x(params.pose.pitch_deg),
    ))
    .with_bsdf(Bsdf::Principled {
        base_color: params.material.base_color,
        roughness: params.material.roughness,
        sheen: params.material.sheen,
        sheen_tint: params.material.sheen_tint,
        anisotropic: params.material.anisotropic,
        specular: params.material.specular,
    });

    Scene {
        integrator: Integrator::Aov {
            outputs: vec![AovOutput {
                name: cfg.aov_name.clone(),
                kind: AovKind::Albedo,
            }],
            inner: Box::new(Integrator::Path {
                max_depth: cfg.max_depth,
            }),
        },
        sensor: Sensor {
            fov_deg: params.camera.fov_deg,
            to_world: Transform::new().look_at(origin, center, glam::Vec3::Y),
            film: Film {
                width: cfg.width,
                height: cfg.height,
                pixel_format: PixelFormat::Rgba,
            },
            sampler: Sampler::Independent {
                sample_count: cfg.sample_count,
            },
        },
        emitters: vec![
            Emitter::Directional {
                direction: params.key_light.direction(),
                irradiance: params.key_light.irradiance(),
            },
            Emitter::Directional {
                direction: params.fill_light.direction(),
                irradiance: params.fill_light.irradiance(),
            },
        ],
        shapes: vec![cloth],
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::{SeedableRng, rngs::SmallRng};
    use scene::Step;

    use super::*;

    fn build(seed: u64) -> (Scene, MeshBounds) {
        let cfg = GenConfig::default();
        let mut rng = SmallRng::seed_from_u64(seed);
        let params = FrameParams::sample(&mut rng, 1, &cfg);
        let bounds = MeshBounds {
            min: Vec3::new(-2.0, 0.0, -1.0),
            max: Vec3::new(2.0, 1.0, 1.0),
        };
        (
            build_scene(&params, Path::new("cloth_meshes/cape.obj"), &bounds, &cfg),
            bounds,
        )
    }

    #[test]
    fn camera_looks_at_bbox_center_from_scaled_distance() {
        let (scene, bounds) = build(3);
        let Some(Step::LookAt { origin, target, up }) = scene.sensor.to_world.steps.first() else {
            panic!("sensor transform must be a look_at");
        };
        assert_eq!(*target, bounds.center());
        assert_eq!(*up, Vec3::Y);
        let dist = (*origin - bounds.center()).length();
        // max extent 4.0, scale in [1.3, 1.8], pad 2.0
        assert!(dist >= 4.0 * 1.3 + 2.0 - 1e-3);
        assert!(dist <= 4.0 * 1.8 + 2.0 + 1e-3);
    }

    #[test]
    fn cloth_pose_pivots_on_bbox_center() {
        let (scene, bounds) = build(5);
        let steps = &scene.shapes[0].to_world.steps;
        assert_eq!(steps.first(), Some(&Step::Translate(-bounds.center())));
        assert_eq!(steps.last(), Some(&Step::Translate(bounds.center())));
    }

    #[test]
    fn scene_requests_ao_aov_around_path_integrator() {
        let (scene, _) = build(7);
        let Integrator::Aov { outputs, inner } = &scene.integrator else {
            panic!("expected aov integrator");
        };
        assert_eq!(outputs[0].name, "ao_channel");
        assert_eq!(outputs[0].kind, AovKind::Albedo);
        assert_eq!(**inner, Integrator::Path { max_depth: 6 });
    }

    #[test]
    fn two_directional_lights_are_present() {
        let (scene, _) = build(11);
        assert_eq!(scene.emitters.len(), 2);
        for emitter in &scene.emitters {
            let Emitter::Directional { direction, .. } = emitter else {
                panic!("expected directional emitters");
            };
            assert!(direction.y < 0.0, "lights shine downward");
        }
    }
}
