use glam::Vec3;
use rand::{Rng, rngs::SmallRng};
use scene::Rgb;

use crate::config::GenConfig;

#[derive(Clone, Copy, Debug)]
pub struct CameraParams {
    pub azimuth_deg: f32,
    pub elevation_deg: f32,
    pub fov_deg: f32,
    /// Multiplier on the mesh's largest extent; the absolute distance is
    /// resolved against the bounding box at assembly time.
    pub distance_scale: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct LightParams {
    pub azimuth_deg: f32,
    pub elevation_deg: f32,
    pub kelvin: f32,
    pub power: f32,
}

impl LightParams {
    /// Direction the light travels, toward the subject.
    pub fn direction(&self) -> Vec3 {
        -spherical_dir(self.azimuth_deg, self.elevation_deg)
    }

    pub fn irradiance(&self) -> Rgb {
        kelvin_to_rgb(self.kelvin).scaled(self.power)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PoseParams {
    pub yaw_deg: f32,
    pub pitch_deg: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct MaterialParams {
    pub base_color: Rgb,
    pub roughness: f32,
    pub sheen: f32,
    pub sheen_tint: f32,
    pub anisotropic: f32,
    pub specular: f32,
}

/// All randomized inputs of one frame, a pure function of the frame seed.
#[derive(Clone, Copy, Debug)]
pub struct FrameParams {
    pub mesh_index: usize,
    pub camera: CameraParams,
    pub pose: PoseParams,
    pub key_light: LightParams,
    pub fill_light: LightParams,
    pub material: MaterialParams,
}

impl FrameParams {
    pub fn sample(rng: &mut SmallRng, mesh_count: usize, cfg: &GenConfig) -> Self {
        let mesh_index = rng.random_range(0..mesh_count);

        let camera = CameraParams {
            azimuth_deg: rng.random_range(0.0..360.0),
            elevation_deg: range(rng, cfg.elevation_deg),
            fov_deg: range(rng, cfg.fov_deg),
            distance_scale: range(rng, cfg.distance_scale),
        };

        let pose = PoseParams {
            yaw_deg: range(rng, cfg.yaw_deg),
            pitch_deg: range(rng, cfg.pitch_deg),
        };

        // Key stays near the camera side, fill roughly opposes it.
        let key_azimuth = camera.azimuth_deg
            + rng.random_range(-cfg.key_offset_deg..=cfg.key_offset_deg);
        let key_light = LightParams {
            azimuth_deg: key_azimuth,
            elevation_deg: range(rng, cfg.key_elevation_deg),
            kelvin: range(rng, cfg.key_kelvin),
            power: range(rng, cfg.key_power),
        };
        let fill_light = LightParams {
            azimuth_deg: key_azimuth
                + 180.0
                + rng.random_range(-cfg.fill_spread_deg..=cfg.fill_spread_deg),
            elevation_deg: range(rng, cfg.fill_elevation_deg),
            kelvin: range(rng, cfg.fill_kelvin),
            power: range(rng, cfg.fill_power),
        };

        let material = MaterialParams {
            base_color: Rgb::new(
                range(rng, cfg.base_color),
                range(rng, cfg.base_color),
                range(rng, cfg.base_color),
            ),
            roughness: range(rng, cfg.roughness),
            sheen: range(rng, cfg.sheen),
            sheen_tint: range(rng, cfg.sheen_tint),
            anisotropic: range(rng, cfg.anisotropic),
            specular: range(rng, cfg.specular),
        };

        Self {
            mesh_index,
            camera,
            pose,
            key_light,
            fill_light,
            material,
        }
    }

    pub fn material_desc(&self, cfg: &GenConfig) -> &'static str {
        if self.material.roughness < cfg.shiny_cutoff {
            "shiny silk"
        } else {
            "matte wool"
        }
    }

    pub fn prompt(&self, cfg: &GenConfig) -> String {
        format!(
            "a photorealistic 3D render of a {} cloth, physical rendering, detailed fabric folds",
            self.material_desc(cfg)
        )
    }
}

fn range(rng: &mut SmallRng, (lo, hi): (f32, f32)) -> f32 {
    rng.random_range(lo..=hi)
}

/// Unit vector at the given azimuth/elevation, Y up, azimuth 0 on +Z.
pub fn spherical_dir(azimuth_deg: f32, elevation_deg: f32) -> Vec3 {
    let az = azimuth_deg.to_radians();
    let el = elevation_deg.to_radians();
    Vec3::new(el.cos() * az.sin(), el.sin(), el.cos() * az.cos())
}

/// Planckian-locus approximation (Tanner Helland fit), normalized to [0, 1].
pub fn kelvin_to_rgb(kelvin: f32) -> Rgb {
    let t = (kelvin / 100.0) as f64;

    let r = if t <= 66.0 {
        255.0
    } else {
        329.698727446 * (t - 60.0).powf(-0.1332047592)
    };
    let g = if t <= 66.0 {
        99.4708025861 * t.ln() - 161.1195681661
    } else {
        288.1221695283 * (t - 60.0).powf(-0.0755148492)
    };
    let b = if t >= 66.0 {
        255.0
    } else if t <= 19.0 {
        0.0
    } else {
        138.5177312231 * (t - 10.0).ln() - 305.0447927307
    };

    Rgb::new(
        (r.clamp(0.0, 255.0) / 255.0) as f32,
        (g.clamp(0.0, 255.0) / 255.0) as f32,
        (b.clamp(0.0, 255.0) / 255.0) as f32,
    )
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn sample(seed: u64) -> (FrameParams, GenConfig) {
        let cfg = GenConfig::default();
        let mut rng = SmallRng::seed_from_u64(seed);
        (FrameParams::sample(&mut rng, 7, &cfg), cfg)
    }

    #[test]
    fn draws_stay_inside_configured_ranges() {
        for seed in 0..64 {
            let (p, cfg) = sample(seed);
            assert!(p.mesh_index < 7);
            assert!((0.0..360.0).contains(&p.camera.azimuth_deg));
            assert!(p.camera.fov_deg >= cfg.fov_deg.0 && p.camera.fov_deg <= cfg.fov_deg.1);
            assert!(p.camera.distance_scale >= cfg.distance_scale.0);
            assert!(p.camera.distance_scale <= cfg.distance_scale.1);
            assert!(p.material.roughness >= cfg.roughness.0);
            assert!(p.material.roughness <= cfg.roughness.1);
            assert!(p.material.anisotropic <= cfg.anisotropic.1);
            assert!((p.key_light.azimuth_deg - p.camera.azimuth_deg).abs() <= cfg.key_offset_deg);
        }
    }

    #[test]
    fn same_seed_same_params() {
        let (a, _) = sample(42);
        let (b, _) = sample(42);
        assert_eq!(a.camera.azimuth_deg, b.camera.azimuth_deg);
        assert_eq!(a.material.roughness, b.material.roughness);
        assert_eq!(a.mesh_index, b.mesh_index);
        assert_eq!(a.key_light.kelvin, b.key_light.kelvin);
    }

    #[test]
    fn prompt_buckets_on_roughness() {
        let cfg = GenConfig::default();
        let (mut p, _) = sample(1);
        p.material.roughness = 0.2;
        assert_eq!(p.material_desc(&cfg), "shiny silk");
        assert!(p.prompt(&cfg).contains("shiny silk cloth"));
        p.material.roughness = 0.8;
        assert_eq!(p.material_desc(&cfg), "matte wool");
        assert!(p.prompt(&cfg).contains("matte wool cloth"));
    }

    #[test]
    fn light_direction_points_down_toward_subject() {
        let light = LightParams {
            azimuth_deg: 30.0,
            elevation_deg: 45.0,
            kelvin: 6500.0,
            power: 3.0,
        };
        let dir = light.direction();
        assert!(dir.y < 0.0);
        assert!((dir.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn kelvin_extremes_tint_as_expected() {
        let warm = kelvin_to_rgb(2000.0);
        assert!(warm.r > warm.b);
        let cool = kelvin_to_rgb(10000.0);
        assert!(cool.b > cool.r);
        // Near the locus midpoint everything is close to white.
        let neutral = kelvin_to_rgb(6600.0);
        assert!(neutral.r > 0.95 && neutral.g > 0.9 && neutral.b > 0.95);
    }

    #[test]
    fn spherical_dir_is_unit_and_y_up() {
        let d = spherical_dir(0.0, 0.0);
        assert!((d - Vec3::Z).length() < 1e-6);
        let up = spherical_dir(123.0, 90.0);
        assert!((up - Vec3::Y).length() < 1e-5);
    }
}
