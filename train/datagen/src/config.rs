use std::path::PathBuf;

/// Everything tunable about a generation run. The binary takes no
/// arguments; edit the defaults for a different run.
pub struct GenConfig {
    pub num_samples: u32, // 10 for a smoke run
    pub meshes_dir: String,
    pub dataset_dir: String,

    pub width: u32,
    pub height: u32,
    pub sample_count: u32,
    pub max_depth: u32,
    pub aov_name: String,

    pub fov_deg: (f32, f32),
    pub elevation_deg: (f32, f32),
    pub distance_scale: (f32, f32),
    pub distance_pad: f32,

    pub yaw_deg: (f32, f32),
    pub pitch_deg: (f32, f32),

    pub key_offset_deg: f32,
    pub key_elevation_deg: (f32, f32),
    pub key_kelvin: (f32, f32),
    pub key_power: (f32, f32),
    pub fill_spread_deg: f32,
    pub fill_elevation_deg: (f32, f32),
    pub fill_kelvin: (f32, f32),
    pub fill_power: (f32, f32),

    pub base_color: (f32, f32),
    pub roughness: (f32, f32),
    pub sheen: (f32, f32),
    pub sheen_tint: (f32, f32),
    pub anisotropic: (f32, f32),
    pub specular: (f32, f32),
    /// Roughness below this reads as "shiny silk" in the prompt.
    pub shiny_cutoff: f32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            num_samples: 1000,
            meshes_dir: "cloth_meshes".to_string(),
            dataset_dir: "dataset".to_string(),

            width: 512,
            height: 512,
            sample_count: 128,
            max_depth: 6,
            aov_name: "ao_channel".to_string(),

            fov_deg: (30.0, 55.0),
            elevation_deg: (10.0, 60.0),
            distance_scale: (1.3, 1.8),
            distance_pad: 2.0,

            yaw_deg: (-180.0, 180.0),
            pitch_deg: (-25.0, 25.0),

            key_offset_deg: 75.0,
            key_elevation_deg: (15.0, 65.0),
            key_kelvin: (3500.0, 7500.0),
            key_power: (2.0, 4.0),
            fill_spread_deg: 30.0,
            fill_elevation_deg: (5.0, 35.0),
            fill_kelvin: (4500.0, 8500.0),
            fill_power: (0.4, 1.2),

            base_color: (0.1, 0.9),
            roughness: (0.1, 0.9),
            sheen: (0.0, 1.0),
            sheen_tint: (0.0, 1.0),
            anisotropic: (0.0, 0.5),
            specular: (0.2, 0.8),
            shiny_cutoff: 0.4,
        }
    }
}

impl GenConfig {
    pub fn renders_dir(&self) -> PathBuf {
        PathBuf::from(&self.dataset_dir).join("renders")
    }

    pub fn ao_dir(&self) -> PathBuf {
        PathBuf::from(&self.dataset_dir).join("ao")
    }

    pub fn metadata_path(&self) -> PathBuf {
        PathBuf::from(&self.dataset_dir).join("metadata.jsonl")
    }

    pub fn render_path(&self, frame_id: &str) -> PathBuf {
        self.renders_dir().join(format!("render_{frame_id}.png"))
    }

    pub fn ao_path(&self, frame_id: &str) -> PathBuf {
        self.ao_dir().join(format!("ao_{frame_id}.png"))
    }
}
