use std::path::PathBuf;

pub struct SketchConfig {
    pub dataset_dir: String,
    /// Lower Canny threshold; lower values keep more interior fold lines.
    pub canny_low: f32,
    pub canny_high: f32,
    /// OpenCV's auto sigma for a 5x5 Gaussian kernel.
    pub blur_sigma: f32,
    /// How strongly the AO shading layer blends in (0.0 = off, 1.0 = full).
    pub ao_weight: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            dataset_dir: "dataset".to_string(),
            canny_low: 50.0,
            canny_high: 150.0,
            blur_sigma: 1.1,
            ao_weight: 0.6,
        }
    }
}

impl SketchConfig {
    pub fn renders_dir(&self) -> PathBuf {
        PathBuf::from(&self.dataset_dir).join("renders")
    }

    pub fn ao_dir(&self) -> PathBuf {
        PathBuf::from(&self.dataset_dir).join("ao")
    }

    pub fn conditioning_dir(&self) -> PathBuf {
        PathBuf::from(&self.dataset_dir).join("conditioning")
    }

    pub fn ao_path(&self, frame_id: &str) -> PathBuf {
        self.ao_dir().join(format!("ao_{frame_id}.png"))
    }

    pub fn conditioning_path(&self, frame_id: &str) -> PathBuf {
        self.conditioning_dir()
            .join(format!("conditioning_{frame_id}.png"))
    }
}
