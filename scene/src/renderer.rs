use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

use crate::film::FilmBuffer;
use crate::model::Scene;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to run renderer: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("renderer exited with {0}")]
    Failed(std::process::ExitStatus),
    #[error("cannot decode film: {0}")]
    Decode(#[from] exr::error::Error),
}

/// The only contract the pipeline relies on: a declarative scene in, a
/// floating-point film out.
pub trait Renderer {
    fn render(&self, scene: &Scene) -> Result<FilmBuffer, RenderError>;
}

/// Drives the `mitsuba` CLI: the scene is serialized to XML in a scratch
/// directory, rendered to EXR, and the film read back.
pub struct MitsubaRenderer {
    pub executable: PathBuf,
    pub variant: String,
}

impl Default for MitsubaRenderer {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("mitsuba"),
            variant: "scalar_rgb".to_string(),
        }
    }
}

impl Renderer for MitsubaRenderer {
    fn render(&self, scene: &Scene) -> Result<FilmBuffer, RenderError> {
        let scratch = tempfile::tempdir()?;
        let scene_path = scratch.path().join("scene.xml");
        let film_path = scratch.path().join("frame.exr");
        std::fs::write(&scene_path, scene.to_xml())?;

        let status = Command::new(&self.executable)
            .arg("-m")
            .arg(&self.variant)
            .arg("-o")
            .arg(&film_path)
            .arg(&scene_path)
            .status()?;
        if !status.success() {
            return Err(RenderError::Failed(status));
        }

        Ok(FilmBuffer::from_exr(&film_path)?)
    }
}
