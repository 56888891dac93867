use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("cannot open mesh {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed vertex at {path}:{line}")]
    MalformedVertex { path: String, line: usize },
    #[error("mesh {path} contains no vertices")]
    Empty { path: String },
}

/// Axis-aligned bounding box of a Wavefront OBJ, taken from its `v`
/// records only. Enough for camera framing; topology is left to the
/// renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl MeshBounds {
    pub fn from_obj(path: &Path) -> Result<Self, MeshError> {
        let display = path.display().to_string();
        let file = File::open(path).map_err(|source| MeshError::Io {
            path: display.clone(),
            source,
        })?;

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut seen = false;

        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| MeshError::Io {
                path: display.clone(),
                source,
            })?;
            let Some(rest) = line.strip_prefix("v ") else {
                continue;
            };
            let mut coords = rest.split_whitespace().map(str::parse::<f32>);
            let vertex = match (coords.next(), coords.next(), coords.next()) {
                (Some(Ok(x)), Some(Ok(y)), Some(Ok(z))) => Vec3::new(x, y, z),
                _ => {
                    return Err(MeshError::MalformedVertex {
                        path: display,
                        line: idx + 1,
                    });
                }
            };
            min = min.min(vertex);
            max = max.max(vertex);
            seen = true;
        }

        if !seen {
            return Err(MeshError::Empty { path: display });
        }
        Ok(Self { min, max })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn max_extent(&self) -> f32 {
        self.extents().max_element()
    }
}
