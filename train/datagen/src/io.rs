use std::fs::OpenOptions;
use std::io::{BufWriter, Error, Write};
use std::path::{Path, PathBuf};

use scene::Renderer;

use crate::generator::DatasetGenerator;
use crate::record::MetadataRecord;

pub fn frame_id(index: u32) -> String {
    format!("{index:04}")
}

/// All `*.obj` files under `dir`, sorted so mesh indices are stable
/// across runs.
pub fn discover_meshes(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut meshes: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("obj"))
        .collect();
    meshes.sort();
    Ok(meshes)
}

impl<R: Renderer> DatasetGenerator<'_, R> {
    pub fn init_output(&mut self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.config.renders_dir())?;
        std::fs::create_dir_all(self.config.ao_dir())?;
        if self.writer.is_none() {
            // Append so a resumed run extends the metadata instead of
            // truncating lines for frames that are being skipped.
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.config.metadata_path())?;
            self.writer = Some(BufWriter::with_capacity(1 << 20, file));
        }
        Ok(())
    }

    pub fn append_record(&mut self, record: &MetadataRecord) -> Result<(), Error> {
        let json = serde_json::to_string(record)?;
        if let Some(ref mut writer) = self.writer {
            writeln!(writer, "{json}")?;
        }
        Ok(())
    }

    pub fn finalize_output(&mut self) -> Result<(), Error> {
        if let Some(writer) = self.writer.take() {
            writer.into_inner()?.sync_all()?;
        }
        Ok(())
    }
}

impl<R: Renderer> Drop for DatasetGenerator<'_, R> {
    fn drop(&mut self) {
        let _ = self.finalize_output();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_ids_are_zero_padded_to_four_digits() {
        assert_eq!(frame_id(0), "0000");
        assert_eq!(frame_id(42), "0042");
        assert_eq!(frame_id(9999), "9999");
    }

    #[test]
    fn discovery_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.obj", "a.obj", "notes.txt", "c.mtl"] {
            std::fs::write(dir.path().join(name), "v 0 0 0\n").unwrap();
        }
        let meshes = discover_meshes(dir.path()).unwrap();
        let names: Vec<_> = meshes
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a.obj", "b.obj"]);
    }

    #[test]
    fn discovery_errors_on_missing_dir() {
        assert!(discover_meshes(Path::new("/nonexistent/cloth_meshes")).is_err());
    }
}
