use std::path::{Path, PathBuf};

/// All `render_*.png` files under `dir`, sorted by name (and therefore
/// by frame index, since ids are zero-padded).
pub fn discover_renders(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut renders: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| frame_id_of(path).is_some())
        .collect();
    renders.sort();
    Ok(renders)
}

/// `renders/render_0042.png` → `0042`.
pub fn frame_id_of(path: &Path) -> Option<&str> {
    path.file_name()?
        .to_str()?
        .strip_prefix("render_")?
        .strip_suffix(".png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_id_requires_the_full_pattern() {
        assert_eq!(frame_id_of(Path::new("x/render_0042.png")), Some("0042"));
        assert_eq!(frame_id_of(Path::new("render_.png")), Some(""));
        assert_eq!(frame_id_of(Path::new("ao_0042.png")), None);
        assert_eq!(frame_id_of(Path::new("render_0042.jpg")), None);
    }

    #[test]
    fn discovery_matches_pattern_and_sorts_by_index() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["render_0002.png", "render_0000.png", "ao_0001.png", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        let renders = discover_renders(dir.path()).unwrap();
        let ids: Vec<_> = renders.iter().filter_map(|p| frame_id_of(p)).collect();
        assert_eq!(ids, ["0000", "0002"]);
    }

    #[test]
    fn discovery_errors_on_missing_dir() {
        assert!(discover_renders(Path::new("/nonexistent/renders")).is_err());
    }
}
