use std::path::Path;

use exr::error::Error as ExrError;
use exr::prelude::read_all_flat_layers_from_file;

/// Multi-channel floating-point image returned by a render. Channels are
/// stored as named planes, pixel (x, y) at index `y * width + x`.
#[derive(Clone, Debug, Default)]
pub struct FilmBuffer {
    width: usize,
    height: usize,
    channels: Vec<(String, Vec<f32>)>,
}

impl FilmBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            channels: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Panics if the plane length does not match the film resolution.
    pub fn push_channel(&mut self, name: impl Into<String>, data: Vec<f32>) {
        assert_eq!(data.len(), self.pixel_count(), "plane size mismatch");
        self.channels.push((name.into(), data));
    }

    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|(name, _)| name.as_str())
    }

    pub fn channel(&self, name: &str) -> Option<&[f32]> {
        self.channels
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data.as_slice())
    }

    /// The `{prefix}.R/.G/.B` plane triple of an AOV, in RGB order
    /// regardless of file channel order.
    pub fn channel_rgb(&self, prefix: &str) -> Option<[&[f32]; 3]> {
        Some([
            self.channel(&format!("{prefix}.R"))?,
            self.channel(&format!("{prefix}.G"))?,
            self.channel(&format!("{prefix}.B"))?,
        ])
    }

    /// The main color planes.
    pub fn rgb(&self) -> Option<[&[f32]; 3]> {
        Some([self.channel("R")?, self.channel("G")?, self.channel("B")?])
    }

    pub fn from_exr(path: &Path) -> Result<Self, ExrError> {
        let image = read_all_flat_layers_from_file(path)?;
        let layer = image
            .layer_data
            .first()
            .ok_or_else(|| ExrError::Invalid("film has no layers".into()))?;

        let mut film = Self::new(layer.size.0, layer.size.1);
        for channel in &layer.channel_data.list {
            let samples: Vec<f32> = channel.sample_data.values_as_f32().collect();
            if samples.len() != film.pixel_count() {
                return Err(ExrError::Invalid("channel plane size mismatch".into()));
            }
            film.channels.push((channel.name.to_string(), samples));
        }
        Ok(film)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film_with(names: &[&str]) -> FilmBuffer {
        let mut film = FilmBuffer::new(2, 2);
        for (i, name) in names.iter().enumerate() {
            film.push_channel(*name, vec![i as f32; 4]);
        }
        film
    }

    #[test]
    fn channel_lookup_is_by_exact_name() {
        let film = film_with(&["R", "G", "B", "A"]);
        assert_eq!(film.channel("G"), Some([1.0f32; 4].as_slice()));
        assert_eq!(film.channel("ao_channel.R"), None);
    }

    #[test]
    fn rgb_returns_planes_in_color_order() {
        // EXR files store channels alphabetically; order must not leak out.
        let film = film_with(&["A", "B", "G", "R"]);
        let [r, g, b] = film.rgb().unwrap();
        assert_eq!((r[0], g[0], b[0]), (3.0, 2.0, 1.0));
    }

    #[test]
    fn aov_group_requires_all_three_planes() {
        let film = film_with(&["R", "G", "B", "ao_channel.R", "ao_channel.G", "ao_channel.B"]);
        assert!(film.channel_rgb("ao_channel").is_some());
        assert!(film.channel_rgb("normals").is_none());

        let partial = film_with(&["R", "G", "B", "ao_channel.R"]);
        assert!(partial.channel_rgb("ao_channel").is_none());
    }

    #[test]
    #[should_panic(expected = "plane size mismatch")]
    fn wrong_plane_length_panics() {
        let mut film = FilmBuffer::new(2, 2);
        film.push_channel("R", vec![0.0; 3]);
    }
}
