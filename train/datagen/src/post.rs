//! Converts the renderer's floating-point film into the dataset PNGs.

use image::{GrayImage, RgbImage};
use scene::FilmBuffer;

pub fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

/// Color planes clamped to [0, 1] and scaled to 8 bit. `None` when the
/// film carries no R/G/B planes at all.
pub fn beauty_image(film: &FilmBuffer) -> Option<RgbImage> {
    let [r, g, b] = film.rgb()?;
    let mut img = RgbImage::new(film.width() as u32, film.height() as u32);
    for (i, px) in img.pixels_mut().enumerate() {
        *px = image::Rgb([quantize(r[i]), quantize(g[i]), quantize(b[i])]);
    }
    Some(img)
}

/// Grayscale mean of the AO plane group. When the AOV planes are absent
/// the beauty luminance stands in, flagged through the second return so
/// the caller can warn.
pub fn ao_image(film: &FilmBuffer, aov_name: &str) -> Option<(GrayImage, bool)> {
    let (planes, fallback) = match film.channel_rgb(aov_name) {
        Some(planes) => (planes, false),
        None => (film.rgb()?, true),
    };
    let [a, b, c] = planes;
    let mut img = GrayImage::new(film.width() as u32, film.height() as u32);
    for (i, px) in img.pixels_mut().enumerate() {
        *px = image::Luma([quantize((a[i] + b[i] + c[i]) / 3.0)]);
    }
    Some((img, fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(with_aov: bool) -> FilmBuffer {
        let mut film = FilmBuffer::new(2, 1);
        film.push_channel("R", vec![0.5, 2.0]);
        film.push_channel("G", vec![0.25, -1.0]);
        film.push_channel("B", vec![1.0, 0.0]);
        film.push_channel("A", vec![1.0, 1.0]);
        if with_aov {
            film.push_channel("ao_channel.R", vec![0.2, 1.0]);
            film.push_channel("ao_channel.G", vec![0.4, 1.0]);
            film.push_channel("ao_channel.B", vec![0.6, 1.0]);
        }
        film
    }

    #[test]
    fn beauty_clamps_then_scales() {
        let img = beauty_image(&film(true)).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [127, 63, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0]);
    }

    #[test]
    fn ao_averages_the_aov_planes() {
        let (img, fallback) = ao_image(&film(true), "ao_channel").unwrap();
        assert!(!fallback);
        // mean(0.2, 0.4, 0.6) = 0.4
        assert_eq!(img.get_pixel(0, 0).0, [102]);
        assert_eq!(img.get_pixel(1, 0).0, [255]);
    }

    #[test]
    fn missing_aov_falls_back_to_beauty_luminance() {
        let (img, fallback) = ao_image(&film(false), "ao_channel").unwrap();
        assert!(fallback);
        // mean(0.5, 0.25, 1.0) ≈ 0.583
        assert_eq!(img.get_pixel(0, 0).0, [148]);
    }

    #[test]
    fn film_without_color_planes_yields_nothing() {
        let empty = FilmBuffer::new(2, 1);
        assert!(beauty_image(&empty).is_none());
        assert!(ao_image(&empty, "ao_channel").is_none());
    }
}
