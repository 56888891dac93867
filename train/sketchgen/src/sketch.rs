//! The three layers of a shaded sketch: crisp Canny lines from the
//! beauty render, soft inverted-AO shading, and their per-pixel max.

use image::{DynamicImage, GrayImage, Luma};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

use crate::config::SketchConfig;

/// White structural lines on black.
pub fn edge_layer(beauty: &DynamicImage, cfg: &SketchConfig) -> GrayImage {
    let gray = beauty.to_luma8();
    let blurred = gaussian_blur_f32(&gray, cfg.blur_sigma);
    canny(&blurred, cfg.canny_low, cfg.canny_high)
}

/// Raw AO is bright where flat and dark in deep folds; inverting matches
/// the sketch convention of bright shading strokes.
pub fn shading_layer(ao: &GrayImage, weight: f32) -> GrayImage {
    let mut out = ao.clone();
    for px in out.pixels_mut() {
        let inverted = 255 - px.0[0];
        px.0[0] = (inverted as f32 * weight) as u8;
    }
    out
}

/// Brightest pixel of either layer wins, so edge lines are never dimmed
/// by the shading underneath them.
pub fn compose(edges: &GrayImage, shading: &GrayImage) -> GrayImage {
    debug_assert_eq!(edges.dimensions(), shading.dimensions());
    let mut out = edges.clone();
    for (px, sh) in out.pixels_mut().zip(shading.pixels()) {
        px.0[0] = px.0[0].max(sh.0[0]);
    }
    out
}

pub fn blank_like(edges: &GrayImage) -> GrayImage {
    GrayImage::from_pixel(edges.width(), edges.height(), Luma([0]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(pixels: &[u8], w: u32, h: u32) -> GrayImage {
        GrayImage::from_vec(w, h, pixels.to_vec()).unwrap()
    }

    #[test]
    fn compose_is_pixelwise_max() {
        let edges = gray(&[0, 255, 40, 10], 2, 2);
        let shading = gray(&[100, 20, 40, 200], 2, 2);
        let out = compose(&edges, &shading);
        assert_eq!(out.as_raw(), &vec![100, 255, 40, 200]);
    }

    #[test]
    fn compose_with_blank_shading_is_identity() {
        let edges = gray(&[0, 255, 128, 7], 2, 2);
        let out = compose(&edges, &blank_like(&edges));
        assert_eq!(out.as_raw(), edges.as_raw());
    }

    #[test]
    fn shading_inverts_then_scales() {
        let ao = gray(&[0, 255, 105], 3, 1);
        let out = shading_layer(&ao, 0.6);
        // (255 - v) * 0.6, truncated
        assert_eq!(out.as_raw(), &vec![153, 0, 90]);
    }

    #[test]
    fn zero_weight_disables_the_shading_layer() {
        let ao = gray(&[0, 17, 255], 3, 1);
        assert!(shading_layer(&ao, 0.0).as_raw().iter().all(|&v| v == 0));
    }

    #[test]
    fn flat_image_has_no_edges() {
        let flat = DynamicImage::ImageLuma8(GrayImage::from_pixel(32, 32, Luma([90])));
        let edges = edge_layer(&flat, &SketchConfig::default());
        assert!(edges.as_raw().iter().all(|&v| v == 0));
    }

    #[test]
    fn hard_contrast_boundary_produces_edge_pixels() {
        let mut img = GrayImage::from_pixel(32, 32, Luma([0]));
        for y in 0..32 {
            for x in 16..32 {
                img.put_pixel(x, y, Luma([255]));
            }
        }
        let edges = edge_layer(&DynamicImage::ImageLuma8(img), &SketchConfig::default());
        assert!(edges.as_raw().iter().any(|&v| v == 255));
    }
}
