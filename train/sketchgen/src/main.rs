//! Stage 2 of the ControlNet dataset pipeline: turns every beauty/AO
//! pair into a shaded-sketch conditioning image.

use std::path::Path;

use anyhow::{Context, bail};
use log::{error, info, warn};

use crate::config::SketchConfig;

mod config;
mod io;
mod sketch;

enum Outcome {
    Written,
    Skipped,
}

fn process_frame(cfg: &SketchConfig, render_path: &Path) -> Outcome {
    // Discovery guarantees the pattern matches.
    let Some(frame_id) = io::frame_id_of(render_path) else {
        return Outcome::Skipped;
    };

    let beauty = match image::open(render_path) {
        Ok(img) => img,
        Err(err) => {
            error!("cannot load beauty render {}: {err}", render_path.display());
            return Outcome::Skipped;
        }
    };
    let edges = sketch::edge_layer(&beauty, cfg);

    let ao_path = cfg.ao_path(frame_id);
    let shading = match image::open(&ao_path) {
        Ok(ao) => {
            let ao = ao.to_luma8();
            if ao.dimensions() == edges.dimensions() {
                sketch::shading_layer(&ao, cfg.ao_weight)
            } else {
                warn!(
                    "AO map {} does not match the render size, falling back to Canny only",
                    ao_path.display()
                );
                sketch::blank_like(&edges)
            }
        }
        Err(err) => {
            warn!(
                "cannot load AO map {}: {err}, falling back to Canny only",
                ao_path.display()
            );
            sketch::blank_like(&edges)
        }
    };

    let out_path = cfg.conditioning_path(frame_id);
    match sketch::compose(&edges, &shading).save(&out_path) {
        Ok(()) => {
            info!("frame {frame_id}: wrote {}", out_path.display());
            Outcome::Written
        }
        Err(err) => {
            error!("cannot write {}: {err}", out_path.display());
            Outcome::Skipped
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = SketchConfig::default();
    let renders = io::discover_renders(&cfg.renders_dir())
        .with_context(|| format!("cannot read {}; run datagen first", cfg.renders_dir().display()))?;
    if renders.is_empty() {
        bail!(
            "no renders found in {}; run datagen first",
            cfg.renders_dir().display()
        );
    }
    std::fs::create_dir_all(cfg.conditioning_dir())
        .context("cannot create conditioning directory")?;

    info!("found {} render(s), generating shaded sketches", renders.len());

    let mut processed = 0u32;
    let mut skipped = 0u32;
    for render_path in &renders {
        match process_frame(&cfg, render_path) {
            Outcome::Written => processed += 1,
            Outcome::Skipped => skipped += 1,
        }
    }

    info!(
        "done: {processed} conditioning image(s) saved to {}",
        cfg.conditioning_dir().display()
    );
    if skipped > 0 {
        warn!("{skipped} frame(s) skipped due to unreadable or unwritable files");
    }
    Ok(())
}
