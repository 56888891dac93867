//! Stage 1 of the ControlNet dataset pipeline: renders randomized cloth
//! meshes into beauty/AO pairs plus a metadata line per frame.

use std::path::Path;

use anyhow::{Context, bail};
use log::info;
use scene::MitsubaRenderer;

use crate::config::GenConfig;
use crate::generator::DatasetGenerator;

mod assemble;
mod config;
mod generator;
mod io;
mod params;
mod post;
mod record;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = GenConfig::default();
    let meshes = io::discover_meshes(Path::new(&cfg.meshes_dir))
        .with_context(|| format!("cannot read meshes directory {}", cfg.meshes_dir))?;
    info!("meshes dir : {} ({} .obj files)", cfg.meshes_dir, meshes.len());
    info!("renders dir: {}", cfg.renders_dir().display());
    info!("ao dir     : {}", cfg.ao_dir().display());
    if meshes.is_empty() {
        bail!(
            "no .obj files found in {}; add cloth meshes there and rerun",
            cfg.meshes_dir
        );
    }

    let mut generator = DatasetGenerator::new(&cfg, MitsubaRenderer::default(), meshes);
    generator.init_output().context("cannot prepare dataset directories")?;

    info!("generating {} render pairs", cfg.num_samples);
    let summary = generator.run();
    generator.finalize_output()?;

    info!(
        "done: {} generated, {} already present, {} failed",
        summary.generated, summary.skipped, summary.failed
    );
    info!("next: run sketchgen to create the conditioning inputs");
    Ok(())
}
