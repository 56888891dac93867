use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use log::{error, info, warn};
use rand::{RngCore, SeedableRng, rngs::SmallRng};
use rand_xoshiro::SplitMix64;
use scene::{MeshBounds, Renderer};

use crate::assemble;
use crate::config::GenConfig;
use crate::io::frame_id;
use crate::params::FrameParams;
use crate::post;
use crate::record::MetadataRecord;

pub enum FrameOutcome {
    Generated { mesh: String, desc: &'static str },
    Skipped,
}

#[derive(Debug, Default, PartialEq)]
pub struct RunSummary {
    pub generated: u32,
    pub skipped: u32,
    pub failed: u32,
}

pub struct DatasetGenerator<'a, R: Renderer> {
    pub config: &'a GenConfig,
    pub renderer: R,
    pub meshes: Vec<PathBuf>,
    pub(crate) writer: Option<BufWriter<File>>,
}

impl<'a, R: Renderer> DatasetGenerator<'a, R> {
    pub fn new(config: &'a GenConfig, renderer: R, meshes: Vec<PathBuf>) -> Self {
        assert!(!meshes.is_empty(), "mesh list must not be empty");
        Self {
            config,
            renderer,
            meshes,
            writer: None,
        }
    }

    /// One frame fully finishes (or fails) before the next begins; a
    /// failed frame is counted and the batch continues.
    pub fn run(&mut self) -> RunSummary {
        let mut summary = RunSummary::default();
        let total = self.config.num_samples;
        for index in 0..total {
            let id = frame_id(index);
            match self.generate_frame(index, &id) {
                Ok(FrameOutcome::Skipped) => {
                    info!("[{}/{total}] frame {id} already complete, skipping", index + 1);
                    summary.skipped += 1;
                }
                Ok(FrameOutcome::Generated { mesh, desc }) => {
                    info!("[{}/{total}] saved {id} | mesh: {mesh} | {desc}", index + 1);
                    summary.generated += 1;
                }
                Err(err) => {
                    error!("frame {id} failed: {err:#}");
                    summary.failed += 1;
                }
            }
        }
        summary
    }

    fn generate_frame(&mut self, index: u32, id: &str) -> anyhow::Result<FrameOutcome> {
        let render_path = self.config.render_path(id);
        let ao_path = self.config.ao_path(id);
        if render_path.exists() && ao_path.exists() {
            return Ok(FrameOutcome::Skipped);
        }

        // Parameters derive from the frame index alone, so a resumed run
        // regenerates a missing frame identically.
        let mut seeder = SplitMix64::seed_from_u64(index as u64);
        let mut rng = SmallRng::seed_from_u64(seeder.next_u64());
        let params = FrameParams::sample(&mut rng, self.meshes.len(), self.config);

        let mesh_path = self.meshes[params.mesh_index].clone();
        let bounds = MeshBounds::from_obj(&mesh_path)?;
        let scene = assemble::build_scene(&params, &mesh_path, &bounds, self.config);
        let film = self.renderer.render(&scene)?;

        let beauty = post::beauty_image(&film).context("film carries no color planes")?;
        beauty
            .save(&render_path)
            .with_context(|| format!("writing {}", render_path.display()))?;

        let (ao, fallback) = post::ao_image(&film, &self.config.aov_name)
            .context("film carries no color planes")?;
        if fallback {
            warn!("frame {id}: AOV planes missing, writing luminance proxy as AO");
        }
        ao.save(&ao_path)
            .with_context(|| format!("writing {}", ao_path.display()))?;

        self.append_record(&MetadataRecord::for_frame(id, params.prompt(self.config)))?;

        let mesh = mesh_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(FrameOutcome::Generated {
            mesh,
            desc: params.material_desc(self.config),
        })
    }
}
