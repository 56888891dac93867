use std::path::PathBuf;

use glam::Vec3;

use crate::transform::Transform;

/// Linear RGB triple as Mitsuba's `rgb` plugin expects it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    pub fn scaled(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Integrator {
    Path {
        max_depth: u32,
    },
    /// Wraps an inner integrator and requests extra film channels.
    Aov {
        outputs: Vec<AovOutput>,
        inner: Box<Integrator>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AovOutput {
    /// Channel prefix under which the planes appear in the film.
    pub name: String,
    pub kind: AovKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AovKind {
    Albedo,
    Depth,
    ShadingNormal,
}

impl AovKind {
    pub fn keyword(self) -> &'static str {
        match self {
            AovKind::Albedo => "albedo",
            AovKind::Depth => "depth",
            AovKind::ShadingNormal => "sh_normal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sampler {
    Independent { sample_count: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

/// `hdrfilm` parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Film {
    pub width: u32,
    pub height: u32,
    pub pixel_format: PixelFormat,
}

/// Perspective sensor with its film and sampler.
#[derive(Clone, Debug, PartialEq)]
pub struct Sensor {
    pub fov_deg: f32,
    pub to_world: Transform,
    pub film: Film,
    pub sampler: Sampler,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Emitter {
    Directional { direction: Vec3, irradiance: Rgb },
    Point { position: Vec3, intensity: Rgb },
    /// Only meaningful nested inside a shape.
    Area { radiance: Rgb },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Bsdf {
    Principled {
        base_color: Rgb,
        roughness: f32,
        sheen: f32,
        sheen_tint: f32,
        anisotropic: f32,
        specular: f32,
    },
    Diffuse {
        reflectance: Rgb,
    },
    Dielectric {
        int_ior: f32,
        ext_ior: f32,
    },
    RoughConductor {
        material: String,
        distribution: String,
        alpha: f32,
    },
    /// Invisible surface, used on emitter carriers.
    Null,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Obj { filename: PathBuf },
    Sphere { center: Vec3, radius: f32 },
    Rectangle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub id: String,
    pub geometry: Geometry,
    pub to_world: Transform,
    pub bsdf: Option<Bsdf>,
    pub emitter: Option<Emitter>,
}

impl Shape {
    pub fn new(id: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: id.into(),
            geometry,
            to_world: Transform::new(),
            bsdf: None,
            emitter: None,
        }
    }

    pub fn with_transform(mut self, to_world: Transform) -> Self {
        self.to_world = to_world;
        self
    }

    pub fn with_bsdf(mut self, bsdf: Bsdf) -> Self {
        self.bsdf = Some(bsdf);
        self
    }

    pub fn with_emitter(mut self, emitter: Emitter) -> Self {
        self.emitter = Some(emitter);
        self
    }
}

/// Root of the declarative scene description handed to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub integrator: Integrator,
    pub sensor: Sensor,
    pub emitters: Vec<Emitter>,
    pub shapes: Vec<Shape>,
}
