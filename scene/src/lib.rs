pub mod film;
pub mod mesh;
pub mod model;
pub mod renderer;
pub mod transform;
mod xml;

pub use film::FilmBuffer;
pub use mesh::{MeshBounds, MeshError};
pub use model::{
    AovKind, AovOutput, Bsdf, Emitter, Film, Geometry, Integrator, PixelFormat, Rgb, Sampler,
    Scene, Sensor, Shape,
};
pub use renderer::{MitsubaRenderer, RenderError, Renderer};
pub use transform::{Step, Transform};
