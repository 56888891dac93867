//! Serialization of the scene model into Mitsuba 3 scene XML.

use std::fmt::{self, Write};

use glam::Vec3;

use crate::model::{
    Bsdf, Emitter, Film, Geometry, Integrator, PixelFormat, Rgb, Sampler, Scene, Sensor, Shape,
};
use crate::transform::{Step, Transform};

const SCENE_VERSION: &str = "3.0.0";

impl Scene {
    pub fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<scene version=\"{SCENE_VERSION}\">")?;
        write_integrator(f, &self.integrator, 1, None)?;
        write_sensor(f, &self.sensor, 1)?;
        for emitter in &self.emitters {
            write_emitter(f, emitter, 1)?;
        }
        for shape in &self.shapes {
            write_shape(f, shape, 1)?;
        }
        writeln!(f, "</scene>")
    }
}

fn pad(f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
    for _ in 0..indent {
        f.write_str("    ")?;
    }
    Ok(())
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn vec3(v: Vec3) -> String {
    format!("{}, {}, {}", v.x, v.y, v.z)
}

fn rgb(c: Rgb) -> String {
    format!("{}, {}, {}", c.r, c.g, c.b)
}

fn write_float(f: &mut fmt::Formatter<'_>, indent: usize, name: &str, value: f32) -> fmt::Result {
    pad(f, indent)?;
    writeln!(f, "<float name=\"{name}\" value=\"{value}\"/>")
}

fn write_integer(f: &mut fmt::Formatter<'_>, indent: usize, name: &str, value: u32) -> fmt::Result {
    pad(f, indent)?;
    writeln!(f, "<integer name=\"{name}\" value=\"{value}\"/>")
}

fn write_string(f: &mut fmt::Formatter<'_>, indent: usize, name: &str, value: &str) -> fmt::Result {
    pad(f, indent)?;
    writeln!(f, "<string name=\"{name}\" value=\"{}\"/>", escape(value))
}

fn write_rgb(f: &mut fmt::Formatter<'_>, indent: usize, name: &str, value: Rgb) -> fmt::Result {
    pad(f, indent)?;
    writeln!(f, "<rgb name=\"{name}\" value=\"{}\"/>", rgb(value))
}

fn write_integrator(
    f: &mut fmt::Formatter<'_>,
    integrator: &Integrator,
    indent: usize,
    name: Option<&str>,
) -> fmt::Result {
    let name_attr = match name {
        Some(n) => format!(" name=\"{n}\""),
        None => String::new(),
    };
    match integrator {
        Integrator::Path { max_depth } => {
            pad(f, indent)?;
            writeln!(f, "<integrator type=\"path\"{name_attr}>")?;
            write_integer(f, indent + 1, "max_depth", *max_depth)?;
        }
        Integrator::Aov { outputs, inner } => {
            pad(f, indent)?;
            writeln!(f, "<integrator type=\"aov\"{name_attr}>")?;
            let mut aovs = String::new();
            for (i, out) in outputs.iter().enumerate() {
                if i > 0 {
                    aovs.push(',');
                }
                write!(aovs, "{}:{}", out.name, out.kind.keyword())?;
            }
            write_string(f, indent + 1, "aovs", &aovs)?;
            write_integrator(f, inner, indent + 1, Some("inner"))?;
        }
    }
    pad(f, indent)?;
    writeln!(f, "</integrator>")
}

fn write_sensor(f: &mut fmt::Formatter<'_>, sensor: &Sensor, indent: usize) -> fmt::Result {
    pad(f, indent)?;
    writeln!(f, "<sensor type=\"perspective\">")?;
    write_float(f, indent + 1, "fov", sensor.fov_deg)?;
    write_transform(f, &sensor.to_world, indent + 1)?;
    write_film(f, &sensor.film, indent + 1)?;
    let Sampler::Independent { sample_count } = sensor.sampler;
    pad(f, indent + 1)?;
    writeln!(f, "<sampler type=\"independent\">")?;
    write_integer(f, indent + 2, "sample_count", sample_count)?;
    pad(f, indent + 1)?;
    writeln!(f, "</sampler>")?;
    pad(f, indent)?;
    writeln!(f, "</sensor>")
}

fn write_film(f: &mut fmt::Formatter<'_>, film: &Film, indent: usize) -> fmt::Result {
    pad(f, indent)?;
    writeln!(f, "<film type=\"hdrfilm\">")?;
    write_integer(f, indent + 1, "width", film.width)?;
    write_integer(f, indent + 1, "height", film.height)?;
    let format = match film.pixel_format {
        PixelFormat::Rgb => "rgb",
        PixelFormat::Rgba => "rgba",
    };
    write_string(f, indent + 1, "pixel_format", format)?;
    pad(f, indent)?;
    writeln!(f, "</film>")
}

fn write_transform(f: &mut fmt::Formatter<'_>, transform: &Transform, indent: usize) -> fmt::Result {
    if transform.is_identity() {
        return Ok(());
    }
    pad(f, indent)?;
    writeln!(f, "<transform name=\"to_world\">")?;
    for step in &transform.steps {
        pad(f, indent + 1)?;
        match step {
            Step::Translate(v) => writeln!(f, "<translate value=\"{}\"/>", vec3(*v))?,
            Step::Scale(v) => writeln!(f, "<scale value=\"{}\"/>", vec3(*v))?,
            Step::Rotate { axis, angle_deg } => {
                writeln!(f, "<rotate value=\"{}\" angle=\"{angle_deg}\"/>", vec3(*axis))?
            }
            Step::LookAt { origin, target, up } => writeln!(
                f,
                "<lookat origin=\"{}\" target=\"{}\" up=\"{}\"/>",
                vec3(*origin),
                vec3(*target),
                vec3(*up)
            )?,
        }
    }
    pad(f, indent)?;
    writeln!(f, "</transform>")
}

fn write_emitter(f: &mut fmt::Formatter<'_>, emitter: &Emitter, indent: usize) -> fmt::Result {
    match emitter {
        Emitter::Directional {
            direction,
            irradiance,
        } => {
            pad(f, indent)?;
            writeln!(f, "<emitter type=\"directional\">")?;
            pad(f, indent + 1)?;
            writeln!(f, "<vector name=\"direction\" value=\"{}\"/>", vec3(*direction))?;
            write_rgb(f, indent + 1, "irradiance", *irradiance)?;
        }
        Emitter::Point {
            position,
            intensity,
        } => {
            pad(f, indent)?;
            writeln!(f, "<emitter type=\"point\">")?;
            pad(f, indent + 1)?;
            writeln!(f, "<point name=\"position\" value=\"{}\"/>", vec3(*position))?;
            write_rgb(f, indent + 1, "intensity", *intensity)?;
        }
        Emitter::Area { radiance } => {
            pad(f, indent)?;
            writeln!(f, "<emitter type=\"area\">")?;
            write_rgb(f, indent + 1, "radiance", *radiance)?;
        }
    }
    pad(f, indent)?;
    writeln!(f, "</emitter>")
}

fn write_bsdf(f: &mut fmt::Formatter<'_>, bsdf: &Bsdf, indent: usize) -> fmt::Result {
    match bsdf {
        Bsdf::Principled {
            base_color,
            roughness,
            sheen,
            sheen_tint,
            anisotropic,
            specular,
        } => {
            pad(f, indent)?;
            writeln!(f, "<bsdf type=\"principled\">")?;
            write_rgb(f, indent + 1, "base_color", *base_color)?;
            write_float(f, indent + 1, "roughness", *roughness)?;
            write_float(f, indent + 1, "sheen", *sheen)?;
            write_float(f, indent + 1, "sheen_tint", *sheen_tint)?;
            write_float(f, indent + 1, "anisotropic", *anisotropic)?;
            write_float(f, indent + 1, "specular", *specular)?;
        }
        Bsdf::Diffuse { reflectance } => {
            pad(f, indent)?;
            writeln!(f, "<bsdf type=\"diffuse\">")?;
            write_rgb(f, indent + 1, "reflectance", *reflectance)?;
        }
        Bsdf::Dielectric { int_ior, ext_ior } => {
            pad(f, indent)?;
            writeln!(f, "<bsdf type=\"dielectric\">")?;
            write_float(f, indent + 1, "int_ior", *int_ior)?;
            write_float(f, indent + 1, "ext_ior", *ext_ior)?;
        }
        Bsdf::RoughConductor {
            material,
            distribution,
            alpha,
        } => {
            pad(f, indent)?;
            writeln!(f, "<bsdf type=\"roughconductor\">")?;
            write_string(f, indent + 1, "material", material)?;
            write_string(f, indent + 1, "distribution", distribution)?;
            write_float(f, indent + 1, "alpha", *alpha)?;
        }
        Bsdf::Null => {
            pad(f, indent)?;
            return writeln!(f, "<bsdf type=\"null\"/>");
        }
    }
    pad(f, indent)?;
    writeln!(f, "</bsdf>")
}

fn write_shape(f: &mut fmt::Formatter<'_>, shape: &Shape, indent: usize) -> fmt::Result {
    let kind = match &shape.geometry {
        Geometry::Obj { .. } => "obj",
        Geometry::Sphere { .. } => "sphere",
        Geometry::Rectangle => "rectangle",
    };
    pad(f, indent)?;
    writeln!(f, "<shape type=\"{kind}\" id=\"{}\">", escape(&shape.id))?;
    match &shape.geometry {
        Geometry::Obj { filename } => {
            write_string(f, indent + 1, "filename", &filename.to_string_lossy())?;
        }
        Geometry::Sphere { center, radius } => {
            pad(f, indent + 1)?;
            writeln!(f, "<point name=\"center\" value=\"{}\"/>", vec3(*center))?;
            write_float(f, indent + 1, "radius", *radius)?;
        }
        Geometry::Rectangle => {}
    }
    write_transform(f, &shape.to_world, indent + 1)?;
    if let Some(emitter) = &shape.emitter {
        write_emitter(f, emitter, indent + 1)?;
    }
    if let Some(bsdf) = &shape.bsdf {
        write_bsdf(f, bsdf, indent + 1)?;
    }
    pad(f, indent)?;
    writeln!(f, "</shape>")
}
