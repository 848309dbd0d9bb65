mod flythrough;
mod ring;

pub use flythrough::create_flythrough_scene;
pub use ring::create_ring_scene;

use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::path::PathConfig;

/// Maximum lights per scene: one shadow caster plus one fill light.
pub const MAX_LIGHTS: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubeConfig {
    pub position: Vec3,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

fn default_scale() -> f32 {
    1.0
}

fn default_color() -> [f32; 3] {
    // coral, same as the built-in flythrough cubes
    [1.0, 0.5, 0.31]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightConfig {
    pub position: Vec3,
    #[serde(default = "default_light_color")]
    pub color: Vec3,
}

fn default_light_color() -> Vec3 {
    Vec3::ONE
}

/// Complete scene description: cube field, camera path, lights. Built-in
/// constructors produce these directly; `load` reads one from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub cubes: Vec<CubeConfig>,
    pub path: PathConfig,
    pub lights: Vec<LightConfig>,
}

impl SceneConfig {
    /// Reads a scene description from a JSON file.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        let scene: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse scene file {}", path.display()))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Resolves a built-in scene name, or falls back to loading `name` as a
    /// file path.
    pub fn resolve(name: &str) -> Result<Self> {
        match name {
            "flythrough" => Ok(create_flythrough_scene()),
            "ring" => Ok(create_ring_scene()),
            other => Self::load(std::path::Path::new(other)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cubes.is_empty() {
            bail!("scene has no cubes");
        }
        if self.lights.is_empty() || self.lights.len() > MAX_LIGHTS {
            bail!(
                "scene must declare 1 to {} lights, got {}",
                MAX_LIGHTS,
                self.lights.len()
            );
        }
        Ok(())
    }
}
