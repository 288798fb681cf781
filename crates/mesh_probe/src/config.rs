//! Scene description parsing for field probing.

use anyhow::{Context, Result};
use isosurface_plugin::{BoxField, Metaball, MetaballsField, PlaneField, ScalarField, SphereField};
use serde::Deserialize;
use std::path::Path;

/// Root scene description.
#[derive(Debug, Deserialize)]
pub struct SceneConfig {
	/// Samples per axis along each grid edge.
	#[serde(default = "default_resolution")]
	pub resolution: usize,
	/// Half-width of the centered sampling cube.
	#[serde(default = "default_extent")]
	pub extent: f32,
	/// Field to probe.
	pub field: FieldConfig,
}

/// Field selection with per-field parameters.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldConfig {
	/// Sphere with the given center and radius.
	Sphere {
		#[serde(default)]
		center: [f32; 3],
		#[serde(default = "default_radius")]
		radius: f32,
	},
	/// Plane tilted around the z axis.
	Plane {
		#[serde(default)]
		height: f32,
		#[serde(default = "default_angle")]
		angle_degrees: f32,
	},
	/// Axis-aligned box.
	Box {
		#[serde(default)]
		center: [f32; 3],
		#[serde(default = "default_half_extents")]
		half_extents: [f32; 3],
	},
	/// Cluster of blended metaballs.
	Metaballs {
		#[serde(default = "default_threshold")]
		threshold: f32,
		balls: Vec<BallConfig>,
	},
}

/// One ball of a metaball cluster.
#[derive(Debug, Deserialize)]
pub struct BallConfig {
	/// Ball center.
	pub center: [f32; 3],
	/// Ball radius.
	pub radius: f32,
	/// Field strength multiplier.
	#[serde(default = "default_strength")]
	pub strength: f32,
}

fn default_resolution() -> usize {
	30
}

fn default_extent() -> f32 {
	1.0
}

fn default_radius() -> f32 {
	0.6
}

fn default_angle() -> f32 {
	45.0
}

fn default_half_extents() -> [f32; 3] {
	[0.5, 0.5, 0.5]
}

fn default_threshold() -> f32 {
	1.0
}

fn default_strength() -> f32 {
	1.0
}

impl SceneConfig {
	/// Load a scene from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read scene file: {}", path.display()))?;
		let scene: SceneConfig =
			toml::from_str(&content).with_context(|| "Failed to parse scene TOML")?;

		if scene.resolution < 2 {
			anyhow::bail!(
				"resolution must be at least 2 samples per axis, got {}",
				scene.resolution
			);
		}
		if !scene.extent.is_finite() || scene.extent <= 0.0 {
			anyhow::bail!("extent must be a positive number, got {}", scene.extent);
		}
		if let FieldConfig::Metaballs { balls, .. } = &scene.field {
			if balls.is_empty() {
				anyhow::bail!("Metaballs scene must list at least one ball");
			}
			if let Some(ball) = balls.iter().find(|b| b.radius <= 0.0) {
				anyhow::bail!("Ball radius must be positive, got {}", ball.radius);
			}
		}

		Ok(scene)
	}
}

impl FieldConfig {
	/// Get the field name for reports.
	pub fn name(&self) -> &str {
		match self {
			FieldConfig::Sphere { .. } => "sphere",
			FieldConfig::Plane { .. } => "plane",
			FieldConfig::Box { .. } => "box",
			FieldConfig::Metaballs { .. } => "metaballs",
		}
	}

	/// Build the runtime field this description names.
	pub fn build(&self) -> Box<dyn ScalarField> {
		match self {
			FieldConfig::Sphere { center, radius } => {
				Box::new(SphereField::new(*radius).with_center(*center))
			}
			FieldConfig::Plane {
				height,
				angle_degrees,
			} => Box::new(
				PlaneField::new()
					.with_height(*height)
					.with_angle_degrees(*angle_degrees),
			),
			FieldConfig::Box {
				center,
				half_extents,
			} => Box::new(BoxField::new(*half_extents).with_center(*center)),
			FieldConfig::Metaballs { threshold, balls } => {
				let balls = balls
					.iter()
					.map(|b| Metaball {
						center: b.center,
						radius: b.radius,
						strength: b.strength,
					})
					.collect();
				Box::new(MetaballsField::new(balls, *threshold))
			}
		}
	}
}
