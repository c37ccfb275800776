use serde::{Deserialize, Serialize};

use crate::error::GlobeError;

pub const DEFAULT_SURFACE_SIZE: u32 = 500;
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Construction parameters for a [`Globe`](crate::Globe).
///
/// Only `texture_path` is required when deserializing; everything else has a
/// default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobeConfig {
    #[serde(default = "default_surface_size")]
    pub surface_width: u32,
    #[serde(default = "default_surface_size")]
    pub surface_height: u32,
    #[serde(default = "default_radius")]
    pub radius: f64,
    pub texture_path: String,
    /// Resume idle rotation once a camera flight completes. Off by default:
    /// after the first marker the globe stays still.
    #[serde(default)]
    pub resume_idle_rotation: bool,
}

fn default_surface_size() -> u32 {
    DEFAULT_SURFACE_SIZE
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

impl GlobeConfig {
    pub fn new(texture_path: impl Into<String>) -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_SIZE,
            surface_height: DEFAULT_SURFACE_SIZE,
            radius: DEFAULT_RADIUS,
            texture_path: texture_path.into(),
            resume_idle_rotation: false,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, GlobeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.surface_width = width;
        self.surface_height = height;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_idle_rotation_resume(mut self, resume: bool) -> Self {
        self.resume_idle_rotation = resume;
        self
    }

    pub fn aspect(&self) -> f64 {
        f64::from(self.surface_width) / f64::from(self.surface_height.max(1))
    }

    /// Reject geometry the scene cannot represent. Texture paths are checked
    /// separately when the texture is resolved.
    pub fn validate(&self) -> Result<(), GlobeError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GlobeError::InvalidConfig {
                field: "radius",
                reason: format!("must be a positive finite number, got {}", self.radius),
            });
        }
        if self.surface_width == 0 {
            return Err(GlobeError::InvalidConfig {
                field: "surface_width",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.surface_height == 0 {
            return Err(GlobeError::InvalidConfig {
                field: "surface_height",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
