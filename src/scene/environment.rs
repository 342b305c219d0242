//! Environment — plain data.
//!
//! Ambient light, background color and fog configuration for a scene.

use glam::Vec3;

/// Distance fog parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Fog {
    pub color: Vec3,
    pub near: f32,
    pub far: f32,
}

/// Scene-wide lighting environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    /// Ambient light color.
    pub ambient_color: Vec3,
    /// Ambient light intensity.
    pub ambient_intensity: f32,
    /// Clear/background color.
    pub background: Vec3,
    /// Optional distance fog.
    pub fog: Option<Fog>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ambient_color: Vec3::ONE,
            ambient_intensity: 0.0,
            background: Vec3::ZERO,
            fog: None,
        }
    }

    pub fn set_ambient(&mut self, color: Vec3, intensity: f32) {
        self.ambient_color = color;
        self.ambient_intensity = intensity;
    }

    pub fn set_fog(&mut self, color: Vec3, near: f32, far: f32) {
        self.fog = Some(Fog { color, near, far });
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
