//! Settings import/export.
//!
//! A deliberately flat surface: the scene name and the camera position,
//! nothing else. Importing only re-selects a scene by name — animator
//! state is rebuilt by the scene's construction routine, never restored.

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Exported application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the active scene.
    pub scene: String,
    /// Camera position, if a camera was posed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<[f32; 3]>,
}

impl Settings {
    /// Parses settings from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes settings to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
