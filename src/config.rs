use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::drawing::Tool;
use crate::rough::{RoughBridge, RoughGenerator, RoughOptions};

pub const CONFIG_ENV: &str = "ROUGHSKETCH_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub stroke_color: [f32; 4],
    pub stroke_width: f32,
    pub roughness: f32,
    pub bowing: f32,
    pub max_randomness_offset: f32,
    pub curve_step_count: u32,
    pub disable_multi_stroke: bool,
    pub seed: Option<u64>,
    pub background: [f32; 4],
    pub initial_tool: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        let rough = RoughOptions::default();
        Self {
            stroke_color: [0.0, 0.0, 0.0, 1.0],
            stroke_width: rough.stroke_width,
            roughness: rough.roughness,
            bowing: rough.bowing,
            max_randomness_offset: rough.max_randomness_offset,
            curve_step_count: rough.curve_step_count,
            disable_multi_stroke: rough.disable_multi_stroke,
            seed: None,
            background: [1.0, 1.0, 1.0, 1.0],
            initial_tool: "line".to_string(),
        }
    }
}

impl SketchConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid sketch config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text)
    }

    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(e) => {
                log::warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn tool(&self) -> Tool {
        Tool::from_name(&self.initial_tool)
    }

    pub fn rough_options(&self) -> RoughOptions {
        RoughOptions {
            roughness: self.roughness,
            bowing: self.bowing,
            stroke_width: self.stroke_width,
            max_randomness_offset: self.max_randomness_offset,
            curve_step_count: self.curve_step_count,
            disable_multi_stroke: self.disable_multi_stroke,
            ..RoughOptions::default()
        }
    }

    pub fn bridge(&self) -> RoughBridge {
        RoughBridge::new(
            RoughGenerator::new(self.rough_options(), self.seed),
            self.stroke_color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SketchConfig::from_json("{}").unwrap(), SketchConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            SketchConfig::from_json(r#"{ "roughness": 2.5, "seed": 4, "initial_tool": "ellipse" }"#)
                .unwrap();

        assert_eq!(config.roughness, 2.5);
        assert_eq!(config.seed, Some(4));
        assert_eq!(config.tool(), Tool::Ellipse);
        assert_eq!(config.stroke_width, SketchConfig::default().stroke_width);
        assert_eq!(config.rough_options().roughness, 2.5);
    }

    #[test]
    fn test_unknown_tool_is_selection() {
        let config = SketchConfig::from_json(r#"{ "initial_tool": "spray" }"#).unwrap();
        assert_eq!(config.tool(), Tool::Selection);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(SketchConfig::from_json("{ roughness: }").is_err());
        assert!(SketchConfig::from_json(r#"{ "roughness": "high" }"#).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = SketchConfig::load(Path::new("/nonexistent/roughsketch.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to read"));
    }
}
