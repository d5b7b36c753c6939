//! Runtime configuration for the demo CLI.
//!
//! A JSON file supplies the input path, output options and any parameter
//! overrides; omitted parameter fields keep their defaults. This is CLI
//! glue, not core pipeline surface.

use crate::detector::PlanParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Write the assembled plan as pretty JSON to this path.
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    /// Identifier stored in the plan record; defaults to the input path.
    pub image_reference: Option<String>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub plan_params: PlanParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{ "input_path": "plan.png" }"#).unwrap();
        assert_eq!(config.input_path, PathBuf::from("plan.png"));
        assert!(config.image_reference.is_none());
        assert!(config.output.json_out.is_none());
        assert_eq!(config.plan_params.axis_tolerance, 10.0);
    }

    #[test]
    fn overrides_apply() {
        let config: RuntimeConfig = serde_json::from_str(
            r#"{
                "input_path": "plan.png",
                "image_reference": "plans/site-a.png",
                "output": { "json_out": "out/plan.json" },
                "plan_params": { "line": { "vote_threshold": 80 } }
            }"#,
        )
        .unwrap();
        assert_eq!(config.image_reference.as_deref(), Some("plans/site-a.png"));
        assert_eq!(
            config.output.json_out.as_deref(),
            Some(Path::new("out/plan.json"))
        );
        assert_eq!(config.plan_params.line.vote_threshold, 80);
        assert_eq!(config.plan_params.line.min_length, 100.0);
    }
}
