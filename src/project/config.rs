//! Project file structures
//!
//! Type-safe model of the `packager.yml` / `packager.json` project file with
//! serde support. Resolution logic lives in [`model`](crate::project::model);
//! this module only describes the on-disk shape.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root project file object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectConfig {
    /// Project name
    pub name: String,

    /// Deployment stages, each with its ordered target region list
    pub stages: HashMap<String, StageConfig>,

    /// Function definitions, keyed by function name
    pub functions: HashMap<String, FunctionConfig>,
}

/// One deployment stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageConfig {
    /// Target regions for this stage, in deploy order
    pub regions: Vec<String>,
}

/// One deployable function
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FunctionConfig {
    /// Handler entry point (informational; forwarded to the packager)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,

    /// Runtime identifier (informational)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,

    /// Source directory relative to the project root
    /// (default: `functions/<name>`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    /// Extra path fragments to exclude from the artifact
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_project() {
        let yaml = r#"
name: image-service
stages:
  dev:
    regions:
      - us-east-1
  prod:
    regions:
      - us-east-1
      - eu-west-1
functions:
  thumbnailer:
    handler: handler.process
    runtime: nodejs
  cleanup: {}
"#;

        let config: ProjectConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.name, "image-service");
        assert_eq!(config.stages.len(), 2);
        assert_eq!(
            config.stages["prod"].regions,
            vec!["us-east-1", "eu-west-1"]
        );
        assert_eq!(
            config.functions["thumbnailer"].handler.as_deref(),
            Some("handler.process")
        );
        assert!(config.functions["cleanup"].handler.is_none());
        assert!(config.functions["cleanup"].exclude.is_empty());
    }

    #[test]
    fn test_parse_json_project() {
        let json = r#"{
            "name": "image-service",
            "stages": { "dev": { "regions": ["us-east-1"] } },
            "functions": {
                "resize": { "dir": "src/resize", "exclude": ["fixtures"] }
            }
        }"#;

        let config: ProjectConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.functions["resize"].dir.as_deref(), Some("src/resize"));
        assert_eq!(config.functions["resize"].exclude, vec!["fixtures"]);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let mut stages = HashMap::new();
        stages.insert(
            "dev".to_string(),
            StageConfig {
                regions: vec!["us-east-1".to_string()],
            },
        );
        let mut functions = HashMap::new();
        functions.insert("f".to_string(), FunctionConfig::default());

        let config = ProjectConfig {
            name: "p".to_string(),
            stages,
            functions,
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: ProjectConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
