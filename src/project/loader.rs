//! Project file discovery, parsing and validation
//!
//! Looks for `packager.yml`, `packager.yaml` or `packager.json` in the
//! project root (first match wins), parses it by extension and validates the
//! result before handing back a resolved [`Project`].

use crate::core::PackagerError;
use crate::project::config::ProjectConfig;
use crate::project::model::Project;
use crate::project::provider;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Candidate project file names, in lookup order
const PROJECT_FILES: &[&str] = &["packager.yml", "packager.yaml", "packager.json"];

lazy_static! {
    /// Function names end up in artifact paths, so they are restricted
    static ref FUNCTION_NAME_RE: Regex = Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Loader for project files
pub struct ProjectLoader;

impl ProjectLoader {
    /// Load and validate the project rooted at `project_root`
    pub async fn load(project_root: &Path) -> Result<Project, PackagerError> {
        let file = Self::find_project_file(project_root).await.ok_or_else(|| {
            PackagerError::ProjectNotFound {
                path: project_root.display().to_string(),
            }
        })?;

        let content = fs::read_to_string(&file).await?;
        let config = Self::parse(&file, &content)?;
        Self::validate(&config)?;

        Ok(Project::new(project_root.to_path_buf(), config))
    }

    async fn find_project_file(project_root: &Path) -> Option<PathBuf> {
        for name in PROJECT_FILES {
            let candidate = project_root.join(name);
            if fs::metadata(&candidate).await.is_ok() {
                return Some(candidate);
            }
        }
        None
    }

    fn parse(file: &Path, content: &str) -> Result<ProjectConfig, PackagerError> {
        let is_json = file.extension().map(|e| e == "json").unwrap_or(false);

        let parsed = if is_json {
            serde_json::from_str(content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| PackagerError::ProjectParse {
            path: file.display().to_string(),
            message,
        })
    }

    fn validate(config: &ProjectConfig) -> Result<(), PackagerError> {
        if config.stages.is_empty() {
            return Err(PackagerError::NoStages);
        }

        for stage in config.stages.values() {
            for region in &stage.regions {
                if !provider::is_valid_region(region) {
                    return Err(PackagerError::InvalidRegion {
                        region: region.clone(),
                    });
                }
            }
        }

        for name in config.functions.keys() {
            if !FUNCTION_NAME_RE.is_match(name) {
                return Err(PackagerError::InvalidFunctionName { name: name.clone() });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_project(dir: &TempDir, name: &str, content: &str) {
        let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
        write!(file, "{}", content).unwrap();
    }

    const VALID_YAML: &str = r#"
name: image-service
stages:
  dev:
    regions: [us-east-1]
functions:
  thumbnailer: {}
"#;

    #[tokio::test]
    async fn test_load_yaml_project() {
        let dir = TempDir::new().unwrap();
        write_project(&dir, "packager.yml", VALID_YAML);

        let project = ProjectLoader::load(dir.path()).await.unwrap();

        assert_eq!(project.name(), "image-service");
        assert_eq!(project.get_all_stages(), vec!["dev"]);
    }

    #[tokio::test]
    async fn test_load_json_project() {
        let dir = TempDir::new().unwrap();
        write_project(
            &dir,
            "packager.json",
            r#"{
                "name": "svc",
                "stages": { "prod": { "regions": ["eu-west-1"] } },
                "functions": { "f": {} }
            }"#,
        );

        let project = ProjectLoader::load(dir.path()).await.unwrap();
        assert_eq!(
            project.get_all_region_names("prod").unwrap(),
            vec!["eu-west-1"]
        );
    }

    #[tokio::test]
    async fn test_missing_project_file() {
        let dir = TempDir::new().unwrap();
        let result = ProjectLoader::load(dir.path()).await;

        assert!(matches!(result, Err(PackagerError::ProjectNotFound { .. })));
    }

    #[tokio::test]
    async fn test_parse_error() {
        let dir = TempDir::new().unwrap();
        write_project(&dir, "packager.yml", "name: [unclosed");

        let result = ProjectLoader::load(dir.path()).await;
        assert!(matches!(result, Err(PackagerError::ProjectParse { .. })));
    }

    #[tokio::test]
    async fn test_invalid_region_in_stage() {
        let dir = TempDir::new().unwrap();
        write_project(
            &dir,
            "packager.yml",
            r#"
name: svc
stages:
  dev:
    regions: [atlantis-1]
functions:
  f: {}
"#,
        );

        let result = ProjectLoader::load(dir.path()).await;
        match result {
            Err(PackagerError::InvalidRegion { region }) => assert_eq!(region, "atlantis-1"),
            other => panic!("expected InvalidRegion, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_no_stages_rejected() {
        let dir = TempDir::new().unwrap();
        write_project(
            &dir,
            "packager.yml",
            "name: svc\nstages: {}\nfunctions:\n  f: {}\n",
        );

        let result = ProjectLoader::load(dir.path()).await;
        assert!(matches!(result, Err(PackagerError::NoStages)));
    }

    #[tokio::test]
    async fn test_invalid_function_name_rejected() {
        let dir = TempDir::new().unwrap();
        write_project(
            &dir,
            "packager.yml",
            r#"
name: svc
stages:
  dev:
    regions: [us-east-1]
functions:
  "bad name!": {}
"#,
        );

        let result = ProjectLoader::load(dir.path()).await;
        assert!(matches!(
            result,
            Err(PackagerError::InvalidFunctionName { .. })
        ));
    }

    #[tokio::test]
    async fn test_yml_preferred_over_json() {
        let dir = TempDir::new().unwrap();
        write_project(&dir, "packager.yml", VALID_YAML);
        write_project(
            &dir,
            "packager.json",
            r#"{ "name": "other", "stages": { "dev": { "regions": [] } }, "functions": {} }"#,
        );

        let project = ProjectLoader::load(dir.path()).await.unwrap();
        assert_eq!(project.name(), "image-service");
    }
}
