//! Resolved project model
//!
//! Wraps a validated [`ProjectConfig`] together with its root directory and
//! answers the lookups the CLI and orchestration layers need: functions,
//! stages, per-stage region lists and filesystem locations.

use crate::core::{FunctionRef, PackagerError};
use crate::project::config::{FunctionConfig, ProjectConfig};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Directory under the project root used for build scratch space
pub const TMP_DIR: &[&str] = &["_meta", "_tmp"];

/// A loaded, validated project
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: ProjectConfig,
}

impl Project {
    pub fn new(root: PathBuf, config: ProjectConfig) -> Self {
        Self { root, config }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn root_path(&self) -> &Path {
        &self.root
    }

    /// All functions defined in the project, sorted by name
    pub fn get_all_functions(&self) -> Vec<FunctionRef> {
        let mut names: Vec<&String> = self.config.functions.keys().collect();
        names.sort();
        names.into_iter().map(FunctionRef::new).collect()
    }

    /// Look up a single function by name
    pub fn get_function(&self, name: &str) -> Option<FunctionRef> {
        self.config
            .functions
            .contains_key(name)
            .then(|| FunctionRef::new(name))
    }

    /// Raw configuration of a function, if defined
    pub fn function_config(&self, name: &str) -> Option<&FunctionConfig> {
        self.config.functions.get(name)
    }

    /// All stage names, sorted for stable prompting
    pub fn get_all_stages(&self) -> Vec<String> {
        let mut stages: Vec<String> = self.config.stages.keys().cloned().collect();
        stages.sort();
        stages
    }

    /// Ordered region list of one stage
    pub fn get_all_region_names(&self, stage: &str) -> Result<Vec<String>, PackagerError> {
        let stage_config =
            self.config
                .stages
                .get(stage)
                .ok_or_else(|| PackagerError::UnknownStage {
                    stage: stage.to_string(),
                })?;

        if stage_config.regions.is_empty() {
            return Err(PackagerError::NoRegions {
                stage: stage.to_string(),
            });
        }

        Ok(stage_config.regions.clone())
    }

    /// Source directory of a function (configured `dir` or `functions/<name>`)
    pub fn function_dir(&self, name: &str) -> PathBuf {
        let relative = self
            .function_config(name)
            .and_then(|f| f.dir.clone())
            .unwrap_or_else(|| format!("functions/{}", name));
        self.root.join(relative)
    }

    /// Scratch directory for produced artifacts
    pub fn tmp_dir(&self) -> PathBuf {
        TMP_DIR.iter().fold(self.root.clone(), |p, part| p.join(part))
    }

    /// Make sure the scratch directory exists before a run
    pub async fn ensure_tmp_dir(&self) -> Result<PathBuf, PackagerError> {
        let tmp = self.tmp_dir();
        fs::create_dir_all(&tmp).await?;
        Ok(tmp)
    }
}
