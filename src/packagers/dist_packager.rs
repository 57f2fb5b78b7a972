//! Dist Packager - the built-in packaging operation
//!
//! Stages a function's source tree into a unique directory under the
//! project's `_meta/_tmp` scratch space, one staging directory per
//! (function, stage, region) task. Compression and upload are out of scope;
//! the staged directory is the artifact handed to downstream tooling.

use crate::core::{ArtifactResult, PackageTask, PackagingError, PackagingOperation};
use crate::project::Project;
use aho_corasick::AhoCorasick;
use async_trait::async_trait;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;
use walkdir::WalkDir;

/// Path fragments that never belong in an artifact
const DEFAULT_EXCLUDES: &[&str] = &["node_modules", ".git", "__pycache__", ".DS_Store"];

/// Packaging operation that copies a function's sources into a dist directory
pub struct DistPackager {
    project: Arc<Project>,
}

impl DistPackager {
    pub fn new(project: Arc<Project>) -> Self {
        Self { project }
    }

    /// Build the exclude matcher for one task (defaults + configured extras)
    fn exclude_matcher(&self, task: &PackageTask) -> Result<AhoCorasick, PackagingError> {
        let mut patterns: Vec<String> =
            DEFAULT_EXCLUDES.iter().map(|p| p.to_string()).collect();

        if let Some(config) = self.project.function_config(&task.function) {
            patterns.extend(config.exclude.iter().cloned());
        }

        AhoCorasick::new(&patterns).map_err(|e| {
            PackagingError::new(
                &task.function,
                &task.region,
                format!("Invalid exclude pattern set: {}", e),
            )
        })
    }

    /// Copy the function source tree into `dest`, skipping excluded paths
    fn stage_sources(
        source_dir: &Path,
        dest: &Path,
        excludes: &AhoCorasick,
    ) -> Result<usize, std::io::Error> {
        let mut copied = 0;

        for entry in WalkDir::new(source_dir).follow_links(false) {
            let entry = entry.map_err(std::io::Error::other)?;
            let relative = entry
                .path()
                .strip_prefix(source_dir)
                .map_err(std::io::Error::other)?;

            if relative.as_os_str().is_empty() {
                continue;
            }
            let relative_str = relative.to_string_lossy();
            if excludes.is_match(relative_str.as_bytes()) {
                continue;
            }

            let target = dest.join(relative);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
            } else if entry.file_type().is_file() {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(entry.path(), &target)?;
                copied += 1;
            }
        }

        Ok(copied)
    }
}

#[async_trait]
impl PackagingOperation for DistPackager {
    async fn package(&self, task: &PackageTask) -> Result<ArtifactResult, PackagingError> {
        let source_dir = self.project.function_dir(&task.function);

        if !source_dir.is_dir() {
            return Err(PackagingError::new(
                &task.function,
                &task.region,
                format!("Function directory not found: {}", source_dir.display()),
            ));
        }

        let excludes = self.exclude_matcher(task)?;

        let suffix = Uuid::new_v4().simple().to_string();
        let dist_name = format!(
            "{}_{}_{}_{}",
            task.function,
            task.stage,
            task.region,
            &suffix[..8]
        );
        let dest = self.project.tmp_dir().join(dist_name);

        let staged = fs::create_dir_all(&dest)
            .and_then(|_| Self::stage_sources(&source_dir, &dest, &excludes))
            .map_err(|e| {
                PackagingError::new(
                    &task.function,
                    &task.region,
                    format!("Failed to stage function sources: {}", e),
                )
                .with_trace(format!("{:?}", e))
            })?;

        if staged == 0 {
            return Err(PackagingError::new(
                &task.function,
                &task.region,
                format!("No files to package in {}", source_dir.display()),
            ));
        }

        Ok(ArtifactResult::for_task(task, dest.display().to_string()))
    }
}
