//! Core trait and types for function packaging
//!
//! This module defines the packaging operation abstraction plus the value
//! types that flow through a packaging run: tasks, artifacts and outcomes.

use crate::core::error::PackagingError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Function references
// ============================================================================

/// Lightweight handle to a project function, as resolved by the project model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRef {
    pub name: String,
}

impl FunctionRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ============================================================================
// Tasks
// ============================================================================

/// One unit of packaging work: a function packaged for one region under one stage
///
/// Created by the orchestrator per (function × region) pair and consumed by
/// exactly one [`PackagingOperation`] invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageTask {
    pub function: String,
    pub stage: String,
    pub region: String,
}

impl PackageTask {
    pub fn new(
        function: impl Into<String>,
        stage: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            function: function.into(),
            stage: stage.into(),
            region: region.into(),
        }
    }
}

// ============================================================================
// Artifacts
// ============================================================================

/// Successful result of one packaging task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactResult {
    pub function: String,
    pub stage: String,
    pub region: String,

    /// Location of the produced package
    pub artifact_path: String,

    /// When the artifact was produced
    pub packaged_at: DateTime<Utc>,
}

impl ArtifactResult {
    /// Build an artifact result for a completed task
    pub fn for_task(task: &PackageTask, artifact_path: impl Into<String>) -> Self {
        Self {
            function: task.function.clone(),
            stage: task.stage.clone(),
            region: task.region.clone(),
            artifact_path: artifact_path.into(),
            packaged_at: Utc::now(),
        }
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// The single outcome of one packaging task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded(ArtifactResult),
    Failed(PackagingError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded(_))
    }
}

// ============================================================================
// Packaging operation trait
// ============================================================================

/// The injected "package one function for one region" operation
///
/// The orchestration layer is agnostic to how an artifact is built; it only
/// schedules invocations of this trait and collects their outcomes. An
/// implementation must signal failure through [`PackagingError`] so that the
/// failure of one task never affects its siblings.
#[async_trait]
pub trait PackagingOperation: Send + Sync {
    /// Produce the artifact for a single task
    async fn package(&self, task: &PackageTask) -> Result<ArtifactResult, PackagingError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_task_creation() {
        let task = PackageTask::new("thumbnailer", "dev", "us-east-1");

        assert_eq!(task.function, "thumbnailer");
        assert_eq!(task.stage, "dev");
        assert_eq!(task.region, "us-east-1");
    }

    #[test]
    fn test_artifact_result_for_task() {
        let task = PackageTask::new("thumbnailer", "prod", "eu-west-1");
        let artifact = ArtifactResult::for_task(&task, "_meta/_tmp/thumbnailer_prod");

        assert_eq!(artifact.function, "thumbnailer");
        assert_eq!(artifact.stage, "prod");
        assert_eq!(artifact.region, "eu-west-1");
        assert_eq!(artifact.artifact_path, "_meta/_tmp/thumbnailer_prod");
    }

    #[test]
    fn test_outcome_is_success() {
        let task = PackageTask::new("f", "dev", "us-east-1");
        let ok = Outcome::Succeeded(ArtifactResult::for_task(&task, "out"));
        let err = Outcome::Failed(PackagingError::new("f", "us-east-1", "boom"));

        assert!(ok.is_success());
        assert!(!err.is_success());
    }

    #[test]
    fn test_package_task_serialization() {
        let task = PackageTask::new("resize", "dev", "ap-northeast-1");
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"region\":\"ap-northeast-1\""));

        let deserialized: PackageTask = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, task);
    }
}
