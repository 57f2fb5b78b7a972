//! Packaging Orchestrator - drives a whole packaging run
//!
//! Regions are processed strictly sequentially in caller order; only the
//! function packaging within one region is concurrent (see
//! [`RegionBatchRunner`]). Per-task failures are recorded, never escalated,
//! so a run always completes with a full report once pre-flight checks pass.

use crate::core::{FunctionRef, PackageTask, PackagerError, PackagingOperation};
use crate::orchestration::region_batch::{RegionBatchRunner, DEFAULT_MAX_CONCURRENCY};
use crate::orchestration::report::ResultReport;
use std::collections::HashSet;
use std::sync::Arc;

/// Orchestrates packaging of many functions across many regions
pub struct PackagingOrchestrator {
    runner: RegionBatchRunner,
    valid_regions: HashSet<String>,
}

impl PackagingOrchestrator {
    /// Create an orchestrator with the default per-region concurrency bound
    pub fn new(
        operation: Arc<dyn PackagingOperation>,
        valid_regions: impl IntoIterator<Item = String>,
    ) -> Self {
        Self::with_concurrency(operation, valid_regions, DEFAULT_MAX_CONCURRENCY)
    }

    /// Create an orchestrator with an explicit per-region concurrency bound
    pub fn with_concurrency(
        operation: Arc<dyn PackagingOperation>,
        valid_regions: impl IntoIterator<Item = String>,
        max_concurrency: usize,
    ) -> Self {
        Self {
            runner: RegionBatchRunner::with_concurrency(operation, max_concurrency),
            valid_regions: valid_regions.into_iter().collect(),
        }
    }

    /// Package every function for every requested region under one stage
    ///
    /// Pre-flight violations (empty function list, empty stage, unknown
    /// region) fail before any packaging operation is dispatched. After
    /// pre-flight, the run never aborts early: every (function, region) pair
    /// produces exactly one recorded outcome.
    pub async fn run(
        &self,
        functions: &[FunctionRef],
        stage: &str,
        regions: &[String],
    ) -> Result<ResultReport, PackagerError> {
        if functions.is_empty() {
            return Err(PackagerError::NoFunctions);
        }
        if stage.is_empty() {
            return Err(PackagerError::StageRequired);
        }
        for region in regions {
            if !self.valid_regions.contains(region) {
                return Err(PackagerError::InvalidRegion {
                    region: region.clone(),
                });
            }
        }

        println!(
            "Packaging {} function(s) in \"{}\" for the following regions: {}",
            functions.len(),
            stage,
            regions.join(", ")
        );

        let mut report = ResultReport::new();

        for region in regions {
            let tasks: Vec<PackageTask> = functions
                .iter()
                .map(|function| PackageTask::new(&function.name, stage, region))
                .collect();

            let outcomes = self.runner.run(tasks).await;
            report.record_region(region, outcomes);
        }

        Ok(report)
    }
}
