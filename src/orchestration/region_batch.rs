//! Region Batch Runner - runs all packaging tasks for one region
//!
//! Features:
//! - Bounded concurrency (default: 5 in-flight operations)
//! - Sliding-window admission via a semaphore, not fixed chunking
//! - Per-task failure isolation: one failure never cancels sibling tasks
//! - Exactly one outcome per task, including panicked workers

use crate::core::{Outcome, PackageTask, PackagingError, PackagingOperation};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Default maximum number of in-flight packaging operations per region
pub const DEFAULT_MAX_CONCURRENCY: usize = 5;

/// Runs the packaging tasks of a single region with a concurrency bound
pub struct RegionBatchRunner {
    operation: Arc<dyn PackagingOperation>,
    max_concurrency: usize,
}

impl RegionBatchRunner {
    /// Create a runner with the default concurrency bound
    pub fn new(operation: Arc<dyn PackagingOperation>) -> Self {
        Self::with_concurrency(operation, DEFAULT_MAX_CONCURRENCY)
    }

    /// Create a runner with an explicit concurrency bound
    ///
    /// A bound of zero would never admit a task; it is clamped to one.
    pub fn with_concurrency(operation: Arc<dyn PackagingOperation>, max_concurrency: usize) -> Self {
        Self {
            operation,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Run all tasks, returning exactly one outcome per task
    ///
    /// Tasks are admitted in queue order as permits free up; completion order
    /// is not guaranteed. Failures are converted to [`Outcome::Failed`] and
    /// never abort the batch. An empty task list dispatches nothing.
    pub async fn run(&self, tasks: Vec<PackageTask>) -> Vec<(PackageTask, Outcome)> {
        if tasks.is_empty() {
            return Vec::new();
        }

        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut handles = Vec::with_capacity(tasks.len());

        for task in tasks {
            let semaphore = Arc::clone(&semaphore);
            let operation = Arc::clone(&self.operation);
            let worker_task = task.clone();

            let handle = tokio::spawn(async move {
                let _permit = semaphore.acquire().await.unwrap();
                match operation.package(&worker_task).await {
                    Ok(artifact) => Outcome::Succeeded(artifact),
                    Err(failure) => Outcome::Failed(failure),
                }
            });

            handles.push((task, handle));
        }

        let mut results = Vec::with_capacity(handles.len());
        for (task, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                // A panicked worker still yields one outcome for its task
                Err(e) => Outcome::Failed(
                    PackagingError::new(
                        &task.function,
                        &task.region,
                        format!("Packaging task aborted: {}", e),
                    )
                    .with_trace(format!("{:?}", e)),
                ),
            };
            results.push((task, outcome));
        }

        results
    }
}
