//! Orchestration layer: region-sequential, function-concurrent packaging

pub mod orchestrator;
pub mod region_batch;
pub mod report;

pub use orchestrator::PackagingOrchestrator;
pub use region_batch::{RegionBatchRunner, DEFAULT_MAX_CONCURRENCY};
pub use report::ResultReport;
