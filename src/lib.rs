//! function-packager - batch packaging of serverless functions
//!
//! Packages a set of deployable function units for one or more target
//! regions under a chosen deployment stage, producing one artifact per
//! (function, region) pair. Regions are processed sequentially; packaging
//! within a region runs with bounded concurrency. Per-task failures are
//! recorded in the final report and never abort the run.

pub mod core;
pub mod orchestration;
pub mod packagers;
pub mod project;

pub use self::core::{
    ArtifactResult, FunctionRef, Outcome, PackageTask, PackagerError, PackagingError,
    PackagingOperation,
};
pub use orchestration::{PackagingOrchestrator, RegionBatchRunner, ResultReport};
pub use packagers::DistPackager;
pub use project::{Project, ProjectLoader};
