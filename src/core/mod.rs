//! Core abstractions: errors, tasks, outcomes and the packaging operation trait

pub mod error;
pub mod traits;

pub use error::{PackagerError, PackagingError};
pub use traits::{ArtifactResult, FunctionRef, Outcome, PackageTask, PackagingOperation};
