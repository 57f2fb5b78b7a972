//! Error handling for function packaging
//!
//! Two error classes exist: fatal configuration errors ([`PackagerError`])
//! that abort a run before any packaging starts, and per-task packaging
//! failures ([`PackagingError`]) that are caught at the region batch level
//! and recorded in the final report instead of propagating.

use thiserror::Error;

/// Fatal pre-flight error for packaging runs
///
/// Every variant aborts the entire run with no partial report.
#[derive(Error, Debug)]
pub enum PackagerError {
    // Project resolution errors
    #[error("No project file found in {path} (expected packager.yml, packager.yaml or packager.json)")]
    ProjectNotFound { path: String },

    #[error("Failed to parse project file {path}: {message}")]
    ProjectParse { path: String, message: String },

    #[error("Invalid function name \"{name}\" (allowed: letters, digits, '-' and '_')")]
    InvalidFunctionName { name: String },

    // Stage errors
    #[error("Stage is required")]
    StageRequired,

    #[error("No existing stages in the project")]
    NoStages,

    #[error("Stage \"{stage}\" is not defined in the project")]
    UnknownStage { stage: String },

    // Region errors
    #[error("Invalid region specified: {region}")]
    InvalidRegion { region: String },

    #[error("No regions defined for stage \"{stage}\"")]
    NoRegions { stage: String },

    // Function selection errors
    #[error("Function \"{name}\" doesn't exist in your project")]
    FunctionNotFound { name: String },

    #[error("You don't have any functions in your project")]
    NoFunctions,

    // I/O errors during pre-flight scaffolding
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackagerError {
    /// Get error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProjectNotFound { .. } => "PROJECT_NOT_FOUND",
            Self::ProjectParse { .. } => "PROJECT_PARSE",
            Self::InvalidFunctionName { .. } => "INVALID_FUNCTION_NAME",
            Self::StageRequired => "STAGE_REQUIRED",
            Self::NoStages => "NO_STAGES",
            Self::UnknownStage { .. } => "UNKNOWN_STAGE",
            Self::InvalidRegion { .. } => "INVALID_REGION",
            Self::NoRegions { .. } => "NO_REGIONS",
            Self::FunctionNotFound { .. } => "FUNCTION_NOT_FOUND",
            Self::NoFunctions => "NO_FUNCTIONS",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

/// Per-task packaging failure for one (function, region) pair
///
/// Produced by a [`PackagingOperation`](crate::core::PackagingOperation)
/// invocation. Recorded under its region in the result report; never
/// escalated past the region batch runner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{region}] {function}: {message}")]
pub struct PackagingError {
    /// Function that failed to package
    pub function: String,

    /// Region the task was targeting
    pub region: String,

    /// Human-readable failure description
    pub message: String,

    /// Raw diagnostic trace, when the underlying failure carried one
    pub trace: Option<String>,
}

impl PackagingError {
    /// Create a new packaging error without diagnostic trace
    pub fn new(
        function: impl Into<String>,
        region: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            function: function.into(),
            region: region.into(),
            message: message.into(),
            trace: None,
        }
    }

    /// Attach a diagnostic trace to this error
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_region_error() {
        let error = PackagerError::InvalidRegion {
            region: "mars-north-1".to_string(),
        };

        assert_eq!(error.code(), "INVALID_REGION");
        let display = format!("{}", error);
        assert!(display.contains("mars-north-1"));
    }

    #[test]
    fn test_function_not_found_error() {
        let error = PackagerError::FunctionNotFound {
            name: "resize-image".to_string(),
        };

        assert_eq!(error.code(), "FUNCTION_NOT_FOUND");
        assert!(format!("{}", error).contains("resize-image"));
    }

    #[test]
    fn test_stage_required_error() {
        let error = PackagerError::StageRequired;
        assert_eq!(error.code(), "STAGE_REQUIRED");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: PackagerError = io.into();
        assert_eq!(error.code(), "IO_ERROR");
    }

    #[test]
    fn test_packaging_error_display() {
        let error = PackagingError::new("thumbnailer", "us-east-1", "handler file missing");

        let display = format!("{}", error);
        assert!(display.contains("us-east-1"));
        assert!(display.contains("thumbnailer"));
        assert!(display.contains("handler file missing"));
        assert!(error.trace.is_none());
    }

    #[test]
    fn test_packaging_error_with_trace() {
        let error = PackagingError::new("thumbnailer", "eu-west-1", "copy failed")
            .with_trace("Os { code: 13, kind: PermissionDenied }");

        assert!(error.trace.as_deref().unwrap().contains("PermissionDenied"));
    }
}
