//! Result Report - per-region aggregation of packaging outcomes
//!
//! A region key appears in a mapping only once at least one outcome of that
//! kind has been recorded for it; absence means zero outcomes, not an empty
//! placeholder. Iteration follows the order in which regions were recorded.

use crate::core::{ArtifactResult, Outcome, PackageTask, PackagingError};
use std::collections::HashMap;

/// Final aggregate of a packaging run
#[derive(Debug, Clone, Default)]
pub struct ResultReport {
    /// Regions in first-insertion order, for deterministic iteration
    region_order: Vec<String>,

    /// Successfully packaged artifacts, grouped by region
    succeeded: HashMap<String, Vec<ArtifactResult>>,

    /// Failed packaging attempts, grouped by region
    failed: HashMap<String, Vec<PackagingError>>,
}

impl ResultReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record all outcomes of one region batch, preserving production order
    pub fn record_region(&mut self, region: &str, outcomes: Vec<(PackageTask, Outcome)>) {
        for (_, outcome) in outcomes {
            match outcome {
                Outcome::Succeeded(artifact) => {
                    self.remember_region(region);
                    self.succeeded
                        .entry(region.to_string())
                        .or_default()
                        .push(artifact);
                }
                Outcome::Failed(error) => {
                    self.remember_region(region);
                    self.failed
                        .entry(region.to_string())
                        .or_default()
                        .push(error);
                }
            }
        }
    }

    fn remember_region(&mut self, region: &str) {
        if !self.region_order.iter().any(|r| r == region) {
            self.region_order.push(region.to_string());
        }
    }

    /// Artifacts recorded for a region, empty when none succeeded there
    pub fn succeeded_in(&self, region: &str) -> &[ArtifactResult] {
        self.succeeded.get(region).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Failures recorded for a region, empty when none failed there
    pub fn failed_in(&self, region: &str) -> &[PackagingError] {
        self.failed.get(region).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any region recorded a success
    pub fn has_successes(&self) -> bool {
        !self.succeeded.is_empty()
    }

    /// Whether any region recorded a failure
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// A run with zero failures is fully successful
    pub fn is_fully_successful(&self) -> bool {
        !self.has_failures()
    }

    /// Total outcome count across both mappings
    pub fn total_outcomes(&self) -> usize {
        self.succeeded.values().map(Vec::len).sum::<usize>()
            + self.failed.values().map(Vec::len).sum::<usize>()
    }

    /// Visit every succeeded artifact, grouped by region in insertion order
    pub fn for_each_succeeded(&self, mut f: impl FnMut(&str, &ArtifactResult)) {
        for region in &self.region_order {
            if let Some(artifacts) = self.succeeded.get(region) {
                for artifact in artifacts {
                    f(region, artifact);
                }
            }
        }
    }

    /// Visit every failure, grouped by region in insertion order
    pub fn for_each_failed(&self, mut f: impl FnMut(&str, &PackagingError)) {
        for region in &self.region_order {
            if let Some(errors) = self.failed.get(region) {
                for error in errors {
                    f(region, error);
                }
            }
        }
    }

    /// Print the run summary in the CLI's reporting format
    pub fn print_summary(&self) {
        if self.has_successes() {
            println!("Successfully packaged:");
            for region in &self.region_order {
                let Some(artifacts) = self.succeeded.get(region) else {
                    continue;
                };
                println!("Region {}:", region);
                for artifact in artifacts {
                    println!(
                        "  {} - {}: {}",
                        artifact.stage, artifact.function, artifact.artifact_path
                    );
                }
            }
        }

        if self.has_failures() {
            println!("Failed:");
            for region in &self.region_order {
                let Some(errors) = self.failed.get(region) else {
                    continue;
                };
                println!("Region {}:", region);
                for error in errors {
                    println!("  {}: {}", error.function, error.message);
                    if let Some(ref trace) = error.trace {
                        println!("    STACKTRACE: {}", trace);
                    }
                }
            }
        }
    }
}
