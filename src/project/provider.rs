//! Provider region table
//!
//! The authoritative set of deploy regions the target platform accepts.
//! Region arguments and project stage definitions are validated against it
//! before any packaging work starts.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Regions the provider accepts for deployment
pub const VALID_REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "ca-central-1",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-central-1",
    "eu-north-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-south-1",
    "ap-southeast-1",
    "ap-southeast-2",
    "sa-east-1",
];

lazy_static! {
    static ref VALID_REGION_SET: HashSet<&'static str> = VALID_REGIONS.iter().copied().collect();
}

/// Check whether a region is in the provider's valid-region set
pub fn is_valid_region(region: &str) -> bool {
    VALID_REGION_SET.contains(region)
}

/// Owned copy of the valid-region set, for orchestrator construction
pub fn valid_regions() -> Vec<String> {
    VALID_REGIONS.iter().map(|r| r.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_regions_are_valid() {
        assert!(is_valid_region("us-east-1"));
        assert!(is_valid_region("eu-central-1"));
        assert!(is_valid_region("ap-southeast-2"));
    }

    #[test]
    fn test_unknown_region_is_invalid() {
        assert!(!is_valid_region("moon-base-1"));
        assert!(!is_valid_region(""));
        assert!(!is_valid_region("US-EAST-1"));
    }

    #[test]
    fn test_valid_regions_matches_table() {
        let owned = valid_regions();
        assert_eq!(owned.len(), VALID_REGIONS.len());
        assert!(owned.iter().all(|r| is_valid_region(r)));
    }
}
