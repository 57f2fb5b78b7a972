//! Built-in packaging operations

pub mod dist_packager;

pub use dist_packager::DistPackager;
