//! Reporting-framework collaborators a report listener may be constructed with.
//!
//! The CSV listener accepts these for constructor compatibility with other
//! report formats; it does not consult them.

use std::path::PathBuf;

/// Test coverage gathered before mutation analysis.
pub trait CoverageDatabase {
    /// Tests that exercise code in `class_name`.
    fn tests_covering(&self, class_name: &str) -> Vec<String>;
}

/// Coverage database with no data.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCoverage;

impl CoverageDatabase for NoCoverage {
    fn tests_covering(&self, _class_name: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Finds the source file for mutated classes.
pub trait SourceLocator {
    /// Locate `file_name` for any of `class_names`.
    fn locate(&self, class_names: &[String], file_name: &str) -> Option<PathBuf>;
}
