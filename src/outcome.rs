//! Test outcomes and the mutation analysis data attached to them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of running the test suite against one mutant.
///
/// The set mirrors what the upstream mutation engine reports; the canonical
/// text form is the upper snake-case name (`KILLED`, `NO_COVERAGE`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectionStatus {
    /// A test failed against the mutant.
    Killed,
    /// All tests passed against the mutant.
    Survived,
    /// Tests did not finish in time.
    TimedOut,
    /// Mutant could not be loaded or compiled.
    NonViable,
    /// Tests exhausted memory.
    MemoryError,
    /// Analysis never started for this mutant.
    NotStarted,
    /// Analysis started but no terminal result was recorded.
    Started,
    /// The test run itself errored.
    RunError,
    /// No test covers the mutated code.
    NoCoverage,
}

impl DetectionStatus {
    /// Canonical textual name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Killed => "KILLED",
            Self::Survived => "SURVIVED",
            Self::TimedOut => "TIMED_OUT",
            Self::NonViable => "NON_VIABLE",
            Self::MemoryError => "MEMORY_ERROR",
            Self::NotStarted => "NOT_STARTED",
            Self::Started => "STARTED",
            Self::RunError => "RUN_ERROR",
            Self::NoCoverage => "NO_COVERAGE",
        }
    }
}

impl fmt::Display for DetectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a mutation was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationDetails {
    /// Source file name.
    pub filename: String,
    /// Fully qualified class (or module) name.
    pub class_name: String,
    /// Method (or function) name.
    pub method: String,
    /// Source line number.
    pub line_number: u32,
}

/// One analysed mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationRecord {
    /// Mutation location.
    pub details: MutationDetails,
    /// Detection result.
    pub status: DetectionStatus,
    /// Test that killed the mutant, if any.
    #[serde(default)]
    pub killing_test: Option<String>,
}

impl MutationRecord {
    /// Build a record with no killing test.
    pub fn new(
        filename: impl Into<String>,
        class_name: impl Into<String>,
        method: impl Into<String>,
        line_number: u32,
        status: DetectionStatus,
    ) -> Self {
        Self {
            details: MutationDetails {
                filename: filename.into(),
                class_name: class_name.into(),
                method: method.into(),
                line_number,
            },
            status,
            killing_test: None,
        }
    }

    /// Set the killing test.
    pub fn with_killing_test(mut self, test: impl Into<String>) -> Self {
        self.killing_test = Some(test.into());
        self
    }
}

/// Ordered mutation results attached to one test outcome.
///
/// Order is the upstream generation order and is preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationMetadata {
    /// Mutation records in generation order.
    pub mutations: Vec<MutationRecord>,
}

impl MutationMetadata {
    /// Wrap records.
    pub fn new(mutations: Vec<MutationRecord>) -> Self {
        Self { mutations }
    }
}

/// Identity of a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// Test name.
    pub name: String,
    /// Owning test class, when the framework has one.
    #[serde(default)]
    pub test_class: Option<String>,
}

impl Description {
    /// Describe a test by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            test_class: None,
        }
    }

    /// Set the owning test class.
    pub fn with_test_class(mut self, test_class: impl Into<String>) -> Self {
        self.test_class = Some(test_class.into());
        self
    }
}

/// Notification describing the result of one test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Test that produced this outcome.
    pub description: Description,
    /// Failure or error message, if any.
    #[serde(default)]
    pub error: Option<String>,
    /// Mutation analysis data, set by the mutation engine when analysis applies.
    #[serde(default)]
    pub mutation_metadata: Option<MutationMetadata>,
}

impl TestOutcome {
    /// Outcome with no error and no mutation data.
    pub fn new(description: Description) -> Self {
        Self {
            description,
            error: None,
            mutation_metadata: None,
        }
    }

    /// Attach an error message.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Attach mutation analysis data.
    pub fn with_mutation_metadata(mut self, metadata: MutationMetadata) -> Self {
        self.mutation_metadata = Some(metadata);
        self
    }
}
