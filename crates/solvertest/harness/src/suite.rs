//! Explicit test suite container and run reporting.
//!
//! Generated tests are attached to a plain table of (name, action)
//! entries that any runner can iterate, instead of being injected into a
//! host test class by name. The built-in [`TestSuite::run`] loop executes
//! entries in order, catching body panics, and produces a
//! [`SuiteReport`].

use crate::error::{HarnessError, Result};
use crate::synth::{GeneratedTest, TestAction};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::any::Any;
use std::collections::BTreeSet;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Ordered table of generated tests with unique names.
#[derive(Debug, Default)]
pub struct TestSuite {
    tests: Vec<GeneratedTest>,
    names: BTreeSet<String>,
}

impl TestSuite {
    /// Create an empty suite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a generated test to the suite.
    pub fn attach(&mut self, test: GeneratedTest) -> Result<()> {
        if !self.names.insert(test.name.clone()) {
            return Err(HarnessError::DuplicateTest(test.name));
        }
        self.tests.push(test);
        Ok(())
    }

    /// Look up an attached test by name.
    pub fn get(&self, name: &str) -> Option<&GeneratedTest> {
        self.tests.iter().find(|test| test.name == name)
    }

    /// Iterate the attached tests in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedTest> {
        self.tests.iter()
    }

    /// Number of attached tests.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether the suite is empty.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Execute every attached test and collect a report.
    ///
    /// Runnable bodies that panic are recorded as failures with the panic
    /// message; skip-stubs are recorded as skipped with their reason.
    pub fn run(&self) -> SuiteReport {
        let started = Instant::now();
        let mut report = SuiteReport::new();

        for test in &self.tests {
            let entry = match &test.action {
                TestAction::Skip { reason } => {
                    TestResult::skipped(&test.name, reason.clone())
                }
                TestAction::Run { body, solver } => {
                    let start = Instant::now();
                    let outcome =
                        catch_unwind(AssertUnwindSafe(|| (body.as_ref())(solver.as_ref())));
                    let duration = start.elapsed();
                    match outcome {
                        Ok(()) => TestResult::passed(&test.name, duration),
                        Err(payload) => {
                            TestResult::failed(&test.name, panic_message(payload), duration)
                        }
                    }
                }
            };
            report.results.push(entry);
        }

        report.duration = started.elapsed();
        report.finalize();
        report
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "test body panicked".to_string()
    }
}

/// Outcome of one executed suite entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

/// Result of one executed suite entry.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub name: String,
    pub status: TestStatus,
    pub duration: Duration,
    /// Failure message or skip reason.
    pub message: Option<String>,
}

impl TestResult {
    fn passed(name: &str, duration: Duration) -> Self {
        Self {
            name: name.to_string(),
            status: TestStatus::Passed,
            duration,
            message: None,
        }
    }

    fn failed(name: &str, message: String, duration: Duration) -> Self {
        Self {
            name: name.to_string(),
            status: TestStatus::Failed,
            duration,
            message: Some(message),
        }
    }

    fn skipped(name: &str, reason: String) -> Self {
        Self {
            name: name.to_string(),
            status: TestStatus::Skipped,
            duration: Duration::ZERO,
            message: Some(reason),
        }
    }
}

/// Summary counters for a suite run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Full record of one suite run.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub timestamp: DateTime<Utc>,
    pub duration: Duration,
    pub results: Vec<TestResult>,
    pub summary: ReportSummary,
}

impl SuiteReport {
    fn new() -> Self {
        Self {
            timestamp: Utc::now(),
            duration: Duration::ZERO,
            results: Vec::new(),
            summary: ReportSummary::default(),
        }
    }

    fn finalize(&mut self) {
        let mut summary = ReportSummary {
            total: self.results.len(),
            ..Default::default()
        };
        for result in &self.results {
            match result.status {
                TestStatus::Passed => summary.passed += 1,
                TestStatus::Failed => summary.failed += 1,
                TestStatus::Skipped => summary.skipped += 1,
            }
        }
        self.summary = summary;
    }

    /// Whether every executed test passed (skips do not count against).
    pub fn all_passed(&self) -> bool {
        self.summary.failed == 0
    }

    /// Render the report as JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "suite run at {} ({:?})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.duration
        )?;
        for result in &self.results {
            let status = match result.status {
                TestStatus::Passed => "PASS",
                TestStatus::Failed => "FAIL",
                TestStatus::Skipped => "SKIP",
            };
            write!(f, "  {status} {}", result.name)?;
            if let Some(message) = &result.message {
                write!(f, " ({message})")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "total {}  passed {}  failed {}  skipped {}",
            self.summary.total, self.summary.passed, self.summary.failed, self.summary.skipped
        )
    }
}
