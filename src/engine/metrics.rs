//! Engine run metrics.
//!
//! `Parser::run` is the normal path; `Parser::run_with_metrics` also times
//! each phase so the verbose API and the CLI can show where time went.
//!
//! Timing is the only thing collected here. Nothing in a run depends on it, so
//! results are identical with or without metrics.

use super::extract::Extraction;
use crate::Classification;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Parser::run_with_metrics`], including normalization.
    pub total: Duration,
    /// Tokenizing and trigger scanning.
    pub normalize: Duration,
    /// Walking the cascade.
    pub classify: Duration,
    /// Name extraction and ordering.
    pub extract: Duration,
}

/// Result of one run: which rule fired, its classification, and the names.
#[derive(Debug, Clone)]
pub(crate) struct Outcome {
    pub rule: &'static str,
    pub classification: Classification,
    pub names: Extraction,
}

/// Parser output bundled with timing information.
#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    pub outcome: Outcome,
    pub metrics: RunMetrics,
}
