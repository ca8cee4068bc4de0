//! Cascade parser.
//!
//! The operational core of the engine:
//!
//! - Normalize the input and scan it for marker families.
//! - Walk the active rules in cascade order; the first production that returns
//!   a `Classification` wins.
//! - Run the extractor according to the classification's `Plan`.
//!
//! ```text
//! new()  ── normalize ── trigger scan ──> Analysis
//! run()  ── classify (first match) ── extract ──> Outcome
//! ```
//!
//! A `Parser` owns nothing but the analysis of one input and borrowed rules,
//! so many parsers can run in parallel over the same rule set.
//!
//! ## Debugging
//!
//! With `RUST_LOG=deedname=trace` every rule evaluation is logged.

use super::compiled_rules::CompiledRules;
use super::extract::extract;
use super::metrics::{Outcome, RunMetrics, RunResult};
use super::normalize::normalize;
use super::trigger::scan;
use crate::{Analysis, Classification, EntityType, Plan, Rule};
use std::time::Instant;

#[derive(Debug)]
pub struct Parser<'a> {
    analysis: Analysis,
    compiled: CompiledRules<'a>,
    normalize_time: std::time::Duration,
}

impl<'a> Parser<'a> {
    /// Create a new `Parser` for `input` using pre-compiled rules.
    pub fn new_compiled(input: &str, compiled: CompiledRules<'a>) -> Self {
        let start = Instant::now();
        let tokens = normalize(input);
        let markers = scan(&tokens);
        let normalize_time = start.elapsed();

        Parser { analysis: Analysis { tokens, markers }, compiled, normalize_time }
    }

    /// Create a new `Parser` for `input` using `rules`.
    pub fn new(input: &str, rules: &'a [Rule]) -> Self {
        Self::new_compiled(input, CompiledRules::new(rules))
    }

    pub(crate) fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    /// Names of the rules the trigger scan left active, in cascade order.
    pub(crate) fn active_rule_names(&self) -> Vec<&'static str> {
        self.compiled.active(self.analysis.markers).map(|r| r.name).collect()
    }

    /// Walk the cascade and return the winning rule and its classification.
    pub(crate) fn classify(&self) -> (&'static str, Classification) {
        for rule in self.compiled.active(self.analysis.markers) {
            match (rule.production)(&self.analysis) {
                Some(classification) => {
                    log::debug!("[cascade] rule=\"{}\" -> {:?}", rule.name, classification);
                    return (rule.name, classification);
                }
                None => log::trace!("[cascade] rule=\"{}\" passed", rule.name),
            }
        }

        // Unreachable with the default rules (the catch-all is bucket-free),
        // but custom rule sets must still classify.
        ("complex (no rule matched)", Classification { entity: EntityType::Complex, plan: Plan::Terminal })
    }

    pub(crate) fn run(&self) -> Outcome {
        let (rule, classification) = self.classify();
        let names = extract(&self.analysis.tokens, &classification.plan);
        Outcome { rule, classification, names }
    }

    pub(crate) fn run_with_metrics(&self) -> RunResult {
        let start = Instant::now();
        let (rule, classification) = self.classify();
        let classify = start.elapsed();

        let extract_start = Instant::now();
        let names = extract(&self.analysis.tokens, &classification.plan);
        let extract = extract_start.elapsed();

        let metrics =
            RunMetrics { total: self.normalize_time + start.elapsed(), normalize: self.normalize_time, classify, extract };
        RunResult { outcome: Outcome { rule, classification, names }, metrics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarkerMask;
    use crate::rules::entity::rules;

    #[test]
    fn bucketed_rules_are_skipped_without_markers() {
        let rules = rules::get();
        let parser = Parser::new("John Smith", &rules);
        assert_eq!(parser.analysis().markers, MarkerMask::empty());
        assert_eq!(parser.active_rule_names(), ["simple person", "complex"]);
    }

    #[test]
    fn cascade_order_is_priority_order() {
        let rules = rules::get();
        let parser = Parser::new("Kane Family Farms Llc Trust", &rules);
        let names = parser.active_rule_names();
        assert_eq!(names.first(), Some(&"company marker"));
        assert_eq!(parser.run().classification.entity, EntityType::Company);
    }

    #[test]
    fn empty_rule_set_still_classifies() {
        let parser = Parser::new("Anything At All", &[]);
        let outcome = parser.run();
        assert_eq!(outcome.classification.entity, EntityType::Complex);
        assert_eq!(outcome.names.first, "");
    }

    #[test]
    fn metrics_cover_phases() {
        let rules = rules::get();
        let run = Parser::new("Hansen Linda K Rev Trust", &rules).run_with_metrics();
        assert!(run.metrics.total >= run.metrics.classify);
        assert_eq!(run.outcome.rule, "trust marker");
    }
}
