use crate::engine::{self, RunMetrics, resolve};
use crate::rules::names::gazetteer::{self, Gender};
use crate::{EntityType, Error, OrderDecision, Result, Rule};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::{Duration, Instant};

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::entity::rules::get);

/// Environment variable read by [`Options::from_env`].
pub const INTERIOR_ENV: &str = "DEEDNAME_INTERIOR";

/// What to do with name tokens between the first and last name when three or
/// more remain ("Ellen Kaye Murphy Trust").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteriorTokens {
    /// Drop them.
    #[default]
    Discard,
    /// Keep them, space-joined, in [`ParsedName::middle_name`].
    Retain,
}

impl FromStr for InteriorTokens {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discard" => Ok(InteriorTokens::Discard),
            "retain" => Ok(InteriorTokens::Retain),
            _ => Err(Error::InvalidOption {
                option: "interior tokens",
                value: s.to_string(),
                expected: "discard, retain",
            }),
        }
    }
}

/// Options that affect result assembly.
///
/// Classification never depends on options; only what ends up in the record
/// does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub interior: InteriorTokens,
}

impl Options {
    /// Defaults, overridden by `DEEDNAME_INTERIOR` when it is set.
    pub fn from_env() -> Result<Self> {
        match std::env::var(INTERIOR_ENV) {
            Ok(value) => Ok(Options { interior: value.parse()? }),
            Err(_) => Ok(Options::default()),
        }
    }
}

/// Normalized owner record.
///
/// Same `{entity_type, first_name, last_name}` shape as the AI parser's
/// records, so either can stand in for the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedName {
    pub entity_type: EntityType,
    /// Empty when not applicable or not found.
    pub first_name: String,
    /// Empty when not applicable or not found.
    pub last_name: String,
    /// Interior name tokens; only filled with [`InteriorTokens::Retain`].
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub middle_name: String,
    /// How much the rule-based path trusts this record, `0.0..=1.0`. Absent on
    /// records that did not come from this crate (the AI parser's output).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// The input, verbatim.
    #[serde(default)]
    pub raw: String,
}

impl ParsedName {
    /// Confidence below which a record counts as low confidence.
    pub const LOW_CONFIDENCE: f64 = 0.7;

    /// True when the record carries a confidence below [`Self::LOW_CONFIDENCE`].
    pub fn is_low_confidence(&self) -> bool {
        self.confidence.is_some_and(|c| c < Self::LOW_CONFIDENCE)
    }

    /// True when a first or last name was extracted.
    pub fn has_name(&self) -> bool {
        !self.first_name.is_empty() || !self.last_name.is_empty()
    }
}

/// Token as seen by the engine, for traces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSummary {
    pub text: String,
    pub lower: String,
    pub flags: Vec<&'static str>,
}

/// Extra details returned by [`parse_verbose_with`].
#[derive(Debug, Clone, Serialize)]
pub struct ParseDetails {
    pub tokens: Vec<TokenSummary>,
    /// Marker families found by the trigger scan.
    pub markers: Vec<&'static str>,
    /// Rules left active by the marker scan, in cascade order.
    pub active_rules: Vec<String>,
    /// Rule that decided the entity type.
    pub rule: String,
    /// Name units considered by the extractor.
    pub candidates: Vec<String>,
    /// Set when the two-token ordering scorer ran.
    pub ordering: Option<OrderDecision>,
    pub borrowed_surname: bool,
    /// Gender tag of the extracted first name, when it is in the gazetteer.
    pub first_name_gender: Option<Gender>,
    pub total: Duration,
    pub normalize: Duration,
    pub classify: Duration,
    pub extract: Duration,
}

/// Result from [`parse_verbose_with`].
#[derive(Debug, Clone, Serialize)]
pub struct ParseResultVerbose {
    pub result: ParsedName,
    pub details: ParseDetails,
    pub elapsed: Duration,
}

/// Classify and parse one owner name with default [`Options`].
///
/// Total: every string, including `""`, yields a record.
///
/// # Example
/// ```
/// use deedname::{EntityType, classify_and_parse};
///
/// let out = classify_and_parse("Hansen Linda K Rev Trust");
/// assert_eq!(out.entity_type, EntityType::Trust);
/// assert_eq!((out.first_name.as_str(), out.last_name.as_str()), ("Linda", "Hansen"));
/// ```
pub fn classify_and_parse(name: &str) -> ParsedName {
    classify_and_parse_with(name, &Options::default())
}

/// Classify and parse one owner name.
pub fn classify_and_parse_with(name: &str, options: &Options) -> ParsedName {
    let parser = engine::Parser::new(name, &DEFAULT_RULES);
    let outcome = parser.run();
    resolve::assemble(name, &outcome, options)
}

/// Parse a batch with default [`Options`]. Result `i` belongs to input `i`.
pub fn classify_and_parse_batch<S: AsRef<str> + Sync>(names: &[S]) -> Vec<ParsedName> {
    classify_and_parse_batch_with(names, &Options::default())
}

/// Parse a batch, fanning rows out over the rayon pool.
///
/// Rows share no state, so the result equals mapping
/// [`classify_and_parse_with`] over the input in order.
pub fn classify_and_parse_batch_with<S: AsRef<str> + Sync>(names: &[S], options: &Options) -> Vec<ParsedName> {
    let start = Instant::now();
    let results: Vec<ParsedName> = names.par_iter().map(|n| classify_and_parse_with(n.as_ref(), options)).collect();
    log::debug!("[batch] parsed {} names in {:?}", results.len(), start.elapsed());
    results
}

/// Parse `name` and return the record together with a trace of how it was
/// reached.
pub fn parse_verbose_with(name: &str, options: &Options) -> ParseResultVerbose {
    let parser = engine::Parser::new(name, &DEFAULT_RULES);
    let analysis = parser.analysis();

    let tokens = analysis
        .tokens
        .iter()
        .map(|t| TokenSummary {
            text: t.text.clone(),
            lower: t.lower.clone(),
            flags: t.flags.iter_names().map(|(n, _)| n).collect(),
        })
        .collect();
    let markers = analysis.markers.iter_names().map(|(n, _)| n).collect();
    let active_rules = parser.active_rule_names().into_iter().map(str::to_string).collect();

    let run = parser.run_with_metrics();
    let result = resolve::assemble(name, &run.outcome, options);
    let RunMetrics { total, normalize, classify, extract } = run.metrics;
    let names = run.outcome.names;

    let details = ParseDetails {
        tokens,
        markers,
        active_rules,
        rule: run.outcome.rule.to_string(),
        candidates: names.candidates,
        ordering: names.decision,
        borrowed_surname: names.borrowed_surname,
        first_name_gender: gazetteer::gender_of(&result.first_name),
        total,
        normalize,
        classify,
        extract,
    };

    ParseResultVerbose { result, details, elapsed: total }
}

/// Per-batch counts used to watch lexicon coverage.
///
/// A persistently high share of `complex` rows means the marker tables or
/// gazetteers need expanding; it is a data-quality signal, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    /// Rows where a first or last name was extracted.
    pub with_names: usize,
    /// Rows below [`ParsedName::LOW_CONFIDENCE`].
    pub low_confidence: usize,
    pub by_type: BTreeMap<EntityType, usize>,
}

impl BatchSummary {
    /// Complex share above which [`BatchSummary::needs_lexicon_review`] is
    /// usually worth acting on.
    pub const DEFAULT_REVIEW_THRESHOLD: f64 = 0.25;

    pub fn from_results(results: &[ParsedName]) -> Self {
        let mut summary = BatchSummary { total: results.len(), ..BatchSummary::default() };
        for r in results {
            *summary.by_type.entry(r.entity_type).or_insert(0) += 1;
            if r.has_name() {
                summary.with_names += 1;
            }
            if r.is_low_confidence() {
                summary.low_confidence += 1;
            }
        }
        summary
    }

    pub fn count(&self, entity_type: EntityType) -> usize {
        self.by_type.get(&entity_type).copied().unwrap_or(0)
    }

    /// Share of rows classified `complex`; `0.0` for an empty batch.
    pub fn complex_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(EntityType::Complex) as f64 / self.total as f64
    }

    /// True when the complex share exceeds `threshold`.
    pub fn needs_lexicon_review(&self, threshold: f64) -> bool {
        let rate = self.complex_rate();
        let review = rate > threshold;
        if review {
            log::warn!(
                "{} of {} names ({:.1}%) were not recognized; marker tables or gazetteers may need expanding",
                self.count(EntityType::Complex),
                self.total,
                rate * 100.0
            );
        }
        review
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> (EntityType, String, String) {
        let out = classify_and_parse(input);
        (out.entity_type, out.first_name, out.last_name)
    }

    fn expect(input: &str, entity: EntityType, first: &str, last: &str) {
        assert_eq!(parsed(input), (entity, first.to_string(), last.to_string()), "input: {input:?}");
    }

    #[test]
    fn documented_fixtures() {
        expect("Kane Family Farms Llc", EntityType::Company, "", "");
        expect("Hansen Linda K Rev Trust", EntityType::Trust, "Linda", "Hansen");
        expect("Cheslak Family Trust", EntityType::Trust, "", "Cheslak");
        expect("Van Meter Eva Jo", EntityType::Person, "Eva", "Van Meter");
        expect("John Smith", EntityType::Person, "John", "Smith");
        expect("Ellen Kaye Murphy Trust", EntityType::Trust, "Ellen", "Murphy");
        expect("Roberts Sandra K Etal", EntityType::EtAl, "Sandra", "Roberts");
        expect("Cole Beulah Revocable Trust", EntityType::Trust, "Cole", "Beulah");
    }

    #[test]
    fn tie_break_keeps_reading_order() {
        expect("Kirk Dunn Trust", EntityType::Trust, "Kirk", "Dunn");
        expect("Paxton Vought Rev Trust", EntityType::Trust, "Paxton", "Vought");
    }

    #[test]
    fn totality_on_odd_inputs() {
        for input in ["", "   ", "&", "/", "...", "12345", "山田 太郎", "Ω", "\u{0}", "et al", "L/E", "Trust"] {
            let out = classify_and_parse(input);
            assert!(EntityType::ALL.contains(&out.entity_type));
            assert_eq!(out.raw, input);
        }
        expect("", EntityType::Complex, "", "");
        expect("山田 太郎", EntityType::Complex, "", "");
        expect("!!!", EntityType::Complex, "", "");
    }

    #[test]
    fn deterministic_and_batch_ordered() {
        let names = [
            "Hansen Linda K Rev Trust",
            "Kane Family Farms Llc",
            "",
            "Clark Jason R & Shari A",
            "Van Meter Eva Jo",
            "Smith John L/E",
            "Roberts Sandra K Etal",
        ];
        let batch = classify_and_parse_batch(&names);
        assert_eq!(batch.len(), names.len());
        for (i, name) in names.iter().enumerate() {
            assert_eq!(batch[i], classify_and_parse(name));
            assert_eq!(classify_and_parse(name), classify_and_parse(name));
        }
    }

    #[test]
    fn batch_accepts_owned_strings() {
        let names: Vec<String> = vec!["John Smith".into(), "Acme Inc".into()];
        let batch = classify_and_parse_batch(&names);
        assert_eq!(batch[1].entity_type, EntityType::Company);
    }

    #[test]
    fn interior_tokens_are_configurable() {
        let keep = Options { interior: InteriorTokens::Retain };
        let out = classify_and_parse_with("Ellen Kaye Murphy Trust", &keep);
        assert_eq!(out.middle_name, "Kaye");
        assert_eq!((out.first_name.as_str(), out.last_name.as_str()), ("Ellen", "Murphy"));

        let out = classify_and_parse("Ellen Kaye Murphy Trust");
        assert_eq!(out.middle_name, "");
    }

    #[test]
    fn interior_tokens_parse_from_text() {
        assert_eq!("Retain".parse::<InteriorTokens>().unwrap(), InteriorTokens::Retain);
        assert_eq!(" discard ".parse::<InteriorTokens>().unwrap(), InteriorTokens::Discard);
        assert!(matches!("keep".parse::<InteriorTokens>(), Err(Error::InvalidOption { .. })));
    }

    #[test]
    fn record_serializes_to_the_ai_shape() {
        let out = classify_and_parse("Hansen Linda K Rev Trust");
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "entity_type": "trust",
                "first_name": "Linda",
                "last_name": "Hansen",
                "confidence": 0.7,
                "raw": "Hansen Linda K Rev Trust",
            })
        );

        let back: ParsedName =
            serde_json::from_str(r#"{"entity_type":"joint_ownership","first_name":"Jason","last_name":"Clark"}"#)
                .unwrap();
        assert_eq!(back.entity_type, EntityType::JointOwnership);
        assert_eq!(back.raw, "");
        assert_eq!(back.confidence, None);
        assert!(!back.is_low_confidence());
    }

    #[test]
    fn verbose_trace_explains_the_result() {
        let res = parse_verbose_with("Hansen Linda K Rev Trust", &Options::default());
        assert_eq!(res.details.rule, "trust marker");
        assert_eq!(res.details.candidates, ["Hansen", "Linda"]);
        assert!(res.details.markers.contains(&"TRUST"));
        let ordering = res.details.ordering.unwrap();
        assert_eq!(ordering.order, crate::NameOrder::LastFirst);
        assert!(ordering.last_first > ordering.first_last);
        assert_eq!(res.details.first_name_gender, Some(Gender::Female));
        assert!(res.details.tokens.iter().any(|t| t.text == "K" && t.flags.contains(&"INITIAL")));
        assert_eq!(res.result, classify_and_parse("Hansen Linda K Rev Trust"));
        assert_eq!(res.elapsed, res.details.total);
    }

    #[test]
    fn records_carry_confidence() {
        let person = classify_and_parse("John Smith");
        assert_eq!(person.confidence, Some(0.7));
        assert!(!person.is_low_confidence());

        let tie = classify_and_parse("Kirk Dunn Trust");
        assert_eq!(tie.confidence, Some(0.6));
        assert!(tie.is_low_confidence());

        let unknown = classify_and_parse("");
        assert_eq!(unknown.confidence, Some(0.5));
        assert!(unknown.is_low_confidence());
    }

    #[test]
    fn batch_summary_counts() {
        let results = classify_and_parse_batch(&["John Smith", "Acme Llc", "???", "zzz qqq xxx", "Cheslak Family Trust"]);
        let summary = BatchSummary::from_results(&results);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.count(EntityType::Person), 1);
        assert_eq!(summary.count(EntityType::Company), 1);
        assert_eq!(summary.count(EntityType::Trust), 1);
        assert_eq!(summary.count(EntityType::Complex), 2);
        assert_eq!(summary.with_names, 2);
        assert_eq!(summary.low_confidence, 2);
        assert!((summary.complex_rate() - 0.4).abs() < 1e-9);
        assert!(summary.needs_lexicon_review(BatchSummary::DEFAULT_REVIEW_THRESHOLD));
        assert!(!summary.needs_lexicon_review(0.5));
        assert_eq!(BatchSummary::from_results(&[]).complex_rate(), 0.0);
    }
}
