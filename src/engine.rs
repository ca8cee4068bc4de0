//! Classification and extraction engine.
//!
//! ## How the parts work together
//!
//! ```text
//! rules (all)  ──┐
//!               │  CompiledRules::new           (compiled_rules.rs)
//!               └───────────────┬──────────────
//!                               │
//! input ── normalize ───────────┤                (normalize.rs)
//!          trigger::scan ───────┼─ marker mask gates rules (trigger.rs)
//!                               v
//!                     Parser::classify (parser.rs)
//!                       - walk rules in cascade order
//!                       - first production to return wins
//!                               │
//!                               v
//!                     extract (extract.rs)
//!                       - segment, filter, merge particles
//!                       - ordering scorer for two-unit names
//!                               │
//!                               v
//!                     assemble (resolve.rs) ──> ParsedName
//! ```
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: tokenizes the raw string and flags token shapes (initials,
//!   dates, honorifics, suffixes, separators, trailing commas).
//! - `trigger.rs`: finds which marker families occur, as a `MarkerMask`.
//! - `compiled_rules.rs`: orders the cascade and gates rules by marker bucket.
//! - `parser.rs`: runs the cascade and the extractor over one input.
//! - `extract.rs`: selects first/last names according to the rule's plan.
//! - `resolve.rs`: builds the public record.
//! - `metrics.rs`: optional per-phase timings.
//!
//! ## Adding rules
//!
//! New rules go in `src/rules/entity/rules.rs`. If a rule keys on a new marker
//! family, add a `MarkerMask` bit, a vocabulary in `markers.rs`, and teach
//! `trigger::scan` to set it.
//!
//! ## Debugging
//!
//! Set `RUST_LOG=deedname=trace` (with the CLI) to print cascade and extractor
//! traces.

#[path = "engine/compiled_rules.rs"]
pub(crate) mod compiled_rules;
#[path = "engine/extract.rs"]
pub(crate) mod extract;
#[path = "engine/metrics.rs"]
pub(crate) mod metrics;
#[path = "engine/normalize.rs"]
pub(crate) mod normalize;
#[path = "engine/parser.rs"]
pub(crate) mod parser;
#[path = "engine/resolve.rs"]
pub(crate) mod resolve;
#[path = "engine/trigger.rs"]
pub(crate) mod trigger;

pub use compiled_rules::MarkerMask;
pub use metrics::RunMetrics;
pub use parser::Parser;
