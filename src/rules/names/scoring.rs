//! Name ordering scorer.
//!
//! Given two name tokens `(a, b)` it compares two hypotheses:
//!
//! ```text
//! H1 (FirstLast):  first = a, last = b   score = first_score(a) + last_score(b)
//! H2 (LastFirst):  first = b, last = a   score = first_score(b) + last_score(a)
//! ```
//!
//! The strictly higher score wins. Ties, including the case where neither
//! token is in any gazetteer, keep the reading order (H1). Tax rolls mix
//! `Last First` and `First Last`, so there is no universally safe default; the
//! reading order is the least surprising one when the input is already right.
//!
//! Scores are clamped to `0..=100` per token and are pure functions of the
//! token text.

use super::gazetteer;
use serde::Serialize;

/// Endings associated with given names.
pub(crate) const GIVEN_NAME_ENDINGS: &[&str] = &["a", "y", "ie", "ine", "elle", "ette", "een", "lyn"];

/// Endings associated with (mostly Anglo, Nordic, Slavic) surnames.
pub(crate) const SURNAME_ENDINGS: &[&str] = &[
    "son", "sen", "berg", "stein", "man", "mann", "ley", "field", "ford", "wood", "worth", "ski", "wicz", "owski",
    "enko",
];

/// Particles that signal a surname when written attached ("Mcculley",
/// "Vanderpool", "O'Brien"). Short particles like `de` are left out because
/// they prefix too many given names.
pub(crate) const ATTACHED_PREFIXES: &[&str] = &["mc", "mac", "o'", "van", "von"];

const GIVEN_ENDING_BONUS: i32 = 10;
const PREFIX_WEIGHT: i32 = 20;
const SURNAME_ENDING_WEIGHT: i32 = 15;
const KNOWN_FIRST_NAME_PENALTY: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameOrder {
    /// H1: the tokens already read first-then-last.
    FirstLast,
    /// H2: the tokens read last-then-first.
    LastFirst,
}

/// Outcome of [`score_order`] with both hypothesis scores kept for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderDecision {
    pub order: NameOrder,
    pub first_last: i32,
    pub last_first: i32,
    /// Order came from the pinned regression table rather than scores.
    pub pinned: bool,
}

impl OrderDecision {
    /// Arrange `(a, b)` as `(first, last)` according to the decision.
    pub fn arrange<T>(&self, a: T, b: T) -> (T, T) {
        match self.order {
            NameOrder::FirstLast => (a, b),
            NameOrder::LastFirst => (b, a),
        }
    }

    /// Neither hypothesis won and no pinned pair applied; the order is the
    /// reading order by default only.
    pub fn is_tie(&self) -> bool {
        !self.pinned && self.first_last == self.last_first
    }
}

/// Likelihood (0..=100) that `token` is a given name.
pub fn first_score(token: &str) -> i32 {
    let lower = token.to_lowercase();
    let mut score = gazetteer::first_name(&lower).map(|e| e.weight).unwrap_or(0);

    if has_ending(&lower, GIVEN_NAME_ENDINGS) {
        score += GIVEN_ENDING_BONUS;
    }
    if has_attached_prefix(&lower) {
        score -= PREFIX_WEIGHT;
    }
    if has_ending(&lower, SURNAME_ENDINGS) {
        score -= SURNAME_ENDING_WEIGHT;
    }

    score.clamp(0, 100)
}

/// Likelihood (0..=100) that `token` is a surname.
pub fn last_score(token: &str) -> i32 {
    let lower = token.to_lowercase();
    let mut score = gazetteer::surname_weight(&lower).unwrap_or(0);

    if has_attached_prefix(&lower) {
        score += PREFIX_WEIGHT;
    }
    if has_ending(&lower, SURNAME_ENDINGS) {
        score += SURNAME_ENDING_WEIGHT;
    }
    if gazetteer::is_first_name(&lower) {
        score -= KNOWN_FIRST_NAME_PENALTY;
    }

    score.clamp(0, 100)
}

/// Decide whether `(a, b)` reads first-then-last or last-then-first.
pub fn score_order(a: &str, b: &str) -> OrderDecision {
    let first_last = first_score(a) + last_score(b);
    let last_first = first_score(b) + last_score(a);

    let (la, lb) = (a.to_lowercase(), b.to_lowercase());
    if let Some((first, _)) = gazetteer::pinned_ordering(&la, &lb) {
        let order = if first == la { NameOrder::FirstLast } else { NameOrder::LastFirst };
        return OrderDecision { order, first_last, last_first, pinned: true };
    }

    let order = if last_first > first_last { NameOrder::LastFirst } else { NameOrder::FirstLast };
    OrderDecision { order, first_last, last_first, pinned: false }
}

// A bare ending ("a", "son") is not evidence; the token must be longer.
fn has_ending(lower: &str, endings: &[&str]) -> bool {
    endings.iter().any(|e| lower.len() > e.len() && lower.ends_with(e))
}

fn has_attached_prefix(lower: &str) -> bool {
    ATTACHED_PREFIXES.iter().any(|p| lower.len() > p.len() + 1 && lower.starts_with(p))
}
