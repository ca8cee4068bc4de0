//! Trigger scanning (input pre-classification).
//!
//! Inspects the normalized token stream and records which marker families
//! occur in it. The resulting `MarkerMask` gates cascade rules (see
//! `compiled_rules.rs`) and hands sub-flags such as "family trust" or "dated"
//! to the extractor.
//!
//! Matching is always on token boundaries against the lower-cased,
//! punctuation-stripped token forms, so "L.L.C." matches `llc` and "Cole" does
//! not match `co`.

use super::compiled_rules::MarkerMask;
use crate::rules::entity::markers::{
    COMPANY_MARKERS, DATED_MARKERS, ET_AL_MARKERS, FAMILY_TRUST_MARKERS, JOINT_SEPARATORS, LIFE_ESTATE_MARKERS,
    SPOUSE_MARKERS, TRUST_MARKERS, contains_any, has_estate_word, is_compound_prefix,
};
use crate::{NameToken, TokenFlags};

/// Scan `tokens` for marker families.
pub(crate) fn scan(tokens: &[NameToken]) -> MarkerMask {
    let words: Vec<&str> = tokens.iter().map(|t| t.lower.as_str()).collect();
    let mut mask = MarkerMask::empty();

    const FAMILIES: &[(&[&str], MarkerMask)] = &[
        (COMPANY_MARKERS, MarkerMask::COMPANY),
        (TRUST_MARKERS, MarkerMask::TRUST),
        (FAMILY_TRUST_MARKERS, MarkerMask::FAMILY_TRUST),
        (DATED_MARKERS, MarkerMask::DATED),
        (JOINT_SEPARATORS, MarkerMask::JOINT),
        (SPOUSE_MARKERS, MarkerMask::SPOUSE),
        (ET_AL_MARKERS, MarkerMask::ET_AL),
        (LIFE_ESTATE_MARKERS, MarkerMask::LIFE_ESTATE),
    ];
    for &(markers, bit) in FAMILIES {
        if contains_any(&words, markers) {
            mask |= bit;
        }
    }

    if has_estate_word(&words) {
        mask |= MarkerMask::TRUST;
    }

    // A particle only counts when a name word follows it.
    if tokens.windows(2).any(|w| is_compound_prefix(&w[0].lower) && w[1].is_name_shaped()) {
        mask |= MarkerMask::COMPOUND;
    }

    if let Some((_, head)) = tokens.split_last() {
        if head.iter().any(|t| t.flags.contains(TokenFlags::COMMA)) {
            mask |= MarkerMask::COMMA;
        }
    }

    log::trace!("[trigger_scan] words={:?} markers={:?}", words, mask);
    mask
}
