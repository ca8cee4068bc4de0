//! Marker vocabularies for owner-name classification.
//!
//! Multi-word entries are matched on consecutive tokens (token boundaries),
//! never as raw substrings, so "co" does not fire inside "Cole".

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub(crate) const COMPANY_MARKERS: &[&str] = &[
    "llc",
    "llp",
    "lp",
    "lllp",
    "pllc",
    "inc",
    "incorporated",
    "corp",
    "corporation",
    "co",
    "company",
    "ltd",
    "limited",
    "properties",
    "enterprises",
    "holdings",
    "group",
    "partnership",
    "partners",
    "associates",
    "farms",
    "investments",
    "bank",
    "church",
    "association",
    "credit union",
];

pub(crate) const TRUST_MARKERS: &[&str] = &[
    "trust",
    "trusts",
    "tr",
    "ttee",
    "ttees",
    "trs",
    "tste",
    "trustee",
    "trustees",
    "rev",
    "revocable",
    "irrevocable",
    "living",
    "dtd",
    "dated",
    "family trust",
    "marital",
    "residuary",
    "charitable",
    "foundation",
    "estate of",
];

pub(crate) const FAMILY_TRUST_MARKERS: &[&str] = &["family trust"];

pub(crate) const DATED_MARKERS: &[&str] = &["dated", "dtd"];

pub(crate) const JOINT_SEPARATORS: &[&str] = &["&", "/", "and"];

/// Spouse designations ("and wife", "and husband").
pub(crate) const SPOUSE_MARKERS: &[&str] = &["et ux", "etux", "et vir", "etvir"];

pub(crate) const ET_AL_MARKERS: &[&str] = &["et al", "etal", "et als", "etals"];

pub(crate) const LIFE_ESTATE_MARKERS: &[&str] = &["life estate", "l/e", "le"];

/// Surname particles that bind to the following token.
///
/// `le` is absent on purpose: standalone it marks a life estate.
pub(crate) const COMPOUND_PREFIXES: &[&str] =
    &["van", "von", "de", "der", "den", "del", "della", "di", "da", "du", "la", "st", "mc", "mac", "o'"];

pub(crate) const HONORIFICS: &[&str] = &[
    "mr",
    "mrs",
    "ms",
    "miss",
    "dr",
    "doctor",
    "prof",
    "professor",
    "reverend",
    "hon",
    "honorable",
    "judge",
    "sir",
    "dame",
    "lord",
    "lady",
];

pub(crate) const SUFFIXES: &[&str] =
    &["jr", "junior", "sr", "senior", "ii", "iii", "iv", "esq", "esquire", "phd", "md", "dds", "llb", "jd", "cpa", "mba"];

/// Legal words that never name a person.
const LEGAL_WORDS: &[&str] =
    &["family", "agreement", "declaration", "estate", "life", "ua", "uad", "uta", "fbo", "survivor", "survivors"];

const STOPWORDS: &[&str] = &["the", "of", "a", "an", "for", "by", "under", "as"];

static HONORIFIC_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| HONORIFICS.iter().copied().collect());

static SUFFIX_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| SUFFIXES.iter().copied().collect());

/// Every single word that can appear in a marker phrase, plus legal words and
/// stopwords. Tokens in this set are never name candidates.
static NON_NAME_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let phrases = COMPANY_MARKERS
        .iter()
        .chain(TRUST_MARKERS)
        .chain(JOINT_SEPARATORS)
        .chain(SPOUSE_MARKERS)
        .chain(ET_AL_MARKERS)
        .chain(LIFE_ESTATE_MARKERS);

    phrases.copied().flat_map(|p| p.split(' ')).chain(LEGAL_WORDS.iter().copied()).chain(STOPWORDS.iter().copied()).collect()
});

pub(crate) fn is_honorific(lower: &str) -> bool {
    HONORIFIC_SET.contains(lower)
}

pub(crate) fn is_suffix(lower: &str) -> bool {
    SUFFIX_SET.contains(lower)
}

pub(crate) fn is_non_name_word(lower: &str) -> bool {
    NON_NAME_WORDS.contains(lower)
}

/// A bare "estate" names a decedent's estate; "life estate" is a different
/// family.
pub(crate) fn has_estate_word<S: AsRef<str>>(words: &[S]) -> bool {
    words
        .iter()
        .enumerate()
        .any(|(i, w)| w.as_ref() == "estate" && (i == 0 || words[i - 1].as_ref() != "life"))
}

pub(crate) fn is_compound_prefix(lower: &str) -> bool {
    COMPOUND_PREFIXES.contains(&lower)
}

/// True when `phrase` occurs on consecutive token boundaries of `words`.
pub(crate) fn contains_phrase<S: AsRef<str>>(words: &[S], phrase: &str) -> bool {
    let parts: Vec<&str> = phrase.split(' ').collect();
    if parts.is_empty() || parts.len() > words.len() {
        return false;
    }
    words.windows(parts.len()).any(|window| window.iter().zip(&parts).all(|(w, p)| w.as_ref() == *p))
}

/// True when any phrase of `markers` occurs in `words`.
pub(crate) fn contains_any<S: AsRef<str>>(words: &[S], markers: &[&str]) -> bool {
    markers.iter().any(|m| contains_phrase(words, m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrases_match_on_token_boundaries() {
        let words = ["cole", "family", "trust"];
        assert!(contains_phrase(&words, "family trust"));
        assert!(!contains_phrase(&words, "co"));
        assert!(!contains_phrase(&words, "trust family"));
        assert!(!contains_phrase(&["trust"], "family trust"));
    }

    #[test]
    fn estate_word_outside_life_estate() {
        assert!(has_estate_word(&["smith", "john", "estate"]));
        assert!(has_estate_word(&["estate", "of", "smith"]));
        assert!(!has_estate_word(&["smith", "john", "life", "estate"]));
        assert!(!has_estate_word(&["smith", "john"]));
    }

    #[test]
    fn marker_words_are_not_names() {
        for w in ["trust", "tr", "llc", "et", "al", "l/e", "estate", "family", "the", "&"] {
            assert!(is_non_name_word(w), "{w} should be a non-name word");
        }
        for w in ["smith", "linda", "van", "mc"] {
            assert!(!is_non_name_word(w), "{w} should be usable as a name");
        }
    }
}
