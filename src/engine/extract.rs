//! Trust/person name extraction.
//!
//! Runs after classification and turns the token stream into first/last name
//! strings according to the classifier's `Plan`:
//!
//! ```text
//! Terminal           -> no names
//! Direct {first,last}-> token texts as-is
//! Inverted {comma}   -> surname before the comma, given name after it
//! Extract(flags)     -> segment -> filter -> merge particles -> assign
//! ```
//!
//! The `Extract` path:
//!
//! 1. **Segment**: with joint separators, only the first non-empty conjunct is
//!    used ("first party listed").
//! 2. **Filter**: drop markers, legal words, stopwords, honorifics, suffixes,
//!    numbers/dates (and month names inside a `dated`/`dtd` clause), initials.
//! 3. **Merge**: a surname particle binds with the following word(s) into one
//!    unit ("Van" + "Meter"); units are never split.
//! 4. **Assign** by unit count: 0 -> nothing, 1 -> surname only, 2 -> comma hint
//!    or the ordering scorer, 3+ -> first and last units, interior kept aside.

use crate::rules::entity::markers::{DATED_MARKERS, is_compound_prefix};
use crate::rules::entity::predicates::is_name_candidate;
use crate::rules::names::scoring::{OrderDecision, first_score, last_score, score_order};
use crate::{ExtractFlags, NameToken, Plan, TokenFlags};

/// Names produced for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Extraction {
    pub first: String,
    pub last: String,
    /// Interior units between first and last, in input order.
    pub middle: Vec<String>,
    /// The name units that were considered, in input order.
    pub candidates: Vec<String>,
    /// Set when the two-unit ordering scorer ran.
    pub decision: Option<OrderDecision>,
    /// Surname was borrowed from a later party ("John & Mary Smith").
    pub borrowed_surname: bool,
}

/// A name unit: one word, or a particle merged with what follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Unit {
    text: String,
    compound: bool,
    /// The unit's last token carried a trailing comma.
    comma: bool,
}

pub(crate) fn extract(tokens: &[NameToken], plan: &Plan) -> Extraction {
    match plan {
        Plan::Terminal => Extraction::default(),
        Plan::Direct { first, last } => direct(tokens, *first, *last),
        Plan::Inverted { comma } => inverted(tokens, *comma),
        Plan::Extract(flags) => extract_names(tokens, *flags),
    }
}

fn direct(tokens: &[NameToken], first: usize, last: usize) -> Extraction {
    let text = |i: usize| tokens.get(i).map(|t| t.text.clone()).unwrap_or_default();
    let (first, last) = (text(first), text(last));
    Extraction { candidates: vec![first.clone(), last.clone()], first, last, ..Extraction::default() }
}

fn inverted(tokens: &[NameToken], comma: usize) -> Extraction {
    let split = (comma + 1).min(tokens.len());
    let surname = units(&candidates(&tokens[..split], false));
    let given = units(&candidates(&tokens[split..], false));

    let last = surname.iter().map(|u| u.text.as_str()).collect::<Vec<_>>().join(" ");
    let first = given.first().map(|u| u.text.clone()).unwrap_or_default();
    let middle = given.iter().skip(1).map(|u| u.text.clone()).collect();
    let candidates = surname.iter().chain(&given).map(|u| u.text.clone()).collect();

    Extraction { first, last, middle, candidates, ..Extraction::default() }
}

fn extract_names(tokens: &[NameToken], flags: ExtractFlags) -> Extraction {
    let dated = flags.contains(ExtractFlags::DATED_TRUST);
    let segments: Vec<Vec<Unit>> = tokens
        .split(|t| t.flags.contains(TokenFlags::CONJUNCTION))
        .map(|seg| units(&candidates(seg, dated)))
        .collect();

    let Some(idx) = segments.iter().position(|units| !units.is_empty()) else {
        log::debug!("[extract] no name candidates left");
        return Extraction::default();
    };
    let primary = &segments[idx];

    if let Some(borrowed) = borrow_shared_surname(primary, &segments[idx + 1..]) {
        return borrowed;
    }

    assign(primary, flags)
}

/// "John & Mary Smith": a lone given name in the first party takes the
/// surname that closes a later party.
fn borrow_shared_surname(primary: &[Unit], later: &[Vec<Unit>]) -> Option<Extraction> {
    let [lone] = primary else {
        return None;
    };
    if lone.compound || first_score(&lone.text) <= last_score(&lone.text) {
        return None;
    }
    let donor = later.iter().find(|units| units.len() >= 2)?;
    let surname = donor.last()?;

    log::debug!("[extract] borrowing surname \"{}\" for \"{}\"", surname.text, lone.text);
    Some(Extraction {
        first: lone.text.clone(),
        last: surname.text.clone(),
        candidates: vec![lone.text.clone(), surname.text.clone()],
        borrowed_surname: true,
        ..Extraction::default()
    })
}

fn assign(units: &[Unit], flags: ExtractFlags) -> Extraction {
    let candidates: Vec<String> = units.iter().map(|u| u.text.clone()).collect();
    let mut out = Extraction { candidates, ..Extraction::default() };

    if let Some(pos) = units.iter().position(|u| u.compound) {
        let mut rest = units.iter().enumerate().filter(|&(i, _)| i != pos).map(|(_, u)| u.text.clone());
        out.last = units[pos].text.clone();
        out.first = rest.next().unwrap_or_default();
        out.middle = rest.collect();
        return out;
    }

    match units {
        [] => {}
        [only] => {
            if flags.contains(ExtractFlags::FAMILY_TRUST) {
                log::trace!("[extract] family trust, surname only: {}", only.text);
            }
            out.last = only.text.clone();
        }
        [a, b] if a.comma => {
            log::debug!("[extract] comma hint: {:?}, {:?}", a.text, b.text);
            out.first = b.text.clone();
            out.last = a.text.clone();
        }
        [a, b] => {
            let decision = score_order(&a.text, &b.text);
            log::debug!("[extract] ordering {:?} {:?} -> {:?}", a.text, b.text, decision);
            let (first, last) = decision.arrange(a, b);
            out.first = first.text.clone();
            out.last = last.text.clone();
            out.decision = Some(decision);
        }
        [first, interior @ .., last] => {
            out.first = first.text.clone();
            out.last = last.text.clone();
            out.middle = interior.iter().map(|u| u.text.clone()).collect();
        }
    }
    out
}

/// Name-candidate tokens of one segment. With `dated`, the date after
/// `dated`/`dtd` is dropped: numbers, plus month names that sit next to a
/// number ("Jan 5 1990", "5 June"). A month word with no number beside it is
/// kept, since "April" or "June" may be a given name.
fn candidates(tokens: &[NameToken], dated: bool) -> Vec<&NameToken> {
    let is_number = |t: &NameToken| t.flags.intersects(TokenFlags::NUMERIC | TokenFlags::DATE);
    let mut out = Vec::new();
    let mut in_dated_clause = false;
    let mut after_number = false;

    for (i, tok) in tokens.iter().enumerate() {
        if dated && DATED_MARKERS.contains(&tok.lower.as_str()) {
            in_dated_clause = true;
            after_number = false;
            continue;
        }
        if in_dated_clause {
            if is_number(tok) {
                after_number = true;
                continue;
            }
            let month = tok.flags.contains(TokenFlags::MONTH);
            if month && (after_number || tokens.get(i + 1).is_some_and(is_number)) {
                continue;
            }
            in_dated_clause = false;
        }
        if is_name_candidate(tok) {
            out.push(tok);
        }
    }
    out
}

fn units(cands: &[&NameToken]) -> Vec<Unit> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < cands.len() {
        let mut text = cands[i].text.clone();
        let mut compound = false;
        let mut j = i;
        while is_compound_prefix(&cands[j].lower) && j + 1 < cands.len() {
            j += 1;
            text.push(' ');
            text.push_str(&cands[j].text);
            compound = true;
        }
        out.push(Unit { text, compound, comma: cands[j].flags.contains(TokenFlags::COMMA) });
        i = j + 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalize::normalize;

    fn run(input: &str, flags: ExtractFlags) -> Extraction {
        extract(&normalize(input), &Plan::Extract(flags))
    }

    #[test]
    fn markers_dates_and_initials_are_dropped() {
        let out = run("Smith John Q Rev Living Trust Dtd Jan 5 1990", ExtractFlags::DATED_TRUST);
        assert_eq!(out.candidates, ["Smith", "John"]);
        assert_eq!((out.first.as_str(), out.last.as_str()), ("John", "Smith"));
    }

    #[test]
    fn month_names_without_a_number_are_names() {
        let out = run("Trust Dtd April Smith", ExtractFlags::DATED_TRUST);
        assert_eq!(out.candidates, ["April", "Smith"]);

        let out = run("Jones Mary Trust Dtd 5 June", ExtractFlags::DATED_TRUST);
        assert_eq!(out.candidates, ["Jones", "Mary"]);
        assert_eq!((out.first.as_str(), out.last.as_str()), ("Mary", "Jones"));
    }

    #[test]
    fn particles_merge_into_one_surname() {
        let out = run("Van Der Berg Anna", ExtractFlags::empty());
        assert_eq!(out.candidates, ["Van Der Berg", "Anna"]);
        assert_eq!(out.last, "Van Der Berg");
        assert_eq!(out.first, "Anna");
    }

    #[test]
    fn single_unit_is_a_surname() {
        let out = run("Cheslak Family Trust", ExtractFlags::FAMILY_TRUST);
        assert_eq!((out.first.as_str(), out.last.as_str()), ("", "Cheslak"));
        let out = run("Trust Of Pudenz", ExtractFlags::empty());
        assert_eq!((out.first.as_str(), out.last.as_str()), ("", "Pudenz"));
    }

    #[test]
    fn three_units_keep_interior_aside() {
        let out = run("Ellen Kaye Murphy Trust", ExtractFlags::empty());
        assert_eq!((out.first.as_str(), out.last.as_str()), ("Ellen", "Murphy"));
        assert_eq!(out.middle, ["Kaye"]);
    }

    #[test]
    fn first_conjunct_only() {
        let out = run("Clark Jason R & Shari A", ExtractFlags::empty());
        assert_eq!((out.first.as_str(), out.last.as_str()), ("Jason", "Clark"));
    }

    #[test]
    fn empty_first_conjunct_falls_through() {
        let out = run("& Hansen Linda", ExtractFlags::empty());
        assert_eq!((out.first.as_str(), out.last.as_str()), ("Linda", "Hansen"));
    }

    #[test]
    fn shared_surname_is_borrowed() {
        let out = run("John & Mary Smith", ExtractFlags::empty());
        assert!(out.borrowed_surname);
        assert_eq!((out.first.as_str(), out.last.as_str()), ("John", "Smith"));

        let out = run("Smith & Mary Jones", ExtractFlags::empty());
        assert!(!out.borrowed_surname);
        assert_eq!((out.first.as_str(), out.last.as_str()), ("", "Smith"));
    }

    #[test]
    fn comma_hint_overrides_scoring() {
        let out = run("Linda, Hansen & Bob", ExtractFlags::empty());
        assert_eq!((out.first.as_str(), out.last.as_str()), ("Hansen", "Linda"));
        assert_eq!(out.decision, None);
    }

    #[test]
    fn nothing_left_gives_empty_names() {
        assert_eq!(run("Living Trust", ExtractFlags::empty()), Extraction::default());
        assert_eq!(run("", ExtractFlags::empty()), Extraction::default());
    }

    #[test]
    fn direct_and_inverted_plans() {
        let tokens = normalize("John Smith");
        let out = extract(&tokens, &Plan::Direct { first: 0, last: 1 });
        assert_eq!((out.first.as_str(), out.last.as_str()), ("John", "Smith"));

        let tokens = normalize("Van Meter, Eva Jo");
        let out = extract(&tokens, &Plan::Inverted { comma: 1 });
        assert_eq!((out.first.as_str(), out.last.as_str()), ("Eva", "Van Meter"));
        assert_eq!(out.middle, ["Jo"]);
    }
}
