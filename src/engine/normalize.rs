//! Input normalization.
//!
//! Turns a raw owner-name string into `NameToken`s:
//!
//! ```text
//! "HANSEN LINDA K. Rev Trust, Dtd 3/4/99"
//!    │ split_whitespace, split out '&' and '/'
//!    v
//! [HANSEN] [LINDA] [K.] [Rev] [Trust,] [Dtd] [3/4/99]
//!    │ trim edge punctuation, lower-case, flag
//!    v
//! HANSEN/hansen  LINDA/linda  K/k(INITIAL)  Rev/rev  Trust/trust(COMMA)
//! Dtd/dtd  3/4/99(NUMERIC|DATE)
//! ```
//!
//! Date and number tokens (`03/12/2001`, `1/2`) and the life-estate
//! abbreviation `l/e` are never split on their slashes.

use crate::rules::entity::markers::{is_honorific, is_non_name_word, is_suffix};
use crate::{NameToken, TokenFlags};
use chrono::{Month, NaiveDate};

const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%m/%d/%y", "%m-%d-%Y", "%m-%d-%y", "%Y-%m-%d", "%m.%d.%Y"];

/// Tokenize and flag `raw`. Empty or all-punctuation input gives no tokens.
pub(crate) fn normalize(raw: &str) -> Vec<NameToken> {
    raw.split_whitespace().flat_map(split_separators).filter_map(make_token).collect()
}

fn split_separators(word: &str) -> Vec<&str> {
    if word.chars().any(|c| c.is_ascii_digit()) || is_life_estate_abbrev(word) {
        return vec![word];
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    for (i, c) in word.char_indices() {
        if c == '&' || c == '/' {
            if start < i {
                pieces.push(&word[start..i]);
            }
            pieces.push(&word[i..i + c.len_utf8()]);
            start = i + c.len_utf8();
        }
    }
    if start < word.len() {
        pieces.push(&word[start..]);
    }
    pieces
}

fn is_life_estate_abbrev(word: &str) -> bool {
    word.trim_matches(|c: char| !c.is_alphanumeric()).eq_ignore_ascii_case("l/e")
}

fn make_token(piece: &str) -> Option<NameToken> {
    let piece = piece.trim();
    let comma = piece.trim_end_matches(|c: char| c == '.' || c == ')' || c == '"').ends_with(',');
    let text: String = piece
        .trim_matches(|c: char| !(c.is_alphanumeric() || c == '&' || c == '/' || c == '\'' || c == '\u{2019}'))
        .replace('\u{2019}', "'");
    if text.is_empty() || text == "'" {
        return None;
    }

    let lower: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_alphanumeric() || matches!(c, '&' | '/' | '\'' | '-'))
        .collect();
    if lower.is_empty() {
        return None;
    }
    // "Co-Trustee", "Co-Ttee"
    let lower = match lower.strip_prefix("co-") {
        Some(rest) if is_non_name_word(rest) => rest.to_string(),
        _ => lower,
    };

    let mut flags = TokenFlags::empty();

    if comma {
        flags |= TokenFlags::COMMA;
    }
    if text.chars().next().is_some_and(char::is_uppercase) {
        flags |= TokenFlags::CAPITALIZED;
    }
    if lower.chars().any(char::is_alphabetic) && lower.chars().all(|c| c.is_alphabetic() || c == '\'' || c == '-') {
        flags |= TokenFlags::ALPHABETIC;
    }
    if lower.chars().any(|c| c.is_ascii_digit()) {
        flags |= TokenFlags::NUMERIC;
        if is_calendar_date(&text) {
            flags |= TokenFlags::DATE;
        }
    }
    if matches!(lower.as_str(), "&" | "/" | "and") {
        flags |= TokenFlags::CONJUNCTION;
    }
    if is_initial(piece, &lower) {
        flags |= TokenFlags::INITIAL;
    }
    if is_honorific(&lower) {
        flags |= TokenFlags::HONORIFIC;
    }
    if is_suffix(&lower) {
        flags |= TokenFlags::SUFFIX;
    }
    if lower.len() >= 3 && lower.parse::<Month>().is_ok() {
        flags |= TokenFlags::MONTH;
    }

    Some(NameToken { text, lower, flags })
}

// "K", "K.", "R," but not "&" or "Jr."
fn is_initial(piece: &str, lower: &str) -> bool {
    if !lower.chars().all(char::is_alphabetic) {
        return false;
    }
    let raw = piece.trim_end_matches(',');
    let len = raw.chars().count();
    len == 1 || (len <= 2 && raw.ends_with('.'))
}

fn is_calendar_date(text: &str) -> bool {
    regex!(r"^\d{1,4}[/.-]\d{1,2}[/.-]\d{1,4}$").is_match(text)
        && DATE_FORMATS.iter().any(|fmt| NaiveDate::parse_from_str(text, fmt).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        normalize(input).into_iter().map(|t| t.text).collect()
    }

    fn flags_of(input: &str, text: &str) -> TokenFlags {
        normalize(input).into_iter().find(|t| t.text == text).map(|t| t.flags).unwrap()
    }

    #[test]
    fn empty_and_punctuation_inputs_give_no_tokens() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \t ").is_empty());
        assert!(normalize("... ,, --").is_empty());
    }

    #[test]
    fn separators_become_tokens() {
        assert_eq!(texts("Clark Jason R & Shari A"), ["Clark", "Jason", "R", "&", "Shari", "A"]);
        assert_eq!(texts("Hamilton/Kim&Robert"), ["Hamilton", "/", "Kim", "&", "Robert"]);
    }

    #[test]
    fn dates_and_life_estate_stay_whole() {
        assert_eq!(texts("Smith Trust Dtd 03/12/2001"), ["Smith", "Trust", "Dtd", "03/12/2001"]);
        assert_eq!(texts("Smith John L/E"), ["Smith", "John", "L/E"]);
        assert!(flags_of("Trust Dtd 03/12/2001", "03/12/2001").contains(TokenFlags::NUMERIC | TokenFlags::DATE));
        assert!(!flags_of("Smith 1/2 Int", "1/2").contains(TokenFlags::DATE));
    }

    #[test]
    fn punctuation_is_stripped_for_matching_only() {
        let tokens = normalize("Acme, L.L.C.");
        assert_eq!(tokens[0].text, "Acme");
        assert!(tokens[0].flags.contains(TokenFlags::COMMA));
        assert_eq!(tokens[1].lower, "llc");
        assert_eq!(tokens[1].text, "L.L.C");
    }

    #[test]
    fn initials_are_flagged() {
        assert!(flags_of("Daake Dennis R. Trust", "R").contains(TokenFlags::INITIAL));
        assert!(flags_of("Hansen Linda K", "K").contains(TokenFlags::INITIAL));
        assert!(!flags_of("Smith Jo", "Jo").contains(TokenFlags::INITIAL));
        assert!(!flags_of("Smith John Jr.", "Jr").contains(TokenFlags::INITIAL));
        assert!(!flags_of("Smith & Jones", "&").contains(TokenFlags::INITIAL));
    }

    #[test]
    fn honorifics_suffixes_and_months() {
        assert!(flags_of("Dr. John Smith", "Dr").contains(TokenFlags::HONORIFIC));
        assert!(flags_of("John Smith Jr.", "Jr").contains(TokenFlags::SUFFIX));
        assert!(flags_of("Trust Dtd Jan 5 1990", "Jan").contains(TokenFlags::MONTH));
    }

    #[test]
    fn shape_flags() {
        let f = flags_of("o'brien Mary-Kate", "Mary-Kate");
        assert!(f.contains(TokenFlags::ALPHABETIC | TokenFlags::CAPITALIZED));
        let f = flags_of("o'brien Mary-Kate", "o'brien");
        assert!(f.contains(TokenFlags::ALPHABETIC));
        assert!(!f.contains(TokenFlags::CAPITALIZED));
    }

    #[test]
    fn co_prefix_is_dropped_from_marker_words() {
        assert_eq!(normalize("Co-Trustee")[0].lower, "trustee");
        assert_eq!(normalize("Co-Ttee")[0].text, "Co-Ttee");
        assert_eq!(normalize("Co-Op")[0].lower, "co-op");
    }

    #[test]
    fn curly_apostrophes_are_folded() {
        assert_eq!(normalize("O\u{2019}Brien")[0].lower, "o'brien");
    }
}
