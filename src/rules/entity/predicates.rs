use crate::rules::entity::markers::{is_compound_prefix, is_non_name_word};
use crate::{Analysis, NameToken, TokenFlags};

/// Returns true when the token can carry a person's name.
pub fn is_name_candidate(t: &NameToken) -> bool {
    t.is_name_shaped() && !is_non_name_word(&t.lower)
}

/// Position of the first surname particle followed by a name word.
pub fn compound_prefix_position(input: &Analysis) -> Option<usize> {
    input.tokens.windows(2).position(|w| is_compound_prefix(&w[0].lower) && is_name_candidate(&w[1]))
}

/// Index of the comma token in a "Last, First" shape: exactly one comma, with
/// name candidates on both sides of it.
pub fn single_comma(input: &Analysis) -> Option<usize> {
    let mut commas = input.tokens.iter().enumerate().filter(|(_, t)| t.flags.contains(TokenFlags::COMMA));
    let (idx, _) = commas.next()?;
    if commas.next().is_some() {
        return None;
    }

    let before = input.tokens[..=idx].iter().any(is_name_candidate);
    let after = input.tokens[idx + 1..].iter().any(is_name_candidate);
    (before && after).then_some(idx)
}

/// Exactly two name words, both capitalized, with no other word-like tokens
/// (initials, honorifics and suffixes aside). Returns their indices.
pub fn two_capitalized_words(input: &Analysis) -> Option<(usize, usize)> {
    let words: Vec<(usize, &NameToken)> =
        input.tokens.iter().enumerate().filter(|(_, t)| t.is_name_shaped()).collect();
    match words.as_slice() {
        [(a, ta), (b, tb)]
            if [ta, tb].iter().all(|t| is_name_candidate(t) && t.flags.contains(TokenFlags::CAPITALIZED)) =>
        {
            Some((*a, *b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalize::normalize;
    use crate::engine::trigger::scan;

    fn analysis(input: &str) -> Analysis {
        let tokens = normalize(input);
        let markers = scan(&tokens);
        Analysis { tokens, markers }
    }

    #[test]
    fn candidates_skip_markers_and_initials() {
        let a = analysis("Hansen Linda K Rev Trust");
        let idx: Vec<usize> = (0..a.tokens.len()).filter(|&i| is_name_candidate(&a.tokens[i])).collect();
        assert_eq!(idx, [0, 1]);
    }

    #[test]
    fn compound_needs_a_following_name() {
        assert_eq!(compound_prefix_position(&analysis("Van Meter Eva Jo")), Some(0));
        assert_eq!(compound_prefix_position(&analysis("Eva Jo Van")), None);
        assert_eq!(compound_prefix_position(&analysis("De K Smith")), None);
    }

    #[test]
    fn comma_shape() {
        assert_eq!(single_comma(&analysis("Smith, John A")), Some(0));
        assert_eq!(single_comma(&analysis("Smith, John, Mary")), None);
        assert_eq!(single_comma(&analysis("Smith,")), None);
    }

    #[test]
    fn two_words_shape() {
        assert_eq!(two_capitalized_words(&analysis("John Smith")), Some((0, 1)));
        assert_eq!(two_capitalized_words(&analysis("Dr John Q Smith Jr")), Some((1, 3)));
        assert_eq!(two_capitalized_words(&analysis("john smith")), None);
        assert_eq!(two_capitalized_words(&analysis("John Smith Estate")), None);
        assert_eq!(two_capitalized_words(&analysis("The Smiths")), None);
    }
}
