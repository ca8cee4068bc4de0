//! Result assembly.
//!
//! Turns an engine `Outcome` into the public `ParsedName`:
//!
//! ```text
//! Outcome { classification, names } ──▶ ParsedName { entity_type, first, last, middle, confidence, raw }
//!                                   └─▶ Options (interior tokens kept or dropped)
//! ```
//!
//! Every outcome assembles into a record; there is no failure path.
//!
//! ## Confidence
//!
//! Percent values, fixed per entity type and then adjusted by how the names
//! were found:
//!
//! | entity                              | base |
//! |-------------------------------------|------|
//! | complex                             | 50   |
//! | person, et al, life estate          | 60   |
//! | company, trust                      | 70   |
//! | joint ownership                     | 80   |
//!
//! - Explicit structure (two capitalized words, "Last, First") adds 10.
//! - A scorer tie (order taken from reading order alone) subtracts 10.
//! - A rule that expects names but found none gives `EMPTY`.

use super::metrics::Outcome;
use crate::{EntityType, InteriorTokens, Options, ParsedName, Plan};

const EMPTY: u8 = 50;
const STRUCTURE_BONUS: u8 = 10;
const TIE_PENALTY: u8 = 10;

pub(crate) fn assemble(raw: &str, outcome: &Outcome, options: &Options) -> ParsedName {
    let names = &outcome.names;
    let middle_name = match options.interior {
        InteriorTokens::Retain => names.middle.join(" "),
        InteriorTokens::Discard => String::new(),
    };

    ParsedName {
        entity_type: outcome.classification.entity,
        first_name: names.first.clone(),
        last_name: names.last.clone(),
        middle_name,
        confidence: Some(f64::from(confidence(outcome)) / 100.0),
        raw: raw.to_string(),
    }
}

fn base(entity: EntityType) -> u8 {
    match entity {
        EntityType::Complex => 50,
        EntityType::Person | EntityType::EtAl | EntityType::LifeEstate => 60,
        EntityType::Company | EntityType::Trust => 70,
        EntityType::JointOwnership => 80,
    }
}

pub(crate) fn confidence(outcome: &Outcome) -> u8 {
    let names = &outcome.names;
    let base = base(outcome.classification.entity);

    match outcome.classification.plan {
        Plan::Terminal => base,
        _ if names.first.is_empty() && names.last.is_empty() => EMPTY,
        Plan::Direct { .. } | Plan::Inverted { .. } => base + STRUCTURE_BONUS,
        Plan::Extract(_) => match names.decision {
            Some(d) if d.is_tie() => base - TIE_PENALTY,
            _ => base,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Parser;
    use crate::rules::entity::rules;

    fn confidence_of(input: &str) -> u8 {
        let rules = rules::get();
        confidence(&Parser::new(input, &rules).run())
    }

    #[test]
    fn confidence_by_rule_and_path() {
        assert_eq!(confidence_of(""), 50);
        assert_eq!(confidence_of("Kane Family Farms Llc"), 70);
        assert_eq!(confidence_of("Hansen Linda K Rev Trust"), 70);
        assert_eq!(confidence_of("Cheslak Family Trust"), 70);
        assert_eq!(confidence_of("Clark Jason R & Shari A"), 80);
        assert_eq!(confidence_of("Roberts Sandra K Etal"), 60);
        assert_eq!(confidence_of("John Smith"), 70);
        assert_eq!(confidence_of("Smith, John A"), 70);
    }

    #[test]
    fn ties_and_missing_names_lower_confidence() {
        assert_eq!(confidence_of("Kirk Dunn Trust"), 60);
        assert_eq!(confidence_of("Cole Beulah Revocable Trust"), 70);
        assert_eq!(confidence_of("Living Trust"), 50);
    }

    #[test]
    fn assembled_confidence_is_a_fraction() {
        let rules = rules::get();
        let outcome = Parser::new("John Smith", &rules).run();
        let parsed = assemble("John Smith", &outcome, &Options::default());
        assert_eq!(parsed.confidence, Some(0.7));
    }
}
