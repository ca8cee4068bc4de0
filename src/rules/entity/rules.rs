//! The classification cascade.
//!
//! Rules are listed head-to-tail; the first one whose production returns a
//! classification decides the entity type. Company markers come before trust
//! markers: they are the strongest, least overloaded signal and must not be
//! shadowed by trust-like words ("Kane Family Farms Llc").

use crate::rules::entity::predicates::{compound_prefix_position, single_comma, two_capitalized_words};
use crate::{Analysis, Classification, EntityType, ExtractFlags, MarkerMask, Plan, Rule};

fn extract(entity: EntityType, flags: ExtractFlags) -> Option<Classification> {
    Some(Classification { entity, plan: Plan::Extract(flags) })
}

/// Rule: any company marker. Terminal, no names.
fn rule_company() -> Rule {
    rule! {
        name: "company marker",
        buckets: MarkerMask::COMPANY,
        priority: 10,
        prod: |input: &Analysis| -> Option<Classification> {
            input
                .markers
                .contains(MarkerMask::COMPANY)
                .then_some(Classification { entity: EntityType::Company, plan: Plan::Terminal })
        }
    }
}

/// Rule: trust markers, with family/dated sub-flags for the extractor.
fn rule_trust() -> Rule {
    rule! {
        name: "trust marker",
        buckets: MarkerMask::TRUST,
        priority: 20,
        prod: |input: &Analysis| -> Option<Classification> {
            let mut flags = ExtractFlags::empty();
            if input.markers.contains(MarkerMask::FAMILY_TRUST) {
                flags |= ExtractFlags::FAMILY_TRUST;
            }
            if input.markers.contains(MarkerMask::DATED) {
                flags |= ExtractFlags::DATED_TRUST;
            }
            extract(EntityType::Trust, flags)
        }
    }
}

/// Rule: `&`, `/`, `and`, or a spouse designation. Names come from the first
/// party listed.
fn rule_joint() -> Rule {
    rule! {
        name: "joint ownership",
        buckets: MarkerMask::JOINT | MarkerMask::SPOUSE,
        priority: 30,
        prod: |_input: &Analysis| -> Option<Classification> {
            extract(EntityType::JointOwnership, ExtractFlags::empty())
        }
    }
}

fn rule_et_al() -> Rule {
    rule! {
        name: "et al",
        buckets: MarkerMask::ET_AL,
        priority: 40,
        prod: |_input: &Analysis| -> Option<Classification> {
            extract(EntityType::EtAl, ExtractFlags::empty())
        }
    }
}

fn rule_life_estate() -> Rule {
    rule! {
        name: "life estate",
        buckets: MarkerMask::LIFE_ESTATE,
        priority: 50,
        prod: |_input: &Analysis| -> Option<Classification> {
            extract(EntityType::LifeEstate, ExtractFlags::empty())
        }
    }
}

/// Rule: a surname particle ("Van", "Mc") followed by a name word.
fn rule_compound_person() -> Rule {
    rule! {
        name: "compound surname person",
        buckets: MarkerMask::COMPOUND,
        priority: 60,
        prod: |input: &Analysis| -> Option<Classification> {
            compound_prefix_position(input)?;
            extract(EntityType::Person, ExtractFlags::empty())
        }
    }
}

/// Rule: "Last, First [Middle]".
fn rule_inverted_person() -> Rule {
    rule! {
        name: "inverted person (last, first)",
        buckets: MarkerMask::COMMA,
        priority: 70,
        prod: |input: &Analysis| -> Option<Classification> {
            let comma = single_comma(input)?;
            Some(Classification { entity: EntityType::Person, plan: Plan::Inverted { comma } })
        }
    }
}

/// Rule: two capitalized words map straight to first/last, no scoring.
fn rule_simple_person() -> Rule {
    rule! {
        name: "simple person",
        priority: 80,
        prod: |input: &Analysis| -> Option<Classification> {
            let (first, last) = two_capitalized_words(input)?;
            Some(Classification { entity: EntityType::Person, plan: Plan::Direct { first, last } })
        }
    }
}

/// Catch-all. Unrecognized input is `complex`, not an error.
pub(crate) fn rule_complex() -> Rule {
    rule! {
        name: "complex",
        priority: u16::MAX,
        prod: |_input: &Analysis| -> Option<Classification> {
            Some(Classification { entity: EntityType::Complex, plan: Plan::Terminal })
        }
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_company(),
        rule_trust(),
        rule_joint(),
        rule_et_al(),
        rule_life_estate(),
        rule_compound_person(),
        rule_inverted_person(),
        rule_simple_person(),
        rule_complex(),
    ]
}
