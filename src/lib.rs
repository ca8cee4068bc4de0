extern crate self as deedname;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;

pub use api::{
    BatchSummary, INTERIOR_ENV, InteriorTokens, Options, ParseDetails, ParseResultVerbose, ParsedName, TokenSummary,
    classify_and_parse, classify_and_parse_batch, classify_and_parse_batch_with, classify_and_parse_with,
    parse_verbose_with,
};
pub use error::{Error, Result};
pub use rules::names::gazetteer::Gender;
pub use rules::names::scoring::{NameOrder, OrderDecision, first_score, last_score, score_order};

pub(crate) use engine::MarkerMask;

// --- Public types -----------------------------------------------------------

/// Coarse category assigned to an owner-name string.
///
/// Serialized in snake_case so records line up with the AI parser's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Person,
    Trust,
    Company,
    JointOwnership,
    EtAl,
    LifeEstate,
    Complex,
}

impl EntityType {
    pub const ALL: [EntityType; 7] = [
        EntityType::Person,
        EntityType::Trust,
        EntityType::Company,
        EntityType::JointOwnership,
        EntityType::EtAl,
        EntityType::LifeEstate,
        EntityType::Complex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Person => "person",
            EntityType::Trust => "trust",
            EntityType::Company => "company",
            EntityType::JointOwnership => "joint_ownership",
            EntityType::EtAl => "et_al",
            EntityType::LifeEstate => "life_estate",
            EntityType::Complex => "complex",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        EntityType::ALL
            .into_iter()
            .find(|et| et.as_str() == wanted)
            .ok_or_else(|| Error::UnknownEntityType(s.to_string()))
    }
}

// --- Internal types ---------------------------------------------------------

bitflags::bitflags! {
    /// Per-token shape flags computed by the normalizer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) struct TokenFlags: u16 {
        const INITIAL     = 1 << 0;
        const NUMERIC     = 1 << 1;
        const DATE        = 1 << 2;
        const MONTH       = 1 << 3;
        const HONORIFIC   = 1 << 4;
        const SUFFIX      = 1 << 5;
        const CONJUNCTION = 1 << 6;
        const COMMA       = 1 << 7;
        const CAPITALIZED = 1 << 8;
        const ALPHABETIC  = 1 << 9;
    }
}

/// One whitespace-delimited piece of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NameToken {
    /// Case-preserved text with edge punctuation trimmed (used for output).
    pub text: String,
    /// Lower-cased, punctuation-stripped form (used for matching).
    pub lower: String,
    pub flags: TokenFlags,
}

impl NameToken {
    /// True when the token has the shape of a name word: alphabetic, not an
    /// initial, honorific, suffix, conjunction or number.
    pub fn is_name_shaped(&self) -> bool {
        self.flags.contains(TokenFlags::ALPHABETIC)
            && !self.flags.intersects(
                TokenFlags::INITIAL
                    | TokenFlags::NUMERIC
                    | TokenFlags::HONORIFIC
                    | TokenFlags::SUFFIX
                    | TokenFlags::CONJUNCTION,
            )
    }
}

/// Normalized input plus the marker families detected in it.
#[derive(Debug, Clone)]
pub(crate) struct Analysis {
    pub tokens: Vec<NameToken>,
    pub markers: MarkerMask,
}

bitflags::bitflags! {
    /// Sub-flags handed from the classifier to the name extractor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub(crate) struct ExtractFlags: u8 {
        const FAMILY_TRUST = 1 << 0;
        const DATED_TRUST  = 1 << 1;
    }
}

/// What happens after a rule classified the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Plan {
    /// No names are extracted.
    Terminal,
    /// Names are taken directly from two token indices.
    Direct { first: usize, last: usize },
    /// "Last, First" shape; `comma` is the index of the token carrying the comma.
    Inverted { comma: usize },
    /// Run the trust/person name extractor.
    Extract(ExtractFlags),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Classification {
    pub entity: EntityType,
    pub plan: Plan,
}

pub(crate) type Production = Box<dyn Fn(&Analysis) -> Option<Classification> + Send + Sync>;

/// A cascade rule: a name, the marker buckets that gate it, and a production
/// that either classifies the input or passes.
pub(crate) struct Rule {
    pub name: &'static str,
    pub buckets: MarkerMask,
    pub production: Production,
    /// Cascade position; lower runs first.
    pub priority: u16,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("buckets", &self.buckets)
            .field("production", &"<function>")
            .field("priority", &self.priority)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_type_names_round_trip() {
        for et in EntityType::ALL {
            assert_eq!(et.as_str().parse::<EntityType>().unwrap(), et);
            assert_eq!(et.to_string(), et.as_str());
        }
        assert_eq!(" Joint_Ownership ".parse::<EntityType>().unwrap(), EntityType::JointOwnership);
    }

    #[test]
    fn unknown_entity_type_is_an_error() {
        let err = "partnership".parse::<EntityType>().unwrap_err();
        assert!(matches!(&err, Error::UnknownEntityType(v) if v == "partnership"));
        assert_eq!(err.to_string(), "unknown entity type 'partnership'");
    }
}
