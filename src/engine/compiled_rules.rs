//! Rule compilation and gating.
//!
//! The cascade is a fixed, ordered list of rules. Compiling it does two cheap
//! things:
//!
//! 1. Sort the rules by `priority` (stable, so equal priorities keep their
//!    declaration order). This order *is* the cascade: the first rule whose
//!    production returns a classification wins.
//! 2. Record, per rule, the `MarkerMask` buckets it needs. At run time the
//!    parser skips every rule whose buckets are absent from the input, which
//!    keeps the productions themselves free of "is this even relevant" checks.
//!
//! ## Invariants
//!
//! - Rules with an empty bucket mask are always on.
//! - A bucketed rule is active when the input mask intersects its buckets.
//! - The final catch-all rule must be bucket-free so every input classifies.

use crate::Rule;

bitflags::bitflags! {
    /// Marker families detected in an input (see `trigger.rs`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MarkerMask: u32 {
        const COMPANY      = 1 << 0;
        const TRUST        = 1 << 1;
        const FAMILY_TRUST = 1 << 2;
        const DATED        = 1 << 3;
        const JOINT        = 1 << 4;
        const SPOUSE       = 1 << 5;
        const ET_AL        = 1 << 6;
        const LIFE_ESTATE  = 1 << 7;
        const COMPOUND     = 1 << 8;
        const COMMA        = 1 << 9;
    }
}

/// Rules in cascade order.
#[derive(Debug)]
pub struct CompiledRules<'a> {
    pub rules: Vec<&'a Rule>,
}

impl<'a> CompiledRules<'a> {
    pub fn new(rules: &'a [Rule]) -> Self {
        let mut rules: Vec<&Rule> = rules.iter().collect();
        rules.sort_by_key(|r| r.priority);
        CompiledRules { rules }
    }

    /// Rules that may fire for an input carrying `markers`, in cascade order.
    pub fn active(&self, markers: MarkerMask) -> impl Iterator<Item = &'a Rule> + '_ {
        self.rules.iter().copied().filter(move |r| r.buckets.is_empty() || markers.intersects(r.buckets))
    }
}
