//! Rule sets and lexicons.
//!
//! - `entity`: marker vocabularies and the classification cascade.
//! - `names`: first-name/surname gazetteers and the ordering scorer.

pub mod entity;
pub mod names;
