pub mod markers;
pub mod predicates;
pub mod rules;
