//! Synonym handling for tuple matching.
//!
//! Synonym declarations are lines of words separated by single spaces, e.g.
//! `"run go jog"`. Each line becomes one [`SynonymGroup`]; every word on the
//! line is mapped to that group unless an earlier line already claimed it.

pub mod index;

pub use index::{GroupId, SynonymGroup, SynonymIndex, build_synonym_index};
