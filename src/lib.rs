//! Koerper Engine — non-repetitive sentence enumeration from a finite corpus.
//!
//! Draws template sentences from a fixed German corpus under several
//! interacting exclusion criteria (recently used verbs, nouns, sentence ids,
//! and source documents are tracked in bounded "trash" bins), then assembles
//! the picks into one punctuated sentence starting with "Der Körper".

pub mod core;
pub mod schema;
