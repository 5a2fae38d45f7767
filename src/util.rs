//! Shared utility modules used across optypo components.

pub mod levenshtein;
