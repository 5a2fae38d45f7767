//! Option-name typo detection.
//!
//! This module resolves the dictionary of valid component option names from
//! preset tables and custom names, and classifies observed identifiers
//! against it, producing "did you mean?" findings with ranked suggestions.

pub mod classifier;
pub mod config;
pub mod dictionary;
pub mod presets;
pub mod source;

// Re-export commonly used types
pub use classifier::*;
pub use config::*;
pub use dictionary::*;
pub use presets::*;
pub use source::*;
