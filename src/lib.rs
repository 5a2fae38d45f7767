//! # optypo
//!
//! "Did you mean?" detection for component option names.
//!
//! Given the valid option names of a configuration (preset tables plus
//! custom names) and an identifier observed in a component definition,
//! optypo decides whether the identifier is a likely typo of a valid name and
//! returns ranked suggestions.
//!
//! ```
//! use optypo::prelude::*;
//!
//! let registry = PresetRegistry::builtin();
//! let classifier = TypoClassifier::from_config(&TypoConfig::default(), &registry)?;
//!
//! let finding = classifier.classify(&Candidate::new("dat", 12)).unwrap();
//! assert_eq!(finding.options(), vec!["data"]);
//! assert_eq!(finding.location, 12);
//! # Ok::<(), optypo::error::OptypoError>(())
//! ```

pub mod cli;
pub mod error;
pub mod spelling;
pub mod util;

pub mod prelude {
    pub use crate::error::{OptypoError, Result};
    pub use crate::spelling::{
        Candidate, CandidateSource, Finding, OptionDictionary, PresetRegistry, Rename, Suggestion,
        TypoClassifier, TypoConfig, classify,
    };
    pub use crate::util::levenshtein::{DistanceUnit, levenshtein_distance};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
