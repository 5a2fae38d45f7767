//! Option typo classification.
//!
//! [`classify`] decides whether one observed identifier is a likely typo of
//! a valid option name and, if so, returns a [`Finding`] with ranked
//! suggestions. It is a pure function: the same inputs always give the same
//! finding, and nothing is reported or rewritten. Turning a finding into a
//! diagnostic, and applying a [`Rename`], is left to the host.
//!
//! # Suggestion order
//!
//! Suggestions are sorted by ascending distance. Suggestions at the same
//! distance keep dictionary order (a stable sort), which is preset order, then
//! each group's table order, then custom order. It is *not* alphabetical.

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{OptypoError, Result};
use crate::spelling::config::TypoConfig;
use crate::spelling::dictionary::OptionDictionary;
use crate::spelling::presets::PresetRegistry;
use crate::util::levenshtein::{DistanceUnit, LevenshteinMatcher};

/// Identifiers longer than this many atoms are never compared.
pub const MAX_IDENTIFIER_LEN: usize = 256;

/// An observed identifier together with a host-defined location handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate<L> {
    /// The identifier as written.
    pub name: String,
    /// Opaque to the classifier; copied into the finding unchanged.
    pub location: L,
}

impl<L> Candidate<L> {
    /// Create a new candidate.
    pub fn new<S: Into<String>>(name: S, location: L) -> Self {
        Candidate {
            name: name.into(),
            location,
        }
    }
}

/// A valid option name close to the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested option name.
    pub name: String,
    /// Edit distance from the candidate.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(name: S, distance: usize) -> Self {
        Suggestion {
            name: name.into(),
            distance,
        }
    }

    /// Human-readable description of renaming `candidate` to this suggestion.
    pub fn description(&self, candidate: &str) -> String {
        format!("Replace property '{candidate}' to '{}'", self.name)
    }
}

/// A textual replacement the host can apply at `location`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rename<L> {
    /// Where the candidate occurs.
    pub location: L,
    /// The text that replaces the candidate.
    pub replacement: String,
}

/// A detected potential typo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding<L> {
    /// The identifier as written.
    pub candidate: String,
    /// Suggestions, closest first. Never empty.
    pub suggestions: Vec<Suggestion>,
    /// The candidate's location handle.
    pub location: L,
}

impl<L> Finding<L> {
    /// The closest suggestion, if any.
    pub fn best(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }

    /// Suggested names in order.
    pub fn options(&self) -> Vec<&str> {
        self.suggestions.iter().map(|s| s.name.as_str()).collect()
    }

    /// Suggested names joined with commas.
    pub fn option_list(&self) -> String {
        self.options().join(",")
    }

    /// The diagnostic message for this finding.
    pub fn message(&self) -> String {
        format!(
            "'{}' may be a typo, which is similar to option [{}].",
            self.candidate,
            self.option_list()
        )
    }

    /// Whether exactly one suggestion was found, so a rename is unambiguous.
    pub fn is_unambiguous(&self) -> bool {
        self.suggestions.len() == 1
    }

    /// Map the location handle, keeping everything else.
    pub fn map_location<M, F: FnOnce(L) -> M>(self, f: F) -> Finding<M> {
        Finding {
            candidate: self.candidate,
            suggestions: self.suggestions,
            location: f(self.location),
        }
    }
}

impl<L: Clone> Finding<L> {
    /// One rename per suggestion, in suggestion order.
    pub fn renames(&self) -> Vec<Rename<L>> {
        self.suggestions
            .iter()
            .map(|suggestion| Rename {
                location: self.location.clone(),
                replacement: suggestion.name.clone(),
            })
            .collect()
    }
}

/// Classify a candidate against a dictionary, measuring distance in code points.
pub fn classify<L: Clone>(
    candidate: &Candidate<L>,
    dictionary: &OptionDictionary,
    threshold: usize,
) -> Option<Finding<L>> {
    classify_with_unit(candidate, dictionary, threshold, DistanceUnit::CodePoint)
}

/// Classify a candidate against a dictionary using the given distance unit.
///
/// Returns `None` when the candidate is itself a valid name, when no valid
/// name lies within `threshold`, when the dictionary is empty, and when the
/// candidate is longer than [`MAX_IDENTIFIER_LEN`].
pub fn classify_with_unit<L: Clone>(
    candidate: &Candidate<L>,
    dictionary: &OptionDictionary,
    threshold: usize,
    unit: DistanceUnit,
) -> Option<Finding<L>> {
    if dictionary.contains(&candidate.name) {
        return None;
    }

    let matcher = LevenshteinMatcher::with_unit(candidate.name.as_str(), unit);
    if matcher.len() > MAX_IDENTIFIER_LEN {
        trace!(
            "Skipping identifier of {} {}s, longer than {}",
            matcher.len(),
            unit,
            MAX_IDENTIFIER_LEN
        );
        return None;
    }

    let mut suggestions: Vec<Suggestion> = dictionary
        .iter()
        .filter_map(|name| {
            let distance = matcher.distance_threshold(name, threshold)?;
            (distance > 0).then(|| Suggestion::new(name, distance))
        })
        .collect();

    if suggestions.is_empty() {
        return None;
    }

    // Stable: equal distances keep dictionary order.
    suggestions.sort_by_key(|suggestion| suggestion.distance);

    trace!(
        "'{}' is within {} of {} option(s)",
        candidate.name,
        threshold,
        suggestions.len()
    );

    Some(Finding {
        candidate: candidate.name.clone(),
        suggestions,
        location: candidate.location.clone(),
    })
}

/// A resolved dictionary plus the parameters to classify against it.
///
/// Built once per configuration and shared read-only; it is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct TypoClassifier {
    dictionary: OptionDictionary,
    threshold: usize,
    unit: DistanceUnit,
}

impl TypoClassifier {
    /// Create a classifier over an already resolved dictionary.
    pub fn new(dictionary: OptionDictionary, threshold: usize) -> Result<Self> {
        if threshold == 0 {
            return Err(OptypoError::config("threshold must be at least 1"));
        }

        Ok(TypoClassifier {
            dictionary,
            threshold,
            unit: DistanceUnit::CodePoint,
        })
    }

    /// Validate `config` and resolve its dictionary against `registry`.
    pub fn from_config(config: &TypoConfig, registry: &PresetRegistry) -> Result<Self> {
        config.validate()?;
        let dictionary = OptionDictionary::resolve(registry, &config.presets, &config.custom)?;

        if dictionary.is_empty() {
            debug!("Option dictionary is empty; typo detection is inactive");
        }

        Ok(TypoClassifier {
            dictionary,
            threshold: config.threshold,
            unit: config.unit,
        })
    }

    /// Change the distance unit.
    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    /// The resolved dictionary.
    pub fn dictionary(&self) -> &OptionDictionary {
        &self.dictionary
    }

    /// Get the threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Get the distance unit.
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// True when the dictionary is empty and nothing can ever be reported.
    pub fn is_inactive(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// Classify a single candidate.
    pub fn classify<L: Clone>(&self, candidate: &Candidate<L>) -> Option<Finding<L>> {
        classify_with_unit(candidate, &self.dictionary, self.threshold, self.unit)
    }

    /// Suggestions for a bare name, closest first. Empty if the name is valid.
    pub fn suggest(&self, name: &str) -> Vec<Suggestion> {
        self.classify(&Candidate::new(name, ()))
            .map(|finding| finding.suggestions)
            .unwrap_or_default()
    }

    /// Classify candidates in order, keeping only those that produce findings.
    pub fn classify_all<'a, L, I>(&self, candidates: I) -> Vec<Finding<L>>
    where
        L: Clone + 'a,
        I: IntoIterator<Item = &'a Candidate<L>>,
    {
        if self.is_inactive() {
            return Vec::new();
        }

        candidates
            .into_iter()
            .filter_map(|candidate| self.classify(candidate))
            .collect()
    }

    /// Classify candidates on the rayon thread pool.
    ///
    /// Produces the same findings in the same order as [`Self::classify_all`].
    pub fn par_classify<L>(&self, candidates: &[Candidate<L>]) -> Vec<Finding<L>>
    where
        L: Clone + Send + Sync,
    {
        if self.is_inactive() {
            return Vec::new();
        }

        candidates
            .par_iter()
            .filter_map(|candidate| self.classify(candidate))
            .collect()
    }
}
