//! Levenshtein distance calculation for option-name typo detection.
//!
//! Distances count single-atom insertions, deletions and substitutions, each
//! with cost 1. There is no transposition operation: `"daat"` is two edits
//! away from `"data"`, not one. The atom is a Unicode code point by default;
//! [`DistanceUnit::Grapheme`] switches to extended grapheme clusters.

use std::cmp::min;
use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// The atomic unit strings are split into before comparing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceUnit {
    /// Unicode scalar values (`char`).
    #[default]
    CodePoint,
    /// Extended grapheme clusters.
    Grapheme,
}

impl DistanceUnit {
    /// Get the name of this unit as used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            DistanceUnit::CodePoint => "code-point",
            DistanceUnit::Grapheme => "grapheme",
        }
    }

    /// Count the atoms of `s` in this unit.
    pub fn count(&self, s: &str) -> usize {
        match self {
            DistanceUnit::CodePoint => s.chars().count(),
            DistanceUnit::Grapheme => s.graphemes(true).count(),
        }
    }

    /// Calculate the edit distance between two strings in this unit.
    pub fn distance(&self, s1: &str, s2: &str) -> usize {
        match self {
            DistanceUnit::CodePoint => levenshtein_distance(s1, s2),
            DistanceUnit::Grapheme => grapheme_distance(s1, s2),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    edit_distance(&s1_chars, &s2_chars)
}

/// Calculate the Levenshtein distance counting grapheme clusters as single atoms.
pub fn grapheme_distance(s1: &str, s2: &str) -> usize {
    let s1_graphemes: Vec<&str> = s1.graphemes(true).collect();
    let s2_graphemes: Vec<&str> = s2.graphemes(true).collect();
    edit_distance(&s1_graphemes, &s2_graphemes)
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None if the distance exceeds the threshold; otherwise the returned
/// value is exactly [`levenshtein_distance`].
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    bounded_edit_distance(&s1_chars, &s2_chars, threshold)
}

/// Two-row dynamic programming over pre-split atoms.
fn edit_distance<A, B>(a: &[A], b: &[B]) -> usize
where
    A: PartialEq<B>,
{
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, a_atom) in a.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_atom) in b.iter().enumerate() {
            let cost = usize::from(a_atom != b_atom);

            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

fn bounded_edit_distance<A, B>(a: &[A], b: &[B], threshold: usize) -> Option<usize>
where
    A: PartialEq<B>,
{
    // The length difference is a lower bound on the distance.
    if a.len().abs_diff(b.len()) > threshold {
        return None;
    }

    if a.is_empty() || b.is_empty() {
        let distance = a.len().max(b.len());
        return (distance <= threshold).then_some(distance);
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, a_atom) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, b_atom) in b.iter().enumerate() {
            let cost = usize::from(a_atom != b_atom);

            curr_row[j + 1] = min(
                min(prev_row[j + 1] + 1, curr_row[j] + 1),
                prev_row[j] + cost,
            );

            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // Row minima never decrease, so no later cell can get back under the threshold.
        if min_in_row > threshold {
            return None;
        }

        mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[b.len()];
    (distance <= threshold).then_some(distance)
}

#[derive(Debug, Clone)]
enum QueryAtoms {
    CodePoints(Vec<char>),
    Graphemes(Vec<String>),
}

/// A query string split into atoms once, for comparing against many candidates.
///
/// The classifier builds one matcher per observed identifier and measures it
/// against every dictionary entry.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query: String,
    unit: DistanceUnit,
    atoms: QueryAtoms,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string, splitting by code point.
    pub fn new(query: impl Into<String>) -> Self {
        Self::with_unit(query, DistanceUnit::CodePoint)
    }

    /// Create a new matcher splitting the query in the given unit.
    pub fn with_unit(query: impl Into<String>, unit: DistanceUnit) -> Self {
        let query = query.into();
        let atoms = match unit {
            DistanceUnit::CodePoint => QueryAtoms::CodePoints(query.chars().collect()),
            DistanceUnit::Grapheme => {
                QueryAtoms::Graphemes(query.graphemes(true).map(str::to_string).collect())
            }
        };

        LevenshteinMatcher { query, unit, atoms }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the unit the query was split in.
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Number of atoms in the query.
    pub fn len(&self) -> usize {
        match &self.atoms {
            QueryAtoms::CodePoints(chars) => chars.len(),
            QueryAtoms::Graphemes(graphemes) => graphemes.len(),
        }
    }

    /// Whether the query is the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calculate distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        match &self.atoms {
            QueryAtoms::CodePoints(query) => {
                let candidate: Vec<char> = candidate.chars().collect();
                edit_distance(query, &candidate)
            }
            QueryAtoms::Graphemes(query) => {
                let candidate: Vec<&str> = candidate.graphemes(true).collect();
                edit_distance(query, &candidate)
            }
        }
    }

    /// Calculate distance with threshold for early termination.
    pub fn distance_threshold(&self, candidate: &str, threshold: usize) -> Option<usize> {
        match &self.atoms {
            QueryAtoms::CodePoints(query) => {
                let candidate: Vec<char> = candidate.chars().collect();
                bounded_edit_distance(query, &candidate, threshold)
            }
            QueryAtoms::Graphemes(query) => {
                let candidate: Vec<&str> = candidate.graphemes(true).collect();
                bounded_edit_distance(query, &candidate, threshold)
            }
        }
    }

    /// Check if a candidate is within the given edit distance threshold.
    pub fn is_match(&self, candidate: &str, max_distance: usize) -> bool {
        self.distance_threshold(candidate, max_distance).is_some()
    }
}
