//! The dictionary of valid option names for one configuration.

use ahash::AHashSet;
use log::debug;

use crate::error::Result;
use crate::spelling::presets::PresetRegistry;

/// An ordered, deduplicated set of valid option names.
///
/// Iteration order is insertion order with later duplicates dropped. The
/// classifier uses it to break ties between suggestions at equal distance, so
/// it is observable: preset groups come first (in the order they were
/// resolved, each in its table order), then custom names in the order given.
#[derive(Debug, Clone, Default)]
pub struct OptionDictionary {
    /// Names in first-insertion order
    names: Vec<String>,
    /// Set of all names for fast lookup
    name_set: AHashSet<String>,
}

impl OptionDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        OptionDictionary {
            names: Vec::new(),
            name_set: AHashSet::new(),
        }
    }

    /// Resolve the dictionary for a set of preset names and custom names.
    ///
    /// `presets` may contain the `"all"` sentinel, which selects every group of
    /// `registry` in registry order. Unknown preset names are an error. Custom
    /// names are compared case-sensitively and appended after all preset
    /// members.
    pub fn resolve<P, C>(registry: &PresetRegistry, presets: &[P], custom: &[C]) -> Result<Self>
    where
        P: AsRef<str>,
        C: AsRef<str>,
    {
        let groups = registry.expand(presets)?;
        let mut dictionary = OptionDictionary::new();

        for group in &groups {
            if let Some(members) = registry.get(group) {
                dictionary.extend(members.iter().map(String::as_str));
            }
        }
        for name in custom {
            let name: &str = name.as_ref();
            dictionary.insert(name);
        }

        debug!(
            "Resolved option dictionary: {} names from presets {:?} and {} custom names",
            dictionary.len(),
            groups,
            custom.len()
        );

        Ok(dictionary)
    }

    /// Add a name. Returns false if it was already present.
    pub fn insert<S: Into<String>>(&mut self, name: S) -> bool {
        let name = name.into();
        if self.name_set.contains(&name) {
            return false;
        }
        self.name_set.insert(name.clone());
        self.names.push(name);
        true
    }

    /// Check if a name exists in the dictionary (exact, case-sensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.name_set.contains(name)
    }

    /// Iterate names in dictionary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// All names in dictionary order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Get the number of unique names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// An empty dictionary makes the classifier inactive.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> Extend<S> for OptionDictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for OptionDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = OptionDictionary::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl PartialEq for OptionDictionary {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for OptionDictionary {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptypoError;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = OptionDictionary::new();

        assert!(dict.is_empty());
        assert!(!dict.contains("data"));

        assert!(dict.insert("data"));
        assert!(dict.insert("props"));
        assert!(!dict.insert("data"));

        assert_eq!(dict.len(), 2);
        assert!(dict.contains("data"));
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["data", "props"]);
    }

    #[test]
    fn test_dictionary_case_sensitive() {
        let dict: OptionDictionary = ["foo", "fOo"].into_iter().collect();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("foo"));
        assert!(dict.contains("fOo"));
        assert!(!dict.contains("FOO"));
    }

    #[test]
    fn test_resolve_default_vue() {
        let registry = PresetRegistry::builtin();
        let dict = OptionDictionary::resolve(&registry, &["vue"], &NONE).unwrap();

        assert_eq!(dict.len(), registry.get("vue").unwrap().len());
        assert_eq!(dict.iter().next(), Some("data"));
        assert!(!dict.contains("asyncData"));
    }

    #[test]
    fn test_resolve_all_is_union_without_duplicates() {
        let registry = PresetRegistry::builtin();
        let dict = OptionDictionary::resolve(&registry, &["all"], &NONE).unwrap();

        let total: usize = registry.iter().map(|(_, members)| members.len()).sum();
        assert!(dict.len() <= total);
        for (_, members) in registry.iter() {
            for member in members {
                assert!(dict.contains(member));
            }
        }

        let mut seen = std::collections::HashSet::new();
        assert!(dict.iter().all(|name| seen.insert(name)));
    }

    #[test]
    fn test_resolve_custom_only() {
        let registry = PresetRegistry::builtin();
        let dict = OptionDictionary::resolve(&registry, &NONE, &["foo", "fOo"]).unwrap();
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["foo", "fOo"]);
    }

    #[test]
    fn test_resolve_order_presets_then_custom() {
        let registry = PresetRegistry::from_json(r#"{"a": ["x", "y"], "b": ["y", "z"]}"#).unwrap();
        let dict = OptionDictionary::resolve(&registry, &["b", "a"], &["w", "x"]).unwrap();

        // First occurrence wins
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["y", "z", "x", "w"]);
    }

    #[test]
    fn test_resolve_empty() {
        let registry = PresetRegistry::builtin();
        let dict = OptionDictionary::resolve(&registry, &NONE, &NONE).unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn test_resolve_unknown_preset() {
        let registry = PresetRegistry::builtin();
        let result = OptionDictionary::resolve(&registry, &["vue", "react"], &NONE);
        assert!(matches!(result, Err(OptypoError::UnknownPreset(_))));
    }
}
