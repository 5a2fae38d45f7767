//! Preset option-name tables.
//!
//! A preset is a named, ordered list of valid component option names. The
//! built-in registry ships the tables for plain Vue components, vue-router
//! navigation guards and Nuxt page options. Additional tables can be loaded
//! from a JSON object at startup and merged in.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{OptypoError, Result};

/// The sentinel preset name that selects every registered group.
pub const ALL_PRESETS: &str = "all";

/// Nuxt page component options.
pub const NUXT_OPTIONS: &[&str] = &[
    "asyncData",
    "fetch",
    "head",
    "key",
    "layout",
    "loading",
    "middleware",
    "scrollToTop",
    "transition",
    "validate",
    "watchQuery",
];

/// vue-router in-component navigation guards.
pub const VUE_ROUTER_OPTIONS: &[&str] = &[
    "beforeRouteEnter",
    "beforeRouteUpdate",
    "beforeRouteLeave",
];

/// Vue component options (Vue 2 and Vue 3).
pub const VUE_OPTIONS: &[&str] = &[
    "data",
    "props",
    "propsData",
    "computed",
    "methods",
    "watch",
    "el",
    "template",
    "render",
    "renderError",
    "staticRenderFns",
    "beforeCreate",
    "created",
    "beforeDestroy",
    "destroyed",
    "beforeMount",
    "mounted",
    "beforeUpdate",
    "updated",
    "activated",
    "deactivated",
    "errorCaptured",
    "serverPrefetch",
    "directives",
    "components",
    "transitions",
    "filters",
    "provide",
    "inject",
    "model",
    "parent",
    "mixins",
    "name",
    "extends",
    "delimiters",
    "comments",
    "inheritAttrs",
    "setup",
    "emits",
    "beforeUnmount",
    "unmounted",
    "renderTracked",
    "renderTriggered",
];

/// An ordered mapping from preset group name to its member option names.
///
/// Group order is significant: it is the order `"all"` expands to, and
/// therefore part of the tie-break order of suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetRegistry {
    groups: IndexMap<String, Vec<String>>,
}

impl PresetRegistry {
    /// Create a registry with no groups.
    pub fn new() -> Self {
        PresetRegistry {
            groups: IndexMap::new(),
        }
    }

    /// Create the registry of compiled-in tables: `nuxt`, `vue-router`, `vue`.
    pub fn builtin() -> Self {
        let mut registry = PresetRegistry::new();
        for (name, members) in [
            ("nuxt", NUXT_OPTIONS),
            ("vue-router", VUE_ROUTER_OPTIONS),
            ("vue", VUE_OPTIONS),
        ] {
            let members = members.iter().map(|m| m.to_string()).collect();
            registry.groups.insert(name.to_string(), members);
        }
        registry
    }

    /// Parse a registry from a JSON object of the form `{"group": ["name", ...]}`.
    ///
    /// Key order in the document becomes group order.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: IndexMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut registry = PresetRegistry::new();
        for (name, members) in raw {
            registry.insert(name, members)?;
        }
        Ok(registry)
    }

    /// Load a registry from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Add a group, replacing any existing group of the same name in place.
    pub fn insert<S: Into<String>>(&mut self, name: S, members: Vec<String>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(OptypoError::config("preset group name must not be empty"));
        }
        if name == ALL_PRESETS {
            return Err(OptypoError::config(format!(
                "'{ALL_PRESETS}' is reserved and cannot name a preset group"
            )));
        }
        self.groups.insert(name, members);
        Ok(())
    }

    /// Merge another registry into this one. Groups from `other` replace same-named groups.
    pub fn merge(&mut self, other: PresetRegistry) {
        for (name, members) in other.groups {
            self.groups.insert(name, members);
        }
    }

    /// Get the members of a group.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Check whether a group exists.
    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Group names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Groups and their members in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(name, members)| (name.as_str(), members.as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the registry has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Expand requested preset names into the effective group list.
    ///
    /// If `requested` contains [`ALL_PRESETS`] the result is every group in
    /// registry order and the remaining requested names are not consulted.
    /// Otherwise the result is `requested` in the given order; any unknown
    /// name is an error.
    pub fn expand<'a, S: AsRef<str>>(&'a self, requested: &[S]) -> Result<Vec<&'a str>> {
        if requested.iter().any(|name| name.as_ref() == ALL_PRESETS) {
            return Ok(self.names().collect());
        }

        requested
            .iter()
            .map(|name| {
                self.groups
                    .get_key_value(name.as_ref())
                    .map(|(key, _)| key.as_str())
                    .ok_or_else(|| OptypoError::unknown_preset(name.as_ref()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_registry() {
        let registry = PresetRegistry::builtin();

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["nuxt", "vue-router", "vue"]
        );
        assert!(registry.get("vue").unwrap().contains(&"data".to_string()));
        assert!(registry.get("nuxt").unwrap().contains(&"asyncData".to_string()));
        assert_eq!(registry.get("vue-router").unwrap().len(), 3);
        assert!(!registry.contains(ALL_PRESETS));
    }

    #[test]
    fn test_expand_all() {
        let registry = PresetRegistry::builtin();
        let groups = registry.expand(&["all"]).unwrap();
        assert_eq!(groups, vec!["nuxt", "vue-router", "vue"]);

        // "all" wins even when mixed with other names
        let groups = registry.expand(&["vue", "all"]).unwrap();
        assert_eq!(groups, vec!["nuxt", "vue-router", "vue"]);
    }

    #[test]
    fn test_expand_keeps_requested_order() {
        let registry = PresetRegistry::builtin();
        let groups = registry.expand(&["vue", "nuxt"]).unwrap();
        assert_eq!(groups, vec!["vue", "nuxt"]);

        let empty: [&str; 0] = [];
        assert!(registry.expand(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_expand_unknown_preset() {
        let registry = PresetRegistry::builtin();
        let err = registry.expand(&["vue", "vuex"]).unwrap_err();
        assert!(matches!(err, OptypoError::UnknownPreset(ref name) if name == "vuex"));
    }

    #[test]
    fn test_from_json_preserves_order() {
        let json = r#"{"pinia": ["state", "getters", "actions"], "apollo": ["apollo"]}"#;
        let registry = PresetRegistry::from_json(json).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["pinia", "apollo"]);
        assert_eq!(
            registry.get("pinia").unwrap(),
            &["state".to_string(), "getters".to_string(), "actions".to_string()]
        );
    }

    #[test]
    fn test_reserved_and_empty_names_rejected() {
        assert!(PresetRegistry::from_json(r#"{"all": ["x"]}"#).is_err());
        assert!(PresetRegistry::from_json(r#"{"": ["x"]}"#).is_err());
        assert!(PresetRegistry::from_json(r#"["not", "an", "object"]"#).is_err());
    }

    #[test]
    fn test_merge_replaces_and_appends() {
        let mut registry = PresetRegistry::builtin();
        let json = r#"{"vue-router": ["beforeRouteEnter"], "pinia": ["state"]}"#;
        let extra = PresetRegistry::from_json(json).unwrap();
        registry.merge(extra);

        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["nuxt", "vue-router", "vue", "pinia"]
        );
        assert_eq!(registry.get("vue-router").unwrap().len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"team": ["apiClient", "featureFlags"]}}"#).unwrap();
        temp_file.flush().unwrap();

        let registry = PresetRegistry::load_from_file(temp_file.path()).unwrap();
        assert_eq!(registry.get("team").unwrap().len(), 2);
    }
}
