//! Sidebar groups and prefix-based resolution.
//!
//! Each section of the knowledge base registers its sidebar under a route
//! prefix (e.g. `/vue/`). At render time the runtime asks the registry
//! which sidebar applies to the current path; the registry answers with
//! the ordered group list registered under the longest matching prefix.
//!
//! # Invariants
//!
//! Checked once at registration, never re-run per request:
//! - every prefix starts and ends with '/'
//! - no prefix is registered twice (the only source of ambiguity)
//! - every entry target nested under a prefix starts with that prefix
//!
//! A registry that violates these invariants never comes into existence,
//! so [`SidebarRegistry::resolve`] has no failure mode.

use serde::Serialize;

use crate::error::ConfigurationError;
use crate::nav::NavEntry;

/// An ordered, titled collection of navigation entries.
///
/// Order is significant: it is the rendering order. Groups are assembled
/// during configuration and frozen by moving them into the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    title: String,
    entries: Vec<NavEntry>,
}

impl SidebarGroup {
    /// Create an empty group with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry, preserving existing order.
    pub fn append(&mut self, entry: NavEntry) {
        self.entries.push(entry);
    }

    /// Group heading text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Entries in rendering order.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }
}

/// Mapping from route-path prefix to an ordered list of sidebar groups.
///
/// Owns the resolution algorithm: [`SidebarRegistry::resolve`] selects the
/// groups registered under the longest prefix of the queried path. The
/// registry is populated during startup, frozen, then shared read-only;
/// resolution is a pure function of (registry, path).
#[derive(Debug, Default)]
pub struct SidebarRegistry {
    /// Registered (prefix, groups) pairs in registration order.
    entries: Vec<(String, Vec<SidebarGroup>)>,
    frozen: bool,
}

impl SidebarRegistry {
    /// Create an empty, unfrozen registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the sidebar groups for a route prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Frozen`] after [`freeze`](Self::freeze),
    /// [`ConfigurationError::InvalidPrefix`] if `prefix` does not start and
    /// end with '/', [`ConfigurationError::DuplicatePrefix`] if the prefix
    /// is already registered, and
    /// [`ConfigurationError::TargetOutsidePrefix`] if any entry target is
    /// not nested under `prefix`.
    pub fn register(
        &mut self,
        prefix: impl Into<String>,
        groups: Vec<SidebarGroup>,
    ) -> Result<(), ConfigurationError> {
        if self.frozen {
            return Err(ConfigurationError::Frozen);
        }

        let prefix = prefix.into();
        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            return Err(ConfigurationError::InvalidPrefix(prefix));
        }
        if self.entries.iter().any(|(key, _)| *key == prefix) {
            return Err(ConfigurationError::DuplicatePrefix(prefix));
        }

        // Referential consistency: a sidebar only ever links within its
        // own section, otherwise resolution would show wrong navigation.
        for group in &groups {
            for entry in group.entries() {
                if !entry.target().starts_with(&prefix) {
                    return Err(ConfigurationError::TargetOutsidePrefix {
                        prefix,
                        target: entry.target().to_owned(),
                    });
                }
            }
        }

        self.entries.push((prefix, groups));
        Ok(())
    }

    /// Mark the registry immutable. Idempotent.
    ///
    /// After freezing, [`register`](Self::register) fails with
    /// [`ConfigurationError::Frozen`].
    /// [`SiteThemeBuilder::build`](crate::SiteThemeBuilder::build) freezes
    /// the registry it owns.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Whether the registry has been frozen.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Resolve the sidebar groups for a page path.
    ///
    /// Among registered prefixes that are prefixes of `path`, the longest
    /// wins, so `/vue/advanced/` shadows `/vue/` for pages below it.
    /// Returns an empty slice when no prefix matches; that is the expected
    /// state for top-level pages such as the home page, where the renderer
    /// shows no sidebar.
    #[must_use]
    pub fn resolve(&self, path: &str) -> &[SidebarGroup] {
        let matched = self
            .entries
            .iter()
            .filter(|(prefix, _)| path.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len());

        match matched {
            Some((_, groups)) => groups,
            None => {
                tracing::debug!(path, "no sidebar registered for path");
                &[]
            }
        }
    }

    /// Registered prefixes in registration order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(prefix, _)| prefix.as_str())
    }

    /// Groups registered under a prefix, if any.
    #[must_use]
    pub fn groups(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.entries
            .iter()
            .find(|(key, _)| key == prefix)
            .map(|(_, groups)| groups.as_slice())
    }

    /// Number of registered prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no prefix is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(label: &str, target: &str) -> NavEntry {
        NavEntry::new(label, target).unwrap()
    }

    fn group(title: &str, entries: &[(&str, &str)]) -> SidebarGroup {
        let mut group = SidebarGroup::new(title);
        for (label, target) in entries {
            group.append(entry(label, target));
        }
        group
    }

    #[test]
    fn test_group_preserves_insertion_order() {
        let group = group(
            "JavaScript",
            &[("Basics", "/javascript/basics"), ("ES6", "/javascript/es6")],
        );

        assert_eq!(group.title(), "JavaScript");
        let targets: Vec<_> = group.entries().iter().map(NavEntry::target).collect();
        assert_eq!(targets, vec!["/javascript/basics", "/javascript/es6"]);
    }

    #[test]
    fn test_resolve_returns_registered_groups_in_order() {
        let mut registry = SidebarRegistry::new();
        registry
            .register(
                "/javascript/",
                vec![group(
                    "JavaScript",
                    &[("Basics", "/javascript/basics"), ("ES6", "/javascript/es6")],
                )],
            )
            .unwrap();

        let groups = registry.resolve("/javascript/es6");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].title(), "JavaScript");
        assert_eq!(groups[0].entries()[0].target(), "/javascript/basics");
        assert_eq!(groups[0].entries()[1].target(), "/javascript/es6");
    }

    #[test]
    fn test_resolve_no_match_returns_empty() {
        let mut registry = SidebarRegistry::new();
        registry
            .register("/vue/", vec![group("Vue", &[("Intro", "/vue/intro")])])
            .unwrap();

        assert!(registry.resolve("/").is_empty());
        assert!(registry.resolve("/unknown/page").is_empty());
    }

    #[test]
    fn test_resolve_empty_registry() {
        let registry = SidebarRegistry::new();
        assert!(registry.resolve("/vue/intro").is_empty());
    }

    #[test]
    fn test_resolve_longest_prefix_wins() {
        let mut registry = SidebarRegistry::new();
        registry
            .register("/vue/", vec![group("Vue", &[("Intro", "/vue/intro")])])
            .unwrap();
        registry
            .register(
                "/vue/advanced/",
                vec![group(
                    "Advanced Vue",
                    &[("Reactivity", "/vue/advanced/reactivity")],
                )],
            )
            .unwrap();

        let groups = registry.resolve("/vue/advanced/x");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].title(), "Advanced Vue");

        // Registration order must not matter for selection.
        let groups = registry.resolve("/vue/intro");
        assert_eq!(groups[0].title(), "Vue");
    }

    #[test]
    fn test_resolve_longest_prefix_wins_reversed_registration() {
        let mut registry = SidebarRegistry::new();
        registry
            .register(
                "/vue/advanced/",
                vec![group(
                    "Advanced Vue",
                    &[("Reactivity", "/vue/advanced/reactivity")],
                )],
            )
            .unwrap();
        registry
            .register("/vue/", vec![group("Vue", &[("Intro", "/vue/intro")])])
            .unwrap();

        assert_eq!(registry.resolve("/vue/advanced/x")[0].title(), "Advanced Vue");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut registry = SidebarRegistry::new();
        registry
            .register(
                "/css/",
                vec![group("CSS", &[("Layout", "/css/layout"), ("Flex", "/css/flex")])],
            )
            .unwrap();

        let first: Vec<SidebarGroup> = registry.resolve("/css/flex").to_vec();
        let second: Vec<SidebarGroup> = registry.resolve("/css/flex").to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_register_duplicate_prefix_fails() {
        let mut registry = SidebarRegistry::new();
        registry
            .register("/vue/", vec![group("Vue", &[("Intro", "/vue/intro")])])
            .unwrap();

        let err = registry
            .register("/vue/", vec![group("Other", &[("Api", "/vue/api")])])
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicatePrefix(_)));
        assert!(err.to_string().contains("/vue/"));
    }

    #[test]
    fn test_register_prefix_without_trailing_slash_fails() {
        let mut registry = SidebarRegistry::new();
        let err = registry.register("/vue", Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidPrefix(_)));
    }

    #[test]
    fn test_register_prefix_without_leading_slash_fails() {
        let mut registry = SidebarRegistry::new();
        let err = registry.register("vue/", Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidPrefix(_)));
    }

    #[test]
    fn test_register_target_outside_prefix_fails() {
        let mut registry = SidebarRegistry::new();
        let err = registry
            .register(
                "/typescript/",
                vec![group(
                    "TypeScript",
                    &[("Types", "/typescript/types"), ("Stray", "/javascript/es6")],
                )],
            )
            .unwrap_err();

        match err {
            ConfigurationError::TargetOutsidePrefix { prefix, target } => {
                assert_eq!(prefix, "/typescript/");
                assert_eq!(target, "/javascript/es6");
            }
            other => panic!("Expected TargetOutsidePrefix, got {other:?}"),
        }
    }

    #[test]
    fn test_register_after_freeze_fails() {
        let mut registry = SidebarRegistry::new();
        registry
            .register("/vue/", vec![group("Vue", &[("Intro", "/vue/intro")])])
            .unwrap();
        registry.freeze();
        assert!(registry.is_frozen());

        let err = registry
            .register("/css/", vec![group("CSS", &[("Layout", "/css/layout")])])
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::Frozen));

        // Resolution keeps working on the frozen registry.
        assert_eq!(registry.resolve("/vue/intro").len(), 1);
    }

    #[test]
    fn test_freeze_is_idempotent() {
        let mut registry = SidebarRegistry::new();
        registry.freeze();
        registry.freeze();
        assert!(registry.is_frozen());
    }

    #[test]
    fn test_prefixes_and_groups_lookup() {
        let mut registry = SidebarRegistry::new();
        registry
            .register("/vue/", vec![group("Vue", &[("Intro", "/vue/intro")])])
            .unwrap();
        registry
            .register("/css/", vec![group("CSS", &[("Layout", "/css/layout")])])
            .unwrap();

        let prefixes: Vec<_> = registry.prefixes().collect();
        assert_eq!(prefixes, vec!["/vue/", "/css/"]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());

        assert_eq!(registry.groups("/css/").unwrap()[0].title(), "CSS");
        assert!(registry.groups("/missing/").is_none());
    }

    #[test]
    fn test_prefix_match_is_string_prefix() {
        // "/vue/" must not match "/vuex/state": the trailing slash in the
        // prefix guarantees matches stay on segment boundaries.
        let mut registry = SidebarRegistry::new();
        registry
            .register("/vue/", vec![group("Vue", &[("Intro", "/vue/intro")])])
            .unwrap();

        assert!(registry.resolve("/vuex/state").is_empty());
    }
}
