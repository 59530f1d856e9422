//! The frozen site theme aggregate.
//!
//! [`SiteTheme`] bundles everything the rendering runtime reads: site
//! identity, top navigation, the sidebar registry, footer, search
//! provider, outline levels, localized UI labels, last-updated formatting
//! and social links. It is assembled once at process start through
//! [`SiteThemeBuilder`] and exposed read-only afterwards; rendering
//! threads share it without synchronization because no writer exists
//! after [`SiteThemeBuilder::build`].

use serde::Serialize;

use crate::nav::NavEntry;
use crate::sidebar::{SidebarGroup, SidebarRegistry};

/// Footer text shown on every page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    /// Message line (e.g. license note).
    pub message: Option<String>,
    /// Copyright line.
    pub copyright: Option<String>,
}

/// Search backend the renderer wires up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchProvider {
    /// Built-in client-side index.
    Local,
    /// Hosted Algolia DocSearch index.
    Algolia {
        /// Algolia application id.
        app_id: String,
        /// Search-only API key.
        api_key: String,
        /// Index to query.
        index_name: String,
    },
}

impl SearchProvider {
    /// Provider tag as written in configuration.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Algolia { .. } => "algolia",
        }
    }
}

impl Default for SearchProvider {
    fn default() -> Self {
        Self::Local
    }
}

/// Heading levels included in the page outline ("on this page" panel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Outline {
    /// Smallest included heading level.
    pub min_level: u8,
    /// Largest included heading level.
    pub max_level: u8,
}

impl Default for Outline {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 3,
        }
    }
}

/// Localized UI strings embedded into generated navigation markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UiLabels {
    /// Outline panel heading.
    pub on_this_page: String,
    /// Previous-page link label in the doc footer.
    pub prev_page: String,
    /// Next-page link label in the doc footer.
    pub next_page: String,
    /// Prefix for the last-updated timestamp.
    pub last_updated: String,
}

impl Default for UiLabels {
    fn default() -> Self {
        Self {
            on_this_page: "On this page".to_owned(),
            prev_page: "Previous page".to_owned(),
            next_page: "Next page".to_owned(),
            last_updated: "Last updated".to_owned(),
        }
    }
}

/// Date/time verbosity for last-updated timestamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateTimeStyle {
    /// Full style (weekday, full date).
    Full,
    /// Long style.
    Long,
    /// Medium style.
    Medium,
    /// Short, numeric style.
    #[default]
    Short,
}

/// Formatting options for the last-updated timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LastUpdatedFormat {
    /// Date portion style.
    pub date_style: DateTimeStyle,
    /// Time portion style.
    pub time_style: DateTimeStyle,
}

/// A social account link shown in the nav bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Icon identifier (e.g. "github").
    pub icon: String,
    /// Absolute URL of the account.
    pub url: String,
}

/// The complete, frozen theme configuration.
///
/// Constructed once from static configuration, read-only for the lifetime
/// of the build/serve process. The rendering runtime calls
/// [`sidebar_for`](Self::sidebar_for) and [`top_nav`](Self::top_nav) per
/// page render and reads the remaining fields once per render or build.
#[derive(Debug)]
pub struct SiteTheme {
    title: String,
    description: String,
    base: String,
    lang: String,
    nav: Vec<NavEntry>,
    sidebar: SidebarRegistry,
    footer: Footer,
    search: SearchProvider,
    outline: Outline,
    labels: UiLabels,
    last_updated: Option<LastUpdatedFormat>,
    social: Vec<SocialLink>,
}

impl SiteTheme {
    /// Site title shown in the nav bar and HTML title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Site description for the HTML meta tag.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Base public path the site is served under.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// BCP 47 language tag.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Top navigation bar entries in rendering order.
    #[must_use]
    pub fn top_nav(&self) -> &[NavEntry] {
        &self.nav
    }

    /// Sidebar groups for a page path.
    ///
    /// Delegates to [`SidebarRegistry::resolve`]; an empty slice means the
    /// page renders without a sidebar.
    #[must_use]
    pub fn sidebar_for(&self, path: &str) -> &[SidebarGroup] {
        self.sidebar.resolve(path)
    }

    /// The frozen sidebar registry.
    #[must_use]
    pub fn sidebar(&self) -> &SidebarRegistry {
        &self.sidebar
    }

    /// Footer text.
    #[must_use]
    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    /// Configured search backend.
    #[must_use]
    pub fn search_provider(&self) -> &SearchProvider {
        &self.search
    }

    /// Outline heading levels.
    #[must_use]
    pub fn outline(&self) -> Outline {
        self.outline
    }

    /// Localized UI labels.
    #[must_use]
    pub fn ui_labels(&self) -> &UiLabels {
        &self.labels
    }

    /// Last-updated formatting, `None` when timestamps are disabled.
    #[must_use]
    pub fn last_updated(&self) -> Option<LastUpdatedFormat> {
        self.last_updated
    }

    /// Social links in rendering order.
    #[must_use]
    pub fn social_links(&self) -> &[SocialLink] {
        &self.social
    }
}

/// Builder for [`SiteTheme`].
///
/// Collects the theme pieces during configuration assembly;
/// [`build`](Self::build) consumes the builder and freezes the embedded
/// sidebar registry, so no mutation path survives construction.
pub struct SiteThemeBuilder {
    title: String,
    description: String,
    base: String,
    lang: String,
    nav: Vec<NavEntry>,
    sidebar: SidebarRegistry,
    footer: Footer,
    search: SearchProvider,
    outline: Outline,
    labels: UiLabels,
    last_updated: Option<LastUpdatedFormat>,
    social: Vec<SocialLink>,
}

impl SiteThemeBuilder {
    /// Start a builder for a site with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            base: "/".to_owned(),
            lang: "en-US".to_owned(),
            nav: Vec::new(),
            sidebar: SidebarRegistry::new(),
            footer: Footer::default(),
            search: SearchProvider::default(),
            outline: Outline::default(),
            labels: UiLabels::default(),
            last_updated: None,
            social: Vec::new(),
        }
    }

    /// Set the site description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the base public path.
    #[must_use]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Set the language tag.
    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set the top navigation entries.
    #[must_use]
    pub fn nav(mut self, nav: Vec<NavEntry>) -> Self {
        self.nav = nav;
        self
    }

    /// Set the sidebar registry.
    #[must_use]
    pub fn sidebar(mut self, sidebar: SidebarRegistry) -> Self {
        self.sidebar = sidebar;
        self
    }

    /// Set the footer.
    #[must_use]
    pub fn footer(mut self, footer: Footer) -> Self {
        self.footer = footer;
        self
    }

    /// Set the search provider.
    #[must_use]
    pub fn search(mut self, search: SearchProvider) -> Self {
        self.search = search;
        self
    }

    /// Set the outline heading levels.
    #[must_use]
    pub fn outline(mut self, outline: Outline) -> Self {
        self.outline = outline;
        self
    }

    /// Set the localized UI labels.
    #[must_use]
    pub fn ui_labels(mut self, labels: UiLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Enable last-updated timestamps with the given format.
    #[must_use]
    pub fn last_updated(mut self, format: LastUpdatedFormat) -> Self {
        self.last_updated = Some(format);
        self
    }

    /// Set the social links.
    #[must_use]
    pub fn social(mut self, social: Vec<SocialLink>) -> Self {
        self.social = social;
        self
    }

    /// Freeze the sidebar registry and produce the theme.
    #[must_use]
    pub fn build(mut self) -> SiteTheme {
        self.sidebar.freeze();

        SiteTheme {
            title: self.title,
            description: self.description,
            base: self.base,
            lang: self.lang,
            nav: self.nav,
            sidebar: self.sidebar,
            footer: self.footer,
            search: self.search,
            outline: self.outline,
            labels: self.labels,
            last_updated: self.last_updated,
            social: self.social,
        }
    }
}

#[cfg(test)]
mod tests {
    // Frozen themes are shared across render threads without locks.
    static_assertions::assert_impl_all!(super::SiteTheme: Send, Sync);

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ConfigurationError;

    fn sample_registry() -> SidebarRegistry {
        let mut group = SidebarGroup::new("Vue");
        group.append(NavEntry::new("Introduction", "/vue/introduction").unwrap());
        group.append(NavEntry::new("Components", "/vue/components").unwrap());

        let mut registry = SidebarRegistry::new();
        registry.register("/vue/", vec![group]).unwrap();
        registry
    }

    fn sample_theme() -> SiteTheme {
        SiteThemeBuilder::new("Frontend Knowledge Base")
            .description("Notes on JavaScript, TypeScript, CSS and Vue")
            .lang("en-US")
            .nav(vec![
                NavEntry::new("Home", "/").unwrap(),
                NavEntry::new("Vue", "/vue/introduction").unwrap(),
            ])
            .sidebar(sample_registry())
            .footer(Footer {
                message: Some("Released under the MIT License.".to_owned()),
                copyright: Some("Copyright © 2024-present".to_owned()),
            })
            .build()
    }

    #[test]
    fn test_build_freezes_sidebar_registry() {
        let theme = sample_theme();
        assert!(theme.sidebar().is_frozen());
    }

    #[test]
    fn test_frozen_registry_rejects_registration() {
        let mut registry = sample_registry();
        registry.freeze();
        let err = registry.register("/css/", Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigurationError::Frozen));
    }

    #[test]
    fn test_sidebar_for_delegates_to_registry() {
        let theme = sample_theme();

        let groups = theme.sidebar_for("/vue/components");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].title(), "Vue");

        assert!(theme.sidebar_for("/").is_empty());
        assert!(theme.sidebar_for("/typescript/types").is_empty());
    }

    #[test]
    fn test_accessors_return_configured_values() {
        let theme = sample_theme();

        assert_eq!(theme.title(), "Frontend Knowledge Base");
        assert_eq!(
            theme.description(),
            "Notes on JavaScript, TypeScript, CSS and Vue"
        );
        assert_eq!(theme.base(), "/");
        assert_eq!(theme.lang(), "en-US");
        assert_eq!(theme.top_nav().len(), 2);
        assert_eq!(theme.top_nav()[1].label(), "Vue");
        assert_eq!(
            theme.footer().message.as_deref(),
            Some("Released under the MIT License.")
        );
        assert_eq!(theme.search_provider().name(), "local");
        assert_eq!(theme.outline(), Outline::default());
        assert_eq!(theme.ui_labels().on_this_page, "On this page");
        assert!(theme.last_updated().is_none());
        assert!(theme.social_links().is_empty());
    }

    #[test]
    fn test_defaults() {
        let theme = SiteThemeBuilder::new("KB").build();

        assert_eq!(theme.base(), "/");
        assert_eq!(theme.lang(), "en-US");
        assert!(theme.top_nav().is_empty());
        assert!(theme.sidebar().is_empty());
        assert!(theme.footer().message.is_none());
        assert_eq!(theme.outline().min_level, 2);
        assert_eq!(theme.outline().max_level, 3);
    }

    #[test]
    fn test_algolia_provider() {
        let theme = SiteThemeBuilder::new("KB")
            .search(SearchProvider::Algolia {
                app_id: "APP".to_owned(),
                api_key: "KEY".to_owned(),
                index_name: "kb".to_owned(),
            })
            .last_updated(LastUpdatedFormat::default())
            .build();

        assert_eq!(theme.search_provider().name(), "algolia");
        assert_eq!(
            theme.last_updated().unwrap().date_style,
            DateTimeStyle::Short
        );
    }
}
