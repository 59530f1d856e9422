//! Configuration management for the KB theme descriptor.
//!
//! Parses `kb.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. A parsed
//! [`Config`] is turned into a frozen [`SiteTheme`] with
//! [`Config::into_theme`]; every invariant violation fails loudly at this
//! point, before the theme is ever handed to a renderer.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `search.app_id`
//! - `search.api_key`
//! - `search.index_name`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use kb_theme::{
    DateTimeStyle, Footer, LastUpdatedFormat, NavEntry, Outline, SearchProvider, SidebarGroup,
    SidebarRegistry, SiteTheme, SiteThemeBuilder, SocialLink, UiLabels,
};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "kb.toml";

/// Theme configuration as parsed from `kb.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity.
    pub site: SiteConfig,
    /// Top navigation bar entries.
    nav: Vec<NavEntryConfig>,
    /// Sidebar groups keyed by route prefix (e.g. `[[sidebar."/vue/"]]`).
    ///
    /// `BTreeMap` keeps registration deterministic regardless of the order
    /// sections appear in the file.
    sidebar: BTreeMap<String, Vec<SidebarGroupConfig>>,
    /// Footer text.
    footer: FooterConfig,
    /// Search backend.
    search: SearchConfig,
    /// Outline heading levels.
    outline: OutlineConfig,
    /// Localized UI labels.
    labels: LabelsConfig,
    /// Last-updated timestamp formatting. Section presence enables it.
    last_updated: Option<LastUpdatedConfig>,
    /// Social links.
    social: Vec<SocialLinkConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title shown in the nav bar.
    pub title: String,
    /// Site description for the HTML meta tag.
    pub description: String,
    /// Base public path the site is served under.
    pub base: String,
    /// BCP 47 language tag.
    pub lang: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Knowledge Base".to_owned(),
            description: String::new(),
            base: "/".to_owned(),
            lang: "en-US".to_owned(),
        }
    }
}

/// A labeled link as written in configuration.
#[derive(Debug, Deserialize)]
struct NavEntryConfig {
    label: String,
    target: String,
}

/// A sidebar group as written in configuration.
#[derive(Debug, Deserialize)]
struct SidebarGroupConfig {
    title: String,
    #[serde(default)]
    items: Vec<NavEntryConfig>,
}

/// Footer configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FooterConfig {
    message: Option<String>,
    copyright: Option<String>,
}

/// Search configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct SearchConfig {
    provider: String,
    app_id: Option<String>,
    api_key: Option<String>,
    index_name: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: "local".to_owned(),
            app_id: None,
            api_key: None,
            index_name: None,
        }
    }
}

/// Outline configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct OutlineConfig {
    /// Included heading levels as `[min, max]`.
    levels: [u8; 2],
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self { levels: [2, 3] }
    }
}

/// Localized UI label overrides. Unset labels keep English defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LabelsConfig {
    on_this_page: Option<String>,
    prev_page: Option<String>,
    next_page: Option<String>,
    last_updated: Option<String>,
}

/// Last-updated timestamp configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LastUpdatedConfig {
    date_style: Option<String>,
    time_style: Option<String>,
}

/// Social link configuration.
#[derive(Debug, Deserialize)]
struct SocialLinkConfig {
    icon: String,
    url: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Inconsistent or ambiguous sidebar registry.
    #[error("Configuration error: {0}")]
    Sidebar(#[from] kb_theme::ConfigurationError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`search.api_key`").
        field: String,
        /// Error message (e.g., "${`ALGOLIA_API_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Parse a date/time style name ("full", "long", "medium", "short").
fn parse_style(value: &str, field: &str) -> Result<DateTimeStyle, ConfigError> {
    match value {
        "full" => Ok(DateTimeStyle::Full),
        "long" => Ok(DateTimeStyle::Long),
        "medium" => Ok(DateTimeStyle::Medium),
        "short" => Ok(DateTimeStyle::Short),
        other => Err(ConfigError::Validation(format!(
            "{field} must be one of full, long, medium, short (got {other:?})"
        ))),
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `kb.toml` in current directory and parents, falling
    /// back to defaults when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing
    /// or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            tracing::debug!("no {CONFIG_FILENAME} found, using defaults");
            Ok(Self::default())
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before validation
        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref app_id) = self.search.app_id {
            self.search.app_id = Some(expand::expand_env(app_id, "search.app_id")?);
        }
        if let Some(ref api_key) = self.search.api_key {
            self.search.api_key = Some(expand::expand_env(api_key, "search.api_key")?);
        }
        if let Some(ref index_name) = self.search.index_name {
            self.search.index_name = Some(expand::expand_env(index_name, "search.index_name")?);
        }
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Checks the static fields; sidebar invariants are enforced by the
    /// registry itself during [`into_theme`](Self::into_theme). Called
    /// automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.lang, "site.lang")?;
        if !self.site.base.starts_with('/') {
            return Err(ConfigError::Validation(
                "site.base must start with '/'".to_owned(),
            ));
        }

        self.validate_outline()?;
        self.search_provider()?;
        self.last_updated_format()?;

        for (i, link) in self.social.iter().enumerate() {
            require_non_empty(&link.icon, &format!("social[{i}].icon"))?;
            require_http_url(&link.url, &format!("social[{i}].url"))?;
        }

        Ok(())
    }

    /// Validate outline heading levels.
    fn validate_outline(&self) -> Result<(), ConfigError> {
        let [min, max] = self.outline.levels;
        if !(1..=6).contains(&min) || !(1..=6).contains(&max) {
            return Err(ConfigError::Validation(
                "outline.levels must be heading levels between 1 and 6".to_owned(),
            ));
        }
        if min > max {
            return Err(ConfigError::Validation(format!(
                "outline.levels minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(())
    }

    /// Resolve the configured search provider.
    fn search_provider(&self) -> Result<SearchProvider, ConfigError> {
        match self.search.provider.as_str() {
            "local" => Ok(SearchProvider::Local),
            "algolia" => {
                let field = |value: &Option<String>, name: &str| {
                    value.clone().filter(|v| !v.is_empty()).ok_or_else(|| {
                        ConfigError::Validation(format!(
                            "search.{name} is required for the algolia provider"
                        ))
                    })
                };
                Ok(SearchProvider::Algolia {
                    app_id: field(&self.search.app_id, "app_id")?,
                    api_key: field(&self.search.api_key, "api_key")?,
                    index_name: field(&self.search.index_name, "index_name")?,
                })
            }
            other => Err(ConfigError::Validation(format!(
                "search.provider must be \"local\" or \"algolia\" (got {other:?})"
            ))),
        }
    }

    /// Resolve the last-updated format, `None` when the section is absent.
    fn last_updated_format(&self) -> Result<Option<LastUpdatedFormat>, ConfigError> {
        let Some(ref raw) = self.last_updated else {
            return Ok(None);
        };

        let date_style = match raw.date_style.as_deref() {
            Some(value) => parse_style(value, "last_updated.date_style")?,
            None => DateTimeStyle::default(),
        };
        let time_style = match raw.time_style.as_deref() {
            Some(value) => parse_style(value, "last_updated.time_style")?,
            None => DateTimeStyle::default(),
        };

        Ok(Some(LastUpdatedFormat {
            date_style,
            time_style,
        }))
    }

    /// Build the frozen [`SiteTheme`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for malformed entries (the
    /// message names the offending entry) and `ConfigError::Sidebar` for
    /// registry invariant violations.
    pub fn into_theme(self) -> Result<SiteTheme, ConfigError> {
        self.validate()?;

        let mut nav = Vec::with_capacity(self.nav.len());
        for (i, entry) in self.nav.iter().enumerate() {
            let entry = NavEntry::new(&entry.label, &entry.target)
                .map_err(|e| ConfigError::Validation(format!("nav[{i}]: {e}")))?;
            nav.push(entry);
        }

        let mut registry = SidebarRegistry::new();
        for (prefix, group_configs) in &self.sidebar {
            let mut groups = Vec::with_capacity(group_configs.len());
            for group_config in group_configs {
                let mut group = SidebarGroup::new(&group_config.title);
                for item in &group_config.items {
                    let entry = NavEntry::new(&item.label, &item.target).map_err(|e| {
                        ConfigError::Validation(format!(
                            "sidebar.{prefix:?} group {:?}: {e}",
                            group_config.title
                        ))
                    })?;
                    group.append(entry);
                }
                groups.push(group);
            }
            registry.register(prefix.clone(), groups)?;
        }

        let search = self.search_provider()?;
        let last_updated = self.last_updated_format()?;

        let defaults = UiLabels::default();
        let labels = UiLabels {
            on_this_page: self.labels.on_this_page.unwrap_or(defaults.on_this_page),
            prev_page: self.labels.prev_page.unwrap_or(defaults.prev_page),
            next_page: self.labels.next_page.unwrap_or(defaults.next_page),
            last_updated: self.labels.last_updated.unwrap_or(defaults.last_updated),
        };

        let social = self
            .social
            .into_iter()
            .map(|link| SocialLink {
                icon: link.icon,
                url: link.url,
            })
            .collect();

        let mut builder = SiteThemeBuilder::new(self.site.title)
            .description(self.site.description)
            .base(self.site.base)
            .lang(self.site.lang)
            .nav(nav)
            .sidebar(registry)
            .footer(Footer {
                message: self.footer.message,
                copyright: self.footer.copyright,
            })
            .search(search)
            .outline(Outline {
                min_level: self.outline.levels[0],
                max_level: self.outline.levels[1],
            })
            .ui_labels(labels)
            .social(social);

        if let Some(format) = last_updated {
            builder = builder.last_updated(format);
        }

        Ok(builder.build())
    }
}
