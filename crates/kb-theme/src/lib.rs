//! Theme descriptor for the KB documentation site.
//!
//! This crate provides:
//! - [`NavEntry`]: a validated labeled link
//! - [`SidebarGroup`] and [`SidebarRegistry`]: per-section sidebar trees
//!   with prefix-based resolution
//! - [`SiteTheme`]: the frozen configuration aggregate consumed by the
//!   rendering runtime
//!
//! The rendering runtime calls [`SiteTheme::sidebar_for`] per page render
//! and embeds the returned groups into navigation markup. All values are
//! validated once during assembly and never mutated afterwards.
//!
//! # Quick Start
//!
//! ```
//! use kb_theme::{NavEntry, SidebarGroup, SidebarRegistry, SiteThemeBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut group = SidebarGroup::new("Vue Basics");
//! group.append(NavEntry::new("Introduction", "/vue/introduction")?);
//! group.append(NavEntry::new("Components", "/vue/components")?);
//!
//! let mut sidebar = SidebarRegistry::new();
//! sidebar.register("/vue/", vec![group])?;
//!
//! let theme = SiteThemeBuilder::new("Frontend Knowledge Base")
//!     .nav(vec![NavEntry::new("Vue", "/vue/introduction")?])
//!     .sidebar(sidebar)
//!     .build();
//!
//! assert_eq!(theme.sidebar_for("/vue/components").len(), 1);
//! assert!(theme.sidebar_for("/").is_empty());
//! # Ok(())
//! # }
//! ```

pub(crate) mod error;
pub(crate) mod nav;
pub(crate) mod sidebar;
pub(crate) mod theme;

pub use error::{ConfigurationError, ValidationError};
pub use nav::NavEntry;
pub use sidebar::{SidebarGroup, SidebarRegistry};
pub use theme::{
    DateTimeStyle, Footer, LastUpdatedFormat, Outline, SearchProvider, SiteTheme,
    SiteThemeBuilder, SocialLink, UiLabels,
};
