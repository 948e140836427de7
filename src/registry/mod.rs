//! Static site registries: page keys, navigation, SEO metadata and the
//! checks that keep them consistent with each other.
//!
//! ```rust
//! use tashra::registry::{MetadataRegistry, Navigation, PageKey};
//!
//! let nav = Navigation::default();
//! let registry = MetadataRegistry::default();
//!
//! let contact = nav.active("/contact").unwrap();
//! assert_eq!(contact.label, "Contact Us");
//! assert_eq!(registry.lookup(PageKey::Contact).path, contact.href);
//! ```

mod config;
mod error;
mod invariants;
mod metadata;
mod nav;
mod page;

pub use config::{SiteConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_LOCALE, DEFAULT_SITE_NAME};
pub use error::RegistryError;
pub use invariants::{
    check_metadata, check_nav_targets, check_navigation, check_products, check_site,
    RegistryCheck, RegistryViolation,
};
pub use metadata::{
    MetadataBundle, MetadataRegistry, OpenGraph, PageMetadataEntry, Robots, TwitterCard, OG_TYPE,
    TWITTER_CARD,
};
pub use nav::{NavItem, Navigation};
pub use page::PageKey;
