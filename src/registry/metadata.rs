//! Per-page SEO metadata and its projection into `<head>` fields.

use std::collections::BTreeMap;

use super::{PageKey, RegistryError, SiteConfig};

/// Open Graph `type` for every page.
pub const OG_TYPE: &str = "website";
/// Twitter card style for every page.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Registry record for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMetadataEntry {
    /// Document title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Site path
    pub path: String,
    /// Meta keywords, in order
    #[cfg_attr(feature = "serde", serde(default))]
    pub keywords: Vec<String>,
}

impl PageMetadataEntry {
    /// An entry without keywords.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        PageMetadataEntry {
            title: title.into(),
            description: description.into(),
            path: path.into(),
            keywords: Vec::new(),
        }
    }

    /// Builder for keywords.
    pub fn with_keywords<I, K>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Open Graph fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OpenGraph {
    /// `og:title`
    pub title: String,
    /// `og:description`
    pub description: String,
    /// `og:url`, absolute
    pub url: String,
    /// `og:site_name`
    pub site_name: String,
    /// `og:type`
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: &'static str,
    /// `og:locale`
    pub locale: String,
}

/// Twitter card fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TwitterCard {
    /// `twitter:card`
    pub card: &'static str,
    /// `twitter:title`
    pub title: String,
    /// `twitter:description`
    pub description: String,
}

/// Robots directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Robots {
    /// Allow indexing
    pub index: bool,
    /// Allow following links
    pub follow: bool,
}

/// Everything the page renderer writes into `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MetadataBundle {
    /// Document title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Meta keywords
    pub keywords: Vec<String>,
    /// Open Graph fields
    pub open_graph: OpenGraph,
    /// Twitter card fields
    pub twitter: TwitterCard,
    /// Robots directives
    pub robots: Robots,
}

/// Page metadata keyed by [`PageKey`], plus the settings used to project it.
///
/// `Default` is the live site's table with [`SiteConfig::default`].
///
/// # Example
///
/// ```rust
/// use tashra::registry::{MetadataRegistry, PageKey};
///
/// let registry = MetadataRegistry::default();
/// let meta = registry.build_metadata(PageKey::Contact);
/// assert_eq!(meta.title, "Contact Us - TASHRA | Government Tender Inquiries");
/// assert_eq!(meta.open_graph.url, "https://tashra.com/contact");
/// assert_eq!(meta.twitter.card, "summary_large_image");
/// assert!(meta.robots.index && meta.robots.follow);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRegistry {
    config: SiteConfig,
    entries: BTreeMap<PageKey, PageMetadataEntry>,
}

impl MetadataRegistry {
    /// A registry with no entries.
    pub fn empty(config: SiteConfig) -> Self {
        MetadataRegistry {
            config,
            entries: BTreeMap::new(),
        }
    }

    /// The live site's table with the given settings.
    pub fn with_config(config: SiteConfig) -> Self {
        let mut registry = Self::empty(config);
        for (key, entry) in site_entries() {
            registry.entries.insert(key, entry);
        }
        registry
    }

    /// The live site's table, base URL from the environment.
    pub fn from_env() -> Self {
        Self::with_config(SiteConfig::from_env())
    }

    /// Builder: register or replace one entry.
    pub fn with_entry(mut self, key: PageKey, entry: PageMetadataEntry) -> Self {
        self.entries.insert(key, entry);
        self
    }

    /// Builder: drop one entry.
    pub fn without_entry(mut self, key: PageKey) -> Self {
        self.entries.remove(&key);
        self
    }

    /// Settings used by [`build_metadata`](Self::build_metadata).
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Registered entries in [`PageKey`] order.
    pub fn entries(&self) -> impl Iterator<Item = (PageKey, &PageMetadataEntry)> + '_ {
        self.entries.iter().map(|(key, entry)| (*key, entry))
    }

    /// Number of registered pages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for `key`, if registered.
    pub fn get(&self, key: PageKey) -> Option<&PageMetadataEntry> {
        self.entries.get(&key)
    }

    /// The entry for `key`.
    ///
    /// # Panics
    ///
    /// If `key` has no entry. Page keys are fixed at build time, so a missing
    /// entry is a broken registry, not a runtime condition.
    pub fn lookup(&self, key: PageKey) -> &PageMetadataEntry {
        match self.entries.get(&key) {
            Some(entry) => entry,
            None => panic!("no metadata registered for page `{}`", key),
        }
    }

    /// The entry for a key given as a string, e.g. from a template.
    ///
    /// ```rust
    /// use tashra::registry::{MetadataRegistry, RegistryError};
    ///
    /// let registry = MetadataRegistry::default();
    /// assert_eq!(registry.try_lookup("privacyPolicy").unwrap().path, "/privacy-policy");
    /// assert_eq!(
    ///     registry.try_lookup("careers"),
    ///     Err(RegistryError::UnknownPage("careers".to_string()))
    /// );
    /// ```
    pub fn try_lookup(&self, key: &str) -> Result<&PageMetadataEntry, RegistryError> {
        let page: PageKey = key.parse()?;
        self.get(page)
            .ok_or_else(|| RegistryError::UnknownPage(key.to_string()))
    }

    /// Project the entry for `key` into a full metadata bundle.
    ///
    /// # Panics
    ///
    /// Same as [`lookup`](Self::lookup).
    pub fn build_metadata(&self, key: PageKey) -> MetadataBundle {
        let entry = self.lookup(key);

        MetadataBundle {
            title: entry.title.clone(),
            description: entry.description.clone(),
            keywords: entry.keywords.clone(),
            open_graph: OpenGraph {
                title: entry.title.clone(),
                description: entry.description.clone(),
                url: self.config.page_url(&entry.path),
                site_name: self.config.site_name().to_string(),
                kind: OG_TYPE,
                locale: self.config.locale().to_string(),
            },
            twitter: TwitterCard {
                card: TWITTER_CARD,
                title: entry.title.clone(),
                description: entry.description.clone(),
            },
            robots: Robots {
                index: true,
                follow: true,
            },
        }
    }
}

impl Default for MetadataRegistry {
    fn default() -> Self {
        Self::with_config(SiteConfig::default())
    }
}

fn site_entries() -> Vec<(PageKey, PageMetadataEntry)> {
    vec![
        (
            PageKey::Home,
            PageMetadataEntry::new(
                "TASHRA - Reliable Government Tender Supplier | Tashu Traders",
                "Tashu Traders (TASHRA) is a trusted government tender supplier for books, \
                 aluminium products, and grocery items. Quality assured bulk supply.",
                "/",
            )
            .with_keywords([
                "government tender supplier",
                "bulk supply",
                "tender procurement",
                "Tashu Traders",
                "TASHRA",
            ]),
        ),
        (
            PageKey::About,
            PageMetadataEntry::new(
                "About Us - TASHRA | Government Tender Supply Company",
                "Learn about Tashu Traders and TASHRA brand. Specializing in government tender \
                 work and institutional supply with quality-approved products.",
                "/about",
            )
            .with_keywords([
                "about TASHRA",
                "Tashu Traders",
                "government supplier",
                "tender company",
            ]),
        ),
        (
            PageKey::Products,
            PageMetadataEntry::new(
                "Products & Services - TASHRA | Government Tender Supplies",
                "Explore TASHRA supply categories: Baby Kit Books, Aluminium Gates & Products, \
                 and Grocery Items. Tender-based bulk supply for government departments.",
                "/products",
            )
            .with_keywords([
                "baby kit books",
                "aluminium gates",
                "grocery supply",
                "government tender products",
            ]),
        ),
        (
            PageKey::Experience,
            PageMetadataEntry::new(
                "Our Experience - TASHRA | Proven Tender Track Record",
                "TASHRA has successfully handled government tenders for books, aluminium \
                 products, and grocery items. Reliable delivery and quality assurance.",
                "/experience",
            )
            .with_keywords([
                "tender experience",
                "government supply track record",
                "bulk delivery",
            ]),
        ),
        (
            PageKey::Contact,
            PageMetadataEntry::new(
                "Contact Us - TASHRA | Government Tender Inquiries",
                "Contact Tashu Traders (TASHRA) for government tender inquiries. Submit your \
                 tender requirements and get quality bulk supply solutions.",
                "/contact",
            )
            .with_keywords([
                "contact TASHRA",
                "tender inquiry",
                "government supply contact",
            ]),
        ),
        (
            PageKey::PrivacyPolicy,
            PageMetadataEntry::new(
                "Privacy Policy - TASHRA | Tashu Traders",
                "Read TASHRA privacy policy. Learn how we handle and protect your data when you \
                 use our website.",
                "/privacy-policy",
            )
            .with_keywords(["privacy policy", "data protection", "TASHRA"]),
        ),
        (
            PageKey::Terms,
            PageMetadataEntry::new(
                "Terms & Conditions - TASHRA | Tashu Traders",
                "Review TASHRA terms and conditions for website usage and supply agreements.",
                "/terms",
            )
            .with_keywords(["terms and conditions", "website terms", "TASHRA"]),
        ),
        (
            PageKey::Disclaimer,
            PageMetadataEntry::new(
                "Disclaimer - TASHRA | Tashu Traders",
                "Read TASHRA disclaimer about trading operations and tender approval processes.",
                "/disclaimer",
            )
            .with_keywords(["disclaimer", "legal notice", "TASHRA"]),
        ),
        (
            PageKey::Partnership,
            PageMetadataEntry::new(
                "Partner With TASHRA | Contractor & Consultant Collaboration",
                "Explore partnership opportunities with TASHRA. Collaborate with us for \
                 government tender projects and bulk supply requirements.",
                "/partnership",
            )
            .with_keywords([
                "partnership",
                "contractor collaboration",
                "tender consultant",
                "TASHRA",
            ]),
        ),
    ]
}
