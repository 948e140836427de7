//! Site-wide settings used when building page metadata.

use std::env;

/// Environment variable holding the public origin of the site.
pub const BASE_URL_ENV: &str = "TASHRA_BASE_URL";

/// Origin used when [`BASE_URL_ENV`] is unset.
pub const DEFAULT_BASE_URL: &str = "https://tashra.com";

/// Open Graph `site_name`.
pub const DEFAULT_SITE_NAME: &str = "TASHRA - Tashu Traders";

/// Open Graph `locale`.
pub const DEFAULT_LOCALE: &str = "en_IN";

/// Settings the metadata projection reads.
///
/// Pure data; build it once at startup and share it by reference.
///
/// # Examples
///
/// ```rust
/// use tashra::registry::SiteConfig;
///
/// let config = SiteConfig::default();
/// assert_eq!(config.base_url(), "https://tashra.com");
/// assert_eq!(config.locale(), "en_IN");
///
/// let staging = SiteConfig::default().with_base_url("https://staging.tashra.com/");
/// assert_eq!(staging.base_url(), "https://staging.tashra.com");
/// assert_eq!(staging.page_url("/about"), "https://staging.tashra.com/about");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    base_url: String,
    site_name: String,
    locale: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Defaults, with the base URL taken from `TASHRA_BASE_URL` when it is set
    /// and non-blank.
    pub fn from_env() -> Self {
        match env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    /// Set the origin. Trailing slashes are dropped so that joining a path
    /// never produces `//`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the Open Graph site name.
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    /// Set the Open Graph locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// The origin, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Open Graph site name.
    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// Open Graph locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Absolute URL of a site path.
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_stripped() {
        let config = SiteConfig::default().with_base_url("https://example.org///");
        assert_eq!(config.base_url(), "https://example.org");
        assert_eq!(config.page_url("/"), "https://example.org/");
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = SiteConfig::default()
            .with_site_name("TASHRA")
            .with_locale("hi_IN");
        assert_eq!(config.site_name(), "TASHRA");
        assert_eq!(config.locale(), "hi_IN");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_env() {
        // Only this test touches the variable.
        env::set_var(BASE_URL_ENV, "https://preview.tashra.com/");
        assert_eq!(SiteConfig::from_env().base_url(), "https://preview.tashra.com");

        env::set_var(BASE_URL_ENV, "   ");
        assert_eq!(SiteConfig::from_env().base_url(), DEFAULT_BASE_URL);

        env::remove_var(BASE_URL_ENV);
        assert_eq!(SiteConfig::from_env(), SiteConfig::default());
    }
}
