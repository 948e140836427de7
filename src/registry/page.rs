//! Identifiers for the site's pages.

use std::fmt;
use std::str::FromStr;

use super::RegistryError;

/// One page of the site. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PageKey {
    /// `/`
    Home,
    /// `/about`
    About,
    /// `/products`
    Products,
    /// `/experience`
    Experience,
    /// `/contact`
    Contact,
    /// `/privacy-policy`
    PrivacyPolicy,
    /// `/terms`
    Terms,
    /// `/disclaimer`
    Disclaimer,
    /// `/partnership`
    Partnership,
}

impl PageKey {
    /// Every page.
    pub const ALL: [PageKey; 9] = [
        PageKey::Home,
        PageKey::About,
        PageKey::Products,
        PageKey::Experience,
        PageKey::Contact,
        PageKey::PrivacyPolicy,
        PageKey::Terms,
        PageKey::Disclaimer,
        PageKey::Partnership,
    ];

    /// Key as used by templates, e.g. `privacyPolicy`.
    pub fn as_str(self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::About => "about",
            PageKey::Products => "products",
            PageKey::Experience => "experience",
            PageKey::Contact => "contact",
            PageKey::PrivacyPolicy => "privacyPolicy",
            PageKey::Terms => "terms",
            PageKey::Disclaimer => "disclaimer",
            PageKey::Partnership => "partnership",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKey {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownPage(s.to_string()))
    }
}
