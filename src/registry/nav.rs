//! Header and footer navigation.

/// A link in the header or footer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavItem {
    /// Link text
    pub label: String,
    /// Site path, e.g. `/about`
    pub href: String,
}

impl NavItem {
    /// A link to `href` reading `label`.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        NavItem {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// The site's two navigation lists.
///
/// `Default` is the live site navigation.
///
/// ```rust
/// use tashra::registry::Navigation;
///
/// let nav = Navigation::default();
/// assert_eq!(nav.main()[0].href, "/");
/// assert_eq!(nav.legal().len(), 3);
/// assert_eq!(nav.all().count(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Navigation {
    main: Vec<NavItem>,
    legal: Vec<NavItem>,
}

impl Navigation {
    /// Navigation from explicit lists.
    pub fn new(main: Vec<NavItem>, legal: Vec<NavItem>) -> Self {
        Navigation { main, legal }
    }

    /// Header links, in display order.
    pub fn main(&self) -> &[NavItem] {
        &self.main
    }

    /// Footer legal links, in display order.
    pub fn legal(&self) -> &[NavItem] {
        &self.legal
    }

    /// Main then legal links.
    pub fn all(&self) -> impl Iterator<Item = &NavItem> + '_ {
        self.main.iter().chain(self.legal.iter())
    }

    /// The main link whose href equals `path`, for highlighting the current page.
    pub fn active(&self, path: &str) -> Option<&NavItem> {
        self.main.iter().find(|item| item.href == path)
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Navigation {
            main: vec![
                NavItem::new("Home", "/"),
                NavItem::new("About Us", "/about"),
                NavItem::new("Products", "/products"),
                NavItem::new("Experience", "/experience"),
                NavItem::new("Contact Us", "/contact"),
            ],
            legal: vec![
                NavItem::new("Privacy Policy", "/privacy-policy"),
                NavItem::new("Terms & Conditions", "/terms"),
                NavItem::new("Disclaimer", "/disclaimer"),
            ],
        }
    }
}
