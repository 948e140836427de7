//! Consistency checks over the static tables
//!
//! Every check runs to completion and reports every violation it finds, so a
//! single run of the test suite lists everything wrong with an edited table.
//!
//! ```rust
//! use tashra::registry::{check_site, MetadataRegistry, Navigation};
//! use tashra::site::PRODUCT_CATEGORIES;
//!
//! let result = check_site(
//!     &Navigation::default(),
//!     &MetadataRegistry::default(),
//!     PRODUCT_CATEGORIES,
//! );
//! assert!(result.is_success());
//! ```

use std::collections::HashSet;
use std::fmt;

use super::{MetadataRegistry, Navigation, PageKey};
use crate::predicate::{site_path, Predicate};
use crate::site::ProductCategory;
use crate::Validation;

/// One broken rule in a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryViolation {
    /// A navigation link with blank text.
    EmptyLabel {
        /// Link target
        href: String,
    },
    /// A navigation href outside `^/[a-z0-9-]*$`.
    MalformedHref {
        /// Offending href
        href: String,
    },
    /// The same href appears twice across main and legal navigation.
    DuplicateHref {
        /// Repeated href
        href: String,
    },
    /// A navigation href that no registered page has as its path.
    UnregisteredHref {
        /// Dangling href
        href: String,
    },
    /// A page with a blank title.
    EmptyTitle {
        /// Page key
        page: PageKey,
    },
    /// A page with a blank description.
    EmptyDescription {
        /// Page key
        page: PageKey,
    },
    /// A page path outside `^/[a-z0-9-]*$`.
    MalformedPath {
        /// Page key
        page: PageKey,
        /// Offending path
        path: String,
    },
    /// Two pages share a title.
    DuplicateTitle {
        /// Repeated title
        title: String,
    },
    /// Two pages share a path.
    DuplicatePath {
        /// Repeated path
        path: String,
    },
    /// A product category with a blank id.
    EmptyProductId,
    /// Two product categories share an id.
    DuplicateProductId {
        /// Repeated id
        id: String,
    },
}

impl fmt::Display for RegistryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryViolation::EmptyLabel { href } => {
                write!(f, "navigation link to `{}` has an empty label", href)
            }
            RegistryViolation::MalformedHref { href } => {
                write!(f, "navigation href `{}` is not a lowercase site path", href)
            }
            RegistryViolation::DuplicateHref { href } => {
                write!(f, "navigation href `{}` appears more than once", href)
            }
            RegistryViolation::UnregisteredHref { href } => {
                write!(f, "navigation href `{}` does not match any page", href)
            }
            RegistryViolation::EmptyTitle { page } => write!(f, "page `{}` has no title", page),
            RegistryViolation::EmptyDescription { page } => {
                write!(f, "page `{}` has no description", page)
            }
            RegistryViolation::MalformedPath { page, path } => {
                write!(f, "page `{}` path `{}` is not a lowercase site path", page, path)
            }
            RegistryViolation::DuplicateTitle { title } => {
                write!(f, "title `{}` is used by more than one page", title)
            }
            RegistryViolation::DuplicatePath { path } => {
                write!(f, "path `{}` is used by more than one page", path)
            }
            RegistryViolation::EmptyProductId => write!(f, "a product category has an empty id"),
            RegistryViolation::DuplicateProductId { id } => {
                write!(f, "product category id `{}` appears more than once", id)
            }
        }
    }
}

/// Result of a registry check.
pub type RegistryCheck = Validation<(), Vec<RegistryViolation>>;

fn from_violations(violations: Vec<RegistryViolation>) -> RegistryCheck {
    if violations.is_empty() {
        Validation::success(())
    } else {
        Validation::failure(violations)
    }
}

/// Every href is unique across main ∪ legal, non-blank labelled, and a
/// lowercase site path.
pub fn check_navigation(nav: &Navigation) -> RegistryCheck {
    let mut seen = HashSet::new();
    let mut violations = Vec::new();

    for item in nav.all() {
        if item.label.trim().is_empty() {
            violations.push(RegistryViolation::EmptyLabel {
                href: item.href.clone(),
            });
        }
        if !site_path().check(item.href.as_str()) {
            violations.push(RegistryViolation::MalformedHref {
                href: item.href.clone(),
            });
        }
        if !seen.insert(item.href.as_str()) {
            violations.push(RegistryViolation::DuplicateHref {
                href: item.href.clone(),
            });
        }
    }

    from_violations(violations)
}

/// Every entry has a title and description, a well-formed path, and no two
/// entries share a title or a path.
pub fn check_metadata(registry: &MetadataRegistry) -> RegistryCheck {
    let mut titles = HashSet::new();
    let mut paths = HashSet::new();
    let mut violations = Vec::new();

    for (page, entry) in registry.entries() {
        if entry.title.trim().is_empty() {
            violations.push(RegistryViolation::EmptyTitle { page });
        }
        if entry.description.trim().is_empty() {
            violations.push(RegistryViolation::EmptyDescription { page });
        }
        if !site_path().check(entry.path.as_str()) {
            violations.push(RegistryViolation::MalformedPath {
                page,
                path: entry.path.clone(),
            });
        }
        if !titles.insert(entry.title.as_str()) {
            violations.push(RegistryViolation::DuplicateTitle {
                title: entry.title.clone(),
            });
        }
        if !paths.insert(entry.path.as_str()) {
            violations.push(RegistryViolation::DuplicatePath {
                path: entry.path.clone(),
            });
        }
    }

    from_violations(violations)
}

/// Every navigation href is the path of some registered page.
pub fn check_nav_targets(nav: &Navigation, registry: &MetadataRegistry) -> RegistryCheck {
    let paths: HashSet<&str> = registry
        .entries()
        .map(|(_, entry)| entry.path.as_str())
        .collect();

    let violations = nav
        .all()
        .filter(|item| !paths.contains(item.href.as_str()))
        .map(|item| RegistryViolation::UnregisteredHref {
            href: item.href.clone(),
        })
        .collect();

    from_violations(violations)
}

/// Product category ids are non-empty and unique.
pub fn check_products(categories: &[ProductCategory]) -> RegistryCheck {
    let mut seen = HashSet::new();
    let mut violations = Vec::new();

    for category in categories {
        if category.id.trim().is_empty() {
            violations.push(RegistryViolation::EmptyProductId);
        } else if !seen.insert(category.id) {
            violations.push(RegistryViolation::DuplicateProductId {
                id: category.id.to_string(),
            });
        }
    }

    from_violations(violations)
}

/// All of the above, every violation reported.
pub fn check_site(
    nav: &Navigation,
    registry: &MetadataRegistry,
    categories: &[ProductCategory],
) -> RegistryCheck {
    Validation::all((
        check_navigation(nav),
        check_metadata(registry),
        check_nav_targets(nav, registry),
        check_products(categories),
    ))
    .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{NavItem, PageMetadataEntry};
    use crate::site::PRODUCT_CATEGORIES;

    fn violations(check: RegistryCheck) -> Vec<RegistryViolation> {
        match check {
            Validation::Success(()) => vec![],
            Validation::Failure(v) => v,
        }
    }

    #[test]
    fn test_live_tables_pass() {
        assert!(check_navigation(&Navigation::default()).is_success());
        assert!(check_metadata(&MetadataRegistry::default()).is_success());
        assert!(
            check_nav_targets(&Navigation::default(), &MetadataRegistry::default()).is_success()
        );
        assert!(check_products(PRODUCT_CATEGORIES).is_success());
    }

    #[test]
    fn test_navigation_reports_every_problem() {
        let nav = Navigation::new(
            vec![
                NavItem::new("Home", "/"),
                NavItem::new("About", "/About"),
                NavItem::new(" ", "/contact"),
            ],
            vec![NavItem::new("Contact again", "/contact")],
        );
        assert_eq!(
            violations(check_navigation(&nav)),
            vec![
                RegistryViolation::MalformedHref {
                    href: "/About".to_string()
                },
                RegistryViolation::EmptyLabel {
                    href: "/contact".to_string()
                },
                RegistryViolation::DuplicateHref {
                    href: "/contact".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_metadata_duplicates_detected() {
        let home_title = MetadataRegistry::default()
            .lookup(PageKey::Home)
            .title
            .clone();
        let registry = MetadataRegistry::default()
            .with_entry(
                PageKey::Terms,
                PageMetadataEntry::new(home_title.clone(), "", "/about"),
            );
        let found = violations(check_metadata(&registry));
        assert!(found.contains(&RegistryViolation::EmptyDescription {
            page: PageKey::Terms
        }));
        assert!(found.contains(&RegistryViolation::DuplicateTitle { title: home_title }));
        assert!(found.contains(&RegistryViolation::DuplicatePath {
            path: "/about".to_string()
        }));
    }

    #[test]
    fn test_malformed_page_path() {
        let registry = MetadataRegistry::default().with_entry(
            PageKey::Partnership,
            PageMetadataEntry::new("Partner", "Work with us", "/partnership/"),
        );
        assert_eq!(
            violations(check_metadata(&registry)),
            vec![RegistryViolation::MalformedPath {
                page: PageKey::Partnership,
                path: "/partnership/".to_string()
            }]
        );
    }

    #[test]
    fn test_dangling_nav_target() {
        let registry = MetadataRegistry::default().without_entry(PageKey::Disclaimer);
        assert_eq!(
            violations(check_nav_targets(&Navigation::default(), &registry)),
            vec![RegistryViolation::UnregisteredHref {
                href: "/disclaimer".to_string()
            }]
        );
    }

    #[test]
    fn test_duplicate_product_id() {
        let categories = [PRODUCT_CATEGORIES[0], PRODUCT_CATEGORIES[0]];
        assert_eq!(
            violations(check_products(&categories)),
            vec![RegistryViolation::DuplicateProductId {
                id: PRODUCT_CATEGORIES[0].id.to_string()
            }]
        );
    }

    #[test]
    fn test_check_site_accumulates_across_tables() {
        let nav = Navigation::new(vec![NavItem::new("Careers", "/careers")], vec![]);
        let found = violations(check_site(&nav, &MetadataRegistry::default(), &[]));
        assert_eq!(
            found,
            vec![RegistryViolation::UnregisteredHref {
                href: "/careers".to_string()
            }]
        );
    }

    #[test]
    fn test_violation_display() {
        let v = RegistryViolation::DuplicatePath {
            path: "/terms".to_string(),
        };
        assert_eq!(v.to_string(), "path `/terms` is used by more than one page");
    }
}
