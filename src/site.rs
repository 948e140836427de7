//! Content tables the pages render.
//!
//! All of it is compile-time data. Consistency of the product table is
//! checked by [`check_products`](crate::registry::check_products).

/// Who runs the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CompanyInfo {
    /// Registered trading name
    pub name: &'static str,
    /// Brand shown in the header
    pub brand: &'static str,
    /// Hero tagline
    pub tagline: &'static str,
    /// Legal form of the business
    pub business_type: &'static str,
    /// Contact mobile number
    pub mobile: &'static str,
    /// Contact email address
    pub email: &'static str,
    /// City and state
    pub location: &'static str,
}

/// The company behind the site.
///
/// Contact details are still placeholders on the live site.
pub const COMPANY: CompanyInfo = CompanyInfo {
    name: "Tashu Traders",
    brand: "TASHRA",
    tagline: "Reliable Government Tender Supplier for Quality Products",
    business_type: "Proprietorship",
    mobile: "[Mobile Number]",
    email: "[Email Address]",
    location: "[City, State]",
};

impl CompanyInfo {
    /// `"{brand} - {name}"`, as used in the footer.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.brand, self.name)
    }
}

/// A line of business on the products page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProductCategory {
    /// Stable anchor id, unique across categories
    pub id: &'static str,
    /// Emoji shown on the card
    pub icon: &'static str,
    /// Card heading
    pub title: &'static str,
    /// One-line summary
    pub description: &'static str,
    /// Bullet points
    pub items: &'static [&'static str],
}

/// Supply categories, in display order.
pub const PRODUCT_CATEGORIES: &[ProductCategory] = &[
    ProductCategory {
        id: "books",
        icon: "📘",
        title: "Baby Kit Books",
        description: "Government scheme supplies",
        items: &["Bulk printing & delivery", "As per tender specifications"],
    },
    ProductCategory {
        id: "aluminium",
        icon: "🏗",
        title: "Aluminium Gates & Products",
        description: "Aluminium gates and fabrication-related supply",
        items: &["Durable & quality-tested materials"],
    },
    ProductCategory {
        id: "grocery",
        icon: "🛒",
        title: "Grocery & Essential Items",
        description: "Bulk grocery supply",
        items: &[
            "Institutional & government usage",
            "Packaging as per requirement",
        ],
    },
];

/// Home page highlight bullets.
pub const HIGHLIGHT_POINTS: &[&str] = &[
    "Government tender experience",
    "Bulk supply capability",
    "Quality assurance",
    "Multi-product capability",
];

/// The category with the given id.
pub fn product_category(id: &str) -> Option<&'static ProductCategory> {
    PRODUCT_CATEGORIES.iter().find(|category| category.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_in_display_order() {
        let ids: Vec<_> = PRODUCT_CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["books", "aluminium", "grocery"]);
    }

    #[test]
    fn test_product_category_lookup() {
        let grocery = product_category("grocery").unwrap();
        assert_eq!(grocery.title, "Grocery & Essential Items");
        assert_eq!(grocery.items.len(), 2);
        assert!(product_category("steel").is_none());
    }

    #[test]
    fn test_every_category_has_items() {
        for category in PRODUCT_CATEGORIES {
            assert!(!category.items.is_empty(), "{}", category.id);
        }
    }

    #[test]
    fn test_company_display_name() {
        assert_eq!(COMPANY.display_name(), "TASHRA - Tashu Traders");
    }
}
