//! Product catalog that bills are assembled from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::CatalogItem;

/// An in-memory list of sellable items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by catalog id.
    pub fn get(&self, id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up an item by product code, ignoring case.
    pub fn by_code(&self, code: &str) -> Option<&CatalogItem> {
        self.items
            .iter()
            .find(|item| item.code.eq_ignore_ascii_case(code))
    }

    /// Items whose name, code or description contains `term`, ignoring case.
    /// A blank term matches everything.
    pub fn search(&self, term: &str) -> Vec<&CatalogItem> {
        let needle = term.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                needle.is_empty()
                    || item.name.to_lowercase().contains(&needle)
                    || item.code.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// The sample service catalog shipped with the billing counter.
    pub fn demo() -> Self {
        const ROWS: &[(u32, &str, &str, &str, i64, &str, &str)] = &[
            (1, "PRD001", "Web Development", "Custom website development", 5000, "Service", "9983"),
            (2, "PRD002", "Mobile App Development", "iOS and Android app development", 8000, "Service", "9983"),
            (3, "PRD003", "UI/UX Design", "User interface and experience design", 3000, "Service", "9983"),
            (4, "PRD004", "SEO Optimization", "Search engine optimization services", 1500, "Service", "9983"),
            (5, "PRD005", "Cloud Hosting", "Monthly cloud hosting service", 200, "Subscription", "9984"),
            (6, "PRD006", "Consulting Hour", "Technical consulting per hour", 150, "Service", "9983"),
            (7, "PRD007", "Logo Design", "Professional logo design", 800, "Service", "9983"),
            (8, "PRD008", "API Integration", "Third-party API integration", 2000, "Service", "9983"),
            (9, "PRD009", "Domain Registration", "Annual domain registration", 999, "Subscription", "9984"),
            (10, "PRD010", "SSL Certificate", "SSL certificate installation", 2999, "Service", "9983"),
            (11, "PRD011", "Website Maintenance", "Monthly website maintenance", 2500, "Subscription", "9984"),
            (12, "PRD012", "Email Hosting", "Business email hosting per year", 1200, "Subscription", "9984"),
        ];

        let items = ROWS
            .iter()
            .map(|&(id, code, name, description, price, category, hsn)| CatalogItem {
                id,
                code: code.into(),
                name: name.into(),
                description: description.into(),
                unit_price: Decimal::from(price),
                category: category.into(),
                tax_code: Some(hsn.into()),
            })
            .collect();
        Self { items }
    }
}
