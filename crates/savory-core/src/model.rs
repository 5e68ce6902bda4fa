//! Domain Models
//!
//! Menu items and the fixed catalog they live in.
//! Uses `rust_decimal` for all prices - never use f64 for money!

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Image shown until real dish photography is wired in
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/200";

/// Menu section a dish belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Appetizers,
    Mains,
    Vegetarian,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Appetizers, Self::Mains, Self::Vegetarian];

    /// Exact display label, also used for filter matching
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Appetizers => "Appetizers",
            Self::Mains => "Mains",
            Self::Vegetarian => "Vegetarian",
        }
    }

    /// Look up a category by its exact label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge rendered on a dish card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Popular,
    ChefSpecial,
    Vegetarian,
}

impl Badge {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::ChefSpecial => "Chef's Special",
            Self::Vegetarian => "Vegetarian",
        }
    }

    /// CSS modifier used by the card
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Popular => "badge badge-popular",
            Self::ChefSpecial => "badge badge-chef",
            Self::Vegetarian => "badge badge-veg",
        }
    }
}

/// A dish on the menu
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier within a catalog
    pub id: u32,

    /// Dish name (e.g., "Classic Burger")
    pub name: String,

    /// Short strapline under the name
    pub subtitle: String,

    pub description: String,

    /// Price in USD
    pub price: Decimal,

    pub category: Category,

    pub is_vegetarian: bool,
    pub is_popular: bool,
    pub is_chef_special: bool,

    /// Opaque asset reference
    pub image: String,
}

impl MenuItem {
    pub fn new(id: u32, name: impl Into<String>, category: Category, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            subtitle: String::new(),
            description: String::new(),
            price,
            category,
            is_vegetarian: false,
            is_popular: false,
            is_chef_special: false,
            image: PLACEHOLDER_IMAGE.into(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn vegetarian(mut self) -> Self {
        self.is_vegetarian = true;
        self
    }

    pub fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    pub fn chef_special(mut self) -> Self {
        self.is_chef_special = true;
        self
    }

    /// Price formatted for display, e.g. "$16.99"
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Badges in the order the card renders them
    pub fn badges(&self) -> Vec<Badge> {
        let mut badges = Vec::with_capacity(3);
        if self.is_popular {
            badges.push(Badge::Popular);
        }
        if self.is_chef_special {
            badges.push(Badge::ChefSpecial);
        }
        if self.is_vegetarian {
            badges.push(Badge::Vegetarian);
        }
        badges
    }
}

/// Fixed, ordered set of menu items known to a view
///
/// Built once at startup and shared read-only; cloning only bumps a
/// reference count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    items: Arc<[MenuItem]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and negative prices
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateItemId(item.id));
            }
            if item.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    id: item.id,
                    price: item.price,
                });
            }
        }

        tracing::debug!(items = items.len(), "catalog built");
        Ok(Self { items: items.into() })
    }

    /// The dishes shown in the home page gallery
    pub fn featured() -> Self {
        let items = vec![
            MenuItem::new(1, "Classic Burger", Category::Mains, dec!(16.99))
                .with_subtitle("House Specialty")
                .with_description("Angus beef patty with lettuce, tomato, and special sauce")
                .popular()
                .chef_special(),
            MenuItem::new(2, "Caesar Salad", Category::Vegetarian, dec!(12.99))
                .with_subtitle("Fresh & Crisp")
                .with_description("Romaine lettuce, parmesan, croutons, and Caesar dressing")
                .vegetarian()
                .popular(),
            MenuItem::new(3, "BBQ Ribs", Category::Mains, dec!(28.99))
                .with_subtitle("Slow-Smoked")
                .with_description("Full rack of tender ribs with house-made BBQ sauce")
                .popular()
                .chef_special(),
            MenuItem::new(4, "Loaded Nachos", Category::Appetizers, dec!(14.99))
                .with_subtitle("Perfect Starter")
                .with_description("Tortilla chips with cheese, jalapeños, and all the fixings")
                .vegetarian()
                .popular(),
            MenuItem::new(5, "Grilled Salmon", Category::Mains, dec!(24.99))
                .with_subtitle("Ocean Fresh")
                .with_description("Atlantic salmon with lemon butter and seasonal vegetables")
                .chef_special(),
            MenuItem::new(6, "Buffalo Wings", Category::Appetizers, dec!(13.99))
                .with_subtitle("Crowd Favorite")
                .with_description("Crispy wings tossed in buffalo sauce with ranch dip")
                .popular(),
        ];

        // ids and prices above are fixed and valid
        Self { items: items.into() }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for item in self.items.iter() {
            if !categories.contains(&item.category) {
                categories.push(item.category);
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_catalog_is_valid() {
        let featured = Catalog::featured();
        let rebuilt = Catalog::new(featured.items().to_vec()).unwrap();
        assert_eq!(rebuilt, featured);
        assert_eq!(featured.len(), 6);

        let ids: Vec<u32> = featured.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let items = vec![
            MenuItem::new(1, "Burger", Category::Mains, dec!(10)),
            MenuItem::new(1, "Nachos", Category::Appetizers, dec!(8)),
        ];
        assert_eq!(Catalog::new(items), Err(CatalogError::DuplicateItemId(1)));
    }

    #[test]
    fn test_negative_price_rejected() {
        let items = vec![MenuItem::new(9, "Refund", Category::Mains, dec!(-0.01))];
        assert_eq!(
            Catalog::new(items),
            Err(CatalogError::NegativePrice { id: 9, price: dec!(-0.01) })
        );
    }

    #[test]
    fn test_zero_price_allowed() {
        let items = vec![MenuItem::new(1, "Bread Basket", Category::Appetizers, Decimal::ZERO)];
        assert!(Catalog::new(items).is_ok());
    }

    #[test]
    fn test_display_price() {
        let featured = Catalog::featured();
        assert_eq!(featured.get(1).unwrap().display_price(), "$16.99");

        let plain = MenuItem::new(7, "Fries", Category::Appetizers, dec!(5));
        assert_eq!(plain.display_price(), "$5.00");
    }

    #[test]
    fn test_badges_order() {
        let featured = Catalog::featured();
        assert_eq!(
            featured.get(1).unwrap().badges(),
            vec![Badge::Popular, Badge::ChefSpecial]
        );
        assert_eq!(
            featured.get(4).unwrap().badges(),
            vec![Badge::Popular, Badge::Vegetarian]
        );
        assert_eq!(featured.get(5).unwrap().badges(), vec![Badge::ChefSpecial]);
    }

    #[test]
    fn test_categories_first_appearance() {
        assert_eq!(
            Catalog::featured().categories(),
            vec![Category::Mains, Category::Vegetarian, Category::Appetizers]
        );
    }

    #[test]
    fn test_category_labels() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_label("mains"), None);

        let json = serde_json::to_string(&Category::Appetizers).unwrap();
        assert_eq!(json, "\"Appetizers\"");
    }

    #[test]
    fn test_missing_id_lookup() {
        assert!(Catalog::featured().get(42).is_none());
    }
}
