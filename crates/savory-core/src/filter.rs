//! Catalog Filter
//!
//! Holds the fixed catalog plus the user's current filter selection and
//! derives the visible dishes from them. The catalog order is always
//! preserved.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::model::{Catalog, MenuItem};

/// Criterion deciding which dishes are visible
///
/// `"Vegetarian"` is both a category label and the flag-based key. Parsing
/// the label always yields [`FilterKey::Vegetarian`], which matches on
/// `is_vegetarian`; `FilterKey::Category("Vegetarian".into())` still matches
/// on the category field when built directly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKey {
    /// Every dish, unfiltered
    #[default]
    All,

    /// Dishes flagged popular
    Popular,

    /// Dishes flagged vegetarian
    Vegetarian,

    /// Dishes whose category label equals this one exactly
    Category(String),
}

impl FilterKey {
    /// The filter buttons of the featured dishes gallery, in display order
    pub fn standard() -> Vec<Self> {
        vec![
            Self::All,
            Self::Category("Appetizers".into()),
            Self::Category("Mains".into()),
            Self::Vegetarian,
            Self::Popular,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Popular => "Popular",
            Self::Vegetarian => "Vegetarian",
            Self::Category(label) => label.as_str(),
        }
    }

    /// Predicate applied to each catalog item
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Popular => item.is_popular,
            Self::Vegetarian => item.is_vegetarian,
            Self::Category(label) => item.category.as_str() == label.as_str(),
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterKey {
    type Err = Infallible;

    /// Lenient parse: unknown labels become category keys that match nothing
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "All" => Self::All,
            "Popular" => Self::Popular,
            "Vegetarian" => Self::Vegetarian,
            other => Self::Category(other.to_string()),
        })
    }
}

/// View-model behind the featured dishes gallery
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogFilter {
    catalog: Catalog,
    selection: FilterKey,
}

impl CatalogFilter {
    /// Start unfiltered
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: FilterKey::All,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &FilterKey {
        &self.selection
    }

    pub fn is_filtered(&self) -> bool {
        self.selection != FilterKey::All
    }

    /// Replace the current selection
    pub fn select(&mut self, key: FilterKey) {
        if self.selection == key {
            return;
        }
        tracing::debug!(from = %self.selection, to = %key, "filter selected");
        self.selection = key;
    }

    /// Select by label, accepting only keys offered by [`Self::available_keys`]
    ///
    /// On error the selection is left untouched.
    pub fn select_label(&mut self, label: &str) -> Result<()> {
        let key = self
            .available_keys()
            .into_iter()
            .find(|k| k.label() == label)
            .ok_or_else(|| {
                tracing::warn!(label, "rejected unknown filter");
                CatalogError::UnknownFilter(label.to_string())
            })?;
        self.select(key);
        Ok(())
    }

    /// Keys worth offering for this catalog
    ///
    /// The standard buttons come first, minus categories the catalog lacks,
    /// followed by any other categories the catalog carries.
    pub fn available_keys(&self) -> Vec<FilterKey> {
        let categories = self.catalog.categories();

        let mut keys: Vec<FilterKey> = FilterKey::standard()
            .into_iter()
            .filter(|key| match key {
                FilterKey::Category(label) => {
                    categories.iter().any(|c| c.as_str() == label.as_str())
                }
                _ => true,
            })
            .collect();

        for category in categories {
            if !keys.iter().any(|k| k.label() == category.as_str()) {
                keys.push(FilterKey::Category(category.as_str().to_string()));
            }
        }

        keys
    }

    /// Dishes matching the current selection, in catalog order
    pub fn visible_items(&self) -> impl Iterator<Item = &MenuItem> + '_ {
        self.catalog
            .items()
            .iter()
            .filter(move |item| self.selection.matches(item))
    }

    pub fn visible_count(&self) -> usize {
        self.visible_items().count()
    }
}
