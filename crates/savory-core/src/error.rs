//! Error Types for the Menu Catalog

use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Duplicate menu item id: {0}")]
    DuplicateItemId(u32),

    #[error("Negative price for menu item {id}: {price}")]
    NegativePrice { id: u32, price: Decimal },
}

impl CatalogError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownFilter(label) => format!("There is no '{label}' section on our menu."),
            Self::DuplicateItemId(_) | Self::NegativePrice { .. } => {
                "The menu is temporarily unavailable.".into()
            }
        }
    }
}
