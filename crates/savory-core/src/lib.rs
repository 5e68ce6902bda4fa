//! # savory-core
//!
//! Menu catalog, dish filtering and static site content for the Savory
//! landing page.
//!
//! ## Featured dishes
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  [All] [Appetizers] [Mains] [Vegetarian] [Popular]          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Catalog (fixed order)  ──▶  CatalogFilter  ──▶  visible     │
//! │                              (selection)         subset      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog never changes after startup. A `CatalogFilter` owns the
//! current selection and derives the visible dishes on every read, so the
//! view only has to re-render when the selection changes.

pub mod content;
pub mod error;
pub mod filter;
pub mod model;
pub mod nav;

pub use error::{CatalogError, Result};
pub use filter::{CatalogFilter, FilterKey};
pub use model::{Badge, Catalog, Category, MenuItem};
pub use nav::NavToggle;
