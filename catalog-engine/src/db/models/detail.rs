//! Product Detail Model
//!
//! The fully resolved view surfaced to a detail page, plus the denormalized
//! search result record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single product feature highlight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductHighlight {
    /// Icon tag, e.g. `shield-check`, `battery-100`
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Standard and optional accessory lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAccessories {
    pub standard: Vec<String>,
    pub optional: Vec<String>,
}

/// Fully resolved product detail record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub classification: String,
    pub description: String,
    pub highlights: Vec<ProductHighlight>,
    /// Specification group → spec name → value
    pub specifications: IndexMap<String, IndexMap<String, String>>,
    pub accessories: ProductAccessories,
    pub related_products: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brochure_url: Option<String>,
}

/// Denormalized search index entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchResult {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub category: String,
    pub section: String,
    pub subsection: String,
}
