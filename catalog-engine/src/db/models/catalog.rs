//! Catalog Model
//!
//! The hierarchical product catalog: Category → Section → Subsection →
//! product label. Category order, section order and product order are all
//! load-bearing (walk order defines relevance order and first-match
//! policies), so the top level is an insertion-ordered map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Category title → category record, in seed/merge insertion order.
pub type Catalog = IndexMap<String, Category>;

/// Catalog category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub sections: Vec<Section>,
}

/// Catalog section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Optional image for mega menu display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub subsections: Vec<Subsection>,
}

/// Catalog subsection, the leaf grouping that owns product labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subsection {
    pub name: String,
    /// Raw labels, historically filenames with extension (`Hytera HP788.png`)
    pub products: Vec<String>,
}

/// A product's full hierarchical address, resolved from its flat id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLocation {
    /// The raw catalog label the id was derived from
    pub file_name: String,
    pub category_title: String,
    pub section_title: String,
    pub subsection_name: String,
}
