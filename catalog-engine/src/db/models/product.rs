//! Custom Product Model
//!
//! Admin-authored product records: catalog placement plus optional rich
//! detail. Persisted as one JSON array under a fixed storage key; the
//! camelCase renames keep the stored JSON identical to the original export
//! format, so a collection written by the legacy admin portal loads as-is.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::detail::ProductHighlight;
use crate::slug;

/// Custom product record
///
/// Identity for upsert purposes is the case-insensitive `name`, not `id`;
/// `id` is an opaque generated handle used only for deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomProduct {
    pub id: String,
    pub name: String,
    pub category: String,
    pub section: String,
    pub subsection: String,

    /// Image as absolute URL, data-URI, or an internal `media://` reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_source: Option<String>,
    /// Brochure as absolute URL, data-URI, or an internal `media://` reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brochure_source: Option<String>,

    // Rich details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<ProductHighlight>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_accessories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_products: Option<Vec<String>>,

    // Images for catalog nodes the record may create on merge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_image: Option<String>,

    /// Creation/update instant, Unix millis
    pub timestamp: i64,
}

impl CustomProduct {
    /// Whether this record matches a raw catalog label: the label is
    /// extension-stripped, then compared case-sensitively against `name`.
    pub fn matches_label(&self, label: &str) -> bool {
        slug::strip_extension(label) == self.name
    }
}

/// Create/update payload for a custom product (everything except the
/// generated id and timestamp)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomProductSubmission {
    pub name: String,
    pub category: String,
    pub section: String,
    pub subsection: String,
    #[serde(default)]
    pub image_source: Option<String>,
    #[serde(default)]
    pub brochure_source: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub specifications: Option<IndexMap<String, String>>,
    #[serde(default)]
    pub highlights: Option<Vec<ProductHighlight>>,
    #[serde(default)]
    pub standard_accessories: Option<Vec<String>>,
    #[serde(default)]
    pub related_products: Option<Vec<String>>,
    #[serde(default)]
    pub category_image: Option<String>,
    #[serde(default)]
    pub section_image: Option<String>,
}

impl CustomProductSubmission {
    /// Materialize a full record from this submission.
    pub fn into_record(self, id: String, timestamp: i64) -> CustomProduct {
        CustomProduct {
            id,
            name: self.name,
            category: self.category,
            section: self.section,
            subsection: self.subsection,
            image_source: self.image_source,
            brochure_source: self.brochure_source,
            tagline: self.tagline,
            classification: self.classification,
            description: self.description,
            specifications: self.specifications,
            highlights: self.highlights,
            standard_accessories: self.standard_accessories,
            related_products: self.related_products,
            category_image: self.category_image,
            section_image: self.section_image,
            timestamp,
        }
    }
}
