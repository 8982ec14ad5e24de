//! Detail Resolver
//!
//! Reconciles a product's rich detail record from three precedence tiers:
//! custom override, curated static record, generic fallback. The first
//! matching tier is returned whole, never blended with a lower one.

use indexmap::IndexMap;

use crate::catalog::{brochure_file, curated_details};
use crate::core::Config;
use crate::db::models::{
    CustomProduct, ProductAccessories, ProductDetails, ProductHighlight,
};
use crate::db::repository::CustomProductRepository;
use crate::index::LocationIndex;
use crate::slug;

const DEFAULT_TAGLINE: &str = "Reliable Communication Device";
const DEFAULT_CLASSIFICATION: &str = "Professional Two-Way Radio";

/// Three-tier detail resolution
#[derive(Clone)]
pub struct DetailResolver {
    products: CustomProductRepository,
    docs_root: String,
}

impl DetailResolver {
    pub fn new(products: CustomProductRepository, config: &Config) -> Self {
        Self {
            products,
            docs_root: config.docs_root.clone(),
        }
    }

    /// Resolve the detail record for a product id, or `None` when the id is
    /// not in the catalog at all.
    pub fn resolve(&self, index: &LocationIndex, product_id: &str) -> Option<ProductDetails> {
        let location = index.find_by_id(product_id)?;
        let generic_name = slug::strip_extension(&location.file_name).to_string();

        // Tier 1: admin override. Once one exists the curated record is not
        // consulted at all.
        let custom = match self.products.find_by_label(&location.file_name) {
            Ok(custom) => custom,
            Err(err) => {
                tracing::warn!(error = %err, product_id, "override lookup failed");
                None
            }
        };
        if let Some(custom) = custom {
            return Some(self.from_custom(product_id, &generic_name, custom));
        }

        // Tier 2: curated static record
        if let Some(curated) = curated_details(product_id) {
            let mut details = curated.clone();
            if details.brochure_url.is_none() {
                details.brochure_url = self.brochure_url(product_id);
            }
            return Some(details);
        }

        // Tier 3: generic fallback
        Some(self.generic(product_id, &generic_name))
    }

    fn brochure_url(&self, product_id: &str) -> Option<String> {
        brochure_file(product_id).map(|file| format!("{}/{}", self.docs_root, file))
    }

    fn from_custom(
        &self,
        product_id: &str,
        generic_name: &str,
        custom: CustomProduct,
    ) -> ProductDetails {
        let name = if custom.name.is_empty() {
            generic_name.to_string()
        } else {
            custom.name
        };

        let highlights = match custom.highlights {
            Some(highlights) if !highlights.is_empty() => highlights,
            _ => vec![ProductHighlight {
                icon: "shield-check".to_string(),
                title: "Rugged Design".to_string(),
                description: "Built to withstand tough environments.".to_string(),
            }],
        };

        let general: IndexMap<String, String> = custom.specifications.unwrap_or_else(|| {
            IndexMap::from([("Status".to_string(), "Contact for details".to_string())])
        });

        ProductDetails {
            id: product_id.to_string(),
            name,
            tagline: custom.tagline.unwrap_or_else(|| DEFAULT_TAGLINE.to_string()),
            classification: custom
                .classification
                .unwrap_or_else(|| DEFAULT_CLASSIFICATION.to_string()),
            description: custom.description.unwrap_or_else(|| {
                format!("The {generic_name} is a robust and reliable communication tool.")
            }),
            highlights,
            specifications: IndexMap::from([("General".to_string(), general)]),
            accessories: ProductAccessories {
                standard: custom.standard_accessories.unwrap_or_else(|| {
                    vec!["Standard Battery".to_string(), "Antenna".to_string()]
                }),
                optional: vec!["Earpiece".to_string(), "Multi-Unit Charger".to_string()],
            },
            related_products: custom.related_products.unwrap_or_default(),
            // Custom brochure takes precedence over the static table
            brochure_url: custom.brochure_source,
        }
    }

    fn generic(&self, product_id: &str, generic_name: &str) -> ProductDetails {
        ProductDetails {
            id: product_id.to_string(),
            name: generic_name.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            classification: DEFAULT_CLASSIFICATION.to_string(),
            description: format!(
                "The {generic_name} is a robust and reliable communication tool designed for \
                 professional use. Full details for this specific model are coming soon. Please \
                 contact us for more information."
            ),
            highlights: vec![
                ProductHighlight {
                    icon: "shield-check".to_string(),
                    title: "Rugged Design".to_string(),
                    description: "Built to withstand tough environments and daily use."
                        .to_string(),
                },
                ProductHighlight {
                    icon: "speaker-wave".to_string(),
                    title: "Clear Audio".to_string(),
                    description:
                        "Loud and clear audio for effective communication in noisy settings."
                            .to_string(),
                },
                ProductHighlight {
                    icon: "battery-100".to_string(),
                    title: "Long Battery Life".to_string(),
                    description: "A high-capacity battery ensures all-day operation.".to_string(),
                },
            ],
            specifications: IndexMap::from([(
                "General".to_string(),
                IndexMap::from([
                    ("Frequency Range".to_string(), "UHF/VHF".to_string()),
                    ("Channel Capacity".to_string(), "Please contact us".to_string()),
                    ("Operating Voltage".to_string(), "7.4V (Rated)".to_string()),
                ]),
            )]),
            accessories: ProductAccessories {
                standard: vec![
                    "Standard Antenna".to_string(),
                    "Li-ion Battery".to_string(),
                    "Desktop Charger".to_string(),
                    "Belt Clip".to_string(),
                    "User Manual".to_string(),
                ],
                optional: vec![
                    "Earpiece".to_string(),
                    "Speaker Microphone".to_string(),
                    "High-Gain Antenna".to_string(),
                    "Multi-Unit Charger".to_string(),
                ],
            },
            related_products: vec![
                "Hytera HP708".to_string(),
                "Motorola R7".to_string(),
                "Kenwood NX-1200".to_string(),
            ],
            brochure_url: self.brochure_url(product_id),
        }
    }
}
