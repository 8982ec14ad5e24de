//! Location Index
//!
//! Maps flat product ids back to their place in the hierarchy, and free-text
//! names to route paths. Built once per catalog generation by a depth-first
//! walk; the engine facade memoizes it and rebuilds after writes.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::db::models::{Catalog, ProductLocation};
use crate::slug;

/// Index over one merged-catalog generation
#[derive(Debug, Default)]
pub struct LocationIndex {
    /// product id → hierarchical address; first writer wins on collision
    products: HashMap<String, ProductLocation>,
    /// lowercased display name → route path, in walk order
    names: IndexMap<String, String>,
}

impl LocationIndex {
    /// Walk the catalog depth-first and index every category, section,
    /// subsection and product.
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = LocationIndex::default();

        for (category_title, category) in catalog {
            let category_path = format!("products/{}", slug::slugify(category_title));
            index
                .names
                .insert(category_title.to_lowercase(), category_path.clone());

            for section in &category.sections {
                let section_path =
                    format!("{}/{}", category_path, slug::slugify(&section.title));
                index
                    .names
                    .insert(section.title.to_lowercase(), section_path.clone());

                for subsection in &section.subsections {
                    // Subsections route to their section page; underscores in
                    // historical names read as spaces in free text
                    index.names.insert(
                        subsection.name.to_lowercase().replace('_', " "),
                        section_path.clone(),
                    );

                    for label in &subsection.products {
                        let product_name = slug::strip_extension(label);
                        let product_id = slug::slugify(product_name);
                        if index.products.contains_key(&product_id) {
                            // Two labels collide on slug: first encountered
                            // during the walk stays indexed
                            continue;
                        }
                        index.products.insert(
                            product_id.clone(),
                            ProductLocation {
                                file_name: label.clone(),
                                category_title: category_title.clone(),
                                section_title: section.title.clone(),
                                subsection_name: subsection.name.clone(),
                            },
                        );
                        index.names.insert(
                            product_name.to_lowercase(),
                            format!("product/{product_id}"),
                        );
                    }
                }
            }
        }

        index
    }

    /// Resolve a product id to its hierarchical address.
    pub fn find_by_id(&self, product_id: &str) -> Option<&ProductLocation> {
        self.products.get(product_id)
    }

    /// Resolve free text to a route path: exact case-insensitive match over
    /// every indexed name first, then the first substring match restricted to
    /// product entries. First match, not best match.
    pub fn find_path_by_name(&self, name: &str) -> Option<&str> {
        let term = name.trim().to_lowercase();
        if term.is_empty() {
            return None;
        }

        if let Some(path) = self.names.get(&term) {
            return Some(path);
        }

        self.names
            .iter()
            .find(|(key, path)| path.starts_with("product/") && key.contains(&term))
            .map(|(_, path)| path.as_str())
    }

    /// Number of uniquely indexed products.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_catalog;

    fn index() -> LocationIndex {
        LocationIndex::build(seed_catalog())
    }

    #[test]
    fn product_id_resolves_to_full_address() {
        let index = index();
        let location = index.find_by_id("hytera-hp788").unwrap();
        assert_eq!(location.file_name, "Hytera HP788.png");
        assert_eq!(location.category_title, "Two-Way Radios");
        assert_eq!(location.section_title, "DMR System");
        assert_eq!(location.subsection_name, "Handsets");
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(index().find_by_id("no-such-id").is_none());
    }

    #[test]
    fn exact_name_match_beats_substring() {
        let index = index();
        assert_eq!(
            index.find_path_by_name("TETRA System"),
            Some("products/two-way-radios/tetra-system")
        );
        assert_eq!(
            index.find_path_by_name("hytera hp788"),
            Some("product/hytera-hp788")
        );
    }

    #[test]
    fn substring_fallback_hits_products_only() {
        let index = index();
        // No entry is named exactly "pnc380", but the product matches by
        // substring; category/section entries never do
        assert_eq!(
            index.find_path_by_name("PNC380"),
            Some("product/hytera-pnc380")
        );
    }

    #[test]
    fn underscored_subsection_reads_as_spaces() {
        let index = index();
        assert_eq!(
            index.find_path_by_name("handset terminals"),
            Some("products/two-way-radios/tetra-system")
        );
    }

    #[test]
    fn duplicate_seed_labels_index_once() {
        // "Hytera ACCESSNETr-T IP SMART.png" appears twice under TETRA base
        // stations; the walk indexes it exactly once
        let index = index();
        assert!(index.find_by_id("hytera-accessnetr-t-ip-smart").is_some());
    }
}
