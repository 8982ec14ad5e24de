//! Catalog Merge
//!
//! Folds the custom product collection into a deep clone of the seed catalog.
//! Pure function of its inputs; the engine facade decides when to recompute.

use crate::db::models::{Catalog, Category, CustomProduct, Section, Subsection};
use crate::slug;

/// Image used for sections created by a custom record that carries no image
/// of its own.
const NEW_SECTION_PLACEHOLDER: &str = "https://placehold.co/300x200?text=New+Section";

/// Icon used for categories created by a custom record.
const NEW_CATEGORY_ICON: &str = "cube-transparent";

/// Merge the custom records into a clone of the seed catalog.
///
/// Placement paths are created on demand; the first record to create a node
/// donates its image. A record's product label is appended unless an existing
/// label in the target subsection resolves to the same product id, in which
/// case the later one is dropped silently.
pub fn merged_catalog(seed: &Catalog, customs: &[CustomProduct]) -> Catalog {
    let mut catalog = seed.clone();

    for product in customs {
        if product.category.is_empty() || product.section.is_empty() || product.subsection.is_empty()
        {
            continue;
        }

        let category = catalog
            .entry(product.category.clone())
            .or_insert_with(|| Category {
                icon: NEW_CATEGORY_ICON.to_string(),
                image: product.category_image.clone(),
                sections: Vec::new(),
            });

        let section = match category
            .sections
            .iter_mut()
            .find(|s| s.title == product.section)
        {
            Some(section) => section,
            None => {
                category.sections.push(Section {
                    title: product.section.clone(),
                    image: product
                        .section_image
                        .clone()
                        .or_else(|| product.image_source.clone())
                        .or_else(|| Some(NEW_SECTION_PLACEHOLDER.to_string())),
                    subsections: Vec::new(),
                });
                category.sections.last_mut().unwrap()
            }
        };

        let subsection = match section
            .subsections
            .iter_mut()
            .find(|sub| sub.name == product.subsection)
        {
            Some(subsection) => subsection,
            None => {
                section.subsections.push(Subsection {
                    name: product.subsection.clone(),
                    products: Vec::new(),
                });
                section.subsections.last_mut().unwrap()
            }
        };

        let product_slug = slug::slugify(&product.name);
        let exists = subsection
            .products
            .iter()
            .any(|label| slug::product_id(label) == product_slug);
        if !exists {
            subsection.products.push(product.name.clone());
        }
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_catalog;

    fn custom(name: &str, category: &str, section: &str, subsection: &str) -> CustomProduct {
        CustomProduct {
            id: "test-id".to_string(),
            name: name.to_string(),
            category: category.to_string(),
            section: section.to_string(),
            subsection: subsection.to_string(),
            image_source: None,
            brochure_source: None,
            tagline: None,
            classification: None,
            description: None,
            specifications: None,
            highlights: None,
            standard_accessories: None,
            related_products: None,
            category_image: None,
            section_image: None,
            timestamp: 0,
        }
    }

    #[test]
    fn merge_without_customs_is_the_seed() {
        let merged = merged_catalog(seed_catalog(), &[]);
        assert_eq!(merged.len(), seed_catalog().len());
    }

    #[test]
    fn custom_product_lands_under_existing_path() {
        let record = custom("Acme Radio X1", "Two-Way Radios", "DMR System", "Handsets");
        let merged = merged_catalog(seed_catalog(), &[record]);

        let handsets = &merged["Two-Way Radios"].sections[0].subsections[0];
        assert!(handsets.products.iter().any(|p| p == "Acme Radio X1"));
    }

    #[test]
    fn missing_path_is_created_with_placeholders() {
        let record = custom("Sat Phone Z", "Satellite", "Phones", "Handheld");
        let merged = merged_catalog(seed_catalog(), &[record]);

        let category = &merged["Satellite"];
        assert_eq!(category.icon, NEW_CATEGORY_ICON);
        assert_eq!(category.sections[0].title, "Phones");
        assert_eq!(
            category.sections[0].image.as_deref(),
            Some(NEW_SECTION_PLACEHOLDER)
        );
        assert_eq!(category.sections[0].subsections[0].products, vec!["Sat Phone Z"]);
    }

    #[test]
    fn slug_equal_label_is_dropped_silently() {
        // "Hytera HP788.png" already sits in DMR Handsets; the record name
        // slugifies to the same product id, so no second label appears.
        let record = custom("Hytera HP788", "Two-Way Radios", "DMR System", "Handsets");
        let merged = merged_catalog(seed_catalog(), &[record]);

        let handsets = &merged["Two-Way Radios"].sections[0].subsections[0];
        let matching: Vec<_> = handsets
            .products
            .iter()
            .filter(|label| crate::slug::product_id(label) == "hytera-hp788")
            .collect();
        assert_eq!(matching.len(), 1);
    }

    #[test]
    fn records_with_empty_placement_are_skipped() {
        let record = custom("Orphan", "", "DMR System", "Handsets");
        let merged = merged_catalog(seed_catalog(), &[record]);
        assert_eq!(merged.len(), seed_catalog().len());
    }
}
