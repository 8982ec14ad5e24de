//! Media Resolution
//!
//! Turns a catalog placement tuple into a resolvable image URI. Precedence:
//! custom override payload, then a label that already is a URI, then a path
//! constructed from the display-name → folder-name remap tables.

use crate::core::Config;
use crate::db::models::ProductLocation;
use crate::db::repository::{CustomProductRepository, MEDIA_URI_PREFIX};

/// Returned by the by-id lookup when the id resolves to nothing.
pub const NOT_FOUND_IMAGE: &str = "https://placehold.co/300x300/e2e8f0/94a3b8?text=Not+Found";

/// Image/brochure resolution boundary
#[derive(Clone)]
pub struct MediaResolver {
    products: CustomProductRepository,
    media_root: String,
}

impl MediaResolver {
    pub fn new(products: CustomProductRepository, config: &Config) -> Self {
        Self {
            products,
            media_root: config.media_root.clone(),
        }
    }

    /// Resolve the image URI for a product label within its placement.
    pub fn product_image_path(
        &self,
        category_title: &str,
        section_title: &str,
        subsection_name: &str,
        label: &str,
    ) -> String {
        // 1. Custom record with an uploaded image or direct URL
        match self.products.find_by_label(label) {
            Ok(Some(custom)) => {
                if let Some(source) = custom.image_source {
                    return source;
                }
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, label, "image override lookup failed");
            }
        }

        // 2. The label itself is already a resolvable URI (legacy records)
        if is_uri(label) {
            return label.to_string();
        }

        // 3. Constructed path through the folder remaps
        format!(
            "{}/{}/{}/{}/{}",
            self.media_root,
            category_folder(category_title),
            section_folder(section_title),
            subsection_folder(subsection_name),
            label
        )
    }

    /// Resolve an image URI from a resolved location.
    pub fn image_for_location(&self, location: &ProductLocation) -> String {
        self.product_image_path(
            &location.category_title,
            &location.section_title,
            &location.subsection_name,
            &location.file_name,
        )
    }
}

fn is_uri(label: &str) -> bool {
    label.starts_with("http://")
        || label.starts_with("https://")
        || label.starts_with("data:")
        || label.starts_with(MEDIA_URI_PREFIX)
}

// The published asset tree predates the display names; these remaps cover the
// spots where the two diverge. Unlisted names map to themselves.

fn category_folder(title: &str) -> &str {
    match title {
        "Two-Way Radios" => "Two way Radios",
        other => other,
    }
}

fn section_folder(title: &str) -> &str {
    match title {
        "DMR System" => "DMR",
        "TETRA System" => "TETRA_System",
        other => other,
    }
}

fn subsection_folder(name: &str) -> &str {
    match name {
        "Handsets" => "Handset",
        "Airmob" => "AirMob",
        "Skyphone" => "Skyfone",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::CustomProductSubmission;
    use crate::db::storage::CatalogStorage;

    fn resolver() -> (MediaResolver, CustomProductRepository) {
        let storage = CatalogStorage::open_in_memory(5 * 1024 * 1024).unwrap();
        let repo = CustomProductRepository::new(storage);
        let config = Config {
            work_dir: String::new(),
            storage_file: String::new(),
            storage_capacity_bytes: 0,
            docs_root: "/brochures".to_string(),
            media_root: "/Two-way-Radios".to_string(),
            admin_access_key: String::new(),
        };
        (MediaResolver::new(repo.clone(), &config), repo)
    }

    #[test]
    fn constructed_path_uses_folder_remaps() {
        let (media, _) = resolver();
        let path = media.product_image_path(
            "Two-Way Radios",
            "DMR System",
            "Handsets",
            "Hytera HP788.png",
        );
        assert_eq!(
            path,
            "/Two-way-Radios/Two way Radios/DMR/Handset/Hytera HP788.png"
        );
    }

    #[test]
    fn uri_labels_pass_through() {
        let (media, _) = resolver();
        let url = "https://example.com/radio.png";
        assert_eq!(media.product_image_path("a", "b", "c", url), url);
    }

    #[test]
    fn custom_override_wins() {
        let (media, repo) = resolver();
        repo.save(CustomProductSubmission {
            name: "Hytera HP788".to_string(),
            category: "Two-Way Radios".to_string(),
            section: "DMR System".to_string(),
            subsection: "Handsets".to_string(),
            image_source: Some("https://cdn.example.com/hp788.png".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            media.product_image_path("Two-Way Radios", "DMR System", "Handsets", "Hytera HP788.png"),
            "https://cdn.example.com/hp788.png"
        );
    }
}
