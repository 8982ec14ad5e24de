//! Assistant Tool Boundary
//!
//! The two operations the conversational assistant may call. The dialogue
//! loop, tool-call protocol and language generation live outside the engine;
//! only these lookups are part of it.

use std::sync::Arc;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::catalog::brochure_entries;
use crate::core::Config;
use crate::services::catalog::CatalogService;
use crate::utils::AppResult;

/// Characters escaped in brochure filenames, matching JS
/// `encodeURIComponent` so the emitted links stay byte-identical to the
/// original site's.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Tool implementations backing the assistant
#[derive(Clone)]
pub struct AssistantTools {
    catalog: Arc<CatalogService>,
    docs_root: String,
}

impl AssistantTools {
    pub fn new(catalog: Arc<CatalogService>, config: &Config) -> Self {
        Self {
            catalog,
            docs_root: config.docs_root.clone(),
        }
    }

    /// Fuzzy brochure lookup by product name.
    ///
    /// Both sides are lowercased and stripped of spaces/hyphens before a
    /// substring comparison over the brochure table; the first match wins.
    /// Returns a percent-encoded URL under the docs root, or `None`.
    pub fn find_product_brochure(&self, product_name: &str) -> Option<String> {
        let needle: String = product_name
            .to_lowercase()
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect();
        if needle.is_empty() {
            return None;
        }

        brochure_entries()
            .find(|(id, _)| {
                let simplified: String =
                    id.chars().filter(|c| *c != ' ' && *c != '-').collect();
                simplified.contains(&needle)
            })
            .map(|(_, file)| {
                format!(
                    "{}/{}",
                    self.docs_root,
                    utf8_percent_encode(file, COMPONENT)
                )
            })
    }

    /// Resolve free text to a route path on the site.
    pub fn navigate_to_product_page(&self, name: &str) -> AppResult<Option<String>> {
        self.catalog.resolve_path(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::storage::CatalogStorage;

    fn tools() -> AssistantTools {
        let config = Config {
            work_dir: String::new(),
            storage_file: String::new(),
            storage_capacity_bytes: 5 * 1024 * 1024,
            docs_root: "/brochures".to_string(),
            media_root: "/Two-way-Radios".to_string(),
            admin_access_key: String::new(),
        };
        let storage = CatalogStorage::open_in_memory(config.storage_capacity_bytes).unwrap();
        let catalog = Arc::new(CatalogService::with_storage(&config, storage));
        AssistantTools::new(catalog, &config)
    }

    #[test]
    fn fuzzy_match_ignores_spaces_and_hyphens() {
        let tools = tools();
        assert_eq!(
            tools.find_product_brochure("Hytera HP788"),
            Some("/brochures/HP%20788%20Brochure.pdf".to_string())
        );
        assert_eq!(
            tools.find_product_brochure("hp 688"),
            Some("/brochures/HP688.pdf".to_string())
        );
    }

    #[test]
    fn unknown_product_returns_none() {
        let tools = tools();
        assert_eq!(tools.find_product_brochure("Walkman"), None);
        assert_eq!(tools.find_product_brochure(""), None);
    }

    #[test]
    fn navigation_delegates_to_free_text_resolver() {
        let tools = tools();
        assert_eq!(
            tools.navigate_to_product_page("TETRA System").unwrap(),
            Some("products/two-way-radios/tetra-system".to_string())
        );
        assert_eq!(tools.navigate_to_product_page("Walkman").unwrap(), None);
    }
}
