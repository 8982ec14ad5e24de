//! Admin Mutation Surface
//!
//! The only writer of the catalog store. Validates placement fields before
//! any storage access, delegates to the catalog service (which invalidates
//! all derived state on success), and exposes the seed-promotion escape
//! hatch that serializes the merged catalog back into loadable source form.

use std::sync::Arc;

use crate::db::models::{CustomProduct, CustomProductSubmission};
use crate::services::catalog::CatalogService;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::AppResult;

/// Fixed preamble of the exported source file, matching the seed module the
/// export is meant to replace.
const EXPORT_HEADER: &str = r#"import { NavItem, ProductsData } from './types';

export const navItems: NavItem[] = [
  { name: 'Home', path: 'home', subItems: [] },
  { name: 'Products', path: 'products', subItems: [] },
  { name: 'Solutions', path: 'solutions', subItems: [] },
  { name: 'Support', path: 'support', subItems: [] },
  { name: 'About Us', path: 'about', subItems: [] },
];
"#;

/// Admin surface over the catalog service
#[derive(Clone)]
pub struct AdminService {
    catalog: Arc<CatalogService>,
}

impl AdminService {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self { catalog }
    }

    /// Validate and upsert a custom product record.
    ///
    /// Placement fields (name, category, section, subsection) are required;
    /// everything else is optional. A capacity failure surfaces as
    /// [`crate::utils::AppError::CapacityExceeded`] with the stored
    /// collection unchanged, so the caller can retry with a smaller payload.
    pub fn add_or_update_product(
        &self,
        submission: CustomProductSubmission,
    ) -> AppResult<CustomProduct> {
        validate_required_text(&submission.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&submission.category, "category", MAX_NAME_LEN)?;
        validate_required_text(&submission.section, "section", MAX_NAME_LEN)?;
        validate_required_text(&submission.subsection, "subsection", MAX_NAME_LEN)?;
        validate_optional_text(&submission.tagline, "tagline", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&submission.classification, "classification", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&submission.description, "description", MAX_NOTE_LEN)?;

        self.catalog.save_custom_product(submission)
    }

    /// Remove a custom record by generated id. Returns whether anything was
    /// removed.
    pub fn remove_product(&self, id: &str) -> AppResult<bool> {
        self.catalog.remove_custom_product(id)
    }

    /// Serialize the current merged catalog into loadable TypeScript source.
    ///
    /// Escape hatch for promoting client-local records into the static seed;
    /// no runtime contract beyond faithful serialization.
    pub fn export_catalog_as_code(&self) -> AppResult<String> {
        let catalog = self.catalog.merged_catalog()?;
        let data = serde_json::to_string_pretty(catalog.as_ref())
            .map_err(|e| anyhow::anyhow!("catalog serialization failed: {e}"))?;

        Ok(format!(
            "{EXPORT_HEADER}\nexport const productsData: ProductsData = {data};\n"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::db::storage::CatalogStorage;
    use crate::utils::AppError;

    fn admin() -> AdminService {
        let config = Config {
            work_dir: String::new(),
            storage_file: String::new(),
            storage_capacity_bytes: 5 * 1024 * 1024,
            docs_root: "/brochures".to_string(),
            media_root: "/Two-way-Radios".to_string(),
            admin_access_key: "vkt2026".to_string(),
        };
        let storage = CatalogStorage::open_in_memory(config.storage_capacity_bytes).unwrap();
        AdminService::new(Arc::new(CatalogService::with_storage(&config, storage)))
    }

    #[test]
    fn placement_fields_are_required() {
        let admin = admin();
        let submission = CustomProductSubmission {
            name: "Acme Radio X1".to_string(),
            category: "Two-Way Radios".to_string(),
            section: "  ".to_string(),
            subsection: "Handsets".to_string(),
            ..Default::default()
        };

        let err = admin.add_or_update_product(submission).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn export_contains_merged_catalog() {
        let admin = admin();
        admin
            .add_or_update_product(CustomProductSubmission {
                name: "Acme Radio X1".to_string(),
                category: "Two-Way Radios".to_string(),
                section: "DMR System".to_string(),
                subsection: "Handsets".to_string(),
                ..Default::default()
            })
            .unwrap();

        let code = admin.export_catalog_as_code().unwrap();
        assert!(code.starts_with("import { NavItem, ProductsData }"));
        assert!(code.contains("export const productsData: ProductsData ="));
        assert!(code.contains("Acme Radio X1"));
        assert!(code.contains("Two-Way Radios"));
    }
}
