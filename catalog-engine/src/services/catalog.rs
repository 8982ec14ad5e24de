//! Catalog Service - unified catalog access with memoized derived state
//!
//! The single entry point the page layer reads through. Owns storage, the
//! repositories, and the lazily built merged catalog / location index /
//! search index. Every successful write drops all three caches; derived
//! state is always rebuilt whole from storage, never patched incrementally.
//!
//! Execution is single-threaded and synchronous; the locks exist so the
//! memoized state has a clear lifecycle (empty → built on first read →
//! invalidated on write), not for parallelism.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::{merged_catalog, seed_catalog};
use crate::core::Config;
use crate::db::models::{Catalog, CustomProduct, CustomProductSubmission, ProductDetails, ProductLocation, ProductSearchResult};
use crate::db::repository::CustomProductRepository;
use crate::db::storage::CatalogStorage;
use crate::index::{LocationIndex, SearchFilters, SearchIndex, SortOption};
use crate::services::detail::DetailResolver;
use crate::services::media::{MediaResolver, NOT_FOUND_IMAGE};
use crate::utils::AppResult;

/// Unified catalog service
pub struct CatalogService {
    products: CustomProductRepository,
    media: MediaResolver,
    detail: DetailResolver,

    /// Merged catalog cache, rebuilt whole after every write
    merged: RwLock<Option<Arc<Catalog>>>,
    /// Location index cache
    location: RwLock<Option<Arc<LocationIndex>>>,
    /// Search index cache
    search: RwLock<Option<Arc<SearchIndex>>>,
}

impl CatalogService {
    /// Open the service over the configured on-disk store.
    pub fn open(config: &Config) -> AppResult<Self> {
        if !config.work_dir.is_empty() {
            std::fs::create_dir_all(&config.work_dir)
                .map_err(|e| anyhow::anyhow!("failed to create work dir: {e}"))?;
        }
        let storage =
            CatalogStorage::open(config.storage_path(), config.storage_capacity_bytes)?;
        Ok(Self::with_storage(config, storage))
    }

    /// Build the service over an already opened store (tests, ephemeral
    /// sessions).
    pub fn with_storage(config: &Config, storage: CatalogStorage) -> Self {
        let products = CustomProductRepository::new(storage);
        Self {
            media: MediaResolver::new(products.clone(), config),
            detail: DetailResolver::new(products.clone(), config),
            products,
            merged: RwLock::new(None),
            location: RwLock::new(None),
            search: RwLock::new(None),
        }
    }

    pub fn products(&self) -> &CustomProductRepository {
        &self.products
    }

    pub fn media(&self) -> &MediaResolver {
        &self.media
    }

    // ========== Reads ==========

    /// The merged catalog: seed plus every stored custom record.
    pub fn merged_catalog(&self) -> AppResult<Arc<Catalog>> {
        if let Some(catalog) = self.merged.read().clone() {
            return Ok(catalog);
        }

        let customs = self.products.list()?;
        let built = Arc::new(merged_catalog(seed_catalog(), &customs));
        *self.merged.write() = Some(built.clone());
        tracing::debug!(categories = built.len(), "merged catalog rebuilt");
        Ok(built)
    }

    /// The location index over the current merged catalog.
    pub fn location_index(&self) -> AppResult<Arc<LocationIndex>> {
        if let Some(index) = self.location.read().clone() {
            return Ok(index);
        }

        let catalog = self.merged_catalog()?;
        let built = Arc::new(LocationIndex::build(&catalog));
        *self.location.write() = Some(built.clone());
        tracing::debug!(products = built.product_count(), "location index rebuilt");
        Ok(built)
    }

    /// The search index over the current merged catalog.
    pub fn search_index(&self) -> AppResult<Arc<SearchIndex>> {
        if let Some(index) = self.search.read().clone() {
            return Ok(index);
        }

        let catalog = self.merged_catalog()?;
        let built = Arc::new(SearchIndex::build(&catalog, |cat, sec, sub, label| {
            self.media.product_image_path(cat, sec, sub, label)
        }));
        *self.search.write() = Some(built.clone());
        tracing::debug!(entries = built.len(), "search index rebuilt");
        Ok(built)
    }

    /// Substring search with faceted filters and ordering.
    pub fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
        sort: SortOption,
    ) -> AppResult<Vec<ProductSearchResult>> {
        Ok(self.search_index()?.search(query, filters, sort))
    }

    /// Resolve a product id to its hierarchical address.
    pub fn find_location_by_id(&self, product_id: &str) -> AppResult<Option<ProductLocation>> {
        Ok(self.location_index()?.find_by_id(product_id).cloned())
    }

    /// Resolve free text (product, category, section or subsection name) to a
    /// route path.
    pub fn resolve_path(&self, name: &str) -> AppResult<Option<String>> {
        Ok(self
            .location_index()?
            .find_path_by_name(name)
            .map(str::to_string))
    }

    /// Fully resolved detail record for a product id.
    pub fn product_details(&self, product_id: &str) -> AppResult<Option<ProductDetails>> {
        let index = self.location_index()?;
        Ok(self.detail.resolve(&index, product_id))
    }

    /// Image URI for a product id, or the shared placeholder when the id is
    /// unknown.
    pub fn product_image_by_id(&self, product_id: &str) -> AppResult<String> {
        let index = self.location_index()?;
        Ok(match index.find_by_id(product_id) {
            Some(location) => self.media.image_for_location(location),
            None => NOT_FOUND_IMAGE.to_string(),
        })
    }

    /// The raw stored custom records (admin listing).
    pub fn custom_products(&self) -> AppResult<Vec<CustomProduct>> {
        Ok(self.products.list()?)
    }

    // ========== Writes ==========

    /// Upsert a custom record, then drop every memoized index.
    pub fn save_custom_product(
        &self,
        submission: CustomProductSubmission,
    ) -> AppResult<CustomProduct> {
        let record = self.products.save(submission)?;
        self.invalidate();
        Ok(record)
    }

    /// Remove a custom record by generated id, then drop every memoized
    /// index. Returns whether a record was removed.
    pub fn remove_custom_product(&self, id: &str) -> AppResult<bool> {
        let removed = self.products.remove(id)?;
        if removed {
            self.invalidate();
        }
        Ok(removed)
    }

    /// Drop all memoized derived state. The next read rebuilds from storage.
    pub fn invalidate(&self) {
        *self.merged.write() = None;
        *self.location.write() = None;
        *self.search.write() = None;
        tracing::debug!("catalog caches invalidated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::CustomProductSubmission;

    fn service() -> CatalogService {
        let config = Config {
            work_dir: String::new(),
            storage_file: String::new(),
            storage_capacity_bytes: 5 * 1024 * 1024,
            docs_root: "/brochures".to_string(),
            media_root: "/Two-way-Radios".to_string(),
            admin_access_key: "vkt2026".to_string(),
        };
        let storage = CatalogStorage::open_in_memory(config.storage_capacity_bytes).unwrap();
        CatalogService::with_storage(&config, storage)
    }

    fn submission(name: &str) -> CustomProductSubmission {
        CustomProductSubmission {
            name: name.to_string(),
            category: "Two-Way Radios".to_string(),
            section: "DMR System".to_string(),
            subsection: "Handsets".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn write_invalidates_derived_state() {
        let service = service();

        let before = service.search("Acme", &SearchFilters::default(), SortOption::Relevance);
        assert!(before.unwrap().is_empty());

        service.save_custom_product(submission("Acme Radio X1")).unwrap();

        let after = service
            .search("Acme", &SearchFilters::default(), SortOption::Relevance)
            .unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, "acme-radio-x1");

        let location = service.find_location_by_id("acme-radio-x1").unwrap().unwrap();
        assert_eq!(location.subsection_name, "Handsets");
    }

    #[test]
    fn reads_are_memoized_until_write() {
        let service = service();
        let first = service.merged_catalog().unwrap();
        let second = service.merged_catalog().unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        service.save_custom_product(submission("Acme Radio X1")).unwrap();
        let third = service.merged_catalog().unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
    }

    #[test]
    fn remove_restores_seed_view() {
        let service = service();
        let record = service.save_custom_product(submission("Acme Radio X1")).unwrap();
        assert!(service.find_location_by_id("acme-radio-x1").unwrap().is_some());

        assert!(service.remove_custom_product(&record.id).unwrap());
        assert!(service.find_location_by_id("acme-radio-x1").unwrap().is_none());
    }
}
