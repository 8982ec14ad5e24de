//! Repository Module
//!
//! CRUD over the fixed-key catalog store. Repositories own the JSON
//! (de)serialization of the stored collections and the media vault rewrite of
//! inline payloads. Repositories never cache: every read goes back to
//! storage, so no derived state can go stale relative to it.

use chrono::Utc;
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

use super::models::{CustomProduct, CustomProductSubmission, UserSession};
use super::storage::{
    AUTH_SESSION_KEY, CUSTOM_PRODUCTS_KEY, CatalogStorage, StorageError,
};

/// URI scheme of content-addressed payloads in the media table
pub const MEDIA_URI_PREFIX: &str = "media://sha256/";

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// Custom Product Repository
// =============================================================================

/// Repository for admin-authored product records
///
/// The whole collection is stored as one JSON array under a fixed key, exactly
/// like the original client-side store. Upsert identity is the
/// case-insensitive product name; the generated id only serves deletion.
#[derive(Clone)]
pub struct CustomProductRepository {
    storage: CatalogStorage,
}

impl CustomProductRepository {
    pub fn new(storage: CatalogStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &CatalogStorage {
        &self.storage
    }

    /// Load the full collection.
    ///
    /// A corrupt stored value is logged and treated as an empty collection
    /// rather than poisoning every catalog read.
    pub fn list(&self) -> RepoResult<Vec<CustomProduct>> {
        let Some(bytes) = self.storage.get_value(CUSTOM_PRODUCTS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_slice(&bytes) {
            Ok(products) => Ok(products),
            Err(err) => {
                tracing::error!(error = %err, "failed to parse stored custom products");
                Ok(Vec::new())
            }
        }
    }

    /// Upsert a record by case-insensitive name.
    ///
    /// Inline data-URI payloads are decoded into the media vault before the
    /// collection is written; the record keeps a `media://sha256/<hex>`
    /// reference in the same logical field. The collection write and the new
    /// blobs share one capacity-checked transaction, so a
    /// [`StorageError::CapacityExceeded`] failure leaves both untouched.
    pub fn save(&self, submission: CustomProductSubmission) -> RepoResult<CustomProduct> {
        let mut current = self.list()?;

        let existing_id = current
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(&submission.name))
            .map(|p| p.id.clone());

        let id = existing_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let mut record = submission.into_record(id, Utc::now().timestamp_millis());

        let mut new_blobs = Vec::new();
        for field in [
            &mut record.image_source,
            &mut record.brochure_source,
            &mut record.category_image,
            &mut record.section_image,
        ] {
            intern_inline_payload(field, &mut new_blobs)?;
        }

        match current
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(&record.name))
        {
            Some(idx) => current[idx] = record.clone(),
            None => current.push(record.clone()),
        }

        let json = serde_json::to_vec(&current).map_err(StorageError::from)?;
        self.storage
            .put_value_with_media(CUSTOM_PRODUCTS_KEY, &json, &new_blobs)?;
        self.prune_orphaned_media(&current)?;

        tracing::info!(name = %record.name, id = %record.id, "custom product saved");
        Ok(record)
    }

    /// Delete a record by generated id. Returns whether a record was removed.
    pub fn remove(&self, id: &str) -> RepoResult<bool> {
        let current = self.list()?;
        let before = current.len();
        let filtered: Vec<CustomProduct> =
            current.into_iter().filter(|p| p.id != id).collect();
        if filtered.len() == before {
            return Ok(false);
        }

        let json = serde_json::to_vec(&filtered).map_err(StorageError::from)?;
        self.storage.put_value(CUSTOM_PRODUCTS_KEY, &json)?;
        self.prune_orphaned_media(&filtered)?;

        tracing::info!(id, "custom product removed");
        Ok(true)
    }

    /// Find the override record for a raw catalog label: the label is
    /// extension-stripped, then compared case-sensitively against the record
    /// name.
    pub fn find_by_label(&self, label: &str) -> RepoResult<Option<CustomProduct>> {
        let products = self.list()?;
        Ok(products.into_iter().find(|p| p.matches_label(label)))
    }

    /// Resolve a `media://sha256/<hex>` reference to its stored bytes.
    pub fn media_bytes(&self, uri: &str) -> RepoResult<Option<Vec<u8>>> {
        let Some(digest) = uri.strip_prefix(MEDIA_URI_PREFIX) else {
            return Ok(None);
        };
        Ok(self.storage.get_media(digest)?)
    }

    /// Drop vault blobs no longer referenced by any record field.
    fn prune_orphaned_media(&self, records: &[CustomProduct]) -> RepoResult<()> {
        let live: std::collections::HashSet<String> = records
            .iter()
            .flat_map(|p| {
                [
                    p.image_source.as_deref(),
                    p.brochure_source.as_deref(),
                    p.category_image.as_deref(),
                    p.section_image.as_deref(),
                ]
            })
            .flatten()
            .filter_map(|uri| uri.strip_prefix(MEDIA_URI_PREFIX))
            .map(str::to_string)
            .collect();

        let pruned = self.storage.retain_media(|digest| live.contains(digest))?;
        if pruned > 0 {
            tracing::debug!(pruned, "orphaned media blobs removed");
        }
        Ok(())
    }
}

/// Decode a base64 data-URI field into the vault, rewriting the field to a
/// `media://sha256/<hex>` reference. Non-data-URI values (absolute URLs,
/// existing media references, non-base64 data URIs) pass through untouched.
fn intern_inline_payload(
    field: &mut Option<String>,
    blobs: &mut Vec<(String, Vec<u8>)>,
) -> RepoResult<()> {
    use base64::Engine as _;

    let Some(value) = field.as_deref() else {
        return Ok(());
    };
    if !value.starts_with("data:") {
        return Ok(());
    }
    let Some((_, payload)) = value.split_once(";base64,") else {
        // `data:` URIs without a base64 payload are small enough to stay inline
        return Ok(());
    };

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| RepoError::Validation(format!("invalid inline payload: {e}")))?;

    let digest = hex::encode(Sha256::digest(&bytes));
    *field = Some(format!("{MEDIA_URI_PREFIX}{digest}"));
    blobs.push((digest, bytes));
    Ok(())
}

// =============================================================================
// Session Repository
// =============================================================================

/// Repository for the single local auth session record
#[derive(Clone)]
pub struct SessionRepository {
    storage: CatalogStorage,
}

impl SessionRepository {
    pub fn new(storage: CatalogStorage) -> Self {
        Self { storage }
    }

    /// Load the stored session, if any. Corrupt records read as no session.
    pub fn get(&self) -> RepoResult<Option<UserSession>> {
        let Some(bytes) = self.storage.get_value(AUTH_SESSION_KEY)? else {
            return Ok(None);
        };
        Ok(serde_json::from_slice(&bytes).ok())
    }

    /// Persist the session record.
    pub fn set(&self, session: &UserSession) -> RepoResult<()> {
        let json = serde_json::to_vec(session).map_err(StorageError::from)?;
        self.storage.put_value(AUTH_SESSION_KEY, &json)?;
        Ok(())
    }

    /// Remove the session record.
    pub fn clear(&self) -> RepoResult<()> {
        self.storage.remove_value(AUTH_SESSION_KEY)?;
        Ok(())
    }
}
