//! Database Layer
//!
//! Embedded redb storage plus the repositories over it. The store mirrors the
//! original client-side key-value store: two fixed JSON keys and a
//! content-addressed media table for decoded inline payloads.

pub mod models;
pub mod repository;
pub mod storage;

pub use repository::{CustomProductRepository, RepoError, RepoResult, SessionRepository};
pub use storage::{CatalogStorage, StorageError, StorageResult};
