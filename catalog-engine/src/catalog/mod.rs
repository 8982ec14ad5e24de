//! Catalog Module
//!
//! Static seed data, curated detail records, the brochure table, and the
//! merge fold that layers custom records over the seed.

pub mod brochures;
pub mod curated;
pub mod merge;
pub mod seed;

pub use brochures::{brochure_entries, brochure_file};
pub use curated::curated_details;
pub use merge::merged_catalog;
pub use seed::seed_catalog;
