//! Search Index
//!
//! A flattened, deduplicated list of every product with its hierarchical
//! context and resolved image URL. Query/filter/sort never mutate the index,
//! so repeated calls with identical inputs return identical orderings.

use std::collections::HashSet;
use std::str::FromStr;

use crate::db::models::{Catalog, ProductSearchResult};
use crate::slug;

/// Faceted search filters; provided facets compose with logical AND.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub category: Option<String>,
    pub section: Option<String>,
    pub subsection: Option<String>,
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Catalog walk order (no scoring)
    #[default]
    Relevance,
    NameAsc,
    NameDesc,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
        }
    }
}

#[derive(Debug)]
pub struct ParseSortOptionError;

impl FromStr for SortOption {
    type Err = ParseSortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortOption::Relevance),
            "name-asc" => Ok(SortOption::NameAsc),
            "name-desc" => Ok(SortOption::NameDesc),
            _ => Err(ParseSortOptionError),
        }
    }
}

/// Denormalized product index over one merged-catalog generation
#[derive(Debug, Default)]
pub struct SearchIndex {
    entries: Vec<ProductSearchResult>,
}

impl SearchIndex {
    /// Flatten the catalog into one entry per unique product id, resolving
    /// each entry's image through the supplied resolver.
    pub fn build<F>(catalog: &Catalog, resolve_image: F) -> Self
    where
        F: Fn(&str, &str, &str, &str) -> String,
    {
        let mut entries = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (category_title, category) in catalog {
            for section in &category.sections {
                for subsection in &section.subsections {
                    for label in &subsection.products {
                        let name = slug::strip_extension(label).to_string();
                        let id = slug::slugify(&name);
                        if !seen.insert(id.clone()) {
                            continue;
                        }
                        let image_url = resolve_image(
                            category_title,
                            &section.title,
                            &subsection.name,
                            label,
                        );
                        entries.push(ProductSearchResult {
                            id,
                            name,
                            image_url,
                            category: category_title.clone(),
                            section: section.title.clone(),
                            subsection: subsection.name.clone(),
                        });
                    }
                }
            }
        }

        Self { entries }
    }

    /// Substring query, AND-composed facet filters, then ordering.
    pub fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
        sort: SortOption,
    ) -> Vec<ProductSearchResult> {
        let query = query.trim().to_lowercase();

        let mut results: Vec<ProductSearchResult> = self
            .entries
            .iter()
            .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
            .filter(|p| {
                filters
                    .category
                    .as_ref()
                    .is_none_or(|c| &p.category == c)
            })
            .filter(|p| filters.section.as_ref().is_none_or(|s| &p.section == s))
            .filter(|p| {
                filters
                    .subsection
                    .as_ref()
                    .is_none_or(|s| &p.subsection == s)
            })
            .cloned()
            .collect();

        match sort {
            SortOption::Relevance => {}
            SortOption::NameAsc => results.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOption::NameDesc => results.sort_by(|a, b| b.name.cmp(&a.name)),
        }

        results
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
