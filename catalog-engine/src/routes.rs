//! Route Surface
//!
//! Hash-fragment routes: `product/<id>`, `products/<categorySlug>[/<sectionSlug>]`,
//! plus bare page names. Not versioned; parse and render round-trip.

use std::fmt::Display;

/// Parsed hash-fragment route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Catalog browse pages, optionally narrowed to a category and section
    Products {
        category: Option<String>,
        section: Option<String>,
    },
    /// A product detail page by flat product id
    Product { id: String },
    /// Any other static page (`about`, `support`, `admin-login`, ...)
    Page(String),
}

impl Route {
    /// Parse a location hash fragment. Leading `#` and `/` are tolerated;
    /// anything unrecognized is a static page name.
    pub fn parse(fragment: &str) -> Route {
        let fragment = fragment.trim_start_matches('#').trim_matches('/');
        if fragment.is_empty() || fragment == "home" {
            return Route::Home;
        }

        let mut parts = fragment.split('/');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("product"), Some(id), None, _) => Route::Product { id: id.to_string() },
            (Some("products"), category, section, None) => Route::Products {
                category: category.map(str::to_string),
                section: section.map(str::to_string),
            },
            _ => Route::Page(fragment.to_string()),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Home => write!(f, "home"),
            Route::Products {
                category: None, ..
            } => write!(f, "products"),
            Route::Products {
                category: Some(category),
                section: None,
            } => write!(f, "products/{category}"),
            Route::Products {
                category: Some(category),
                section: Some(section),
            } => write!(f, "products/{category}/{section}"),
            Route::Product { id } => write!(f, "product/{id}"),
            Route::Page(name) => write!(f, "{name}"),
        }
    }
}
