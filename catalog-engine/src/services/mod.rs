//! Services
//!
//! The engine facade and the boundaries built on top of it: detail
//! resolution, media resolution, the admin mutation surface, the auth
//! session, and the assistant tool surface.

pub mod admin;
pub mod assistant;
pub mod auth;
pub mod catalog;
pub mod detail;
pub mod media;

pub use admin::AdminService;
pub use assistant::AssistantTools;
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use detail::DetailResolver;
pub use media::{MediaResolver, NOT_FOUND_IMAGE};
