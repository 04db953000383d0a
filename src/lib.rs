//! # Pressroom - Blog Content Store
//!
//! In-memory content store for a publishing blog, served as a JSON API.
//!
//! Pressroom provides:
//! - Entity model for authors, categories, articles and comments
//! - Append-only memory store with per-kind identity allocation
//! - Eager resolution of author/category references into embedded snapshots
//! - Query engine for slug, foreign-key and literal full-text lookups
//! - Fixture seed loader and an axum-based HTTP layer

pub mod model;
pub mod text;
pub mod storage;
pub mod query;
pub mod seed;
pub mod server;
pub mod config;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use model::{Article, Author, Category, Comment, EntityKind};
pub use storage::MemoryStore;
pub use query::QueryEngine;

/// Result type alias for Pressroom operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Pressroom operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{referrer} references {kind} {id}, which does not exist")]
    UnresolvedReference {
        referrer: EntityKind,
        kind: EntityKind,
        id: i64,
    },

    #[error("Duplicate {kind} slug: {slug}")]
    DuplicateSlug { kind: EntityKind, slug: String },

    #[error("Seed error: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
