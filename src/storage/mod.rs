//! Storage Layer - append-only in-memory tables
//!
//! The system of record is a single `MemoryStore` holding four tables:
//! - authors(id, name, avatar, bio, role, counters, social)
//! - categories(id, name, slug, description)
//! - articles(id, ..., author_id, category_id) with embedded author/category
//! - comments(id, content, created_at, article_id, author_id) with embedded author
//!
//! Ids come from per-kind counters. Nothing is updated or deleted once inserted.

pub mod ids;
pub mod tables;
pub mod resolver;
pub mod memory;

pub use ids::IdAllocator;
pub use tables::{Keyed, Table};
pub use memory::{MemoryStore, StoreStats};
