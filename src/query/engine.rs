//! Query engine implementation
//!
//! Provides the read side of the store:
//! - Lookups by id and by slug
//! - Article filters by category slug and author id
//! - Literal full-text search over articles and their embedded rows
//! - Comment listing per article
//!
//! Every operation is a linear scan returning owned rows in creation order.
//! Single-row lookups return `None` when nothing matches; filters with an
//! unknown key return an empty vector.

use crate::model::{Article, Author, Category, Comment};
use crate::query::SearchMatcher;
use crate::storage::MemoryStore;

/// Number of related articles returned when the caller gives no limit
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Read-only query engine over a `MemoryStore`
pub struct QueryEngine<'a> {
    store: &'a MemoryStore,
}

impl<'a> QueryEngine<'a> {
    /// Create a new query engine
    pub fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    // ========== Articles ==========

    pub fn get_all_articles(&self) -> Vec<Article> {
        self.store.articles().all()
    }

    pub fn get_article_by_id(&self, id: i64) -> Option<Article> {
        self.store.articles().get(id).cloned()
    }

    /// Exact, case-sensitive slug lookup
    pub fn get_article_by_slug(&self, slug: &str) -> Option<Article> {
        self.store.articles().find(|a| a.slug == slug).cloned()
    }

    /// Articles in the category with `category_slug`; empty if it does not exist
    pub fn get_articles_by_category(&self, category_slug: &str) -> Vec<Article> {
        if self.get_category_by_slug(category_slug).is_none() {
            return Vec::new();
        }

        self.store
            .articles()
            .filter(|a| a.category.slug == category_slug)
    }

    /// Articles written by `author_id`. The author itself is not checked.
    pub fn get_articles_by_author_id(&self, author_id: i64) -> Vec<Article> {
        self.store.articles().filter(|a| a.author.id == author_id)
    }

    /// Case-insensitive literal search over title, excerpt, content, author
    /// name and category name. An empty query matches every article.
    pub fn search_articles(&self, query: &str) -> Vec<Article> {
        let matcher = SearchMatcher::new(query);
        let results = self.store.articles().filter(|a| matcher.matches_article(a));

        tracing::debug!("Search matched {} articles", results.len());
        results
    }

    /// The first article in creation order. The `is_featured` flag plays no part.
    pub fn get_featured_article(&self) -> Option<Article> {
        self.store.articles().iter().next().cloned()
    }

    /// Every other article, in creation order, at most `limit` of them.
    ///
    /// Returns `None` when `slug` names no article.
    pub fn get_related_articles(&self, slug: &str, limit: usize) -> Option<Vec<Article>> {
        let article = self.get_article_by_slug(slug)?;

        let related = self
            .store
            .articles()
            .iter()
            .filter(|a| a.id != article.id)
            .take(limit)
            .cloned()
            .collect();
        Some(related)
    }

    // ========== Comments ==========

    /// Comments on `article_id`. The article itself is not checked.
    pub fn get_comments_by_article_id(&self, article_id: i64) -> Vec<Comment> {
        self.store.comments().filter(|c| c.article_id == article_id)
    }

    // ========== Authors & Categories ==========

    pub fn get_all_authors(&self) -> Vec<Author> {
        self.store.authors().all()
    }

    pub fn get_author_by_id(&self, id: i64) -> Option<Author> {
        self.store.authors().get(id).cloned()
    }

    pub fn get_all_categories(&self) -> Vec<Category> {
        self.store.categories().all()
    }

    pub fn get_category_by_slug(&self, slug: &str) -> Option<Category> {
        self.store.categories().find(|c| c.slug == slug).cloned()
    }
}
