use serde::Serialize;

use crate::model::{
    Article, Author, Category, Comment, EntityKind, NewArticle, NewAuthor, NewCategory,
    NewComment,
};
use crate::seed::SeedData;
use crate::storage::resolver::Resolver;
use crate::storage::{IdAllocator, Table};
use crate::{Error, Result};

/// In-memory blog store.
///
/// Writes need `&mut self`. Once the store is shared (the HTTP layer holds it
/// behind an `Arc`), it is read-only for the rest of the process. Any future
/// runtime writes have to go through a single-writer lock or a write queue so
/// ids stay monotonic.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    ids: IdAllocator,
    authors: Table<Author>,
    categories: Table<Category>,
    articles: Table<Article>,
    comments: Table<Comment>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the built-in fixture dataset
    pub fn seeded() -> Result<Self> {
        Self::from_seed(SeedData::builtin()?)
    }

    /// Create a store populated with `seed`
    pub fn from_seed(seed: SeedData) -> Result<Self> {
        let mut store = Self::new();
        seed.load_into(&mut store)?;
        Ok(store)
    }

    // ========== Write Operations ==========

    pub fn create_author(&mut self, new: NewAuthor) -> Author {
        let id = self.ids.next(EntityKind::Author);
        self.authors.insert(new.into_author(id)).clone()
    }

    /// Insert a category. Slugs must be unique.
    pub fn create_category(&mut self, new: NewCategory) -> Result<Category> {
        if self.categories.find(|c| c.slug == new.slug).is_some() {
            return Err(Error::DuplicateSlug {
                kind: EntityKind::Category,
                slug: new.slug,
            });
        }

        let id = self.ids.next(EntityKind::Category);
        Ok(self.categories.insert(new.into_category(id)).clone())
    }

    /// Insert an article, embedding its author and category.
    ///
    /// Fails without consuming an id when the slug is taken or a reference
    /// does not resolve.
    pub fn create_article(&mut self, new: NewArticle) -> Result<Article> {
        if self.articles.find(|a| a.slug == new.slug).is_some() {
            return Err(Error::DuplicateSlug {
                kind: EntityKind::Article,
                slug: new.slug,
            });
        }

        let id = self.ids.peek(EntityKind::Article);
        let article = Resolver::new(&self.authors, &self.categories).article(id, new)?;
        self.ids.next(EntityKind::Article);

        tracing::debug!("Created article {} ({})", article.id, article.slug);
        Ok(self.articles.insert(article).clone())
    }

    /// Insert a comment, embedding its author.
    pub fn create_comment(&mut self, new: NewComment) -> Result<Comment> {
        let id = self.ids.peek(EntityKind::Comment);
        let comment = Resolver::new(&self.authors, &self.categories).comment(id, new)?;
        self.ids.next(EntityKind::Comment);

        Ok(self.comments.insert(comment).clone())
    }

    // ========== Tables ==========

    pub fn authors(&self) -> &Table<Author> {
        &self.authors
    }

    pub fn categories(&self) -> &Table<Category> {
        &self.categories
    }

    pub fn articles(&self) -> &Table<Article> {
        &self.articles
    }

    pub fn comments(&self) -> &Table<Comment> {
        &self.comments
    }

    /// Get store statistics
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            authors: self.authors.len(),
            categories: self.categories.len(),
            articles: self.articles.len(),
            comments: self.comments.len(),
        }
    }
}

/// Row counts per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub authors: usize,
    pub categories: usize,
    pub articles: usize,
    pub comments: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Store Statistics:")?;
        writeln!(f, "  Authors: {}", self.authors)?;
        writeln!(f, "  Categories: {}", self.categories)?;
        writeln!(f, "  Articles: {}", self.articles)?;
        writeln!(f, "  Comments: {}", self.comments)
    }
}
