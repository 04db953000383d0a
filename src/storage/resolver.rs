//! Relationship resolution
//!
//! Articles and comments embed the author (and, for articles, the category)
//! they reference. Resolution happens once, when the row is built, and copies
//! the referenced row by value: the embedded objects are frozen at creation.
//!
//! A reference that does not resolve is an error. Rows are only ever built
//! from trusted fixture data, so the caller treats it as fatal.

use chrono::Utc;

use crate::model::{Article, Author, Category, Comment, EntityKind, NewArticle, NewComment};
use crate::storage::Table;
use crate::text;
use crate::{Error, Result};

pub struct Resolver<'a> {
    authors: &'a Table<Author>,
    categories: &'a Table<Category>,
}

impl<'a> Resolver<'a> {
    pub fn new(authors: &'a Table<Author>, categories: &'a Table<Category>) -> Self {
        Self {
            authors,
            categories,
        }
    }

    fn author(&self, referrer: EntityKind, id: i64) -> Result<Author> {
        self.authors
            .get(id)
            .cloned()
            .ok_or(Error::UnresolvedReference {
                referrer,
                kind: EntityKind::Author,
                id,
            })
    }

    fn category(&self, referrer: EntityKind, id: i64) -> Result<Category> {
        self.categories
            .get(id)
            .cloned()
            .ok_or(Error::UnresolvedReference {
                referrer,
                kind: EntityKind::Category,
                id,
            })
    }

    /// Build the stored article for `new` under `id`.
    ///
    /// Reading time falls back to an estimate from the content when absent or zero.
    pub fn article(&self, id: i64, new: NewArticle) -> Result<Article> {
        let author = self.author(EntityKind::Article, new.author_id)?;
        let category = self.category(EntityKind::Article, new.category_id)?;

        let reading_time = match new.reading_time {
            Some(minutes) if minutes > 0 => minutes,
            _ => text::reading_time(&new.content),
        };

        Ok(Article {
            id,
            title: new.title,
            slug: new.slug,
            excerpt: new.excerpt,
            content: new.content,
            cover_image: new.cover_image,
            published_at: new.published_at.unwrap_or_else(Utc::now),
            author_id: new.author_id,
            category_id: new.category_id,
            reading_time,
            view_count: new.view_count,
            is_featured: new.is_featured,
            author,
            category,
        })
    }

    /// Build the stored comment for `new` under `id`. `article_id` is not checked.
    pub fn comment(&self, id: i64, new: NewComment) -> Result<Comment> {
        let author = self.author(EntityKind::Comment, new.author_id)?;

        Ok(Comment {
            id,
            content: new.content,
            created_at: new.created_at.unwrap_or_else(Utc::now),
            article_id: new.article_id,
            author_id: new.author_id,
            likes: new.likes,
            author,
        })
    }
}
