//! Seed loading
//!
//! The fixture dataset lives in `data/seed.json` and is compiled into the
//! binary. References inside the fixture (`authorId`, `categoryId`,
//! `articleId`) are the ids the rows receive in creation order, starting at 1.
//!
//! Loading is a single linear pass: authors, categories, articles, comments.
//! Any failure aborts the whole load; a partially seeded store is never
//! handed out.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{NewArticle, NewAuthor, NewCategory, NewComment};
use crate::storage::MemoryStore;
use crate::Result;

const BUILTIN_SEED: &str = include_str!("../data/seed.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub authors: Vec<NewAuthor>,
    #[serde(default)]
    pub categories: Vec<NewCategory>,
    #[serde(default)]
    pub articles: Vec<NewArticle>,
    #[serde(default)]
    pub comments: Vec<NewComment>,
}

impl SeedData {
    /// The fixture dataset shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a fixture file with the same layout as `data/seed.json`
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Insert every fixture row into `store`, in dependency order.
    pub fn load_into(self, store: &mut MemoryStore) -> Result<()> {
        for author in self.authors {
            store.create_author(author);
        }
        for category in self.categories {
            store.create_category(category)?;
        }
        for article in self.articles {
            store.create_article(article)?;
        }
        for comment in self.comments {
            store.create_comment(comment)?;
        }

        let stats = store.stats();
        tracing::info!(
            "Seeded {} authors, {} categories, {} articles, {} comments",
            stats.authors,
            stats.categories,
            stats.articles,
            stats.comments
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Write;

    #[test]
    fn test_builtin_seed_counts() {
        let store = MemoryStore::seeded().unwrap();
        let stats = store.stats();

        assert_eq!(stats.authors, 4);
        assert_eq!(stats.categories, 4);
        assert_eq!(stats.articles, 12);
        assert_eq!(stats.comments, 5);
    }

    #[test]
    fn test_builtin_seed_references_resolve() {
        let seed = SeedData::builtin().unwrap();
        let store = MemoryStore::from_seed(seed.clone()).unwrap();

        for (new, stored) in seed.articles.iter().zip(store.articles().iter()) {
            assert_eq!(stored.slug, new.slug);
            assert_eq!(stored.author.id, new.author_id);
            assert_eq!(stored.category.id, new.category_id);
        }
        for (new, stored) in seed.comments.iter().zip(store.comments().iter()) {
            assert_eq!(stored.author.id, new.author_id);
            assert_eq!(stored.article_id, new.article_id);
        }
    }

    #[test]
    fn test_broken_reference_aborts_load() {
        let json = r#"{
            "authors": [{ "name": "Only", "avatar": "", "bio": "", "role": "Writer" }],
            "categories": [{ "name": "Tech", "slug": "tech", "description": "" }],
            "articles": [{ "title": "Orphan", "slug": "orphan", "authorId": 2, "categoryId": 1 }]
        }"#;
        let seed = SeedData::from_json(json).unwrap();

        let err = MemoryStore::from_seed(seed).unwrap_err();
        assert!(matches!(err, Error::UnresolvedReference { id: 2, .. }));
    }

    #[test]
    fn test_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "categories": [{{ "name": "Culture", "slug": "culture" }}] }}"#
        )
        .unwrap();

        let seed = SeedData::from_path(file.path()).unwrap();
        let store = MemoryStore::from_seed(seed).unwrap();
        assert_eq!(store.categories().get(1).unwrap().slug, "culture");
        assert!(store.articles().is_empty());
    }

    #[test]
    fn test_malformed_seed_is_an_error() {
        assert!(matches!(SeedData::from_json("{ nope"), Err(Error::Seed(_))));
    }
}
