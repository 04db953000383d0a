//! Literal, case-insensitive article search
//!
//! The query and every searched field are lowercased and compared with a
//! plain substring test, so characters such as `.`, `+` or `(` match
//! themselves and no query length or content can make a search fail.

use crate::model::Article;

#[derive(Debug, Clone)]
pub struct SearchMatcher {
    needle: String,
}

impl SearchMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }

    /// True when any of title, excerpt, content, author name or category
    /// name contains the query.
    pub fn matches_article(&self, article: &Article) -> bool {
        [
            article.title.as_str(),
            article.excerpt.as_str(),
            article.content.as_str(),
            article.author.name.as_str(),
            article.category.name.as_str(),
        ]
        .into_iter()
        .any(|field| self.is_match(field))
    }
}
