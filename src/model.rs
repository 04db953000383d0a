//! Entity model - authors, categories, articles and comments
//!
//! Read shapes carry their assigned id and, for articles and comments, the
//! embedded author/category snapshots. The `New*` shapes are what the store
//! accepts on creation; ids are always assigned by the store.
//!
//! All entities serialize with camelCase field names, which is the shape the
//! front end consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four entity kinds held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Author,
    Category,
    Article,
    Comment,
}

impl EntityKind {
    /// Get the string representation of the entity kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Author => "author",
            EntityKind::Category => "category",
            EntityKind::Article => "article",
            EntityKind::Comment => "comment",
        }
    }

    /// Get all entity kinds, in seed order
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Author,
            EntityKind::Category,
            EntityKind::Article,
            EntityKind::Comment,
        ]
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Timestamps go over the wire as UTC ISO-8601 with milliseconds,
/// e.g. `2023-09-15T09:30:00.000Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

/// Optional social profile links for an author. Each link is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// A blog author.
///
/// `article_count` is a display counter supplied at creation; the store does
/// not keep it in sync with the article table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub role: String,
    pub article_count: u32,
    pub follower_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuthor {
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub role: String,
    #[serde(default)]
    pub article_count: u32,
    #[serde(default)]
    pub follower_count: u32,
    #[serde(default)]
    pub social: Option<SocialLinks>,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: String::new(),
            bio: String::new(),
            role: role.into(),
            article_count: 0,
            follower_count: 0,
            social: None,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_social(mut self, social: SocialLinks) -> Self {
        self.social = Some(social);
        self
    }

    pub(crate) fn into_author(self, id: i64) -> Author {
        Author {
            id,
            name: self.name,
            avatar: self.avatar,
            bio: self.bio,
            role: self.role,
            article_count: self.article_count,
            follower_count: self.follower_count,
            social: self.social,
        }
    }
}

/// A topic grouping. `slug` is the external lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub(crate) fn into_category(self, id: i64) -> Category {
        Category {
            id,
            name: self.name,
            slug: self.slug,
            description: self.description,
        }
    }
}

/// A published article with its author and category embedded.
///
/// `author` and `category` are copies taken when the article was created.
/// They are frozen at creation and never track later changes to the
/// referenced rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Rich text (HTML) body
    pub content: String,
    pub cover_image: String,
    #[serde(with = "iso_millis")]
    pub published_at: DateTime<Utc>,
    pub author_id: i64,
    pub category_id: i64,
    /// Estimated reading time in minutes
    pub reading_time: u32,
    pub view_count: u64,
    pub is_featured: bool,
    pub author: Author,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_image: String,
    /// Defaults to the creation instant
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: i64,
    pub category_id: i64,
    /// Computed from the content when absent or zero
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub is_featured: bool,
}

impl NewArticle {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        author_id: i64,
        category_id: i64,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            excerpt: String::new(),
            content: String::new(),
            cover_image: String::new(),
            published_at: None,
            author_id,
            category_id,
            reading_time: None,
            view_count: 0,
            is_featured: false,
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_reading_time(mut self, minutes: u32) -> Self {
        self.reading_time = Some(minutes);
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }
}

/// A reader comment with its author embedded (frozen at creation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    pub article_id: i64,
    pub author_id: i64,
    pub likes: u32,
    pub author: Author,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub article_id: i64,
    pub author_id: i64,
    #[serde(default)]
    pub likes: u32,
}

impl NewComment {
    pub fn new(content: impl Into<String>, article_id: i64, author_id: i64) -> Self {
        Self {
            content: content.into(),
            created_at: None,
            article_id,
            author_id,
            likes: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_display() {
        let names: Vec<_> = EntityKind::all().iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["author", "category", "article", "comment"]);
    }

    #[test]
    fn test_timestamps_serialize_with_millis() {
        let comment = Comment {
            id: 1,
            content: "Nice".to_string(),
            created_at: "2023-09-15T09:30:00Z".parse().unwrap(),
            article_id: 1,
            author_id: 1,
            likes: 0,
            author: NewAuthor::new("Ada", "Editor").into_author(1),
        };

        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["createdAt"], "2023-09-15T09:30:00.000Z");

        let back: Comment = serde_json::from_value(json).unwrap();
        assert_eq!(back, comment);
    }

    #[test]
    fn test_author_serializes_camel_case_and_skips_missing_links() {
        let author = NewAuthor::new("Ada", "Editor")
            .with_social(SocialLinks {
                twitter: Some("https://twitter.com/ada".into()),
                ..Default::default()
            })
            .into_author(7);

        let json = serde_json::to_value(&author).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["articleCount"], 0);
        assert_eq!(json["followerCount"], 0);
        assert_eq!(json["social"]["twitter"], "https://twitter.com/ada");
        assert!(json["social"].get("linkedin").is_none());
    }

    #[test]
    fn test_new_article_defaults_from_json() {
        let json = r#"{
            "title": "Hello",
            "slug": "hello",
            "authorId": 1,
            "categoryId": 2,
            "publishedAt": "2023-09-15T09:30:00.000Z"
        }"#;
        let article: NewArticle = serde_json::from_str(json).unwrap();
        assert_eq!(article.reading_time, None);
        assert_eq!(article.view_count, 0);
        assert!(!article.is_featured);
        assert_eq!(
            article.published_at.unwrap().to_rfc3339(),
            "2023-09-15T09:30:00+00:00"
        );
    }
}
