use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::model::{Article, Author, Category, Comment};
use crate::query::engine::DEFAULT_RELATED_LIMIT;
use crate::query::QueryEngine;
use crate::server::{ApiError, AppState};
use crate::storage::StoreStats;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct RelatedParams {
    pub limit: Option<usize>,
}

fn parse_author_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid author ID"))
}

// ========== Articles ==========

pub async fn list_articles(State(state): State<Arc<AppState>>) -> Json<Vec<Article>> {
    Json(QueryEngine::new(&state.store).get_all_articles())
}

pub async fn get_featured_article(State(state): State<Arc<AppState>>) -> ApiResult<Article> {
    QueryEngine::new(&state.store)
        .get_featured_article()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Article not found"))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Article> {
    QueryEngine::new(&state.store)
        .get_article_by_slug(&slug)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Article not found"))
}

pub async fn get_article_comments(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Vec<Comment>> {
    let engine = QueryEngine::new(&state.store);
    let article = engine
        .get_article_by_slug(&slug)
        .ok_or_else(|| ApiError::not_found("Article not found"))?;

    Ok(Json(engine.get_comments_by_article_id(article.id)))
}

pub async fn get_related_articles(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    params: Result<Query<RelatedParams>, QueryRejection>,
) -> ApiResult<Vec<Article>> {
    let Query(params) = params.map_err(ApiError::from_query_rejection)?;
    let limit = params.limit.unwrap_or(DEFAULT_RELATED_LIMIT);

    QueryEngine::new(&state.store)
        .get_related_articles(&slug, limit)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Article not found"))
}

// ========== Categories ==========

pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<Category>> {
    Json(QueryEngine::new(&state.store).get_all_categories())
}

pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Category> {
    QueryEngine::new(&state.store)
        .get_category_by_slug(&slug)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Category not found"))
}

pub async fn get_category_articles(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Json<Vec<Article>> {
    Json(QueryEngine::new(&state.store).get_articles_by_category(&slug))
}

// ========== Authors ==========

pub async fn list_authors(State(state): State<Arc<AppState>>) -> Json<Vec<Author>> {
    Json(QueryEngine::new(&state.store).get_all_authors())
}

pub async fn get_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Author> {
    let id = parse_author_id(&id)?;

    QueryEngine::new(&state.store)
        .get_author_by_id(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Author not found"))
}

pub async fn get_author_articles(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Vec<Article>> {
    let id = parse_author_id(&id)?;
    Ok(Json(QueryEngine::new(&state.store).get_articles_by_author_id(id)))
}

// ========== Search & Stats ==========

pub async fn search(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Vec<Article>> {
    let Query(params) = params.map_err(ApiError::from_query_rejection)?;
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Query parameter 'q' is required"))?;

    Ok(Json(QueryEngine::new(&state.store).search_articles(&query)))
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StoreStats> {
    Json(state.store.stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::build_router;
    use crate::model::{NewArticle, NewAuthor, NewCategory};
    use crate::storage::MemoryStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, Value) {
        get_from(MemoryStore::seeded().unwrap(), uri).await
    }

    async fn get_from(store: MemoryStore, uri: &str) -> (StatusCode, Value) {
        let app = build_router(AppState::new(store), None);

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_articles() {
        let (status, body) = get("/api/articles").await;
        assert_eq!(status, StatusCode::OK);

        let articles = body.as_array().unwrap();
        assert_eq!(articles.len(), 12);
        assert_eq!(articles[0]["slug"], "future-of-ai-everyday-applications");
        assert_eq!(articles[0]["author"]["name"], "Sarah Johnson");
        assert_eq!(articles[0]["category"]["slug"], "technology");
        assert_eq!(articles[0]["authorId"], 1);
        assert_eq!(articles[0]["isFeatured"], true);
        assert_eq!(articles[0]["publishedAt"], "2023-09-15T09:30:00.000Z");
    }

    #[tokio::test]
    async fn test_article_by_slug() {
        let (status, body) = get("/api/articles/esg-investing-beyond-hype").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["author"]["name"], "David Chen");
        assert_eq!(body["readingTime"], 9);

        let (status, body) = get("/api/articles/no-such-article").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Article not found");
    }

    #[tokio::test]
    async fn test_article_comments() {
        let (status, body) = get("/api/articles/future-of-ai-everyday-applications/comments").await;
        assert_eq!(status, StatusCode::OK);
        let comments = body.as_array().unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0]["author"]["name"], "David Chen");
        assert_eq!(comments[0]["likes"], 8);
        assert_eq!(comments[0]["createdAt"], "2023-09-15T14:25:00.000Z");

        let (status, _) = get("/api/articles/no-such-article/comments").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_featured_and_related() {
        let (status, body) = get("/api/featured").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);

        let (status, body) = get("/api/articles/future-of-ai-everyday-applications/related?limit=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["slug"], "sustainable-living-small-changes-big-impact");

        let (status, body) = get("/api/articles/future-of-ai-everyday-applications/related").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);

        let (status, _) = get("/api/articles/missing/related").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_featured_on_empty_store() {
        let (status, body) = get_from(MemoryStore::new(), "/api/featured").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Article not found");
    }

    #[tokio::test]
    async fn test_article_slug_named_featured() {
        let mut store = MemoryStore::new();
        store.create_author(NewAuthor::new("Writer", "Staff"));
        store.create_category(NewCategory::new("News", "news")).unwrap();
        store
            .create_article(NewArticle::new("Intro", "featured-intro", 1, 1))
            .unwrap();
        store
            .create_article(NewArticle::new("Featured", "featured", 1, 1))
            .unwrap();

        let (status, body) = get_from(store, "/api/articles/featured").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 2);
        assert_eq!(body["slug"], "featured");
    }

    #[tokio::test]
    async fn test_malformed_related_limit_is_json_400() {
        let (status, body) =
            get("/api/articles/future-of-ai-everyday-applications/related?limit=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());

        let (status, body) =
            get("/api/articles/future-of-ai-everyday-applications/related?limit=-1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_categories() {
        let (status, body) = get("/api/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);

        let (status, body) = get("/api/categories/business").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Business");

        let (status, body) = get("/api/categories/gardening").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Category not found");
    }

    #[tokio::test]
    async fn test_category_articles() {
        let (status, body) = get("/api/categories/culture/articles").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);

        let (status, body) = get("/api/categories/gardening/articles").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_authors() {
        let (status, body) = get("/api/authors").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);

        let (status, body) = get("/api/authors/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Emily Davis");
        assert_eq!(body["social"]["instagram"], "https://instagram.com/emilydavis");

        let (status, body) = get("/api/authors/2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["social"].get("website").is_none());

        let (status, body) = get("/api/authors/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Author not found");

        let (status, body) = get("/api/authors/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid author ID");
    }

    #[tokio::test]
    async fn test_author_articles() {
        let (status, body) = get("/api/authors/4/articles").await;
        assert_eq!(status, StatusCode::OK);
        let articles = body.as_array().unwrap();
        assert_eq!(articles.len(), 3);
        assert!(articles.iter().all(|a| a["author"]["id"] == 4));

        let (status, body) = get("/api/authors/999999/articles").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());

        let (status, _) = get("/api/authors/1.5/articles").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search() {
        let (status, upper) = get("/api/search?q=AI").await;
        assert_eq!(status, StatusCode::OK);
        let (_, lower) = get("/api/search?q=ai").await;
        assert_eq!(upper, lower);

        let (status, body) = get("/api/search?q=quantum").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = get("/api/search?q=a.b").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let (status, body) = get("/api/search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Query parameter 'q' is required");

        let (status, _) = get("/api/search?q=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_repeated_search_key_is_json_400() {
        let (status, body) = get("/api/search?q=a&q=b").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_huge_search_query_is_ok() {
        let uri = format!("/api/search?q={}", "a".repeat(100_000));
        let (status, body) = get(&uri).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stats() {
        let (status, body) = get("/api/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["articles"], 12);
        assert_eq!(body["comments"], 5);
    }
}
