use tabled::{settings::Style, Table, Tabled};

use crate::model::Article;
use crate::storage::StoreStats;

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Table")]
    pub metric: String,
    #[tabled(rename = "Rows")]
    pub value: String,
}

#[derive(Tabled)]
struct ArticleRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Views")]
    views: u64,
}

#[derive(Default)]
pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

pub fn stats_table(stats: &StoreStats) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("authors", &stats.authors.to_string());
    builder.add_row("categories", &stats.categories.to_string());
    builder.add_row("articles", &stats.articles.to_string());
    builder.add_row("comments", &stats.comments.to_string());
    builder.build()
}

pub fn articles_table(articles: &[Article]) -> String {
    let rows: Vec<_> = articles
        .iter()
        .map(|a| ArticleRow {
            id: a.id,
            title: a.title.clone(),
            author: a.author.name.clone(),
            category: a.category.name.clone(),
            published: a.published_at.format("%Y-%m-%d").to_string(),
            views: a.view_count,
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
