//! Pressroom CLI - serve and inspect the blog content store

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use pressroom::config::{self, PressroomConfig, ServerSettings};
use pressroom::output::{emit_json, OutputMode};
use pressroom::query::QueryEngine;
use pressroom::seed::SeedData;
use pressroom::storage::MemoryStore;
use pressroom::ui::{self, Icons};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pressroom")]
#[command(version)]
#[command(about = "In-memory blog content store with a JSON REST API")]
#[command(long_about = r#"
Pressroom seeds an in-memory store of authors, categories, articles and
comments, and serves it to the blog front end over HTTP.

Example usage:
  pressroom serve --port 5000
  pressroom articles --category technology
  pressroom search "remote work"
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Fixture file to seed from (defaults to the built-in dataset)
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Directory with the built front end
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Show row counts for every table
    Stats {
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List articles, optionally filtered
    Articles {
        /// Only articles in this category slug
        #[arg(long, conflicts_with = "author")]
        category: Option<String>,

        /// Only articles by this author id
        #[arg(long)]
        author: Option<i64>,

        #[arg(short, long)]
        seed: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Search articles by title, excerpt, content, author or category
    Search {
        /// Text to look for (matched literally, ignoring case)
        query: String,

        #[arg(short, long)]
        seed: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Show one article and its comments
    Show {
        /// Article slug
        slug: String,

        #[arg(short, long)]
        seed: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn open_store(seed: Option<&Path>) -> anyhow::Result<MemoryStore> {
    let store = match seed {
        Some(path) => {
            tracing::info!("Seeding from {}", path.display());
            MemoryStore::from_seed(SeedData::from_path(path)?)?
        }
        None => MemoryStore::seeded()?,
    };
    Ok(store)
}

/// Seed path from the flag, then from the config file
fn seed_path(flag: Option<PathBuf>, config: Option<&PressroomConfig>) -> Option<PathBuf> {
    flag.or_else(|| config.and_then(|c| c.seed.as_ref().map(PathBuf::from)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let file_config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port, seed, static_dir } => {
            let settings =
                ServerSettings::resolve(file_config.as_ref(), host, port, seed, static_dir);
            // A fixture that fails to load aborts startup.
            let store = open_store(settings.seed.as_deref())?;

            ui::header("Pressroom");
            ui::info("Articles", &store.articles().len().to_string());
            if let Some(dir) = &settings.static_dir {
                ui::info("Static files", &dir.display().to_string());
            }

            pressroom::server::start_server(settings, store).await?;
        }

        Commands::Stats { seed, json } => {
            let store = open_store(seed_path(seed, file_config.as_ref()).as_deref())?;
            let stats = store.stats();

            if OutputMode::from_json_flag(json).is_human() {
                println!("{} Pressroom Statistics", Icons::STATS);
                println!("{}", ui::stats_table(&stats));
            } else {
                emit_json(&stats)?;
            }
        }

        Commands::Articles { category, author, seed, json } => {
            let store = open_store(seed_path(seed, file_config.as_ref()).as_deref())?;
            let engine = QueryEngine::new(&store);

            let articles = match (&category, author) {
                (Some(slug), _) => {
                    if engine.get_category_by_slug(slug).is_none() {
                        ui::warn(&format!("No category with slug '{}'", slug));
                    }
                    engine.get_articles_by_category(slug)
                }
                (None, Some(id)) => engine.get_articles_by_author_id(id),
                (None, None) => engine.get_all_articles(),
            };

            if OutputMode::from_json_flag(json).is_human() {
                if articles.is_empty() {
                    println!("∅ No articles found.");
                } else {
                    println!("{}", ui::articles_table(&articles));
                }
            } else {
                emit_json(&articles)?;
            }
        }

        Commands::Search { query, seed, json } => {
            let store = open_store(seed_path(seed, file_config.as_ref()).as_deref())?;
            let results = QueryEngine::new(&store).search_articles(&query);

            if OutputMode::from_json_flag(json).is_human() {
                println!("{} Searching for: '{}'...", Icons::SEARCH, query);
                if results.is_empty() {
                    println!("{} No articles found.", Icons::CROSS);
                } else {
                    for article in &results {
                        println!("{}", ui::article_line(article));
                    }
                    ui::summary_row("Matches:", &results.len().to_string());
                }
            } else {
                emit_json(&results)?;
            }
        }

        Commands::Show { slug, seed, json } => {
            let store = open_store(seed_path(seed, file_config.as_ref()).as_deref())?;
            let engine = QueryEngine::new(&store);

            let Some(article) = engine.get_article_by_slug(&slug) else {
                ui::error(&format!("Article not found: {}", slug));
                std::process::exit(1);
            };
            let comments = engine.get_comments_by_article_id(article.id);

            if OutputMode::from_json_flag(json).is_human() {
                println!("{} {}", Icons::ARTICLE, ui::article_line(&article));
                println!();
                println!("{}", article.excerpt);
                ui::section(&format!(" Comments ({}) ", comments.len()));
                for comment in &comments {
                    println!(
                        "{} {} {}",
                        Icons::COMMENT,
                        comment.author.name,
                        ui::dim(&format!("{} likes", comment.likes))
                    );
                    println!("   {}", comment.content);
                }
            } else {
                emit_json(&serde_json::json!({
                    "article": article,
                    "comments": comments,
                }))?;
            }
        }

        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(config::default_config_path);
            let defaults = PressroomConfig {
                host: Some(config::DEFAULT_HOST.to_string()),
                port: Some(config::DEFAULT_PORT),
                seed: None,
                static_dir: None,
            };
            config::write_config(&path, &defaults, force)?;
            ui::success(&format!("Wrote {}", path.display()));
        }
    }

    Ok(())
}
