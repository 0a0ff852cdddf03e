use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use jurisdata::config::Config;
use jurisdata::storage::{ArticleWithCategory, Category, Repository, Solution};
use jurisdata::util::fit_to_width;

#[derive(Parser, Debug)]
#[command(name = "jurisdata", about = "Query the legal content catalog")]
struct Args {
    /// Path to the TOML config file
    #[arg(long, value_name = "FILE", default_value = "jurisdata.toml")]
    config: PathBuf,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all categories
    Categories,
    /// List articles, optionally filtered
    Articles {
        /// Only articles in the category with this slug
        #[arg(long, value_name = "SLUG")]
        category: Option<String>,
        /// Only featured articles, newest first
        #[arg(long, conflicts_with = "category")]
        featured: bool,
    },
    /// List the most recently published articles
    Recent {
        /// Number of articles (defaults to `recent_articles_limit`)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show a single article by slug
    Article { slug: String },
    /// Search titles, excerpts and content
    Search { query: String },
    /// List solution cards
    Solutions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // RUST_LOG wins over the config file
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = config.repository_options();
    let repo = if config.seed_on_startup {
        let (repo, _report) = Repository::open(options)
            .await
            .context("Failed to seed content catalog")?;
        repo
    } else {
        tracing::info!("Seeding disabled, starting with an empty repository");
        Repository::with_options(options)
    };

    match args.command {
        Command::Categories => {
            let categories = repo.get_categories().await;
            emit(args.json, &categories, print_categories)?;
        }
        Command::Articles { category, featured } => {
            let articles = match (category, featured) {
                (Some(slug), _) => repo.get_articles_by_category(&slug).await,
                (None, true) => repo.get_featured_articles().await,
                (None, false) => repo.get_articles().await,
            };
            emit(args.json, &articles, print_articles)?;
        }
        Command::Recent { limit } => {
            let limit = limit.unwrap_or(config.recent_articles_limit);
            let articles = repo.get_recent_articles(limit).await;
            emit(args.json, &articles, print_articles)?;
        }
        Command::Article { slug } => match repo.get_article_by_slug(&slug).await {
            Some(article) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&article)?);
                } else {
                    print_article_detail(&article);
                }
            }
            None => {
                eprintln!("Error: no article with slug '{}'", slug);
                std::process::exit(1);
            }
        },
        Command::Search { query } => {
            let articles = repo.search_articles(&query).await;
            emit(args.json, &articles, print_articles)?;
        }
        Command::Solutions => {
            let solutions = repo.get_solutions().await;
            emit(args.json, &solutions, print_solutions)?;
        }
    }

    Ok(())
}

// ============================================================================
// Output
// ============================================================================

fn emit<T: Serialize>(json: bool, rows: &[T], table: fn(&[T])) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        table(rows);
    }
    Ok(())
}

fn print_categories(categories: &[Category]) {
    println!("{}  {}  NAME", fit_to_width("ID", 4), fit_to_width("SLUG", 24));
    for c in categories {
        println!(
            "{}  {}  {}",
            fit_to_width(&c.id.to_string(), 4),
            fit_to_width(&c.slug, 24),
            c.name
        );
    }
}

fn print_articles(articles: &[ArticleWithCategory]) {
    println!(
        "{}  {}  {}  {}  TITLE",
        fit_to_width("ID", 4),
        fit_to_width("DATE", 10),
        fit_to_width("CATEGORY", 22),
        fit_to_width("F", 1),
    );
    for a in articles {
        println!(
            "{}  {}  {}  {}  {}",
            fit_to_width(&a.article.id.to_string(), 4),
            a.article.publish_date.format("%Y-%m-%d"),
            fit_to_width(&a.category.name, 22),
            if a.article.featured { "*" } else { " " },
            fit_to_width(&a.article.title, 60).trim_end(),
        );
    }
    if articles.is_empty() {
        println!("(no articles)");
    }
}

fn print_article_detail(a: &ArticleWithCategory) {
    println!("{}", a.article.title);
    println!(
        "{} | {} | {}",
        a.category.name,
        a.article.publish_date.format("%Y-%m-%d"),
        a.article.slug
    );
    println!();
    println!("{}", a.article.excerpt);
    println!();
    println!("{}", a.article.content);
}

fn print_solutions(solutions: &[Solution]) {
    for s in solutions {
        println!("[{}] {}", s.id, s.title);
        println!("    {}", s.description);
        println!("    {} -> {}", s.link_text, s.link);
    }
}
