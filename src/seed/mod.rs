//! Startup catalog loading.
//!
//! The seeder writes categories first, then articles (resolving each
//! article's category slug to the id just created), then solution cards.
//! It is not idempotent: running it twice on the same repository stores a
//! second copy of everything under new ids, or fails on the first repeated
//! slug when the repository rejects duplicate keys.

mod catalog;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::storage::{NewArticle, NewCategory, NewSolution, Repository, StorageError};

pub use catalog::{ArticleSeed, Catalog, CategorySeed, SolutionSeed, BUILTIN};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to store seed record: {0}")]
    Storage(#[from] StorageError),

    #[error("Seed article '{article}' references unknown category '{category}'")]
    UnknownCategorySlug { article: String, category: String },

    #[error("Seed article '{article}' has invalid publish date '{value}': {source}")]
    InvalidDate {
        article: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Number of records written by one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub articles: usize,
    pub solutions: usize,
}

// ============================================================================
// Seeder
// ============================================================================

pub struct Seeder {
    catalog: &'static Catalog,
}

impl Seeder {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    /// Seeder for the site's built-in catalog.
    pub fn builtin() -> Self {
        Self::new(&BUILTIN)
    }

    /// Write the whole catalog into `repo`.
    ///
    /// Stops at the first failure; records written before it stay in place.
    pub async fn run(&self, repo: &Repository) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();

        // slug -> id of the category created by this run
        let mut category_ids: HashMap<&str, i64> = HashMap::new();
        for seed in self.catalog.categories {
            let category = repo.create_category(seed.to_new()).await?;
            category_ids.insert(seed.slug, category.id);
            report.categories += 1;
        }

        for seed in self.catalog.articles {
            let category_id = *category_ids.get(seed.category_slug).ok_or_else(|| {
                SeedError::UnknownCategorySlug {
                    article: seed.slug.to_string(),
                    category: seed.category_slug.to_string(),
                }
            })?;
            repo.create_article(seed.to_new(category_id)?).await?;
            report.articles += 1;
        }

        for seed in self.catalog.solutions {
            repo.create_solution(seed.to_new()).await;
            report.solutions += 1;
        }

        tracing::info!(
            categories = report.categories,
            articles = report.articles,
            solutions = report.solutions,
            "Seeded content catalog"
        );
        Ok(report)
    }
}

// ============================================================================
// Seed -> input conversion
// ============================================================================

impl CategorySeed {
    fn to_new(&self) -> NewCategory {
        NewCategory {
            name: self.name.to_string(),
            slug: self.slug.to_string(),
            description: self.description.map(str::to_string),
            icon_name: self.icon_name.map(str::to_string),
            image_url: self.image_url.map(str::to_string),
        }
    }
}

impl ArticleSeed {
    fn to_new(&self, category_id: i64) -> Result<NewArticle, SeedError> {
        let publish_date = self
            .publish_date
            .parse::<DateTime<Utc>>()
            .map_err(|source| SeedError::InvalidDate {
                article: self.slug.to_string(),
                value: self.publish_date.to_string(),
                source,
            })?;

        Ok(NewArticle {
            title: self.title.to_string(),
            slug: self.slug.to_string(),
            excerpt: self.excerpt.to_string(),
            content: self.content.to_string(),
            image_url: self.image_url.map(str::to_string),
            publish_date,
            category_id,
            featured: self.featured,
        })
    }
}

impl SolutionSeed {
    fn to_new(&self) -> NewSolution {
        NewSolution {
            title: self.title.to_string(),
            description: self.description.to_string(),
            image_url: self.image_url.map(str::to_string),
            link: self.link.to_string(),
            link_text: self.link_text.to_string(),
        }
    }
}
