use super::repository::{Collections, Repository};
use super::types::{Article, ArticleWithCategory, EntityKind, NewArticle, StorageError};

// ============================================================================
// Join Helpers
// ============================================================================

impl Collections {
    /// Attach the article's category.
    ///
    /// `create_article` validates `category_id`, so a miss here means the
    /// store was mutated around the public API. The article is dropped from
    /// the result rather than returned half-built.
    pub(crate) fn join(&self, article: &Article) -> Option<ArticleWithCategory> {
        match self.categories.get(&article.category_id) {
            Some(category) => Some(ArticleWithCategory {
                article: article.clone(),
                category: category.clone(),
            }),
            None => {
                tracing::warn!(
                    article_id = article.id,
                    category_id = article.category_id,
                    "Article references a missing category, skipping"
                );
                None
            }
        }
    }

    pub(crate) fn join_all<'a>(
        &self,
        articles: impl IntoIterator<Item = &'a Article>,
    ) -> Vec<ArticleWithCategory> {
        articles.into_iter().filter_map(|a| self.join(a)).collect()
    }
}

/// Most recent first. `sort_by` is stable, so equal dates keep creation order.
fn sort_newest_first(articles: &mut [ArticleWithCategory]) {
    articles.sort_by(|a, b| b.article.publish_date.cmp(&a.article.publish_date));
}

impl Repository {
    // ========================================================================
    // Article Mutations
    // ========================================================================

    /// Store a new article, returning it with its id.
    ///
    /// # Errors
    ///
    /// - `StorageError::UnknownCategory` if `category_id` does not name an
    ///   existing category
    /// - `StorageError::DuplicateSlug` when duplicate keys are rejected and
    ///   the slug is taken
    pub async fn create_article(&self, input: NewArticle) -> Result<Article, StorageError> {
        let mut store = self.write().await;

        if !store.categories.contains_key(&input.category_id) {
            tracing::warn!(
                slug = %input.slug,
                category_id = input.category_id,
                "Rejected article with unknown category"
            );
            return Err(StorageError::UnknownCategory {
                category_id: input.category_id,
            });
        }

        if self.options().reject_duplicate_keys
            && store.articles.values().any(|a| a.slug == input.slug)
        {
            tracing::warn!(slug = %input.slug, "Rejected article with duplicate slug");
            return Err(StorageError::DuplicateSlug {
                kind: EntityKind::Article,
                slug: input.slug,
            });
        }

        let id = store.ids.next(EntityKind::Article);
        let article = Article {
            id,
            title: input.title,
            slug: input.slug,
            excerpt: input.excerpt,
            content: input.content,
            image_url: input.image_url,
            publish_date: input.publish_date,
            category_id: input.category_id,
            featured: input.featured,
        };
        store.articles.insert(id, article.clone());
        tracing::debug!(id, slug = %article.slug, "Created article");
        Ok(article)
    }

    // ========================================================================
    // Article Queries
    // ========================================================================

    /// All articles with their categories, in creation order.
    pub async fn get_articles(&self) -> Vec<ArticleWithCategory> {
        let store = self.read().await;
        store.join_all(store.articles.values())
    }

    pub async fn get_article_by_id(&self, id: i64) -> Option<ArticleWithCategory> {
        let store = self.read().await;
        store.articles.get(&id).and_then(|a| store.join(a))
    }

    /// First article whose slug matches exactly.
    pub async fn get_article_by_slug(&self, slug: &str) -> Option<ArticleWithCategory> {
        let store = self.read().await;
        store
            .articles
            .values()
            .find(|a| a.slug == slug)
            .and_then(|a| store.join(a))
    }

    /// Articles in the category with the given slug.
    ///
    /// An unknown slug yields an empty list, not an error.
    pub async fn get_articles_by_category(&self, category_slug: &str) -> Vec<ArticleWithCategory> {
        let store = self.read().await;
        let Some(category_id) = store
            .categories
            .values()
            .find(|c| c.slug == category_slug)
            .map(|c| c.id)
        else {
            tracing::debug!(category_slug = %category_slug, "No category for slug");
            return Vec::new();
        };

        store.join_all(
            store
                .articles
                .values()
                .filter(|a| a.category_id == category_id),
        )
    }

    /// Featured articles, most recent first.
    pub async fn get_featured_articles(&self) -> Vec<ArticleWithCategory> {
        let store = self.read().await;
        let mut articles = store.join_all(store.articles.values().filter(|a| a.featured));
        sort_newest_first(&mut articles);
        articles
    }

    /// The `limit` most recently published articles.
    ///
    /// No upper bound is imposed; a limit past the total returns everything
    /// and a limit of 0 returns nothing.
    pub async fn get_recent_articles(&self, limit: usize) -> Vec<ArticleWithCategory> {
        let store = self.read().await;
        let mut articles = store.join_all(store.articles.values());
        sort_newest_first(&mut articles);
        articles.truncate(limit);
        tracing::debug!(
            limit = limit,
            returned = articles.len(),
            "get_recent_articles"
        );
        articles
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use crate::storage::{
        Category, EntityKind, NewArticle, NewCategory, Repository, RepositoryOptions,
        StorageError,
    };

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, d, 10, 0, 0).unwrap()
    }

    fn test_article(slug: &str, category_id: i64, date: DateTime<Utc>) -> NewArticle {
        NewArticle {
            title: format!("Artigo {}", slug),
            slug: slug.to_string(),
            excerpt: "Resumo".to_string(),
            content: "Conteúdo".to_string(),
            image_url: None,
            publish_date: date,
            category_id,
            featured: false,
        }
    }

    async fn repo_with_categories() -> (Repository, Category, Category) {
        let repo = Repository::new();
        let consumer = repo
            .create_category(NewCategory {
                name: "Direito do Consumidor".to_string(),
                slug: "direito-consumidor".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let labor = repo
            .create_category(NewCategory {
                name: "Direito Trabalhista".to_string(),
                slug: "direito-trabalhista".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        (repo, consumer, labor)
    }

    #[tokio::test]
    async fn test_create_article_round_trip() {
        let (repo, consumer, _) = repo_with_categories().await;
        let input = NewArticle {
            image_url: Some("/img/recall.jpg".to_string()),
            featured: true,
            ..test_article("recall-veiculos", consumer.id, day(3))
        };

        let created = repo.create_article(input.clone()).await.unwrap();
        let fetched = repo.get_article_by_id(created.id).await.unwrap();

        assert_eq!(fetched.article, created);
        assert_eq!(fetched.article.title, input.title);
        assert_eq!(fetched.article.image_url, input.image_url);
        assert_eq!(fetched.article.publish_date, input.publish_date);
        assert!(fetched.article.featured);
        assert_eq!(fetched.category, consumer);
    }

    #[tokio::test]
    async fn test_create_article_defaults() {
        let (repo, consumer, _) = repo_with_categories().await;
        let created = repo
            .create_article(test_article("plain", consumer.id, day(1)))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.image_url, None);
        assert!(!created.featured);
    }

    #[tokio::test]
    async fn test_create_article_unknown_category_rejected() {
        let (repo, consumer, _) = repo_with_categories().await;

        let result = repo.create_article(test_article("orphan", 77, day(1))).await;
        assert_eq!(
            result,
            Err(StorageError::UnknownCategory { category_id: 77 })
        );
        assert!(repo.get_articles().await.is_empty());

        // No id was burned by the rejected create
        let next = repo
            .create_article(test_article("first", consumer.id, day(1)))
            .await
            .unwrap();
        assert_eq!(next.id, 1);
    }

    #[tokio::test]
    async fn test_create_article_duplicate_slug_rejected_when_strict() {
        let repo = Repository::with_options(RepositoryOptions {
            reject_duplicate_keys: true,
        });
        let category = repo
            .create_category(NewCategory {
                name: "Civil".to_string(),
                slug: "direito-civil".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        repo.create_article(test_article("usucapiao", category.id, day(1)))
            .await
            .unwrap();

        let err = repo
            .create_article(test_article("usucapiao", category.id, day(2)))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StorageError::DuplicateSlug {
                kind: EntityKind::Article,
                slug: "usucapiao".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_get_articles_insertion_order_and_join() {
        let (repo, consumer, labor) = repo_with_categories().await;
        repo.create_article(test_article("a", labor.id, day(9)))
            .await
            .unwrap();
        repo.create_article(test_article("b", consumer.id, day(1)))
            .await
            .unwrap();
        repo.create_article(test_article("c", labor.id, day(5)))
            .await
            .unwrap();

        let articles = repo.get_articles().await;
        let slugs: Vec<_> = articles.iter().map(|a| a.article.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);

        for joined in &articles {
            assert_eq!(joined.category.id, joined.article.category_id);
        }
    }

    #[tokio::test]
    async fn test_get_articles_is_repeatable() {
        let (repo, consumer, _) = repo_with_categories().await;
        repo.create_article(test_article("a", consumer.id, day(1)))
            .await
            .unwrap();
        repo.create_article(test_article("b", consumer.id, day(2)))
            .await
            .unwrap();

        assert_eq!(repo.get_articles().await, repo.get_articles().await);
    }

    #[tokio::test]
    async fn test_get_article_by_slug() {
        let (repo, consumer, _) = repo_with_categories().await;
        let created = repo
            .create_article(test_article("cobranca-indevida", consumer.id, day(2)))
            .await
            .unwrap();

        let found = repo.get_article_by_slug("cobranca-indevida").await.unwrap();
        assert_eq!(found.article.id, created.id);
        assert_eq!(found.category.slug, "direito-consumidor");

        assert!(repo.get_article_by_slug("inexistente").await.is_none());
        assert!(repo.get_article_by_id(999).await.is_none());
    }

    #[tokio::test]
    async fn test_get_articles_by_category() {
        let (repo, consumer, labor) = repo_with_categories().await;
        repo.create_article(test_article("c1", consumer.id, day(1)))
            .await
            .unwrap();
        repo.create_article(test_article("l1", labor.id, day(2)))
            .await
            .unwrap();
        repo.create_article(test_article("c2", consumer.id, day(3)))
            .await
            .unwrap();

        let articles = repo.get_articles_by_category("direito-consumidor").await;
        let slugs: Vec<_> = articles.iter().map(|a| a.article.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c1", "c2"]);
        assert!(articles.iter().all(|a| a.article.category_id == consumer.id));

        assert!(repo.get_articles_by_category("direito-penal").await.is_empty());
    }

    #[tokio::test]
    async fn test_get_articles_by_category_without_articles() {
        let (repo, consumer, _) = repo_with_categories().await;
        repo.create_article(test_article("c1", consumer.id, day(1)))
            .await
            .unwrap();

        assert!(repo
            .get_articles_by_category("direito-trabalhista")
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn test_get_featured_articles_sorted_desc() {
        let (repo, consumer, labor) = repo_with_categories().await;
        let featured = |slug: &str, cat: i64, d: u32| NewArticle {
            featured: true,
            ..test_article(slug, cat, day(d))
        };
        repo.create_article(featured("old", consumer.id, 2))
            .await
            .unwrap();
        repo.create_article(test_article("skip", labor.id, day(20)))
            .await
            .unwrap();
        repo.create_article(featured("new", labor.id, 15))
            .await
            .unwrap();
        repo.create_article(featured("mid", consumer.id, 8))
            .await
            .unwrap();

        let articles = repo.get_featured_articles().await;
        let slugs: Vec<_> = articles.iter().map(|a| a.article.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "mid", "old"]);
        assert!(articles.iter().all(|a| a.article.featured));
    }

    #[tokio::test]
    async fn test_featured_ties_keep_creation_order() {
        let (repo, consumer, _) = repo_with_categories().await;
        for slug in ["first", "second", "third"] {
            repo.create_article(NewArticle {
                featured: true,
                ..test_article(slug, consumer.id, day(4))
            })
            .await
            .unwrap();
        }

        let slugs: Vec<_> = repo
            .get_featured_articles()
            .await
            .into_iter()
            .map(|a| a.article.slug)
            .collect();
        assert_eq!(slugs, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_get_recent_articles() {
        let (repo, consumer, _) = repo_with_categories().await;
        for (slug, d) in [("d1", 1), ("d7", 7), ("d3", 3), ("d9", 9)] {
            repo.create_article(test_article(slug, consumer.id, day(d)))
                .await
                .unwrap();
        }

        let recent = repo.get_recent_articles(3).await;
        let slugs: Vec<_> = recent.iter().map(|a| a.article.slug.as_str()).collect();
        assert_eq!(slugs, vec!["d9", "d7", "d3"]);
    }

    #[tokio::test]
    async fn test_get_recent_articles_limit_edges() {
        let (repo, consumer, _) = repo_with_categories().await;
        repo.create_article(test_article("a", consumer.id, day(1)))
            .await
            .unwrap();
        repo.create_article(test_article("b", consumer.id, day(2)))
            .await
            .unwrap();

        assert!(repo.get_recent_articles(0).await.is_empty());
        assert_eq!(repo.get_recent_articles(50).await.len(), 2);
        assert_eq!(repo.get_recent_articles(usize::MAX).await.len(), 2);
    }
}
