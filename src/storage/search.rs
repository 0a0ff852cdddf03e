use super::repository::Repository;
use super::types::{Article, ArticleWithCategory};
use crate::util::{contains_folded, fold_case};

/// True if the folded query occurs in the title, excerpt or content.
fn article_matches(article: &Article, folded_query: &str) -> bool {
    contains_folded(&article.title, folded_query)
        || contains_folded(&article.excerpt, folded_query)
        || contains_folded(&article.content, folded_query)
}

impl Repository {
    // ========================================================================
    // Search Operations
    // ========================================================================

    /// Case-insensitive substring search over title, excerpt and content.
    ///
    /// Results keep creation order; there is no relevance ranking. The query
    /// is used verbatim (no trimming), so an empty query matches every
    /// article.
    pub async fn search_articles(&self, query: &str) -> Vec<ArticleWithCategory> {
        let folded = fold_case(query);
        let store = self.read().await;
        let results = store.join_all(
            store
                .articles
                .values()
                .filter(|a| article_matches(a, &folded)),
        );
        tracing::debug!(query = %query, matches = results.len(), "search_articles");
        results
    }
}
