use super::repository::Repository;
use super::types::{Category, EntityKind, NewCategory, StorageError};

impl Repository {
    // ========================================================================
    // Category Operations
    // ========================================================================

    /// Store a new category, returning it with its id.
    ///
    /// `description`, `icon_name` and `image_url` stay `None` unless supplied.
    ///
    /// # Errors
    ///
    /// `StorageError::DuplicateSlug` when duplicate keys are rejected and the
    /// slug is taken.
    pub async fn create_category(&self, input: NewCategory) -> Result<Category, StorageError> {
        let mut store = self.write().await;

        if self.options().reject_duplicate_keys
            && store.categories.values().any(|c| c.slug == input.slug)
        {
            tracing::warn!(slug = %input.slug, "Rejected category with duplicate slug");
            return Err(StorageError::DuplicateSlug {
                kind: EntityKind::Category,
                slug: input.slug,
            });
        }

        let id = store.ids.next(EntityKind::Category);
        let category = Category {
            id,
            name: input.name,
            slug: input.slug,
            description: input.description,
            icon_name: input.icon_name,
            image_url: input.image_url,
        };
        store.categories.insert(id, category.clone());
        tracing::debug!(id, slug = %category.slug, "Created category");
        Ok(category)
    }

    /// All categories in creation order.
    pub async fn get_categories(&self) -> Vec<Category> {
        self.read().await.categories.values().cloned().collect()
    }

    pub async fn get_category_by_id(&self, id: i64) -> Option<Category> {
        self.read().await.categories.get(&id).cloned()
    }

    /// First category whose slug matches exactly.
    pub async fn get_category_by_slug(&self, slug: &str) -> Option<Category> {
        self.read()
            .await
            .categories
            .values()
            .find(|c| c.slug == slug)
            .cloned()
    }
}
