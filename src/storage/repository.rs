use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::ids::IdAllocator;
use super::types::{Article, Category, Solution, User};
use crate::seed::{SeedError, SeedReport, Seeder};

// ============================================================================
// Options
// ============================================================================

/// Write-time policies for the repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepositoryOptions {
    /// Reject creates whose slug (categories, articles) or username (users)
    /// is already present. Off by default: duplicates are stored silently.
    pub reject_duplicate_keys: bool,
}

// ============================================================================
// Collections
// ============================================================================

/// The four collections and their id counters.
///
/// Keyed by id; since ids only grow, `BTreeMap` iteration order is also
/// insertion order.
#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub(crate) users: BTreeMap<i64, User>,
    pub(crate) categories: BTreeMap<i64, Category>,
    pub(crate) articles: BTreeMap<i64, Article>,
    pub(crate) solutions: BTreeMap<i64, Solution>,
    pub(crate) ids: IdAllocator,
}

// ============================================================================
// Repository
// ============================================================================

/// Handle to the in-memory content store.
///
/// Cloning is cheap and every clone sees the same data. All operations are
/// `async` so callers are written against the same shape a networked store
/// would have; none of them actually suspend except to take the lock.
#[derive(Clone, Default)]
pub struct Repository {
    inner: Arc<RwLock<Collections>>,
    options: RepositoryOptions,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Repository {
    /// Create an empty repository with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty repository with the given write policies.
    pub fn with_options(options: RepositoryOptions) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collections::default())),
            options,
        }
    }

    /// Create a repository and load the built-in catalog into it.
    ///
    /// This is the startup path: the seeder runs exactly once per call.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the catalog cannot be loaded, e.g. when
    /// `reject_duplicate_keys` is on and the catalog repeats a slug.
    pub async fn open(options: RepositoryOptions) -> Result<(Self, SeedReport), SeedError> {
        let repo = Self::with_options(options);
        let report = Seeder::builtin().run(&repo).await?;
        Ok((repo, report))
    }

    /// Write policies this repository was created with.
    pub fn options(&self) -> RepositoryOptions {
        self.options
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().await
    }
}
