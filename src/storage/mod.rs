mod articles;
mod categories;
mod ids;
mod repository;
mod search;
mod solutions;
mod types;
mod users;

pub use repository::{Repository, RepositoryOptions};
pub use types::{
    Article, ArticleWithCategory, Category, EntityKind, NewArticle, NewCategory, NewSolution,
    NewUser, Solution, StorageError, User,
};
