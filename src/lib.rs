//! In-memory content repository for a legal-information website.
//!
//! [`storage::Repository`] holds users, categories, articles and solution
//! cards; [`seed::Seeder`] loads the site's fixed catalog into it at startup.

pub mod config;
pub mod seed;
pub mod storage;
pub mod util;
