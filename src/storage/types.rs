use std::fmt;

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised by create operations.
///
/// Lookups never fail: a missing record is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Article references a category id that was never created
    #[error("Category {category_id} does not exist")]
    UnknownCategory { category_id: i64 },

    /// Slug already taken by another record of the same kind
    #[error("A {kind} with slug '{slug}' already exists")]
    DuplicateSlug { kind: EntityKind, slug: String },

    #[error("Username '{username}' is already taken")]
    DuplicateUsername { username: String },
}

/// The four kinds of record held by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Category,
    Article,
    Solution,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "user",
            EntityKind::Category => "category",
            EntityKind::Article => "article",
            EntityKind::Solution => "solution",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Users
// ============================================================================

/// Site user.
///
/// The password is opaque: stored as given, never serialized, and redacted
/// in `Debug` output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip)]
    pub password: SecretString,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: SecretString,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

// ============================================================================
// Categories
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
    pub image_url: Option<String>,
}

/// Category fields supplied by the caller; optional fields default to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

// ============================================================================
// Articles
// ============================================================================

/// Stored article.
///
/// `featured` collapses the "absent" state into `false`; no query
/// distinguishes the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: Option<String>,
    pub publish_date: DateTime<Utc>,
    pub category_id: i64,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub publish_date: DateTime<Utc>,
    pub category_id: i64,
    #[serde(default)]
    pub featured: bool,
}

/// Article joined with its category at read time. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleWithCategory {
    #[serde(flatten)]
    pub article: Article,
    pub category: Category,
}

// ============================================================================
// Solutions
// ============================================================================

/// Promotional card linking to a service page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: String,
    pub link_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSolution {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub link: String,
    pub link_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use secrecy::ExposeSecret;

    fn sample_category() -> Category {
        Category {
            id: 2,
            name: "Direito do Consumidor".to_string(),
            slug: "direito-consumidor".to_string(),
            description: None,
            icon_name: Some("shield".to_string()),
            image_url: None,
        }
    }

    #[test]
    fn test_user_debug_redacts_password() {
        let user = User {
            id: 1,
            username: "admin".to_string(),
            password: SecretString::from("hunter2".to_string()),
        };

        let debug_output = format!("{:?}", user);
        assert!(!debug_output.contains("hunter2"));
        assert!(debug_output.contains("admin"));
    }

    #[test]
    fn test_user_serialization_omits_password() {
        let user = User {
            id: 1,
            username: "admin".to_string(),
            password: SecretString::from("hunter2".to_string()),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "username": "admin" }));
    }

    #[test]
    fn test_new_user_keeps_password_opaque() {
        let input = NewUser::new("maria", "s3nh@");
        assert_eq!(input.password.expose_secret(), "s3nh@");
    }

    #[test]
    fn test_category_serializes_camel_case() {
        let json = serde_json::to_value(sample_category()).unwrap();
        assert_eq!(json["iconName"], "shield");
        assert!(json["imageUrl"].is_null());
    }

    #[test]
    fn test_joined_article_flattens_fields() {
        let joined = ArticleWithCategory {
            article: Article {
                id: 7,
                title: "Troca de produto com defeito".to_string(),
                slug: "troca-produto-defeito".to_string(),
                excerpt: "Prazos".to_string(),
                content: "Texto".to_string(),
                image_url: None,
                publish_date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
                category_id: 2,
                featured: true,
            },
            category: sample_category(),
        };

        let json = serde_json::to_value(&joined).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["categoryId"], 2);
        assert_eq!(json["category"]["slug"], "direito-consumidor");
        assert_eq!(json["featured"], true);
    }

    #[test]
    fn test_new_category_optional_fields_default() {
        let input: NewCategory =
            serde_json::from_str(r#"{"name": "Família", "slug": "direito-familia"}"#).unwrap();
        assert_eq!(input.description, None);
        assert_eq!(input.icon_name, None);
        assert_eq!(input.image_url, None);
    }

    #[test]
    fn test_new_article_featured_defaults_false() {
        let input: NewArticle = serde_json::from_str(
            r#"{
                "title": "T",
                "slug": "t",
                "excerpt": "e",
                "content": "c",
                "publishDate": "2024-01-10T09:00:00Z",
                "categoryId": 1
            }"#,
        )
        .unwrap();
        assert!(!input.featured);
        assert_eq!(input.image_url, None);
    }

    #[test]
    fn test_storage_error_messages() {
        let err = StorageError::DuplicateSlug {
            kind: EntityKind::Category,
            slug: "direito-civil".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "A category with slug 'direito-civil' already exists"
        );
        assert_eq!(
            StorageError::UnknownCategory { category_id: 9 }.to_string(),
            "Category 9 does not exist"
        );
    }
}
