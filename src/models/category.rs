//! Category model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full category row, including the cached book count
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Cached number of books referencing this category. Derived, never
    /// authoritative: recounted in full after every book mutation.
    pub book_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create category request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name must not be empty")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Update category request. Name and description only; the book count is
/// never written through this path.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_name() {
        let missing = CreateCategory {
            name: None,
            description: None,
        };
        assert!(missing.validate().is_err());

        let empty = CreateCategory {
            name: Some(String::new()),
            description: None,
        };
        assert!(empty.validate().is_err());

        let valid = CreateCategory {
            name: Some("Fiction".to_string()),
            description: Some("Novels and short stories".to_string()),
        };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn update_accepts_absent_fields() {
        let noop = UpdateCategory {
            name: None,
            description: None,
        };
        assert!(noop.validate().is_ok());

        let empty_name = UpdateCategory {
            name: Some(String::new()),
            description: None,
        };
        assert!(empty_name.validate().is_err());
    }
}
