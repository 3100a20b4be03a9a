//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full book row. The `category` field holds the id of the owning category;
/// queries alias the `category_id` column accordingly.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: Option<i32>,
    pub stock: i32,
    pub description: Option<String>,
    pub category: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title must not be empty")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Author is required"),
        length(min = 1, message = "Author must not be empty")
    )]
    pub author: Option<String>,
    #[validate(
        required(message = "ISBN is required"),
        length(min = 1, message = "ISBN must not be empty")
    )]
    pub isbn: Option<String>,
    #[validate(range(min = 0, max = 9999, message = "Published year out of range"))]
    pub published_year: Option<i32>,
    #[validate(range(min = 0, message = "Stock must be non-negative"))]
    pub stock: Option<i32>,
    pub description: Option<String>,
    #[validate(required(message = "Category is required"))]
    pub category: Option<i32>,
}

/// Update book request. All fields optional; a present `category` moves the
/// book to that category.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: Option<String>,
    #[validate(length(min = 1, message = "ISBN must not be empty"))]
    pub isbn: Option<String>,
    #[validate(range(min = 0, max = 9999, message = "Published year out of range"))]
    pub published_year: Option<i32>,
    #[validate(range(min = 0, message = "Stock must be non-negative"))]
    pub stock: Option<i32>,
    pub description: Option<String>,
    pub category: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateBook {
        CreateBook {
            title: Some("The Left Hand of Darkness".to_string()),
            author: Some("Ursula K. Le Guin".to_string()),
            isbn: Some("978-0-441-47812-5".to_string()),
            published_year: Some(1969),
            stock: Some(3),
            description: None,
            category: Some(1),
        }
    }

    #[test]
    fn create_accepts_complete_request() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn create_collects_all_missing_fields() {
        let empty = CreateBook {
            title: None,
            author: None,
            isbn: None,
            published_year: None,
            stock: None,
            description: None,
            category: None,
        };
        let errors = empty.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("author"));
        assert!(fields.contains_key("isbn"));
        assert!(fields.contains_key("category"));
    }

    #[test]
    fn create_rejects_negative_stock() {
        let mut book = valid_create();
        book.stock = Some(-1);
        assert!(book.validate().is_err());
    }

    #[test]
    fn update_validates_only_present_fields() {
        let noop = UpdateBook {
            title: None,
            author: None,
            isbn: None,
            published_year: None,
            stock: None,
            description: None,
            category: None,
        };
        assert!(noop.validate().is_ok());

        let bad_year = UpdateBook {
            published_year: Some(-3),
            ..noop
        };
        assert!(bad_year.validate().is_err());
    }
}
