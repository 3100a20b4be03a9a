//! Categories repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CreateCategory, UpdateCategory},
};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Get category by ID
    pub async fn get(&self, id: i32) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, book_count, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))
    }

    /// List all categories
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, book_count, created_at, updated_at
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Check if a category exists
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Check if a category name already exists (case-sensitive)
    pub async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1 AND id != $2)")
                .bind(name)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    // =========================================================================
    // CREATE / UPDATE
    // =========================================================================

    /// Create a new category. The cached book count starts at zero.
    pub async fn create(&self, category: &CreateCategory) -> AppResult<Category> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO categories (name, description, book_count, created_at, updated_at)
            VALUES ($1, $2, 0, $3, $3)
            RETURNING id
            "#,
        )
        .bind(&category.name)
        .bind(&category.description)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get(id).await
    }

    /// Update name and/or description of an existing category
    pub async fn update(&self, id: i32, category: &UpdateCategory) -> AppResult<Category> {
        let now = Utc::now();

        sqlx::query(
            r#"
            UPDATE categories SET
                name = COALESCE($1, name),
                description = COALESCE($2, description),
                updated_at = $3
            WHERE id = $4
            "#,
        )
        .bind(category.name.as_deref())
        .bind(category.description.as_deref())
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.get(id).await
    }

    /// Overwrite the cached book count with a freshly computed value.
    /// A vanished category updates zero rows, which is fine.
    pub async fn set_book_count(&self, id: i32, count: i32) -> AppResult<()> {
        sqlx::query("UPDATE categories SET book_count = $1 WHERE id = $2")
            .bind(count)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Delete the category only if no book references it. The reference
    /// check and the delete are a single statement, so a concurrent book
    /// insert cannot slip in between. Returns whether a row was deleted.
    pub async fn delete_if_unreferenced(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE id = $1
              AND NOT EXISTS (SELECT 1 FROM books WHERE category_id = $1)
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
