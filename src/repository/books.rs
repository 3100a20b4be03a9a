//! Books repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Get book by ID
    pub async fn get(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, isbn, published_year, stock, description,
                   category_id AS category, created_at, updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, isbn, published_year, stock, description,
                   category_id AS category, created_at, updated_at
            FROM books
            ORDER BY title
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Check if ISBN already exists
    pub async fn isbn_exists(&self, isbn: &str, exclude_id: Option<i32>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1 AND id != $2)")
                .bind(isbn)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1)")
                .bind(isbn)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// Count books referencing a category. Source of truth for the cached
    /// count on the category row.
    pub async fn count_by_category(&self, category_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // =========================================================================
    // CREATE / UPDATE
    // =========================================================================

    /// Create a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (
                title, author, isbn, published_year, stock, description,
                category_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.published_year)
        .bind(book.stock.unwrap_or(0))
        .bind(&book.description)
        .bind(book.category)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get(id).await
    }

    /// Update an existing book
    pub async fn update(&self, id: i32, book: &UpdateBook) -> AppResult<Book> {
        let now = Utc::now();

        sqlx::query(
            r#"
            UPDATE books SET
                title = COALESCE($1, title),
                author = COALESCE($2, author),
                isbn = COALESCE($3, isbn),
                published_year = COALESCE($4, published_year),
                stock = COALESCE($5, stock),
                description = COALESCE($6, description),
                category_id = COALESCE($7, category_id),
                updated_at = $8
            WHERE id = $9
            "#,
        )
        .bind(book.title.as_deref())
        .bind(book.author.as_deref())
        .bind(book.isbn.as_deref())
        .bind(book.published_year)
        .bind(book.stock)
        .bind(book.description.as_deref())
        .bind(book.category)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.get(id).await
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Delete a book
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
