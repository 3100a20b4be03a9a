//! Catalog management service.
//!
//! Owns the one cross-entity rule in the system: each category carries a
//! cached count of the books referencing it, and a category with books
//! cannot be deleted. The count is maintained by `recount_category`, a full
//! recount triggered after every book mutation.

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, CreateBook, UpdateBook},
        category::{Category, CreateCategory, UpdateCategory},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // =========================================================================
    // CATEGORIES
    // =========================================================================

    /// List all categories
    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.repository.categories.list().await
    }

    /// Get category by ID
    pub async fn get_category(&self, id: i32) -> AppResult<Category> {
        self.repository.categories.get(id).await
    }

    /// Create a new category. Names are unique (case-sensitive).
    pub async fn create_category(&self, category: CreateCategory) -> AppResult<Category> {
        let name = category.name.as_deref().unwrap_or_default();
        if self.repository.categories.name_exists(name, None).await? {
            return Err(AppError::Conflict(
                "A category with this name already exists".to_string(),
            ));
        }

        self.repository.categories.create(&category).await
    }

    /// Update name and/or description. The cached book count is left alone:
    /// it only moves when books do.
    pub async fn update_category(&self, id: i32, category: UpdateCategory) -> AppResult<Category> {
        // Check if category exists
        self.repository.categories.get(id).await?;

        if let Some(ref name) = category.name {
            if self.repository.categories.name_exists(name, Some(id)).await? {
                return Err(AppError::Conflict(
                    "A category with this name already exists".to_string(),
                ));
            }
        }

        self.repository.categories.update(id, &category).await
    }

    /// Delete a category, refused while any book still references it.
    /// The reference check and the delete are one atomic statement; zero
    /// rows deleted means the category is either referenced or gone.
    pub async fn delete_category(&self, id: i32) -> AppResult<()> {
        if self.repository.categories.delete_if_unreferenced(id).await? {
            return Ok(());
        }

        if self.repository.categories.exists(id).await? {
            return Err(AppError::ReferentialConflict(
                "Category has books and cannot be deleted".to_string(),
            ));
        }

        Err(AppError::NotFound(format!("Category with id {} not found", id)))
    }

    // =========================================================================
    // BOOKS
    // =========================================================================

    /// List all books
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get(id).await
    }

    /// Create a new book in an existing category
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        let category_id = book.category.unwrap_or_default();
        if !self.repository.categories.exists(category_id).await? {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                category_id
            )));
        }

        let isbn = book.isbn.as_deref().unwrap_or_default();
        if self.repository.books.isbn_exists(isbn, None).await? {
            return Err(AppError::Conflict(
                "A book with this ISBN already exists".to_string(),
            ));
        }

        let created = self.repository.books.create(&book).await?;
        self.recount_category(created.category).await;

        Ok(created)
    }

    /// Update an existing book, optionally moving it to another category
    pub async fn update_book(&self, id: i32, book: UpdateBook) -> AppResult<Book> {
        let existing = self.repository.books.get(id).await?;

        if let Some(category_id) = book.category {
            if category_id != existing.category
                && !self.repository.categories.exists(category_id).await?
            {
                return Err(AppError::NotFound(format!(
                    "Category with id {} not found",
                    category_id
                )));
            }
        }

        if let Some(ref isbn) = book.isbn {
            if self.repository.books.isbn_exists(isbn, Some(id)).await? {
                return Err(AppError::Conflict(
                    "A book with this ISBN already exists".to_string(),
                ));
            }
        }

        let updated = self.repository.books.update(id, &book).await?;

        self.recount_category(updated.category).await;
        if existing.category != updated.category {
            self.recount_category(existing.category).await;
        }

        Ok(updated)
    }

    /// Delete a book
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        let existing = self.repository.books.get(id).await?;

        self.repository.books.delete(id).await?;
        self.recount_category(existing.category).await;

        Ok(())
    }

    // =========================================================================
    // BOOK COUNT MAINTENANCE
    // =========================================================================

    /// Recount the books referencing a category and overwrite its cached
    /// count. Always a full count, never an increment, so drift from a
    /// missed or failed trigger is repaired by the next one. A failure is
    /// logged and swallowed: the book write that triggered the recount
    /// stays committed.
    pub async fn recount_category(&self, category_id: i32) {
        if let Err(e) = self.try_recount_category(category_id).await {
            tracing::warn!(
                "Failed to recount books for category {}: {}",
                category_id,
                e
            );
        }
    }

    async fn try_recount_category(&self, category_id: i32) -> AppResult<()> {
        let count = self.repository.books.count_by_category(category_id).await?;
        self.repository
            .categories
            .set_book_count(category_id, count as i32)
            .await
    }
}
