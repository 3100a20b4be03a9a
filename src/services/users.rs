//! User management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UpdateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Hash a password using Argon2
    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Get user by ID
    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repository.users.get(id).await
    }

    /// List all users
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Create a new user. Emails are unique.
    pub async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        let email = user.email.as_deref().unwrap_or_default();
        if self.repository.users.email_exists(email, None).await? {
            return Err(AppError::Conflict(
                "A user with this email already exists".to_string(),
            ));
        }

        let password_hash = self.hash_password(user.password.as_deref().unwrap_or_default())?;
        self.repository.users.create(&user, &password_hash).await
    }

    /// Update an existing user
    pub async fn update_user(&self, id: i32, user: UpdateUser) -> AppResult<User> {
        // Check if user exists
        self.repository.users.get(id).await?;

        if let Some(ref email) = user.email {
            if self.repository.users.email_exists(email, Some(id)).await? {
                return Err(AppError::Conflict(
                    "A user with this email already exists".to_string(),
                ));
            }
        }

        // Hash password if provided
        let password_hash = if let Some(ref password) = user.password {
            Some(self.hash_password(password)?)
        } else {
            None
        };

        self.repository.users.update(id, &user, password_hash).await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: i32) -> AppResult<()> {
        // Check if user exists
        self.repository.users.get(id).await?;

        self.repository.users.delete(id).await
    }
}
