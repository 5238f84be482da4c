use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::password,
    errors::{AppError, AppResult},
    models::{
        domain::User,
        dto::{request::RegisterRequest, response::UserResponse},
    },
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        request.validate()?;

        if self
            .repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateUser(request.email));
        }

        let hashed = password::hash_password(&request.password)?;
        let user = User::new(&request.email, &request.full_name, request.role, &hashed);

        let created = self.repository.create(user).await?;
        log::info!("Registered {} account for {}", created.role, created.email);

        Ok(UserResponse::from(created))
    }

    /// Checks credentials and account status. Every failure mode collapses to
    /// `InvalidCredentials` so the response does not reveal which check failed.
    pub async fn authenticate(&self, email: &str, plain_password: &str) -> AppResult<User> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !password::verify_password(plain_password, &user.hashed_password) {
            return Err(AppError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    pub async fn get_user(&self, user_id: &str) -> AppResult<UserResponse> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", user_id)))?;

        Ok(UserResponse::from(user))
    }
}
