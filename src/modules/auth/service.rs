use anyhow::anyhow;
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use villagehub_auth::Role;
use villagehub_core::{AppError, hash_password, verify_password};
use villagehub_models::auth::{SignInRequest, SignUpRequest};
use villagehub_models::users::User;

use crate::modules::users::service::UserService;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(FromRow)]
struct UserWithPassword {
    #[sqlx(flatten)]
    user: User,
    password: String,
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn sign_up(db: &PgPool, dto: SignUpRequest) -> Result<User, AppError> {
        let password_hash = hash_password(&dto.password)?;

        let user = UserService::create(
            db,
            &dto.username,
            &dto.email,
            &password_hash,
            Role::User,
        )
        .await?;

        tracing::info!(user_id = user.id, "Account created");
        Ok(user)
    }

    /// `dto.username` may be either the username or the e-mail address.
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn sign_in(db: &PgPool, dto: SignInRequest) -> Result<User, AppError> {
        let identifier = dto.username.trim();

        let row = sqlx::query_as::<_, UserWithPassword>(
            r#"SELECT id, username, email, role, created_at, updated_at, password
               FROM users
               WHERE username = $1 OR email = LOWER($1)"#,
        )
        .bind(identifier)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)))?;

        if !verify_password(&dto.password, &row.password)? {
            tracing::warn!(user_id = row.user.id, "Wrong password");
            return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
        }

        Ok(row.user)
    }
}
