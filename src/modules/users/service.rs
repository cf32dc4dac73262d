use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use villagehub_auth::{Identity, Role};
use villagehub_core::{AppError, Paginated, PaginationMeta, PaginationParams};
use villagehub_models::users::User;

const COLUMNS: &str = "id, username, email, role, created_at, updated_at";

fn not_found() -> AppError {
    AppError::not_found(anyhow!("User not found"))
}

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: i32) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(not_found)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        pagination: &PaginationParams,
    ) -> Result<Paginated<User>, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await?;

        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {COLUMNS} FROM users ORDER BY username ASC LIMIT $1 OFFSET $2"
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await?;

        Ok(Paginated::new(users, PaginationMeta::new(total, pagination)))
    }

    /// Creates an account with the given role, or fails with 409 when the
    /// username or e-mail is taken.
    #[instrument(skip(db, password_hash))]
    pub async fn create(
        db: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            r#"INSERT INTO users (username, email, password, role)
               VALUES ($1, $2, $3, $4)
               RETURNING {COLUMNS}"#
        ))
        .bind(username.trim())
        .bind(email.trim().to_lowercase())
        .bind(password_hash)
        .bind(role)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow!("Username or email is already registered"));
            }
            AppError::from(e)
        })
    }

    #[instrument(skip(db))]
    pub async fn update_role(
        db: &PgPool,
        actor: &Identity,
        id: i32,
        role: Role,
    ) -> Result<User, AppError> {
        if actor.user_id == id && role != Role::Admin {
            return Err(AppError::bad_request(anyhow!(
                "You cannot remove your own admin role"
            )));
        }

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET role = $2, updated_at = NOW() WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(role)
        .fetch_optional(db)
        .await?
        .ok_or_else(not_found)?;

        tracing::info!(user_id = id, role = %role, by = actor.user_id, "Role changed");
        Ok(user)
    }

    /// Deleting a user also deletes their business submissions.
    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, actor: &Identity, id: i32) -> Result<(), AppError> {
        if actor.user_id == id {
            return Err(AppError::bad_request(anyhow!(
                "You cannot delete your own account"
            )));
        }

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }
        tracing::info!(user_id = id, by = actor.user_id, "User deleted");
        Ok(())
    }
}
