use anyhow::{Context, anyhow, bail};
use sqlx::PgPool;
use validator::Validate;
use villagehub_auth::Role;
use villagehub_core::hash_password;
use villagehub_models::auth::SignUpRequest;

/// Applies the same rules as `POST /api/auth/signup`.
pub fn check_admin_input(username: &str, email: &str, password: &str) -> anyhow::Result<()> {
    let request = SignUpRequest {
        username: username.to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
    };

    request.validate().map_err(|errors| {
        let mut messages: Vec<String> = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .map(|err| match &err.message {
                Some(message) => message.to_string(),
                None => err.code.to_string(),
            })
            .collect();
        messages.sort();
        anyhow!(messages.join(", "))
    })
}

/// Inserts an ADMIN account and returns its id.
pub async fn create_admin(
    db: &PgPool,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<i32> {
    check_admin_input(username, email, password)?;
    let password_hash = hash_password(password).map_err(|e| anyhow::anyhow!("{}", e))?;

    let id = sqlx::query_scalar::<_, i32>(
        r#"INSERT INTO users (username, email, password, role)
           VALUES ($1, $2, $3, $4)
           RETURNING id"#,
    )
    .bind(username.trim())
    .bind(email.trim().to_lowercase())
    .bind(&password_hash)
    .bind(Role::Admin)
    .fetch_one(db)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(db_err) = &e
            && db_err.is_unique_violation()
        {
            return anyhow::anyhow!("a user with this username or email already exists");
        }
        anyhow::Error::from(e)
    })?;

    Ok(id)
}

/// Gives an existing account the ADMIN role.
pub async fn promote(db: &PgPool, username: &str) -> anyhow::Result<()> {
    let result = sqlx::query("UPDATE users SET role = $2, updated_at = NOW() WHERE username = $1")
        .bind(username.trim())
        .bind(Role::Admin)
        .execute(db)
        .await
        .context("failed to update role")?;

    if result.rows_affected() == 0 {
        bail!("no user named '{}'", username.trim());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_admin_input() {
        assert!(check_admin_input("kades", "kades@desa.id", "rahasia-desa").is_ok());
        assert!(check_admin_input("ka", "kades@desa.id", "rahasia-desa").is_err());
        assert!(check_admin_input("kades", "kades", "rahasia-desa").is_err());
        assert!(check_admin_input("kades", "kades@desa.id", "short").is_err());
    }

    #[test]
    fn test_check_admin_input_matches_sign_up_rules() {
        let err = check_admin_input("kades", "a@", "rahasia-desa").unwrap_err();
        assert_eq!(err.to_string(), "email must be a valid address");

        let err = check_admin_input("   ", "kades@desa.id", "rahasia-desa").unwrap_err();
        assert_eq!(err.to_string(), "username must be 3-50 characters");

        let err = check_admin_input("ka", "nope", "short").unwrap_err();
        assert_eq!(
            err.to_string(),
            "email must be a valid address, password must be at least 8 characters, \
             username must be 3-50 characters"
        );
    }
}
