use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use std::convert::Infallible;
use villagehub_auth::{Identity, Rejection};
use villagehub_core::AppError;

use crate::middleware::gate::X_PATHNAME;

/// The caller the authorization gate verified for this request.
///
/// Fails with 401 on routes the gate forwards without identity.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthorized(anyhow!(Rejection::Unauthorized.message())))
    }
}

/// An [`AuthUser`] holding the ADMIN role.
///
/// Mirrors the gate's admin rule so handlers stay safe if mounted elsewhere.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub Identity);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(identity) = AuthUser::from_request_parts(parts, state).await?;

        if !identity.is_admin() {
            return Err(AppError::forbidden(anyhow!(
                Rejection::AdminRequired.message()
            )));
        }

        Ok(RequireAdmin(identity))
    }
}

/// Path of the page being rendered, as propagated by the gate in `x-pathname`.
#[derive(Debug, Clone)]
pub struct CurrentPath(pub String);

impl<S> FromRequestParts<S> for CurrentPath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts
            .headers
            .get(X_PATHNAME)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_else(|| parts.uri.path().to_owned());
        Ok(CurrentPath(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use villagehub_auth::Role;

    fn parts_with(identity: Option<Identity>) -> Parts {
        let mut request = Request::builder().uri("/api/tourism").body(()).unwrap();
        if let Some(identity) = identity {
            request.extensions_mut().insert(identity);
        }
        request.into_parts().0
    }

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: 5,
            username: "ketut".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_auth_user_requires_gate_identity() {
        let mut parts = parts_with(None);
        let err = AuthUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);

        let mut parts = parts_with(Some(identity(Role::User)));
        let AuthUser(found) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(found.user_id, 5);
    }

    #[tokio::test]
    async fn test_auth_user_ignores_spoofed_headers() {
        let request = Request::builder()
            .uri("/api/user/me")
            .header("x-user-id", "1")
            .header("x-user-role", "ADMIN")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        assert!(AuthUser::from_request_parts(&mut parts, &()).await.is_err());
    }

    #[tokio::test]
    async fn test_require_admin() {
        let mut parts = parts_with(Some(identity(Role::User)));
        let err = RequireAdmin::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.error.to_string(), "Forbidden: Admin access required");

        let mut parts = parts_with(Some(identity(Role::Admin)));
        assert!(RequireAdmin::from_request_parts(&mut parts, &()).await.is_ok());
    }

    #[tokio::test]
    async fn test_current_path_prefers_gate_header() {
        let request = Request::builder()
            .uri("/dashboard/tourism")
            .header("x-pathname", "/dashboard/tourism")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        let CurrentPath(path) = CurrentPath::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(path, "/dashboard/tourism");
    }
}
