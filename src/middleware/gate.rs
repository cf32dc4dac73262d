//! HTTP adapter for the authorization policy in [`villagehub_auth::gate`].

use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use serde_json::json;
use tracing::debug;
use villagehub_auth::gate::{Decision, Evaluation, evaluate, is_gated_path};
use villagehub_config::{AUTH_COOKIE_NAME, JwtConfig};

pub const X_USER_ID: HeaderName = HeaderName::from_static("x-user-id");
pub const X_USER_ROLE: HeaderName = HeaderName::from_static("x-user-role");
pub const X_PATHNAME: HeaderName = HeaderName::from_static("x-pathname");

/// Identity headers are only ever written here; whatever the client sent is dropped.
fn strip_identity_headers(headers: &mut HeaderMap) {
    headers.remove(X_USER_ID);
    headers.remove(X_USER_ROLE);
    headers.remove(X_PATHNAME);
}

fn with_pathname(mut response: Response, pathname: Option<&HeaderValue>) -> Response {
    if let Some(value) = pathname {
        response.headers_mut().insert(X_PATHNAME, value.clone());
    }
    response
}

/// Runs before every route handler.
///
/// Layer it with `middleware::from_fn_with_state(jwt_config, authorization_gate)`.
pub async fn authorization_gate(
    State(jwt_config): State<JwtConfig>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();
    let method = req.method().clone();

    strip_identity_headers(req.headers_mut());
    let pathname = HeaderValue::from_str(&path).ok();
    if let Some(value) = &pathname {
        req.headers_mut().insert(X_PATHNAME, value.clone());
    }

    if !is_gated_path(&path) {
        return next.run(req).await;
    }

    let Evaluation {
        class,
        token_error,
        decision,
    } = evaluate(
        &path,
        &method,
        jar.get(AUTH_COOKIE_NAME).map(|c| c.value()),
        &jwt_config,
    );
    if let Some(reason) = &token_error {
        debug!(path = %path, reason = %reason, "Rejected session token");
    }
    debug!(
        method = %method,
        path = %path,
        class = class.as_str(),
        outcome = decision.outcome(),
        "Authorization gate"
    );

    match decision {
        Decision::Forward => next.run(req).await,
        Decision::ForwardWithIdentity(identity) => {
            let headers = req.headers_mut();
            headers.insert(X_USER_ID, HeaderValue::from(identity.user_id));
            headers.insert(X_USER_ROLE, HeaderValue::from_static(identity.role.as_str()));
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Decision::Redirect(to) => {
            with_pathname(Redirect::temporary(to).into_response(), pathname.as_ref())
        }
        Decision::Reject(rejection) => {
            let body = Json(json!({
                "success": false,
                "message": rejection.message(),
            }));
            with_pathname(
                (rejection.status(), body).into_response(),
                pathname.as_ref(),
            )
        }
    }
}
