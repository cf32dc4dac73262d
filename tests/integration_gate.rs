//! The authorization gate in front of a handler that echoes what it received.

mod common;

use axum::extract::Request;
use axum::http::{Method, StatusCode, header};
use axum::response::Response;
use axum::{Json, Router, middleware};
use serde_json::{Value, json};
use tower::ServiceExt;
use villagehub::middleware::gate::authorization_gate;
use villagehub_auth::{Identity, Role};

use common::{body_json, forged_token, jwt_config, request, token_for};

async fn echo(req: Request) -> Json<Value> {
    let header_value = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };
    let identity = req.extensions().get::<Identity>();

    Json(json!({
        "x_user_id": header_value("x-user-id"),
        "x_user_role": header_value("x-user-role"),
        "x_pathname": header_value("x-pathname"),
        "identity_user_id": identity.map(|i| i.user_id),
    }))
}

fn gate_app() -> Router {
    Router::new()
        .fallback(echo)
        .layer(middleware::from_fn_with_state(jwt_config(), authorization_gate))
}

async fn send(method: &str, uri: &str, token: Option<&str>) -> Response {
    gate_app().oneshot(request(method, uri, token)).await.unwrap()
}

fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

fn pathname(response: &Response) -> Option<&str> {
    response
        .headers()
        .get("x-pathname")
        .and_then(|v| v.to_str().ok())
}

async fn assert_forwarded_anonymously(response: Response) {
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["x_user_id"], Value::Null);
    assert_eq!(body["identity_user_id"], Value::Null);
}

async fn assert_forwarded_as(response: Response, user_id: i32, role: &str) {
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["x_user_id"], user_id.to_string());
    assert_eq!(body["x_user_role"], role);
    assert_eq!(body["identity_user_id"], user_id);
}

async fn assert_rejected(response: Response, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    assert!(location(&response).is_none());
    let body = body_json(response).await;
    assert_eq!(body, json!({ "success": false, "message": message }));
}

#[tokio::test]
async fn test_public_auth_paths_forward_whatever_the_token() {
    let user = token_for(7, Role::User);
    let forged = forged_token(7, Role::Admin);

    for path in ["/api/auth/signin", "/api/auth/signup", "/api/auth/signout"] {
        for token in [None, Some(user.as_str()), Some(forged.as_str()), Some("garbage")] {
            assert_forwarded_anonymously(send("POST", path, token).await).await;
        }
    }
}

#[tokio::test]
async fn test_user_area_requires_any_valid_token() {
    for path in ["/user-dashboard", "/user-dashboard/submissions/3"] {
        let response = send("GET", path, None).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), Some("/auth/signin"));

        let forged = forged_token(7, Role::User);
        let response = send("GET", path, Some(&forged)).await;
        assert_eq!(location(&response), Some("/auth/signin"));

        assert_forwarded_as(send("GET", path, Some(&token_for(7, Role::User))).await, 7, "USER")
            .await;
        assert_forwarded_as(send("GET", path, Some(&token_for(1, Role::Admin))).await, 1, "ADMIN")
            .await;
    }
}

#[tokio::test]
async fn test_admin_area_without_cookie_redirects_to_sign_in() {
    let response = send("GET", "/dashboard", None).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/auth/signin"));
    assert_eq!(pathname(&response), Some("/dashboard"));
}

#[tokio::test]
async fn test_admin_area_with_user_token_redirects_to_user_dashboard() {
    let token = token_for(7, Role::User);
    for path in ["/dashboard", "/dashboard/users"] {
        let response = send("GET", path, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), Some("/user-dashboard"));
        assert_eq!(pathname(&response), Some(path));
    }
}

#[tokio::test]
async fn test_admin_area_with_invalid_token_redirects_to_sign_in() {
    let forged = forged_token(1, Role::Admin);
    let response = send("GET", "/dashboard/tourism", Some(&forged)).await;
    assert_eq!(location(&response), Some("/auth/signin"));
}

#[tokio::test]
async fn test_admin_area_forwards_admin_with_identity() {
    let response = send("GET", "/dashboard/business", Some(&token_for(1, Role::Admin))).await;
    assert_forwarded_as(response, 1, "ADMIN").await;
}

#[tokio::test]
async fn test_user_api_rejects_with_json_never_redirects() {
    for method in ["GET", "PUT", "DELETE", "POST"] {
        assert_rejected(
            send(method, "/api/user/me", None).await,
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
        )
        .await;

        let forged = forged_token(7, Role::User);
        assert_rejected(
            send(method, "/api/user/businesses/3", Some(&forged)).await,
            StatusCode::UNAUTHORIZED,
            "Invalid Token",
        )
        .await;
    }
}

#[tokio::test]
async fn test_user_api_forwards_any_role() {
    assert_forwarded_as(send("GET", "/api/user/me", Some(&token_for(7, Role::User))).await, 7, "USER")
        .await;
    assert_forwarded_as(
        send("DELETE", "/api/user/businesses/2", Some(&token_for(1, Role::Admin))).await,
        1,
        "ADMIN",
    )
    .await;
}

#[tokio::test]
async fn test_business_create_with_user_token_forwards_with_user_id() {
    let response = send("POST", "/api/business", Some(&token_for(42, Role::User))).await;
    assert_forwarded_as(response, 42, "USER").await;
}

#[tokio::test]
async fn test_business_create_rejections() {
    assert_rejected(
        send("POST", "/api/business", None).await,
        StatusCode::UNAUTHORIZED,
        "Unauthorized - Login required",
    )
    .await;

    let forged = forged_token(42, Role::User);
    assert_rejected(
        send("POST", "/api/business", Some(&forged)).await,
        StatusCode::UNAUTHORIZED,
        "Invalid Token",
    )
    .await;
}

#[tokio::test]
async fn test_delete_tourism_with_user_token_is_forbidden() {
    let response = send("DELETE", "/api/tourism/5", Some(&token_for(7, Role::User))).await;

    assert_eq!(pathname(&response), Some("/api/tourism/5"));
    assert_rejected(
        response,
        StatusCode::FORBIDDEN,
        "Forbidden: Admin access required",
    )
    .await;
}

#[tokio::test]
async fn test_other_api_mutations_need_admin() {
    let user = token_for(7, Role::User);
    let admin = token_for(1, Role::Admin);
    let forged = forged_token(1, Role::Admin);

    let cases = [
        ("POST", "/api/tourism"),
        ("PUT", "/api/events/3"),
        ("PATCH", "/api/business/4/status"),
        ("PUT", "/api/business/4"),
        ("DELETE", "/api/users/2"),
        ("POST", "/api/upload"),
    ];

    for (method, path) in cases {
        assert_rejected(send(method, path, None).await, StatusCode::UNAUTHORIZED, "Unauthorized")
            .await;
        assert_rejected(
            send(method, path, Some(&forged)).await,
            StatusCode::UNAUTHORIZED,
            "Invalid Token",
        )
        .await;
        assert_rejected(
            send(method, path, Some(&user)).await,
            StatusCode::FORBIDDEN,
            "Forbidden: Admin access required",
        )
        .await;
        assert_forwarded_as(send(method, path, Some(&admin)).await, 1, "ADMIN").await;
    }
}

#[tokio::test]
async fn test_api_reads_forward_unchanged_irrespective_of_token() {
    let forged = forged_token(1, Role::Admin);
    let user = token_for(7, Role::User);

    for method in ["GET", "HEAD", "OPTIONS"] {
        for token in [None, Some(forged.as_str()), Some(user.as_str())] {
            let response = send(method, "/api/tourism", token).await;
            assert_eq!(response.status(), StatusCode::OK, "{method} with {token:?}");
        }
    }

    assert_forwarded_anonymously(send("GET", "/api/business?category=kuliner", Some(&user)).await)
        .await;
}

#[tokio::test]
async fn test_default_paths_forward() {
    for path in ["/", "/events", "/auth/signin", "/swagger-ui/"] {
        assert_forwarded_anonymously(send("GET", path, None).await).await;
    }
}

#[tokio::test]
async fn test_pathname_is_set_on_forwarded_requests() {
    let response = send("GET", "/api/events?upcoming=true", None).await;
    let body = body_json(response).await;
    assert_eq!(body["x_pathname"], "/api/events");
}

#[tokio::test]
async fn test_spoofed_identity_headers_are_stripped() {
    let spoofed = |uri: &str, token: Option<&str>| {
        let mut req = request("GET", uri, token);
        let headers = req.headers_mut();
        headers.insert("x-user-id", "1".parse().unwrap());
        headers.insert("x-user-role", "ADMIN".parse().unwrap());
        headers.insert("x-pathname", "/elsewhere".parse().unwrap());
        req
    };

    let response = gate_app().oneshot(spoofed("/api/tourism", None)).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["x_user_id"], Value::Null);
    assert_eq!(body["x_user_role"], Value::Null);
    assert_eq!(body["x_pathname"], "/api/tourism");

    let response = gate_app().oneshot(spoofed("/dashboard", None)).await.unwrap();
    assert_eq!(location(&response), Some("/auth/signin"));

    let token = token_for(7, Role::User);
    let response = gate_app()
        .oneshot(spoofed("/api/user/me", Some(&token)))
        .await
        .unwrap();
    assert_forwarded_as(response, 7, "USER").await;
}

#[tokio::test]
async fn test_empty_cookie_counts_as_missing() {
    assert_rejected(
        send("GET", "/api/user/me", Some("")).await,
        StatusCode::UNAUTHORIZED,
        "Unauthorized",
    )
    .await;
}

#[tokio::test]
async fn test_static_assets_skip_the_gate() {
    for path in ["/uploads/tourism/a.png", "/favicon.ico", "/assets/app.css"] {
        let response = send("GET", path, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }

    // image extensions skip the gate even under protected prefixes
    let response = send("GET", "/dashboard/logo.svg", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_method_matching_is_exact() {
    let user = token_for(7, Role::User);
    let req = axum::http::Request::builder()
        .method(Method::PATCH)
        .uri("/api/business/9")
        .header("cookie", format!("auth_token={}", user))
        .body(axum::body::Body::empty())
        .unwrap();

    // only POST on the business prefix is open to users
    let response = gate_app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
