//! Request authorization policy.
//!
//! One table decides, for every gated request, whether it is forwarded
//! (with or without the caller's identity), redirected, or rejected. It is
//! evaluated in two pure steps:
//!
//! 1. [`classify`] maps `(path, method)` to a [`RouteClass`];
//! 2. [`decide`] maps the class and the caller's [`Credential`] to a
//!    [`Decision`].
//!
//! | class               | no token                     | invalid token      | valid USER          | valid ADMIN |
//! |---------------------|------------------------------|--------------------|---------------------|-------------|
//! | `Public`, `Default` | forward                      | forward            | forward             | forward     |
//! | `UserArea`          | → `/auth/signin`             | → `/auth/signin`   | forward + id        | forward + id|
//! | `AdminArea`         | → `/auth/signin`             | → `/auth/signin`   | → `/user-dashboard` | forward + id|
//! | `ApiUserScoped`     | 401 Unauthorized             | 401 Invalid Token  | forward + id        | forward + id|
//! | `ApiBusinessCreate` | 401 Unauthorized - Login req.| 401 Invalid Token  | forward + id        | forward + id|
//! | `ApiMutation`       | 401 Unauthorized             | 401 Invalid Token  | 403                 | forward + id|

use axum::http::{Method, StatusCode};

use villagehub_config::JwtConfig;

use crate::claims::{Claims, Identity};
use crate::jwt::{VerifyError, verify_token};

/// Auth endpoints reachable whatever the token state.
pub const PUBLIC_PATHS: [&str; 3] = ["/api/auth/signin", "/api/auth/signup", "/api/auth/signout"];

pub const SIGN_IN_PAGE: &str = "/auth/signin";
pub const USER_DASHBOARD: &str = "/user-dashboard";
pub const ADMIN_DASHBOARD: &str = "/dashboard";
pub const USER_API_PREFIX: &str = "/api/user/";
pub const API_PREFIX: &str = "/api/";
pub const BUSINESS_API_PREFIX: &str = "/api/business";

const STATIC_PREFIXES: [&str; 4] = ["/static/", "/assets/", "/uploads/", "/favicon.ico"];
const STATIC_EXTENSIONS: [&str; 7] = [".svg", ".png", ".jpg", ".jpeg", ".gif", ".webp", ".ico"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteClass {
    Public,
    UserArea,
    AdminArea,
    ApiUserScoped,
    ApiMutation,
    ApiBusinessCreate,
    Default,
}

impl RouteClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteClass::Public => "public",
            RouteClass::UserArea => "user-protected",
            RouteClass::AdminArea => "admin-protected",
            RouteClass::ApiUserScoped => "api-user-scoped",
            RouteClass::ApiMutation => "api-mutation",
            RouteClass::ApiBusinessCreate => "api-mutation-business-create",
            RouteClass::Default => "default",
        }
    }

    /// Whether [`decide`] looks at the credential for this class.
    pub fn needs_credential(&self) -> bool {
        !matches!(self, RouteClass::Public | RouteClass::Default)
    }
}

/// What the caller presented, after verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Missing,
    Invalid(VerifyError),
    Valid(Claims),
}

impl Credential {
    /// Verifies the raw cookie value. An empty value counts as missing.
    pub fn resolve(token: Option<&str>, jwt_config: &JwtConfig) -> Self {
        match token.map(str::trim).filter(|t| !t.is_empty()) {
            None => Credential::Missing,
            Some(token) => match verify_token(token, jwt_config) {
                Ok(claims) => Credential::Valid(claims),
                Err(err) => Credential::Invalid(err),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Unauthorized,
    LoginRequired,
    InvalidToken,
    AdminRequired,
}

impl Rejection {
    pub fn status(&self) -> StatusCode {
        match self {
            Rejection::AdminRequired => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rejection::Unauthorized => "Unauthorized",
            Rejection::LoginRequired => "Unauthorized - Login required",
            Rejection::InvalidToken => "Invalid Token",
            Rejection::AdminRequired => "Forbidden: Admin access required",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Forward,
    ForwardWithIdentity(Identity),
    Redirect(&'static str),
    Reject(Rejection),
}

impl Decision {
    pub fn outcome(&self) -> &'static str {
        match self {
            Decision::Forward => "forward",
            Decision::ForwardWithIdentity(_) => "forward-with-identity",
            Decision::Redirect(_) => "redirect",
            Decision::Reject(_) => "reject",
        }
    }
}

/// POST, PUT, PATCH and DELETE. GET, HEAD and OPTIONS are reads.
pub fn is_mutation(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

/// False for static assets, which never pass through the gate.
pub fn is_gated_path(path: &str) -> bool {
    if STATIC_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return false;
    }
    let lower = path.to_ascii_lowercase();
    !STATIC_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

pub fn classify(path: &str, method: &Method) -> RouteClass {
    if PUBLIC_PATHS.iter().any(|p| path.starts_with(p)) {
        return RouteClass::Public;
    }
    if path.starts_with(USER_DASHBOARD) {
        return RouteClass::UserArea;
    }
    if path.starts_with(ADMIN_DASHBOARD) {
        return RouteClass::AdminArea;
    }
    if path.starts_with(USER_API_PREFIX) {
        return RouteClass::ApiUserScoped;
    }
    if path.starts_with(API_PREFIX) {
        if !is_mutation(method) {
            return RouteClass::Public;
        }
        if *method == Method::POST && path.starts_with(BUSINESS_API_PREFIX) {
            return RouteClass::ApiBusinessCreate;
        }
        return RouteClass::ApiMutation;
    }
    RouteClass::Default
}

pub fn decide(class: RouteClass, credential: Credential) -> Decision {
    use Credential::{Invalid, Missing, Valid};

    match class {
        RouteClass::Public | RouteClass::Default => Decision::Forward,
        RouteClass::UserArea => match credential {
            Valid(claims) => Decision::ForwardWithIdentity(claims.into()),
            Missing | Invalid(_) => Decision::Redirect(SIGN_IN_PAGE),
        },
        RouteClass::AdminArea => match credential {
            Valid(claims) if claims.role.is_admin() => {
                Decision::ForwardWithIdentity(claims.into())
            }
            Valid(_) => Decision::Redirect(USER_DASHBOARD),
            Missing | Invalid(_) => Decision::Redirect(SIGN_IN_PAGE),
        },
        RouteClass::ApiUserScoped => match credential {
            Missing => Decision::Reject(Rejection::Unauthorized),
            Invalid(_) => Decision::Reject(Rejection::InvalidToken),
            Valid(claims) => Decision::ForwardWithIdentity(claims.into()),
        },
        RouteClass::ApiBusinessCreate => match credential {
            Missing => Decision::Reject(Rejection::LoginRequired),
            Invalid(_) => Decision::Reject(Rejection::InvalidToken),
            Valid(claims) => Decision::ForwardWithIdentity(claims.into()),
        },
        RouteClass::ApiMutation => match credential {
            Missing => Decision::Reject(Rejection::Unauthorized),
            Invalid(_) => Decision::Reject(Rejection::InvalidToken),
            Valid(claims) if claims.role.is_admin() => {
                Decision::ForwardWithIdentity(claims.into())
            }
            Valid(_) => Decision::Reject(Rejection::AdminRequired),
        },
    }
}

/// Outcome of running the whole policy on one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub class: RouteClass,
    /// Why a presented token was refused, if one was.
    pub token_error: Option<VerifyError>,
    pub decision: Decision,
}

/// Classifies, verifies the token only when the class needs it, and decides.
pub fn evaluate(
    path: &str,
    method: &Method,
    token: Option<&str>,
    jwt_config: &JwtConfig,
) -> Evaluation {
    let class = classify(path, method);
    let credential = if class.needs_credential() {
        Credential::resolve(token, jwt_config)
    } else {
        Credential::Missing
    };
    let token_error = match &credential {
        Credential::Invalid(err) => Some(err.clone()),
        _ => None,
    };
    Evaluation {
        class,
        token_error,
        decision: decide(class, credential),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::Role;
    use crate::jwt::create_token;

    const ALL_METHODS: [Method; 5] = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
    ];

    fn config() -> JwtConfig {
        JwtConfig::with_secret("gate-test-secret-0123456789abcdef")
    }

    fn claims(role: Role) -> Claims {
        Claims {
            user_id: if role.is_admin() { 1 } else { 42 },
            username: "tester".to_string(),
            role,
            exp: 9_999_999_999,
            iat: 1,
        }
    }

    fn token(role: Role) -> String {
        create_token(&claims(role).into(), &config()).unwrap()
    }

    #[test]
    fn test_public_auth_paths_forward_for_every_credential() {
        for path in ["/api/auth/signin", "/api/auth/signup", "/api/auth/signout"] {
            for method in &ALL_METHODS {
                assert_eq!(classify(path, method), RouteClass::Public);
                for cookie in [None, Some("garbage"), Some(token(Role::User).as_str())] {
                    let decision = evaluate(path, method, cookie, &config()).decision;
                    assert_eq!(decision, Decision::Forward, "{method} {path}");
                }
            }
        }
    }

    #[test]
    fn test_classification_order() {
        assert_eq!(classify("/user-dashboard", &Method::GET), RouteClass::UserArea);
        assert_eq!(
            classify("/user-dashboard/business/3", &Method::GET),
            RouteClass::UserArea
        );
        assert_eq!(classify("/dashboard", &Method::GET), RouteClass::AdminArea);
        assert_eq!(
            classify("/dashboard/tourism", &Method::POST),
            RouteClass::AdminArea
        );
        assert_eq!(
            classify("/api/user/businesses", &Method::GET),
            RouteClass::ApiUserScoped
        );
        assert_eq!(
            classify("/api/user/me", &Method::DELETE),
            RouteClass::ApiUserScoped
        );
        assert_eq!(
            classify("/api/business", &Method::POST),
            RouteClass::ApiBusinessCreate
        );
        assert_eq!(
            classify("/api/business/9", &Method::PUT),
            RouteClass::ApiMutation
        );
        assert_eq!(
            classify("/api/tourism/5", &Method::DELETE),
            RouteClass::ApiMutation
        );
        assert_eq!(classify("/api/tourism", &Method::GET), RouteClass::Public);
        assert_eq!(classify("/api/tourism", &Method::HEAD), RouteClass::Public);
        assert_eq!(classify("/", &Method::GET), RouteClass::Default);
        assert_eq!(classify("/events", &Method::GET), RouteClass::Default);
        assert_eq!(classify("/auth/signin", &Method::GET), RouteClass::Default);
    }

    #[test]
    fn test_user_area() {
        let class = RouteClass::UserArea;
        assert_eq!(
            decide(class, Credential::Missing),
            Decision::Redirect(SIGN_IN_PAGE)
        );
        assert_eq!(
            decide(class, Credential::Invalid(VerifyError::Expired)),
            Decision::Redirect(SIGN_IN_PAGE)
        );
        for role in [Role::User, Role::Admin] {
            assert_eq!(
                decide(class, Credential::Valid(claims(role))),
                Decision::ForwardWithIdentity(claims(role).into())
            );
        }
    }

    #[test]
    fn test_admin_area() {
        let class = RouteClass::AdminArea;
        assert_eq!(
            decide(class, Credential::Missing),
            Decision::Redirect(SIGN_IN_PAGE)
        );
        assert_eq!(
            decide(class, Credential::Invalid(VerifyError::BadSignature)),
            Decision::Redirect(SIGN_IN_PAGE)
        );
        assert_eq!(
            decide(class, Credential::Valid(claims(Role::User))),
            Decision::Redirect(USER_DASHBOARD)
        );
        assert_eq!(
            decide(class, Credential::Valid(claims(Role::Admin))),
            Decision::ForwardWithIdentity(claims(Role::Admin).into())
        );
    }

    #[test]
    fn test_user_scoped_api_never_redirects() {
        let class = RouteClass::ApiUserScoped;
        assert_eq!(
            decide(class, Credential::Missing),
            Decision::Reject(Rejection::Unauthorized)
        );
        assert_eq!(
            decide(class, Credential::Invalid(VerifyError::Malformed)),
            Decision::Reject(Rejection::InvalidToken)
        );
        assert!(matches!(
            decide(class, Credential::Valid(claims(Role::User))),
            Decision::ForwardWithIdentity(_)
        ));
    }

    #[test]
    fn test_business_create_any_role() {
        let class = RouteClass::ApiBusinessCreate;
        assert_eq!(
            decide(class, Credential::Missing),
            Decision::Reject(Rejection::LoginRequired)
        );
        assert_eq!(
            decide(class, Credential::Invalid(VerifyError::Expired)),
            Decision::Reject(Rejection::InvalidToken)
        );
        let Decision::ForwardWithIdentity(identity) =
            decide(class, Credential::Valid(claims(Role::User)))
        else {
            panic!("expected forward");
        };
        assert_eq!(identity.user_id, 42);
    }

    #[test]
    fn test_api_mutation_is_admin_only() {
        let class = RouteClass::ApiMutation;
        assert_eq!(
            decide(class, Credential::Missing),
            Decision::Reject(Rejection::Unauthorized)
        );
        assert_eq!(
            decide(class, Credential::Invalid(VerifyError::Malformed)),
            Decision::Reject(Rejection::InvalidToken)
        );
        assert_eq!(
            decide(class, Credential::Valid(claims(Role::User))),
            Decision::Reject(Rejection::AdminRequired)
        );
        assert!(matches!(
            decide(class, Credential::Valid(claims(Role::Admin))),
            Decision::ForwardWithIdentity(_)
        ));
    }

    #[test]
    fn test_api_reads_ignore_token() {
        for cookie in [None, Some("garbage"), Some(token(Role::User).as_str())] {
            let evaluation = evaluate("/api/tourism", &Method::GET, cookie, &config());
            assert_eq!(evaluation.class, RouteClass::Public);
            assert_eq!(evaluation.token_error, None);
            assert_eq!(evaluation.decision, Decision::Forward);
        }
    }

    #[test]
    fn test_evaluate_end_to_end_scenarios() {
        let config = config();
        let user = token(Role::User);

        let decision = evaluate("/api/business", &Method::POST, Some(&user), &config).decision;
        assert!(matches!(decision, Decision::ForwardWithIdentity(ref id) if id.user_id == 42));

        let decision = evaluate("/api/tourism/5", &Method::DELETE, Some(&user), &config).decision;
        assert_eq!(decision, Decision::Reject(Rejection::AdminRequired));

        let decision = evaluate("/dashboard", &Method::GET, None, &config).decision;
        assert_eq!(decision, Decision::Redirect(SIGN_IN_PAGE));

        let decision = evaluate("/dashboard", &Method::GET, Some(&user), &config).decision;
        assert_eq!(decision, Decision::Redirect(USER_DASHBOARD));

        let decision = evaluate("/api/user/me", &Method::GET, Some(""), &config).decision;
        assert_eq!(decision, Decision::Reject(Rejection::Unauthorized));
    }

    #[test]
    fn test_evaluate_reports_token_error() {
        let evaluation = evaluate("/user-dashboard", &Method::GET, Some("garbage"), &config());
        assert_eq!(evaluation.token_error, Some(VerifyError::Malformed));
        assert_eq!(evaluation.decision, Decision::Redirect(SIGN_IN_PAGE));

        let unchecked = evaluate("/", &Method::GET, Some("garbage"), &config());
        assert_eq!(unchecked.class, RouteClass::Default);
        assert_eq!(unchecked.token_error, None);
    }

    #[test]
    fn test_rejection_statuses_and_messages() {
        assert_eq!(Rejection::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Rejection::LoginRequired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Rejection::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Rejection::AdminRequired.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            Rejection::LoginRequired.message(),
            "Unauthorized - Login required"
        );
        assert_eq!(
            Rejection::AdminRequired.message(),
            "Forbidden: Admin access required"
        );
    }

    #[test]
    fn test_static_assets_are_not_gated() {
        assert!(!is_gated_path("/uploads/tourism/a.png"));
        assert!(!is_gated_path("/static/app.css"));
        assert!(!is_gated_path("/favicon.ico"));
        assert!(!is_gated_path("/img/hero.JPG"));
        assert!(is_gated_path("/dashboard"));
        assert!(is_gated_path("/api/tourism"));
        assert!(is_gated_path("/"));
    }

    #[test]
    fn test_mutation_methods() {
        assert!(is_mutation(&Method::POST));
        assert!(is_mutation(&Method::DELETE));
        assert!(!is_mutation(&Method::GET));
        assert!(!is_mutation(&Method::OPTIONS));
    }
}
