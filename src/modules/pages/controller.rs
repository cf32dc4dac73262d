use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::instrument;
use villagehub_core::{AppError, PaginationParams};
use villagehub_models::business::BusinessFilterParams;
use villagehub_models::events::EventFilterParams;
use villagehub_models::tourism::TourismFilterParams;

use crate::middleware::auth::{AuthUser, CurrentPath, RequireAdmin};
use crate::modules::business::service::BusinessService;
use crate::modules::events::service::EventService;
use crate::modules::pages::render::{
    ADMIN_NAV, PUBLIC_NAV, Page, USER_NAV, escape_html, table,
};
use crate::modules::tourism::service::TourismService;
use crate::modules::users::service::UserService;
use crate::state::AppState;

const PAGE_SIZE: i64 = 50;

fn first_page() -> PaginationParams {
    PaginationParams {
        page: Some(1),
        limit: Some(PAGE_SIZE),
    }
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// JSON-posting form used by the sign-in and sign-up pages.
fn auth_form(endpoint: &str, fields: &[(&str, &str, &str)], submit: &str) -> String {
    let mut inputs = String::new();
    for (name, label, kind) in fields {
        inputs.push_str(&format!(
            "<label>{label}<input name=\"{name}\" type=\"{kind}\" required></label>\n"
        ));
    }

    format!(
        r##"<form id="auth-form" data-endpoint="{endpoint}">
{inputs}<button type="submit">{submit}</button>
<p id="auth-error" role="alert"></p>
</form>
<script>
document.getElementById("auth-form").addEventListener("submit", async (e) => {{
  e.preventDefault();
  const body = Object.fromEntries(new FormData(e.target));
  const res = await fetch(e.target.dataset.endpoint, {{
    method: "POST",
    headers: {{ "Content-Type": "application/json" }},
    body: JSON.stringify(body),
  }});
  const json = await res.json();
  if (json.success) {{
    location.href = json.data.user.role === "ADMIN" ? "/dashboard" : "/user-dashboard";
  }} else {{
    document.getElementById("auth-error").textContent = json.message;
  }}
}});
</script>"##
    )
}

pub async fn home(CurrentPath(path): CurrentPath) -> Html<String> {
    Page {
        title: "Welcome to the village",
        current_path: &path,
        nav: &PUBLIC_NAV,
        body: "<p>Discover tourist spots, local businesses and upcoming events.</p>\n\
               <ul><li><a href=\"/tourism\">Tourism</a></li>\
               <li><a href=\"/business\">Business</a></li>\
               <li><a href=\"/events\">Events</a></li></ul>"
            .to_string(),
    }
    .render()
}

pub async fn sign_in_page(CurrentPath(path): CurrentPath) -> Html<String> {
    Page {
        title: "Sign in",
        current_path: &path,
        nav: &PUBLIC_NAV,
        body: auth_form(
            "/api/auth/signin",
            &[
                ("username", "Username or e-mail", "text"),
                ("password", "Password", "password"),
            ],
            "Sign in",
        ),
    }
    .render()
}

pub async fn sign_up_page(CurrentPath(path): CurrentPath) -> Html<String> {
    Page {
        title: "Create an account",
        current_path: &path,
        nav: &PUBLIC_NAV,
        body: auth_form(
            "/api/auth/signup",
            &[
                ("username", "Username", "text"),
                ("email", "E-mail", "email"),
                ("password", "Password", "password"),
            ],
            "Sign up",
        ),
    }
    .render()
}

#[instrument(skip(state))]
pub async fn tourism_page(
    State(state): State<AppState>,
    CurrentPath(path): CurrentPath,
) -> Result<Html<String>, AppError> {
    let filters = TourismFilterParams {
        search: None,
        pagination: first_page(),
    };
    let spots = TourismService::list(&state.db, &filters).await?;
    let rows: Vec<Vec<String>> = spots
        .data
        .into_iter()
        .map(|s| {
            vec![
                s.name,
                s.location,
                s.ticket_price.map_or("Free".to_string(), |p| format!("Rp {}", p)),
                or_dash(s.open_hours.as_deref()),
            ]
        })
        .collect();

    Ok(Page {
        title: "Tourism",
        current_path: &path,
        nav: &PUBLIC_NAV,
        body: table(&["Name", "Location", "Ticket", "Open"], &rows),
    }
    .render())
}

#[instrument(skip(state))]
pub async fn business_page(
    State(state): State<AppState>,
    CurrentPath(path): CurrentPath,
) -> Result<Html<String>, AppError> {
    let filters = BusinessFilterParams {
        pagination: first_page(),
        ..Default::default()
    };
    let businesses = BusinessService::list_approved(&state.db, &filters).await?;
    let rows: Vec<Vec<String>> = businesses
        .data
        .into_iter()
        .map(|b| vec![b.name, b.category, b.address, or_dash(b.phone.as_deref())])
        .collect();

    Ok(Page {
        title: "Local businesses",
        current_path: &path,
        nav: &PUBLIC_NAV,
        body: table(&["Name", "Category", "Address", "Phone"], &rows),
    }
    .render())
}

#[instrument(skip(state))]
pub async fn events_page(
    State(state): State<AppState>,
    CurrentPath(path): CurrentPath,
) -> Result<Html<String>, AppError> {
    let filters = EventFilterParams {
        upcoming: Some("true".to_string()),
        pagination: first_page(),
        ..Default::default()
    };
    let events = EventService::list(&state.db, &filters).await?;
    let rows: Vec<Vec<String>> = events
        .data
        .into_iter()
        .map(|e| {
            vec![
                e.title,
                e.location,
                e.starts_at.format("%Y-%m-%d %H:%M").to_string(),
            ]
        })
        .collect();

    Ok(Page {
        title: "Upcoming events",
        current_path: &path,
        nav: &PUBLIC_NAV,
        body: table(&["Event", "Location", "Starts"], &rows),
    }
    .render())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSection {
    Tourism,
    Business,
    Events,
    Users,
}

impl DashboardSection {
    pub fn parse(section: &str) -> Option<Self> {
        match section.trim_end_matches('/') {
            "tourism" => Some(Self::Tourism),
            "business" => Some(Self::Business),
            "events" => Some(Self::Events),
            "users" => Some(Self::Users),
            _ => None,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Tourism => "Manage tourism spots",
            Self::Business => "Review businesses",
            Self::Events => "Manage events",
            Self::Users => "Manage users",
        }
    }
}

#[instrument(skip(state))]
pub async fn admin_dashboard(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    CurrentPath(path): CurrentPath,
) -> Result<Html<String>, AppError> {
    let count_only = PaginationParams {
        page: Some(1),
        limit: Some(1),
    };
    let tourism = TourismService::list(
        &state.db,
        &TourismFilterParams {
            search: None,
            pagination: count_only.clone(),
        },
    )
    .await?;
    let businesses = BusinessService::list_all(&state.db, &count_only).await?;
    let events = EventService::list(
        &state.db,
        &EventFilterParams {
            pagination: count_only.clone(),
            ..Default::default()
        },
    )
    .await?;
    let users = UserService::list(&state.db, &count_only).await?;

    let rows = vec![
        vec!["Tourism spots".to_string(), tourism.meta.total.to_string()],
        vec!["Businesses".to_string(), businesses.meta.total.to_string()],
        vec!["Events".to_string(), events.meta.total.to_string()],
        vec!["Users".to_string(), users.meta.total.to_string()],
    ];

    Ok(Page {
        title: "Dashboard",
        current_path: &path,
        nav: &ADMIN_NAV,
        body: format!(
            "<p>Signed in as {}.</p>\n{}",
            escape_html(&admin.username),
            table(&["Collection", "Total"], &rows)
        ),
    }
    .render())
}

#[instrument(skip(state))]
pub async fn admin_dashboard_section(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    CurrentPath(path): CurrentPath,
    Path(section): Path<String>,
) -> Result<Html<String>, AppError> {
    let section = DashboardSection::parse(&section)
        .ok_or_else(|| AppError::not_found(anyhow!("Unknown dashboard section")))?;

    let body = match section {
        DashboardSection::Tourism => {
            let filters = TourismFilterParams {
                search: None,
                pagination: first_page(),
            };
            let rows: Vec<Vec<String>> = TourismService::list(&state.db, &filters)
                .await?
                .data
                .into_iter()
                .map(|s| vec![s.id.to_string(), s.name, s.location])
                .collect();
            table(&["ID", "Name", "Location"], &rows)
        }
        DashboardSection::Business => {
            let rows: Vec<Vec<String>> = BusinessService::list_all(&state.db, &first_page())
                .await?
                .data
                .into_iter()
                .map(|b| {
                    vec![
                        b.id.to_string(),
                        b.name,
                        b.category,
                        b.status.to_string(),
                        b.owner_id.to_string(),
                    ]
                })
                .collect();
            table(&["ID", "Name", "Category", "Status", "Owner"], &rows)
        }
        DashboardSection::Events => {
            let filters = EventFilterParams {
                pagination: first_page(),
                ..Default::default()
            };
            let rows: Vec<Vec<String>> = EventService::list(&state.db, &filters)
                .await?
                .data
                .into_iter()
                .map(|e| {
                    vec![
                        e.id.to_string(),
                        e.title,
                        e.starts_at.format("%Y-%m-%d %H:%M").to_string(),
                    ]
                })
                .collect();
            table(&["ID", "Title", "Starts"], &rows)
        }
        DashboardSection::Users => {
            let rows: Vec<Vec<String>> = UserService::list(&state.db, &first_page())
                .await?
                .data
                .into_iter()
                .map(|u| vec![u.id.to_string(), u.username, u.email, u.role.to_string()])
                .collect();
            table(&["ID", "Username", "E-mail", "Role"], &rows)
        }
    };

    Ok(Page {
        title: section.title(),
        current_path: &path,
        nav: &ADMIN_NAV,
        body,
    }
    .render())
}

#[instrument(skip(state))]
pub async fn user_dashboard(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    CurrentPath(path): CurrentPath,
) -> Result<Html<String>, AppError> {
    let rows: Vec<Vec<String>> = BusinessService::list_by_owner(&state.db, identity.user_id)
        .await?
        .into_iter()
        .map(|b| {
            vec![
                b.name,
                b.status.to_string(),
                b.review_note.unwrap_or_default(),
            ]
        })
        .collect();

    Ok(Page {
        title: "My submissions",
        current_path: &path,
        nav: &USER_NAV,
        body: format!(
            "<p>Signed in as {}.</p>\n{}",
            escape_html(&identity.username),
            table(&["Business", "Status", "Review note"], &rows)
        ),
    }
    .render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_section_parse() {
        assert_eq!(
            DashboardSection::parse("business"),
            Some(DashboardSection::Business)
        );
        assert_eq!(DashboardSection::parse("users/"), Some(DashboardSection::Users));
        assert_eq!(DashboardSection::parse("settings"), None);
    }

    #[test]
    fn test_auth_form_posts_to_endpoint() {
        let html = auth_form("/api/auth/signin", &[("username", "User", "text")], "Go");
        assert!(html.contains("data-endpoint=\"/api/auth/signin\""));
        assert!(html.contains("name=\"username\""));
    }

    #[tokio::test]
    async fn test_sign_in_page_highlights_its_link() {
        let Html(html) = sign_in_page(CurrentPath("/auth/signin".to_string())).await;
        assert!(html.contains("<a href=\"/auth/signin\" class=\"active\">"));
    }
}
