//! Minimal HTML shell shared by every page.

use std::fmt::Write;

use axum::response::Html;

pub type NavLink = (&'static str, &'static str);

pub const PUBLIC_NAV: [NavLink; 6] = [
    ("/", "Home"),
    ("/tourism", "Tourism"),
    ("/business", "Business"),
    ("/events", "Events"),
    ("/auth/signin", "Sign in"),
    ("/auth/signup", "Sign up"),
];

pub const ADMIN_NAV: [NavLink; 5] = [
    ("/dashboard", "Overview"),
    ("/dashboard/tourism", "Tourism"),
    ("/dashboard/business", "Businesses"),
    ("/dashboard/events", "Events"),
    ("/dashboard/users", "Users"),
];

pub const USER_NAV: [NavLink; 2] = [("/user-dashboard", "My submissions"), ("/", "Home")];

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

pub fn is_active(href: &str, current_path: &str) -> bool {
    normalize(href) == normalize(current_path)
}

/// Renders an HTML table; every cell is escaped.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "<p class=\"empty\">Nothing here yet.</p>".to_string();
    }

    let mut html = String::from("<table><thead><tr>");
    for header in headers {
        let _ = write!(html, "<th>{}</th>", escape_html(header));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", escape_html(cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

pub struct Page<'a> {
    pub title: &'a str,
    pub current_path: &'a str,
    pub nav: &'a [NavLink],
    /// Already-rendered HTML; callers escape dynamic text.
    pub body: String,
}

impl Page<'_> {
    pub fn render(&self) -> Html<String> {
        let mut nav = String::new();
        for (href, label) in self.nav {
            let class = if is_active(href, self.current_path) {
                " class=\"active\""
            } else {
                ""
            };
            let _ = write!(nav, "<a href=\"{}\"{}>{}</a>", href, class, escape_html(label));
        }

        Html(format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title} | VillageHub</title>\n</head>\n<body>\n\
             <nav>{nav}</nav>\n<main>\n<h1>{title}</h1>\n{body}\n</main>\n</body>\n</html>\n",
            title = escape_html(self.title),
            nav = nav,
            body = self.body,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("Warung Made"), "Warung Made");
    }

    #[test]
    fn test_is_active_ignores_trailing_slash() {
        assert!(is_active("/dashboard/users", "/dashboard/users/"));
        assert!(is_active("/", "/"));
        assert!(!is_active("/dashboard", "/dashboard/users"));
        assert!(!is_active("/", "/tourism"));
    }

    #[test]
    fn test_render_marks_current_link() {
        let Html(html) = Page {
            title: "Events",
            current_path: "/events",
            nav: &PUBLIC_NAV,
            body: String::new(),
        }
        .render();

        assert!(html.contains("<a href=\"/events\" class=\"active\">Events</a>"));
        assert!(html.contains("<a href=\"/tourism\">Tourism</a>"));
        assert_eq!(html.matches("class=\"active\"").count(), 1);
    }

    #[test]
    fn test_table_escapes_cells() {
        let html = table(&["Name"], &[vec!["<b>Pura</b>".to_string()]]);
        assert!(html.contains("<td>&lt;b&gt;Pura&lt;/b&gt;</td>"));
        assert!(table(&["Name"], &[]).contains("Nothing here yet"));
    }
}
