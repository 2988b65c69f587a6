//! Server-rendered HTML pages.
//!
//! Every page is built with `rsx!` and rendered to a string by `dioxus-ssr`;
//! text and attribute values are escaped by the renderer. Pages receive the
//! flash messages already taken from the session and display them once.

use axum::http::StatusCode;
use dioxus::prelude::*;

mod accounts;
mod layout;
mod records;

pub use accounts::{dashboard_page, get_started_page, login_page, register_page, welcome_page};
pub use records::{doctor_form_page, doctors_page, patient_form_page, patients_page};

use layout::Layout;

/// Roles offered on the registration forms. The stored role is free text.
pub const ROLES: [&str; 5] = ["receptionist", "doctor", "nurse", "admin", "patient"];

fn render(page: Element) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(page)
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.to_string();
    let message = message.to_string();
    render(rsx! {
        Layout { title: title, flashes: Vec::new(), signed_in: false,
            p { class: "error", "{message}" }
            a { href: "/", "Back to start" }
        }
    })
}

/// `/register` link that preselects `role`.
pub(crate) fn register_href(role: &str) -> String {
    match serde_urlencoded::to_string([("role", role)]) {
        Ok(query) => format!("/register?{query}"),
        Err(_) => "/register".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_are_complete_documents() {
        let page = error_page(StatusCode::NOT_FOUND, "Patient 7 not found");
        assert!(page.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(page.ends_with("</body></html>"));
        assert!(page.contains("<head>"));
        assert!(page.contains("404 Not Found"));
        assert!(page.contains("Patient 7 not found"));
    }

    #[test]
    fn test_register_href_encodes_role() {
        assert_eq!(register_href("nurse"), "/register?role=nurse");
        assert_eq!(register_href("head nurse"), "/register?role=head+nurse");
    }
}
