//! Page chrome shared by every view.
//!
//! `Layout` renders the `head` and `body`; the document root is added by
//! `views::render`.

use dioxus::prelude::*;

use crate::flash::Flash;

const STYLE: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif; margin: 0; color: #37352f; }
nav { display: flex; gap: 1rem; padding: 0.75rem 1.5rem; background: #f7f6f3; border-bottom: 1px solid #e9e9e7; }
main { padding: 1.5rem; max-width: 960px; }
.flash { padding: 0.5rem 0.75rem; margin-bottom: 0.5rem; border-radius: 4px; }
.flash-success { background: #dbeddb; }
.flash-info { background: #d3e5ef; }
.flash-warning { background: #fdecc8; }
.flash-danger { background: #ffe2dd; }
form.inline { display: inline; }
label { display: block; margin-top: 0.5rem; }
table { border-collapse: collapse; width: 100%; }
td, th { padding: 0.375rem 0.5rem; border-bottom: 1px solid #e9e9e7; text-align: left; }
"#;

#[component]
pub fn Layout(
    #[props(into)] title: String,
    flashes: Vec<Flash>,
    signed_in: bool,
    children: Element,
) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{title} · Hospital" }
            style { {STYLE} }
        }
        body {
            nav {
                if signed_in {
                    a { href: "/dashboard", "Dashboard" }
                    a { href: "/patients", "Patients" }
                    a { href: "/doctors", "Doctors" }
                    a { href: "/logout", "Log out" }
                } else {
                    a { href: "/welcome", "Home" }
                    a { href: "/login", "Log in" }
                    a { href: "/get-started", "Get started" }
                }
            }
            main {
                h1 { "{title}" }
                {flashes.iter().map(|flash| {
                    let class = format!("flash flash-{}", flash.level.as_str());
                    let message = flash.message.clone();
                    rsx! { div { class: "{class}", "{message}" } }
                })}
                {children}
            }
        }
    }
}
