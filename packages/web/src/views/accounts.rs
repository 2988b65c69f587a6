//! Landing, login, registration and dashboard pages.

use api::accounts::SELF_DESCRIBE;
use api::auth::CurrentUser;
use api::models::Profile;
use dioxus::prelude::*;

use super::{render, Layout, ROLES};
use crate::flash::Flash;

const GENDERS: [&str; 4] = ["female", "male", "non-binary", SELF_DESCRIBE];

pub fn welcome_page(flashes: Vec<Flash>) -> String {
    render(rsx! {
        Layout { title: "Welcome", flashes: flashes, signed_in: false,
            p { "Manage patient and doctor records for your hospital." }
            a { href: "/get-started", "Get started" }
            " or "
            a { href: "/login", "log in" }
        }
    })
}

pub fn get_started_page(flashes: Vec<Flash>, selected_role: &str) -> String {
    let continue_href = super::register_href(selected_role);
    let selected_role = selected_role.to_string();
    render(rsx! {
        Layout { title: "Get started", flashes: flashes, signed_in: false,
            p { "Choose your role to create an account." }
            ul {
                {ROLES.iter().map(|role| {
                    let href = super::register_href(role);
                    rsx! { li { a { href: "{href}", "{role}" } } }
                })}
            }
            if !selected_role.is_empty() {
                p { a { href: "{continue_href}", "Continue as {selected_role}" } }
            }
        }
    })
}

pub fn login_page(flashes: Vec<Flash>) -> String {
    render(rsx! {
        Layout { title: "Log in", flashes: flashes, signed_in: false,
            form { method: "post", action: "/login",
                label { "Email" input { r#type: "email", name: "email", required: true } }
                label { "Password" input { r#type: "password", name: "password", required: true } }
                button { r#type: "submit", "Log in" }
            }
            p { a { href: "/get-started", "Create an account" } }
        }
    })
}

pub fn register_page(flashes: Vec<Flash>, selected_role: &str) -> String {
    let selected_role = selected_role.to_string();
    render(rsx! {
        Layout { title: "Register", flashes: flashes, signed_in: false,
            form { method: "post", action: "/register",
                label { "Role"
                    select { name: "role",
                        {ROLES.iter().map(|role| {
                            let selected = *role == selected_role;
                            rsx! { option { value: "{role}", selected: selected, "{role}" } }
                        })}
                    }
                }
                label { "Email" input { r#type: "email", name: "email", required: true } }
                label { "Password" input { r#type: "password", name: "password", required: true } }
                label { "Confirm password" input { r#type: "password", name: "confirm_password", required: true } }
                label { "First name" input { name: "first_name" } }
                label { "Last name" input { name: "last_name" } }
                label { "Address" input { name: "address" } }
                label { "Gender"
                    select { name: "gender",
                        option { value: "", "Prefer not to say" }
                        {GENDERS.iter().map(|gender| rsx! { option { value: "{gender}", "{gender}" } })}
                    }
                }
                label { "Self-described gender" input { name: "gender_self_describe" } }
                label { "How did you hear about us?" input { name: "referral_source" } }
                label { "Username (optional)" input { name: "username" } }
                button { r#type: "submit", "Register" }
            }
        }
    })
}

pub fn dashboard_page(
    flashes: Vec<Flash>,
    user: &CurrentUser,
    email: &str,
    profile: Option<&Profile>,
) -> String {
    let role = user.role.clone();
    let email = email.to_string();
    let greeting = profile
        .map(|profile| format!("{} {}", profile.first_name, profile.last_name))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());
    render(rsx! {
        Layout { title: "Dashboard", flashes: flashes, signed_in: true,
            {greeting.map(|name| rsx! { p { "Welcome, {name}." } })}
            p { "Signed in as " strong { "{role}" } " ({email})" }
            ul {
                li { a { href: "/patients", "Patients" } }
                li { a { href: "/doctors", "Doctors" } }
            }
        }
    })
}
