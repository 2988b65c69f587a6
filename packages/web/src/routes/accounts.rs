//! Login, registration and logout handlers.

use api::accounts::{self, Registration, RegistrationError};
use api::auth;
use api::models::normalize_email;
use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use tower_sessions::Session;

use super::RoleQuery;
use crate::error::AppError;
use crate::flash::{self, Level};
use crate::{views, AppState};

/// Shown for both an unknown email and a wrong password.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub async fn login_form(session: Session) -> Result<Html<String>, AppError> {
    let flashes = flash::take(&session).await?;
    Ok(Html(views::login_page(flashes)))
}

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    match accounts::authenticate(&form.email, &form.password, &state.pool).await? {
        Some(user) => {
            auth::sign_in(&session, &user).await?;
            tracing::info!(user_id = user.id, role = %user.role, "User logged in");
            Ok(Redirect::to("/dashboard"))
        }
        None => {
            tracing::warn!(email = %normalize_email(&form.email), "Failed login attempt");
            flash::push(&session, Level::Danger, INVALID_CREDENTIALS).await?;
            Ok(Redirect::to("/login"))
        }
    }
}

pub async fn register_form(
    session: Session,
    Query(query): Query<RoleQuery>,
) -> Result<Html<String>, AppError> {
    let flashes = flash::take(&session).await?;
    Ok(Html(views::register_page(flashes, query.role.trim())))
}

/// `POST /register`: on refusal, back to the form with the chosen role kept.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<Registration>,
) -> Result<Redirect, AppError> {
    match accounts::register(&form, &state.pool).await {
        Ok(_) => {
            flash::push(&session, Level::Success, "Registered! Please log in.").await?;
            Ok(Redirect::to("/login"))
        }
        Err(RegistrationError::Store(err)) => Err(err.into()),
        Err(refusal) => {
            let level = match &refusal {
                RegistrationError::MissingCredentials | RegistrationError::PasswordMismatch => {
                    Level::Danger
                }
                _ => Level::Warning,
            };
            tracing::info!(reason = %refusal, "Registration refused");
            flash::push(&session, level, refusal.to_string()).await?;
            Ok(Redirect::to(&views::register_href(form.role.trim())))
        }
    }
}

/// `GET /logout`: drops the whole session.
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    auth::sign_out(&session).await?;
    flash::push(&session, Level::Info, "Logged out.").await?;
    tracing::info!("User logged out");
    Ok(Redirect::to("/login"))
}
