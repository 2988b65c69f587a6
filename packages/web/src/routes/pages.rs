//! Landing pages, dashboard and liveness check.

use api::auth::{self, CurrentUser};
use api::models::{Profile, User};
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Extension;
use tower_sessions::Session;

use super::RoleQuery;
use crate::error::AppError;
use crate::flash::{self, Level};
use crate::{views, AppState};

/// `GET /`: dashboard for a signed-in session, landing page otherwise.
pub async fn home(session: Session) -> Result<Redirect, AppError> {
    Ok(match auth::current_user(&session).await? {
        Some(_) => Redirect::to("/dashboard"),
        None => Redirect::to("/welcome"),
    })
}

pub async fn welcome(session: Session) -> Result<Html<String>, AppError> {
    let flashes = flash::take(&session).await?;
    Ok(Html(views::welcome_page(flashes)))
}

pub async fn get_started(
    session: Session,
    Query(query): Query<RoleQuery>,
) -> Result<Html<String>, AppError> {
    let flashes = flash::take(&session).await?;
    Ok(Html(views::get_started_page(flashes, query.role.trim())))
}

/// `GET /dashboard`. A session whose user row is gone is signed out.
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
    Extension(current): Extension<CurrentUser>,
) -> Result<Response, AppError> {
    let Some(user) = User::find(current.id, &state.pool).await? else {
        tracing::warn!(user_id = current.id, "Session refers to a missing user");
        auth::sign_out(&session).await?;
        flash::push(&session, Level::Warning, "Please log in first.").await?;
        return Ok(Redirect::to("/login").into_response());
    };
    let profile = Profile::find_by_user(user.id, &state.pool).await?;
    let flashes = flash::take(&session).await?;
    let page = views::dashboard_page(flashes, &current, &user.email, profile.as_ref());
    Ok(Html(page).into_response())
}

/// `GET /healthz`
pub async fn healthz() -> &'static str {
    "ok"
}
