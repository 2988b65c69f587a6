//! Login-required middleware for protected routes.
//!
//! Applied with `route_layer` so it only runs for matched protected routes.
//! An anonymous request gets a warning flash and a redirect to `/login`; the
//! original request is dropped. A signed-in request continues with
//! [`CurrentUser`] in its extensions. Roles are not checked.

use api::auth::{self, CurrentUser};
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::error::AppError;
use crate::flash::{self, Level};

pub async fn require_login(session: Session, request: Request, next: Next) -> Response {
    match require_login_inner(session, request, next).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

async fn require_login_inner(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(user) = auth::current_user(&session).await? else {
        tracing::debug!(path = %request.uri().path(), "Rejected anonymous request");
        flash::push(&session, Level::Warning, "Please log in first.").await?;
        return Ok(Redirect::to("/login").into_response());
    };

    request.extensions_mut().insert::<CurrentUser>(user);
    Ok(next.run(request).await)
}
