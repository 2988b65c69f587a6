//! Route table.
//!
//! | Method | Path | Login required |
//! |--------|------|----------------|
//! | GET | `/`, `/welcome`, `/get-started`, `/healthz` | no |
//! | GET, POST | `/login`, `/register` | no |
//! | GET | `/logout`, `/dashboard`, `/patients`, `/doctors` | yes |
//! | GET, POST | `/add_patient`, `/edit_patient/{id}`, `/add_doctor`, `/edit_doctor/{id}` | yes |
//! | POST | `/delete_patient/{id}`, `/delete_doctor/{id}` | yes |

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::error::AppError;
use crate::guard::require_login;
use crate::AppState;

mod accounts;
mod doctors;
mod pages;
mod patients;

/// `?role=` on the onboarding pages. Absent means no preselection.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub(crate) struct RoleQuery {
    pub role: String,
}

/// Numeric `{id}` path segment. Anything that is not an integer is a 404,
/// the same as an id with no row behind it.
pub(crate) struct RecordId(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for RecordId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(RecordId(id)),
            Err(rejection) => {
                tracing::debug!(path = %parts.uri.path(), %rejection, "Unparseable record id");
                Err(AppError::NotFound(format!("No record at {}", parts.uri.path())))
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/logout", get(accounts::logout))
        .route("/dashboard", get(pages::dashboard))
        .route("/patients", get(patients::list))
        .route("/add_patient", get(patients::new_form).post(patients::create))
        .route(
            "/edit_patient/{id}",
            get(patients::edit_form).post(patients::update),
        )
        .route("/delete_patient/{id}", post(patients::delete))
        .route("/doctors", get(doctors::list))
        .route("/add_doctor", get(doctors::new_form).post(doctors::create))
        .route(
            "/edit_doctor/{id}",
            get(doctors::edit_form).post(doctors::update),
        )
        .route("/delete_doctor/{id}", post(doctors::delete))
        .route_layer(middleware::from_fn(require_login));

    Router::new()
        .route("/", get(pages::home))
        .route("/welcome", get(pages::welcome))
        .route("/get-started", get(pages::get_started))
        .route("/login", get(accounts::login_form).post(accounts::login))
        .route("/register", get(accounts::register_form).post(accounts::register))
        .route("/healthz", get(pages::healthz))
        .merge(protected)
        .with_state(state)
}
