//! Doctor CRUD handlers.

use api::models::{Doctor, DoctorForm};
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use tower_sessions::Session;

use super::RecordId;
use crate::error::AppError;
use crate::flash::{self, Level};
use crate::{views, AppState};

async fn find_or_404(id: i64, state: &AppState) -> Result<Doctor, AppError> {
    Doctor::find(id, &state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Doctor {id} not found")))
}

pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let doctors = Doctor::list(&state.pool).await?;
    let flashes = flash::take(&session).await?;
    Ok(Html(views::doctors_page(flashes, &doctors)))
}

pub async fn new_form(session: Session) -> Result<Html<String>, AppError> {
    let flashes = flash::take(&session).await?;
    Ok(Html(views::doctor_form_page(flashes, None)))
}

pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DoctorForm>,
) -> Result<Redirect, AppError> {
    let new = match form.validate() {
        Ok(new) => new,
        Err(err) => {
            flash::push(&session, Level::Danger, err.to_string()).await?;
            return Ok(Redirect::to("/add_doctor"));
        }
    };

    let doctor = Doctor::create(&new, &state.pool).await?;
    tracing::info!(doctor_id = doctor.id, "Doctor added");
    flash::push(&session, Level::Success, "Doctor added.").await?;
    Ok(Redirect::to("/doctors"))
}

pub async fn edit_form(
    State(state): State<AppState>,
    session: Session,
    RecordId(id): RecordId,
) -> Result<Html<String>, AppError> {
    let doctor = find_or_404(id, &state).await?;
    let flashes = flash::take(&session).await?;
    Ok(Html(views::doctor_form_page(flashes, Some(&doctor))))
}

pub async fn update(
    State(state): State<AppState>,
    session: Session,
    RecordId(id): RecordId,
    Form(form): Form<DoctorForm>,
) -> Result<Redirect, AppError> {
    find_or_404(id, &state).await?;

    let new = match form.validate() {
        Ok(new) => new,
        Err(err) => {
            flash::push(&session, Level::Danger, err.to_string()).await?;
            return Ok(Redirect::to(&format!("/edit_doctor/{id}")));
        }
    };

    if !Doctor::update(id, &new, &state.pool).await? {
        return Err(AppError::NotFound(format!("Doctor {id} not found")));
    }
    tracing::info!(doctor_id = id, "Doctor updated");
    flash::push(&session, Level::Success, "Doctor updated.").await?;
    Ok(Redirect::to("/doctors"))
}

/// `POST /delete_doctor/{id}`
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    RecordId(id): RecordId,
) -> Result<Redirect, AppError> {
    if !Doctor::delete(id, &state.pool).await? {
        return Err(AppError::NotFound(format!("Doctor {id} not found")));
    }
    tracing::info!(doctor_id = id, "Doctor deleted");
    flash::push(&session, Level::Success, "Doctor deleted.").await?;
    Ok(Redirect::to("/doctors"))
}
