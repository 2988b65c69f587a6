//! Patient CRUD handlers.

use api::models::{Patient, PatientForm};
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use tower_sessions::Session;

use super::RecordId;
use crate::error::AppError;
use crate::flash::{self, Level};
use crate::{views, AppState};

async fn find_or_404(id: i64, state: &AppState) -> Result<Patient, AppError> {
    Patient::find(id, &state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Patient {id} not found")))
}

pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let patients = Patient::list(&state.pool).await?;
    let flashes = flash::take(&session).await?;
    Ok(Html(views::patients_page(flashes, &patients)))
}

pub async fn new_form(session: Session) -> Result<Html<String>, AppError> {
    let flashes = flash::take(&session).await?;
    Ok(Html(views::patient_form_page(flashes, None)))
}

/// `POST /add_patient`
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PatientForm>,
) -> Result<Redirect, AppError> {
    let new = match form.validate() {
        Ok(new) => new,
        Err(err) => {
            flash::push(&session, Level::Danger, err.to_string()).await?;
            return Ok(Redirect::to("/add_patient"));
        }
    };

    let patient = Patient::create(&new, &state.pool).await?;
    tracing::info!(patient_id = patient.id, "Patient added");
    flash::push(&session, Level::Success, "Patient added.").await?;
    Ok(Redirect::to("/patients"))
}

pub async fn edit_form(
    State(state): State<AppState>,
    session: Session,
    RecordId(id): RecordId,
) -> Result<Html<String>, AppError> {
    let patient = find_or_404(id, &state).await?;
    let flashes = flash::take(&session).await?;
    Ok(Html(views::patient_form_page(flashes, Some(&patient))))
}

/// `POST /edit_patient/{id}`
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    RecordId(id): RecordId,
    Form(form): Form<PatientForm>,
) -> Result<Redirect, AppError> {
    find_or_404(id, &state).await?;

    let new = match form.validate() {
        Ok(new) => new,
        Err(err) => {
            flash::push(&session, Level::Danger, err.to_string()).await?;
            return Ok(Redirect::to(&format!("/edit_patient/{id}")));
        }
    };

    if !Patient::update(id, &new, &state.pool).await? {
        return Err(AppError::NotFound(format!("Patient {id} not found")));
    }
    tracing::info!(patient_id = id, "Patient updated");
    flash::push(&session, Level::Success, "Patient updated.").await?;
    Ok(Redirect::to("/patients"))
}

/// `POST /delete_patient/{id}`
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    RecordId(id): RecordId,
) -> Result<Redirect, AppError> {
    if !Patient::delete(id, &state.pool).await? {
        return Err(AppError::NotFound(format!("Patient {id} not found")));
    }
    tracing::info!(patient_id = id, "Patient deleted");
    flash::push(&session, Level::Success, "Patient deleted.").await?;
    Ok(Redirect::to("/patients"))
}
