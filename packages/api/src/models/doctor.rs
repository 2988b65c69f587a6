//! Doctor records.

use serde::Deserialize;
use sqlx::{FromRow, SqlitePool};

use super::{required, ValidationError};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DoctorForm {
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctor {
    pub name: String,
    pub specialty: String,
}

impl DoctorForm {
    pub fn validate(&self) -> Result<NewDoctor, ValidationError> {
        Ok(NewDoctor {
            name: required(&self.name)?.to_string(),
            specialty: required(&self.specialty)?.to_string(),
        })
    }
}

impl Doctor {
    /// All doctors, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Doctor>> {
        Ok(sqlx::query_as("SELECT id, name, specialty FROM doctors ORDER BY id DESC")
            .fetch_all(pool)
            .await?)
    }

    pub async fn find(id: i64, pool: &SqlitePool) -> Result<Option<Doctor>> {
        Ok(sqlx::query_as("SELECT id, name, specialty FROM doctors WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    pub async fn create(new: &NewDoctor, pool: &SqlitePool) -> Result<Doctor> {
        Ok(sqlx::query_as(
            "INSERT INTO doctors (name, specialty) VALUES (?, ?) RETURNING id, name, specialty",
        )
        .bind(&new.name)
        .bind(&new.specialty)
        .fetch_one(pool)
        .await?)
    }

    pub async fn update(id: i64, new: &NewDoctor, pool: &SqlitePool) -> Result<bool> {
        let result = sqlx::query("UPDATE doctors SET name = ?, specialty = ? WHERE id = ?")
            .bind(&new.name)
            .bind(&new.specialty)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(id: i64, pool: &SqlitePool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM doctors WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;

    #[test]
    fn test_validate_requires_both_fields() {
        let form = DoctorForm {
            name: "House".into(),
            specialty: " ".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[tokio::test]
    async fn test_crud() {
        let pool = connect_in_memory().await.unwrap();
        let new = NewDoctor {
            name: "House".into(),
            specialty: "Diagnostics".into(),
        };
        let doctor = Doctor::create(&new, &pool).await.unwrap();
        assert_eq!(Doctor::list(&pool).await.unwrap(), vec![doctor.clone()]);

        let edited = NewDoctor {
            name: "Wilson".into(),
            specialty: "Oncology".into(),
        };
        assert!(Doctor::update(doctor.id, &edited, &pool).await.unwrap());
        let reloaded = Doctor::find(doctor.id, &pool).await.unwrap().unwrap();
        assert_eq!(reloaded.specialty, "Oncology");

        assert!(Doctor::delete(doctor.id, &pool).await.unwrap());
        assert!(Doctor::list(&pool).await.unwrap().is_empty());
    }
}
