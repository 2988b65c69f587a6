//! Patient records.

use serde::Deserialize;
use sqlx::{FromRow, SqlitePool};

use super::{required, ValidationError};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// Raw add/edit form. Missing fields deserialize as empty strings so they
/// fail validation instead of the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatientForm {
    pub name: String,
    pub age: String,
    pub gender: String,
}

/// A validated patient ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

impl PatientForm {
    pub fn validate(&self) -> Result<NewPatient, ValidationError> {
        let name = required(&self.name)?;
        let age = required(&self.age)?;
        let gender = required(&self.gender)?;
        let age = age.parse().map_err(|_| ValidationError::InvalidAge)?;
        Ok(NewPatient {
            name: name.to_string(),
            age,
            gender: gender.to_string(),
        })
    }
}

impl Patient {
    /// All patients, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Patient>> {
        Ok(sqlx::query_as("SELECT id, name, age, gender FROM patients ORDER BY id DESC")
            .fetch_all(pool)
            .await?)
    }

    pub async fn find(id: i64, pool: &SqlitePool) -> Result<Option<Patient>> {
        Ok(sqlx::query_as("SELECT id, name, age, gender FROM patients WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    pub async fn create(new: &NewPatient, pool: &SqlitePool) -> Result<Patient> {
        Ok(sqlx::query_as(
            "INSERT INTO patients (name, age, gender) VALUES (?, ?, ?) \
             RETURNING id, name, age, gender",
        )
        .bind(&new.name)
        .bind(new.age)
        .bind(&new.gender)
        .fetch_one(pool)
        .await?)
    }

    /// Overwrite every field of patient `id`. Returns `false` if no such row.
    pub async fn update(id: i64, new: &NewPatient, pool: &SqlitePool) -> Result<bool> {
        let result = sqlx::query("UPDATE patients SET name = ?, age = ?, gender = ? WHERE id = ?")
            .bind(&new.name)
            .bind(new.age)
            .bind(&new.gender)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns `false` if no such row.
    pub async fn delete(id: i64, pool: &SqlitePool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM patients WHERE id = ?")
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

    fn form(name: &str, age: &str, gender: &str) -> PatientForm {
        PatientForm {
            name: name.into(),
            age: age.into(),
            gender: gender.into(),
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            form(" Ada ", " 42 ", "female").validate(),
            Ok(NewPatient {
                name: "Ada".into(),
                age: 42,
                gender: "female".into(),
            })
        );
        assert_eq!(form("", "42", "f").validate(), Err(ValidationError::MissingFields));
        assert_eq!(form("Ada", "   ", "f").validate(), Err(ValidationError::MissingFields));
        assert_eq!(form("Ada", "4x", "f").validate(), Err(ValidationError::InvalidAge));
        assert_eq!(form("Ada", "4.5", "f").validate(), Err(ValidationError::InvalidAge));
    }

    #[test]
    fn test_missing_fields_take_precedence_over_age() {
        assert_eq!(form("Ada", "abc", "").validate(), Err(ValidationError::MissingFields));
    }

    #[tokio::test]
    async fn test_crud() {
        let pool = connect_in_memory().await.unwrap();
        let first = Patient::create(&form("Ada", "42", "f").validate().unwrap(), &pool)
            .await
            .unwrap();
        let second = Patient::create(&form("Bob", "7", "m").validate().unwrap(), &pool)
            .await
            .unwrap();

        let listed = Patient::list(&pool).await.unwrap();
        assert_eq!(listed, vec![second.clone(), first.clone()]);

        let edited = form("Ada L.", "43", "f").validate().unwrap();
        assert!(Patient::update(first.id, &edited, &pool).await.unwrap());
        let reloaded = Patient::find(first.id, &pool).await.unwrap().unwrap();
        assert_eq!(reloaded.name, "Ada L.");
        assert_eq!(reloaded.age, 43);

        assert!(Patient::delete(first.id, &pool).await.unwrap());
        assert!(!Patient::delete(first.id, &pool).await.unwrap());
        assert!(!Patient::update(first.id, &edited, &pool).await.unwrap());
        assert!(Patient::find(first.id, &pool).await.unwrap().is_none());
    }
}
