//! Student task business rules.

use plinth::database::DbConnection;
use sea_orm::EntityTrait;
use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::models::students::{Entity as Students, Model as Student};
use crate::requests::CreateStudentRequest;

/// Owns default values, the completion toggle, and existence checks.
/// Storage outcomes are translated into domain results or [`ServiceError`]s.
pub struct StudentService {
    db: DbConnection,
}

impl StudentService {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// All records, most recently created first.
    pub async fn list(&self) -> Result<Vec<Student>, ServiceError> {
        let students = Students::find_all_ordered(self.db.inner()).await?;
        info!(count = students.len(), "listed students");
        Ok(students)
    }

    /// Create a record. `is_completed` has already defaulted to false when
    /// the field was absent from the request body; blank values are
    /// rejected here regardless of what the wire-level validation caught.
    pub async fn create(&self, request: CreateStudentRequest) -> Result<Student, ServiceError> {
        if request.value.trim().is_empty() {
            warn!("rejected create with blank value");
            return Err(ServiceError::Validation(
                "value must not be blank".to_string(),
            ));
        }

        let student =
            Students::insert_new(self.db.inner(), request.value, request.is_completed).await?;
        info!(id = student.id, "created student");
        Ok(student)
    }

    /// Fetch one record by id.
    pub async fn get(&self, id: i64) -> Result<Student, ServiceError> {
        match Students::find_by_id(id).one(self.db.inner()).await? {
            Some(student) => Ok(student),
            None => {
                warn!(id, "student not found");
                Err(ServiceError::NotFound)
            }
        }
    }

    /// Flip the completion flag of an existing record.
    ///
    /// Callers cannot choose the target state, only invert the current
    /// one. Two concurrent toggles on the same id may both read the same
    /// pre-toggle value and collapse into a single observable flip; that
    /// race is accepted.
    pub async fn toggle_status(&self, id: i64) -> Result<Student, ServiceError> {
        let student = self.get(id).await?;
        let updated = student
            .save_toggled(self.db.inner())
            .await
            .map_err(|err| match err {
                sea_orm::DbErr::RecordNotUpdated => ServiceError::NotFound,
                other => ServiceError::from(other),
            })?;
        info!(id, is_completed = updated.is_completed, "toggled student status");
        Ok(updated)
    }

    /// Delete a record. Returns true when a row was removed, false when
    /// nothing existed; only real storage failures surface as errors.
    pub async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let result = Students::delete_by_id(id).exec(self.db.inner()).await?;
        let removed = result.rows_affected > 0;
        if removed {
            info!(id, "deleted student");
        } else {
            warn!(id, "delete skipped, student not found");
        }
        Ok(removed)
    }
}
