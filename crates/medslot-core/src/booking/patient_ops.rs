//! Patient-facing operations.

use log::{debug, error};
use tokio::task;

use super::Booking;
use crate::{
    db::Database,
    error::{BookingError, Result},
    identity::Identity,
    models::{PatientAppointments, Role},
};

impl Booking {
    /// All appointments of the calling patient, earliest first, with
    /// per-status counts.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Unauthorized` when the caller has no session
    /// Returns `BookingError::UserNotFound` when the caller is not a patient
    pub async fn patient_appointments(
        &self,
        identity: &dyn Identity,
    ) -> Result<PatientAppointments> {
        let principal = identity
            .current_principal()
            .ok_or(BookingError::Unauthorized)?;
        let db_path = self.db_path.clone();

        let result = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let patient = db
                .find_user_by_principal(&principal, Some(Role::Patient))?
                .ok_or_else(|| BookingError::UserNotFound {
                    principal: principal.clone(),
                    role: Role::Patient.label().to_string(),
                })?;
            debug!("Listing appointments for patient {}", patient.id);
            db.patient_appointments(patient.id)
        })
        .await
        .map_err(BookingError::join)?;

        if let Err(e) = &result {
            error!("Failed to get patient appointments: {e}");
        }
        result
    }
}
