//! Appointment creation and the patient listing.

use rusqlite::{params, Connection};

use super::utils::{ensure_ordered, id_column, now_string, parse_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Appointment, DoctorSummary, NewAppointment, PatientAppointments, StatusCount},
};

const INSERT_APPOINTMENT_SQL: &str = "INSERT INTO appointments (patient_id, doctor_id, start_time, end_time, status, patient_description, notes, video_session_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)";
const SELECT_PATIENT_APPOINTMENTS_SQL: &str = "SELECT a.id, a.patient_id, a.doctor_id, a.start_time, a.end_time, a.status, a.patient_description, a.notes, a.video_session_id, d.id, d.name, d.specialty, d.image_url FROM appointments a JOIN users d ON d.id = a.doctor_id WHERE a.patient_id = ?1 ORDER BY a.start_time ASC, a.id ASC";
const COUNT_PATIENT_APPOINTMENTS_SQL: &str = "SELECT status, COUNT(*) FROM appointments WHERE patient_id = ?1 GROUP BY status ORDER BY CASE status WHEN 'SCHEDULED' THEN 0 WHEN 'COMPLETED' THEN 1 ELSE 2 END";

impl super::Database {
    /// Helper function to construct an Appointment with its doctor from a
    /// joined row
    fn build_appointment_from_row(row: &rusqlite::Row) -> rusqlite::Result<Appointment> {
        Ok(Appointment {
            id: id_column(row, 0)?,
            patient_id: id_column(row, 1)?,
            doctor_id: id_column(row, 2)?,
            start_time: parse_column(row, 3)?,
            end_time: parse_column(row, 4)?,
            status: parse_column(row, 5)?,
            patient_description: row.get(6)?,
            notes: row.get(7)?,
            video_session_id: row.get(8)?,
            doctor: Some(DoctorSummary {
                id: id_column(row, 9)?,
                name: row.get(10)?,
                specialty: row.get(11)?,
                image_url: row.get(12)?,
            }),
        })
    }

    /// Inserts an appointment. The end must come after the start.
    pub fn create_appointment(&self, appointment: &NewAppointment) -> Result<Appointment> {
        ensure_ordered(appointment.start_time, appointment.end_time)?;

        self.connection
            .execute(
                INSERT_APPOINTMENT_SQL,
                params![
                    appointment.patient_id as i64,
                    appointment.doctor_id as i64,
                    appointment.start_time.to_string(),
                    appointment.end_time.to_string(),
                    appointment.status.as_str(),
                    appointment.patient_description,
                    appointment.notes,
                    appointment.video_session_id,
                    now_string(),
                ],
            )
            .db_context("Failed to insert appointment")?;

        Ok(Appointment {
            id: self.connection.last_insert_rowid() as u64,
            patient_id: appointment.patient_id,
            doctor_id: appointment.doctor_id,
            start_time: appointment.start_time,
            end_time: appointment.end_time,
            status: appointment.status,
            patient_description: appointment.patient_description.clone(),
            notes: appointment.notes.clone(),
            video_session_id: appointment.video_session_id.clone(),
            doctor: None,
        })
    }

    /// All appointments of a patient with per-status counts.
    ///
    /// Both reads run inside one transaction, so the counts always describe
    /// the listed appointments.
    pub fn patient_appointments(&mut self, patient_id: u64) -> Result<PatientAppointments> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let appointments = Self::select_patient_appointments(&tx, patient_id)?;
        let counts = Self::count_patient_appointments(&tx, patient_id)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(PatientAppointments {
            appointments,
            counts,
        })
    }

    fn select_patient_appointments(conn: &Connection, patient_id: u64) -> Result<Vec<Appointment>> {
        let mut stmt = conn
            .prepare(SELECT_PATIENT_APPOINTMENTS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![patient_id as i64], Self::build_appointment_from_row)
            .db_context("Failed to query appointments")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read appointment row")
    }

    fn count_patient_appointments(conn: &Connection, patient_id: u64) -> Result<Vec<StatusCount>> {
        let mut stmt = conn
            .prepare(COUNT_PATIENT_APPOINTMENTS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![patient_id as i64], |row| {
                Ok(StatusCount {
                    status: parse_column(row, 0)?,
                    count: row.get::<_, i64>(1)? as u32,
                })
            })
            .db_context("Failed to count appointments")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read count row")
    }
}
