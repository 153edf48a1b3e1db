//! Appointment model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::AppointmentStatus;
use crate::time::StoredTime;

/// Public profile of the doctor attached to an appointment listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoctorSummary {
    pub id: u64,
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub image_url: Option<String>,
}

/// A booked consultation between a patient and a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    /// Unique identifier for the appointment
    pub id: u64,

    pub patient_id: u64,

    pub doctor_id: u64,

    /// Start, as IST wall-clock time
    pub start_time: StoredTime,

    /// End, as IST wall-clock time
    pub end_time: StoredTime,

    pub status: AppointmentStatus,

    /// What the patient wrote when booking
    pub patient_description: Option<String>,

    /// Doctor's notes after the session
    pub notes: Option<String>,

    /// Identifier of the video room
    pub video_session_id: Option<String>,

    /// Joined doctor profile, present in patient listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<DoctorSummary>,
}

/// Fields needed to insert an appointment.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_id: u64,
    pub doctor_id: u64,
    pub start_time: StoredTime,
    pub end_time: StoredTime,
    pub status: AppointmentStatus,
    pub patient_description: Option<String>,
    pub notes: Option<String>,
    pub video_session_id: Option<String>,
}

/// Number of appointments in one status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCount {
    pub status: AppointmentStatus,
    pub count: u32,
}

/// A patient's appointments together with per-status counts, read in one
/// transaction so both halves agree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientAppointments {
    /// Appointments ordered by start time, earliest first
    pub appointments: Vec<Appointment>,

    /// One entry per status that has at least one appointment
    pub counts: Vec<StatusCount>,
}

impl PatientAppointments {
    /// Appointments with the given status, in start-time order.
    pub fn with_status(
        &self,
        status: AppointmentStatus,
    ) -> impl Iterator<Item = &Appointment> + '_ {
        self.appointments
            .iter()
            .filter(move |appointment| appointment.status == status)
    }

    /// Count recorded for `status`, zero when absent.
    pub fn count_for(&self, status: AppointmentStatus) -> u32 {
        self.counts
            .iter()
            .find(|count| count.status == status)
            .map_or(0, |count| count.count)
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
