//! Tabbed appointment listing.
//!
//! Mirrors the web dashboard: one tab per status that has appointments, the
//! first tab active unless another is chosen, and only the active tab's
//! appointments listed.

use std::fmt;

use jiff::tz::TimeZone;

use crate::{
    models::{Appointment, AppointmentStatus, PatientAppointments, Role},
    time::{format_date, format_time_range},
};

/// Text shown in place of a time that cannot be rendered.
const INVALID_DATE: &str = "Invalid Date";
const DOCTOR_EMPTY_HINT: &str = "You don't have any appointments yet. Make sure you've set your availability to allow patients to book.";
const PATIENT_EMPTY_HINT: &str = "You don't have any appointments scheduled yet. Browse our doctors and book your first consultation.";

/// One appointment rendered with its times in the display zone.
pub struct AppointmentCard<'a> {
    appointment: &'a Appointment,
    timezone: &'a TimeZone,
}

impl<'a> AppointmentCard<'a> {
    pub fn new(appointment: &'a Appointment, timezone: &'a TimeZone) -> Self {
        Self {
            appointment,
            timezone,
        }
    }
}

impl fmt::Display for AppointmentCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let appointment = self.appointment;
        let doctor = appointment.doctor.as_ref();
        let name = doctor
            .and_then(|d| d.name.as_deref())
            .unwrap_or("Unknown doctor");

        match doctor.and_then(|d| d.specialty.as_deref()) {
            Some(specialty) => writeln!(f, "### {name} · {specialty}")?,
            None => writeln!(f, "### {name}")?,
        }

        let date = format_date(appointment.start_time, self.timezone)
            .unwrap_or_else(|_| INVALID_DATE.to_string());
        let time = format_time_range(appointment.start_time, appointment.end_time, self.timezone)
            .unwrap_or_else(|_| INVALID_DATE.to_string());

        writeln!(f, "- **Date:** {date}")?;
        writeln!(f, "- **Time:** {time}")?;
        writeln!(f, "- **Status:** {}", appointment.status)?;
        if let Some(description) = &appointment.patient_description {
            writeln!(f, "- **Reason:** {description}")?;
        }
        if let Some(notes) = &appointment.notes {
            writeln!(f, "- **Notes:** {notes}")?;
        }
        Ok(())
    }
}

/// A patient's or doctor's appointments grouped into status tabs.
///
/// # Examples
///
/// ```rust
/// use medslot_core::{
///     display::AppointmentTabs,
///     models::{PatientAppointments, Role},
///     time::timezone,
/// };
///
/// let tz = timezone("Asia/Kolkata")?;
/// let empty = PatientAppointments::default();
/// let output = AppointmentTabs::new(&empty, Role::Patient, &tz).to_string();
/// assert!(output.contains("No appointments yet"));
/// # Ok::<(), medslot_core::BookingError>(())
/// ```
pub struct AppointmentTabs<'a> {
    listing: &'a PatientAppointments,
    role: Role,
    timezone: &'a TimeZone,
    active: Option<AppointmentStatus>,
    title: &'a str,
}

impl<'a> AppointmentTabs<'a> {
    pub fn new(listing: &'a PatientAppointments, role: Role, timezone: &'a TimeZone) -> Self {
        Self {
            listing,
            role,
            timezone,
            active: None,
            title: "Your Appointments",
        }
    }

    /// Selects the tab to show instead of the first one.
    pub fn with_active(mut self, status: Option<AppointmentStatus>) -> Self {
        self.active = status;
        self
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// The tab whose appointments are listed.
    pub fn active_status(&self) -> Option<AppointmentStatus> {
        self.active
            .or_else(|| self.listing.counts.first().map(|count| count.status))
    }

    fn write_empty_listing(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "No appointments yet")?;
        writeln!(f)?;
        let hint = match self.role {
            Role::Doctor => DOCTOR_EMPTY_HINT,
            _ => PATIENT_EMPTY_HINT,
        };
        writeln!(f, "{hint}")
    }

    fn write_tab_bar(&self, f: &mut fmt::Formatter<'_>, active: AppointmentStatus) -> fmt::Result {
        let tabs: Vec<String> = self
            .listing
            .counts
            .iter()
            .map(|count| match count.count {
                0 => format!("~~{}~~", count.status),
                n if count.status == active => format!("**{} ({n})**", count.status),
                n => format!("{} ({n})", count.status),
            })
            .collect();
        writeln!(f, "{}", tabs.join(" | "))
    }
}

impl fmt::Display for AppointmentTabs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        let active = match self.active_status() {
            Some(active) if !self.listing.is_empty() => active,
            _ => return self.write_empty_listing(f),
        };

        self.write_tab_bar(f, active)?;
        writeln!(f)?;

        let mut shown = self.listing.with_status(active).peekable();
        if shown.peek().is_none() {
            let status = active.as_str().to_lowercase();
            writeln!(f, "No {status} appointments")?;
            writeln!(f)?;
            return writeln!(f, "You don't have any {status} appointments yet.");
        }

        for (idx, appointment) in shown.enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", AppointmentCard::new(appointment, self.timezone))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{DoctorSummary, StatusCount},
        time::timezone,
    };

    fn appointment(id: u64, start: &str, end: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id,
            patient_id: 10,
            doctor_id: 20,
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            status,
            patient_description: Some("Chest pain".to_string()),
            notes: None,
            video_session_id: None,
            doctor: Some(DoctorSummary {
                id: 20,
                name: Some("Dr. John Smith".to_string()),
                specialty: Some("Cardiology".to_string()),
                image_url: None,
            }),
        }
    }

    fn listing() -> PatientAppointments {
        PatientAppointments {
            appointments: vec![
                appointment(
                    1,
                    "2025-07-21T14:30:00",
                    "2025-07-21T15:30:00",
                    AppointmentStatus::Scheduled,
                ),
                appointment(
                    2,
                    "2025-07-22T09:00:00",
                    "2025-07-22T10:00:00",
                    AppointmentStatus::Completed,
                ),
            ],
            counts: vec![
                StatusCount {
                    status: AppointmentStatus::Scheduled,
                    count: 1,
                },
                StatusCount {
                    status: AppointmentStatus::Completed,
                    count: 1,
                },
            ],
        }
    }

    #[test]
    fn test_first_tab_is_active_by_default() {
        let tz = timezone("Asia/Kolkata").unwrap();
        let listing = listing();
        let tabs = AppointmentTabs::new(&listing, Role::Patient, &tz);
        assert_eq!(tabs.active_status(), Some(AppointmentStatus::Scheduled));

        let output = tabs.to_string();
        assert!(output.contains("**SCHEDULED (1)** | COMPLETED (1)"));
        assert!(output.contains("### Dr. John Smith · Cardiology"));
        assert!(output.contains("- **Date:** Monday, July 21, 2025"));
        assert!(output.contains("- **Time:** 2:30 PM - 3:30 PM"));
        assert!(!output.contains("Tuesday, July 22, 2025"));
    }

    #[test]
    fn test_times_follow_display_zone() {
        let tz = timezone("America/New_York").unwrap();
        let listing = listing();
        let output = AppointmentTabs::new(&listing, Role::Patient, &tz).to_string();
        assert!(output.contains("- **Time:** 5:00 AM - 6:00 AM"));
    }

    #[test]
    fn test_selected_tab_without_appointments() {
        let tz = timezone("Asia/Kolkata").unwrap();
        let listing = listing();
        let output = AppointmentTabs::new(&listing, Role::Patient, &tz)
            .with_active(Some(AppointmentStatus::Cancelled))
            .to_string();
        assert!(output.contains("No cancelled appointments"));
        assert!(output.contains("You don't have any cancelled appointments yet."));
    }

    #[test]
    fn test_empty_listing_hint_depends_on_role() {
        let tz = timezone("Asia/Kolkata").unwrap();
        let empty = PatientAppointments::default();

        let doctor = AppointmentTabs::new(&empty, Role::Doctor, &tz).to_string();
        assert!(doctor.contains("set your availability"));

        let patient = AppointmentTabs::new(&empty, Role::Patient, &tz)
            .with_title("Upcoming")
            .to_string();
        assert!(patient.starts_with("# Upcoming"));
        assert!(patient.contains("Browse our doctors"));
    }

    #[test]
    fn test_zero_count_tab_is_struck_through() {
        let tz = timezone("Asia/Kolkata").unwrap();
        let mut listing = listing();
        listing.counts.push(StatusCount {
            status: AppointmentStatus::Cancelled,
            count: 0,
        });
        let output = AppointmentTabs::new(&listing, Role::Patient, &tz).to_string();
        assert!(output.contains("~~CANCELLED~~"));
    }
}
