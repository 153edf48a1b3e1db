//! Demo data for local development.
//!
//! Seeding wipes every table and recreates a fixed cast of users with
//! availability, appointments and ledger entries around a given day. The
//! data is deterministic: the same `today` always yields the same rows.

use jiff::{civil, Timestamp, ToSpan};
use log::info;

use crate::{
    error::{BookingError, DatabaseResultExt, Result},
    models::{
        AppointmentStatus, AvailabilityStatus, NewAppointment, NewAvailability,
        NewCreditTransaction, NewPayout, NewUser, Role, SeedSummary, TransactionType, User,
        VerificationStatus,
    },
    time::StoredTime,
};

const CLEAR_SQL: &str = "DELETE FROM payouts; DELETE FROM credit_transactions; DELETE FROM appointments; DELETE FROM availabilities; DELETE FROM users;";

const AVAILABILITY_DAYS: i64 = 30;
const MORNING_HOURS: std::ops::Range<i8> = 9..12;
const AFTERNOON_HOURS: std::ops::Range<i8> = 14..18;
const APPOINTMENT_COUNT: usize = 15;
const TREATMENT_NOTE: &str = "Patient responded well to treatment recommendations.";

struct DoctorSeed {
    principal: &'static str,
    email: &'static str,
    name: &'static str,
    specialty: &'static str,
    experience: u32,
    credential: &'static str,
    description: &'static str,
    verification: VerificationStatus,
    credits: i64,
}

const DOCTORS: [DoctorSeed; 4] = [
    DoctorSeed {
        principal: "dr_smith_clerk_id",
        email: "dr.smith@doctorsapp.com",
        name: "Dr. John Smith",
        specialty: "Cardiology",
        experience: 15,
        credential: "https://example.com/credentials/dr-smith.pdf",
        description: "Experienced cardiologist with 15 years of practice. Specializes in heart disease prevention and treatment.",
        verification: VerificationStatus::Verified,
        credits: 25,
    },
    DoctorSeed {
        principal: "dr_johnson_clerk_id",
        email: "dr.johnson@doctorsapp.com",
        name: "Dr. Sarah Johnson",
        specialty: "Dermatology",
        experience: 10,
        credential: "https://example.com/credentials/dr-johnson.pdf",
        description: "Board-certified dermatologist focusing on skin health and cosmetic procedures.",
        verification: VerificationStatus::Verified,
        credits: 18,
    },
    DoctorSeed {
        principal: "dr_garcia_clerk_id",
        email: "dr.garcia@doctorsapp.com",
        name: "Dr. Maria Garcia",
        specialty: "Pediatrics",
        experience: 8,
        credential: "https://example.com/credentials/dr-garcia.pdf",
        description: "Pediatrician dedicated to providing comprehensive healthcare for children and adolescents.",
        verification: VerificationStatus::Verified,
        credits: 12,
    },
    DoctorSeed {
        principal: "dr_pending_clerk_id",
        email: "dr.pending@doctorsapp.com",
        name: "Dr. Michael Brown",
        specialty: "Orthopedics",
        experience: 5,
        credential: "https://example.com/credentials/dr-brown.pdf",
        description: "Orthopedic surgeon specializing in sports medicine and joint replacement.",
        verification: VerificationStatus::Pending,
        credits: 0,
    },
];

/// Patient names and starting credits. Principals and emails derive from the name.
const PATIENTS: [(&str, i64); 5] = [
    ("Alice Wilson", 8),
    ("Bob Miller", 4),
    ("Carol Davis", 12),
    ("David Brown", 2),
    ("Emma Taylor", 15),
];

fn patient_seed(name: &str, credits: i64) -> NewUser {
    let lower = name.to_lowercase();
    let (first, last) = lower.split_once(' ').unwrap_or((lower.as_str(), "patient"));
    let principal = format!("patient_{first}_clerk_id");
    let email = format!("{first}.{last}@email.com");
    NewUser::patient(&principal, &email, name, credits)
}

impl DoctorSeed {
    fn to_new_user(&self) -> NewUser {
        NewUser {
            principal: self.principal.to_string(),
            email: self.email.to_string(),
            name: Some(self.name.to_string()),
            role: Role::Doctor,
            credits: self.credits,
            specialty: Some(self.specialty.to_string()),
            experience: Some(self.experience),
            credential_url: Some(self.credential.to_string()),
            description: Some(self.description.to_string()),
            verification_status: Some(self.verification),
            ..NewUser::default()
        }
    }
}

impl super::Database {
    /// Replaces all data with the demo data set centred on `today`.
    pub fn seed(&self, today: civil::Date) -> Result<SeedSummary> {
        let tx = self
            .connection
            .unchecked_transaction()
            .db_context("Failed to begin transaction")?;

        info!("Clearing existing data");
        tx.execute_batch(CLEAR_SQL)
            .db_context("Failed to clear existing data")?;

        info!("Creating users");
        let admin = self.create_user(&NewUser {
            principal: "admin_clerk_id".to_string(),
            email: "admin@doctorsapp.com".to_string(),
            name: Some("System Administrator".to_string()),
            role: Role::Admin,
            credits: 0,
            ..NewUser::default()
        })?;

        let doctors = DOCTORS
            .iter()
            .map(|doctor| self.create_user(&doctor.to_new_user()))
            .collect::<Result<Vec<_>>>()?;

        let patients = PATIENTS
            .iter()
            .map(|(name, credits)| self.create_user(&patient_seed(name, *credits)))
            .collect::<Result<Vec<_>>>()?;

        let verified = &doctors[..3];

        info!("Creating availability slots");
        self.seed_availability(verified, today)?;

        info!("Creating appointments");
        self.seed_appointments(verified, &patients, today)?;

        info!("Creating credit transactions");
        self.seed_credit_transactions(verified, &patients)?;

        info!("Creating payouts");
        let now = Timestamp::now();
        for (idx, doctor) in doctors.iter().take(2).enumerate() {
            let payout = NewPayout::for_credits(doctor.id, doctor.credits, &doctor.email);
            let payout = if idx == 0 {
                payout.processed(admin.id, now)
            } else {
                payout
            };
            self.create_payout(&payout)?;
        }

        tx.commit().db_context("Failed to commit seed data")?;

        self.row_counts()
    }

    fn seed_availability(&self, doctors: &[User], today: civil::Date) -> Result<()> {
        for (doctor_idx, doctor) in doctors.iter().enumerate() {
            for day in 0..AVAILABILITY_DAYS {
                let date = shift_days(today, day)?;
                let slots = MORNING_HOURS
                    .map(|hour| (hour, 3))
                    .chain(AFTERNOON_HOURS.map(|hour| (hour, 4)));
                for (hour, booked_per_ten) in slots {
                    let pattern = (day + i64::from(hour) + doctor_idx as i64) % 10;
                    let status = if pattern < booked_per_ten {
                        AvailabilityStatus::Booked
                    } else {
                        AvailabilityStatus::Available
                    };
                    self.create_availability(&NewAvailability {
                        doctor_id: doctor.id,
                        start_time: StoredTime::new(date.at(hour, 0, 0, 0))?,
                        end_time: StoredTime::new(date.at(hour + 1, 0, 0, 0))?,
                        status,
                    })?;
                }
            }
        }
        Ok(())
    }

    fn seed_appointments(
        &self,
        doctors: &[User],
        patients: &[User],
        today: civil::Date,
    ) -> Result<()> {
        let session_prefix = today.strftime("%Y%m%d");
        for i in 0..APPOINTMENT_COUNT {
            let doctor = &doctors[i % doctors.len()];
            let patient = &patients[i % patients.len()];
            let date = shift_days(today, (i as i64 * 7) % 30 - 15)?;
            let hour = 9 + ((i * 5) % 8) as i8;
            let specialty = doctor
                .specialty
                .as_deref()
                .unwrap_or("general")
                .to_lowercase();
            let description = format!("Patient consultation for {specialty} related concerns.");
            let notes = (i % 2 == 0).then(|| TREATMENT_NOTE.to_string());

            self.create_appointment(&NewAppointment {
                patient_id: patient.id,
                doctor_id: doctor.id,
                start_time: StoredTime::new(date.at(hour, 0, 0, 0))?,
                end_time: StoredTime::new(date.at(hour + 1, 0, 0, 0))?,
                status: AppointmentStatus::ALL[i % AppointmentStatus::ALL.len()],
                patient_description: Some(description),
                notes,
                video_session_id: Some(format!("session_{session_prefix}_{i}")),
            })?;
        }
        Ok(())
    }

    fn seed_credit_transactions(&self, doctors: &[User], patients: &[User]) -> Result<()> {
        for (idx, patient) in patients.iter().enumerate() {
            self.create_credit_transaction(&NewCreditTransaction {
                user_id: patient.id,
                amount: 10,
                kind: TransactionType::CreditPurchase,
                package_id: Some("standard".to_string()),
            })?;
            for _ in 0..(idx % 5) + 1 {
                self.create_credit_transaction(&NewCreditTransaction {
                    user_id: patient.id,
                    amount: -2,
                    kind: TransactionType::AppointmentDeduction,
                    package_id: None,
                })?;
            }
        }

        for (idx, doctor) in doctors.iter().enumerate() {
            for _ in 0..(idx * 3) % 10 + 5 {
                self.create_credit_transaction(&NewCreditTransaction {
                    user_id: doctor.id,
                    amount: 2,
                    kind: TransactionType::AppointmentDeduction,
                    package_id: None,
                })?;
            }
        }
        Ok(())
    }
}

fn shift_days(date: civil::Date, days: i64) -> Result<civil::Date> {
    date.checked_add(days.days())
        .map_err(|e| BookingError::time(format!("Cannot shift {date} by {days} days"), e))
}
