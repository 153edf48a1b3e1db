mod common;

use common::create_test_db;
use jiff::civil::date;
use medslot_core::{
    models::{
        AppointmentStatus, AvailabilityStatus, NewAppointment, NewAvailability,
        NewCreditTransaction, NewPayout, NewUser, PayoutStatus, Role, TransactionType,
    },
    BookingError, StoredTime,
};

fn stored(text: &str) -> StoredTime {
    text.parse().expect("valid storage string")
}

fn new_doctor(principal: &str, email: &str) -> NewUser {
    NewUser {
        principal: principal.to_string(),
        email: email.to_string(),
        name: Some("Dr. Test".to_string()),
        role: Role::Doctor,
        specialty: Some("Cardiology".to_string()),
        ..NewUser::default()
    }
}

fn new_appointment(
    patient_id: u64,
    doctor_id: u64,
    start: &str,
    end: &str,
    status: AppointmentStatus,
) -> NewAppointment {
    NewAppointment {
        patient_id,
        doctor_id,
        start_time: stored(start),
        end_time: stored(end),
        status,
        patient_description: None,
        notes: None,
        video_session_id: None,
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    let counts = db.row_counts().expect("Failed to count rows");
    assert_eq!(counts.appointments, 0);
}

#[test]
fn test_create_and_find_user() {
    let (_temp_file, db) = create_test_db();

    let created = db
        .create_user(&NewUser::patient("p1", "p1@example.com", "Pat One", 8))
        .expect("Failed to create user");
    assert!(created.id > 0);

    let found = db
        .find_user_by_principal("p1", None)
        .expect("Failed to query user")
        .expect("User should exist");
    assert_eq!(found, created);

    let as_patient = db
        .find_user_by_principal("p1", Some(Role::Patient))
        .expect("Failed to query user");
    assert!(as_patient.is_some());

    let as_doctor = db
        .find_user_by_principal("p1", Some(Role::Doctor))
        .expect("Failed to query user");
    assert!(as_doctor.is_none());

    assert!(db.find_user_by_principal("missing", None).unwrap().is_none());
}

#[test]
fn test_duplicate_principal_is_rejected() {
    let (_temp_file, db) = create_test_db();
    db.create_user(&NewUser::patient("p1", "a@example.com", "A", 0))
        .unwrap();
    let err = db
        .create_user(&NewUser::patient("p1", "b@example.com", "B", 0))
        .unwrap_err();
    assert!(matches!(err, BookingError::Database { .. }));
}

#[test]
fn test_patient_appointments_are_ordered_and_counted() {
    use AppointmentStatus::{Completed, Scheduled};

    let (_temp_file, mut db) = create_test_db();
    let patient = db
        .create_user(&NewUser::patient("p1", "p1@example.com", "Pat", 8))
        .unwrap();
    let other = db
        .create_user(&NewUser::patient("p2", "p2@example.com", "Other", 8))
        .unwrap();
    let doctor = db.create_user(&new_doctor("d1", "d1@example.com")).unwrap();

    for (start, end, status) in [
        ("2025-07-22T09:00:00", "2025-07-22T10:00:00", Scheduled),
        ("2025-07-20T14:00:00", "2025-07-20T15:00:00", Completed),
        ("2025-07-21T09:05:00", "2025-07-21T09:35:00", Scheduled),
    ] {
        db.create_appointment(&new_appointment(patient.id, doctor.id, start, end, status))
            .unwrap();
    }
    db.create_appointment(&new_appointment(
        other.id,
        doctor.id,
        "2025-07-19T09:00:00",
        "2025-07-19T10:00:00",
        AppointmentStatus::Cancelled,
    ))
    .unwrap();

    let listing = db.patient_appointments(patient.id).unwrap();

    let starts: Vec<String> = listing
        .appointments
        .iter()
        .map(|a| a.start_time.to_string())
        .collect();
    assert_eq!(
        starts,
        vec![
            "2025-07-20T14:00:00",
            "2025-07-21T09:05:00",
            "2025-07-22T09:00:00",
        ]
    );
    assert!(listing.appointments.iter().all(|a| a.patient_id == patient.id));
    let doctor_summary = listing.appointments[0].doctor.as_ref().unwrap();
    assert_eq!(doctor_summary.specialty.as_deref(), Some("Cardiology"));

    assert_eq!(listing.counts.len(), 2);
    assert_eq!(listing.count_for(AppointmentStatus::Scheduled), 2);
    assert_eq!(listing.count_for(AppointmentStatus::Completed), 1);
    assert_eq!(listing.count_for(AppointmentStatus::Cancelled), 0);
    assert_eq!(listing.counts[0].status, AppointmentStatus::Scheduled);
}

#[test]
fn test_patient_without_appointments() {
    let (_temp_file, mut db) = create_test_db();
    let patient = db
        .create_user(&NewUser::patient("p1", "p1@example.com", "Pat", 8))
        .unwrap();
    let listing = db.patient_appointments(patient.id).unwrap();
    assert!(listing.is_empty());
    assert!(listing.counts.is_empty());
}

#[test]
fn test_appointment_end_must_follow_start() {
    let (_temp_file, db) = create_test_db();
    let err = db
        .create_appointment(&new_appointment(
            1,
            2,
            "2025-07-21T10:00:00",
            "2025-07-21T09:00:00",
            AppointmentStatus::Scheduled,
        ))
        .unwrap_err();
    assert!(matches!(err, BookingError::InvalidInput { ref field, .. } if field == "end_time"));
}

#[test]
fn test_availability_filtering() {
    let (_temp_file, db) = create_test_db();
    let doctor = db.create_user(&new_doctor("d1", "d1@example.com")).unwrap();

    for (hour, status) in [
        (11, AvailabilityStatus::Booked),
        (9, AvailabilityStatus::Available),
        (10, AvailabilityStatus::Available),
    ] {
        let day = date(2025, 7, 21);
        db.create_availability(&NewAvailability {
            doctor_id: doctor.id,
            start_time: StoredTime::new(day.at(hour, 0, 0, 0)).unwrap(),
            end_time: StoredTime::new(day.at(hour + 1, 0, 0, 0)).unwrap(),
            status,
        })
        .unwrap();
    }

    let all = db.doctor_availability(doctor.id, None).unwrap();
    let hours: Vec<i8> = all
        .iter()
        .map(|slot| slot.start_time.datetime().hour())
        .collect();
    assert_eq!(hours, vec![9, 10, 11]);

    let open = db
        .doctor_availability(doctor.id, Some(AvailabilityStatus::Available))
        .unwrap();
    assert_eq!(open.len(), 2);
}

#[test]
fn test_credit_ledger_and_payouts() {
    let (_temp_file, db) = create_test_db();
    let patient = db
        .create_user(&NewUser::patient("p1", "p1@example.com", "Pat", 8))
        .unwrap();
    let doctor = db.create_user(&new_doctor("d1", "d1@example.com")).unwrap();

    for amount in [10, -2, -2] {
        let kind = if amount > 0 {
            TransactionType::CreditPurchase
        } else {
            TransactionType::AppointmentDeduction
        };
        db.create_credit_transaction(&NewCreditTransaction {
            user_id: patient.id,
            amount,
            kind,
            package_id: None,
        })
        .unwrap();
    }
    assert_eq!(db.credit_total(patient.id).unwrap(), 6);
    assert_eq!(db.credit_total(doctor.id).unwrap(), 0);

    let history = db.credit_transactions(patient.id).unwrap();
    let amounts: Vec<i64> = history.iter().map(|t| t.amount).collect();
    assert_eq!(amounts, vec![10, -2, -2]);
    assert_eq!(history[0].kind, TransactionType::CreditPurchase);
    assert!(db.credit_transactions(doctor.id).unwrap().is_empty());

    let payout_id = db
        .create_payout(&NewPayout::for_credits(doctor.id, 5, "d1@example.com"))
        .unwrap();
    assert!(payout_id > 0);
    assert_eq!(db.row_counts().unwrap().payouts, 1);

    let payouts = db.doctor_payouts(doctor.id).unwrap();
    assert_eq!(payouts.len(), 1);
    assert_eq!(payouts[0].id, payout_id);
    assert_eq!(payouts[0].amount, 50);
    assert_eq!(payouts[0].platform_fee, 10);
    assert_eq!(payouts[0].net_amount, 40);
    assert_eq!(payouts[0].status, PayoutStatus::Processing);
    assert_eq!(payouts[0].processed_at, None);
}

#[test]
fn test_seed_creates_expected_rows() {
    let (_temp_file, mut db) = create_test_db();
    let summary = db.seed(date(2025, 7, 21)).expect("Failed to seed");

    assert_eq!(summary.admins, 1);
    assert_eq!(summary.doctors, 4);
    assert_eq!(summary.verified_doctors, 3);
    assert_eq!(summary.patients, 5);
    assert_eq!(summary.availabilities, 3 * 30 * 7);
    assert_eq!(summary.appointments, 15);
    assert_eq!(summary.credit_transactions, 44);
    assert_eq!(summary.payouts, 2);

    let alice = db
        .find_user_by_principal("patient_alice_clerk_id", Some(Role::Patient))
        .unwrap()
        .expect("seeded patient");
    let listing = db.patient_appointments(alice.id).unwrap();
    assert_eq!(listing.appointments.len(), 3);

    let smith = db
        .find_user_by_principal("dr_smith_clerk_id", Some(Role::Doctor))
        .unwrap()
        .expect("seeded doctor");
    let slots = db.doctor_availability(smith.id, None).unwrap();
    assert_eq!(slots.len(), 210);
    assert_eq!(slots[0].start_time.to_string(), "2025-07-21T09:00:00");
    assert_eq!(db.credit_total(smith.id).unwrap(), 10);

    let admin = db
        .find_user_by_principal("admin_clerk_id", Some(Role::Admin))
        .unwrap()
        .expect("seeded admin");
    let payouts = db.doctor_payouts(smith.id).unwrap();
    assert_eq!(payouts.len(), 1);
    assert_eq!(payouts[0].credits, 25);
    assert_eq!(payouts[0].net_amount, 200);
    assert_eq!(payouts[0].status, PayoutStatus::Processed);
    assert_eq!(payouts[0].processed_by, Some(admin.id));
    assert!(payouts[0].processed_at.is_some());
}

#[test]
fn test_seed_session_ids_follow_the_day() {
    let (_temp_file, mut db) = create_test_db();

    let mut session_ids = Vec::new();
    for _ in 0..2 {
        db.seed(date(2025, 7, 21)).expect("Failed to seed");
        let alice = db
            .find_user_by_principal("patient_alice_clerk_id", None)
            .unwrap()
            .expect("seeded patient");
        let listing = db.patient_appointments(alice.id).unwrap();
        let ids: Vec<_> = listing
            .appointments
            .into_iter()
            .filter_map(|appointment| appointment.video_session_id)
            .collect();
        session_ids.push(ids);
    }

    assert_eq!(session_ids[0], session_ids[1]);
    assert_eq!(session_ids[0][0], "session_20250721_0");
}
