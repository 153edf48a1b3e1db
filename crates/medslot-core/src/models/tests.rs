#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::{
        models::{
            Appointment, AppointmentStatus, AvailabilityStatus, DoctorSummary, NewPayout,
            PatientAppointments, PayoutStatus, Role, StatusCount, TransactionType,
            VerificationStatus,
        },
        time::StoredTime,
    };

    fn create_test_appointment(id: u64, start: &str, status: AppointmentStatus) -> Appointment {
        let start_time: StoredTime = start.parse().unwrap();
        Appointment {
            id,
            patient_id: 1,
            doctor_id: 2,
            start_time,
            end_time: start_time,
            status,
            patient_description: Some("Headache".to_string()),
            notes: None,
            video_session_id: Some(format!("session_{id}")),
            doctor: Some(DoctorSummary {
                id: 2,
                name: Some("Dr. John Smith".to_string()),
                specialty: Some("Cardiology".to_string()),
                image_url: None,
            }),
        }
    }

    #[test]
    fn test_status_round_trip_through_database_strings() {
        for status in AppointmentStatus::ALL {
            assert_eq!(status.as_str().parse::<AppointmentStatus>(), Ok(status));
        }
        for role in [Role::Unassigned, Role::Patient, Role::Doctor, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert_eq!(
            "verified".parse::<VerificationStatus>(),
            Ok(VerificationStatus::Verified)
        );
        assert_eq!(
            "booked".parse::<AvailabilityStatus>(),
            Ok(AvailabilityStatus::Booked)
        );
        assert_eq!(
            "credit_purchase".parse::<TransactionType>(),
            Ok(TransactionType::CreditPurchase)
        );
        assert_eq!(
            "processed".parse::<PayoutStatus>(),
            Ok(PayoutStatus::Processed)
        );
    }

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!(
            "scheduled".parse::<AppointmentStatus>(),
            Ok(AppointmentStatus::Scheduled)
        );
        assert_eq!(
            "Canceled".parse::<AppointmentStatus>(),
            Ok(AppointmentStatus::Cancelled)
        );
        assert!("rescheduled".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn test_appointment_serializes_times_as_storage_strings() {
        let appointment =
            create_test_appointment(7, "2025-07-21T14:30:00", AppointmentStatus::Scheduled);
        let json = serde_json::to_value(&appointment).unwrap();
        assert_eq!(json["start_time"], "2025-07-21T14:30:00");
        assert_eq!(json["status"], "SCHEDULED");
        assert_eq!(json["doctor"]["specialty"], "Cardiology");
    }

    #[test]
    fn test_patient_appointments_filters_by_status() {
        let listing = PatientAppointments {
            appointments: vec![
                create_test_appointment(1, "2025-07-20T09:00:00", AppointmentStatus::Completed),
                create_test_appointment(2, "2025-07-21T14:30:00", AppointmentStatus::Scheduled),
                create_test_appointment(3, "2025-07-22T10:00:00", AppointmentStatus::Scheduled),
            ],
            counts: vec![
                StatusCount {
                    status: AppointmentStatus::Completed,
                    count: 1,
                },
                StatusCount {
                    status: AppointmentStatus::Scheduled,
                    count: 2,
                },
            ],
        };

        let scheduled: Vec<u64> = listing
            .with_status(AppointmentStatus::Scheduled)
            .map(|a| a.id)
            .collect();
        assert_eq!(scheduled, vec![2, 3]);
        assert_eq!(listing.count_for(AppointmentStatus::Scheduled), 2);
        assert_eq!(listing.count_for(AppointmentStatus::Cancelled), 0);
        assert!(!listing.is_empty());
    }

    #[test]
    fn test_payout_amounts_follow_per_credit_rates() {
        let payout = NewPayout::for_credits(3, 25, "dr.smith@doctorsapp.com");
        assert_eq!(payout.amount, 250);
        assert_eq!(payout.platform_fee, 50);
        assert_eq!(payout.net_amount, 200);
        assert_eq!(payout.status, PayoutStatus::Processing);

        let now = Timestamp::now();
        let processed = payout.processed(1, now);
        assert_eq!(processed.status, PayoutStatus::Processed);
        assert_eq!(processed.processed_at, Some(now));
        assert_eq!(processed.processed_by, Some(1));
    }
}
