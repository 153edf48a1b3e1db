//! Status and role enumerations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Role a user plays in the application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Signed up but not yet onboarded
    #[default]
    Unassigned,
    /// Books and attends appointments
    Patient,
    /// Offers availability and holds appointments
    Doctor,
    /// Verifies doctors and processes payouts
    Admin,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UNASSIGNED" => Ok(Role::Unassigned),
            "PATIENT" => Ok(Role::Patient),
            "DOCTOR" => Ok(Role::Doctor),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

impl Role {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Unassigned => "UNASSIGNED",
            Role::Patient => "PATIENT",
            Role::Doctor => "DOCTOR",
            Role::Admin => "ADMIN",
        }
    }

    /// Capitalized name used in messages, e.g. "Patient".
    pub fn label(&self) -> &'static str {
        match self {
            Role::Unassigned => "User",
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credential review state of a doctor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl FromStr for VerificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(VerificationStatus::Pending),
            "VERIFIED" => Ok(VerificationStatus::Verified),
            "REJECTED" => Ok(VerificationStatus::Rejected),
            _ => Err(format!("Invalid verification status: {s}")),
        }
    }
}

impl VerificationStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "PENDING",
            VerificationStatus::Verified => "VERIFIED",
            VerificationStatus::Rejected => "REJECTED",
        }
    }
}

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    /// Booked and upcoming
    Scheduled,
    /// Held, possibly with notes
    Completed,
    /// Called off by either side
    Cancelled,
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SCHEDULED" => Ok(AppointmentStatus::Scheduled),
            "COMPLETED" => Ok(AppointmentStatus::Completed),
            "CANCELLED" | "CANCELED" => Ok(AppointmentStatus::Cancelled),
            _ => Err(format!("Invalid appointment status: {s}")),
        }
    }
}

impl AppointmentStatus {
    /// All statuses in display order.
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "SCHEDULED",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a doctor's slot can still be booked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    Available,
    Booked,
}

impl FromStr for AvailabilityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AVAILABLE" => Ok(AvailabilityStatus::Available),
            "BOOKED" => Ok(AvailabilityStatus::Booked),
            _ => Err(format!("Invalid availability status: {s}")),
        }
    }
}

impl AvailabilityStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "AVAILABLE",
            AvailabilityStatus::Booked => "BOOKED",
        }
    }
}

/// Reason a credit balance changed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    CreditPurchase,
    AppointmentDeduction,
    AdminAdjustment,
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CREDIT_PURCHASE" => Ok(TransactionType::CreditPurchase),
            "APPOINTMENT_DEDUCTION" => Ok(TransactionType::AppointmentDeduction),
            "ADMIN_ADJUSTMENT" => Ok(TransactionType::AdminAdjustment),
            _ => Err(format!("Invalid transaction type: {s}")),
        }
    }
}

impl TransactionType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::CreditPurchase => "CREDIT_PURCHASE",
            TransactionType::AppointmentDeduction => "APPOINTMENT_DEDUCTION",
            TransactionType::AdminAdjustment => "ADMIN_ADJUSTMENT",
        }
    }
}

/// Progress of a doctor payout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutStatus {
    Processing,
    Processed,
}

impl FromStr for PayoutStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PROCESSING" => Ok(PayoutStatus::Processing),
            "PROCESSED" => Ok(PayoutStatus::Processed),
            _ => Err(format!("Invalid payout status: {s}")),
        }
    }
}

impl PayoutStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutStatus::Processing => "PROCESSING",
            PayoutStatus::Processed => "PROCESSED",
        }
    }
}
