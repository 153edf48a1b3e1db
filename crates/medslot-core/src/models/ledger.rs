//! Availability slots, credit transactions and payouts.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{AvailabilityStatus, PayoutStatus, TransactionType};
use crate::time::StoredTime;

/// Dollars charged per credit when a doctor cashes out.
pub const CREDIT_VALUE_USD: i64 = 10;

/// Platform share per credit.
pub const PLATFORM_FEE_PER_CREDIT_USD: i64 = 2;

/// A bookable slot in a doctor's calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Availability {
    pub id: u64,
    pub doctor_id: u64,
    pub start_time: StoredTime,
    pub end_time: StoredTime,
    pub status: AvailabilityStatus,
}

/// Fields needed to insert an availability slot.
#[derive(Debug, Clone)]
pub struct NewAvailability {
    pub doctor_id: u64,
    pub start_time: StoredTime,
    pub end_time: StoredTime,
    pub status: AvailabilityStatus,
}

/// A recorded change to a user's credit balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreditTransaction {
    pub id: u64,
    pub user_id: u64,
    pub amount: i64,
    pub kind: TransactionType,
    pub package_id: Option<String>,
    pub created_at: Timestamp,
}

/// A change to a user's credit balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCreditTransaction {
    pub user_id: u64,
    /// Positive for purchases and earnings, negative for deductions
    pub amount: i64,
    pub kind: TransactionType,
    /// Credit package bought, for purchases
    pub package_id: Option<String>,
}

/// A stored payout request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payout {
    pub id: u64,
    pub doctor_id: u64,
    pub credits: i64,
    pub amount: i64,
    pub platform_fee: i64,
    pub net_amount: i64,
    pub paypal_email: String,
    pub status: PayoutStatus,
    pub created_at: Timestamp,
    pub processed_at: Option<Timestamp>,
    pub processed_by: Option<u64>,
}

/// A request to pay a doctor for earned credits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPayout {
    pub doctor_id: u64,
    pub credits: i64,
    pub amount: i64,
    pub platform_fee: i64,
    pub net_amount: i64,
    pub paypal_email: String,
    pub status: PayoutStatus,
    pub processed_at: Option<Timestamp>,
    /// Admin user who processed the payout
    pub processed_by: Option<u64>,
}

impl NewPayout {
    /// A payout for `credits`, with amount and fee derived from the per-credit
    /// rates.
    pub fn for_credits(doctor_id: u64, credits: i64, paypal_email: &str) -> Self {
        let amount = credits * CREDIT_VALUE_USD;
        let platform_fee = credits * PLATFORM_FEE_PER_CREDIT_USD;
        Self {
            doctor_id,
            credits,
            amount,
            platform_fee,
            net_amount: amount - platform_fee,
            paypal_email: paypal_email.to_string(),
            status: PayoutStatus::Processing,
            processed_at: None,
            processed_by: None,
        }
    }

    /// Marks the payout processed by `admin_id` at `at`.
    pub fn processed(mut self, admin_id: u64, at: Timestamp) -> Self {
        self.status = PayoutStatus::Processed;
        self.processed_at = Some(at);
        self.processed_by = Some(admin_id);
        self
    }
}
