//! Row counts reported after seeding.

use serde::{Deserialize, Serialize};

/// How many rows of each kind a seeding run created.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedSummary {
    pub admins: u32,
    pub doctors: u32,
    pub verified_doctors: u32,
    pub patients: u32,
    pub availabilities: u32,
    pub appointments: u32,
    pub credit_transactions: u32,
    pub payouts: u32,
}
