//! Availability slots, credit transactions, payouts and row counts.

use rusqlite::params;

use super::utils::{ensure_ordered, id_column, now_string, parse_column, parse_optional_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{
        Availability, AvailabilityStatus, CreditTransaction, NewAvailability, NewCreditTransaction,
        NewPayout, Payout, SeedSummary,
    },
};

const INSERT_AVAILABILITY_SQL: &str = "INSERT INTO availabilities (doctor_id, start_time, end_time, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_DOCTOR_AVAILABILITY_SQL: &str = "SELECT id, doctor_id, start_time, end_time, status FROM availabilities WHERE doctor_id = ?1 AND (?2 IS NULL OR status = ?2) ORDER BY start_time ASC";
const INSERT_CREDIT_TRANSACTION_SQL: &str = "INSERT INTO credit_transactions (user_id, amount, type, package_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_CREDIT_TRANSACTIONS_SQL: &str = "SELECT id, user_id, amount, type, package_id, created_at FROM credit_transactions WHERE user_id = ?1 ORDER BY id ASC";
const SELECT_CREDIT_TOTAL_SQL: &str =
    "SELECT COALESCE(SUM(amount), 0) FROM credit_transactions WHERE user_id = ?1";
const INSERT_PAYOUT_SQL: &str = "INSERT INTO payouts (doctor_id, amount, credits, platform_fee, net_amount, paypal_email, status, created_at, processed_at, processed_by) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const SELECT_DOCTOR_PAYOUTS_SQL: &str = "SELECT id, doctor_id, credits, amount, platform_fee, net_amount, paypal_email, status, created_at, processed_at, processed_by FROM payouts WHERE doctor_id = ?1 ORDER BY id ASC";
const ROW_COUNTS_SQL: &str = "SELECT \
    (SELECT COUNT(*) FROM users WHERE role = 'ADMIN'), \
    (SELECT COUNT(*) FROM users WHERE role = 'DOCTOR'), \
    (SELECT COUNT(*) FROM users WHERE role = 'DOCTOR' AND verification_status = 'VERIFIED'), \
    (SELECT COUNT(*) FROM users WHERE role = 'PATIENT'), \
    (SELECT COUNT(*) FROM availabilities), \
    (SELECT COUNT(*) FROM appointments), \
    (SELECT COUNT(*) FROM credit_transactions), \
    (SELECT COUNT(*) FROM payouts)";

impl super::Database {
    /// Inserts a bookable slot for a doctor.
    pub fn create_availability(&self, slot: &NewAvailability) -> Result<Availability> {
        ensure_ordered(slot.start_time, slot.end_time)?;

        self.connection
            .execute(
                INSERT_AVAILABILITY_SQL,
                params![
                    slot.doctor_id as i64,
                    slot.start_time.to_string(),
                    slot.end_time.to_string(),
                    slot.status.as_str(),
                    now_string(),
                ],
            )
            .db_context("Failed to insert availability")?;

        Ok(Availability {
            id: self.connection.last_insert_rowid() as u64,
            doctor_id: slot.doctor_id,
            start_time: slot.start_time,
            end_time: slot.end_time,
            status: slot.status,
        })
    }

    /// A doctor's slots in start-time order, optionally limited to one status.
    pub fn doctor_availability(
        &self,
        doctor_id: u64,
        status: Option<AvailabilityStatus>,
    ) -> Result<Vec<Availability>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_DOCTOR_AVAILABILITY_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(
                params![doctor_id as i64, status.map(|status| status.as_str())],
                |row| {
                    Ok(Availability {
                        id: id_column(row, 0)?,
                        doctor_id: id_column(row, 1)?,
                        start_time: parse_column(row, 2)?,
                        end_time: parse_column(row, 3)?,
                        status: parse_column(row, 4)?,
                    })
                },
            )
            .db_context("Failed to query availability")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read availability row")
    }

    /// Records a credit balance change and returns its id.
    pub fn create_credit_transaction(&self, transaction: &NewCreditTransaction) -> Result<u64> {
        self.connection
            .execute(
                INSERT_CREDIT_TRANSACTION_SQL,
                params![
                    transaction.user_id as i64,
                    transaction.amount,
                    transaction.kind.as_str(),
                    transaction.package_id,
                    now_string(),
                ],
            )
            .db_context("Failed to insert credit transaction")?;

        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// A user's credit transactions, oldest first.
    pub fn credit_transactions(&self, user_id: u64) -> Result<Vec<CreditTransaction>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CREDIT_TRANSACTIONS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![user_id as i64], |row| {
                Ok(CreditTransaction {
                    id: id_column(row, 0)?,
                    user_id: id_column(row, 1)?,
                    amount: row.get(2)?,
                    kind: parse_column(row, 3)?,
                    package_id: row.get(4)?,
                    created_at: parse_column(row, 5)?,
                })
            })
            .db_context("Failed to query credit transactions")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read credit transaction row")
    }

    /// Net sum of all credit transactions of a user.
    pub fn credit_total(&self, user_id: u64) -> Result<i64> {
        self.connection
            .query_row(SELECT_CREDIT_TOTAL_SQL, params![user_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to sum credit transactions")
    }

    /// Records a payout request and returns its id.
    pub fn create_payout(&self, payout: &NewPayout) -> Result<u64> {
        self.connection
            .execute(
                INSERT_PAYOUT_SQL,
                params![
                    payout.doctor_id as i64,
                    payout.amount,
                    payout.credits,
                    payout.platform_fee,
                    payout.net_amount,
                    payout.paypal_email,
                    payout.status.as_str(),
                    now_string(),
                    payout.processed_at.map(|at| at.to_string()),
                    payout.processed_by.map(|id| id as i64),
                ],
            )
            .db_context("Failed to insert payout")?;

        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Payout requests of a doctor, oldest first.
    pub fn doctor_payouts(&self, doctor_id: u64) -> Result<Vec<Payout>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_DOCTOR_PAYOUTS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![doctor_id as i64], |row| {
                Ok(Payout {
                    id: id_column(row, 0)?,
                    doctor_id: id_column(row, 1)?,
                    credits: row.get(2)?,
                    amount: row.get(3)?,
                    platform_fee: row.get(4)?,
                    net_amount: row.get(5)?,
                    paypal_email: row.get(6)?,
                    status: parse_column(row, 7)?,
                    created_at: parse_column(row, 8)?,
                    processed_at: parse_optional_column(row, 9)?,
                    processed_by: row.get::<_, Option<i64>>(10)?.map(|id| id as u64),
                })
            })
            .db_context("Failed to query payouts")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read payout row")
    }

    /// Counts rows of every kind the seeding run creates.
    pub fn row_counts(&self) -> Result<SeedSummary> {
        self.connection
            .query_row(ROW_COUNTS_SQL, [], |row| {
                let count = |idx: usize| row.get::<_, i64>(idx).map(|n| n as u32);
                Ok(SeedSummary {
                    admins: count(0)?,
                    doctors: count(1)?,
                    verified_doctors: count(2)?,
                    patients: count(3)?,
                    availabilities: count(4)?,
                    appointments: count(5)?,
                    credit_transactions: count(6)?,
                    payouts: count(7)?,
                })
            })
            .db_context("Failed to count rows")
    }
}
