//! Demo data operations.

use jiff::civil;
use log::info;
use tokio::task;

use super::Booking;
use crate::{
    db::Database,
    error::{BookingError, Result},
    models::SeedSummary,
};

impl Booking {
    /// Replaces all data with the demo data set centred on `today`.
    pub async fn seed(&self, today: civil::Date) -> Result<SeedSummary> {
        let db_path = self.db_path.clone();

        let summary = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.seed(today)
        })
        .await
        .map_err(BookingError::join)??;

        info!("Database seeding completed");
        Ok(summary)
    }
}
