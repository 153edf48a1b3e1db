//! Builder for creating and configuring Booking instances.

use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use log::debug;
use tokio::task;

use super::Booking;
use crate::{
    db::Database,
    error::{BookingError, Result},
    time::resolve_display_timezone,
};

/// Builder for creating and configuring Booking instances.
#[derive(Debug, Clone, Default)]
pub struct BookingBuilder {
    database_path: Option<PathBuf>,
    display_timezone: Option<String>,
}

impl BookingBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/medslot/medslot.db` or `~/.local/share/medslot/medslot.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the IANA zone appointment times are rendered in.
    ///
    /// If not specified, the system zone is used.
    pub fn with_display_timezone(mut self, name: Option<impl Into<String>>) -> Self {
        if let Some(name) = name {
            self.display_timezone = Some(name.into());
        }
        self
    }

    /// Builds the configured booking service.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::UnknownTimezone` if the display zone is not a
    /// known IANA identifier
    /// Returns `BookingError::FileSystem` if the database path is invalid
    /// Returns `BookingError::Database` if database initialization fails
    pub async fn build(self) -> Result<Booking> {
        let display_timezone: TimeZone =
            resolve_display_timezone(self.display_timezone.as_deref())?;

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BookingError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), BookingError>(())
        })
        .await
        .map_err(BookingError::join)??;

        debug!("Booking database ready at {}", db_path.display());

        Ok(Booking::new(db_path, display_timezone))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("medslot")
            .place_data_file("medslot.db")
            .map_err(|e| BookingError::XdgDirectory(e.to_string()))
    }
}
