use medslot_core::Database;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}
