//! User creation and lookup.

use rusqlite::{params, OptionalExtension};

use super::utils::{id_column, now_string, parse_column, parse_optional_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{NewUser, Role, User},
};

const INSERT_USER_SQL: &str = "INSERT INTO users (principal, email, name, image_url, role, credits, specialty, experience, credential_url, description, verification_status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12)";
const USER_COLUMNS: &str = "id, principal, email, name, image_url, role, credits, specialty, experience, credential_url, description, verification_status";

impl super::Database {
    /// Helper function to construct a User from a database row
    fn build_user_from_row(row: &rusqlite::Row) -> rusqlite::Result<User> {
        Ok(User {
            id: id_column(row, 0)?,
            principal: row.get(1)?,
            email: row.get(2)?,
            name: row.get(3)?,
            image_url: row.get(4)?,
            role: parse_column(row, 5)?,
            credits: row.get(6)?,
            specialty: row.get(7)?,
            experience: row.get::<_, Option<i64>>(8)?.map(|years| years as u32),
            credential_url: row.get(9)?,
            description: row.get(10)?,
            verification_status: parse_optional_column(row, 11)?,
        })
    }

    /// Inserts a user and returns the stored record.
    pub fn create_user(&self, user: &NewUser) -> Result<User> {
        self.connection
            .execute(
                INSERT_USER_SQL,
                params![
                    user.principal,
                    user.email,
                    user.name,
                    user.image_url,
                    user.role.as_str(),
                    user.credits,
                    user.specialty,
                    user.experience.map(i64::from),
                    user.credential_url,
                    user.description,
                    user.verification_status.map(|status| status.as_str()),
                    now_string(),
                ],
            )
            .db_context("Failed to insert user")?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(User {
            id,
            principal: user.principal.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            credits: user.credits,
            image_url: user.image_url.clone(),
            specialty: user.specialty.clone(),
            experience: user.experience,
            credential_url: user.credential_url.clone(),
            description: user.description.clone(),
            verification_status: user.verification_status,
        })
    }

    /// Looks up a user by identity-provider id, optionally requiring a role.
    pub fn find_user_by_principal(
        &self,
        principal: &str,
        role: Option<Role>,
    ) -> Result<Option<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE principal = ?1 AND (?2 IS NULL OR role = ?2)"
        );
        self.connection
            .query_row(
                &sql,
                params![principal, role.map(|role| role.as_str())],
                Self::build_user_from_row,
            )
            .optional()
            .db_context("Failed to query user")
    }
}
