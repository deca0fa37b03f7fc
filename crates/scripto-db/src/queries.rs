use crate::Database;
use crate::models::{ContentRow, NewContent, ProfileRow, UserRow};
use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, ErrorCode, Row};

/// RFC 3339 UTC with microseconds, so lexical order matches time order.
fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl Database {
    // -- Users --

    /// Create a user together with its empty profile row.
    /// Returns `false` if the username is already taken.
    pub fn create_user(&self, id: &str, username: &str, password_hash: &str) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            let inserted = tx.execute(
                "INSERT INTO users (id, username, password) VALUES (?1, ?2, ?3)",
                (id, username, password_hash),
            );
            match inserted {
                Ok(_) => {}
                Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                    return Ok(false);
                }
                Err(e) => return Err(e.into()),
            }
            tx.execute(
                "INSERT INTO profiles (id, updated_at) VALUES (?1, ?2)",
                (id, now_timestamp()),
            )?;
            tx.commit()?;
            Ok(true)
        })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, username))
    }

    // -- Profiles --

    pub fn get_profile(&self, user_id: &str) -> Result<Option<ProfileRow>> {
        self.with_conn(|conn| query_profile(conn, user_id))
    }

    /// Update the given profile fields; `None` leaves a field unchanged.
    /// Returns the updated row, or `None` if the profile does not exist.
    pub fn update_profile(
        &self,
        user_id: &str,
        full_name: Option<&str>,
        avatar_url: Option<&str>,
    ) -> Result<Option<ProfileRow>> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE profiles
                 SET full_name = COALESCE(?2, full_name),
                     avatar_url = COALESCE(?3, avatar_url),
                     updated_at = ?4
                 WHERE id = ?1",
                rusqlite::params![user_id, full_name, avatar_url, now_timestamp()],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            query_profile(conn, user_id)
        })
    }

    // -- User content --

    pub fn insert_content(&self, new: &NewContent<'_>) -> Result<ContentRow> {
        let created_at = now_timestamp();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO user_content (id, user_id, title, content, type, platform, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    new.id,
                    new.user_id,
                    new.title,
                    new.content,
                    new.content_type,
                    new.platform,
                    created_at,
                ],
            )?;
            Ok(())
        })?;

        Ok(ContentRow {
            id: new.id.to_string(),
            user_id: new.user_id.to_string(),
            title: new.title.to_string(),
            content: new.content.to_string(),
            content_type: new.content_type.to_string(),
            platform: new.platform.map(str::to_string),
            created_at,
        })
    }

    /// All rows owned by `user_id`, newest first.
    pub fn list_content(&self, user_id: &str) -> Result<Vec<ContentRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, title, content, type, platform, created_at
                 FROM user_content
                 WHERE user_id = ?1
                 ORDER BY created_at DESC, rowid DESC",
            )?;
            let rows = stmt
                .query_map([user_id], content_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Delete a row owned by `user_id`. Returns false when no such row exists
    /// for that user.
    pub fn delete_content(&self, user_id: &str, id: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let deleted = conn.execute(
                "DELETE FROM user_content WHERE id = ?1 AND user_id = ?2",
                (id, user_id),
            )?;
            Ok(deleted > 0)
        })
    }
}

fn query_user(conn: &Connection, username: &str) -> Result<Option<UserRow>> {
    let mut stmt = conn.prepare("SELECT id, username, password FROM users WHERE username = ?1")?;

    let row = stmt
        .query_row([username], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_profile(conn: &Connection, user_id: &str) -> Result<Option<ProfileRow>> {
    let mut stmt =
        conn.prepare("SELECT id, full_name, avatar_url, updated_at FROM profiles WHERE id = ?1")?;

    let row = stmt
        .query_row([user_id], |row| {
            Ok(ProfileRow {
                id: row.get(0)?,
                full_name: row.get(1)?,
                avatar_url: row.get(2)?,
                updated_at: row.get(3)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn content_row(row: &Row<'_>) -> rusqlite::Result<ContentRow> {
    Ok(ContentRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        content: row.get(3)?,
        content_type: row.get(4)?,
        platform: row.get(5)?,
        created_at: row.get(6)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
