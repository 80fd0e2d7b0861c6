use crate::models::Announcement;
use rusqlite::{params, Connection, OptionalExtension, Result as RusqliteResult, Row};
use uuid::Uuid;

use super::{now_stamp, parse_timestamp, TableRecord};

impl TableRecord for Announcement {
    const TABLE: &'static str = "announcements";
    const COLUMNS: &'static str = "id, message, active, created_at, updated_at";
    const DEFAULT_ORDER: &'static str = "created_at DESC";

    fn from_row(row: &Row) -> RusqliteResult<Self> {
        Ok(Announcement {
            id: row.get(0)?,
            message: row.get(1)?,
            active: row.get(2)?,
            created_at: parse_timestamp(3, row.get(3)?)?,
            updated_at: parse_timestamp(4, row.get(4)?)?,
        })
    }
}

/// New announcements start active, matching the public bar picking them up
/// immediately after creation.
pub fn create_announcement(conn: &Connection, message: &str) -> RusqliteResult<String> {
    let id = Uuid::new_v4().to_string();
    let now = now_stamp();
    conn.execute(
        "INSERT INTO announcements (id, message, active, created_at, updated_at)
         VALUES (?1, ?2, 1, ?3, ?3)",
        params![id, message, now],
    )?;
    Ok(id)
}

pub fn update_message(conn: &Connection, id: &str, message: &str) -> RusqliteResult<usize> {
    conn.execute(
        "UPDATE announcements SET message = ?1, updated_at = ?2 WHERE id = ?3",
        params![message, now_stamp(), id],
    )
}

/// Toggling bumps updated_at, so the most recently toggled-on announcement
/// wins the public slot.
pub fn set_active(conn: &Connection, id: &str, active: bool) -> RusqliteResult<usize> {
    conn.execute(
        "UPDATE announcements SET active = ?1, updated_at = ?2 WHERE id = ?3",
        params![active, now_stamp(), id],
    )
}

/// The single announcement shown publicly: most recently updated among the
/// active ones, or none.
pub fn latest_active(conn: &Connection) -> RusqliteResult<Option<Announcement>> {
    conn.query_row(
        "SELECT id, message, active, created_at, updated_at FROM announcements
         WHERE active = 1 ORDER BY updated_at DESC LIMIT 1",
        [],
        Announcement::from_row,
    )
    .optional()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::db_setup;

    fn test_conn() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        db_setup::setup_site_db(&mut conn).unwrap();
        conn
    }

    fn force_updated_at(conn: &Connection, id: &str, stamp: &str) {
        conn.execute(
            "UPDATE announcements SET updated_at = ?1 WHERE id = ?2",
            params![stamp, id],
        )
        .unwrap();
    }

    #[test]
    fn latest_active_prefers_most_recently_updated() {
        let conn = test_conn();
        let older = create_announcement(&conn, "older").unwrap();
        let newer = create_announcement(&conn, "newer").unwrap();
        force_updated_at(&conn, &older, "2026-01-01T00:00:00.000000Z");
        force_updated_at(&conn, &newer, "2026-02-01T00:00:00.000000Z");

        let shown = latest_active(&conn).unwrap().unwrap();
        assert_eq!(shown.id, newer);
    }

    #[test]
    fn inactive_rows_never_win_the_slot() {
        let conn = test_conn();
        let a = create_announcement(&conn, "a").unwrap();
        let b = create_announcement(&conn, "b").unwrap();
        force_updated_at(&conn, &a, "2026-01-01T00:00:00.000000Z");
        force_updated_at(&conn, &b, "2026-02-01T00:00:00.000000Z");

        // b is newer but gets deactivated, so a is shown.
        set_active(&conn, &b, false).unwrap();
        force_updated_at(&conn, &b, "2026-02-01T00:00:00.000000Z");
        assert_eq!(latest_active(&conn).unwrap().unwrap().id, a);

        // Toggling b back on bumps updated_at and reclaims the slot.
        set_active(&conn, &b, true).unwrap();
        assert_eq!(latest_active(&conn).unwrap().unwrap().id, b);
    }

    #[test]
    fn no_active_rows_means_nothing_is_shown() {
        let conn = test_conn();
        assert!(latest_active(&conn).unwrap().is_none());

        let id = create_announcement(&conn, "only").unwrap();
        set_active(&conn, &id, false).unwrap();
        assert!(latest_active(&conn).unwrap().is_none());
    }
}
