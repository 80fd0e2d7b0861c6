use crate::models::ContactMessage;
use rusqlite::{params, Connection, Result as RusqliteResult, Row};
use uuid::Uuid;

use super::{now_stamp, parse_timestamp, TableRecord};

impl TableRecord for ContactMessage {
    const TABLE: &'static str = "contact_messages";
    const COLUMNS: &'static str = "id, name, email, message, created_at";
    const DEFAULT_ORDER: &'static str = "created_at DESC";

    fn from_row(row: &Row) -> RusqliteResult<Self> {
        Ok(ContactMessage {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            message: row.get(3)?,
            created_at: parse_timestamp(4, row.get(4)?)?,
        })
    }
}

// Messages are insert-only from the public side; the admin panel reads and
// deletes them, never updates.
pub fn create_message(
    conn: &Connection,
    name: &str,
    email: &str,
    message: &str,
) -> RusqliteResult<String> {
    let id = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO contact_messages (id, name, email, message, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![id, name, email, message, now_stamp()],
    )?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::db_operations::{count, delete_by_id, list_all};
    use crate::setup::db_setup;

    fn test_conn() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        db_setup::setup_site_db(&mut conn).unwrap();
        conn
    }

    #[test]
    fn messages_list_newest_first() {
        let conn = test_conn();
        create_message(&conn, "Ann", "ann@example.com", "first message here").unwrap();
        let latest =
            create_message(&conn, "Bob", "bob@example.com", "second message here").unwrap();

        let messages: Vec<ContactMessage> = list_all(&conn).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].id, latest);
        assert_eq!(messages[0].name, "Bob");
    }

    #[test]
    fn delete_is_the_only_mutation() {
        let conn = test_conn();
        let id = create_message(&conn, "Ann", "ann@example.com", "a long enough body").unwrap();
        assert_eq!(delete_by_id::<ContactMessage>(&conn, &id).unwrap(), 1);
        assert_eq!(count::<ContactMessage>(&conn).unwrap(), 0);
    }
}
