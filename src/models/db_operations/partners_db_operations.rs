use crate::models::Partner;
use rusqlite::{params, Connection, Result as RusqliteResult, Row};
use uuid::Uuid;

use super::{now_stamp, parse_timestamp, TableRecord};

impl TableRecord for Partner {
    const TABLE: &'static str = "partners";
    const COLUMNS: &'static str = "id, name, description, image, website, created_at";
    const DEFAULT_ORDER: &'static str = "created_at DESC";

    fn from_row(row: &Row) -> RusqliteResult<Self> {
        Ok(Partner {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            image: row.get(3)?,
            website: row.get(4)?,
            created_at: parse_timestamp(5, row.get(5)?)?,
        })
    }
}

pub fn create_partner(
    conn: &Connection,
    name: &str,
    description: &str,
    image: &str,
    website: Option<&str>,
) -> RusqliteResult<String> {
    let id = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO partners (id, name, description, image, website, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![id, name, description, image, website, now_stamp()],
    )?;
    Ok(id)
}

pub fn update_partner(
    conn: &Connection,
    id: &str,
    name: &str,
    description: &str,
    image: &str,
    website: Option<&str>,
) -> RusqliteResult<usize> {
    conn.execute(
        "UPDATE partners SET name = ?1, description = ?2, image = ?3, website = ?4 WHERE id = ?5",
        params![name, description, image, website, id],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::db_operations::list_all;
    use crate::setup::db_setup;

    fn test_conn() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        db_setup::setup_site_db(&mut conn).unwrap();
        conn
    }

    #[test]
    fn website_is_optional() {
        let conn = test_conn();
        create_partner(&conn, "Acme", "d", "img", None).unwrap();
        create_partner(&conn, "Globex", "d", "img", Some("https://globex.example")).unwrap();

        let partners: Vec<Partner> = list_all(&conn).unwrap();
        assert_eq!(partners.len(), 2);
        // Newest first.
        assert_eq!(partners[0].name, "Globex");
        assert_eq!(
            partners[0].website.as_deref(),
            Some("https://globex.example")
        );
        assert_eq!(partners[1].website, None);
    }

    #[test]
    fn update_can_clear_the_website() {
        let conn = test_conn();
        let id = create_partner(&conn, "Acme", "d", "img", Some("https://acme.example")).unwrap();
        update_partner(&conn, &id, "Acme", "d", "img", None).unwrap();

        let partners: Vec<Partner> = list_all(&conn).unwrap();
        assert_eq!(partners[0].website, None);
    }
}
