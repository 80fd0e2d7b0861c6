use crate::models::PortfolioItem;
use rusqlite::{params, Connection, Error as RusqliteError, Result as RusqliteResult, Row};
use uuid::Uuid;

use super::{now_stamp, parse_timestamp, TableRecord};

fn json_to_rusqlite_error(e: serde_json::Error) -> RusqliteError {
    RusqliteError::ToSqlConversionFailure(Box::new(e))
}

impl TableRecord for PortfolioItem {
    const TABLE: &'static str = "portfolio";
    const COLUMNS: &'static str = "id, title, description, image, link, tags, created_at";
    const DEFAULT_ORDER: &'static str = "created_at DESC";

    fn from_row(row: &Row) -> RusqliteResult<Self> {
        let tags_json: String = row.get(5)?;
        Ok(PortfolioItem {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            image: row.get(3)?,
            link: row.get(4)?,
            // A malformed tag column degrades to an empty list rather than
            // failing the whole listing.
            tags: serde_json::from_str(&tags_json).unwrap_or_default(),
            created_at: parse_timestamp(6, row.get(6)?)?,
        })
    }
}

pub fn create_item(
    conn: &Connection,
    title: &str,
    description: &str,
    image: &str,
    link: &str,
    tags: &[String],
) -> RusqliteResult<String> {
    let id = Uuid::new_v4().to_string();
    let tags_json = serde_json::to_string(tags).map_err(json_to_rusqlite_error)?;
    conn.execute(
        "INSERT INTO portfolio (id, title, description, image, link, tags, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![id, title, description, image, link, tags_json, now_stamp()],
    )?;
    Ok(id)
}

pub fn update_item(
    conn: &Connection,
    id: &str,
    title: &str,
    description: &str,
    image: &str,
    link: &str,
    tags: &[String],
) -> RusqliteResult<usize> {
    let tags_json = serde_json::to_string(tags).map_err(json_to_rusqlite_error)?;
    conn.execute(
        "UPDATE portfolio SET title = ?1, description = ?2, image = ?3, link = ?4, tags = ?5
         WHERE id = ?6",
        params![title, description, image, link, tags_json, id],
    )
}
