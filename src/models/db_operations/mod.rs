use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, Result as RusqliteResult, Row};

pub mod announcements_db_operations;
pub mod messages_db_operations;
pub mod partners_db_operations;
pub mod portfolio_db_operations;
pub mod users_db_operations;

/// One row type per table. The per-entity modules implement this once and the
/// generic functions below cover the shared list/count/delete plumbing, so the
/// fetch logic exists in one place instead of four.
pub trait TableRecord: Sized {
    const TABLE: &'static str;
    const COLUMNS: &'static str;
    /// Ordering applied by `list_all`; the panels all read newest-first.
    const DEFAULT_ORDER: &'static str;

    fn from_row(row: &Row) -> RusqliteResult<Self>;
}

pub fn list_all<T: TableRecord>(conn: &Connection) -> RusqliteResult<Vec<T>> {
    let sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        T::COLUMNS,
        T::TABLE,
        T::DEFAULT_ORDER
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| T::from_row(row))?;
    rows.collect()
}

pub fn count<T: TableRecord>(conn: &Connection) -> RusqliteResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
    conn.query_row(&sql, [], |row| row.get(0))
}

pub fn delete_by_id<T: TableRecord>(conn: &Connection, id: &str) -> RusqliteResult<usize> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", T::TABLE);
    conn.execute(&sql, [id])
}

/// Current time as fixed-precision RFC 3339 text. Fixed precision keeps
/// lexicographic ORDER BY on the column identical to chronological order.
pub(crate) fn now_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(idx: usize, raw: String) -> RusqliteResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}
