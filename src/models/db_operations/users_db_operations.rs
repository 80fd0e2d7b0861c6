use crate::models::AdminUser;
use bcrypt::{hash, verify, BcryptError};
use rusqlite::{params, Connection, Error as RusqliteError, Result as RusqliteResult, Row};
use uuid::Uuid;

use super::now_stamp;

fn bcrypt_to_rusqlite_error(e: BcryptError) -> RusqliteError {
    RusqliteError::ToSqlConversionFailure(Box::new(e))
}

fn user_from_row(row: &Row) -> RusqliteResult<AdminUser> {
    Ok(AdminUser {
        id: row.get(0)?,
        username: row.get(1)?,
        password_hash: row.get(2)?,
        last_login: row.get(3)?,
    })
}

pub fn create_admin(conn: &Connection, username: &str, password: &str) -> RusqliteResult<String> {
    let id = Uuid::new_v4().to_string();
    let hashed_password = hash(password, bcrypt::DEFAULT_COST).map_err(bcrypt_to_rusqlite_error)?;
    conn.execute(
        "INSERT INTO admin_users (id, username, password_hash) VALUES (?1, ?2, ?3)",
        params![id, username, hashed_password],
    )?;
    Ok(id)
}

pub fn read_user_by_username(conn: &Connection, username: &str) -> Option<AdminUser> {
    conn.query_row(
        "SELECT id, username, password_hash, last_login FROM admin_users WHERE username = ?1",
        [username],
        user_from_row,
    )
    .ok()
}

/// Credential check for the login form. Returns the user only when the row
/// exists and the password matches; every failure mode is indistinguishable
/// to the caller.
pub fn verify_credentials(conn: &Connection, username: &str, password: &str) -> Option<AdminUser> {
    let user = read_user_by_username(conn, username)?;
    if verify(password, &user.password_hash).unwrap_or(false) {
        Some(user)
    } else {
        None
    }
}

pub fn update_last_login(conn: &Connection, id: &str) -> RusqliteResult<()> {
    conn.execute(
        "UPDATE admin_users SET last_login = ?1 WHERE id = ?2",
        params![now_stamp(), id],
    )?;
    Ok(())
}

pub fn list_admin_usernames(conn: &Connection) -> RusqliteResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT username FROM admin_users ORDER BY username")?;
    let rows = stmt.query_map([], |row| row.get(0))?;
    rows.collect()
}

pub fn change_password(
    conn: &Connection,
    username: &str,
    new_password: &str,
) -> RusqliteResult<usize> {
    let hashed_password =
        hash(new_password, bcrypt::DEFAULT_COST).map_err(bcrypt_to_rusqlite_error)?;
    conn.execute(
        "UPDATE admin_users SET password_hash = ?1 WHERE username = ?2",
        params![hashed_password, username],
    )
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

    #[test]
    fn wrong_password_and_unknown_user_both_yield_none() {
        let conn = test_conn();
        create_admin(&conn, "admin", "correct horse").unwrap();

        assert!(verify_credentials(&conn, "admin", "wrong").is_none());
        assert!(verify_credentials(&conn, "nobody", "correct horse").is_none());
    }

    #[test]
    fn correct_credentials_yield_the_user() {
        let conn = test_conn();
        let id = create_admin(&conn, "admin", "correct horse").unwrap();

        let user = verify_credentials(&conn, "admin", "correct horse").unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.username, "admin");
        assert!(user.last_login.is_none());
    }

    #[test]
    fn login_stamp_is_recorded() {
        let conn = test_conn();
        let id = create_admin(&conn, "admin", "pw123456").unwrap();
        update_last_login(&conn, &id).unwrap();

        let user = read_user_by_username(&conn, "admin").unwrap();
        assert!(user.last_login.is_some());
    }

    #[test]
    fn duplicate_usernames_are_rejected() {
        let conn = test_conn();
        create_admin(&conn, "admin", "pw123456").unwrap();
        assert!(create_admin(&conn, "admin", "other").is_err());
    }

    #[test]
    fn change_password_invalidates_the_old_one() {
        let conn = test_conn();
        create_admin(&conn, "admin", "old password").unwrap();
        assert_eq!(change_password(&conn, "admin", "new password").unwrap(), 1);

        assert!(verify_credentials(&conn, "admin", "old password").is_none());
        assert!(verify_credentials(&conn, "admin", "new password").is_some());
    }
}
