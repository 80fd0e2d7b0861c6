use crate::helper::DataError;
use crate::models::db_operations::{
    announcements_db_operations, count, delete_by_id, list_all, partners_db_operations,
    portfolio_db_operations, users_db_operations,
};
use crate::models::{
    AdminUser, Announcement, ContactMessage, DashboardStats, Partner, PortfolioItem,
};
use crate::DbPool;
use actix_web::web;

// Helper to get a connection from the pool
fn get_conn(
    pool: &web::Data<DbPool>,
) -> Result<r2d2::PooledConnection<r2d2_sqlite::SqliteConnectionManager>, DataError> {
    pool.get().map_err(DataError::Pool)
}

// --- Dashboard ---

pub fn dashboard_stats(pool: &web::Data<DbPool>) -> Result<DashboardStats, DataError> {
    let conn = get_conn(pool)?;
    Ok(DashboardStats {
        portfolio_count: count::<PortfolioItem>(&conn)?,
        partners_count: count::<Partner>(&conn)?,
        announcements_count: count::<Announcement>(&conn)?,
        messages_count: count::<ContactMessage>(&conn)?,
    })
}

// --- Portfolio panel ---

pub fn fetch_portfolio_items(pool: &web::Data<DbPool>) -> Result<Vec<PortfolioItem>, DataError> {
    let conn = get_conn(pool)?;
    Ok(list_all(&conn)?)
}

pub fn create_portfolio_item(
    pool: &web::Data<DbPool>,
    title: &str,
    description: &str,
    image: &str,
    link: &str,
    tags: &[String],
) -> Result<String, DataError> {
    let conn = get_conn(pool)?;
    Ok(portfolio_db_operations::create_item(
        &conn,
        title,
        description,
        image,
        link,
        tags,
    )?)
}

pub fn update_portfolio_item(
    pool: &web::Data<DbPool>,
    id: &str,
    title: &str,
    description: &str,
    image: &str,
    link: &str,
    tags: &[String],
) -> Result<usize, DataError> {
    let conn = get_conn(pool)?;
    Ok(portfolio_db_operations::update_item(
        &conn,
        id,
        title,
        description,
        image,
        link,
        tags,
    )?)
}

pub fn delete_portfolio_item(pool: &web::Data<DbPool>, id: &str) -> Result<usize, DataError> {
    let conn = get_conn(pool)?;
    Ok(delete_by_id::<PortfolioItem>(&conn, id)?)
}

// --- Partners panel ---

pub fn fetch_partners(pool: &web::Data<DbPool>) -> Result<Vec<Partner>, DataError> {
    let conn = get_conn(pool)?;
    Ok(list_all(&conn)?)
}

pub fn create_partner(
    pool: &web::Data<DbPool>,
    name: &str,
    description: &str,
    image: &str,
    website: Option<&str>,
) -> Result<String, DataError> {
    let conn = get_conn(pool)?;
    Ok(partners_db_operations::create_partner(
        &conn,
        name,
        description,
        image,
        website,
    )?)
}

pub fn update_partner(
    pool: &web::Data<DbPool>,
    id: &str,
    name: &str,
    description: &str,
    image: &str,
    website: Option<&str>,
) -> Result<usize, DataError> {
    let conn = get_conn(pool)?;
    Ok(partners_db_operations::update_partner(
        &conn,
        id,
        name,
        description,
        image,
        website,
    )?)
}

pub fn delete_partner(pool: &web::Data<DbPool>, id: &str) -> Result<usize, DataError> {
    let conn = get_conn(pool)?;
    Ok(delete_by_id::<Partner>(&conn, id)?)
}

// --- Announcements panel ---

pub fn fetch_announcements(pool: &web::Data<DbPool>) -> Result<Vec<Announcement>, DataError> {
    let conn = get_conn(pool)?;
    Ok(list_all(&conn)?)
}

pub fn create_announcement(pool: &web::Data<DbPool>, message: &str) -> Result<String, DataError> {
    let conn = get_conn(pool)?;
    Ok(announcements_db_operations::create_announcement(
        &conn, message,
    )?)
}

pub fn update_announcement_message(
    pool: &web::Data<DbPool>,
    id: &str,
    message: &str,
) -> Result<usize, DataError> {
    let conn = get_conn(pool)?;
    Ok(announcements_db_operations::update_message(
        &conn, id, message,
    )?)
}

pub fn set_announcement_active(
    pool: &web::Data<DbPool>,
    id: &str,
    active: bool,
) -> Result<usize, DataError> {
    let conn = get_conn(pool)?;
    Ok(announcements_db_operations::set_active(&conn, id, active)?)
}

pub fn delete_announcement(pool: &web::Data<DbPool>, id: &str) -> Result<usize, DataError> {
    let conn = get_conn(pool)?;
    Ok(delete_by_id::<Announcement>(&conn, id)?)
}

// --- Messages panel ---

pub fn fetch_messages(pool: &web::Data<DbPool>) -> Result<Vec<ContactMessage>, DataError> {
    let conn = get_conn(pool)?;
    Ok(list_all(&conn)?)
}

pub fn delete_message(pool: &web::Data<DbPool>, id: &str) -> Result<usize, DataError> {
    let conn = get_conn(pool)?;
    Ok(delete_by_id::<ContactMessage>(&conn, id)?)
}

// --- Login ---

pub fn stamp_last_login(pool: &web::Data<DbPool>, user: &AdminUser) -> Result<(), DataError> {
    let conn = get_conn(pool)?;
    Ok(users_db_operations::update_last_login(&conn, &user.id)?)
}
