use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Clone)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Clone)]
pub struct Announcement {
    pub id: String,
    pub message: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Admin account row. Created and maintained through setup_cli only;
/// the web layer reads it to authenticate and stamps last_login.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub last_login: Option<String>,
}

/// One-shot message flashed through the session between a mutation
/// and the dashboard render that follows it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Notification {
    pub message: String,
    pub r#type: String, // 'success' or 'error'
}

/// The session object gating the admin pages.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub is_logged_in: bool,
}

#[derive(Debug, Serialize, Default, Clone, Copy)]
pub struct DashboardStats {
    pub portfolio_count: i64,
    pub partners_count: i64,
    pub announcements_count: i64,
    pub messages_count: i64,
}

pub mod db_operations;
