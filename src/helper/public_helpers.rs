use crate::helper::DataError;
use crate::models::db_operations::{
    announcements_db_operations, list_all, messages_db_operations, users_db_operations,
};
use crate::models::{AdminUser, Announcement, Partner, PortfolioItem};
use crate::DbPool;
use actix_web::web;

/// Sentinel filter label that shows the full portfolio set.
pub const ALL_FILTER: &str = "All";

pub fn fetch_portfolio(pool: &web::Data<DbPool>) -> Result<Vec<PortfolioItem>, DataError> {
    let conn = pool.get()?;
    Ok(list_all(&conn)?)
}

pub fn fetch_partners(pool: &web::Data<DbPool>) -> Result<Vec<Partner>, DataError> {
    let conn = pool.get()?;
    Ok(list_all(&conn)?)
}

/// The announcement bar content. A missing row and a failed fetch look the
/// same to the public page: nothing is rendered, errors are only logged.
pub fn current_announcement(pool: &web::Data<DbPool>) -> Option<Announcement> {
    let conn = match pool.get() {
        Ok(conn) => conn,
        Err(e) => {
            log::error!("Could not get DB connection for announcement fetch: {}", e);
            return None;
        }
    };
    match announcements_db_operations::latest_active(&conn) {
        Ok(announcement) => announcement,
        Err(e) => {
            log::error!("Failed to fetch current announcement: {}", e);
            None
        }
    }
}

pub fn submit_contact_message(
    pool: &web::Data<DbPool>,
    name: &str,
    email: &str,
    message: &str,
) -> Result<String, DataError> {
    let conn = pool.get()?;
    Ok(messages_db_operations::create_message(
        &conn, name, email, message,
    )?)
}

pub fn verify_admin_credentials(
    pool: &web::Data<DbPool>,
    username: &str,
    password: &str,
) -> Option<AdminUser> {
    if let Ok(conn) = pool.get() {
        users_db_operations::verify_credentials(&conn, username, password)
    } else {
        None
    }
}

/// Client-side filter semantics, kept here as the canonical definition: a row
/// is shown iff its tag list contains the selected label, or the label is the
/// "All" sentinel. Synchronous, no re-fetch.
pub fn filter_by_tag<'a>(items: &'a [PortfolioItem], filter: &str) -> Vec<&'a PortfolioItem> {
    items
        .iter()
        .filter(|item| filter == ALL_FILTER || item.tags.iter().any(|tag| tag == filter))
        .collect()
}

/// The filter labels offered for a fetched set: distinct tags, sorted, with
/// the "All" sentinel first.
pub fn filter_labels(items: &[PortfolioItem]) -> Vec<String> {
    let mut labels: Vec<String> = items
        .iter()
        .flat_map(|item| item.tags.iter().cloned())
        .collect();
    labels.sort_unstable();
    labels.dedup();
    labels.insert(0, ALL_FILTER.to_string());
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(id: &str, tags: &[&str]) -> PortfolioItem {
        PortfolioItem {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            image: String::new(),
            link: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn filtering_by_tag_keeps_exactly_the_tagged_subset() {
        let items = vec![
            item("a", &["AI", "Data Science"]),
            item("b", &["Security"]),
            item("c", &["AI"]),
            item("d", &[]),
        ];

        let ai: Vec<&str> = filter_by_tag(&items, "AI")
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ai, vec!["a", "c"]);
    }

    #[test]
    fn the_all_sentinel_shows_everything() {
        let items = vec![item("a", &["AI"]), item("b", &[])];
        assert_eq!(filter_by_tag(&items, ALL_FILTER).len(), 2);
    }

    #[test]
    fn labels_are_distinct_sorted_and_led_by_all() {
        let items = vec![
            item("a", &["Security", "AI"]),
            item("b", &["AI", "Fintech"]),
        ];
        assert_eq!(
            filter_labels(&items),
            vec!["All", "AI", "Fintech", "Security"]
        );
    }
}
