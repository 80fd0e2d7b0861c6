use crate::config::Config;
use crate::helper::{admin_helpers, form_helpers, public_helpers};
use crate::middleware::AuthenticatedAdmin;
use crate::models::{DashboardStats, Notification, SessionUser};
use actix_csrf::extractor::{Csrf, CsrfGuarded, CsrfToken};
use actix_session::Session;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tera::{Context, Tera};

#[derive(Deserialize)]
struct LoginForm {
    csrf_token: CsrfToken,
    username: String,
    password: String,
}

impl CsrfGuarded for LoginForm {
    fn csrf_token(&self) -> &CsrfToken {
        &self.csrf_token
    }
}

pub fn config_login(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::get().to(show_admin_login_form))
        .route("/login", web::post().to(handle_admin_login))
        .route("/logout", web::post().to(handle_admin_logout));
}

pub fn config_dashboard(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(show_admin_dashboard))
        .route("/portfolio/create", web::post().to(create_portfolio_action))
        .route("/portfolio/update", web::post().to(update_portfolio_action))
        .route("/portfolio/delete", web::post().to(delete_portfolio_action))
        .route("/partners/create", web::post().to(create_partner_action))
        .route("/partners/update", web::post().to(update_partner_action))
        .route("/partners/delete", web::post().to(delete_partner_action))
        .route("/announcements/create", web::post().to(create_announcement_action))
        .route("/announcements/update", web::post().to(update_announcement_action))
        .route("/announcements/toggle", web::post().to(toggle_announcement_action))
        .route("/announcements/delete", web::post().to(delete_announcement_action))
        .route("/messages/delete", web::post().to(delete_message_action));
}

fn set_notification(session: &Session, message: &str, r#type: &str) {
    let _ = session.insert(
        "notification",
        Notification {
            message: message.to_string(),
            r#type: r#type.to_string(),
        },
    );
}

fn login_url(config: &Config) -> String {
    format!("/management/{}/login", config.admin_url_prefix)
}

fn dashboard_url(config: &Config, panel: &str) -> String {
    format!("/management/{}/dashboard#{}", config.admin_url_prefix, panel)
}

fn redirect(url: String) -> HttpResponse {
    HttpResponse::Found()
        .append_header(("location", url))
        .finish()
}

/// Fallback for the admin scope. Requests the session guard rejected, and
/// unknown admin paths, land on the login page instead of a 404.
pub async fn redirect_to_login(config: web::Data<Config>) -> impl Responder {
    redirect(login_url(&config))
}

async fn show_admin_login_form(
    session: Session,
    tera: web::Data<Tera>,
    token: CsrfToken,
    config: web::Data<Config>,
) -> impl Responder {
    if crate::middleware::admin_guard(&session) {
        return redirect(dashboard_url(&config, "portfolio"));
    }

    let mut ctx = Context::new();
    ctx.insert("admin_url_prefix", &config.admin_url_prefix);
    ctx.insert("csrf_token", token.get());

    if let Ok(Some(error)) = session.get::<String>("error") {
        ctx.insert("error", &error);
        session.remove("error");
    }

    match tera.render("admin/login.html", &ctx) {
        Ok(rendered) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(rendered),
        Err(err) => {
            log::error!("Template rendering error: {}", err);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

/// Every failure path reports the same generic message; the caller cannot
/// tell an unknown username from a wrong password.
async fn handle_admin_login(
    session: Session,
    pool: web::Data<crate::DbPool>,
    form: Csrf<web::Form<LoginForm>>,
    config: web::Data<Config>,
) -> impl Responder {
    let login_data = form.into_inner();

    match public_helpers::verify_admin_credentials(
        &pool,
        &login_data.username,
        &login_data.password,
    ) {
        Some(user) => {
            if let Err(e) = admin_helpers::stamp_last_login(&pool, &user) {
                // Login still proceeds; the stamp is best-effort bookkeeping.
                log::error!("Failed to stamp last_login for '{}': {}", user.username, e);
            }
            let session_user = SessionUser {
                id: user.id,
                username: user.username,
                is_logged_in: true,
            };
            if session.insert("admin_user", session_user).is_err() {
                let _ = session.insert("error", "An error occurred during login.");
                return redirect(login_url(&config));
            }
            session.remove("error");
            redirect(dashboard_url(&config, "portfolio"))
        }
        None => {
            let _ = session.insert("error", "Invalid username or password");
            redirect(login_url(&config))
        }
    }
}

async fn handle_admin_logout(session: Session, config: web::Data<Config>) -> impl Responder {
    session.purge();
    redirect(login_url(&config))
}

async fn show_admin_dashboard(
    auth_user: AuthenticatedAdmin,
    session: Session,
    tera: web::Data<Tera>,
    pool: web::Data<crate::DbPool>,
    token: CsrfToken,
    config: web::Data<Config>,
) -> impl Responder {
    let mut ctx = Context::new();
    ctx.insert("admin_url_prefix", &config.admin_url_prefix);
    ctx.insert("user", &auth_user);
    ctx.insert("csrf_token", token.get());

    if let Ok(Some(notification)) = session.get::<Notification>("notification") {
        ctx.insert("notification", &notification);
        session.remove("notification");
    }

    match admin_helpers::dashboard_stats(&pool) {
        Ok(stats) => ctx.insert("stats", &stats),
        Err(e) => {
            log::error!("Failed to fetch dashboard stats: {}", e);
            ctx.insert("stats", &DashboardStats::default());
        }
    }

    // Each panel fails independently; an empty list stands in for a failed
    // fetch so the rest of the dashboard stays usable.
    match admin_helpers::fetch_portfolio_items(&pool) {
        Ok(items) => ctx.insert("portfolio_items", &items),
        Err(e) => {
            log::error!("Failed to fetch portfolio items: {}", e);
            ctx.insert("portfolio_items", &Vec::<crate::models::PortfolioItem>::new());
        }
    }
    match admin_helpers::fetch_partners(&pool) {
        Ok(partners) => ctx.insert("partners", &partners),
        Err(e) => {
            log::error!("Failed to fetch partners: {}", e);
            ctx.insert("partners", &Vec::<crate::models::Partner>::new());
        }
    }
    match admin_helpers::fetch_announcements(&pool) {
        Ok(announcements) => ctx.insert("announcements", &announcements),
        Err(e) => {
            log::error!("Failed to fetch announcements: {}", e);
            ctx.insert("announcements", &Vec::<crate::models::Announcement>::new());
        }
    }
    match admin_helpers::fetch_messages(&pool) {
        Ok(messages) => ctx.insert("messages", &messages),
        Err(e) => {
            log::error!("Failed to fetch contact messages: {}", e);
            ctx.insert("messages", &Vec::<crate::models::ContactMessage>::new());
        }
    }

    match tera.render("admin/dashboard.html", &ctx) {
        Ok(rendered) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(rendered),
        Err(err) => {
            log::error!("Template rendering error: {}", err);
            HttpResponse::InternalServerError().body("Error rendering admin dashboard.")
        }
    }
}

// --- Portfolio panel actions ---

async fn create_portfolio_action(
    session: Session,
    pool: web::Data<crate::DbPool>,
    form: web::Bytes,
    config: web::Data<Config>,
) -> impl Responder {
    let back = dashboard_url(&config, "portfolio");
    let parsed = match form_helpers::parse_form(&form) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let title = parsed.get("title").map_or("", |s| s.trim());
    let description = parsed.get("description").map_or("", |s| s.trim());
    let image = parsed.get("image").map_or("", |s| s.trim());
    let link = parsed.get("link").map_or("", |s| s.trim());
    let tags = form_helpers::parse_tags(parsed.get("tags").map_or("", String::as_str));

    if title.is_empty() || description.is_empty() || image.is_empty() || link.is_empty() {
        set_notification(&session, "Please fill in all required fields.", "error");
        return redirect(back);
    }

    match admin_helpers::create_portfolio_item(&pool, title, description, image, link, &tags) {
        Ok(_) => set_notification(&session, "Portfolio item created successfully.", "success"),
        Err(e) => {
            log::error!("Failed to create portfolio item '{}': {}", title, e);
            set_notification(&session, "Failed to create portfolio item.", "error");
        }
    }
    redirect(back)
}

async fn update_portfolio_action(
    session: Session,
    pool: web::Data<crate::DbPool>,
    form: web::Bytes,
    config: web::Data<Config>,
) -> impl Responder {
    let back = dashboard_url(&config, "portfolio");
    let parsed = match form_helpers::parse_form(&form) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let id = parsed.get("id").map_or("", |s| s.trim());
    let title = parsed.get("title").map_or("", |s| s.trim());
    let description = parsed.get("description").map_or("", |s| s.trim());
    let image = parsed.get("image").map_or("", |s| s.trim());
    let link = parsed.get("link").map_or("", |s| s.trim());
    let tags = form_helpers::parse_tags(parsed.get("tags").map_or("", String::as_str));

    if id.is_empty() || title.is_empty() || description.is_empty() || image.is_empty() || link.is_empty() {
        set_notification(&session, "Please fill in all required fields.", "error");
        return redirect(back);
    }

    match admin_helpers::update_portfolio_item(&pool, id, title, description, image, link, &tags) {
        Ok(0) => set_notification(&session, "Portfolio item not found.", "error"),
        Ok(_) => set_notification(&session, "Portfolio item updated successfully.", "success"),
        Err(e) => {
            log::error!("Failed to update portfolio item '{}': {}", id, e);
            set_notification(&session, "Failed to update portfolio item.", "error");
        }
    }
    redirect(back)
}

async fn delete_portfolio_action(
    session: Session,
    pool: web::Data<crate::DbPool>,
    form: web::Bytes,
    config: web::Data<Config>,
) -> impl Responder {
    let back = dashboard_url(&config, "portfolio");
    let parsed = match form_helpers::parse_form(&form) {
        Ok(p) => p,
        Err(response) => return response,
    };
    let id = parsed.get("id").map_or("", |s| s.trim());
    if id.is_empty() {
        set_notification(&session, "Invalid portfolio item id.", "error");
        return redirect(back);
    }

    match admin_helpers::delete_portfolio_item(&pool, id) {
        Ok(0) => set_notification(&session, "Portfolio item not found.", "error"),
        Ok(_) => set_notification(&session, "Portfolio item deleted successfully.", "success"),
        Err(e) => {
            log::error!("Failed to delete portfolio item '{}': {}", id, e);
            set_notification(&session, "Failed to delete portfolio item.", "error");
        }
    }
    redirect(back)
}

// --- Partners panel actions ---

async fn create_partner_action(
    session: Session,
    pool: web::Data<crate::DbPool>,
    form: web::Bytes,
    config: web::Data<Config>,
) -> impl Responder {
    let back = dashboard_url(&config, "partners");
    let parsed = match form_helpers::parse_form(&form) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let name = parsed.get("name").map_or("", |s| s.trim());
    let description = parsed.get("description").map_or("", |s| s.trim());
    let image = parsed.get("image").map_or("", |s| s.trim());
    let website = parsed.get("website").map(|s| s.trim()).filter(|s| !s.is_empty());

    if name.is_empty() || description.is_empty() || image.is_empty() {
        set_notification(&session, "Please fill in all required fields.", "error");
        return redirect(back);
    }

    match admin_helpers::create_partner(&pool, name, description, image, website) {
        Ok(_) => set_notification(&session, "Partner created successfully.", "success"),
        Err(e) => {
            log::error!("Failed to create partner '{}': {}", name, e);
            set_notification(&session, "Failed to create partner.", "error");
        }
    }
    redirect(back)
}

async fn update_partner_action(
    session: Session,
    pool: web::Data<crate::DbPool>,
    form: web::Bytes,
    config: web::Data<Config>,
) -> impl Responder {
    let back = dashboard_url(&config, "partners");
    let parsed = match form_helpers::parse_form(&form) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let id = parsed.get("id").map_or("", |s| s.trim());
    let name = parsed.get("name").map_or("", |s| s.trim());
    let description = parsed.get("description").map_or("", |s| s.trim());
    let image = parsed.get("image").map_or("", |s| s.trim());
    let website = parsed.get("website").map(|s| s.trim()).filter(|s| !s.is_empty());

    if id.is_empty() || name.is_empty() || description.is_empty() || image.is_empty() {
        set_notification(&session, "Please fill in all required fields.", "error");
        return redirect(back);
    }

    match admin_helpers::update_partner(&pool, id, name, description, image, website) {
        Ok(0) => set_notification(&session, "Partner not found.", "error"),
        Ok(_) => set_notification(&session, "Partner updated successfully.", "success"),
        Err(e) => {
            log::error!("Failed to update partner '{}': {}", id, e);
            set_notification(&session, "Failed to update partner.", "error");
        }
    }
    redirect(back)
}

async fn delete_partner_action(
    session: Session,
    pool: web::Data<crate::DbPool>,
    form: web::Bytes,
    config: web::Data<Config>,
) -> impl Responder {
    let back = dashboard_url(&config, "partners");
    let parsed = match form_helpers::parse_form(&form) {
        Ok(p) => p,
        Err(response) => return response,
    };
    let id = parsed.get("id").map_or("", |s| s.trim());
    if id.is_empty() {
        set_notification(&session, "Invalid partner id.", "error");
        return redirect(back);
    }

    match admin_helpers::delete_partner(&pool, id) {
        Ok(0) => set_notification(&session, "Partner not found.", "error"),
        Ok(_) => set_notification(&session, "Partner deleted successfully.", "success"),
        Err(e) => {
            log::error!("Failed to delete partner '{}': {}", id, e);
            set_notification(&session, "Failed to delete partner.", "error");
        }
    }
    redirect(back)
}

// --- Announcements panel actions ---

async fn create_announcement_action(
    session: Session,
    pool: web::Data<crate::DbPool>,
    form: web::Bytes,
    config: web::Data<Config>,
) -> impl Responder {
    let back = dashboard_url(&config, "announcements");
    let parsed = match form_helpers::parse_form(&form) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let message = parsed.get("message").map_or("", |s| s.trim());
    if message.is_empty() {
        set_notification(&session, "Announcement text cannot be empty.", "error");
        return redirect(back);
    }

    match admin_helpers::create_announcement(&pool, message) {
        Ok(_) => set_notification(&session, "Announcement created successfully.", "success"),
        Err(e) => {
            log::error!("Failed to create announcement: {}", e);
            set_notification(&session, "Failed to create announcement.", "error");
        }
    }
    redirect(back)
}

async fn update_announcement_action(
    session: Session,
    pool: web::Data<crate::DbPool>,
    form: web::Bytes,
    config: web::Data<Config>,
) -> impl Responder {
    let back = dashboard_url(&config, "announcements");
    let parsed = match form_helpers::parse_form(&form) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let id = parsed.get("id").map_or("", |s| s.trim());
    let message = parsed.get("message").map_or("", |s| s.trim());
    if id.is_empty() {
        set_notification(&session, "Invalid announcement id.", "error");
        return redirect(back);
    }
    if message.is_empty() {
        set_notification(&session, "Announcement text cannot be empty.", "error");
        return redirect(back);
    }

    match admin_helpers::update_announcement_message(&pool, id, message) {
        Ok(0) => set_notification(&session, "Announcement not found.", "error"),
        Ok(_) => set_notification(&session, "Announcement updated successfully.", "success"),
        Err(e) => {
            log::error!("Failed to update announcement '{}': {}", id, e);
            set_notification(&session, "Failed to update announcement.", "error");
        }
    }
    redirect(back)
}

async fn toggle_announcement_action(
    session: Session,
    pool: web::Data<crate::DbPool>,
    form: web::Bytes,
    config: web::Data<Config>,
) -> impl Responder {
    let back = dashboard_url(&config, "announcements");
    let parsed = match form_helpers::parse_form(&form) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let id = parsed.get("id").map_or("", |s| s.trim());
    // The form posts the state the row should move to.
    let active = parsed.get("active").map_or(false, |s| s == "true" || s == "1");
    if id.is_empty() {
        set_notification(&session, "Invalid announcement id.", "error");
        return redirect(back);
    }

    match admin_helpers::set_announcement_active(&pool, id, active) {
        Ok(0) => set_notification(&session, "Announcement not found.", "error"),
        Ok(_) => {
            let verb = if active { "activated" } else { "deactivated" };
            set_notification(&session, &format!("Announcement {} successfully.", verb), "success");
        }
        Err(e) => {
            log::error!("Failed to toggle announcement '{}': {}", id, e);
            set_notification(&session, "Failed to change announcement status.", "error");
        }
    }
    redirect(back)
}

async fn delete_announcement_action(
    session: Session,
    pool: web::Data<crate::DbPool>,
    form: web::Bytes,
    config: web::Data<Config>,
) -> impl Responder {
    let back = dashboard_url(&config, "announcements");
    let parsed = match form_helpers::parse_form(&form) {
        Ok(p) => p,
        Err(response) => return response,
    };
    let id = parsed.get("id").map_or("", |s| s.trim());
    if id.is_empty() {
        set_notification(&session, "Invalid announcement id.", "error");
        return redirect(back);
    }

    match admin_helpers::delete_announcement(&pool, id) {
        Ok(0) => set_notification(&session, "Announcement not found.", "error"),
        Ok(_) => set_notification(&session, "Announcement deleted successfully.", "success"),
        Err(e) => {
            log::error!("Failed to delete announcement '{}': {}", id, e);
            set_notification(&session, "Failed to delete announcement.", "error");
        }
    }
    redirect(back)
}

// --- Messages panel actions ---

async fn delete_message_action(
    session: Session,
    pool: web::Data<crate::DbPool>,
    form: web::Bytes,
    config: web::Data<Config>,
) -> impl Responder {
    let back = dashboard_url(&config, "messages");
    let parsed = match form_helpers::parse_form(&form) {
        Ok(p) => p,
        Err(response) => return response,
    };
    let id = parsed.get("id").map_or("", |s| s.trim());
    if id.is_empty() {
        set_notification(&session, "Invalid message id.", "error");
        return redirect(back);
    }

    match admin_helpers::delete_message(&pool, id) {
        Ok(0) => set_notification(&session, "Message not found.", "error"),
        Ok(_) => set_notification(&session, "Message deleted successfully.", "success"),
        Err(e) => {
            log::error!("Failed to delete message '{}': {}", id, e);
            set_notification(&session, "Failed to delete message.", "error");
        }
    }
    redirect(back)
}
