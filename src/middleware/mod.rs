use crate::config::Config;
use crate::models::SessionUser;
use actix_session::{Session, SessionExt};
use actix_web::{dev, guard, web, FromRequest, HttpRequest};
use serde::Serialize;
use std::future::{ready, Ready};

/// The logged-in admin, pulled out of the session. Handlers that take this
/// extractor cannot run without a valid session object.
#[derive(Debug, Serialize, Clone)]
pub struct AuthenticatedAdmin {
    pub id: String,
    pub username: String,
}

impl FromRequest for AuthenticatedAdmin {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let session = req.get_session();
        match session.get::<SessionUser>("admin_user") {
            Ok(Some(user)) if user.is_logged_in => ready(Ok(AuthenticatedAdmin {
                id: user.id,
                username: user.username,
            })),
            _ => ready(Err(actix_web::error::ErrorUnauthorized("Not logged in."))),
        }
    }
}

/// Admin-page gate: the session must hold a parseable session object with the
/// logged-in flag set. Absent, false or unparseable all fail the guard, and
/// the scope falls through to the login redirect.
pub fn admin_guard(session: &Session) -> bool {
    matches!(
        session.get::<SessionUser>("admin_user"),
        Ok(Some(user)) if user.is_logged_in
    )
}

/// Restricts the admin login routes to an allow-list of client IPs from the
/// configuration. '*' disables the check; an empty list denies everyone.
pub fn ip_guard(ctx: &guard::GuardContext) -> bool {
    let allowed_ips = match ctx.app_data::<web::Data<Config>>() {
        Some(config) => config.admin_login_accept_ip.clone(),
        None => {
            log::warn!("Config missing from app data. Denying all admin login attempts.");
            return false;
        }
    };

    if allowed_ips.trim() == "*" {
        return true;
    }

    // Take the first X-Forwarded-For entry when behind a reverse proxy,
    // otherwise the peer address.
    let request_ip = ctx
        .head()
        .headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .or_else(|| ctx.head().peer_addr.map(|addr| addr.ip().to_string()));

    let peer_addr = match request_ip {
        Some(ip) => ip,
        None => {
            log::warn!("Could not determine peer IP address for admin login attempt.");
            return false;
        }
    };

    let is_allowed = allowed_ips.split(',').any(|ip| ip.trim() == peer_addr);
    if !is_allowed {
        log::warn!("Blocked admin login attempt from unauthorized IP: {}", peer_addr);
    }
    is_allowed
}
