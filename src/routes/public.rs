use crate::config::Config;
use crate::helper::{public_helpers, validation_helpers};
use crate::translations::Lang;
use crate::DbPool;
use actix_web::cookie::Cookie;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tera::{Context, Tera};

#[derive(Deserialize)]
pub struct PageQuery {
    lang: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
}

pub fn config_pages(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(show_home_page))
        .route("/partners", web::get().to(show_partners_page));
}

pub fn config_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health))
            .route("/portfolio", web::get().to(get_portfolio))
            .route("/partners", web::get().to(get_partners))
            .route("/announcements/current", web::get().to(get_current_announcement))
            .route("/contact", web::post().to(submit_contact)),
    );
}

/// Language for this request: explicit query beats the cookie, the cookie
/// beats the configured default.
fn request_lang(req: &HttpRequest, query: &PageQuery, config: &Config) -> Lang {
    if let Some(code) = query.lang.as_deref() {
        return Lang::from_code(code);
    }
    if let Some(cookie) = req.cookie("lang") {
        return Lang::from_code(cookie.value());
    }
    Lang::from_code(&config.default_lang)
}

/// Echoes an explicit `?lang=` choice into a cookie so later requests
/// without the query keep the chosen language.
fn remember_lang(response: &mut HttpResponse, lang: Lang) {
    let cookie = Cookie::build("lang", lang.code()).path("/").finish();
    if let Err(e) = response.add_cookie(&cookie) {
        log::error!("Failed to set language cookie: {}", e);
    }
}

fn page_context(lang: Lang, pool: &web::Data<DbPool>) -> Context {
    let mut ctx = Context::new();
    ctx.insert("t", lang.strings());
    ctx.insert("lang", lang.code());
    ctx.insert("dir", lang.dir());
    // The bar renders nothing when no active announcement exists or the
    // fetch fails.
    ctx.insert("announcement", &public_helpers::current_announcement(pool));
    ctx
}

fn render(tera: &Tera, template: &str, ctx: &Context) -> HttpResponse {
    match tera.render(template, ctx) {
        Ok(rendered) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(rendered),
        Err(err) => {
            log::error!("Template rendering error in '{}': {}", template, err);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("active")
}

async fn show_home_page(
    req: HttpRequest,
    query: web::Query<PageQuery>,
    tera: web::Data<Tera>,
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
) -> impl Responder {
    let lang = request_lang(&req, &query, &config);
    let mut ctx = page_context(lang, &pool);

    match public_helpers::fetch_portfolio(&pool) {
        Ok(items) => {
            ctx.insert("filters", &public_helpers::filter_labels(&items));
            ctx.insert("portfolio", &items);
        }
        Err(e) => {
            log::error!("Failed to fetch portfolio for home page: {}", e);
            ctx.insert("filters", &vec![public_helpers::ALL_FILTER.to_string()]);
            ctx.insert("portfolio", &Vec::<crate::models::PortfolioItem>::new());
        }
    }

    let mut response = render(&tera, "public/index.html", &ctx);
    if query.lang.is_some() {
        remember_lang(&mut response, lang);
    }
    response
}

async fn show_partners_page(
    req: HttpRequest,
    query: web::Query<PageQuery>,
    tera: web::Data<Tera>,
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
) -> impl Responder {
    let lang = request_lang(&req, &query, &config);
    let mut ctx = page_context(lang, &pool);

    match public_helpers::fetch_partners(&pool) {
        Ok(partners) => ctx.insert("partners", &partners),
        Err(e) => {
            log::error!("Failed to fetch partners page: {}", e);
            ctx.insert("partners", &Vec::<crate::models::Partner>::new());
        }
    }

    let mut response = render(&tera, "public/partners.html", &ctx);
    if query.lang.is_some() {
        remember_lang(&mut response, lang);
    }
    response
}

async fn get_portfolio(pool: web::Data<DbPool>) -> impl Responder {
    match public_helpers::fetch_portfolio(&pool) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => {
            log::error!("Failed to fetch portfolio: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

async fn get_partners(pool: web::Data<DbPool>) -> impl Responder {
    match public_helpers::fetch_partners(&pool) {
        Ok(partners) => HttpResponse::Ok().json(partners),
        Err(e) => {
            log::error!("Failed to fetch partners: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

async fn get_current_announcement(pool: web::Data<DbPool>) -> impl Responder {
    // None serializes as null; the client renders nothing for it.
    HttpResponse::Ok().json(public_helpers::current_announcement(&pool))
}

/// Contact form submission. Validation failures return the per-field errors
/// so the client can keep the form contents and show them inline; only a
/// fully valid form inserts a row.
async fn submit_contact(pool: web::Data<DbPool>, form: web::Json<ContactForm>) -> impl Responder {
    let errors = validation_helpers::validate_contact(&form.name, &form.email, &form.message);
    if !errors.is_empty() {
        return HttpResponse::UnprocessableEntity().json(json!({
            "ok": false,
            "errors": errors,
        }));
    }

    match public_helpers::submit_contact_message(&pool, &form.name, &form.email, &form.message) {
        Ok(id) => HttpResponse::Ok().json(json!({ "ok": true, "id": id })),
        Err(e) => {
            log::error!("Failed to store contact message: {}", e);
            HttpResponse::InternalServerError().json(json!({ "ok": false }))
        }
    }
}
