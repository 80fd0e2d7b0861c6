use actix_cors::Cors;
use actix_session::{storage::CookieSessionStore, SessionExt, SessionMiddleware};
use actix_web::{
    cookie::Key,
    middleware::{DefaultHeaders, Logger},
    web, App, HttpServer,
};
use clap::Parser;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rand::prelude::StdRng;
use sitebase_backend::{
    config::Config,
    middleware::{admin_guard, ip_guard},
    routes,
};
use std::convert::TryFrom;
use std::fs;
use std::path::PathBuf;
use tera::Tera;

#[derive(Parser, Debug)]
#[command(name = "sitebase_server", author, version, about = "Starts the SiteBase web server.")]
struct Cli {
    /// Path to the .env configuration file.
    #[arg(long, required = true, value_name = "FILE")]
    env_file: PathBuf,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env(&cli.env_file)
        .expect("FATAL: Failed to load or parse configuration.");

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.log_level));

    let tera = Tera::new("templates/**/*.html").expect("Tera initialization failed");

    fs::create_dir_all(&config.database_path).expect("Failed to create database directory");

    let manager = SqliteConnectionManager::file(config.site_db_path());
    let pool = Pool::builder()
        .build(manager)
        .expect("FATAL: Failed to create SQLite connection pool.");

    let session_key_bytes = hex::decode(&config.session_secret_key)
        .expect("FATAL: SESSION_SECRET_KEY in .env is not a valid hex string.");
    let session_key = Key::try_from(session_key_bytes.as_slice())
        .expect("FATAL: The decoded SESSION_SECRET_KEY is not long enough (minimum 64 bytes required).");

    let server_address = format!("{}:{}", config.web.host, config.web.port);
    println!("🚀 Server starting at http://{}", server_address);

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                .cookie_secure(config.use_secure_cookies)
                .cookie_http_only(true)
                .cookie_same_site(actix_web::cookie::SameSite::Lax)
                .build();

        let cors = {
            let allowed_origins_str = &config.allowed_origins;
            if allowed_origins_str.trim() == "*" {
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600)
            } else {
                let mut cors = Cors::default();
                let origins: Vec<&str> = allowed_origins_str
                    .split(',')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .collect();
                for origin in origins {
                    cors = cors.allowed_origin(origin);
                }
                cors.allowed_methods(vec!["GET", "POST"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600)
            }
        };

        let admin_url_prefix = config.admin_url_prefix.clone();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-XSS-Protection", "1; mode=block")),
            )
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::public::config_api)
            .configure(routes::public::config_pages)
            .service(actix_files::Files::new("/static", "./static"))
            // Session management applies to the admin scope only; the public
            // pages carry no server-side state.
            .service(
                web::scope("/management")
                    .wrap(session_mw)
                    .service(
                        web::scope(&admin_url_prefix)
                            .wrap(
                                actix_csrf::CsrfMiddleware::<StdRng>::new()
                                    .set_cookie(
                                        actix_web::http::Method::GET,
                                        format!("/management/{}/login", admin_url_prefix),
                                    )
                                    .set_cookie(
                                        actix_web::http::Method::GET,
                                        format!("/management/{}/dashboard", admin_url_prefix),
                                    ),
                            )
                            .guard(actix_web::guard::fn_guard(ip_guard))
                            .configure(routes::admin::config_login)
                            .service(
                                web::scope("")
                                    .guard(actix_web::guard::fn_guard(|ctx| {
                                        admin_guard(&ctx.get_session())
                                    }))
                                    .configure(routes::admin::config_dashboard),
                            )
                            // Anything the session guard rejected falls
                            // through here and bounces to the login page.
                            .default_service(
                                web::route().to(routes::admin::redirect_to_login),
                            ),
                    ),
            )
    })
    .bind(server_address)?
    .run()
    .await
}
