use actix_web::{test, web, App};
use r2d2_sqlite::SqliteConnectionManager;
use sitebase_backend::models::db_operations::portfolio_db_operations;
use sitebase_backend::routes::public;
use sitebase_backend::setup::db_setup;
use sitebase_backend::DbPool;
use tempfile::TempDir;

// In-memory pools give every pooled connection its own private database, so
// the API tests run against a real file in a temporary directory.
fn test_pool(dir: &TempDir) -> DbPool {
    let db_path = dir.path().join("site.db");
    let mut conn = rusqlite::Connection::open(&db_path).unwrap();
    db_setup::setup_site_db(&mut conn).unwrap();

    let manager = SqliteConnectionManager::file(&db_path);
    r2d2::Pool::new(manager).unwrap()
}

#[actix_web::test]
async fn health_endpoint_reports_active() {
    let dir = TempDir::new().unwrap();
    let pool = test_pool(&dir);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool))
            .configure(public::config_api),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request())
        .await;
    assert!(resp.status().is_success());
    assert_eq!(test::read_body(resp).await, "active");
}

#[actix_web::test]
async fn valid_contact_submission_stores_one_message() {
    let dir = TempDir::new().unwrap();
    let pool = test_pool(&dir);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(public::config_api),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(serde_json::json!({
            "name": "Jordan",
            "email": "jordan@example.com",
            "message": "I would like a quote for a dashboard project."
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], true);
    assert!(body["id"].is_string());

    let conn = pool.get().unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM contact_messages", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(count, 1);
}

#[actix_web::test]
async fn invalid_contact_submission_is_rejected_with_field_errors() {
    let dir = TempDir::new().unwrap();
    let pool = test_pool(&dir);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(public::config_api),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(serde_json::json!({
            "name": "J",
            "email": "not-an-email",
            "message": "short"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], false);
    assert!(body["errors"]["name"].is_string());
    assert!(body["errors"]["email"].is_string());
    assert!(body["errors"]["message"].is_string());

    let conn = pool.get().unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM contact_messages", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(count, 0);
}

#[actix_web::test]
async fn portfolio_endpoint_returns_stored_items_as_json() {
    let dir = TempDir::new().unwrap();
    let pool = test_pool(&dir);

    {
        let conn = pool.get().unwrap();
        portfolio_db_operations::create_item(
            &conn,
            "Fleet Tracker",
            "Realtime vehicle tracking",
            "/static/img/fleet.png",
            "https://example.com/fleet",
            &["IoT".to_string(), "Dashboard".to_string()],
        )
        .unwrap();
    }

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool))
            .configure(public::config_api),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/portfolio").to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(|a| a.len()), Some(1));
    assert_eq!(body[0]["title"], "Fleet Tracker");
    assert_eq!(body[0]["tags"], serde_json::json!(["IoT", "Dashboard"]));
}
