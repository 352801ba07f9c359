// 集成测试共用工具：内存数据库 + oneshot 请求

use axum::Router;
use axum::body::Body;
use bloom_server::core::server::build_app;
use bloom_server::core::{Config, ServerState};
use bloom_server::db::DbService;
use bloom_server::services::{ImageStore, LogMailer};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    // Keeps the work dir alive for the test's duration
    pub _work_dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let work_dir = tempfile::tempdir().expect("temp work dir");
    let config = Config::with_overrides(work_dir.path().to_string_lossy().to_string(), 0);

    let db = DbService::new_in_memory().await.expect("in-memory db");
    let pool = db.pool.clone();

    let state = ServerState::new(
        config.clone(),
        db.pool,
        Arc::new(LogMailer::new(config.mail_from.clone())),
        ImageStore::new(config.images_dir()),
    );

    TestApp {
        router: build_app().with_state(state),
        pool,
        _work_dir: work_dir,
    }
}

impl TestApp {
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }

    /// Multipart POST carrying only a `urls` part
    pub async fn post_inspiration_urls(
        &self,
        event_id: i64,
        urls: &[&str],
    ) -> (StatusCode, serde_json::Value) {
        let urls_json = serde_json::to_string(urls).unwrap();
        let boundary = "bloomtestboundary";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"urls\"\r\n\r\n{urls_json}\r\n--{boundary}--\r\n"
        );

        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/events/{event_id}/inspirations"))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }
}

// ── Seed data ───────────────────────────────────────────────────────

pub const VENDOR_ID: i64 = 1;
pub const OTHER_VENDOR_ID: i64 = 2;

pub const ARRANGEMENT_BOUQUET: i64 = 101;
pub const ARRANGEMENT_ARCH: i64 = 102;
pub const ARRANGEMENT_CENTERPIECE: i64 = 103;
pub const ARRANGEMENT_FOREIGN: i64 = 201;
pub const ARRANGEMENT_SHARED: i64 = 301;

pub const COLOR_OWN: i64 = 401;
pub const COLOR_SHARED: i64 = 402;
pub const COLOR_FOREIGN: i64 = 403;

pub const FLOWER_OWN: i64 = 501;
pub const FLOWER_FOREIGN: i64 = 502;
pub const CATEGORY_OWN: i64 = 601;

/// Seed two vendors, a small catalog and a 3-slot default template for
/// vendor 1.
pub async fn seed(pool: &SqlitePool) {
    let now = shared::util::now_millis();

    for (id, name, slug) in [
        (VENDOR_ID, "Petal & Stem", "petal-and-stem"),
        (OTHER_VENDOR_ID, "Thorn Floral", "thorn-floral"),
    ] {
        sqlx::query(
            "INSERT INTO vendor (id, name, slug, email, is_active, created_at, updated_at) VALUES (?, ?, ?, ?, 1, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(slug)
        .bind(format!("{slug}@example.com"))
        .bind(now)
        .bind(now)
        .execute(pool)
        .await
        .unwrap();
    }

    // Arrangements: three owned by vendor 1, one private to vendor 2, one shared
    for (id, vendor, name, shared_flag) in [
        (ARRANGEMENT_BOUQUET, VENDOR_ID, "Bridal Bouquet", 0),
        (ARRANGEMENT_ARCH, VENDOR_ID, "Ceremony Arch", 0),
        (ARRANGEMENT_CENTERPIECE, VENDOR_ID, "Centerpiece", 0),
        (ARRANGEMENT_FOREIGN, OTHER_VENDOR_ID, "Foreign Garland", 0),
        (ARRANGEMENT_SHARED, OTHER_VENDOR_ID, "Shared Garland", 1),
    ] {
        sqlx::query(
            "INSERT INTO arrangement (id, vendor_id, name, price, is_shared, is_active, created_at) VALUES (?, ?, ?, 100.0, ?, 1, ?)",
        )
        .bind(id)
        .bind(vendor)
        .bind(name)
        .bind(shared_flag)
        .bind(now)
        .execute(pool)
        .await
        .unwrap();
    }

    // Colors
    for (id, vendor, name, hex, shared_flag) in [
        (COLOR_OWN, VENDOR_ID, "Blush", "#F4C2C2", 0),
        (COLOR_SHARED, OTHER_VENDOR_ID, "Ivory", "#FFFFF0", 1),
        (COLOR_FOREIGN, OTHER_VENDOR_ID, "Obsidian", "#0B0B0B", 0),
    ] {
        sqlx::query(
            "INSERT INTO color (id, vendor_id, name, hex, is_shared, is_active, created_at) VALUES (?, ?, ?, ?, ?, 1, ?)",
        )
        .bind(id)
        .bind(vendor)
        .bind(name)
        .bind(hex)
        .bind(shared_flag)
        .bind(now)
        .execute(pool)
        .await
        .unwrap();
    }

    // Flower category + flowers
    sqlx::query(
        "INSERT INTO flower_category (id, vendor_id, name, is_shared, is_active, created_at) VALUES (?, ?, 'Garden Roses', 0, 1, ?)",
    )
    .bind(CATEGORY_OWN)
    .bind(VENDOR_ID)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();

    for (id, vendor, name) in [
        (FLOWER_OWN, VENDOR_ID, "Juliet Rose"),
        (FLOWER_FOREIGN, OTHER_VENDOR_ID, "Black Dahlia"),
    ] {
        sqlx::query(
            "INSERT INTO flower (id, vendor_id, category_id, name, is_shared, is_active, created_at) VALUES (?, ?, ?, ?, 0, 1, ?)",
        )
        .bind(id)
        .bind(vendor)
        .bind((vendor == VENDOR_ID).then_some(CATEGORY_OWN))
        .bind(name)
        .bind(now)
        .execute(pool)
        .await
        .unwrap();
    }

    // Default template for vendor 1 with three slots
    sqlx::query(
        "INSERT INTO design_template (id, vendor_id, name, is_shared, is_default, created_at) VALUES (701, ?, 'House Default', 0, 1, ?)",
    )
    .bind(VENDOR_ID)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();

    for (id, section, slot_no, arrangement) in [
        (711, "Personal", 1, ARRANGEMENT_BOUQUET),
        (712, "Ceremony", 1, ARRANGEMENT_ARCH),
        (713, "Reception", 1, ARRANGEMENT_CENTERPIECE),
    ] {
        sqlx::query(
            "INSERT INTO design_template_slot (id, template_id, section, slot_no, arrangement_id, quantity) VALUES (?, 701, ?, ?, ?, 1)",
        )
        .bind(id)
        .bind(section)
        .bind(slot_no)
        .bind(arrangement)
        .execute(pool)
        .await
        .unwrap();
    }
}

/// Create an inquiry through the API and return the new event id
pub async fn create_inquiry(app: &TestApp, email: &str) -> i64 {
    let (status, body) = app
        .request(
            "POST",
            "/api/inquiries/create",
            Some(serde_json::json!({
                "brideName": "Jane",
                "email": email,
                "phone": "5551234567",
                "eventDate": "2026-06-01",
                "vendorId": VENDOR_ID,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "inquiry failed: {body}");
    body["data"]["inquiryId"].as_i64().expect("inquiry id")
}
