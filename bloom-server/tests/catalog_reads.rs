// 供应商目录读取集成测试

mod common;

use common::*;
use http::StatusCode;

#[tokio::test]
async fn catalog_reads_are_tenant_scoped() {
    let app = spawn_app().await;
    seed(&app.pool).await;

    let (status, body) = app
        .request("GET", &format!("/api/vendors/{VENDOR_ID}/colors"), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let colors = body["data"].as_array().unwrap();
    let ids: Vec<i64> = colors.iter().map(|c| c["id"].as_i64().unwrap()).collect();
    assert!(ids.contains(&COLOR_OWN), "own color visible");
    assert!(ids.contains(&COLOR_SHARED), "shared color visible");
    assert!(
        !ids.contains(&COLOR_FOREIGN),
        "never rows of another non-shared vendor"
    );

    // Vendor-owned rows come before shared rows
    assert_eq!(colors[0]["id"], COLOR_OWN);
}

#[tokio::test]
async fn arrangements_listing_orders_own_before_shared_then_alphabetical() {
    let app = spawn_app().await;
    seed(&app.pool).await;

    let (_, body) = app
        .request("GET", &format!("/api/vendors/{VENDOR_ID}/arrangements"), None)
        .await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Bridal Bouquet",
            "Centerpiece",
            "Ceremony Arch",
            "Shared Garland"
        ]
    );
}

#[tokio::test]
async fn flower_categories_carry_preview_and_count() {
    let app = spawn_app().await;
    seed(&app.pool).await;

    let (_, body) = app
        .request(
            "GET",
            &format!("/api/vendors/{VENDOR_ID}/flower-categories"),
            None,
        )
        .await;
    let categories = body["data"].as_array().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["name"], "Garden Roses");
    assert_eq!(categories[0]["flowerCount"], 1);
    assert_eq!(categories[0]["flowers"][0]["name"], "Juliet Rose");
}

#[tokio::test]
async fn event_types_fall_back_to_default_list() {
    let app = spawn_app().await;
    seed(&app.pool).await;

    // No event types defined yet: fixed fallback list, no ids
    let (_, body) = app
        .request("GET", &format!("/api/vendors/{VENDOR_ID}/event-types"), None)
        .await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries[0]["name"], "General Inquiry");
    assert!(entries[0].get("id").is_none());
    assert!(entries.len() >= 4);

    // After an inquiry, the created type shows up with its id
    create_inquiry(&app, "jane@x.com").await;
    let (_, body) = app
        .request("GET", &format!("/api/vendors/{VENDOR_ID}/event-types"), None)
        .await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "General Inquiry");
    assert!(entries[0]["id"].as_i64().is_some());
}

#[tokio::test]
async fn vendor_lookup_by_slug() {
    let app = spawn_app().await;
    seed(&app.pool).await;

    let (status, body) = app
        .request("GET", "/api/vendors/by-slug?slug=petal-and-stem", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], VENDOR_ID);
    assert_eq!(body["data"]["name"], "Petal & Stem");

    let (status, body) = app
        .request("GET", "/api/vendors/by-slug?slug=unknown", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn catalog_read_for_missing_vendor_is_404() {
    let app = spawn_app().await;
    seed(&app.pool).await;

    let (status, body) = app
        .request("GET", "/api/vendors/777777/colors", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn health_endpoints_respond() {
    let app = spawn_app().await;

    let (status, body) = app.request("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.request("GET", "/health/detailed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
}
