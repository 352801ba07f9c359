// 询价创建流程集成测试

mod common;

use common::*;
use http::StatusCode;

#[tokio::test]
async fn inquiry_creates_client_event_slots_link_and_chat() {
    let app = spawn_app().await;
    seed(&app.pool).await;

    let (status, body) = app
        .request(
            "POST",
            "/api/inquiries/create",
            Some(serde_json::json!({
                "brideName": "Jane",
                "email": "jane@x.com",
                "phone": "5551234567",
                "eventDate": "2026-06-01",
                "vendorId": VENDOR_ID,
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], 0);
    let data = &body["data"];
    assert_eq!(data["designSlotsCreated"], 3);
    assert_eq!(data["inquiryNo"], "INQ-00001");
    assert!(
        data["loginUrl"]
            .as_str()
            .unwrap()
            .contains("/welcome/petal-and-stem?event=")
    );
    // LogMailer always succeeds
    assert_eq!(data["clientEmailSent"], true);
    assert_eq!(data["vendorEmailSent"], true);

    let event_id = data["inquiryId"].as_i64().unwrap();

    // Exactly one client and one event exist
    let clients: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM client")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(clients, 1);
    let events: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM event")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(events, 1);

    // One chat and one vendor-client link
    let chats: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chat WHERE event_id = ?")
        .bind(event_id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(chats, 1);
    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vendor_client WHERE vendor_id = ?")
        .bind(VENDOR_ID)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(links, 1);

    // Follow-up GET returns the 3 copied slots grouped by section
    let (status, body) = app
        .request("GET", &format!("/api/events/{event_id}/arrangements"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["personal"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["ceremony"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["reception"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["suggestion"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn duplicate_email_reuses_existing_client() {
    let app = spawn_app().await;
    seed(&app.pool).await;

    create_inquiry(&app, "jane@x.com").await;
    create_inquiry(&app, "jane@x.com").await;

    let clients: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM client WHERE email = 'jane@x.com'")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(clients, 1, "no duplicate client rows for one email");

    let events: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM event")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(events, 2);

    // The vendor-client link is upserted idempotently
    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vendor_client")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(links, 1);
}

#[tokio::test]
async fn inquiry_numbers_are_sequential_per_vendor() {
    let app = spawn_app().await;
    seed(&app.pool).await;

    create_inquiry(&app, "a@x.com").await;
    let (_, body) = app
        .request(
            "POST",
            "/api/inquiries/create",
            Some(serde_json::json!({
                "brideName": "Mia",
                "email": "b@x.com",
                "phone": "5550000000",
                "vendorId": VENDOR_ID,
            })),
        )
        .await;
    assert_eq!(body["data"]["inquiryNo"], "INQ-00002");
}

#[tokio::test]
async fn inquiry_missing_vendor_is_404() {
    let app = spawn_app().await;
    seed(&app.pool).await;

    let (status, body) = app
        .request(
            "POST",
            "/api/inquiries/create",
            Some(serde_json::json!({
                "brideName": "Jane",
                "email": "jane@x.com",
                "phone": "5551234567",
                "vendorId": 99999,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1001);
    assert_eq!(body["message"], "Vendor not found");
}

#[tokio::test]
async fn inquiry_invalid_payload_reports_fields() {
    let app = spawn_app().await;
    seed(&app.pool).await;

    let (status, body) = app
        .request(
            "POST",
            "/api/inquiries/create",
            Some(serde_json::json!({
                "brideName": "",
                "email": "not-an-email",
                "phone": "12",
                "vendorId": VENDOR_ID,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    let details = body["details"].as_object().unwrap();
    assert!(details.contains_key("bride_name"));
    assert!(details.contains_key("email"));
    assert!(details.contains_key("phone"));
}

#[tokio::test]
async fn inquiry_without_template_soft_noops_slot_copy() {
    let app = spawn_app().await;
    seed(&app.pool).await;

    // Vendor 2 has no default template
    let (status, body) = app
        .request(
            "POST",
            "/api/inquiries/create",
            Some(serde_json::json!({
                "brideName": "Ada",
                "email": "ada@x.com",
                "phone": "5559999999",
                "vendorId": OTHER_VENDOR_ID,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["designSlotsCreated"], 0);
}

#[tokio::test]
async fn event_detail_is_joined_for_wizard_resume() {
    let app = spawn_app().await;
    seed(&app.pool).await;
    let event_id = create_inquiry(&app, "jane@x.com").await;

    let (status, body) = app
        .request("GET", &format!("/api/events/{event_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["clientName"], "Jane");
    assert_eq!(body["data"]["vendorName"], "Petal & Stem");
    assert_eq!(body["data"]["eventTypeName"], "General Inquiry");
    assert_eq!(body["data"]["status"], "Inquiry");
}
