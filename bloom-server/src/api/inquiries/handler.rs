//! Inquiry API Handlers
//!
//! The intake pipeline: one POST atomically-enough produces Client,
//! EventType, Event, template slot copies, the vendor↔client link and a
//! Chat record, then fires two best-effort notification emails. Writes
//! precede emails; a failed email degrades the response flags, never the
//! HTTP status.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::{
    chat, client, design_template, event, event_type, vendor, vendor_client,
};
use crate::services::mailer::{client_welcome_email, vendor_alert_email};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::ClientCreate;
use shared::request::{InquiryCreate, InquiryCreated, validation_error};
use shared::util::format_inquiry_no;

const DEFAULT_EVENT_TYPE: &str = "General Inquiry";

/// POST /api/inquiries/create - 创建询价
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InquiryCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<InquiryCreated>>)> {
    // 1. Structural validation, per-field messages in details
    payload.validate().map_err(|e| validation_error(&e))?;

    // 2. Vendor must exist
    let vendor = vendor::find_by_id(&state.pool, payload.vendor_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::VendorNotFound))?;

    // 3. Find-or-create client by email
    let client = client::find_or_create_by_email(
        &state.pool,
        ClientCreate {
            name: payload.bride_name.clone(),
            email: payload.email.clone(),
            phone: Some(payload.phone.clone()),
        },
    )
    .await?;

    // 4. Find-or-create event type
    let type_name = payload
        .event_type
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(DEFAULT_EVENT_TYPE);
    let event_type = event_type::find_or_create(&state.pool, vendor.id, type_name).await?;

    // 5. Create the inquiry event
    let event = event::create(
        &state.pool,
        event::EventCreate {
            client_id: client.id,
            vendor_id: vendor.id,
            event_type_id: Some(event_type.id),
            wedding_date: payload.event_date.clone(),
            notes: payload.message.clone(),
        },
    )
    .await?;

    // 6. Copy default template slots; a vendor without a template is a
    //    soft no-op (warn only), not a failed inquiry
    let design_slots_created =
        match design_template::find_default_for_vendor(&state.pool, vendor.id).await? {
            Some(template) => {
                design_template::copy_into_event(&state.pool, template.id, event.id).await?
            }
            None => {
                tracing::warn!(
                    vendor_id = vendor.id,
                    event_id = event.id,
                    "No default design template for vendor, skipping slot copy"
                );
                0
            }
        };

    // 7. Link vendor↔client (idempotent) and open the conversation
    vendor_client::link(&state.pool, vendor.id, client.id).await?;
    chat::create(&state.pool, event.id, vendor.id, client.id).await?;

    let inquiry_no = format_inquiry_no(event.inquiry_no);
    let login_url = format!(
        "{}/welcome/{}?event={}",
        state.config.base_url.trim_end_matches('/'),
        vendor.slug,
        event.id
    );

    // 8. Best-effort notifications, after all writes
    let client_email_sent = match state
        .mailer
        .send(client_welcome_email(
            &client.email,
            &vendor.name,
            &login_url,
            &inquiry_no,
        ))
        .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(event_id = event.id, error = %e, "Client welcome email failed");
            false
        }
    };
    let vendor_email_sent = match state
        .mailer
        .send(vendor_alert_email(
            &vendor.email,
            &payload.bride_name,
            &inquiry_no,
            payload.event_date.as_deref(),
        ))
        .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(event_id = event.id, error = %e, "Vendor alert email failed");
            false
        }
    };

    let message = if client_email_sent && vendor_email_sent {
        "Inquiry created"
    } else {
        "Inquiry created (notification delivery incomplete)"
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            message,
            InquiryCreated {
                inquiry_id: event.id,
                inquiry_no,
                login_url,
                design_slots_created,
                client_email_sent,
                vendor_email_sent,
            },
        )),
    ))
}
