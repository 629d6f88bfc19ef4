//! Handlers for scanner arbitration endpoints and the device WebSocket.
//!
//! Staff endpoints start/poll/cancel scan sessions; the reader
//! firmware connects over `/ws/scanner` and reports its online state
//! and detected card UIDs. A UID report is only accepted when it
//! carries the token of the session currently awaiting a card, so a
//! stale read can never be attributed to a newer scan request. The
//! token reaches the device over the same socket: starting a session
//! publishes it on the event bus and the socket task forwards it.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;
use lingap_core::error::CoreError;
use lingap_db::models::scanner::{ScanSession, ScannerStatus, SCAN_STATE_AWAITING};
use lingap_db::repositories::{ScanSessionRepo, ScannerRepo};
use lingap_events::PlatformEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Staff REST handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/scanner/sessions
///
/// Start a scan session. Fails when the device is offline; otherwise
/// cancels any in-flight session, issues a fresh token, points the
/// device at it, and announces the token so the device socket can
/// forward it to the reader.
pub async fn start_session(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
) -> AppResult<(StatusCode, Json<DataResponse<ScanSession>>)> {
    let scanner = ScannerRepo::get(&state.pool).await?;
    if !scanner.online {
        return Err(AppError::Core(CoreError::Validation(
            "RFID scanner is offline. Check the device and try again".to_string(),
        )));
    }

    let token = Uuid::new_v4();
    let session = ScanSessionRepo::start(&state.pool, token, staff.user_id).await?;

    state.event_bus.publish(
        PlatformEvent::new("scan.requested")
            .with_actor(staff.user_id)
            .with_payload(serde_json::json!({ "session_token": token })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// GET /api/v1/scanner/sessions/current
///
/// Poll the in-flight session, if any. The bind screen polls this
/// until the state flips to `detected`.
pub async fn current_session(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<Option<ScanSession>>>> {
    let session = ScanSessionRepo::current(&state.pool).await?;
    Ok(Json(DataResponse { data: session }))
}

/// DELETE /api/v1/scanner/sessions/current
///
/// Cancel the in-flight session (operator backed out). Returns 204.
pub async fn cancel_session(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<StatusCode> {
    ScanSessionRepo::cancel_current(&state.pool).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/scanner/status
///
/// The device's live state: online flag, last UID, current session.
pub async fn get_status(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<ScannerStatus>>> {
    let status = ScannerRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: status }))
}

// ---------------------------------------------------------------------------
// Device WebSocket
// ---------------------------------------------------------------------------

/// Messages sent by the reader firmware over the scanner WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum DeviceMessage {
    /// Periodic device health report.
    ScannerStatus { online: bool },
    /// A card was read while serving a scan session.
    UidDetected { uid: String, session_token: Uuid },
}

/// Messages pushed to the reader firmware over the scanner WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ServerMessage {
    /// A staff member requested a scan; tag the next read with this
    /// token.
    ScanRequest { session_token: Uuid },
}

/// HTTP handler that upgrades to a WebSocket for the reader firmware.
///
/// The device connects without credentials and only pushes its own
/// state. TODO: require a device token once the firmware supports it.
pub async fn scanner_ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_scanner_socket(socket, state))
}

/// Process a scanner WebSocket connection.
///
/// The device is marked online on connect and offline when the socket
/// closes, so a dropped cable surfaces as offline without a heartbeat.
/// Session tokens flow device-ward: each `scan.requested` event on the
/// bus is forwarded as a [`ServerMessage::ScanRequest`], and a device
/// reconnecting mid-session is told the token it missed.
async fn handle_scanner_socket(socket: WebSocket, state: AppState) {
    let conn_id = Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, "Scanner WebSocket connected");

    if let Err(e) = set_device_online(&state, true).await {
        tracing::error!(conn_id = %conn_id, error = %e, "Failed to mark scanner online");
    }

    let (mut sink, mut stream) = socket.split();
    let mut events = state.event_bus.subscribe();

    match ScanSessionRepo::current(&state.pool).await {
        Ok(Some(session)) if session.state == SCAN_STATE_AWAITING => {
            if let Err(e) = push_scan_request(&mut sink, session.token).await {
                tracing::warn!(conn_id = %conn_id, error = %e, "Failed to push scan request");
            }
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!(conn_id = %conn_id, error = %e, "Failed to read current scan session");
        }
    }

    loop {
        tokio::select! {
            incoming = stream.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    if let Err(e) = process_device_message(&text, &state).await {
                        tracing::warn!(
                            conn_id = %conn_id,
                            error = %e,
                            "Failed to process scanner message"
                        );
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {} // ignore binary, ping, pong
                Some(Err(e)) => {
                    tracing::debug!(conn_id = %conn_id, error = %e, "Scanner WS receive error");
                    break;
                }
            },
            event = events.recv() => match event {
                Ok(event) if event.event_type == "scan.requested" => {
                    let token = event
                        .payload
                        .get("session_token")
                        .and_then(|v| v.as_str())
                        .and_then(|s| s.parse().ok());
                    if let Some(token) = token {
                        if let Err(e) = push_scan_request(&mut sink, token).await {
                            tracing::warn!(
                                conn_id = %conn_id,
                                error = %e,
                                "Failed to push scan request"
                            );
                            break;
                        }
                    }
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(conn_id = %conn_id, skipped, "Scanner WS lagged on event bus");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
        }
    }

    if let Err(e) = set_device_online(&state, false).await {
        tracing::error!(conn_id = %conn_id, error = %e, "Failed to mark scanner offline");
    }

    tracing::info!(conn_id = %conn_id, "Scanner WebSocket disconnected");
}

/// Serialize and send a scan request to the device.
async fn push_scan_request(
    sink: &mut SplitSink<WebSocket, Message>,
    token: Uuid,
) -> Result<(), axum::Error> {
    let msg = serde_json::to_string(&ServerMessage::ScanRequest {
        session_token: token,
    })
    .map_err(axum::Error::new)?;
    sink.send(Message::Text(msg.into())).await
}

/// Parse and process a single message from the device.
async fn process_device_message(text: &str, state: &AppState) -> Result<(), AppError> {
    let msg: DeviceMessage = serde_json::from_str(text)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON: {e}")))?;

    match msg {
        DeviceMessage::ScannerStatus { online } => {
            set_device_online(state, online).await?;
        }
        DeviceMessage::UidDetected { uid, session_token } => {
            // Only the session currently awaiting a card accepts the
            // report; a stale or unknown token is discarded.
            let accepted =
                ScanSessionRepo::record_detection(&state.pool, session_token, &uid).await?;
            match accepted {
                Some(session) => {
                    ScannerRepo::record_uid(&state.pool, &uid, session_token).await?;
                    tracing::info!(
                        session_id = session.id,
                        uid = %uid,
                        "Card detected for scan session"
                    );
                }
                None => {
                    tracing::debug!(
                        token = %session_token,
                        uid = %uid,
                        "Discarded UID report for stale scan session"
                    );
                }
            }
        }
    }

    Ok(())
}

/// Flip the device online flag and broadcast the change.
async fn set_device_online(state: &AppState, online: bool) -> Result<(), sqlx::Error> {
    ScannerRepo::set_online(&state.pool, online).await?;
    let event_type = if online {
        "scanner.online"
    } else {
        "scanner.offline"
    };
    state.event_bus.publish(PlatformEvent::new(event_type));
    Ok(())
}
