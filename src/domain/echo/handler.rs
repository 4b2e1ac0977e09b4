use axum::{extract::rejection::JsonRejection, Json};

use super::dto::{EchoPayload, EchoResponse};
use crate::error::AppError;
use crate::response::ErrorResponse;

/// 연결 확인용 에코 API
///
/// 메인 백엔드가 보낸 JSON 객체를 그대로 돌려줍니다.
#[utoipa::path(
    post,
    path = "/ai/test",
    tag = "Echo",
    request_body = EchoPayload,
    responses(
        (status = 200, description = "수신 성공", body = EchoResponse),
        (status = 400, description = "JSON 객체가 아닌 요청", body = ErrorResponse)
    )
)]
pub async fn echo(
    payload: Result<Json<EchoPayload>, JsonRejection>,
) -> Result<Json<EchoResponse>, AppError> {
    let Json(payload) = payload.map_err(AppError::from)?;

    let rendered = serde_json::to_string(&payload).unwrap_or_default();
    tracing::info!(
        fields = payload.0.len(),
        payload = %rendered,
        "Echo request received"
    );

    Ok(Json(EchoResponse::new(payload)))
}
