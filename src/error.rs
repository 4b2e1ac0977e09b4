use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::ValidationErrors;

use crate::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("잘못된 요청 형식입니다: {0}")]
    JsonParseFailed(String),

    #[error("존재하지 않는 페르소나입니다: {0}")]
    PersonaNotFound(String),

    #[error("Gemini API 인증에 실패했습니다.")]
    GeminiAuthError,

    #[error("Gemini API 요청 한도를 초과했습니다.")]
    GeminiRateLimitError,

    #[error("Gemini API가 일시적으로 응답하지 않습니다.")]
    GeminiTemporaryError,

    #[error("Gemini API 에러: {0}")]
    GeminiError(String),

    #[error("이미지를 생성하지 못했습니다: {0}")]
    ImageNotGenerated(String),

    #[error("AI 응답을 해석하지 못했습니다: {0}")]
    AiResponseParseError(String),

    #[error("서버 내부 에러: {0}")]
    Internal(String),
}

impl AppError {
    /// 에러 코드 반환
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) | AppError::JsonParseFailed(_) => "COMMON400",
            AppError::PersonaNotFound(_) => "AI_002",
            AppError::GeminiRateLimitError
            | AppError::GeminiTemporaryError
            | AppError::GeminiError(_) => "AI_003",
            AppError::ImageNotGenerated(_) => "AI_004",
            AppError::AiResponseParseError(_) => "AI_005",
            AppError::GeminiAuthError | AppError::Internal(_) => "COMMON500",
        }
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::JsonParseFailed(_)
            | AppError::PersonaNotFound(_) => StatusCode::BAD_REQUEST,
            AppError::GeminiRateLimitError => StatusCode::TOO_MANY_REQUESTS,
            AppError::GeminiTemporaryError => StatusCode::SERVICE_UNAVAILABLE,
            AppError::GeminiError(_)
            | AppError::ImageNotGenerated(_)
            | AppError::AiResponseParseError(_) => StatusCode::BAD_GATEWAY,
            AppError::GeminiAuthError | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 클라이언트에 노출할 메시지
    ///
    /// 서버 설정 문제(인증, 내부 에러)는 상세 내용을 숨깁니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::GeminiAuthError | AppError::Internal(_) => {
                "서버 에러, 관리자에게 문의 바랍니다.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        if status.is_server_error() {
            tracing::error!(code, error = %self, "Request failed");
        } else {
            tracing::warn!(code, error = %self, "Request rejected");
        }

        let body = ErrorResponse::new(code, self.client_message());
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} 값이 올바르지 않습니다", field))
                })
            })
            .collect::<Vec<_>>()
            .join(", ");
        AppError::ValidationError(message)
    }
}
