use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;

use super::gemini::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::config::AppConfig;
use crate::error::AppError;

/// 에러 로그에 남길 응답 본문 최대 길이
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Gemini 전송 에러를 세분화된 AppError로 변환
fn classify_transport_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() || error.is_connect() {
        AppError::GeminiTemporaryError
    } else if error.is_decode() {
        AppError::GeminiError(format!("응답 본문을 해석하지 못했습니다: {}", error.without_url()))
    } else {
        AppError::GeminiError(error.without_url().to_string())
    }
}

/// Gemini 응답 상태 코드를 세분화된 AppError로 변환
fn classify_status(status: StatusCode, body: &str) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::GeminiAuthError,
        StatusCode::TOO_MANY_REQUESTS => AppError::GeminiRateLimitError,
        s if s.is_server_error() => AppError::GeminiTemporaryError,
        s => AppError::GeminiError(format!("status {}: {}", s.as_u16(), summarize_error_body(body))),
    }
}

fn summarize_error_body(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(status) => format!("{} ({})", envelope.error.message, status),
            None => envelope.error.message,
        },
        Err(_) => body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}

/// AI 클라이언트 인터페이스
///
/// Gemini API 호출을 추상화하여 테스트에서 Mock 객체로 대체할 수 있습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GeminiClientTrait: Send + Sync {
    /// `models/{model}:generateContent` 한 번 호출 (재시도 없음)
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AppError>;
}

/// Arc로 래핑된 AiClient (Clone 지원)
pub type AiClient = Arc<dyn GeminiClientTrait>;

/// Gemini REST API 클라이언트 구현체
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_base: &str, api_key: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()
            .map_err(|e| AppError::internal(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Self::new(
            &config.gemini_api_base,
            &config.gemini_api_key,
            config.gemini_timeout,
        )
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_base, model)
    }
}

#[async_trait::async_trait]
impl GeminiClientTrait for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AppError> {
        tracing::debug!(
            model,
            prompt_chars = request.prompt_chars(),
            "Calling Gemini generateContent"
        );

        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = classify_status(status, &body);
            tracing::warn!(
                model,
                status = status.as_u16(),
                body = %summarize_error_body(&body),
                "Gemini API returned an error status"
            );
            return Err(error);
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(classify_transport_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_generate_content_endpoint() {
        let client =
            GeminiClient::new("http://localhost:9999/", "key", Duration::from_secs(5)).unwrap();

        assert_eq!(
            client.endpoint("gemini-2.5-flash-image"),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
    }

    #[test]
    fn should_classify_auth_statuses() {
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED, ""),
            AppError::GeminiAuthError
        ));
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, ""),
            AppError::GeminiAuthError
        ));
    }

    #[test]
    fn should_classify_quota_and_server_statuses() {
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, ""),
            AppError::GeminiRateLimitError
        ));
        assert!(matches!(
            classify_status(StatusCode::SERVICE_UNAVAILABLE, ""),
            AppError::GeminiTemporaryError
        ));
    }

    #[test]
    fn should_extract_message_from_error_body() {
        let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;

        let error = classify_status(StatusCode::BAD_REQUEST, body);

        match error {
            AppError::GeminiError(message) => {
                assert!(message.contains("status 400"));
                assert!(message.contains("API key not valid (INVALID_ARGUMENT)"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn should_truncate_non_json_error_body() {
        let body = "x".repeat(1000);

        let summary = summarize_error_body(&body);

        assert_eq!(summary.len(), MAX_ERROR_BODY_CHARS);
    }
}
