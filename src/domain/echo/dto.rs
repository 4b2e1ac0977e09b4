use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// 에코 응답 메시지
pub const ECHO_MESSAGE: &str = "AI 서버가 데이터를 잘 받았습니다!";

/// 임의의 JSON 객체 (검증 없음)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct EchoPayload(pub Map<String, Value>);

/// 에코 응답 DTO (공통 응답 형식으로 감싸지 않음)
#[derive(Debug, Serialize, ToSchema)]
pub struct EchoResponse {
    #[schema(example = "success")]
    pub status: &'static str,

    #[schema(example = "AI 서버가 데이터를 잘 받았습니다!")]
    pub message: &'static str,

    /// 받은 데이터 그대로
    pub received_data: EchoPayload,
}

impl EchoResponse {
    pub fn new(received_data: EchoPayload) -> Self {
        Self {
            status: "success",
            message: ECHO_MESSAGE,
            received_data,
        }
    }
}
