use serde::Serialize;
use utoipa::ToSchema;

/// 헬스체크 응답
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// 서버 상태
    #[schema(example = "UP")]
    pub status: &'static str,
    /// 서버 버전
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    /// 서버 가동 시간 (초)
    #[schema(example = 3600)]
    pub uptime_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_should_serialize_with_camel_case() {
        let status = HealthStatus {
            status: "UP",
            version: "0.1.0",
            uptime_secs: 3600,
        };

        let json = serde_json::to_string(&status).unwrap();

        assert!(json.contains("\"status\":\"UP\""));
        assert!(json.contains("\"uptimeSecs\":3600"));
    }
}
