use std::sync::OnceLock;
use std::time::Instant;

use super::dto::HealthStatus;

/// 서버 시작 시간 (전역)
static START_TIME: OnceLock<Instant> = OnceLock::new();

/// 서버 시작 시간 초기화
///
/// main 함수에서 서버 시작 시 호출해야 합니다.
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// 서버 가동 시간(초) 반환
pub fn get_uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

/// 프로세스가 요청을 받을 수 있으면 항상 UP
pub fn check_health() -> HealthStatus {
    HealthStatus {
        status: "UP",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: get_uptime_secs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_start_time_should_be_idempotent() {
        init_start_time();
        let first = START_TIME.get().copied();
        init_start_time();

        assert_eq!(START_TIME.get().copied(), first);
    }

    #[test]
    fn check_health_should_report_up_with_package_version() {
        init_start_time();

        let status = check_health();

        assert_eq!(status.status, "UP");
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
    }
}
