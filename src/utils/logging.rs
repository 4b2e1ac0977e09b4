//! 로깅 초기화 모듈
//!
//! stdout과 일별 로그 파일에 JSON 형식의 구조화된 로그를 출력합니다.

use time::format_description::well_known::Rfc3339;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,diary_ai_server=debug,tower_http=info";

/// 로깅 시스템을 초기화합니다.
///
/// 로그 레벨은 `RUST_LOG`로, 파일 위치는 `LOG_DIR`(기본값 `logs`)로 조정합니다.
/// 파일명 형식: `diary-ai-server.log.YYYY-MM-DD`
///
/// 반환된 `WorkerGuard`는 main이 끝날 때까지 유지해야 버퍼링된 로그가 유실되지 않습니다.
pub fn init_logging() -> WorkerGuard {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

    let file_appender = rolling::daily(&log_dir, "diary-ai-server.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stdout_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::new(Rfc3339))
        .with_current_span(true);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::new(Rfc3339))
        .with_current_span(true)
        .with_ansi(false)
        .with_writer(non_blocking);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
    {
        // 테스트 등에서 이미 초기화된 경우
        eprintln!("tracing already initialized: {}", err);
    }

    guard
}
