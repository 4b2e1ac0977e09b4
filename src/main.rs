use std::sync::Arc;

use diary_ai_server::{
    config::AppConfig,
    create_router,
    domain::health::init_start_time,
    shutdown::shutdown_signal,
    utils::init_logging,
    AiService, AppState, GeminiClient,
};
use metrics_exporter_prometheus::PrometheusBuilder;

#[tokio::main]
async fn main() {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화 (guard는 main 종료까지 유지)
    let _log_guard = init_logging();
    init_start_time();

    // 3. 설정 로드 (API 키가 없으면 기동 실패)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // 4. Gemini 클라이언트 및 서비스 구성
    let client = match GeminiClient::from_config(&config) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(error = %err, "Failed to build Gemini client");
            std::process::exit(1);
        }
    };
    let ai_service = AiService::new(
        Arc::new(client),
        config.gemini_image_model.clone(),
        config.gemini_text_model.clone(),
    );

    // 5. 메트릭 레코더 설치
    let metrics = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::warn!(error = %err, "Prometheus recorder not installed, /metrics disabled");
            None
        }
    };

    // 6. 라우터 설정
    let app = create_router(AppState::new(ai_service), metrics);

    // 7. 서버 실행
    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, addr = %addr, "Failed to bind address");
            std::process::exit(1);
        }
    };

    tracing::info!(
        addr = %addr,
        image_model = %config.gemini_image_model,
        text_model = %config.gemini_text_model,
        timeout_secs = config.gemini_timeout.as_secs(),
        "Server listening"
    );
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %err, "Server error");
        std::process::exit(1);
    }

    tracing::info!("Server shutdown complete");
}
