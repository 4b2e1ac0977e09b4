pub mod config;
pub mod domain;
pub mod error;
pub mod global;
pub mod response;
pub mod shutdown;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use domain::ai::{AiClient, AiService, GeminiClient, GeminiClientTrait};
use global::request_tracing;

/// 요청 전체 타임아웃 (일기 분석은 조언과 이미지를 함께 기다립니다)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(150);

/// 테스트 라우터가 사용하는 모델 이름
pub const TEST_IMAGE_MODEL: &str = "test-image-model";
pub const TEST_TEXT_MODEL: &str = "test-text-model";

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::echo::handler::echo,
        domain::ai::handler::generate_image,
        domain::ai::handler::generate_advice,
        domain::ai::handler::analyze_diary,
        domain::health::handler::health_check,
    ),
    components(
        schemas(
            domain::echo::dto::EchoPayload,
            domain::echo::dto::EchoResponse,
            domain::ai::dto::DiaryImageRequest,
            domain::ai::dto::DiaryImageResponse,
            domain::ai::dto::AdviceRequest,
            domain::ai::dto::AdviceResponse,
            domain::ai::dto::DiaryAnalysisRequest,
            domain::ai::dto::DiaryAnalysisResponse,
            domain::ai::model::Persona,
            domain::ai::model::FoodRecommendation,
            domain::health::dto::HealthStatus,
            response::BaseResponse<domain::ai::dto::DiaryImageResponse>,
            response::BaseResponse<domain::ai::dto::AdviceResponse>,
            response::ErrorResponse,
        )
    ),
    tags(
        (name = "Echo", description = "연결 확인 API"),
        (name = "AI", description = "그림일기 이미지 및 감정 조언 API"),
        (name = "Health", description = "헬스체크 API")
    )
)]
pub struct ApiDoc;

/// 핸들러가 공유하는 상태
#[derive(Clone)]
pub struct AppState {
    pub ai_service: Arc<AiService>,
}

impl AppState {
    pub fn new(ai_service: AiService) -> Self {
        Self {
            ai_service: Arc::new(ai_service),
        }
    }
}

/// 애플리케이션 라우터 생성
///
/// `metrics`가 주어지면 `/metrics`에서 Prometheus 포맷으로 노출합니다.
pub fn create_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(domain::health::health_check))
        .route("/ai/test", post(domain::echo::echo))
        .route("/api/ai/image", post(domain::ai::handler::generate_image))
        .route("/api/ai/advice", post(domain::ai::handler::generate_advice))
        .route("/api/ai/diary", post(domain::ai::handler::analyze_diary));

    if let Some(handle) = metrics {
        router = router.route("/metrics", get(move || std::future::ready(handle.render())));
    }

    router
        .layer(middleware::from_fn(request_tracing))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 테스트용 라우터 생성 (Mock Gemini 클라이언트 주입)
pub fn create_test_router_with_mock(client: impl GeminiClientTrait + 'static) -> Router {
    let ai_client: AiClient = Arc::new(client);
    let ai_service = AiService::new(ai_client, TEST_IMAGE_MODEL, TEST_TEXT_MODEL);
    create_router(AppState::new(ai_service), None)
}
