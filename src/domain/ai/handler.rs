use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use validator::Validate;

use crate::error::AppError;
use crate::response::{BaseResponse, ErrorResponse};
use crate::AppState;

use super::dto::{
    AdviceRequest, AdviceResponse, DiaryAnalysisRequest, DiaryAnalysisResponse,
    DiaryImageRequest, DiaryImageResponse,
};
use super::model::{ImageRequest, Persona};

/// 그림일기 이미지 생성
///
/// 일기 내용과 성별(선택적으로 날씨)을 받아 그림일기 스타일의 이미지를 생성합니다.
#[utoipa::path(
    post,
    path = "/api/ai/image",
    tag = "AI",
    request_body = DiaryImageRequest,
    responses(
        (status = 200, description = "이미지 생성 성공", body = BaseResponse<DiaryImageResponse>),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 429, description = "AI 요청 한도 초과", body = ErrorResponse),
        (status = 502, description = "이미지 생성 실패", body = ErrorResponse),
        (status = 503, description = "AI 서비스 일시 장애", body = ErrorResponse)
    )
)]
pub async fn generate_image(
    State(state): State<AppState>,
    request: Result<Json<DiaryImageRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<DiaryImageResponse>>, AppError> {
    // JSON 파싱 에러 처리
    let Json(request) = request.map_err(AppError::from)?;

    tracing::info!(
        content_length = request.diary_content.len(),
        gender = %request.gender,
        "Image request received"
    );

    request.validate()?;

    let image_request =
        ImageRequest::new(request.diary_content, request.gender).with_weather(request.weather);

    let image = state
        .ai_service
        .try_generate_diary_image(&image_request)
        .await?;

    let response = DiaryImageResponse {
        size_bytes: image.data.len(),
        image: STANDARD.encode(&image.data),
        mime_type: image.mime_type,
    };

    Ok(Json(BaseResponse::success(response)))
}

/// 페르소나 감정 조언
///
/// 선택한 페르소나의 말투로 행동 조언과 음식 추천을 생성합니다.
#[utoipa::path(
    post,
    path = "/api/ai/advice",
    tag = "AI",
    request_body = AdviceRequest,
    responses(
        (status = 200, description = "조언 생성 성공", body = BaseResponse<AdviceResponse>),
        (status = 400, description = "잘못된 요청 또는 존재하지 않는 페르소나", body = ErrorResponse),
        (status = 429, description = "AI 요청 한도 초과", body = ErrorResponse),
        (status = 502, description = "AI 응답 처리 실패", body = ErrorResponse)
    )
)]
pub async fn generate_advice(
    State(state): State<AppState>,
    request: Result<Json<AdviceRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<AdviceResponse>>, AppError> {
    let Json(request) = request.map_err(AppError::from)?;

    tracing::info!(
        persona = %request.persona,
        emotion = %request.emotion,
        content_length = request.content.len(),
        "Advice request received"
    );

    request.validate()?;
    let persona: Persona = request.persona.parse()?;

    let advice = state
        .ai_service
        .generate_advice(persona, &request.emotion, &request.content)
        .await?;

    Ok(Json(BaseResponse::success(AdviceResponse {
        persona,
        action_advice: advice.action_advice,
        food_recommendation: advice.food,
    })))
}

/// 일기 분석
///
/// 메인 백엔드가 전달한 일기를 분석해 조언, 음식 추천, 그림일기 이미지를 한 번에 반환합니다.
/// 이미지 생성에 실패해도 요청은 성공하며 `image`가 null로 반환됩니다.
#[utoipa::path(
    post,
    path = "/api/ai/diary",
    tag = "AI",
    request_body = DiaryAnalysisRequest,
    responses(
        (status = 200, description = "분석 성공", body = DiaryAnalysisResponse),
        (status = 400, description = "잘못된 요청 또는 존재하지 않는 페르소나", body = ErrorResponse),
        (status = 502, description = "AI 응답 처리 실패", body = ErrorResponse)
    )
)]
pub async fn analyze_diary(
    State(state): State<AppState>,
    request: Result<Json<DiaryAnalysisRequest>, JsonRejection>,
) -> Result<Json<DiaryAnalysisResponse>, AppError> {
    let Json(request) = request.map_err(AppError::from)?;

    tracing::info!(
        persona = %request.persona,
        mood = ?request.mood,
        date = ?request.date,
        content_length = request.content.len(),
        "Diary analysis request received"
    );

    request.validate()?;

    let response = state.ai_service.analyze_diary(request).await?;

    tracing::info!(
        has_image = response.image.is_some(),
        "Diary analysis completed"
    );

    Ok(Json(response))
}
