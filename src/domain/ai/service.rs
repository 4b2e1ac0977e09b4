use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use super::client::AiClient;
use super::dto::{DiaryAnalysisRequest, DiaryAnalysisResponse};
use super::gemini::{GenerateContentRequest, GenerateContentResponse};
use super::model::{
    Advice, FoodRecommendation, GeneratedImage, ImageGenerationError, ImageRequest, Persona,
};
use super::prompt::{self, illustrator, persona};
use crate::error::AppError;

/// 성별 정보가 없는 일기 분석 요청에 사용하는 태그
const UNKNOWN_GENDER: &str = "unknown";

/// 감정을 고르지 않은 일기에 사용하는 감정
pub const DEFAULT_EMOTION: &str = "보통";

/// 모델이 돌려주는 조언 JSON
#[derive(Debug, Deserialize)]
struct RawAdvice {
    #[serde(rename = "Action_Advice")]
    action_advice: String,
    #[serde(rename = "Food_Recommendation")]
    food_recommendation: String,
}

/// 그림일기 이미지 생성과 페르소나 조언을 담당하는 서비스
pub struct AiService {
    client: AiClient,
    image_model: String,
    text_model: String,
}

impl AiService {
    pub fn new(
        client: AiClient,
        image_model: impl Into<String>,
        text_model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            image_model: image_model.into(),
            text_model: text_model.into(),
        }
    }

    /// 일기 내용으로 그림일기 이미지를 생성합니다.
    ///
    /// 후보 없음, 이미지 없음, 업스트림 실패를 구분해 반환합니다.
    pub async fn try_generate_diary_image(
        &self,
        request: &ImageRequest,
    ) -> Result<GeneratedImage, ImageGenerationError> {
        let system_instruction = prompt::lookup(prompt::ILLUSTRATOR_KEY)?;
        let full_prompt = illustrator::build_prompt(request);

        tracing::info!(
            model = %self.image_model,
            diary_chars = request.diary_content.chars().count(),
            has_weather = request.weather.is_some(),
            "Diary image generation requested"
        );

        let response = self
            .client
            .generate_content(
                &self.image_model,
                GenerateContentRequest::image(system_instruction, &full_prompt),
            )
            .await?;

        let image = extract_first_image(&response)?;

        tracing::info!(
            mime_type = %image.mime_type,
            size_bytes = image.data.len(),
            "Diary image generated"
        );

        Ok(image)
    }

    /// 실패를 삼키고 이미지가 없으면 `None`을 반환합니다.
    ///
    /// 어떤 실패도 호출자에게 전파하지 않습니다.
    pub async fn generate_diary_image(&self, request: &ImageRequest) -> Option<GeneratedImage> {
        match self.try_generate_diary_image(request).await {
            Ok(image) => Some(image),
            Err(ImageGenerationError::Upstream(error)) => {
                tracing::warn!(error = %error, "이미지 생성 중 오류 발생");
                None
            }
            Err(reason) => {
                tracing::warn!(reason = %reason, "응답에 이미지 데이터가 없습니다.");
                None
            }
        }
    }

    /// 페르소나 말투로 행동 조언과 음식 추천을 생성합니다.
    pub async fn generate_advice(
        &self,
        persona: Persona,
        emotion: &str,
        diary_content: &str,
    ) -> Result<Advice, AppError> {
        tracing::info!(
            persona = %persona,
            model = %self.text_model,
            diary_chars = diary_content.chars().count(),
            "Advice generation requested"
        );

        let request = GenerateContentRequest::json_text(
            prompt::lookup(persona.key())?,
            &persona::user_prompt(emotion, diary_content),
        );

        let response = self
            .client
            .generate_content(&self.text_model, request)
            .await?;

        let text = response
            .text()
            .ok_or_else(|| AppError::AiResponseParseError("응답에 텍스트가 없습니다".to_string()))?;

        let advice = parse_advice(&text)?;
        tracing::debug!(food = %advice.food.name, "Advice generated");
        Ok(advice)
    }

    /// 조언과 그림일기 이미지를 함께 생성합니다.
    ///
    /// 조언 실패는 요청 실패이고, 이미지가 없으면 `image`만 비워 둡니다.
    /// 감정이 비어 있으면 `DEFAULT_EMOTION`으로 분석합니다.
    pub async fn analyze_diary(
        &self,
        request: DiaryAnalysisRequest,
    ) -> Result<DiaryAnalysisResponse, AppError> {
        let persona: Persona = request.persona.parse()?;

        let image_request = ImageRequest::new(
            request.content.clone(),
            request
                .gender
                .clone()
                .filter(|g| !g.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_GENDER.to_string()),
        )
        .with_weather(request.weather.clone());

        let emotion = request
            .mood
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_EMOTION)
            .to_string();

        let (advice, image) = tokio::join!(
            self.generate_advice(persona, &emotion, &request.content),
            self.generate_diary_image(&image_request),
        );
        let advice = advice?;

        let mut recommended_food = vec![advice.food.name];
        if !advice.food.reason.is_empty() {
            recommended_food.push(advice.food.reason);
        }

        Ok(DiaryAnalysisResponse {
            ai_comment: advice.action_advice,
            emotion,
            recommended_food,
            image: image.map(|img| STANDARD.encode(img.data)),
        })
    }
}

/// 첫 번째 후보에서 처음 나오는 인라인 이미지를 꺼냅니다.
fn extract_first_image(
    response: &GenerateContentResponse,
) -> Result<GeneratedImage, ImageGenerationError> {
    let candidate = response
        .first_candidate()
        .ok_or(ImageGenerationError::NoCandidates)?;

    let inline = candidate
        .parts()
        .iter()
        .filter_map(|part| part.inline_data.as_ref())
        .find(|data| data.mime_type.is_empty() || data.mime_type.starts_with("image/"))
        .ok_or(ImageGenerationError::NoImageData)?;

    let data = STANDARD
        .decode(inline.data.as_bytes())
        .map_err(|e| ImageGenerationError::InvalidImageData(e.to_string()))?;

    if data.is_empty() {
        return Err(ImageGenerationError::NoImageData);
    }

    let mime_type = if inline.mime_type.is_empty() {
        "image/png".to_string()
    } else {
        inline.mime_type.clone()
    };

    Ok(GeneratedImage { data, mime_type })
}

/// 모델 응답에서 조언 JSON을 해석합니다. 코드 펜스로 감싼 응답도 허용합니다.
fn parse_advice(text: &str) -> Result<Advice, AppError> {
    let start = text.find('{');
    let end = text.rfind('}');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => {
            return Err(AppError::AiResponseParseError(
                "JSON 객체를 찾을 수 없습니다".to_string(),
            ))
        }
    };

    let raw: RawAdvice = serde_json::from_str(json)
        .map_err(|e| AppError::AiResponseParseError(e.to_string()))?;

    if raw.action_advice.trim().is_empty() || raw.food_recommendation.trim().is_empty() {
        return Err(AppError::AiResponseParseError(
            "조언 또는 음식 추천이 비어 있습니다".to_string(),
        ));
    }

    Ok(Advice {
        action_advice: raw.action_advice.trim().to_string(),
        food: FoodRecommendation::parse(&raw.food_recommendation),
    })
}
