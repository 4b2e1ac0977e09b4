use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::model::{FoodRecommendation, Persona};

/// 그림일기 이미지 생성 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryImageRequest {
    /// 일기 내용 (길이 제한 없음)
    #[validate(length(min = 1, message = "일기 내용은 필수입니다"))]
    #[schema(example = "오늘 너무 외롭고 힘들었어. 사람들 속에 있어도 혼자인 느낌만 들었어.")]
    pub diary_content: String,

    /// 외형 단서로만 사용되는 성별 태그
    #[validate(length(min = 1, max = 20, message = "성별은 1자 이상 20자 이하여야 합니다"))]
    #[schema(example = "남자")]
    pub gender: String,

    /// 날씨 (선택)
    #[validate(length(max = 20, message = "날씨는 20자 이하여야 합니다"))]
    #[schema(example = "rainy")]
    pub weather: Option<String>,
}

/// 그림일기 이미지 생성 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryImageResponse {
    /// base64 인코딩된 이미지
    pub image: String,

    #[schema(example = "image/png")]
    pub mime_type: String,

    /// 디코딩된 이미지 크기 (bytes)
    pub size_bytes: usize,
}

/// 페르소나 조언 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    /// 페르소나 키 (BEST_FRIEND, PARENT, EXPERT, MENTOR, COUNSELOR, POET)
    #[validate(length(min = 1, message = "페르소나는 필수입니다"))]
    #[schema(example = "BEST_FRIEND")]
    pub persona: String,

    /// 사용자가 선택한 감정
    #[validate(length(min = 1, max = 20, message = "감정은 1자 이상 20자 이하여야 합니다"))]
    #[schema(example = "슬픔")]
    pub emotion: String,

    /// 일기 내용 (길이 제한 없음)
    #[validate(length(min = 1, message = "일기 내용은 필수입니다"))]
    #[schema(example = "오늘 기분이 너무 안 좋다. 난 분명 열심히 했는데 되는 일이 없다.")]
    pub content: String,
}

/// 페르소나 조언 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdviceResponse {
    pub persona: Persona,
    pub action_advice: String,
    pub food_recommendation: FoodRecommendation,
}

/// 일기 분석 요청 DTO (메인 백엔드 연동용)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryAnalysisRequest {
    #[schema(example = "2025-11-20")]
    pub date: Option<String>,

    #[schema(example = "힘들었던 하루")]
    pub title: Option<String>,

    /// 일기 내용 (길이 제한 없음)
    #[validate(length(min = 1, message = "일기 내용은 필수입니다"))]
    pub content: String,

    /// 사용자가 선택한 감정 (없으면 기본 감정으로 분석)
    #[schema(example = "슬픔")]
    pub mood: Option<String>,

    #[schema(example = "rainy")]
    pub weather: Option<String>,

    #[schema(example = json!(["산책", "독서"]))]
    pub activities: Option<Vec<String>>,

    #[validate(length(min = 1, message = "페르소나는 필수입니다"))]
    #[schema(example = "COUNSELOR")]
    pub persona: String,

    #[schema(example = "여자")]
    pub gender: Option<String>,
}

/// 일기 분석 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryAnalysisResponse {
    /// 페르소나 말투의 행동 조언
    pub ai_comment: String,

    /// 분석에 사용된 감정
    pub emotion: String,

    /// `[음식 이름, 추천 이유]` (이유가 없으면 이름만)
    pub recommended_food: Vec<String>,

    /// base64 인코딩된 그림일기 이미지 (생성 실패 시 null)
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_image_request_without_weather() {
        // Arrange
        let json = r#"{ "diaryContent": "오늘 힘들었음", "gender": "남자" }"#;

        // Act
        let result: DiaryImageRequest = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(result.diary_content, "오늘 힘들었음");
        assert_eq!(result.gender, "남자");
        assert!(result.weather.is_none());
        assert!(result.validate().is_ok());
    }

    #[test]
    fn should_fail_validation_for_empty_diary() {
        let request = DiaryImageRequest {
            diary_content: String::new(),
            gender: "여자".to_string(),
            weather: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn should_accept_long_diary_without_upper_bound() {
        let request = AdviceRequest {
            persona: "POET".to_string(),
            emotion: "기쁨".to_string(),
            content: "가".repeat(20_000),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn should_accept_null_mood_from_backend_payload() {
        let json = r#"{ "content": "기분을 고르지 않았다", "mood": null, "persona": "MENTOR" }"#;

        let result: DiaryAnalysisRequest = serde_json::from_str(json).unwrap();

        assert!(result.mood.is_none());
        assert!(result.validate().is_ok());
    }

    #[test]
    fn should_deserialize_analysis_request_from_backend_payload() {
        let json = r#"{
            "date": "2025-11-20",
            "title": "비",
            "content": "비가 와서 우울했다",
            "mood": "슬픔",
            "weather": "rainy",
            "activities": ["산책"],
            "images": [],
            "persona": "POET"
        }"#;

        let result: DiaryAnalysisRequest = serde_json::from_str(json).unwrap();

        assert_eq!(result.persona, "POET");
        assert_eq!(result.weather.as_deref(), Some("rainy"));
        assert!(result.gender.is_none());
        assert!(result.validate().is_ok());
    }

    #[test]
    fn should_serialize_analysis_response_in_camel_case() {
        let response = DiaryAnalysisResponse {
            ai_comment: "쉬어가자".to_string(),
            emotion: "슬픔".to_string(),
            recommended_food: vec!["코코아".to_string()],
            image: None,
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["aiComment"], "쉬어가자");
        assert_eq!(json["recommendedFood"][0], "코코아");
        assert!(json["image"].is_null());
    }
}
