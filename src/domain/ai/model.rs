use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;

/// 조언 말투를 결정하는 페르소나
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Persona {
    /// 친한 친구 (반말)
    BestFriend,
    /// 부모님 (걱정 어린 반말)
    Parent,
    /// 전문가 (분석적인 존댓말)
    Expert,
    /// 멘토 (동기부여 존댓말)
    Mentor,
    /// 상담사 (공감형 존댓말)
    Counselor,
    /// 시인 (은유적 표현)
    Poet,
}

impl Persona {
    pub const ALL: [Persona; 6] = [
        Persona::BestFriend,
        Persona::Parent,
        Persona::Expert,
        Persona::Mentor,
        Persona::Counselor,
        Persona::Poet,
    ];

    /// 프롬프트 테이블 키
    pub fn key(&self) -> &'static str {
        match self {
            Persona::BestFriend => "BEST_FRIEND",
            Persona::Parent => "PARENT",
            Persona::Expert => "EXPERT",
            Persona::Mentor => "MENTOR",
            Persona::Counselor => "COUNSELOR",
            Persona::Poet => "POET",
        }
    }

}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 대소문자, `-`/공백 구분자를 허용합니다. `PARENTS`는 `PARENT`의 별칭입니다.
impl FromStr for Persona {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "BEST_FRIEND" | "BESTFRIEND" => Ok(Persona::BestFriend),
            "PARENT" | "PARENTS" => Ok(Persona::Parent),
            "EXPERT" => Ok(Persona::Expert),
            "MENTOR" => Ok(Persona::Mentor),
            "COUNSELOR" => Ok(Persona::Counselor),
            "POET" => Ok(Persona::Poet),
            _ => Err(AppError::PersonaNotFound(s.to_string())),
        }
    }
}

/// 이미지 생성 입력
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub diary_content: String,
    pub gender: String,
    pub weather: Option<String>,
}

impl ImageRequest {
    pub fn new(diary_content: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            diary_content: diary_content.into(),
            gender: gender.into(),
            weather: None,
        }
    }

    pub fn with_weather(mut self, weather: Option<String>) -> Self {
        self.weather = weather.filter(|w| !w.trim().is_empty());
        self
    }
}

/// 생성된 이미지 (호출자가 소유)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub data: Vec<u8>,
    pub mime_type: String,
}

/// 이미지 생성 실패 사유
#[derive(Debug, thiserror::Error)]
pub enum ImageGenerationError {
    #[error("응답에 후보가 없습니다")]
    NoCandidates,
    #[error("응답에 이미지 데이터가 없습니다")]
    NoImageData,
    #[error("이미지 데이터가 올바른 base64가 아닙니다: {0}")]
    InvalidImageData(String),
    #[error(transparent)]
    Upstream(#[from] AppError),
}

impl From<ImageGenerationError> for AppError {
    fn from(error: ImageGenerationError) -> Self {
        match error {
            ImageGenerationError::Upstream(inner) => inner,
            other => AppError::ImageNotGenerated(other.to_string()),
        }
    }
}

/// 음식 추천 (`이름 : 이유` 형식에서 분리)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FoodRecommendation {
    #[schema(example = "따끈한 유부우동")]
    pub name: String,
    #[schema(example = "따뜻한 국물이 긴장된 몸을 풀어줘.")]
    pub reason: String,
}

impl FoodRecommendation {
    /// 첫 번째 `:`를 기준으로 이름과 이유를 나눕니다. 구분자가 없으면 전체가 이름입니다.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((name, reason)) => Self {
                name: name.trim().to_string(),
                reason: reason.trim().to_string(),
            },
            None => Self {
                name: raw.trim().to_string(),
                reason: String::new(),
            },
        }
    }
}

/// 페르소나 조언 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub action_advice: String,
    pub food: FoodRecommendation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_persona_case_insensitively() {
        assert_eq!("best_friend".parse::<Persona>().unwrap(), Persona::BestFriend);
        assert_eq!("Best-Friend".parse::<Persona>().unwrap(), Persona::BestFriend);
        assert_eq!(" POET ".parse::<Persona>().unwrap(), Persona::Poet);
    }

    #[test]
    fn should_accept_parents_alias() {
        assert_eq!("PARENTS".parse::<Persona>().unwrap(), Persona::Parent);
    }

    #[test]
    fn should_reject_unknown_persona_with_not_found() {
        let result = "PIRATE".parse::<Persona>();

        assert!(matches!(result, Err(AppError::PersonaNotFound(key)) if key == "PIRATE"));
    }

    #[test]
    fn should_roundtrip_key_through_from_str() {
        for persona in Persona::ALL {
            assert_eq!(persona.key().parse::<Persona>().unwrap(), persona);
        }
    }

    #[test]
    fn should_serialize_persona_as_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Persona::BestFriend).unwrap(), "\"BEST_FRIEND\"");
    }

    #[test]
    fn should_split_food_on_first_colon() {
        let food = FoodRecommendation::parse("따뜻한 대추차 : 속이 따뜻해지면 마음도 풀려요: 정말로");

        assert_eq!(food.name, "따뜻한 대추차");
        assert_eq!(food.reason, "속이 따뜻해지면 마음도 풀려요: 정말로");
    }

    #[test]
    fn should_keep_whole_text_as_name_without_colon() {
        let food = FoodRecommendation::parse("  바나나 한 개 먹어봐  ");

        assert_eq!(food.name, "바나나 한 개 먹어봐");
        assert!(food.reason.is_empty());
    }

    #[test]
    fn should_drop_blank_weather() {
        let request = ImageRequest::new("일기", "남자").with_weather(Some("  ".into()));

        assert!(request.weather.is_none());
    }

    #[test]
    fn should_convert_missing_image_into_image_not_generated() {
        let error: AppError = ImageGenerationError::NoImageData.into();

        assert!(matches!(error, AppError::ImageNotGenerated(_)));
    }

    #[test]
    fn should_unwrap_upstream_error() {
        let error: AppError = ImageGenerationError::Upstream(AppError::GeminiRateLimitError).into();

        assert!(matches!(error, AppError::GeminiRateLimitError));
    }
}
