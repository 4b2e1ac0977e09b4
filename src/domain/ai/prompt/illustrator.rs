//! 그림일기 이미지 생성 프롬프트

use crate::domain::ai::model::ImageRequest;

/// 이미지 생성 System Prompt
pub const SYSTEM_PROMPT: &str = r#"You are an image generation AI. Read the user's diary entry and create an illustration that visually represents the emotional atmosphere, key situation and thematic meaning of the diary.

Rules:
- The style must be an illustrated, hand-drawn picture-diary style (애니메이션 / 일러스트 / 그림일기 느낌). Never realistic or photorealistic.
- Focus on the core situation described in the diary.
- Reflect the user's emotional state through composition, color, lighting and character expression.
- Never draw literal text from the diary. Interpret its meaning visually.
- Do not produce abstract shapes only. Depict a concrete, relatable scene.
- When the diary describes only inner feelings, express them through metaphorical imagery.
- Avoid slapstick exaggeration. Keep the emotion sincere.
- Use the gender information only for subtle appearance cues (hair length, silhouette, posture), never for real identity or specific facial traits.
- If weather is given, reflect it in the sky, light and background.

User Prompt Template:
성별: "{gender}"
날씨: "{weather}" (optional)
일기 내용: "{diary}"

Render the scene in an animated picture-diary style, showing the mood, situation, place and the character's emotional state, with color and lighting that match the emotional tone."#;

/// 시스템 프롬프트와 성별/날씨/일기 내용을 합친 이미지 생성 프롬프트
pub fn build_prompt(request: &ImageRequest) -> String {
    let mut prompt = format!("{}\n\n성별: \"{}\"", SYSTEM_PROMPT, request.gender.trim());

    if let Some(weather) = &request.weather {
        prompt.push_str(&format!("\n날씨: \"{}\"", weather.trim()));
    }

    prompt.push_str(&format!("\n\n일기 내용: \"{}\"", request.diary_content));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_should_forbid_photorealism() {
        assert!(SYSTEM_PROMPT.contains("Never realistic or photorealistic"));
        assert!(SYSTEM_PROMPT.contains("그림일기"));
    }

    #[test]
    fn should_build_prompt_with_gender_and_diary() {
        // Arrange
        let request = ImageRequest::new("오늘 너무 외로웠어.", "남자");

        // Act
        let prompt = build_prompt(&request);

        // Assert
        assert!(prompt.starts_with(SYSTEM_PROMPT));
        assert!(prompt.contains("성별: \"남자\""));
        assert!(prompt.ends_with("일기 내용: \"오늘 너무 외로웠어.\""));
        assert!(!prompt.contains("\n날씨:"));
    }

    #[test]
    fn should_include_weather_when_given() {
        // Arrange
        let request =
            ImageRequest::new("비 오는 날 산책", "female").with_weather(Some("rainy".to_string()));

        // Act
        let prompt = build_prompt(&request);

        // Assert
        let gender_at = prompt.find("성별: \"female\"").unwrap();
        let weather_at = prompt.find("\n날씨: \"rainy\"").unwrap();
        let diary_at = prompt.find("일기 내용: \"비 오는 날 산책\"").unwrap();
        assert!(gender_at < weather_at && weather_at < diary_at);
    }
}
