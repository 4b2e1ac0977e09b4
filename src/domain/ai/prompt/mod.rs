//! AI 프롬프트 모듈
//!
//! ## 구조
//! - `persona`: 페르소나별 감정 조언 프롬프트
//! - `illustrator`: 그림일기 이미지 생성 프롬프트
//!
//! 두 종류의 프롬프트는 하나의 불변 테이블로 묶여 프로세스 전체에서 공유됩니다.

pub mod illustrator;
pub mod persona;

use std::collections::HashMap;
use std::sync::LazyLock;

use super::model::Persona;
use crate::error::AppError;

/// 이미지 생성 프롬프트의 테이블 키
pub const ILLUSTRATOR_KEY: &str = "ILLUSTRATOR";

static PROMPT_TABLE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut table: HashMap<&'static str, &'static str> = Persona::ALL
        .iter()
        .map(|p| (p.key(), persona::system_prompt(*p)))
        .collect();
    table.insert(ILLUSTRATOR_KEY, illustrator::SYSTEM_PROMPT);
    table
});

/// 키로 시스템 프롬프트를 조회합니다.
///
/// 페르소나 키는 `Persona`의 파싱 규칙(대소문자 무시, `PARENTS` 별칭)을 따릅니다.
pub fn lookup(key: &str) -> Result<&'static str, AppError> {
    let canonical = if key.trim().eq_ignore_ascii_case(ILLUSTRATOR_KEY) {
        ILLUSTRATOR_KEY
    } else {
        key.parse::<Persona>()?.key()
    };

    PROMPT_TABLE
        .get(canonical)
        .copied()
        .ok_or_else(|| AppError::PersonaNotFound(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_should_hold_six_personas_and_illustrator() {
        let mut keys: Vec<&str> = PROMPT_TABLE.keys().copied().collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec!["BEST_FRIEND", "COUNSELOR", "EXPERT", "ILLUSTRATOR", "MENTOR", "PARENT", "POET"]
        );
    }

    #[test]
    fn lookup_should_resolve_every_persona_to_its_prompt() {
        for persona in Persona::ALL {
            assert_eq!(lookup(persona.key()).unwrap(), persona::system_prompt(persona));
        }
    }

    #[test]
    fn lookup_should_resolve_illustrator_case_insensitively() {
        assert_eq!(lookup("illustrator").unwrap(), illustrator::SYSTEM_PROMPT);
    }

    #[test]
    fn lookup_should_accept_legacy_parents_key() {
        assert_eq!(lookup("PARENTS").unwrap(), persona::PARENT);
    }

    #[test]
    fn lookup_should_fail_with_not_found_for_unknown_key() {
        let result = lookup("NANO_BANANA");

        assert!(matches!(result, Err(AppError::PersonaNotFound(key)) if key == "NANO_BANANA"));
    }

    #[test]
    fn lookup_should_not_default_on_empty_key() {
        assert!(matches!(lookup(""), Err(AppError::PersonaNotFound(_))));
    }
}
