//! 단어 레코드
//!
//! 단어 값과 그로부터 파생된 음운 프로필, 사전 뜻풀이를 묶는다.
//! 프로필은 단어당 한 번 계산되는 파생 사실로, 저장소 협력자가
//! 함께 보존하여 재계산을 피한다.

use serde::{Deserialize, Serialize};

use crate::hangul::classify::{classify, WordProfile};

/// 사전 뜻풀이 한 건
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// 뜻풀이 본문
    pub definition: String,
    /// 품사 (사전이 제공하지 않으면 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
}

/// 단어 풀의 한 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// 단어 값 (완성형 한글)
    pub value: String,
    /// 파생 음운 프로필 (length / count / 복합 플래그)
    #[serde(flatten)]
    pub profile: WordProfile,
    /// 사전 뜻풀이 (아직 조회 전이면 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<Definition>>,
}

impl WordEntry {
    /// 단어 값으로부터 프로필을 계산해 항목 생성 (뜻풀이 없음)
    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let profile = classify(&value);
        Self {
            value,
            profile,
            definitions: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        let entry = WordEntry::from_value("참외");
        assert_eq!(entry.value, "참외");
        assert_eq!(entry.profile.length, 2);
        assert_eq!(entry.profile.count, 6);
        assert!(entry.profile.has_complex_vowel);
        assert!(entry.definitions.is_none());
    }

    #[test]
    fn test_serde_flatten() {
        // 프로필 필드는 항목에 평탄화되어 저장됨 (원본 스키마와 동일)
        let entry = WordEntry::from_value("닭");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"value\":\"닭\""));
        assert!(json.contains("\"length\":1"));
        assert!(json.contains("\"has_complex_consonant\":true"));

        let parsed: WordEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
