//! 난이도 선별기
//!
//! 난이도 단계별 고정 프로필과 후보 단어 선별 술어를 제공한다.
//! 프로필 수치는 게임플레이 상수이므로 변경 시 기존 단어 풀의
//! 난이도 분포가 달라진다.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::hangul::classify::WordProfile;

/// 난이도 단계 (닫힌 열거)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    /// 문자열에서 난이도 파싱
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "EASY" => Some(Difficulty::Easy),
            "MEDIUM" => Some(Difficulty::Medium),
            "HARD" => Some(Difficulty::Hard),
            "VERYHARD" => Some(Difficulty::VeryHard),
            _ => None,
        }
    }

    /// 문자열에서 난이도 파싱, 인식 불가 시 EASY로 폴백
    ///
    /// 열거 밖의 값이 조용히 허용되는 유일한 지점. 외부 입력 경계에서
    /// 잘못된 난이도 이름은 거부 대신 가장 쉬운 단계로 처리된다.
    pub fn parse_or_easy(s: &str) -> Self {
        Self::parse(s).unwrap_or(Difficulty::Easy)
    }
}

/// 복합 자모 제약 (3상)
///
/// "제약 없음"을 Option<bool>의 None으로 표현하면 술어 구성 단계에서
/// false로 붕괴되기 쉬우므로 명시적 3상 태그로 모델링한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityRule {
    /// 복합 자모가 있어야 함
    Required,
    /// 복합 자모가 없어야 함
    Forbidden,
    /// 제약 없음 — 술어에서 해당 절을 아예 생략
    Unconstrained,
}

impl ComplexityRule {
    /// 단어의 복합 플래그가 이 제약을 만족하는지
    pub fn allows(&self, flag: bool) -> bool {
        match self {
            ComplexityRule::Required => flag,
            ComplexityRule::Forbidden => !flag,
            ComplexityRule::Unconstrained => true,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        matches!(self, ComplexityRule::Unconstrained)
    }

    fn as_option(&self) -> Option<bool> {
        match self {
            ComplexityRule::Required => Some(true),
            ComplexityRule::Forbidden => Some(false),
            ComplexityRule::Unconstrained => None,
        }
    }

    fn from_option(opt: Option<bool>) -> Self {
        match opt {
            Some(true) => ComplexityRule::Required,
            Some(false) => ComplexityRule::Forbidden,
            None => ComplexityRule::Unconstrained,
        }
    }
}

// 직렬화 표현: true / false / null (제약 없음)
impl Serialize for ComplexityRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ComplexityRule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<bool>::deserialize(deserializer).map(ComplexityRule::from_option)
    }
}

/// 난이도 프로필 (불변, 단계당 하나)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub length_min: usize,
    pub length_max: usize,
    pub count_min: usize,
    pub count_max: usize,
    pub complex_vowel: ComplexityRule,
    pub complex_consonant: ComplexityRule,
    pub max_attempts: u32,
}

impl DifficultyProfile {
    /// 후보 선별 술어: 범위 절 + (제약이 있을 때만) 복합 플래그 동등 절의 논리곱
    ///
    /// Unconstrained는 절을 생략하므로 두 플래그 값 모두 통과한다.
    pub fn matches(&self, profile: &WordProfile) -> bool {
        (self.length_min..=self.length_max).contains(&profile.length)
            && (self.count_min..=self.count_max).contains(&profile.count)
            && self.complex_vowel.allows(profile.has_complex_vowel)
            && self.complex_consonant.allows(profile.has_complex_consonant)
    }
}

lazy_static! {
    /// 난이도별 고정 프로필 테이블 (프로세스 시작 시 1회 구성, 불변)
    static ref DIFFICULTY_MAP: HashMap<Difficulty, DifficultyProfile> = {
        let mut map = HashMap::new();
        map.insert(
            Difficulty::Easy,
            DifficultyProfile {
                length_min: 2,
                length_max: 2,
                count_min: 4,
                count_max: 4,
                complex_vowel: ComplexityRule::Forbidden,
                complex_consonant: ComplexityRule::Forbidden,
                max_attempts: 7,
            },
        );
        map.insert(
            Difficulty::Medium,
            DifficultyProfile {
                length_min: 2,
                length_max: 3,
                count_min: 5,
                count_max: 6,
                complex_vowel: ComplexityRule::Unconstrained,
                complex_consonant: ComplexityRule::Unconstrained,
                max_attempts: 6,
            },
        );
        map.insert(
            Difficulty::Hard,
            DifficultyProfile {
                length_min: 3,
                length_max: 3,
                count_min: 7,
                count_max: 11,
                complex_vowel: ComplexityRule::Unconstrained,
                complex_consonant: ComplexityRule::Unconstrained,
                max_attempts: 6,
            },
        );
        map.insert(
            Difficulty::VeryHard,
            DifficultyProfile {
                length_min: 3,
                length_max: 4,
                count_min: 8,
                count_max: 16,
                complex_vowel: ComplexityRule::Unconstrained,
                complex_consonant: ComplexityRule::Unconstrained,
                max_attempts: 6,
            },
        );
        map
    };
}

/// 난이도 단계에 해당하는 프로필 조회
/// 테이블 누락 시 EASY 프로필로 폴백 (방어적 경로, 정적 테이블에서는 발생하지 않음)
pub fn profile_for(difficulty: Difficulty) -> &'static DifficultyProfile {
    DIFFICULTY_MAP
        .get(&difficulty)
        .unwrap_or_else(|| &DIFFICULTY_MAP[&Difficulty::Easy])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_profile_exact() {
        let profile = profile_for(Difficulty::Easy);
        assert_eq!(profile.length_min, 2);
        assert_eq!(profile.length_max, 2);
        assert_eq!(profile.count_min, 4);
        assert_eq!(profile.count_max, 4);
        assert_eq!(profile.complex_vowel, ComplexityRule::Forbidden);
        assert_eq!(profile.complex_consonant, ComplexityRule::Forbidden);
        assert_eq!(profile.max_attempts, 7);
    }

    #[test]
    fn test_medium_profile_exact() {
        let profile = profile_for(Difficulty::Medium);
        assert_eq!(profile.length_min, 2);
        assert_eq!(profile.length_max, 3);
        assert_eq!(profile.count_min, 5);
        assert_eq!(profile.count_max, 6);
        // Unconstrained이지 Forbidden이 아님
        assert_eq!(profile.complex_vowel, ComplexityRule::Unconstrained);
        assert_eq!(profile.complex_consonant, ComplexityRule::Unconstrained);
        assert_eq!(profile.max_attempts, 6);
    }

    #[test]
    fn test_hard_profile_exact() {
        let profile = profile_for(Difficulty::Hard);
        assert_eq!(profile.length_min, 3);
        assert_eq!(profile.length_max, 3);
        assert_eq!(profile.count_min, 7);
        assert_eq!(profile.count_max, 11);
        assert_eq!(profile.complex_vowel, ComplexityRule::Unconstrained);
        assert_eq!(profile.complex_consonant, ComplexityRule::Unconstrained);
        assert_eq!(profile.max_attempts, 6);
    }

    #[test]
    fn test_veryhard_profile_exact() {
        let profile = profile_for(Difficulty::VeryHard);
        assert_eq!(profile.length_min, 3);
        assert_eq!(profile.length_max, 4);
        assert_eq!(profile.count_min, 8);
        assert_eq!(profile.count_max, 16);
        assert_eq!(profile.complex_vowel, ComplexityRule::Unconstrained);
        assert_eq!(profile.complex_consonant, ComplexityRule::Unconstrained);
        assert_eq!(profile.max_attempts, 6);
    }

    #[test]
    fn test_parse_fallback_to_easy() {
        assert_eq!(Difficulty::parse_or_easy("EASY"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_or_easy("veryhard"), Difficulty::VeryHard);
        // 인식 불가 값은 EASY와 동일하게 동작
        assert_eq!(Difficulty::parse_or_easy("IMPOSSIBLE"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_or_easy(""), Difficulty::Easy);
        assert_eq!(
            profile_for(Difficulty::parse_or_easy("IMPOSSIBLE")),
            profile_for(Difficulty::Easy)
        );
    }

    #[test]
    fn test_matches_range() {
        let easy = profile_for(Difficulty::Easy);
        let word = WordProfile {
            length: 2,
            count: 4,
            has_complex_consonant: false,
            has_complex_vowel: false,
        };
        assert!(easy.matches(&word));

        // 범위 밖
        let long = WordProfile { length: 3, ..word.clone() };
        assert!(!easy.matches(&long));
        let many = WordProfile { count: 5, ..word.clone() };
        assert!(!easy.matches(&many));

        // EASY는 복합 자모 금지
        let complex = WordProfile { has_complex_vowel: true, ..word };
        assert!(!easy.matches(&complex));
    }

    #[test]
    fn test_unconstrained_accepts_both() {
        // Unconstrained 절 생략 검증: 복합 플래그만 다른 두 단어 모두 통과
        let medium = profile_for(Difficulty::Medium);
        let plain = WordProfile {
            length: 2,
            count: 5,
            has_complex_consonant: false,
            has_complex_vowel: false,
        };
        let complex = WordProfile {
            has_complex_vowel: true,
            has_complex_consonant: true,
            ..plain.clone()
        };
        assert!(medium.matches(&plain));
        assert!(medium.matches(&complex));
    }

    #[test]
    fn test_complexity_rule_allows() {
        assert!(ComplexityRule::Required.allows(true));
        assert!(!ComplexityRule::Required.allows(false));
        assert!(ComplexityRule::Forbidden.allows(false));
        assert!(!ComplexityRule::Forbidden.allows(true));
        assert!(ComplexityRule::Unconstrained.allows(true));
        assert!(ComplexityRule::Unconstrained.allows(false));
    }

    #[test]
    fn test_difficulty_serde_names() {
        assert_eq!(serde_json::to_string(&Difficulty::VeryHard).unwrap(), "\"VERYHARD\"");
        let parsed: Difficulty = serde_json::from_str("\"MEDIUM\"").unwrap();
        assert_eq!(parsed, Difficulty::Medium);
    }

    #[test]
    fn test_complexity_rule_serde() {
        // Unconstrained은 null, Required/Forbidden은 bool
        let medium = profile_for(Difficulty::Medium);
        let json = serde_json::to_string(medium).unwrap();
        assert!(json.contains("\"complex_vowel\":null"));

        let easy = profile_for(Difficulty::Easy);
        let json = serde_json::to_string(easy).unwrap();
        assert!(json.contains("\"complex_vowel\":false"));

        let parsed: DifficultyProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, easy);
    }
}
