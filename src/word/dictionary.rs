//! 사전 협력자 인터페이스
//!
//! 단어 뜻풀이를 외부 사전에서 조회한다. 실서비스에서는 표준국어대사전
//! API 등을 감싼 구현이 주입되며, 엔진은 호출 가능하다는 것만 요구하고
//! 전송 방식은 규정하지 않는다.

use std::collections::HashMap;

use crate::word::entry::Definition;

/// 사전 조회 오류
#[derive(Debug)]
pub enum DictionaryError {
    /// 사전에 해당 단어가 없음 (조회 결과 0건)
    NotFound(String),
    /// 사전 서비스 호출 실패 (네트워크, 파싱 등)
    Unavailable(String),
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::NotFound(word) => {
                write!(f, "사전에서 단어를 찾을 수 없습니다: {}", word)
            }
            DictionaryError::Unavailable(msg) => write!(f, "사전 조회 실패: {}", msg),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// 사전 제공자
pub trait DictionaryProvider {
    /// 단어의 뜻풀이 조회
    /// 결과가 0건이면 NotFound — 기본 프로필로 대체하지 않고 호출자에게 전파
    fn lookup_definitions(&self, word: &str) -> Result<Vec<Definition>, DictionaryError>;
}

/// 메모리 사전 (테스트 및 CLI용)
#[derive(Debug, Default)]
pub struct MemoryDictionary {
    entries: HashMap<String, Vec<Definition>>,
}

impl MemoryDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 뜻풀이 등록
    pub fn insert(&mut self, word: impl Into<String>, definitions: Vec<Definition>) {
        self.entries.insert(word.into(), definitions);
    }

    /// 뜻풀이 본문만으로 간단 등록
    pub fn insert_plain(&mut self, word: impl Into<String>, definition: impl Into<String>) {
        self.insert(
            word,
            vec![Definition {
                definition: definition.into(),
                pos: None,
            }],
        );
    }
}

impl DictionaryProvider for MemoryDictionary {
    fn lookup_definitions(&self, word: &str) -> Result<Vec<Definition>, DictionaryError> {
        match self.entries.get(word) {
            Some(definitions) if !definitions.is_empty() => Ok(definitions.clone()),
            _ => Err(DictionaryError::NotFound(word.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_found() {
        let mut dict = MemoryDictionary::new();
        dict.insert_plain("참외", "박과의 한해살이 덩굴풀의 열매.");

        let definitions = dict.lookup_definitions("참외").unwrap();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].definition, "박과의 한해살이 덩굴풀의 열매.");
    }

    #[test]
    fn test_lookup_not_found() {
        let dict = MemoryDictionary::new();
        let err = dict.lookup_definitions("없는말").unwrap_err();
        assert!(matches!(err, DictionaryError::NotFound(_)));
    }

    #[test]
    fn test_empty_definitions_is_not_found() {
        // 0건 등록은 미등재와 동일하게 취급
        let mut dict = MemoryDictionary::new();
        dict.insert("빈말", vec![]);
        let err = dict.lookup_definitions("빈말").unwrap_err();
        assert!(matches!(err, DictionaryError::NotFound(_)));
    }
}
