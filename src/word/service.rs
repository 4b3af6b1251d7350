//! 단어 서비스
//!
//! 단어 등록/조회 흐름과 퀴즈용 후보 선택을 협력자(저장소, 사전) 위에서
//! 조합한다. 조합 -> 검증 -> 사전 조회 -> 분류 -> 저장 순서의 순수
//! 파이프라인이며, 후보 선택과 풀이 기록은 서로 조율되지 않은 별도
//! 호출이므로 동일 사용자에 대한 동시 선택이 같은 단어를 돌려줄 수 있다
//! (수용된 경쟁 상태, 상호 배제는 상위 계층의 몫).

use crate::hangul::assembler::assemble;
use crate::hangul::validator::is_quiz_word;
use crate::quiz::difficulty::{profile_for, Difficulty};
use crate::word::dictionary::{DictionaryError, DictionaryProvider};
use crate::word::entry::WordEntry;
use crate::word::repository::WordRepository;

/// 단어 서비스 오류
#[derive(Debug)]
pub enum WordError {
    /// 등록할 수 없는 단어 (조합 후에도 완성형이 아니거나 사전 미등재)
    InvalidWord(String),
    /// 조건에 맞는 후보 단어가 풀에 없음
    NoCandidate,
    /// 사전 협력자 오류
    Dictionary(DictionaryError),
}

impl std::fmt::Display for WordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordError::InvalidWord(word) => write!(f, "유효하지 않은 단어입니다: {}", word),
            WordError::NoCandidate => write!(f, "조건에 맞는 단어를 찾을 수 없습니다"),
            WordError::Dictionary(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for WordError {}

impl From<DictionaryError> for WordError {
    fn from(e: DictionaryError) -> Self {
        WordError::Dictionary(e)
    }
}

/// 단어 등록/선택 서비스
pub struct WordService<R: WordRepository, D: DictionaryProvider> {
    repository: R,
    dictionary: D,
}

impl<R: WordRepository, D: DictionaryProvider> WordService<R, D> {
    pub fn new(repository: R, dictionary: D) -> Self {
        Self {
            repository,
            dictionary,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// 단어 정보 조회/등록
    ///
    /// 입력을 완성형으로 조합·정규화한 뒤, 기존 항목이 있으면 뜻풀이를
    /// 보충해 반환하고, 없으면 사전 조회 -> 분류 -> 저장 후 반환한다.
    /// 사전 미등재 단어는 InvalidWord로 전파된다.
    pub fn word_info(&mut self, raw: &str) -> Result<WordEntry, WordError> {
        let value = assemble(raw).trim().to_string();

        if let Some(mut existing) = self.repository.find_by_value(&value) {
            if existing.definitions.is_none() {
                log::debug!("기존 단어 뜻풀이 보충: {}", value);
                existing.definitions = Some(self.dictionary.lookup_definitions(&value)?);
                self.repository.save(existing.clone());
            }
            return Ok(existing);
        }

        if !is_quiz_word(&value) {
            return Err(WordError::InvalidWord(value));
        }

        // 사전에 없는 단어는 등록 불가
        let definitions = match self.dictionary.lookup_definitions(&value) {
            Ok(definitions) => definitions,
            Err(DictionaryError::NotFound(_)) => return Err(WordError::InvalidWord(value)),
            Err(e) => return Err(e.into()),
        };

        let mut entry = WordEntry::from_value(value);
        entry.definitions = Some(definitions);
        self.repository.save(entry.clone());
        log::info!(
            "새 단어 등록: {} (length={}, count={})",
            entry.value,
            entry.profile.length,
            entry.profile.count
        );
        Ok(entry)
    }

    /// 퀴즈용 무작위 단어 선택
    ///
    /// 난이도 프로필 술어로 후보를 고르고, 뜻풀이가 비어 있으면 조회해
    /// 채운 뒤 저장한다. 술어에 맞는 후보가 없으면 NoCandidate.
    pub fn random_word_for_quiz(
        &mut self,
        difficulty: Difficulty,
        exclude: &[String],
    ) -> Result<WordEntry, WordError> {
        let profile = profile_for(difficulty);
        let mut word = self
            .repository
            .find_candidate(profile, exclude)
            .ok_or(WordError::NoCandidate)?;

        if word.definitions.is_none() {
            log::debug!("후보 단어 뜻풀이 보충: {}", word.value);
            word.definitions = Some(self.dictionary.lookup_definitions(&word.value)?);
            self.repository.save(word.clone());
        }

        Ok(word)
    }
}
