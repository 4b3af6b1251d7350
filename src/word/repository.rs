//! 단어 풀 협력자 인터페이스
//!
//! 단어 항목의 저장과 난이도 술어 기반 후보 선별. 실서비스에서는
//! 관계형 저장소가 주입되며, 여기서는 CLI/테스트용 메모리 구현을 둔다.

use rand::seq::IteratorRandom;

use crate::quiz::difficulty::DifficultyProfile;
use crate::word::entry::WordEntry;

/// 단어 저장소
pub trait WordRepository {
    /// 단어 값으로 항목 조회
    fn find_by_value(&self, value: &str) -> Option<WordEntry>;

    /// 항목 저장 (같은 값이 있으면 교체)
    fn save(&mut self, entry: WordEntry);

    /// 난이도 프로필 술어에 맞는 후보 단어 하나 선택
    /// exclude: 제외할 단어 값 목록 (이미 맞힌 단어 등)
    fn find_candidate(&self, profile: &DifficultyProfile, exclude: &[String]) -> Option<WordEntry>;
}

/// 메모리 단어 풀
#[derive(Debug, Default)]
pub struct MemoryWordPool {
    words: Vec<WordEntry>,
}

impl MemoryWordPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordRepository for MemoryWordPool {
    fn find_by_value(&self, value: &str) -> Option<WordEntry> {
        self.words.iter().find(|w| w.value == value).cloned()
    }

    fn save(&mut self, entry: WordEntry) {
        match self.words.iter_mut().find(|w| w.value == entry.value) {
            Some(existing) => *existing = entry,
            None => self.words.push(entry),
        }
    }

    fn find_candidate(&self, profile: &DifficultyProfile, exclude: &[String]) -> Option<WordEntry> {
        // 술어를 만족하는 후보 중 균등 무작위 선택 (ORDER BY RANDOM() LIMIT 1 상당)
        let mut rng = rand::rng();
        self.words
            .iter()
            .filter(|w| profile.matches(&w.profile))
            .filter(|w| !exclude.iter().any(|v| v == &w.value))
            .choose(&mut rng)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::difficulty::{profile_for, Difficulty};

    fn pool_with(words: &[&str]) -> MemoryWordPool {
        let mut pool = MemoryWordPool::new();
        for word in words {
            pool.save(WordEntry::from_value(*word));
        }
        pool
    }

    #[test]
    fn test_save_and_find() {
        let mut pool = MemoryWordPool::new();
        pool.save(WordEntry::from_value("참외"));
        assert_eq!(pool.len(), 1);

        let found = pool.find_by_value("참외").unwrap();
        assert_eq!(found.profile.count, 6);
        assert!(pool.find_by_value("수박").is_none());
    }

    #[test]
    fn test_save_replaces_existing() {
        let mut pool = MemoryWordPool::new();
        pool.save(WordEntry::from_value("참외"));

        let mut updated = WordEntry::from_value("참외");
        updated.definitions = Some(vec![]);
        pool.save(updated);

        assert_eq!(pool.len(), 1);
        assert!(pool.find_by_value("참외").unwrap().definitions.is_some());
    }

    #[test]
    fn test_find_candidate_respects_predicate() {
        // 바다 = ㅂㅏㄷㅏ (length 2, count 4, 복합 없음) -> EASY에 적합
        // 참외 = count 6, 복합 모음 -> EASY 부적합
        let pool = pool_with(&["바다", "참외"]);
        let easy = profile_for(Difficulty::Easy);

        let candidate = pool.find_candidate(easy, &[]).unwrap();
        assert_eq!(candidate.value, "바다");
    }

    #[test]
    fn test_find_candidate_excludes_solved() {
        let pool = pool_with(&["바다", "나무"]);
        let easy = profile_for(Difficulty::Easy);

        let exclude = vec!["바다".to_string()];
        let candidate = pool.find_candidate(easy, &exclude).unwrap();
        assert_eq!(candidate.value, "나무");

        // 전부 제외되면 후보 없음
        let exclude = vec!["바다".to_string(), "나무".to_string()];
        assert!(pool.find_candidate(easy, &exclude).is_none());
    }

    #[test]
    fn test_find_candidate_empty_pool() {
        let pool = MemoryWordPool::new();
        let easy = profile_for(Difficulty::Easy);
        assert!(pool.find_candidate(easy, &[]).is_none());
    }
}
