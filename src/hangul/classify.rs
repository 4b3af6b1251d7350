//! 단어 분류기
//!
//! 단어 전체를 분해(decompose) → 전개(expand)하여 난이도 선별에 쓰이는
//! 음운 프로필을 계산한다. 어떤 입력(빈 문자열 포함)에도 실패하지 않는
//! 전역 함수이며, 결과는 단어별로 한 번만 계산해 저장소에 캐시된다.

use serde::{Deserialize, Serialize};

use crate::hangul::decompose::decompose_word;
use crate::hangul::expand::expand;

/// 단어의 음운 프로필
///
/// - length: 원문 글자 수 (음절 블록 + 통과 문자, 유니코드 스칼라 기준)
/// - count: 복합 자모 전개 후 소리 단위 총수
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordProfile {
    pub length: usize,
    pub count: usize,
    pub has_complex_consonant: bool,
    pub has_complex_vowel: bool,
}

/// 단어를 분류하여 프로필 생성
///
/// 불변식: count >= length. 통과 문자/복합 자모가 없으면
/// 음절마다 2(종성 없음) 또는 3(종성 있음) 단위씩 기여한다.
pub fn classify(word: &str) -> WordProfile {
    let length = word.chars().count();
    let expansion = expand(&decompose_word(word));

    WordProfile {
        length,
        count: expansion.units.len(),
        has_complex_consonant: expansion.complex_consonant_count > 0,
        has_complex_vowel: expansion.complex_vowel_count > 0,
    }
}
