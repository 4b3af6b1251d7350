//! 단어 검증
//!
//! 조합이 끝난 단어가 퀴즈에 등록 가능한 형태인지 검사한다.

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(ch: char) -> bool {
    let cp = ch as u32;
    (0xAC00..=0xD7A3).contains(&cp)
}

/// 완성형이 아닌 낱자모가 포함되어 있는지 검사
///
/// 호환용 자모 영역 (ㄱ-ㅎ, ㅏ-ㅣ): U+3131 ~ U+318E
pub fn has_incomplete_jamo(text: &str) -> bool {
    text.chars().any(|ch| {
        let cp = ch as u32;
        (0x3131..=0x318E).contains(&cp)
    })
}

/// 퀴즈 단어로 등록 가능한지 검증
///
/// - 빈 문자열 무효
/// - 낱자모 포함 시 무효 (조합되지 않은 입력)
/// - 모든 문자가 완성형 한글이어야 함
pub fn is_quiz_word(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if has_incomplete_jamo(text) {
        return false;
    }
    text.chars().all(is_complete_hangul)
}
