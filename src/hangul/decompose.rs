//! 음절 분해기
//!
//! 완성형 한글 음절 하나를 (초성, 중성, 종성) 자모 문자로 분해한다.
//! 완성형 영역 밖의 문자는 오류가 아니라 그대로 통과(PassThrough)시키며,
//! 이후 파이프라인에서 단일 소리 단위로 취급된다.

use crate::hangul::jamo::{choseong_char, decompose_syllable, jongseong_char, jungseong_char};

/// 문자 하나의 분해 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decomposed {
    /// 완성형 음절의 (초성, 중성, 종성) — 종성 없음은 None
    Syllable {
        choseong: char,
        jungseong: char,
        jongseong: Option<char>,
    },
    /// 완성형 영역 밖의 문자 (숫자, 영문, 낱자모 등) — 그대로 통과
    PassThrough(char),
}

impl Decomposed {
    /// 분해 결과를 소리 단위 시퀀스에 순서대로 추가
    /// 종성 없음(인덱스 0)은 아무것도 내보내지 않음
    pub fn push_units(&self, units: &mut Vec<char>) {
        match *self {
            Decomposed::Syllable {
                choseong,
                jungseong,
                jongseong,
            } => {
                units.push(choseong);
                units.push(jungseong);
                if let Some(jong) = jongseong {
                    units.push(jong);
                }
            }
            Decomposed::PassThrough(c) => units.push(c),
        }
    }
}

/// 문자 하나를 분해
/// 완성형 한글이면 자모 삼중항, 아니면 PassThrough
pub fn decompose_char(c: char) -> Decomposed {
    match decompose_syllable(c) {
        Some((cho, jung, jong)) => {
            // 인덱스 산술이 전역적으로 닫혀 있으므로 테이블 조회는 항상 성공
            match (choseong_char(cho), jungseong_char(jung)) {
                (Some(choseong), Some(jungseong)) => Decomposed::Syllable {
                    choseong,
                    jungseong,
                    jongseong: jongseong_char(jong),
                },
                _ => Decomposed::PassThrough(c),
            }
        }
        None => Decomposed::PassThrough(c),
    }
}

/// 단어 전체를 소리 단위 시퀀스로 분해 (원래 순서 유지)
pub fn decompose_word(word: &str) -> Vec<char> {
    let mut units = Vec::with_capacity(word.chars().count() * 3);
    for c in word.chars() {
        decompose_char(c).push_units(&mut units);
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_char_syllable() {
        assert_eq!(
            decompose_char('가'),
            Decomposed::Syllable {
                choseong: 'ㄱ',
                jungseong: 'ㅏ',
                jongseong: None,
            }
        );
        assert_eq!(
            decompose_char('한'),
            Decomposed::Syllable {
                choseong: 'ㅎ',
                jungseong: 'ㅏ',
                jongseong: Some('ㄴ'),
            }
        );
        // 복합 종성은 이 단계에서는 한 글자 그대로
        assert_eq!(
            decompose_char('닭'),
            Decomposed::Syllable {
                choseong: 'ㄷ',
                jungseong: 'ㅏ',
                jongseong: Some('ㄺ'),
            }
        );
    }

    #[test]
    fn test_decompose_char_passthrough() {
        assert_eq!(decompose_char('a'), Decomposed::PassThrough('a'));
        assert_eq!(decompose_char('1'), Decomposed::PassThrough('1'));
        assert_eq!(decompose_char('ㄱ'), Decomposed::PassThrough('ㄱ'));
        assert_eq!(decompose_char(' '), Decomposed::PassThrough(' '));
    }

    #[test]
    fn test_decompose_word() {
        assert_eq!(decompose_word("가"), vec!['ㄱ', 'ㅏ']);
        assert_eq!(decompose_word("한글"), vec!['ㅎ', 'ㅏ', 'ㄴ', 'ㄱ', 'ㅡ', 'ㄹ']);
        // 참외: 외의 중성 ㅚ는 복합 모음이지만 분해 단계에서는 한 단위
        assert_eq!(decompose_word("참외"), vec!['ㅊ', 'ㅏ', 'ㅁ', 'ㅇ', 'ㅚ']);
    }

    #[test]
    fn test_decompose_word_mixed() {
        // 통과 문자는 제자리에 한 단위로 남음
        assert_eq!(decompose_word("a가1"), vec!['a', 'ㄱ', 'ㅏ', '1']);
    }

    #[test]
    fn test_decompose_word_empty() {
        assert_eq!(decompose_word(""), Vec::<char>::new());
    }
}
