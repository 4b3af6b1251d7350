//! 자모 조합기 (유한 상태 기계)
//!
//! 낱자모와 완성형 음절이 섞인 입력을 완성형 음절 문자열로 재조합한다.
//! 단어 등록 전 정규화 단계에서 사용: "ㄱㅏㄴㅏ" -> "가나",
//! "각" + "ㅣ" -> "가기" (종성이 다음 글자의 초성으로 이동).
//! 조합할 수 없는 문자는 현재 글자를 확정한 뒤 그대로 출력한다.

use crate::hangul::expand::compound_consonant;
use crate::hangul::jamo::{
    choseong_char, choseong_to_jongseong, combine_jongseong, combine_jungseong, compose_syllable,
    decompose_syllable, jongseong_to_choseong, jungseong_char, split_jongseong,
};

/// 입력 자모 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    /// 자음 (cho_index: 초성 인덱스, jong_index: 종성 인덱스, None이면 종성 불가)
    Consonant {
        cho_index: u32,
        jong_index: Option<u32>,
    },
    /// 모음 (jung_index: 중성 인덱스)
    Vowel { jung_index: u32 },
}

/// 호환용 자모 문자를 Jamo로 변환
/// 초성이 될 수 있는 자음 19종과 중성 21종만 매핑하며,
/// 겹받침 전용 낱자(ㄳ 등)와 그 외 문자는 None
pub fn map_jamo_char(c: char) -> Option<Jamo> {
    match c {
        // 자음 (초성 인덱스, 종성 인덱스)
        'ㄱ' => Some(Jamo::Consonant { cho_index: 0, jong_index: Some(1) }),
        'ㄲ' => Some(Jamo::Consonant { cho_index: 1, jong_index: Some(2) }),
        'ㄴ' => Some(Jamo::Consonant { cho_index: 2, jong_index: Some(4) }),
        'ㄷ' => Some(Jamo::Consonant { cho_index: 3, jong_index: Some(7) }),
        'ㄸ' => Some(Jamo::Consonant { cho_index: 4, jong_index: None }), // 종성 불가
        'ㄹ' => Some(Jamo::Consonant { cho_index: 5, jong_index: Some(8) }),
        'ㅁ' => Some(Jamo::Consonant { cho_index: 6, jong_index: Some(16) }),
        'ㅂ' => Some(Jamo::Consonant { cho_index: 7, jong_index: Some(17) }),
        'ㅃ' => Some(Jamo::Consonant { cho_index: 8, jong_index: None }), // 종성 불가
        'ㅅ' => Some(Jamo::Consonant { cho_index: 9, jong_index: Some(19) }),
        'ㅆ' => Some(Jamo::Consonant { cho_index: 10, jong_index: Some(20) }),
        'ㅇ' => Some(Jamo::Consonant { cho_index: 11, jong_index: Some(21) }),
        'ㅈ' => Some(Jamo::Consonant { cho_index: 12, jong_index: Some(22) }),
        'ㅉ' => Some(Jamo::Consonant { cho_index: 13, jong_index: None }), // 종성 불가
        'ㅊ' => Some(Jamo::Consonant { cho_index: 14, jong_index: Some(23) }),
        'ㅋ' => Some(Jamo::Consonant { cho_index: 15, jong_index: Some(24) }),
        'ㅌ' => Some(Jamo::Consonant { cho_index: 16, jong_index: Some(25) }),
        'ㅍ' => Some(Jamo::Consonant { cho_index: 17, jong_index: Some(26) }),
        'ㅎ' => Some(Jamo::Consonant { cho_index: 18, jong_index: Some(27) }),

        // 모음 (중성 인덱스)
        'ㅏ' => Some(Jamo::Vowel { jung_index: 0 }),
        'ㅐ' => Some(Jamo::Vowel { jung_index: 1 }),
        'ㅑ' => Some(Jamo::Vowel { jung_index: 2 }),
        'ㅒ' => Some(Jamo::Vowel { jung_index: 3 }),
        'ㅓ' => Some(Jamo::Vowel { jung_index: 4 }),
        'ㅔ' => Some(Jamo::Vowel { jung_index: 5 }),
        'ㅕ' => Some(Jamo::Vowel { jung_index: 6 }),
        'ㅖ' => Some(Jamo::Vowel { jung_index: 7 }),
        'ㅗ' => Some(Jamo::Vowel { jung_index: 8 }),
        'ㅘ' => Some(Jamo::Vowel { jung_index: 9 }),
        'ㅙ' => Some(Jamo::Vowel { jung_index: 10 }),
        'ㅚ' => Some(Jamo::Vowel { jung_index: 11 }),
        'ㅛ' => Some(Jamo::Vowel { jung_index: 12 }),
        'ㅜ' => Some(Jamo::Vowel { jung_index: 13 }),
        'ㅝ' => Some(Jamo::Vowel { jung_index: 14 }),
        'ㅞ' => Some(Jamo::Vowel { jung_index: 15 }),
        'ㅟ' => Some(Jamo::Vowel { jung_index: 16 }),
        'ㅠ' => Some(Jamo::Vowel { jung_index: 17 }),
        'ㅡ' => Some(Jamo::Vowel { jung_index: 18 }),
        'ㅢ' => Some(Jamo::Vowel { jung_index: 19 }),
        'ㅣ' => Some(Jamo::Vowel { jung_index: 20 }),

        _ => None,
    }
}

/// FSM 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Choseong,
    /// 초성+중성 (한 글자 조합 중)
    ChoseongJungseong,
    /// 초성+중성+종성 (한 글자 조합 중)
    ChoseongJungseongJongseong,
}

/// 자모 조합 FSM
pub struct HangulAssembler {
    state: State,
    /// 현재 초성 인덱스
    choseong: u32,
    /// 현재 중성 인덱스
    jungseong: u32,
    /// 현재 종성 인덱스 (0 = 없음)
    jongseong: u32,
    /// 출력 버퍼
    output: String,
}

impl HangulAssembler {
    pub fn new() -> Self {
        Self {
            state: State::Empty,
            choseong: 0,
            jungseong: 0,
            jongseong: 0,
            output: String::new(),
        }
    }

    /// 자모를 입력하여 상태 전이
    pub fn feed(&mut self, jamo: Jamo) {
        match jamo {
            Jamo::Consonant {
                cho_index,
                jong_index,
            } => {
                self.feed_consonant(cho_index, jong_index);
            }
            Jamo::Vowel { jung_index } => {
                self.feed_vowel(jung_index);
            }
        }
    }

    /// 완성형 음절을 자모 단위로 풀어 입력
    /// 앞뒤 글자와의 재조합(종성 이동 등)을 허용하기 위함
    pub fn feed_syllable(&mut self, cho: u32, jung: u32, jong: u32) {
        self.feed_consonant(cho, choseong_to_jongseong(cho));
        self.feed_vowel(jung);
        if jong == 0 {
            return;
        }
        if let Some((first, second_cho)) = split_jongseong(jong) {
            // 복합 종성: 두 자음을 순서대로 입력
            self.feed_single_jongseong(first);
            self.feed_consonant(second_cho, choseong_to_jongseong(second_cho));
        } else {
            self.feed_single_jongseong(jong);
        }
    }

    /// 단일 종성을 자음으로 입력
    fn feed_single_jongseong(&mut self, jong: u32) {
        if let Some(cho) = jongseong_to_choseong(jong) {
            self.feed_consonant(cho, Some(jong));
        }
    }

    /// 자음 입력 처리
    fn feed_consonant(&mut self, cho_index: u32, jong_index: Option<u32>) {
        match self.state {
            State::Empty => {
                self.choseong = cho_index;
                self.state = State::Choseong;
            }
            State::Choseong => {
                // 기존 초성을 단독 자모로 출력하고 새 초성으로 교체
                if let Some(c) = choseong_char(self.choseong) {
                    self.output.push(c);
                }
                self.choseong = cho_index;
            }
            State::ChoseongJungseong => {
                if let Some(jong) = jong_index {
                    self.jongseong = jong;
                    self.state = State::ChoseongJungseongJongseong;
                } else {
                    // 종성 불가 자음 (ㄸ, ㅃ, ㅉ): 현재 글자 확정 후 새 초성
                    self.flush_current();
                    self.choseong = cho_index;
                    self.state = State::Choseong;
                }
            }
            State::ChoseongJungseongJongseong => {
                // 복합 종성 조합 시도
                if let Some(jong) = jong_index {
                    if let Some(combined) = combine_jongseong(self.jongseong, jong) {
                        self.jongseong = combined;
                    } else {
                        self.flush_current();
                        self.choseong = cho_index;
                        self.state = State::Choseong;
                    }
                } else {
                    self.flush_current();
                    self.choseong = cho_index;
                    self.state = State::Choseong;
                }
            }
        }
    }

    /// 모음 입력 처리
    fn feed_vowel(&mut self, jung_index: u32) {
        match self.state {
            State::Empty => {
                // 모음만 단독 출력
                if let Some(c) = jungseong_char(jung_index) {
                    self.output.push(c);
                }
            }
            State::Choseong => {
                self.jungseong = jung_index;
                self.state = State::ChoseongJungseong;
            }
            State::ChoseongJungseong => {
                // 복합 모음 조합 시도
                if let Some(combined) = combine_jungseong(self.jungseong, jung_index) {
                    self.jungseong = combined;
                } else {
                    self.flush_current();
                    if let Some(c) = jungseong_char(jung_index) {
                        self.output.push(c);
                    }
                    self.state = State::Empty;
                }
            }
            State::ChoseongJungseongJongseong => {
                // 종성을 다음 글자의 초성으로 분리
                if let Some((remaining_jong, next_cho)) = split_jongseong(self.jongseong) {
                    // 복합 종성: 첫 자음은 종성으로 남기고 둘째 자음은 다음 초성
                    self.jongseong = remaining_jong;
                    self.flush_current();
                    self.choseong = next_cho;
                    self.jungseong = jung_index;
                    self.state = State::ChoseongJungseong;
                } else if let Some(next_cho) = jongseong_to_choseong(self.jongseong) {
                    // 단일 종성: 전체를 다음 초성으로
                    self.jongseong = 0;
                    self.flush_current();
                    self.choseong = next_cho;
                    self.jungseong = jung_index;
                    self.state = State::ChoseongJungseong;
                } else {
                    // 이론상 도달하지 않음
                    self.flush_current();
                    if let Some(c) = jungseong_char(jung_index) {
                        self.output.push(c);
                    }
                    self.state = State::Empty;
                }
            }
        }
    }

    /// 현재 조합 중인 글자를 출력 버퍼에 확정
    fn flush_current(&mut self) {
        match self.state {
            State::Empty => {}
            State::Choseong => {
                if let Some(c) = choseong_char(self.choseong) {
                    self.output.push(c);
                }
            }
            State::ChoseongJungseong => {
                if let Some(c) = compose_syllable(self.choseong, self.jungseong, 0) {
                    self.output.push(c);
                }
            }
            State::ChoseongJungseongJongseong => {
                if let Some(c) = compose_syllable(self.choseong, self.jungseong, self.jongseong) {
                    self.output.push(c);
                }
            }
        }
        self.reset_state();
    }

    /// 상태 초기화
    fn reset_state(&mut self) {
        self.state = State::Empty;
        self.choseong = 0;
        self.jungseong = 0;
        self.jongseong = 0;
    }

    /// 조합 불가 문자 처리 (숫자, 특수문자 등)
    pub fn feed_passthrough(&mut self, c: char) {
        self.flush_current();
        self.output.push(c);
    }

    /// 조합 종료 및 최종 결과 반환
    pub fn finish(mut self) -> String {
        self.flush_current();
        self.output
    }
}

impl Default for HangulAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// 낱자모/음절 혼합 문자열을 완성형 문자열로 조합
pub fn assemble(input: &str) -> String {
    let mut fsm = HangulAssembler::new();

    for c in input.chars() {
        if let Some((cho, jung, jong)) = decompose_syllable(c) {
            fsm.feed_syllable(cho, jung, jong);
        } else if let Some(jamo) = map_jamo_char(c) {
            fsm.feed(jamo);
        } else if let Some([a, b]) = compound_consonant(c) {
            // 겹받침 전용 낱자(ㄳ 등)는 구성 자음 두 개로 나눠 입력
            for part in [a, b] {
                if let Some(jamo) = map_jamo_char(part) {
                    fsm.feed(jamo);
                }
            }
        } else {
            fsm.feed_passthrough(c);
        }
    }

    fsm.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_basic() {
        assert_eq!(assemble("ㄱㅏ"), "가");
        assert_eq!(assemble("ㄱㅏㄴㅏㄷㅏ"), "가나다");
        assert_eq!(assemble("ㅎㅏㄴㄱㅡㄹ"), "한글");
    }

    #[test]
    fn test_assemble_jongseong_moves_to_next() {
        // 종성이 될 자음 뒤에 모음이 오면 다음 글자의 초성으로
        assert_eq!(assemble("ㄱㅏㄱㅏ"), "가가");
        assert_eq!(assemble("ㅇㅏㄴㅈㅣ"), "안지");
    }

    #[test]
    fn test_assemble_complex_jungseong() {
        assert_eq!(assemble("ㅇㅗㅣ"), "외"); // ㅗ + ㅣ = ㅚ
        assert_eq!(assemble("ㅇㅘㄴㄹㅛ"), "완료");
        assert_eq!(assemble("ㅇㅢ"), "의");
    }

    #[test]
    fn test_assemble_complex_jongseong() {
        assert_eq!(assemble("ㄷㅏㄹㄱ"), "닭"); // ㄹ + ㄱ = ㄺ
        assert_eq!(assemble("ㄱㅏㅂㅅ"), "값"); // ㅂ + ㅅ = ㅄ
    }

    #[test]
    fn test_assemble_compound_final_char() {
        // 겹받침 낱자는 구성 자음으로 풀려 조합됨
        assert_eq!(assemble("ㄷㅏㄺ"), "닭");
        assert_eq!(assemble("ㄱㅏㅄ"), "값");
    }

    #[test]
    fn test_assemble_precomposed_passthrough() {
        // 이미 완성형인 입력은 그대로
        assert_eq!(assemble("참외"), "참외");
        assert_eq!(assemble("한글"), "한글");
    }

    #[test]
    fn test_assemble_syllable_then_vowel() {
        // 완성형 음절의 종성이 뒤따르는 모음의 초성으로 이동
        assert_eq!(assemble("각ㅣ"), "가기");
        assert_eq!(assemble("닭ㅏ"), "달가"); // ㄺ 분리: ㄹ 남고 ㄱ 이동
    }

    #[test]
    fn test_assemble_consonant_only() {
        assert_eq!(assemble("ㄱ"), "ㄱ");
        assert_eq!(assemble("ㄱㄴ"), "ㄱㄴ");
    }

    #[test]
    fn test_assemble_vowel_only() {
        assert_eq!(assemble("ㅏ"), "ㅏ");
        assert_eq!(assemble("ㅏㅗ"), "ㅏㅗ");
    }

    #[test]
    fn test_assemble_passthrough() {
        assert_eq!(assemble("123"), "123");
        assert_eq!(assemble("ㄱㅏ!ㄴㅏ"), "가!나");
        assert_eq!(assemble("ㄱㅏ ㄴㅏ"), "가 나");
    }

    #[test]
    fn test_assemble_empty() {
        assert_eq!(assemble(""), "");
    }

    #[test]
    fn test_assemble_double_consonant() {
        assert_eq!(assemble("ㄲㅏ"), "까");
        assert_eq!(assemble("ㅆㅏㄴ"), "싼");
        // ㄸ은 종성이 될 수 없으므로 현재 글자 확정 후 새 초성
        assert_eq!(assemble("ㄱㅏㄸㅏ"), "가따");
    }
}
