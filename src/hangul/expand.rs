//! 복합 자모 전개기
//!
//! 분해된 소리 단위 시퀀스에서 복합 자음(겹받침 11종)과 복합 모음(7종)을
//! 구성 자모 두 개로 전개하고 출현 횟수를 센다. 순서 보존 순수 fold.
//!
//! 정책: 쌍자음(ㄲㄸㅃㅆㅉ)과 ㅐㅒㅔㅖ는 시각적으로 복잡해 보여도
//! 단일 단위로 취급하며 복합 카운트를 올리지 않는다. 의도된 콘텐츠 결정.

/// 전개 결과
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expansion {
    /// 전개된 소리 단위 시퀀스 (원래 순서 유지)
    pub units: Vec<char>,
    /// 복합 자음 출현 횟수
    pub complex_consonant_count: usize,
    /// 복합 모음 출현 횟수
    pub complex_vowel_count: usize,
}

/// 복합 자음(겹받침) 전개 테이블 (11종)
pub fn compound_consonant(c: char) -> Option<[char; 2]> {
    match c {
        'ㄳ' => Some(['ㄱ', 'ㅅ']),
        'ㄵ' => Some(['ㄴ', 'ㅈ']),
        'ㄶ' => Some(['ㄴ', 'ㅎ']),
        'ㄺ' => Some(['ㄹ', 'ㄱ']),
        'ㄻ' => Some(['ㄹ', 'ㅁ']),
        'ㄼ' => Some(['ㄹ', 'ㅂ']),
        'ㄽ' => Some(['ㄹ', 'ㅅ']),
        'ㄾ' => Some(['ㄹ', 'ㅌ']),
        'ㄿ' => Some(['ㄹ', 'ㅍ']),
        'ㅀ' => Some(['ㄹ', 'ㅎ']),
        'ㅄ' => Some(['ㅂ', 'ㅅ']),
        _ => None,
    }
}

/// 복합 모음 전개 테이블 (7종)
pub fn compound_vowel(c: char) -> Option<[char; 2]> {
    match c {
        'ㅘ' => Some(['ㅗ', 'ㅏ']),
        'ㅙ' => Some(['ㅗ', 'ㅐ']),
        'ㅚ' => Some(['ㅗ', 'ㅣ']),
        'ㅝ' => Some(['ㅜ', 'ㅓ']),
        'ㅞ' => Some(['ㅜ', 'ㅔ']),
        'ㅟ' => Some(['ㅜ', 'ㅣ']),
        'ㅢ' => Some(['ㅡ', 'ㅣ']),
        _ => None,
    }
}

/// 소리 단위 시퀀스 전개
/// 테이블에 없는 단위는 1단위 그대로 통과하며 카운트되지 않음
pub fn expand(units: &[char]) -> Expansion {
    units.iter().fold(Expansion::default(), |mut acc, &unit| {
        if let Some([a, b]) = compound_consonant(unit) {
            acc.units.push(a);
            acc.units.push(b);
            acc.complex_consonant_count += 1;
        } else if let Some([a, b]) = compound_vowel(unit) {
            acc.units.push(a);
            acc.units.push(b);
            acc.complex_vowel_count += 1;
        } else {
            acc.units.push(unit);
        }
        acc
    })
}
