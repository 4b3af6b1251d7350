//! 한글 자모 테이블 및 음절 인덱스 연산
//!
//! 유니코드 완성형 한글(U+AC00~U+D7A3)은 초성 19 × 중성 21 × 종성 28
//! = 11,172자의 조합으로 구성된다. 이 모듈은 정본 자모 테이블과
//! 인덱스 기반 조합/분해 연산을 제공한다.

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 테이블 (19개, 유니코드 초성 순서)
#[rustfmt::skip]
pub const INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 테이블 (21개, 유니코드 중성 순서)
#[rustfmt::skip]
pub const MEDIALS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 테이블 (28개, 인덱스 0 = 종성 없음)
#[rustfmt::skip]
pub const FINALS: [Option<char>; 28] = [
    None,      Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'),
    Some('ㄶ'), Some('ㄷ'), Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'),
    Some('ㄽ'), Some('ㄾ'), Some('ㄿ'), Some('ㅀ'), Some('ㅁ'), Some('ㅂ'),
    Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'), Some('ㅈ'), Some('ㅊ'),
    Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 초성/중성/종성 인덱스로 완성형 한글 음절 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
/// 완성형 영역 밖의 문자는 None
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_BASE + 11171).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let jongseong = offset % JONGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 두 중성을 복합 모음으로 조합
/// 반환: 복합 모음 인덱스 (조합 불가 시 None)
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (8, 0) => Some(9),    // ㅗ + ㅏ = ㅘ
        (8, 1) => Some(10),   // ㅗ + ㅐ = ㅙ
        (8, 20) => Some(11),  // ㅗ + ㅣ = ㅚ
        (13, 4) => Some(14),  // ㅜ + ㅓ = ㅝ
        (13, 5) => Some(15),  // ㅜ + ㅔ = ㅞ
        (13, 20) => Some(16), // ㅜ + ㅣ = ㅟ
        (18, 20) => Some(19), // ㅡ + ㅣ = ㅢ
        _ => None,
    }
}

/// 두 종성을 복합 종성으로 조합
/// 반환: 복합 종성 인덱스 (조합 불가 시 None)
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (1, 19) => Some(3),   // ㄱ + ㅅ = ㄳ
        (4, 22) => Some(5),   // ㄴ + ㅈ = ㄵ
        (4, 27) => Some(6),   // ㄴ + ㅎ = ㄶ
        (8, 1) => Some(9),    // ㄹ + ㄱ = ㄺ
        (8, 16) => Some(10),  // ㄹ + ㅁ = ㄻ
        (8, 17) => Some(11),  // ㄹ + ㅂ = ㄼ
        (8, 19) => Some(12),  // ㄹ + ㅅ = ㄽ
        (8, 25) => Some(13),  // ㄹ + ㅌ = ㄾ
        (8, 26) => Some(14),  // ㄹ + ㅍ = ㄿ
        (8, 27) => Some(15),  // ㄹ + ㅎ = ㅀ
        (17, 19) => Some(18), // ㅂ + ㅅ = ㅄ
        _ => None,
    }
}

/// 복합 종성을 분리
/// 반환: (남는 종성 인덱스, 분리되는 자음의 초성 인덱스)
pub fn split_jongseong(jong: u32) -> Option<(u32, u32)> {
    match jong {
        3 => Some((1, 9)),   // ㄳ -> ㄱ + ㅅ
        5 => Some((4, 12)),  // ㄵ -> ㄴ + ㅈ
        6 => Some((4, 18)),  // ㄶ -> ㄴ + ㅎ
        9 => Some((8, 0)),   // ㄺ -> ㄹ + ㄱ
        10 => Some((8, 6)),  // ㄻ -> ㄹ + ㅁ
        11 => Some((8, 7)),  // ㄼ -> ㄹ + ㅂ
        12 => Some((8, 9)),  // ㄽ -> ㄹ + ㅅ
        13 => Some((8, 16)), // ㄾ -> ㄹ + ㅌ
        14 => Some((8, 17)), // ㄿ -> ㄹ + ㅍ
        15 => Some((8, 18)), // ㅀ -> ㄹ + ㅎ
        18 => Some((17, 9)), // ㅄ -> ㅂ + ㅅ
        _ => None,
    }
}

/// 단일 종성 인덱스를 같은 자음의 초성 인덱스로 변환
/// 복합 종성(ㄳ 등)은 변환 불가 (split_jongseong 사용)
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    match jong {
        1 => Some(0),   // ㄱ
        2 => Some(1),   // ㄲ
        4 => Some(2),   // ㄴ
        7 => Some(3),   // ㄷ
        8 => Some(5),   // ㄹ
        16 => Some(6),  // ㅁ
        17 => Some(7),  // ㅂ
        19 => Some(9),  // ㅅ
        20 => Some(10), // ㅆ
        21 => Some(11), // ㅇ
        22 => Some(12), // ㅈ
        23 => Some(14), // ㅊ
        24 => Some(15), // ㅋ
        25 => Some(16), // ㅌ
        26 => Some(17), // ㅍ
        27 => Some(18), // ㅎ
        _ => None,
    }
}

/// 초성 인덱스를 같은 자음의 종성 인덱스로 변환
/// ㄸ(4), ㅃ(8), ㅉ(13)은 종성이 될 수 없으므로 None
pub fn choseong_to_jongseong(cho: u32) -> Option<u32> {
    match cho {
        0 => Some(1),   // ㄱ
        1 => Some(2),   // ㄲ
        2 => Some(4),   // ㄴ
        3 => Some(7),   // ㄷ
        5 => Some(8),   // ㄹ
        6 => Some(16),  // ㅁ
        7 => Some(17),  // ㅂ
        9 => Some(19),  // ㅅ
        10 => Some(20), // ㅆ
        11 => Some(21), // ㅇ
        12 => Some(22), // ㅈ
        14 => Some(23), // ㅊ
        15 => Some(24), // ㅋ
        16 => Some(25), // ㅌ
        17 => Some(26), // ㅍ
        18 => Some(27), // ㅎ
        _ => None,
    }
}

/// 초성 인덱스에 해당하는 호환용 자모 문자
pub fn choseong_char(cho: u32) -> Option<char> {
    INITIALS.get(cho as usize).copied()
}

/// 중성 인덱스에 해당하는 호환용 자모 문자
pub fn jungseong_char(jung: u32) -> Option<char> {
    MEDIALS.get(jung as usize).copied()
}

/// 종성 인덱스에 해당하는 호환용 자모 문자 (0 = 없음)
pub fn jongseong_char(jong: u32) -> Option<char> {
    FINALS.get(jong as usize).copied().flatten()
}
