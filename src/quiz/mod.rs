//! 퀴즈 난이도 구성
//!
//! 난이도 단계를 고정 프로필(길이/단위 수 범위, 복합 자모 제약,
//! 최대 시도 횟수)로 사상한다. 프로필은 프로세스 시작 시 한 번
//! 구성되는 불변 정적 테이블이며, 단어 풀 질의의 선별 술어와
//! 새 단어 프로필 검증 양쪽에서 소비된다.

pub mod difficulty;

pub use difficulty::{profile_for, ComplexityRule, Difficulty, DifficultyProfile};
