//! 단어 등록/선택 계층
//!
//! 음운 분석 엔진의 출력(WordProfile)을 단어 풀과 사전 협력자에
//! 연결한다. 저장소와 사전은 트레이트로 추상화되며, 엔진은 호출
//! 가능하다는 것만 요구한다.

pub mod dictionary;
pub mod entry;
pub mod repository;
pub mod service;

pub use dictionary::{DictionaryError, DictionaryProvider, MemoryDictionary};
pub use entry::{Definition, WordEntry};
pub use repository::{MemoryWordPool, WordRepository};
pub use service::{WordError, WordService};
