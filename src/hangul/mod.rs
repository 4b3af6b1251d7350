//! 한글 음운 분석 엔진
//!
//! 단어 텍스트를 소리 단위로 분해·전개하여 난이도 선별에 쓰이는
//! 음운 프로필을 만드는 순수 변환 파이프라인:
//!
//! 1. **분해** (`decompose`): 음절 -> (초성, 중성, 종성), 영역 밖 문자는 통과
//! 2. **전개** (`expand`): 복합 자음 11종 / 복합 모음 7종을 구성 자모로 전개
//! 3. **분류** (`classify`): length / count / 복합 플래그 집계
//!
//! 부가적으로 낱자모 입력을 완성형으로 재조합하는 조합기(`assembler`)와
//! 등록 가능 단어 검증(`validator`)을 제공한다.
//!
//! 모든 연산은 불변 정적 테이블만 참조하는 순수 함수로, 잠금 없이
//! 여러 스레드에서 동시에 호출해도 안전하다.

pub mod assembler;
pub mod classify;
pub mod decompose;
pub mod expand;
pub mod jamo;
pub mod validator;

pub use assembler::{assemble, HangulAssembler};
pub use classify::{classify, WordProfile};
pub use decompose::{decompose_char, decompose_word, Decomposed};
pub use expand::{expand, Expansion};
pub use validator::is_quiz_word;
