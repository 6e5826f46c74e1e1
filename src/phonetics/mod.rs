//! 트라이그램 빈도 기반 언어 판정
//!
//! 문자열이 특정 문화권의 언어처럼 "들리는지"를 판정합니다.
//!
//! # 개요
//!
//! 1. **빈도 테이블**: 바이그램 -> 다음 글자 확률 (`FrequencyTable`)
//! 2. **판정**: 모든 트라이그램의 확률을 확인 (`PhoneticProbe`)
//!    - 3글자 미만: `Verdict::Indeterminate`
//!    - 확률 0 트라이그램 존재: `Verdict::Unlikely`
//!    - 그 외: `Verdict::Likely`
//!
//! # 사용 예시
//!
//! ```
//! use relayout::phonetics::{probe, FrequencyTable, Verdict};
//!
//! let table = FrequencyTable::en_us().unwrap();
//! assert_eq!(probe("Hello", &table), Verdict::Likely);
//! assert_eq!(probe("Ghbdtn", &table), Verdict::Unlikely); // "Привет"
//! ```

mod probe;
mod table;

// 공개 인터페이스
pub use probe::{probe, PhoneticProbe, Verdict, MIN_PROBE_LEN, ZERO_TOLERANCE};
pub use table::FrequencyTable;
