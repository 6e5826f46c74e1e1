//! 자판 매핑 및 문자 단위 투영
//!
//! 다른 자판 상태로 입력된 문자열을 문자 하나씩 올바른 자판의 문자로 옮깁니다.
//!
//! ```
//! use relayout::layout::{en_us_to_ru_ru, project};
//!
//! let map = en_us_to_ru_ru();
//! assert_eq!(project("Ghbdtn", &map).text(), "Привет");
//! assert!(!project("Vf34", &map).is_succeeded());
//! ```

mod builtin;
mod map;
mod projector;

pub use builtin::en_us_to_ru_ru;
pub use map::LayoutMap;
pub use projector::{project, to_same_shift, LayoutProjector};
