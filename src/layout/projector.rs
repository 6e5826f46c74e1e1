//! 문자 단위 자판 투영
//!
//! 각 문자를 매핑 테이블로 변환하고, 원래 문자의 대소문자(Shift 상태)를
//! 변환된 문자에 옮깁니다. 매핑 없는 문자가 하나라도 있으면 전체가 실패합니다.

use super::map::LayoutMap;
use crate::culture::Culture;
use crate::result::TextResult;

/// `source`의 Shift 상태를 `sample`과 같게 맞춤
///
/// - `sample`이 대문자 알파벳: 대문자로
/// - `sample`이 소문자 알파벳: 소문자로
/// - `sample`이 알파벳이 아님: 그대로
///
/// # Examples
/// ```
/// use relayout::culture::Culture;
/// use relayout::layout::to_same_shift;
///
/// let en = Culture::en_us();
/// assert_eq!(to_same_shift('п', 'G', &en), 'П');
/// assert_eq!(to_same_shift('Ё', '`', &en), 'Ё');
/// ```
pub fn to_same_shift(source: char, sample: char, culture: &Culture) -> char {
    if !sample.is_alphabetic() {
        return source;
    }

    if sample.is_uppercase() {
        culture.to_upper(source)
    } else {
        culture.to_lower(source)
    }
}

/// 매핑 테이블 하나에 대한 투영기
#[derive(Debug, Clone, Copy)]
pub struct LayoutProjector<'a> {
    map: &'a LayoutMap,
}

impl<'a> LayoutProjector<'a> {
    pub fn new(map: &'a LayoutMap) -> Self {
        Self { map }
    }

    /// 문자열 전체를 대상 자판으로 투영
    pub fn project(&self, text: &str) -> TextResult {
        let culture = self.map.culture();
        let mut result = String::with_capacity(text.len() * 2);

        for c in text.chars() {
            match self.map.get(c) {
                Some(mapped) => result.push(to_same_shift(mapped, c, culture)),
                None => {
                    log::debug!("'{}': 매핑 없는 문자 {:?} -> 투영 중단", text, c);
                    return TextResult::failure();
                }
            }
        }

        TextResult::success(result)
    }
}

/// `LayoutProjector::new(map).project(text)` 축약형
pub fn project(text: &str, map: &LayoutMap) -> TextResult {
    LayoutProjector::new(map).project(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::builtin::en_us_to_ru_ru;

    #[test]
    fn test_full_keyboard() {
        let map = en_us_to_ru_ru();
        let result = project("f,dult`;pbqrkvyjghcnea[wxioms]'.z~{}:\"<>", &map);
        assert!(result.is_succeeded());
        assert_eq!(
            result.text(),
            "абвгдеёжзийклмнопрстуфхцчшщьыъэюяЁХЪЖЭБЮ"
        );
    }

    #[test]
    fn test_shift_state_transfer() {
        let map = en_us_to_ru_ru();
        assert_eq!(project("Ghbdtn", &map).text(), "Привет");
        assert_eq!(project("GHBDTN", &map).text(), "ПРИВЕТ");
        assert_eq!(project("gHbDtN", &map).text(), "пРиВеТ");
    }

    #[test]
    fn test_symbols_keep_mapped_case() {
        let map = en_us_to_ru_ru();
        // 기호는 입력에 대소문자가 없으므로 매핑된 값 그대로
        assert_eq!(project("`~", &map).text(), "ёЁ");
        assert_eq!(project("<,", &map).text(), "Бб");
    }

    #[test]
    fn test_unmappable_fails_without_partial() {
        let map = en_us_to_ru_ru();
        let result = project("Vf34", &map);
        assert!(!result.is_succeeded());
        assert_eq!(result.text(), "");

        // 공백도 매핑 없음
        assert!(!project("Ghbdtn vbh", &map).is_succeeded());
    }

    #[test]
    fn test_empty_text() {
        let map = en_us_to_ru_ru();
        let result = project("", &map);
        assert!(result.is_succeeded());
        assert_eq!(result.text(), "");
    }

    #[test]
    fn test_to_same_shift() {
        let en = Culture::en_us();
        assert_eq!(to_same_shift('п', 'G', &en), 'П');
        assert_eq!(to_same_shift('П', 'g', &en), 'п');
        assert_eq!(to_same_shift('Ё', '~', &en), 'Ё');
        assert_eq!(to_same_shift('ё', '`', &en), 'ё');
        // 문화권별 대문자
        let tr = Culture::new("tr-tr");
        assert_eq!(to_same_shift('i', 'A', &tr), 'İ');
    }

    #[test]
    fn test_deterministic() {
        let map = en_us_to_ru_ru();
        let first = project("Rkfdbfnehf", &map);
        for _ in 0..10 {
            assert_eq!(project("Rkfdbfnehf", &map), first);
        }
        assert_eq!(first.text(), "Клавиатура");
    }
}
