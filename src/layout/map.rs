//! 대소문자 무시 문자 매핑 테이블

use std::collections::HashMap;

use crate::culture::Culture;

/// 원본 자판 문자 -> 대상 자판 문자 매핑
///
/// 키는 원본 문화권 규칙으로 대문자로 접어서 저장하므로 `'g'`와 `'G'`는 같은 키입니다.
/// 값은 등록된 그대로(정규형) 저장합니다.
#[derive(Debug, Clone)]
pub struct LayoutMap {
    /// 키 비교에 사용하는 원본 문화권
    culture: Culture,
    /// 접힌 키 -> 대상 문자
    entries: HashMap<char, char>,
}

impl LayoutMap {
    /// 빈 매핑 생성
    pub fn new(culture: Culture) -> Self {
        Self {
            culture,
            entries: HashMap::new(),
        }
    }

    /// 매핑 목록으로 생성
    pub fn with_pairs(culture: Culture, pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        let mut map = Self::new(culture);
        for (from, to) in pairs {
            map.insert(from, to);
        }
        map
    }

    /// 매핑 추가. 대소문자만 다른 키가 이미 있으면 교체하고 이전 값 반환
    pub fn insert(&mut self, from: char, to: char) -> Option<char> {
        let key = self.culture.fold(from);
        let previous = self.entries.insert(key, to);
        if let Some(prev) = previous {
            log::warn!("자판 매핑 키 '{}' 중복: '{}' -> '{}'", from, prev, to);
        }
        previous
    }

    /// 대소문자 무시 조회
    pub fn get(&self, c: char) -> Option<char> {
        self.entries.get(&self.culture.fold(c)).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.get(c).is_some()
    }

    /// 키 비교에 사용하는 원본 문화권
    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_get() {
        let map = LayoutMap::with_pairs(Culture::en_us(), [('g', 'п'), ('[', 'х')]);
        assert_eq!(map.get('g'), Some('п'));
        assert_eq!(map.get('G'), Some('п'));
        assert_eq!(map.get('['), Some('х'));
        // '{'는 '['의 대문자가 아님
        assert_eq!(map.get('{'), None);
        assert!(!map.contains('3'));
    }

    #[test]
    fn test_insert_replaces_case_variant() {
        let mut map = LayoutMap::new(Culture::en_us());
        assert_eq!(map.insert('a', 'ф'), None);
        assert_eq!(map.insert('A', 'Ф'), Some('ф'));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get('a'), Some('Ф'));
    }

    #[test]
    fn test_turkic_folding() {
        let map = LayoutMap::with_pairs(Culture::new("tr-tr"), [('i', 'x')]);
        assert_eq!(map.get('İ'), Some('x'));
        // 터키어에서 'I'는 'ı'의 대문자
        assert_eq!(map.get('I'), None);
    }
}
