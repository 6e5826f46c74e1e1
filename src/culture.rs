//! 문화권(언어/로캘) 식별자와 문화권별 대소문자 변환
//!
//! 문화권은 테이블 조회용 키일 뿐이지만, 대소문자 변환만은 문화권에 따라
//! 달라집니다 (터키어/아제르바이잔어의 점 있는 i / 점 없는 ı).

use serde::{Deserialize, Serialize};
use std::fmt;

/// 문화권 식별자 ("en-us", "ru-ru" 등)
///
/// 생성 시 ASCII 소문자로 정규화하므로 `"en-US"`와 `"en-us"`는 같은 키입니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Culture(String);

impl Culture {
    pub fn new(name: impl AsRef<str>) -> Self {
        Culture(name.as_ref().trim().to_ascii_lowercase())
    }

    /// 영어 (미국)
    pub fn en_us() -> Self {
        Culture::new("en-us")
    }

    /// 러시아어 (러시아)
    pub fn ru_ru() -> Self {
        Culture::new("ru-ru")
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// 언어 부분 ("tr-tr" -> "tr")
    pub fn language(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or("")
    }

    /// 점 있는/없는 i 규칙을 쓰는 문화권인지
    fn is_turkic(&self) -> bool {
        matches!(self.language(), "tr" | "az")
    }

    /// 문화권 규칙에 따른 대문자 변환
    ///
    /// 대문자가 여러 글자로 펼쳐지는 문자(ß 등)는 그대로 둡니다.
    pub fn to_upper(&self, c: char) -> char {
        if self.is_turkic() {
            match c {
                'i' => return 'İ',
                'ı' => return 'I',
                _ => {}
            }
        }
        single_char(c.to_uppercase()).unwrap_or(c)
    }

    /// 문화권 규칙에 따른 소문자 변환
    pub fn to_lower(&self, c: char) -> char {
        if self.is_turkic() {
            match c {
                'I' => return 'ı',
                'İ' => return 'i',
                _ => {}
            }
        }
        single_char(c.to_lowercase()).unwrap_or(c)
    }

    /// 대소문자 무시 비교용 키 (대문자로 접기)
    pub fn fold(&self, c: char) -> char {
        self.to_upper(c)
    }

    /// 대소문자 무시 문자 비교
    pub fn eq_ignore_case(&self, a: char, b: char) -> bool {
        self.fold(a) == self.fold(b)
    }
}

fn single_char(mut iter: impl Iterator<Item = char>) -> Option<char> {
    let first = iter.next()?;
    match iter.next() {
        None => Some(first),
        Some(_) => None,
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Culture {
    fn from(name: &str) -> Self {
        Culture::new(name)
    }
}

impl From<String> for Culture {
    fn from(name: String) -> Self {
        Culture::new(name)
    }
}

impl From<Culture> for String {
    fn from(culture: Culture) -> Self {
        culture.0
    }
}
