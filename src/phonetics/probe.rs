//! 트라이그램 기반 음성적 타당성 판정
//!
//! 슬라이딩 윈도우로 모든 트라이그램을 검사하여, 확률이 0인 트라이그램이
//! 하나라도 있으면 해당 언어답지 않다고 판정합니다. 스무딩이나 정규화는 하지 않습니다.

use super::table::FrequencyTable;

/// 판정에 필요한 최소 글자 수 (트라이그램 1개)
pub const MIN_PROBE_LEN: usize = 3;

/// 이 값보다 작은 확률은 0으로 취급
pub const ZERO_TOLERANCE: f64 = 0.000001;

/// 판정 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// 해당 언어처럼 들림
    Likely,
    /// 해당 언어답지 않음 (확률 0 트라이그램 존재)
    Unlikely,
    /// 판단 불가 (너무 짧음)
    Indeterminate,
}

impl Verdict {
    /// 판정이 내려졌는지 (Indeterminate가 아닌지)
    pub fn is_decided(&self) -> bool {
        !matches!(self, Verdict::Indeterminate)
    }

    /// `Some(true)` = Likely, `Some(false)` = Unlikely, `None` = Indeterminate
    pub fn as_option(&self) -> Option<bool> {
        match self {
            Verdict::Likely => Some(true),
            Verdict::Unlikely => Some(false),
            Verdict::Indeterminate => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Verdict::Likely => "likely",
            Verdict::Unlikely => "unlikely",
            Verdict::Indeterminate => "indeterminate",
        };
        f.write_str(name)
    }
}

/// 빈도 테이블 하나에 대한 판정기
#[derive(Debug, Clone, Copy)]
pub struct PhoneticProbe<'a> {
    table: &'a FrequencyTable,
}

impl<'a> PhoneticProbe<'a> {
    pub fn new(table: &'a FrequencyTable) -> Self {
        Self { table }
    }

    /// 문자열이 테이블의 언어처럼 들리는지 판정
    ///
    /// # Examples
    /// ```
    /// use relayout::phonetics::{FrequencyTable, PhoneticProbe, Verdict};
    ///
    /// let table = FrequencyTable::en_us().unwrap();
    /// let probe = PhoneticProbe::new(&table);
    /// assert_eq!(probe.probe("Hello"), Verdict::Likely);
    /// assert_eq!(probe.probe("Ghbdtn"), Verdict::Unlikely);
    /// assert_eq!(probe.probe("Gh"), Verdict::Indeterminate);
    /// ```
    pub fn probe(&self, text: &str) -> Verdict {
        let chars: Vec<char> = text.chars().collect();

        if chars.len() < MIN_PROBE_LEN {
            return Verdict::Indeterminate;
        }

        for window in chars.windows(3) {
            let p = self.table.probability(window[0], window[1], window[2]);
            if p.abs() < ZERO_TOLERANCE {
                log::debug!(
                    "'{}': 트라이그램 {}{}{} 확률 0 -> unlikely",
                    text,
                    window[0],
                    window[1],
                    window[2]
                );
                return Verdict::Unlikely;
            }
        }

        Verdict::Likely
    }
}

/// `PhoneticProbe::new(table).probe(text)` 축약형
pub fn probe(text: &str, table: &FrequencyTable) -> Verdict {
    PhoneticProbe::new(table).probe(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_us() -> FrequencyTable {
        FrequencyTable::en_us().unwrap()
    }

    #[test]
    fn test_short_text_is_indeterminate() {
        let table = en_us();
        for text in ["", "a", "Gh", "zz", "ж1"] {
            assert_eq!(probe(text, &table), Verdict::Indeterminate, "{:?}", text);
        }
    }

    #[test]
    fn test_english_words_are_likely() {
        let table = en_us();
        for word in ["Hello", "hello", "HELLO", "World", "Keyboard", "layout", "Testing"] {
            assert_eq!(probe(word, &table), Verdict::Likely, "{}", word);
        }
    }

    #[test]
    fn test_wrong_layout_is_unlikely() {
        let table = en_us();
        // Привет, Спасибо, Завтра, солнце
        for word in ["Ghbdtn", "Cgfcb,j", "Pfdnhf", "cjkywt"] {
            assert_eq!(probe(word, &table), Verdict::Unlikely, "{}", word);
        }
    }

    #[test]
    fn test_non_letters_are_unlikely() {
        let table = en_us();
        // 공백, 숫자는 테이블 범위 밖 -> 확률 0
        assert_eq!(probe("he llo", &table), Verdict::Unlikely);
        assert_eq!(probe("abc123", &table), Verdict::Unlikely);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::default();
        assert_eq!(probe("Hello", &table), Verdict::Unlikely);
        assert_eq!(probe("He", &table), Verdict::Indeterminate);
    }

    #[test]
    fn test_near_zero_probability() {
        let table = FrequencyTable::parse("a b;0.0000001;0.5\nb b;0.5\n").unwrap();
        // abb = 0.5, bba = 0.5
        assert_eq!(probe("abba", &table), Verdict::Likely);
        // aba = 1e-7 < tolerance
        assert_eq!(probe("aba", &table), Verdict::Unlikely);
    }

    #[test]
    fn test_verdict_helpers() {
        assert_eq!(Verdict::Likely.as_option(), Some(true));
        assert_eq!(Verdict::Unlikely.as_option(), Some(false));
        assert_eq!(Verdict::Indeterminate.as_option(), None);
        assert!(!Verdict::Indeterminate.is_decided());
        assert_eq!(Verdict::Unlikely.to_string(), "unlikely");
    }
}
