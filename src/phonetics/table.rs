//! 트라이그램 빈도 테이블 로드 및 확률 조회
//!
//! 바이그램(앞 두 글자) -> 다음 글자 확률 벡터 형태의 테이블입니다.
//!
//! # 리소스 형식
//! 한 줄에 바이그램 하나씩:
//! ```text
//! h e;0.0413;0.0021;...;0.0009
//! ```
//! 0번째, 2번째 문자가 키이고 3번째 문자부터 `;`로 나눈 값이 확률 벡터입니다.
//! 첫 `;` 앞의 빈 칸이 0번 슬롯이므로 `a`는 1번, `z`는 26번 슬롯입니다.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::{LangError, Result};

/// 컴파일 시 포함되는 영어(en-us) 빈도 테이블
const STAT_EN_US: &str = include_str!("../../data/stat_en_us.txt");

/// 소문자 알파벳 개수 (a..=z)
const ALPHABET_LEN: usize = 26;

/// 트라이그램 빈도 테이블
///
/// 한 번 생성된 뒤에는 읽기 전용입니다.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// (첫 번째 문자, 두 번째 문자) -> 슬롯별 확률 (0번 슬롯은 비어 있음)
    digrams: HashMap<(char, char), Vec<f64>>,
}

impl FrequencyTable {
    /// 내장 영어 테이블
    pub fn en_us() -> Result<Self> {
        Self::parse(STAT_EN_US)
    }

    /// 파일에서 테이블 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let table = Self::parse(&content)?;
        log::debug!(
            "빈도 테이블 로드: {} ({}개 바이그램)",
            path.as_ref().display(),
            table.len()
        );
        Ok(table)
    }

    /// 리소스 문자열 파싱
    pub fn parse(content: &str) -> Result<Self> {
        let mut digrams = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let chars: Vec<char> = line.chars().collect();
            if chars.len() < 3 {
                return Err(LangError::table_format(line_no, "바이그램 키가 없습니다"));
            }

            let key = (fold(chars[0]), fold(chars[2]));
            let rest: String = chars[3..].iter().collect();

            let mut slots = Vec::with_capacity(ALPHABET_LEN + 1);
            for field in rest.trim().split(';') {
                let field = field.trim();
                if field.is_empty() {
                    slots.push(0.0);
                    continue;
                }
                let value = field.parse::<f64>().map_err(|e| {
                    LangError::table_format(line_no, format!("잘못된 확률값 '{}': {}", field, e))
                })?;
                slots.push(value);
            }

            if digrams.insert(key, slots).is_some() {
                return Err(LangError::table_format(
                    line_no,
                    format!("중복된 바이그램: {}{}", key.0, key.1),
                ));
            }
        }

        Ok(Self { digrams })
    }

    /// 말뭉치에서 테이블 학습
    ///
    /// ASCII 알파벳 연속 구간을 단어로 보고, 단어 안의 트라이그램만 셉니다.
    /// P(z | xy) = C(xyz) / C(xy·)
    pub fn train(corpus: &str) -> Self {
        let mut trigram_counts: HashMap<(char, char), [u64; ALPHABET_LEN]> = HashMap::new();

        for word in corpus.split(|c: char| !c.is_ascii_alphabetic()) {
            let chars: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
            for window in chars.windows(3) {
                let counts = trigram_counts
                    .entry((window[0], window[1]))
                    .or_insert([0; ALPHABET_LEN]);
                counts[(window[2] as u8 - b'a') as usize] += 1;
            }
        }

        let digrams = trigram_counts
            .into_iter()
            .map(|(key, counts)| {
                let total: u64 = counts.iter().sum();
                let mut slots = Vec::with_capacity(ALPHABET_LEN + 1);
                slots.push(0.0);
                slots.extend(counts.iter().map(|&n| n as f64 / total as f64));
                (key, slots)
            })
            .collect();

        Self { digrams }
    }

    /// 리소스 형식으로 직렬화 (바이그램 순 정렬)
    pub fn to_resource(&self) -> String {
        let sorted: BTreeMap<_, _> = self.digrams.iter().collect();
        let mut out = String::new();

        for ((first, second), slots) in sorted {
            out.push(*first);
            out.push(' ');
            out.push(*second);
            for value in slots.iter().skip(1) {
                out.push(';');
                out.push_str(&value.to_string());
            }
            out.push('\n');
        }

        out
    }

    /// 트라이그램 확률
    ///
    /// 바이그램이 없거나 세 번째 문자가 범위를 벗어나면 0.0
    pub fn probability(&self, first: char, second: char, third: char) -> f64 {
        let Some(slots) = self.digrams.get(&(fold(first), fold(second))) else {
            return 0.0;
        };

        let pos = fold(third) as i64 - 'a' as i64 + 1;
        if pos < 0 || pos as usize >= slots.len() {
            return 0.0;
        }

        slots[pos as usize]
    }

    /// 바이그램 등록 여부
    pub fn contains_digram(&self, first: char, second: char) -> bool {
        self.digrams.contains_key(&(fold(first), fold(second)))
    }

    /// 바이그램 수
    pub fn len(&self) -> usize {
        self.digrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digrams.is_empty()
    }
}

/// 키 비교용 소문자 변환 (문화권 무관)
fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
