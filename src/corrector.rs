//! 잘못된 자판 입력 감지 및 교정
//!
//! 2단계로 동작합니다:
//! 1. 원본 문화권의 빈도 테이블로 판정 (`phonetics`)
//! 2. `Verdict::Unlikely`일 때만 대상 자판으로 투영 (`layout`)
//!
//! `Likely`(이미 원본 언어처럼 보임)와 `Indeterminate`(판단 근거 부족)는
//! 모두 교정하지 않습니다.

use std::sync::Arc;

use crate::culture::Culture;
use crate::error::{LangError, Result};
use crate::layout::LayoutProjector;
use crate::phonetics::{PhoneticProbe, Verdict};
use crate::registry::Registry;
use crate::result::TextResult;

/// 자판 교정기
///
/// 등록소를 `Arc`로 공유하므로 복제 비용이 작고, 여러 스레드에서 동시에 써도 됩니다.
#[derive(Debug, Clone)]
pub struct LayoutCorrector {
    registry: Arc<Registry>,
}

impl LayoutCorrector {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// 내장 데이터로 교정기 생성
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(Registry::builtin()?)))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// 문자열이 해당 문화권의 언어처럼 들리는지 판정
    ///
    /// 빈도 테이블이 없는 문화권이면 `LangError::UnsupportedCulture`
    pub fn sounds_like(&self, text: &str, culture: &Culture) -> Result<Verdict> {
        let table = self.registry.frequency_table(culture)?;
        Ok(PhoneticProbe::new(table).probe(text))
    }

    /// 문자 단위로 원본 자판 -> 대상 자판 투영
    ///
    /// 매핑이 없는 쌍이면 `LangError::UnsupportedLayout`,
    /// 매핑 없는 문자가 있으면 `Ok(TextResult::failure())`
    pub fn try_map_layout(&self, text: &str, from: &Culture, to: &Culture) -> Result<TextResult> {
        let map = self.registry.layout_map(from, to)?;
        Ok(LayoutProjector::new(map).project(text))
    }

    /// 원본 문화권 언어처럼 들리지 않으면 대상 자판으로 교정
    ///
    /// # Examples
    /// ```
    /// use relayout::{Culture, LayoutCorrector};
    ///
    /// let corrector = LayoutCorrector::builtin().unwrap();
    /// let (en, ru) = (Culture::en_us(), Culture::ru_ru());
    ///
    /// let fixed = corrector.correct_layout("Ghbdtn", &en, &ru).unwrap();
    /// assert_eq!(fixed.text(), "Привет");
    ///
    /// // 이미 영어처럼 보임
    /// assert!(!corrector.correct_layout("Hello", &en, &ru).unwrap().is_succeeded());
    /// ```
    pub fn correct_layout(&self, text: &str, from: &Culture, to: &Culture) -> Result<TextResult> {
        let verdict = self.sounds_like(text, from)?;

        match verdict {
            Verdict::Likely | Verdict::Indeterminate => {
                log::debug!("'{}': {} ({}) -> 교정하지 않음", text, verdict, from);
                Ok(TextResult::failure())
            }
            Verdict::Unlikely => self.try_map_layout(text, from, to),
        }
    }

    /// `correct_layout`의 비동기 버전
    ///
    /// tokio 블로킹 풀에서 계산만 옮겨 실행합니다. 취소/재시도는 없습니다.
    pub async fn correct_layout_async(
        &self,
        text: impl Into<String>,
        from: Culture,
        to: Culture,
    ) -> Result<TextResult> {
        let corrector = self.clone();
        let text = text.into();

        tokio::task::spawn_blocking(move || corrector.correct_layout(&text, &from, &to))
            .await
            .map_err(|e| LangError::Task(e.to_string()))?
    }
}
