pub mod config;
pub mod corrector;
pub mod culture;
pub mod error;
pub mod layout;
pub mod phonetics;
pub mod registry;
pub mod result;

pub use corrector::LayoutCorrector;
pub use culture::Culture;
pub use error::{LangError, Result};
pub use phonetics::Verdict;
pub use registry::Registry;
pub use result::TextResult;

use lazy_static::lazy_static;

lazy_static! {
    /// 내장 데이터로 만든 공용 교정기 (최초 사용 시 한 번 생성, 이후 읽기 전용)
    static ref BUILTIN: std::result::Result<LayoutCorrector, String> =
        LayoutCorrector::builtin().map_err(|e| e.to_string());
}

/// 내장 데이터 공용 교정기
pub fn builtin() -> Result<&'static LayoutCorrector> {
    BUILTIN.as_ref().map_err(|e| LangError::Config(e.clone()))
}

/// 내장 데이터 기준 `LayoutCorrector::sounds_like`
pub fn sounds_like(text: &str, culture: &Culture) -> Result<Verdict> {
    builtin()?.sounds_like(text, culture)
}

/// 내장 데이터 기준 `LayoutCorrector::try_map_layout`
pub fn try_map_layout(text: &str, from: &Culture, to: &Culture) -> Result<TextResult> {
    builtin()?.try_map_layout(text, from, to)
}

/// 내장 데이터 기준 `LayoutCorrector::correct_layout`
pub fn correct_layout(text: &str, from: &Culture, to: &Culture) -> Result<TextResult> {
    builtin()?.correct_layout(text, from, to)
}

/// 내장 데이터 기준 `LayoutCorrector::correct_layout_async`
pub async fn correct_layout_async(
    text: impl Into<String>,
    from: Culture,
    to: Culture,
) -> Result<TextResult> {
    builtin()?.correct_layout_async(text, from, to).await
}
