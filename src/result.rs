//! 변환 결과 값

/// 자판 변환 결과
///
/// 실패한 결과의 텍스트는 항상 빈 문자열입니다 (부분 변환 결과를 노출하지 않음).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextResult {
    succeeded: bool,
    text: String,
}

impl TextResult {
    /// 성공 결과
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            text: text.into(),
        }
    }

    /// 실패 결과 (빈 텍스트)
    pub fn failure() -> Self {
        Self {
            succeeded: false,
            text: String::new(),
        }
    }

    pub fn is_succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 성공이면 `Some(text)`
    pub fn into_option(self) -> Option<String> {
        self.succeeded.then_some(self.text)
    }
}

impl From<TextResult> for (bool, String) {
    fn from(result: TextResult) -> Self {
        (result.succeeded, result.text)
    }
}
