//! 에러 타입
//!
//! 설정 오류(지원하지 않는 문화권/자판 쌍)와 리소스 로드 오류를 표현합니다.
//! 변환 불가 문자는 에러가 아니라 `TextResult::failure()`로 전달됩니다.

use thiserror::Error;

use crate::culture::Culture;

/// relayout 에러
#[derive(Error, Debug)]
pub enum LangError {
    /// 빈도 테이블이 등록되지 않은 문화권
    #[error("지원하지 않는 문화권: {0}")]
    UnsupportedCulture(Culture),

    /// 자판 매핑이 등록되지 않은 문화권 쌍
    #[error("지원하지 않는 자판 쌍: {from} -> {to}")]
    UnsupportedLayout { from: Culture, to: Culture },

    /// 빈도 테이블 리소스 형식 오류 (line은 1부터 시작)
    #[error("빈도 테이블 형식 오류 ({line}행): {message}")]
    TableFormat { line: usize, message: String },

    /// 파일 읽기/쓰기 실패
    #[error("I/O 오류: {0}")]
    Io(#[from] std::io::Error),

    /// 설정 파일 오류
    #[error("설정 오류: {0}")]
    Config(String),

    /// 비동기 작업 실패
    #[error("비동기 작업 실패: {0}")]
    Task(String),
}

impl LangError {
    /// 호출자 설정 문제(등록되지 않은 문화권/자판 쌍)인지 확인
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            LangError::UnsupportedCulture(_) | LangError::UnsupportedLayout { .. }
        )
    }

    pub(crate) fn table_format(line: usize, message: impl Into<String>) -> Self {
        LangError::TableFormat {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LangError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unsupported() {
        assert!(LangError::UnsupportedCulture(Culture::new("ru-ru")).is_unsupported());
        assert!(LangError::UnsupportedLayout {
            from: Culture::new("en-us"),
            to: Culture::new("de-de"),
        }
        .is_unsupported());
        assert!(!LangError::table_format(3, "bad").is_unsupported());
        assert!(!LangError::Task("join".into()).is_unsupported());
    }

    #[test]
    fn test_display_contains_culture() {
        let err = LangError::UnsupportedLayout {
            from: Culture::new("en-US"),
            to: Culture::new("ru-RU"),
        };
        let text = err.to_string();
        assert!(text.contains("en-us"));
        assert!(text.contains("ru-ru"));
    }
}
