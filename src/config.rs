//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::culture::Culture;
use crate::error::{LangError, Result};

/// relayout 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RelayoutConfig {
    /// 잘못 입력된 자판의 문화권 (판정 기준 언어)
    #[serde(default = "default_source_culture")]
    pub source_culture: Culture,
    /// 변환 대상 자판의 문화권
    #[serde(default = "default_target_culture")]
    pub target_culture: Culture,
    /// 내장 테이블 외에 추가로 등록할 빈도 테이블
    #[serde(default)]
    pub frequency_tables: Vec<TableSource>,
}

/// 파일에서 읽을 빈도 테이블
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TableSource {
    pub culture: Culture,
    pub path: PathBuf,
}

fn default_source_culture() -> Culture {
    Culture::en_us()
}

fn default_target_culture() -> Culture {
    Culture::ru_ru()
}

impl Default for RelayoutConfig {
    fn default() -> Self {
        Self {
            source_culture: default_source_culture(),
            target_culture: default_target_culture(),
            frequency_tables: Vec::new(),
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/relayout/config.json (없으면 ~/.config)
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(PathBuf::from)
                .filter(|p| p.is_absolute() && p.is_dir())
                .map(|home| home.join(".config"))
        })
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("relayout").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> RelayoutConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &std::path::Path) -> RelayoutConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            RelayoutConfig::default()
        }),
        Err(_) => RelayoutConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &RelayoutConfig) -> Result<()> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &RelayoutConfig, path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| LangError::Config(format!("직렬화 실패: {}", e)))?;
    fs::write(path, json)?;
    Ok(())
}
