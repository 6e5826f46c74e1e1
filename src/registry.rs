//! 문화권별 빈도 테이블과 자판 매핑 등록소
//!
//! 프로세스 시작 시 한 번 구성한 뒤 `Arc`로 공유하며, 이후에는 변경하지 않습니다.

use std::collections::HashMap;

use crate::config::RelayoutConfig;
use crate::culture::Culture;
use crate::error::{LangError, Result};
use crate::layout::{en_us_to_ru_ru, LayoutMap};
use crate::phonetics::FrequencyTable;

/// 읽기 전용 등록소
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// 문화권 -> 빈도 테이블
    tables: HashMap<Culture, FrequencyTable>,
    /// (원본 문화권, 대상 문화권) -> 자판 매핑
    layouts: HashMap<(Culture, Culture), LayoutMap>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// 내장 데이터: en-us 빈도 테이블, en-us -> ru-ru 매핑
    pub fn builtin() -> Result<Self> {
        Ok(Self::builder()
            .with_table(Culture::en_us(), FrequencyTable::en_us()?)
            .with_layout(Culture::en_us(), Culture::ru_ru(), en_us_to_ru_ru())
            .build())
    }

    /// 내장 데이터 + 설정 파일에 지정된 추가 빈도 테이블
    pub fn from_config(config: &RelayoutConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .with_table(Culture::en_us(), FrequencyTable::en_us()?)
            .with_layout(Culture::en_us(), Culture::ru_ru(), en_us_to_ru_ru());

        for source in &config.frequency_tables {
            let table = FrequencyTable::load(&source.path)?;
            builder = builder.with_table(source.culture.clone(), table);
        }

        Ok(builder.build())
    }

    /// 문화권의 빈도 테이블
    pub fn frequency_table(&self, culture: &Culture) -> Result<&FrequencyTable> {
        self.tables
            .get(culture)
            .ok_or_else(|| LangError::UnsupportedCulture(culture.clone()))
    }

    /// 문화권 쌍의 자판 매핑
    pub fn layout_map(&self, from: &Culture, to: &Culture) -> Result<&LayoutMap> {
        self.layouts
            .get(&(from.clone(), to.clone()))
            .ok_or_else(|| LangError::UnsupportedLayout {
                from: from.clone(),
                to: to.clone(),
            })
    }

    pub fn has_table(&self, culture: &Culture) -> bool {
        self.tables.contains_key(culture)
    }

    pub fn has_layout(&self, from: &Culture, to: &Culture) -> bool {
        self.layouts.contains_key(&(from.clone(), to.clone()))
    }

    /// 빈도 테이블이 등록된 문화권 목록 (정렬됨)
    pub fn table_cultures(&self) -> Vec<&Culture> {
        let mut cultures: Vec<_> = self.tables.keys().collect();
        cultures.sort();
        cultures
    }

    /// 자판 매핑이 등록된 문화권 쌍 목록 (정렬됨)
    pub fn layout_pairs(&self) -> Vec<(&Culture, &Culture)> {
        let mut pairs: Vec<_> = self.layouts.keys().map(|(from, to)| (from, to)).collect();
        pairs.sort();
        pairs
    }
}

/// 등록소 빌더
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// 빈도 테이블 등록 (같은 문화권이 있으면 교체)
    pub fn with_table(mut self, culture: Culture, table: FrequencyTable) -> Self {
        log::debug!("빈도 테이블 등록: {} ({}개 바이그램)", culture, table.len());
        if self.registry.tables.insert(culture.clone(), table).is_some() {
            log::warn!("빈도 테이블 교체: {}", culture);
        }
        self
    }

    /// 자판 매핑 등록 (같은 쌍이 있으면 교체)
    pub fn with_layout(mut self, from: Culture, to: Culture, map: LayoutMap) -> Self {
        log::debug!("자판 매핑 등록: {} -> {} ({}개)", from, to, map.len());
        if self
            .registry
            .layouts
            .insert((from.clone(), to.clone()), map)
            .is_some()
        {
            log::warn!("자판 매핑 교체: {} -> {}", from, to);
        }
        self
    }

    pub fn build(self) -> Registry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableSource;

    #[test]
    fn test_builtin() {
        let registry = Registry::builtin().unwrap();
        assert!(registry.has_table(&Culture::en_us()));
        assert!(registry.has_layout(&Culture::en_us(), &Culture::ru_ru()));
        assert_eq!(registry.table_cultures(), vec![&Culture::en_us()]);
        assert_eq!(
            registry.layout_pairs(),
            vec![(&Culture::en_us(), &Culture::ru_ru())]
        );
    }

    #[test]
    fn test_unsupported_lookups() {
        let registry = Registry::builtin().unwrap();

        let err = registry.frequency_table(&Culture::ru_ru()).unwrap_err();
        assert!(matches!(err, LangError::UnsupportedCulture(ref c) if *c == Culture::ru_ru()));

        // 역방향 쌍은 등록되지 않음
        let err = registry
            .layout_map(&Culture::ru_ru(), &Culture::en_us())
            .unwrap_err();
        assert!(matches!(err, LangError::UnsupportedLayout { .. }));
    }

    #[test]
    fn test_builder_replaces() {
        let registry = Registry::builder()
            .with_table(Culture::en_us(), FrequencyTable::default())
            .with_table(Culture::new("EN-US"), FrequencyTable::train("hello"))
            .build();
        assert_eq!(registry.table_cultures().len(), 1);
        assert!(!registry
            .frequency_table(&Culture::en_us())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_from_config_loads_extra_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stat_de_de.txt");
        std::fs::write(&path, FrequencyTable::train("hallo welt").to_resource()).unwrap();

        let config = RelayoutConfig {
            frequency_tables: vec![TableSource {
                culture: Culture::new("de-de"),
                path: path.clone(),
            }],
            ..RelayoutConfig::default()
        };
        let registry = Registry::from_config(&config).unwrap();
        assert!(registry.has_table(&Culture::new("de-de")));
        assert!(registry.has_table(&Culture::en_us()));

        let missing = RelayoutConfig {
            frequency_tables: vec![TableSource {
                culture: Culture::new("de-de"),
                path: dir.path().join("missing.txt"),
            }],
            ..RelayoutConfig::default()
        };
        assert!(matches!(
            Registry::from_config(&missing),
            Err(LangError::Io(_))
        ));
    }
}
