//! 이름 → 값 형태의 로컬 저장소.
//!
//! 레시피와 가격표를 같은 방식으로 보관한다. 같은 이름으로 저장하면 덮어쓰며(last-write-wins)
//! 잠금은 두지 않는다. 사용자는 한 명, 프로세스는 하나라고 가정한다.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::formulation::cost::PriceEntry;
use crate::session::SavedRecipe;

/// 저장소 오류.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("저장 파일 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("저장 파일 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("이름이 비어 있습니다.")]
    EmptyName,
}

/// 이름으로 값을 조회/저장/삭제하는 저장소.
pub trait KeyValueStore<T: Clone> {
    /// 이름순으로 정렬된 전체 항목.
    fn get_all(&self) -> Vec<(String, T)>;
    fn get(&self, name: &str) -> Option<T>;
    /// 같은 이름이 있으면 덮어쓴다.
    fn put(&mut self, name: &str, value: T) -> Result<(), StoreError>;
    /// 삭제했으면 true, 없던 이름이면 false.
    fn delete(&mut self, name: &str) -> Result<bool, StoreError>;

    fn names(&self) -> Vec<String> {
        self.get_all().into_iter().map(|(name, _)| name).collect()
    }

    fn to_map(&self) -> BTreeMap<String, T> {
        self.get_all().into_iter().collect()
    }
}

fn normalize_name(name: &str) -> Result<String, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        Err(StoreError::EmptyName)
    } else {
        Ok(name.to_string())
    }
}

/// 메모리에만 보관하는 저장소.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore<T> {
    entries: BTreeMap<String, T>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T: Clone> KeyValueStore<T> for MemoryStore<T> {
    fn get_all(&self) -> Vec<(String, T)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn get(&self, name: &str) -> Option<T> {
        self.entries.get(name.trim()).cloned()
    }

    fn put(&mut self, name: &str, value: T) -> Result<(), StoreError> {
        self.entries.insert(normalize_name(name)?, value);
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<bool, StoreError> {
        Ok(self.entries.remove(name.trim()).is_some())
    }
}

/// TOML 파일 하나에 전체 항목을 보관하는 저장소. 변경할 때마다 파일 전체를 다시 쓴다.
#[derive(Debug, Clone)]
pub struct TomlFileStore<T> {
    path: PathBuf,
    entries: BTreeMap<String, T>,
}

impl<T: Serialize + DeserializeOwned + Clone> TomlFileStore<T> {
    /// 파일을 열어 읽는다. 파일이 없으면 빈 저장소로 시작한다.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), count = entries.len(), "store opened");
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(&self.entries)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl<T: Serialize + DeserializeOwned + Clone> KeyValueStore<T> for TomlFileStore<T> {
    fn get_all(&self) -> Vec<(String, T)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn get(&self, name: &str) -> Option<T> {
        self.entries.get(name.trim()).cloned()
    }

    fn put(&mut self, name: &str, value: T) -> Result<(), StoreError> {
        let name = normalize_name(name)?;
        tracing::debug!(name = %name, path = %self.path.display(), "store put");
        self.entries.insert(name, value);
        self.flush()
    }

    fn delete(&mut self, name: &str) -> Result<bool, StoreError> {
        let removed = self.entries.remove(name.trim()).is_some();
        if removed {
            tracing::debug!(name = name.trim(), path = %self.path.display(), "store delete");
            self.flush()?;
        }
        Ok(removed)
    }
}

/// 이름 붙은 레시피 저장소.
pub type RecipeBook = TomlFileStore<SavedRecipe>;
/// 재료 가격표 저장소.
pub type PriceBook = TomlFileStore<PriceEntry>;
