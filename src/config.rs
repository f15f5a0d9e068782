use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::formulation::lye::LyeSettings;
use crate::formulation::recipe::{RecipeInput, DEFAULT_SUPERFAT_PCT};
use crate::formulation::water::WaterSetting;
use crate::units::MassUnit;

/// 기본 설정 파일 경로.
pub const CONFIG_FILE: &str = "config.toml";

/// 새 레시피를 만들 때 쓰는 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeDefaults {
    pub superfat_pct: f64,
    pub naoh_purity_pct: f64,
    pub koh_purity_pct: f64,
    pub water: WaterSetting,
}

impl Default for RecipeDefaults {
    fn default() -> Self {
        let lye = LyeSettings::default();
        Self {
            superfat_pct: DEFAULT_SUPERFAT_PCT,
            naoh_purity_pct: lye.naoh_purity_pct,
            koh_purity_pct: lye.koh_purity_pct,
            water: WaterSetting::default(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// 결과 표시 단위
    pub display_unit: MassUnit,
    /// 저장 레시피 파일
    pub recipe_file: PathBuf,
    /// 가격표 파일
    pub price_file: PathBuf,
    pub defaults: RecipeDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            display_unit: MassUnit::Gram,
            recipe_file: PathBuf::from("recipes.toml"),
            price_file: PathBuf::from("prices.toml"),
            defaults: RecipeDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_from(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 로드하거나 없으면 기본 설정을 그 경로에 생성한다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        tracing::info!(path = %path.display(), "default config created");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }

    /// 설정 기본값을 반영한 빈 레시피 입력.
    pub fn new_recipe(&self) -> RecipeInput {
        let mut input = RecipeInput {
            superfat_pct: self.defaults.superfat_pct,
            water: self.defaults.water,
            ..RecipeInput::default()
        };
        input.lye.naoh_purity_pct = self.defaults.naoh_purity_pct;
        input.lye.koh_purity_pct = self.defaults.koh_purity_pct;
        input
    }
}
