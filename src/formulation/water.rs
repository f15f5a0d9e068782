use serde::{Deserialize, Serialize};

use crate::input;

/// 모드를 알 수 없을 때 쓰는 기본 물:가성소다 비.
pub const DEFAULT_WATER_RATIO: f64 = 2.5;

/// 물 계산 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaterMode {
    /// 물 = 가성소다(NaOH 환산) × 비율
    #[default]
    Ratio,
    /// 물 = 오일 × %
    PercentOfOil,
    /// 목표 가성소다 수용액 농도(%)로부터 역산
    PercentSolution,
}

impl WaterMode {
    pub fn from_key(key: &str) -> Option<WaterMode> {
        match key.trim().to_lowercase().as_str() {
            "ratio" => Some(WaterMode::Ratio),
            "percentofoil" | "percent_of_oil" | "oil" => Some(WaterMode::PercentOfOil),
            "percentsolution" | "percent_solution" | "concentration" => {
                Some(WaterMode::PercentSolution)
            }
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            WaterMode::Ratio => "ratio",
            WaterMode::PercentOfOil => "percent_of_oil",
            WaterMode::PercentSolution => "percent_solution",
        }
    }
}

/// 물 계산 모드와 모드별 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawWaterSetting", into = "RawWaterSetting")]
pub struct WaterSetting {
    pub mode: WaterMode,
    pub parameter: f64,
}

impl Default for WaterSetting {
    fn default() -> Self {
        Self {
            mode: WaterMode::Ratio,
            parameter: DEFAULT_WATER_RATIO,
        }
    }
}

impl WaterSetting {
    pub fn new(mode: WaterMode, parameter: f64) -> Self {
        Self { mode, parameter }
    }

    /// 모드 키 문자열로 설정을 만든다. 모르는 모드는 비율 2.5로 폴백한다.
    pub fn from_key(key: &str, parameter: f64) -> Self {
        match WaterMode::from_key(key) {
            Some(mode) => Self::new(mode, parameter),
            None => {
                tracing::warn!(mode = key, "unknown water mode, falling back to ratio 2.5");
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct RawWaterSetting {
    mode: String,
    parameter: f64,
}

impl Default for RawWaterSetting {
    fn default() -> Self {
        WaterSetting::default().into()
    }
}

impl From<RawWaterSetting> for WaterSetting {
    fn from(raw: RawWaterSetting) -> Self {
        WaterSetting::from_key(&raw.mode, raw.parameter)
    }
}

impl From<WaterSetting> for RawWaterSetting {
    fn from(setting: WaterSetting) -> Self {
        RawWaterSetting {
            mode: setting.mode.key().to_string(),
            parameter: setting.parameter,
        }
    }
}

/// 물 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WaterResult {
    /// 물(액체) [g]
    pub water_g: f64,
    /// 농도 0% 등 정의되지 않는 입력이었으면 true (이때 `water_g`는 0)
    pub invalid: bool,
}

/// 설정된 방식으로 물 사용량을 계산한다.
pub fn calculate_water(setting: &WaterSetting, sodium_equivalent_g: f64, oil_g: f64) -> WaterResult {
    let parameter = input::sanitize(setting.parameter);
    let lye = input::sanitize(sodium_equivalent_g);
    match setting.mode {
        WaterMode::Ratio => WaterResult {
            water_g: lye * parameter,
            invalid: false,
        },
        WaterMode::PercentOfOil => WaterResult {
            water_g: input::sanitize(oil_g) * (parameter / 100.0),
            invalid: false,
        },
        WaterMode::PercentSolution => {
            let concentration = parameter / 100.0;
            if concentration <= 0.0 {
                return WaterResult {
                    water_g: 0.0,
                    invalid: true,
                };
            }
            let water = lye * ((1.0 - concentration) / concentration);
            WaterResult {
                water_g: water.max(0.0),
                invalid: false,
            }
        }
    }
}
