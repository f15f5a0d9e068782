use serde::{Deserialize, Serialize};

use crate::conversion::{percent_to_grams, round_to};
use crate::input;
use crate::oil_db;
use crate::units::{convert_mass, MassUnit};

/// 오일 한 줄 입력. `amount`는 기준(basis)에 따라 질량 또는 백분율이다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OilEntry {
    pub name: String,
    pub amount: f64,
}

impl OilEntry {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// 오일 입력값의 해석 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OilBasis {
    /// 각 줄이 절대 질량(단위는 별도 지정)
    #[default]
    Weight,
    /// 각 줄이 목표 오일 총량 대비 %
    Percent,
}

/// g으로 환산된 오일.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedOil {
    pub name: String,
    pub grams: f64,
    /// 테이블에 없는 오일이면 `None`
    pub sap_naoh: Option<f64>,
}

/// 백분율 모드에서 마지막 줄을 제외한 행의 반올림 자릿수(0.01 g).
const PERCENT_ROW_DECIMALS: i32 = 2;
const FULL_SHARE_EPSILON: f64 = 1e-9;

/// 오일 목록을 입력 순서 그대로 g 단위로 환산한다.
///
/// - `Weight`: 각 줄을 `unit`에서 g으로 독립적으로 환산한다. `target_g`는 쓰지 않는다.
/// - `Percent`: 마지막 줄을 제외한 각 줄은 `target_g × pct/100`을 0.01 g으로 반올림하고,
///   마지막 줄이 나머지를 흡수한다. 비율 합이 100%이면 결과 합은 정확히 `target_g`이다.
pub fn resolve_oils(
    entries: &[OilEntry],
    basis: OilBasis,
    target_g: f64,
    unit: MassUnit,
) -> Vec<ResolvedOil> {
    let grams = match basis {
        OilBasis::Weight => entries
            .iter()
            .map(|e| convert_mass(input::sanitize(e.amount), unit, MassUnit::Gram))
            .collect(),
        OilBasis::Percent => {
            let percents: Vec<f64> = entries.iter().map(|e| input::sanitize(e.amount)).collect();
            distribute_percent(&percents, input::sanitize(target_g))
        }
    };

    let resolved: Vec<ResolvedOil> = entries
        .iter()
        .zip(grams)
        .map(|(entry, grams)| ResolvedOil {
            name: entry.name.trim().to_string(),
            grams,
            sap_naoh: oil_db::sap_value(&entry.name),
        })
        .collect();

    tracing::debug!(
        count = resolved.len(),
        ?basis,
        total_g = total_grams(&resolved),
        "resolved oil composition"
    );
    resolved
}

fn distribute_percent(percents: &[f64], target_g: f64) -> Vec<f64> {
    let len = percents.len();
    let share_total: f64 = percents.iter().sum();
    // 부동소수 합산 오차로 100%가 깨지는 경우 목표량을 그대로 쓴다.
    let expected_total = if (share_total - 100.0).abs() < FULL_SHARE_EPSILON {
        target_g
    } else {
        percent_to_grams(share_total, target_g)
    };
    let mut assigned = 0.0;
    let mut out = Vec::with_capacity(len);
    for (i, pct) in percents.iter().enumerate() {
        let grams = if i == len - 1 {
            (expected_total - assigned).max(0.0)
        } else {
            round_to(percent_to_grams(*pct, target_g), PERCENT_ROW_DECIMALS)
        };
        assigned += grams;
        out.push(grams);
    }
    out
}

/// 이미 g으로 환산된 오일 목록을 새 목표 총량으로 비례 조정한다.
/// 마지막 줄이 반올림 나머지를 흡수하므로 결과 합은 `new_target_g`와 같다.
pub fn scale_oils(oils: &[ResolvedOil], new_target_g: f64) -> Vec<OilEntry> {
    let total = total_grams(oils);
    if total <= 0.0 {
        return oils.iter().map(|o| OilEntry::new(o.name.clone(), 0.0)).collect();
    }
    let percents: Vec<f64> = oils.iter().map(|o| o.grams / total * 100.0).collect();
    let grams = distribute_percent(&percents, input::sanitize(new_target_g));
    oils.iter()
        .zip(grams)
        .map(|(o, g)| OilEntry::new(o.name.clone(), g))
        .collect()
}

/// 오일 총량 [g]
pub fn total_grams(oils: &[ResolvedOil]) -> f64 {
    oils.iter().map(|o| o.grams).sum()
}

/// 검화가 테이블에 없는 오일 이름 목록.
pub fn unknown_oils(oils: &[ResolvedOil]) -> Vec<&str> {
    oils.iter()
        .filter(|o| o.sap_naoh.is_none() && o.grams > 0.0)
        .map(|o| o.name.as_str())
        .collect()
}
