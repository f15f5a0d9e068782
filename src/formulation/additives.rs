use serde::{Deserialize, Serialize};

use crate::conversion::percent_to_grams;
use crate::formulation::safety::{classify, SafetyLevel};
use crate::input;
use crate::safety_db::{Additive, FragranceKind, SafeRange};

/// 첨가물 사용량(오일 대비 %).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditivePercents {
    pub fragrance: f64,
    pub sodium_lactate: f64,
    pub salt: f64,
    pub sugar: f64,
    pub clay: f64,
    pub chelator: f64,
}

impl AdditivePercents {
    pub fn get(&self, additive: Additive) -> f64 {
        match additive {
            Additive::SodiumLactate => self.sodium_lactate,
            Additive::Salt => self.salt,
            Additive::Sugar => self.sugar,
            Additive::Clay => self.clay,
            Additive::Chelator => self.chelator,
        }
    }
}

/// 첨가물 한 항목의 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditiveLine {
    pub additive: Additive,
    pub percent: f64,
    pub grams: f64,
    pub range: (f64, f64),
    pub level: SafetyLevel,
}

/// 향료 계산 결과. 일반 범위가 아닌 종류별 상한으로 분류한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FragranceLine {
    pub kind: FragranceKind,
    pub percent: f64,
    pub grams: f64,
    pub cap_pct: f64,
    pub level: SafetyLevel,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditiveResult {
    pub fragrance: FragranceLine,
    pub lines: Vec<AdditiveLine>,
}

impl AdditiveResult {
    /// 향료를 포함한 첨가물 총량 [g]
    pub fn total_grams(&self) -> f64 {
        self.fragrance.grams + self.lines.iter().map(|l| l.grams).sum::<f64>()
    }
}

/// 오일 총량 기준으로 첨가물 사용량을 계산하고 권장 범위로 분류한다.
pub fn calculate_additives(
    oil_g: f64,
    percents: &AdditivePercents,
    fragrance_kind: FragranceKind,
) -> AdditiveResult {
    let oil_g = input::sanitize(oil_g);

    let lines = Additive::ALL
        .iter()
        .map(|&additive| {
            let percent = input::sanitize(percents.get(additive));
            let range = additive.range();
            AdditiveLine {
                additive,
                percent,
                grams: percent_to_grams(percent, oil_g),
                range: (range.min, range.max),
                level: classify(percent, range),
            }
        })
        .collect();

    let fragrance_pct = input::sanitize(percents.fragrance);
    let cap = fragrance_kind.cap_pct();
    let fragrance = FragranceLine {
        kind: fragrance_kind,
        percent: fragrance_pct,
        grams: percent_to_grams(fragrance_pct, oil_g),
        cap_pct: cap,
        level: classify(fragrance_pct, SafeRange::new(0.0, cap)),
        note: fragrance_kind.note(),
    };

    AdditiveResult { fragrance, lines }
}
