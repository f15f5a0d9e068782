use serde::{Deserialize, Serialize};

use crate::formulation::additives::{calculate_additives, AdditivePercents, AdditiveResult};
use crate::formulation::batch::{aggregate_batch, split_liquid, BatchComponents, BatchResult};
use crate::formulation::lye::{calculate_lye, LyeResult, LyeSettings};
use crate::formulation::oils::{
    resolve_oils, total_grams, unknown_oils, OilBasis, OilEntry, ResolvedOil,
};
use crate::formulation::safety::Severity;
use crate::formulation::water::{calculate_water, WaterResult, WaterSetting};
use crate::input;
use crate::safety_db::FragranceKind;
use crate::units::MassUnit;

/// 기본 슈퍼팻 (%)
pub const DEFAULT_SUPERFAT_PCT: f64 = 5.0;

/// 레시피 입력 스냅샷. 저장 파일에 없는 필드는 기본값을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeInput {
    /// 백분율 기준일 때의 목표 오일 총량 [g]
    pub target_oil_g: f64,
    pub superfat_pct: f64,
    pub fragrance_kind: FragranceKind,
    /// 액체 중 우유로 대체하는 몫 (%)
    pub milk_pct: f64,
    /// 몰드/냄비 용량 [g]
    pub capacity_g: Option<f64>,
    pub oils: Vec<OilEntry>,
    pub lye: LyeSettings,
    pub water: WaterSetting,
    pub additives: AdditivePercents,
}

impl Default for RecipeInput {
    fn default() -> Self {
        Self {
            target_oil_g: 1000.0,
            superfat_pct: DEFAULT_SUPERFAT_PCT,
            fragrance_kind: FragranceKind::default(),
            milk_pct: 0.0,
            capacity_g: None,
            oils: Vec::new(),
            lye: LyeSettings::default(),
            water: WaterSetting::default(),
            additives: AdditivePercents::default(),
        }
    }
}

/// 계산 중 발견된 참고 사항. 계산을 막지는 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RecipeWarning {
    /// 오일이 하나도 없거나 총량이 0
    NoOils,
    /// 검화가를 모르는 오일 (가성소다 계산에서 제외됨)
    UnknownOil(String),
    /// 백분율 합이 100%가 아님 (실제 합)
    PercentTotal(f64),
    /// 수용액 농도 0% 등 물 계산이 정의되지 않음
    InvalidWaterSetting,
}

/// 레시피 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeResult {
    pub oils: Vec<ResolvedOil>,
    pub oil_total_g: f64,
    pub superfat_pct: f64,
    pub lye: LyeResult,
    /// 물 계산기가 낸 전체 액체량
    pub liquid: WaterResult,
    /// 우유를 뺀 물 [g]
    pub water_g: f64,
    pub milk_g: f64,
    pub additives: AdditiveResult,
    pub batch: BatchResult,
    pub warnings: Vec<RecipeWarning>,
}

/// 오일 → 가성소다/물/첨가물 → 배치 합산 순서로 레시피 전체를 계산한다.
#[tracing::instrument(level = "debug", skip_all, fields(oils = recipe.oils.len(), basis = ?basis))]
pub fn calculate(recipe: &RecipeInput, basis: OilBasis, unit: MassUnit) -> RecipeResult {
    let oils = resolve_oils(&recipe.oils, basis, recipe.target_oil_g, unit);
    let oil_total_g = total_grams(&oils);

    let lye = calculate_lye(&oils, recipe.superfat_pct, &recipe.lye);
    let liquid = calculate_water(&recipe.water, lye.sodium_equivalent_g, oil_total_g);
    let (water_g, milk_g) = split_liquid(liquid.water_g, recipe.milk_pct);
    let additives = calculate_additives(oil_total_g, &recipe.additives, recipe.fragrance_kind);

    let batch = aggregate_batch(
        &BatchComponents {
            oils_g: oil_total_g,
            naoh_g: lye.naoh_g,
            koh_g: lye.koh_g,
            water_g,
            milk_g,
            additives_g: additives.total_grams(),
        },
        recipe.capacity_g,
    );

    let mut warnings = Vec::new();
    if oil_total_g <= 0.0 {
        warnings.push(RecipeWarning::NoOils);
    }
    for name in unknown_oils(&oils) {
        tracing::warn!(oil = name, "no saponification value, excluded from lye demand");
        warnings.push(RecipeWarning::UnknownOil(name.to_string()));
    }
    if basis == OilBasis::Percent && !recipe.oils.is_empty() {
        let pct_total: f64 = recipe.oils.iter().map(|o| input::sanitize(o.amount)).sum();
        if (pct_total - 100.0).abs() > 0.01 {
            warnings.push(RecipeWarning::PercentTotal(pct_total));
        }
    }
    if liquid.invalid {
        warnings.push(RecipeWarning::InvalidWaterSetting);
    }

    RecipeResult {
        oils,
        oil_total_g,
        superfat_pct: input::percent(recipe.superfat_pct),
        lye,
        liquid,
        water_g,
        milk_g,
        additives,
        batch,
        warnings,
    }
}

impl RecipeResult {
    /// 점검 항목별 심각도 목록 (첨가물, 향료, 용량).
    pub fn classifications(&self) -> Vec<(&'static str, Severity)> {
        let mut out: Vec<(&'static str, Severity)> = self
            .additives
            .lines
            .iter()
            .map(|l| (l.additive.name(), l.level.severity()))
            .collect();
        out.push(("Fragrance", self.additives.fragrance.level.severity()));
        if let Some(check) = self.batch.capacity {
            let severity = if check.is_overflow_risk() {
                Severity::Danger
            } else {
                Severity::Ok
            };
            out.push(("Capacity", severity));
        }
        out
    }

    /// 가장 심각한 분류. 점검 항목이 없으면 `Ok`.
    pub fn worst_severity(&self) -> Severity {
        self.classifications()
            .into_iter()
            .map(|(_, s)| s)
            .max()
            .unwrap_or(Severity::Ok)
    }

    /// 원가 계산용 재료 사용량 목록 (향료 제외, 0 g 항목 제외).
    pub fn usage(&self) -> Vec<(String, f64)> {
        let mut usage: Vec<(String, f64)> = self
            .oils
            .iter()
            .map(|o| (o.name.clone(), o.grams))
            .collect();
        usage.push(("NaOH".to_string(), self.lye.naoh_g));
        usage.push(("KOH".to_string(), self.lye.koh_g));
        usage.push(("Water".to_string(), self.water_g));
        usage.push(("Milk".to_string(), self.milk_g));
        for line in &self.additives.lines {
            usage.push((line.additive.name().to_string(), line.grams));
        }
        usage.retain(|(_, g)| *g > 0.0);
        usage
    }
}
