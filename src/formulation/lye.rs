use serde::{Deserialize, Serialize};

use crate::formulation::oils::ResolvedOil;
use crate::input;

/// NaOH 1 g과 같은 검화력을 내는 KOH 질량 [g] (분자량 56.1 / 40.0).
pub const KOH_PER_NAOH: f64 = 1.403;

/// 가성소다 종류. 알 수 없는 문자열은 NaOH로 폴백한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LyeKind {
    #[default]
    NaOH,
    KOH,
    /// NaOH + KOH 혼합
    Dual,
}

impl LyeKind {
    pub fn from_key(key: &str) -> Option<LyeKind> {
        match key.trim().to_lowercase().as_str() {
            "naoh" | "sodium" => Some(LyeKind::NaOH),
            "koh" | "potassium" => Some(LyeKind::KOH),
            "dual" | "both" | "mixed" => Some(LyeKind::Dual),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            LyeKind::NaOH => "NaOH",
            LyeKind::KOH => "KOH",
            LyeKind::Dual => "dual",
        }
    }
}

impl From<String> for LyeKind {
    fn from(value: String) -> Self {
        LyeKind::from_key(&value).unwrap_or_default()
    }
}

impl From<LyeKind> for String {
    fn from(value: LyeKind) -> Self {
        value.key().to_string()
    }
}

/// 가성소다 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LyeSettings {
    pub kind: LyeKind,
    /// NaOH 순도 (%)
    pub naoh_purity_pct: f64,
    /// KOH 순도 (%)
    pub koh_purity_pct: f64,
    /// 혼합 시 전체 중 NaOH 몫 (%)
    pub dual_naoh_pct: f64,
}

impl Default for LyeSettings {
    fn default() -> Self {
        Self {
            kind: LyeKind::NaOH,
            naoh_purity_pct: 100.0,
            koh_purity_pct: 90.0,
            dual_naoh_pct: 50.0,
        }
    }
}

/// 가성소다 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LyeResult {
    /// 오일 전체를 검화하는 데 필요한 순수 NaOH [g]
    pub base_demand_g: f64,
    /// 슈퍼팻 적용 후 순수 NaOH 기준 필요량 [g]
    pub needed_pure_naoh_g: f64,
    /// 계량할 NaOH [g] (순도 보정 후)
    pub naoh_g: f64,
    /// 계량할 KOH [g] (순도 보정 후)
    pub koh_g: f64,
    /// NaOH 환산 총량 = NaOH + KOH / 1.403 [g]
    pub sodium_equivalent_g: f64,
}

/// 오일의 검화 요구량(순수 NaOH 기준, 슈퍼팻 미적용)을 합산한다.
/// 검화가를 모르는 오일은 0으로 친다.
pub fn base_demand(oils: &[ResolvedOil]) -> f64 {
    oils.iter()
        .map(|o| o.grams * o.sap_naoh.unwrap_or(0.0))
        .sum()
}

fn purity_factor(purity_pct: f64) -> f64 {
    100.0 / purity_pct.max(1.0)
}

/// 슈퍼팻과 순도, 혼합 비율을 반영해 NaOH/KOH 계량값을 계산한다.
///
/// 혼합(dual) 모드에서는 필요량을 먼저 NaOH/KOH 몫으로 나눈 뒤
/// 각 몫에 해당 시약의 순도(와 KOH 환산 계수)를 따로 적용한다.
pub fn calculate_lye(oils: &[ResolvedOil], superfat_pct: f64, settings: &LyeSettings) -> LyeResult {
    let base = base_demand(oils);
    let sf = input::percent(superfat_pct);
    let needed = base * (1.0 - sf / 100.0);

    let (naoh_g, koh_g) = match settings.kind {
        LyeKind::NaOH => (needed * purity_factor(settings.naoh_purity_pct), 0.0),
        LyeKind::KOH => (
            0.0,
            needed * KOH_PER_NAOH * purity_factor(settings.koh_purity_pct),
        ),
        LyeKind::Dual => {
            let naoh_share = input::percent(settings.dual_naoh_pct) / 100.0;
            let naoh_part = needed * naoh_share;
            let koh_part = needed * (1.0 - naoh_share);
            (
                naoh_part * purity_factor(settings.naoh_purity_pct),
                koh_part * KOH_PER_NAOH * purity_factor(settings.koh_purity_pct),
            )
        }
    };

    let result = LyeResult {
        base_demand_g: base,
        needed_pure_naoh_g: needed,
        naoh_g,
        koh_g,
        sodium_equivalent_g: sodium_equivalent(naoh_g, koh_g),
    };
    tracing::debug!(kind = ?settings.kind, superfat = sf, ?result, "lye calculated");
    result
}

/// KOH를 NaOH 검화력 기준으로 환산해 합친다.
pub fn sodium_equivalent(naoh_g: f64, koh_g: f64) -> f64 {
    naoh_g + koh_g / KOH_PER_NAOH
}
