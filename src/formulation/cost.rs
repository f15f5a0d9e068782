use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::input::sanitize;

/// 가격표에서 향료 항목을 찾을 때 쓰는 키.
pub const FRAGRANCE_PRICE_KEY: &str = "Fragrance";

/// 재료 한 가지의 구매 단가 정보. 저장 값이 없으면 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceEntry {
    /// 포장 단위 가격
    pub unit_cost: f64,
    /// 포장 단위 질량 [g]
    pub package_size: f64,
}

impl PriceEntry {
    pub fn new(unit_cost: f64, package_size: f64) -> Self {
        Self {
            unit_cost,
            package_size,
        }
    }

    /// 사용량에 대한 비용. 포장 단위가 0 이하이거나 숫자가 아니면 0, 음수 가격은 0으로 본다.
    pub fn cost_for(&self, grams: f64) -> f64 {
        let size = sanitize(self.package_size);
        if size <= 0.0 {
            return 0.0;
        }
        sanitize(self.unit_cost) / size * sanitize(grams)
    }
}

/// 재료 이름 → 단가. 이름 비교는 정확히 일치해야 한다.
pub type PriceTable = BTreeMap<String, PriceEntry>;

/// 원가 계산 입력.
#[derive(Debug, Clone)]
pub struct CostInput<'a> {
    /// (재료 이름, 사용량 g) 목록. 향료는 제외한다.
    pub usage: &'a [(String, f64)],
    pub prices: &'a PriceTable,
    pub fragrance_g: f64,
    /// 배치에서 나오는 제품 개수
    pub unit_count: u32,
    /// 개당 판매가
    pub sale_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLine {
    pub name: String,
    pub grams: f64,
    pub cost: f64,
}

/// 원가 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostResult {
    pub lines: Vec<CostLine>,
    pub fragrance_cost: f64,
    /// 배치 총 원가
    pub total_cost: f64,
    /// 개당 원가
    pub per_unit_cost: f64,
    /// 마진 (%)
    pub margin_pct: f64,
}

/// 재료 사용량과 가격표로 배치/개당 원가와 마진을 계산한다.
pub fn estimate_cost(input: CostInput<'_>) -> CostResult {
    let price_of = |name: &str, grams: f64| {
        input
            .prices
            .get(name)
            .map(|p| p.cost_for(grams))
            .unwrap_or(0.0)
    };

    let lines: Vec<CostLine> = input
        .usage
        .iter()
        .map(|(name, grams)| CostLine {
            name: name.clone(),
            grams: *grams,
            cost: price_of(name, *grams),
        })
        .collect();

    let fragrance_cost = price_of(FRAGRANCE_PRICE_KEY, input.fragrance_g);
    let total_cost = lines.iter().map(|l| l.cost).sum::<f64>() + fragrance_cost;
    let per_unit_cost = total_cost / f64::from(input.unit_count.max(1));
    let sale = sanitize(input.sale_price);
    let margin_pct = if sale > 0.0 {
        (sale - per_unit_cost) / sale * 100.0
    } else {
        0.0
    };

    CostResult {
        lines,
        fragrance_cost,
        total_cost,
        per_unit_cost,
        margin_pct,
    }
}
