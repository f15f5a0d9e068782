use serde::Serialize;

use crate::input;

/// 몰드/냄비 안전 충전 구간 하한 (용량 대비)
pub const FILL_MIN_FRACTION: f64 = 0.60;
/// 몰드/냄비 안전 충전 구간 상한 (용량 대비)
pub const FILL_MAX_FRACTION: f64 = 0.75;

/// 배치 합산에 들어가는 성분별 질량 [g].
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchComponents {
    pub oils_g: f64,
    pub naoh_g: f64,
    pub koh_g: f64,
    pub water_g: f64,
    pub milk_g: f64,
    pub additives_g: f64,
}

/// 총량이 안전 충전 구간에 대해 어디에 있는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityFit {
    /// 하한 미만 (덜 채우는 것은 안전하므로 경고하지 않는다)
    Below,
    Within,
    /// 상한 초과, 넘칠 위험
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityCheck {
    pub capacity_g: f64,
    pub min_fill_g: f64,
    pub max_fill_g: f64,
    pub fit: CapacityFit,
}

impl CapacityCheck {
    pub fn is_overflow_risk(&self) -> bool {
        self.fit == CapacityFit::Above
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchResult {
    pub total_g: f64,
    /// 가성소다 수용액 농도 (%) = 가성소다 / (가성소다 + 액체)
    pub lye_concentration_pct: f64,
    pub capacity: Option<CapacityCheck>,
}

/// 액체를 물과 우유로 나눈다. `milk_pct`는 액체 중 우유 몫(%)이다.
pub fn split_liquid(liquid_g: f64, milk_pct: f64) -> (f64, f64) {
    let liquid = input::sanitize(liquid_g);
    let milk = liquid * input::percent(milk_pct) / 100.0;
    (liquid - milk, milk)
}

/// 모든 성분을 합산하고, 용량이 주어지면 충전 구간을 판정한다.
pub fn aggregate_batch(components: &BatchComponents, capacity_g: Option<f64>) -> BatchResult {
    let lye = components.naoh_g + components.koh_g;
    let liquid = components.water_g + components.milk_g;
    let total_g = components.oils_g + lye + liquid + components.additives_g;

    let lye_concentration_pct = if lye + liquid > 0.0 {
        lye / (lye + liquid) * 100.0
    } else {
        0.0
    };

    let capacity = capacity_g
        .map(input::sanitize)
        .filter(|c| *c > 0.0)
        .map(|c| check_capacity(total_g, c));

    if let Some(check) = capacity.filter(CapacityCheck::is_overflow_risk) {
        tracing::warn!(
            total_g,
            max_fill_g = check.max_fill_g,
            "batch exceeds safe fill window"
        );
    }

    BatchResult {
        total_g,
        lye_concentration_pct,
        capacity,
    }
}

/// 총량을 `[60%, 75%]` 충전 구간과 비교한다.
pub fn check_capacity(total_g: f64, capacity_g: f64) -> CapacityCheck {
    let min_fill_g = capacity_g * FILL_MIN_FRACTION;
    let max_fill_g = capacity_g * FILL_MAX_FRACTION;
    let fit = if total_g > max_fill_g {
        CapacityFit::Above
    } else if total_g < min_fill_g {
        CapacityFit::Below
    } else {
        CapacityFit::Within
    };
    CapacityCheck {
        capacity_g,
        min_fill_g,
        max_fill_g,
        fit,
    }
}
