use serde::{Deserialize, Serialize};

/// 1 oz(avoirdupois)를 g으로 환산한 값.
pub const GRAMS_PER_OUNCE: f64 = 28.349523125;
/// 1 lb를 g으로 환산한 값.
pub const GRAMS_PER_POUND: f64 = 453.59237;

/// 질량 단위. 내부 기준은 g이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    #[default]
    Gram,
    Ounce,
    Kilogram,
    Pound,
}

impl MassUnit {
    /// 화면 표시에 쓰는 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Gram => "g",
            MassUnit::Ounce => "oz",
            MassUnit::Kilogram => "kg",
            MassUnit::Pound => "lb",
        }
    }
}

fn to_grams(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value,
        MassUnit::Ounce => value * GRAMS_PER_OUNCE,
        MassUnit::Kilogram => value * 1000.0,
        MassUnit::Pound => value * GRAMS_PER_POUND,
    }
}

fn from_grams(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value,
        MassUnit::Ounce => value / GRAMS_PER_OUNCE,
        MassUnit::Kilogram => value / 1000.0,
        MassUnit::Pound => value / GRAMS_PER_POUND,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let base = to_grams(value, from);
    from_grams(base, to)
}
