use thiserror::Error;

use crate::units::{convert_mass, MassUnit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `g`, `oz`, `kg`, `lb` 등을 사용할 수 있다.
pub fn convert(value: f64, from_unit_str: &str, to_unit_str: &str) -> Result<f64, ConversionError> {
    let from = parse_mass_unit(from_unit_str)?;
    let to = parse_mass_unit(to_unit_str)?;
    Ok(convert_mass(value, from, to))
}

/// 단위 문자열을 [`MassUnit`]으로 해석한다.
pub fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "g" | "gram" | "grams" => Ok(MassUnit::Gram),
        "oz" | "ounce" | "ounces" => Ok(MassUnit::Ounce),
        "kg" | "kilogram" | "kilograms" => Ok(MassUnit::Kilogram),
        "lb" | "lbs" | "pound" | "pounds" => Ok(MassUnit::Pound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 목표 총량 대비 백분율을 절대 질량(g)으로 환산한다.
pub fn percent_to_grams(percent: f64, target_g: f64) -> f64 {
    target_g * (percent / 100.0)
}

/// 절대 질량을 총량 대비 백분율로 환산한다. 총량이 0 이하이면 0을 돌려준다.
pub fn grams_to_percent(grams: f64, total_g: f64) -> f64 {
    if total_g > 0.0 {
        grams / total_g * 100.0
    } else {
        0.0
    }
}

/// 소수점 `decimals` 자리로 반올림한다.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
