//! 외부 입력(폼 필드, CLI 텍스트)을 계산 엔진이 받을 수 있는 값으로 정리한다.
//!
//! 숫자가 아니거나 비어 있는 값, 음수, NaN/무한대는 모두 0으로 취급한다.

/// 텍스트 입력을 음수가 아닌 유한 실수로 정리한다. 해석할 수 없으면 0.
pub fn number(raw: &str) -> f64 {
    let cleaned = raw.trim().trim_end_matches('%').trim();
    cleaned.parse::<f64>().map(sanitize).unwrap_or(0.0)
}

/// 이미 숫자인 값을 같은 규칙으로 정리한다.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// 백분율 입력을 0~100 범위로 정리한다.
pub fn percent(value: f64) -> f64 {
    sanitize(value).min(100.0)
}
