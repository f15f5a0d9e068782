use serde::Serialize;

use crate::safety_db::SafeRange;

/// 범위 분류 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    /// 사용하지 않음 (정보)
    Unused,
    /// 권장 최소치 미만 (주의)
    Low,
    /// 권장 범위 내
    Ok,
    /// 권장 최대치 초과 (위험)
    High,
}

/// 화면 표시용 심각도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Ok,
    Warn,
    Danger,
}

impl SafetyLevel {
    pub fn severity(&self) -> Severity {
        match self {
            SafetyLevel::Unused => Severity::Info,
            SafetyLevel::Low => Severity::Warn,
            SafetyLevel::Ok => Severity::Ok,
            SafetyLevel::High => Severity::Danger,
        }
    }
}

/// 사용량(%)을 권장 범위에 대해 분류한다. 경계값 자체는 범위 내로 본다.
pub fn classify(value_pct: f64, range: SafeRange) -> SafetyLevel {
    if value_pct == 0.0 {
        SafetyLevel::Unused
    } else if value_pct < range.min {
        SafetyLevel::Low
    } else if value_pct > range.max {
        SafetyLevel::High
    } else {
        SafetyLevel::Ok
    }
}
