//! 첨가물 권장 사용 범위와 향료 종류별 사용 상한 테이블.
//!
//! 모든 값은 오일 총량 대비 백분율(%)이다. 권장치는 일반적인 콜드 프로세스 비누 기준
//! 참고값이며, 향료는 IFRA 등 공급사 자료를 우선한다.

use serde::{Deserialize, Serialize};

/// 범위 분류 대상 첨가물.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Additive {
    SodiumLactate,
    Salt,
    Sugar,
    Clay,
    Chelator,
}

impl Additive {
    pub const ALL: [Additive; 5] = [
        Additive::SodiumLactate,
        Additive::Salt,
        Additive::Sugar,
        Additive::Clay,
        Additive::Chelator,
    ];

    /// 가격표/사용량 목록에 쓰는 이름.
    pub fn name(&self) -> &'static str {
        match self {
            Additive::SodiumLactate => "Sodium Lactate",
            Additive::Salt => "Salt",
            Additive::Sugar => "Sugar",
            Additive::Clay => "Clay",
            Additive::Chelator => "Chelator",
        }
    }

    /// 권장 사용 범위.
    pub fn range(&self) -> SafeRange {
        match self {
            Additive::SodiumLactate => SafeRange::new(1.0, 3.0),
            Additive::Salt => SafeRange::new(0.5, 2.0),
            Additive::Sugar => SafeRange::new(0.5, 2.0),
            Additive::Clay => SafeRange::new(0.5, 2.0),
            Additive::Chelator => SafeRange::new(0.1, 1.0),
        }
    }
}

/// 권장 사용 범위 `[min, max]` (%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeRange {
    pub min: f64,
    pub max: f64,
}

impl SafeRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// 향료 종류. 알 수 없는 키는 [`FragranceKind::EssentialOil`]로 폴백한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FragranceKind {
    FragranceOil,
    #[default]
    EssentialOil,
    Lavender,
    Citrus,
    TeaTree,
    Eucalyptus,
    Peppermint,
    Spice,
}

#[derive(Debug)]
pub struct FragranceData {
    pub kind: FragranceKind,
    pub key: &'static str,
    pub label: &'static str,
    /// 오일 대비 최대 사용량 (%)
    pub cap_pct: f64,
    pub note: &'static str,
}

pub fn fragrance_kinds() -> &'static [FragranceData] {
    FRAGRANCES
}

impl FragranceKind {
    /// 키 문자열로 향료 종류를 찾는다.
    pub fn from_key(key: &str) -> Option<FragranceKind> {
        let key = key.trim();
        FRAGRANCES
            .iter()
            .find(|f| f.key.eq_ignore_ascii_case(key) || f.label.eq_ignore_ascii_case(key))
            .map(|f| f.kind)
    }

    pub fn data(&self) -> &'static FragranceData {
        FRAGRANCES
            .iter()
            .find(|f| f.kind == *self)
            .unwrap_or(&FRAGRANCES[1])
    }

    pub fn key(&self) -> &'static str {
        self.data().key
    }

    pub fn cap_pct(&self) -> f64 {
        self.data().cap_pct
    }

    pub fn note(&self) -> &'static str {
        self.data().note
    }
}

impl From<String> for FragranceKind {
    fn from(value: String) -> Self {
        FragranceKind::from_key(&value).unwrap_or_default()
    }
}

impl From<FragranceKind> for String {
    fn from(value: FragranceKind) -> Self {
        value.key().to_string()
    }
}

const FRAGRANCES: &[FragranceData] = &[
    FragranceData {
        kind: FragranceKind::FragranceOil,
        key: "fragrance_oil",
        label: "Fragrance Oil",
        cap_pct: 4.5,
        note: "피부 안전 등급 FO 기준. 공급사 IFRA 최대치를 확인할 것",
    },
    FragranceData {
        kind: FragranceKind::EssentialOil,
        key: "essential_oil",
        label: "Essential Oil (general)",
        cap_pct: 3.0,
        note: "일반 에센셜 오일 블렌드",
    },
    FragranceData {
        kind: FragranceKind::Lavender,
        key: "lavender",
        label: "Lavender",
        cap_pct: 3.0,
        note: "트레이스 영향 적음",
    },
    FragranceData {
        kind: FragranceKind::Citrus,
        key: "citrus",
        label: "Citrus",
        cap_pct: 3.0,
        note: "향 지속력 약함, 광독성 주의(리브온 제품)",
    },
    FragranceData {
        kind: FragranceKind::TeaTree,
        key: "tea_tree",
        label: "Tea Tree",
        cap_pct: 2.0,
        note: "강한 향, 소량 사용",
    },
    FragranceData {
        kind: FragranceKind::Eucalyptus,
        key: "eucalyptus",
        label: "Eucalyptus",
        cap_pct: 2.0,
        note: "점막 자극 가능",
    },
    FragranceData {
        kind: FragranceKind::Peppermint,
        key: "peppermint",
        label: "Peppermint",
        cap_pct: 1.0,
        note: "멘톨 자극, 얼굴용 제품은 더 낮게",
    },
    FragranceData {
        kind: FragranceKind::Spice,
        key: "spice",
        label: "Cinnamon / Clove",
        cap_pct: 0.5,
        note: "피부 감작성 높음, 트레이스 가속",
    },
];
