use serde::{Deserialize, Serialize};

use crate::formulation::lye::LyeKind;

/// 계산기 제품 모드. 비누 모드만 실제 검화 계산을 수행한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductMode {
    #[default]
    Bar,
    Liquid,
    Castile,
    ShampooBar,
    Shampoo,
    LipBalm,
    BodyButter,
    SugarScrub,
    Lotion,
    Laundry,
    Dish,
}

impl ProductMode {
    pub const ALL: [ProductMode; 11] = [
        ProductMode::Bar,
        ProductMode::Liquid,
        ProductMode::Castile,
        ProductMode::ShampooBar,
        ProductMode::Shampoo,
        ProductMode::LipBalm,
        ProductMode::BodyButter,
        ProductMode::SugarScrub,
        ProductMode::Lotion,
        ProductMode::Laundry,
        ProductMode::Dish,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProductMode::Bar => "bar",
            ProductMode::Liquid => "liquid",
            ProductMode::Castile => "castile",
            ProductMode::ShampooBar => "shampoo_bar",
            ProductMode::Shampoo => "shampoo",
            ProductMode::LipBalm => "lip_balm",
            ProductMode::BodyButter => "body_butter",
            ProductMode::SugarScrub => "sugar_scrub",
            ProductMode::Lotion => "lotion",
            ProductMode::Laundry => "laundry",
            ProductMode::Dish => "dish",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductMode::Bar => "Bar Soap (NaOH)",
            ProductMode::Liquid => "Liquid Soap (KOH)",
            ProductMode::Castile => "Castile (100% OO)",
            ProductMode::ShampooBar => "Shampoo Bar",
            ProductMode::Shampoo => "Shampoo (Liquid)",
            ProductMode::LipBalm => "Lip Balm",
            ProductMode::BodyButter => "Body Butter",
            ProductMode::SugarScrub => "Sugar Scrub",
            ProductMode::Lotion => "Lotion",
            ProductMode::Laundry => "Laundry Soap",
            ProductMode::Dish => "Dish Soap",
        }
    }

    pub fn from_key(key: &str) -> Option<ProductMode> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.key().eq_ignore_ascii_case(key))
    }

    /// 검화 계산을 지원하는 비누 모드인지.
    pub fn is_soap(&self) -> bool {
        self.lye().is_some()
    }

    /// 가성소다 종류를 사용자가 바꿀 수 없는 모드인지. 바 비누는 기본값만 NaOH이다.
    pub fn locks_lye(&self) -> bool {
        matches!(self, ProductMode::Liquid | ProductMode::Castile)
    }

    /// 비누 모드가 고정하는 가성소다 종류.
    pub fn lye(&self) -> Option<LyeKind> {
        match self {
            ProductMode::Bar | ProductMode::Castile => Some(LyeKind::NaOH),
            ProductMode::Liquid => Some(LyeKind::KOH),
            _ => None,
        }
    }
}

impl From<String> for ProductMode {
    fn from(value: String) -> Self {
        ProductMode::from_key(&value).unwrap_or_default()
    }
}

impl From<ProductMode> for String {
    fn from(value: ProductMode) -> Self {
        value.key().to_string()
    }
}
