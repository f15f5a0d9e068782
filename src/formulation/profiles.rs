//! 내장 레시피 프로파일(오일 비율 프리셋).

use crate::formulation::oils::OilEntry;

#[derive(Debug)]
pub struct Profile {
    pub key: &'static str,
    pub label: &'static str,
    /// (오일 이름, %), 합은 100
    pub oils: &'static [(&'static str, f64)],
}

pub fn profiles() -> &'static [Profile] {
    PROFILES
}

pub fn find_profile(key: &str) -> Option<&'static Profile> {
    let key = key.trim();
    PROFILES
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(key) || p.label.eq_ignore_ascii_case(key))
}

impl Profile {
    /// 백분율 기준 오일 입력으로 펼친다.
    pub fn entries(&self) -> Vec<OilEntry> {
        self.oils
            .iter()
            .map(|(name, pct)| OilEntry::new(*name, *pct))
            .collect()
    }
}

const PROFILES: &[Profile] = &[
    Profile {
        key: "balanced",
        label: "Balanced Bar",
        oils: &[
            ("Olive Oil", 45.0),
            ("Coconut Oil", 30.0),
            ("Lard", 15.0),
            ("Shea Butter", 7.0),
            ("Castor Oil", 3.0),
        ],
    },
    Profile {
        key: "castile",
        label: "Castile",
        oils: &[("Olive Oil", 100.0)],
    },
    Profile {
        key: "bastille",
        label: "Bastille",
        oils: &[("Olive Oil", 80.0), ("Coconut Oil", 20.0)],
    },
    Profile {
        key: "vegan",
        label: "Vegan Bar",
        oils: &[
            ("Olive Oil", 40.0),
            ("Coconut Oil", 30.0),
            ("Shea Butter", 15.0),
            ("Cocoa Butter", 10.0),
            ("Castor Oil", 5.0),
        ],
    },
    Profile {
        key: "liquid",
        label: "Liquid Soap",
        oils: &[
            ("Coconut Oil", 50.0),
            ("Olive Oil", 30.0),
            ("Castor Oil", 20.0),
        ],
    },
];
