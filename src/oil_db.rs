/// 오일별 NaOH 검화가(SAP) 테이블을 제공한다.
/// 값은 오일 1 g을 완전히 검화하는 데 필요한 순수 NaOH 질량(g)이며 참고용이다.
/// 공급처/로트마다 차이가 있으므로 실제 배합 전 공급사 자료로 확인해야 한다.

#[derive(Debug)]
pub struct OilData {
    pub code: &'static str,
    pub name: &'static str,
    /// NaOH 검화가 [g NaOH / g oil]
    pub sap_naoh: f64,
    pub notes: &'static str,
}

pub fn oils() -> &'static [OilData] {
    OILS
}

/// 코드 또는 이름(대소문자 무시)으로 오일을 찾는다.
pub fn find_oil(name: &str) -> Option<&'static OilData> {
    let key = name.trim();
    OILS
        .iter()
        .find(|o| o.code.eq_ignore_ascii_case(key) || o.name.eq_ignore_ascii_case(key))
}

/// 오일의 NaOH 검화가. 테이블에 없는 오일이면 `None`.
pub fn sap_value(name: &str) -> Option<f64> {
    find_oil(name).map(|o| o.sap_naoh)
}

const fn oil(code: &'static str, name: &'static str, sap_naoh: f64, notes: &'static str) -> OilData {
    OilData {
        code,
        name,
        sap_naoh,
        notes,
    }
}

const OILS: &[OilData] = &[
    oil("olive", "Olive Oil", 0.134, "부드러운 비누, 느린 트레이스"),
    oil("coconut", "Coconut Oil", 0.183, "세정력/거품, 20~30% 권장"),
    oil("lard", "Lard", 0.141, "단단하고 크리미한 바"),
    oil("shea", "Shea Butter", 0.128, "보습, 5~15%"),
    oil("castor", "Castor Oil", 0.128, "거품 유지, 5% 내외"),
    oil("palm", "Palm Oil", 0.141, "경도 보강"),
    oil("palm_kernel", "Palm Kernel Oil", 0.156, "코코넛 대체"),
    oil("tallow", "Beef Tallow", 0.143, "단단한 바"),
    oil("cocoa", "Cocoa Butter", 0.137, "경도, 15% 이하"),
    oil("mango", "Mango Butter", 0.128, "보습 버터"),
    oil("sweet_almond", "Sweet Almond Oil", 0.136, "컨디셔닝"),
    oil("avocado", "Avocado Oil", 0.133, "컨디셔닝"),
    oil("sunflower", "Sunflower Oil", 0.134, "산패 주의, 15% 이하"),
    oil("canola", "Canola Oil", 0.124, "올리브 대체"),
    oil("rice_bran", "Rice Bran Oil", 0.128, "컨디셔닝"),
    oil("grapeseed", "Grapeseed Oil", 0.126, "산패 주의"),
    oil("hemp", "Hemp Seed Oil", 0.135, "산패 주의, 10% 이하"),
    oil("apricot", "Apricot Kernel Oil", 0.135, "컨디셔닝"),
    oil("babassu", "Babassu Oil", 0.175, "코코넛 대체"),
    oil("jojoba", "Jojoba Oil", 0.069, "왁스 에스터, 검화가 낮음"),
];
