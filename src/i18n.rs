use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PRODUCT_MODE: &str = "main_menu.product_mode";
    pub const MAIN_MENU_RECIPE: &str = "main_menu.recipe";
    pub const MAIN_MENU_SAVED: &str = "main_menu.saved";
    pub const MAIN_MENU_PRICES: &str = "main_menu.prices";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const INVALID_SELECTION: &str = "error.invalid_selection";

    pub const MODE_HEADING: &str = "mode.heading";
    pub const MODE_CURRENT: &str = "mode.current";
    pub const MODE_COMING_SOON: &str = "mode.coming_soon";

    pub const RECIPE_HEADING: &str = "recipe.heading";
    pub const RECIPE_OPTIONS: &str = "recipe.options";
    pub const RECIPE_BASIS_OPTIONS: &str = "recipe.basis_options";
    pub const RECIPE_UNIT_OPTIONS: &str = "recipe.unit_options";
    pub const PROMPT_TARGET_OIL: &str = "prompt.target_oil";
    pub const PROMPT_OIL_NAME: &str = "prompt.oil_name";
    pub const PROMPT_OIL_AMOUNT: &str = "prompt.oil_amount";
    pub const PROMPT_SUPERFAT: &str = "prompt.superfat";
    pub const PROMPT_LYE_KIND: &str = "prompt.lye_kind";
    pub const PROMPT_NAOH_PURITY: &str = "prompt.naoh_purity";
    pub const PROMPT_KOH_PURITY: &str = "prompt.koh_purity";
    pub const PROMPT_DUAL_SPLIT: &str = "prompt.dual_split";
    pub const PROMPT_WATER_MODE: &str = "prompt.water_mode";
    pub const PROMPT_WATER_PARAMETER: &str = "prompt.water_parameter";
    pub const PROMPT_MILK: &str = "prompt.milk";
    pub const PROMPT_FRAGRANCE_PCT: &str = "prompt.fragrance_pct";
    pub const PROMPT_FRAGRANCE_KIND: &str = "prompt.fragrance_kind";
    pub const PROMPT_SODIUM_LACTATE: &str = "prompt.sodium_lactate";
    pub const PROMPT_SALT: &str = "prompt.salt";
    pub const PROMPT_SUGAR: &str = "prompt.sugar";
    pub const PROMPT_CLAY: &str = "prompt.clay";
    pub const PROMPT_CHELATOR: &str = "prompt.chelator";
    pub const PROMPT_CAPACITY: &str = "prompt.capacity";
    pub const PROMPT_PROFILE: &str = "prompt.profile";
    pub const PROMPT_NEW_TARGET: &str = "prompt.new_target";
    pub const PROMPT_RECIPE_NAME: &str = "prompt.recipe_name";
    pub const PROMPT_UNIT_COUNT: &str = "prompt.unit_count";
    pub const PROMPT_SALE_PRICE: &str = "prompt.sale_price";
    pub const RECIPE_NOT_CALCULATED: &str = "recipe.not_calculated";
    pub const RECIPE_SAVED: &str = "recipe.saved";
    pub const RECIPE_SCALED: &str = "recipe.scaled";
    pub const HELP_OIL_NAMES: &str = "help.oil_names";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_OILS: &str = "result.oils";
    pub const RESULT_NAOH: &str = "result.naoh";
    pub const RESULT_KOH: &str = "result.koh";
    pub const RESULT_WATER: &str = "result.water";
    pub const RESULT_MILK: &str = "result.milk";
    pub const RESULT_CONCENTRATION: &str = "result.concentration";
    pub const RESULT_ADDITIVES: &str = "result.additives";
    pub const RESULT_FRAGRANCE: &str = "result.fragrance";
    pub const RESULT_TOTAL: &str = "result.total";
    pub const RESULT_CAPACITY: &str = "result.capacity";
    pub const RESULT_OVERFLOW: &str = "result.overflow";

    pub const LEVEL_UNUSED: &str = "level.unused";
    pub const LEVEL_LOW: &str = "level.low";
    pub const LEVEL_OK: &str = "level.ok";
    pub const LEVEL_HIGH: &str = "level.high";

    pub const WARN_NO_OILS: &str = "warning.no_oils";
    pub const WARN_UNKNOWN_OIL: &str = "warning.unknown_oil";
    pub const WARN_PERCENT_TOTAL: &str = "warning.percent_total";
    pub const WARN_INVALID_WATER: &str = "warning.invalid_water";

    pub const COST_HEADING: &str = "cost.heading";
    pub const COST_TOTAL: &str = "cost.total";
    pub const COST_PER_UNIT: &str = "cost.per_unit";
    pub const COST_MARGIN: &str = "cost.margin";

    pub const SAVED_HEADING: &str = "saved.heading";
    pub const SAVED_EMPTY: &str = "saved.empty";
    pub const SAVED_OPTIONS: &str = "saved.options";
    pub const SAVED_LOADED: &str = "saved.loaded";
    pub const SAVED_DELETED: &str = "saved.deleted";
    pub const SAVED_NOT_FOUND: &str = "saved.not_found";

    pub const PRICES_HEADING: &str = "prices.heading";
    pub const PRICES_OPTIONS: &str = "prices.options";
    pub const PROMPT_INGREDIENT: &str = "prompt.ingredient";
    pub const PROMPT_UNIT_COST: &str = "prompt.unit_cost";
    pub const PROMPT_PACKAGE_SIZE: &str = "prompt.package_size";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT: &str = "settings.current_unit";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순으로 찾고, 영어 번역이 없으면 한국어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵(중첩 테이블은 점으로 연결).
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Lye, Dye & DIY ===",
        MAIN_MENU_PRODUCT_MODE => "1) 제품 모드",
        MAIN_MENU_RECIPE => "2) 레시피 계산",
        MAIN_MENU_SAVED => "3) 저장된 레시피",
        MAIN_MENU_PRICES => "4) 가격표",
        MAIN_MENU_UNIT_CONVERSION => "5) 단위 변환",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        INVALID_SELECTION => "잘못된 선택입니다.",
        MODE_HEADING => "\n-- 제품 모드 --",
        MODE_CURRENT => "현재 모드:",
        MODE_COMING_SOON => "준비 중입니다. 잘 숙성된 콜드 프로세스 비누처럼, 이 기능도 몇 주 더 기다려 주세요!",
        RECIPE_HEADING => "\n-- 레시피 --",
        RECIPE_OPTIONS => "1) 새 레시피 입력  2) 프로파일 적용  3) 다시 계산  4) 오일 총량 조정  5) 원가 계산  6) 저장",
        RECIPE_BASIS_OPTIONS => "오일 입력 기준: 1=질량 2=백분율(%)",
        RECIPE_UNIT_OPTIONS => "질량 단위: 1=g 2=oz 3=kg 4=lb",
        PROMPT_TARGET_OIL => "목표 오일 총량 [g]: ",
        PROMPT_OIL_NAME => "오일 이름 (빈 줄이면 입력 종료): ",
        PROMPT_OIL_AMOUNT => "양: ",
        PROMPT_SUPERFAT => "슈퍼팻 [%]: ",
        PROMPT_LYE_KIND => "가성소다 종류 (1=NaOH 2=KOH 3=혼합): ",
        PROMPT_NAOH_PURITY => "NaOH 순도 [%]: ",
        PROMPT_KOH_PURITY => "KOH 순도 [%]: ",
        PROMPT_DUAL_SPLIT => "혼합 중 NaOH 비율 [%]: ",
        PROMPT_WATER_MODE => "물 계산 방식 (1=물:가성소다 비 2=오일 대비 % 3=수용액 농도 %): ",
        PROMPT_WATER_PARAMETER => "값: ",
        PROMPT_MILK => "액체 중 우유 비율 [%] (없으면 0): ",
        PROMPT_FRAGRANCE_PCT => "향료 [% of oils]: ",
        PROMPT_FRAGRANCE_KIND => "향료 종류 키: ",
        PROMPT_SODIUM_LACTATE => "소듐 락테이트 [%]: ",
        PROMPT_SALT => "소금 [%]: ",
        PROMPT_SUGAR => "설탕 [%]: ",
        PROMPT_CLAY => "클레이 [%]: ",
        PROMPT_CHELATOR => "킬레이트제 [%]: ",
        PROMPT_CAPACITY => "몰드/냄비 용량 [g] (없으면 0): ",
        PROMPT_PROFILE => "프로파일 키: ",
        PROMPT_NEW_TARGET => "새 오일 총량 [g]: ",
        PROMPT_RECIPE_NAME => "레시피 이름: ",
        PROMPT_UNIT_COUNT => "제품 개수: ",
        PROMPT_SALE_PRICE => "개당 판매가: ",
        RECIPE_NOT_CALCULATED => "먼저 레시피를 계산하세요.",
        RECIPE_SAVED => "저장했습니다:",
        RECIPE_SCALED => "오일 구성을 조정했습니다. 새 총량:",
        HELP_OIL_NAMES => "사용 가능한 오일:",
        RESULT_HEADING => "\n=== 계산 결과 ===",
        RESULT_OILS => "오일",
        RESULT_NAOH => "NaOH",
        RESULT_KOH => "KOH",
        RESULT_WATER => "물",
        RESULT_MILK => "우유",
        RESULT_CONCENTRATION => "가성소다 농도",
        RESULT_ADDITIVES => "첨가물",
        RESULT_FRAGRANCE => "향료",
        RESULT_TOTAL => "배치 총량",
        RESULT_CAPACITY => "안전 충전 구간",
        RESULT_OVERFLOW => "위험: 용량의 75%를 넘습니다. 넘칠 수 있습니다.",
        LEVEL_UNUSED => "미사용",
        LEVEL_LOW => "부족",
        LEVEL_OK => "적정",
        LEVEL_HIGH => "과다",
        WARN_NO_OILS => "오일이 없습니다.",
        WARN_UNKNOWN_OIL => "검화가를 모르는 오일(가성소다 계산에서 제외):",
        WARN_PERCENT_TOTAL => "오일 비율 합이 100%가 아닙니다:",
        WARN_INVALID_WATER => "수용액 농도가 0이라 물을 계산할 수 없습니다.",
        COST_HEADING => "\n=== 원가 ===",
        COST_TOTAL => "배치 원가",
        COST_PER_UNIT => "개당 원가",
        COST_MARGIN => "마진",
        SAVED_HEADING => "\n-- 저장된 레시피 --",
        SAVED_EMPTY => "저장된 레시피가 없습니다.",
        SAVED_OPTIONS => "1) 불러오기  2) 삭제  0) 돌아가기",
        SAVED_LOADED => "불러왔습니다:",
        SAVED_DELETED => "삭제했습니다:",
        SAVED_NOT_FOUND => "해당 이름의 레시피가 없습니다:",
        PRICES_HEADING => "\n-- 가격표 --",
        PRICES_OPTIONS => "1) 항목 설정  2) 항목 삭제  0) 돌아가기",
        PROMPT_INGREDIENT => "재료 이름: ",
        PROMPT_UNIT_COST => "포장 단위 가격: ",
        PROMPT_PACKAGE_SIZE => "포장 단위 질량 [g]: ",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: g, oz, kg, lb): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: oz, g): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT => "현재 표시 단위:",
        SETTINGS_PROMPT_CHANGE => "표시 단위 변경 (1=g 2=oz 3=kg 4=lb, 취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "표시 단위가 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Lye, Dye & DIY ===",
        MAIN_MENU_PRODUCT_MODE => "1) Product mode",
        MAIN_MENU_RECIPE => "2) Recipe calculator",
        MAIN_MENU_SAVED => "3) Saved recipes",
        MAIN_MENU_PRICES => "4) Price table",
        MAIN_MENU_UNIT_CONVERSION => "5) Unit converter",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        INVALID_SELECTION => "Invalid selection.",
        MODE_HEADING => "\n-- Product mode --",
        MODE_CURRENT => "Current mode:",
        MODE_COMING_SOON => "Coming soon! Just like a perfectly cured bar of cold process soap, this page has to sit for a few weeks before being ready.",
        RECIPE_HEADING => "\n-- Recipe --",
        RECIPE_OPTIONS => "1) New recipe  2) Apply profile  3) Recalculate  4) Scale oils  5) Cost  6) Save",
        RECIPE_BASIS_OPTIONS => "Oil amounts: 1=weight 2=percent",
        RECIPE_UNIT_OPTIONS => "Weight unit: 1=g 2=oz 3=kg 4=lb",
        PROMPT_TARGET_OIL => "Target oil weight [g]: ",
        PROMPT_OIL_NAME => "Oil name (empty line to finish): ",
        PROMPT_OIL_AMOUNT => "Amount: ",
        PROMPT_SUPERFAT => "Superfat [%]: ",
        PROMPT_LYE_KIND => "Lye type (1=NaOH 2=KOH 3=dual): ",
        PROMPT_NAOH_PURITY => "NaOH purity [%]: ",
        PROMPT_KOH_PURITY => "KOH purity [%]: ",
        PROMPT_DUAL_SPLIT => "NaOH share of dual lye [%]: ",
        PROMPT_WATER_MODE => "Water mode (1=water:lye ratio 2=% of oils 3=lye concentration %): ",
        PROMPT_WATER_PARAMETER => "Value: ",
        PROMPT_MILK => "Milk share of liquid [%] (0 for none): ",
        PROMPT_FRAGRANCE_PCT => "Fragrance [% of oils]: ",
        PROMPT_FRAGRANCE_KIND => "Fragrance type key: ",
        PROMPT_SODIUM_LACTATE => "Sodium lactate [%]: ",
        PROMPT_SALT => "Salt [%]: ",
        PROMPT_SUGAR => "Sugar [%]: ",
        PROMPT_CLAY => "Clay [%]: ",
        PROMPT_CHELATOR => "Chelator [%]: ",
        PROMPT_CAPACITY => "Mold/pot capacity [g] (0 for none): ",
        PROMPT_PROFILE => "Profile key: ",
        PROMPT_NEW_TARGET => "New oil total [g]: ",
        PROMPT_RECIPE_NAME => "Recipe name: ",
        PROMPT_UNIT_COUNT => "Number of units: ",
        PROMPT_SALE_PRICE => "Sale price per unit: ",
        RECIPE_NOT_CALCULATED => "Calculate a recipe first.",
        RECIPE_SAVED => "Saved:",
        RECIPE_SCALED => "Oils scaled. New total:",
        HELP_OIL_NAMES => "Known oils:",
        RESULT_HEADING => "\n=== Result ===",
        RESULT_OILS => "Oils",
        RESULT_NAOH => "NaOH",
        RESULT_KOH => "KOH",
        RESULT_WATER => "Water",
        RESULT_MILK => "Milk",
        RESULT_CONCENTRATION => "Lye concentration",
        RESULT_ADDITIVES => "Additives",
        RESULT_FRAGRANCE => "Fragrance",
        RESULT_TOTAL => "Batch total",
        RESULT_CAPACITY => "Safe fill window",
        RESULT_OVERFLOW => "DANGER: batch exceeds 75% of capacity and may overflow.",
        LEVEL_UNUSED => "unused",
        LEVEL_LOW => "low",
        LEVEL_OK => "ok",
        LEVEL_HIGH => "high",
        WARN_NO_OILS => "No oils entered.",
        WARN_UNKNOWN_OIL => "Unknown saponification value (excluded from lye):",
        WARN_PERCENT_TOTAL => "Oil percentages do not add up to 100%:",
        WARN_INVALID_WATER => "Lye concentration is 0, water cannot be calculated.",
        COST_HEADING => "\n=== Cost ===",
        COST_TOTAL => "Batch cost",
        COST_PER_UNIT => "Cost per unit",
        COST_MARGIN => "Margin",
        SAVED_HEADING => "\n-- Saved recipes --",
        SAVED_EMPTY => "No saved recipes.",
        SAVED_OPTIONS => "1) Load  2) Delete  0) Back",
        SAVED_LOADED => "Loaded:",
        SAVED_DELETED => "Deleted:",
        SAVED_NOT_FOUND => "No recipe named",
        PRICES_HEADING => "\n-- Price table --",
        PRICES_OPTIONS => "1) Set entry  2) Delete entry  0) Back",
        PROMPT_INGREDIENT => "Ingredient name: ",
        PROMPT_UNIT_COST => "Package price: ",
        PROMPT_PACKAGE_SIZE => "Package size [g]: ",
        UNIT_CONVERSION_HEADING => "\n-- Unit converter --",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: g, oz, kg, lb): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: oz, g): ",
        UNIT_CONVERSION_RESULT => "Result:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT => "Current display unit:",
        SETTINGS_PROMPT_CHANGE => "Display unit (1=g 2=oz 3=kg 4=lb, Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input, nothing changed.",
        SETTINGS_SAVED => "Display unit changed:",
        _ => return None,
    };
    Some(s)
}
