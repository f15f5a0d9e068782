use std::io::{self, BufRead, Write};

use crate::app::{AppError, Workspace};
use crate::config::Config;
use crate::conversion;
use crate::formulation::cost::{estimate_cost, CostInput, CostResult, PriceEntry};
use crate::formulation::lye::LyeKind;
use crate::formulation::oils::{OilBasis, OilEntry};
use crate::formulation::profiles;
use crate::formulation::recipe::{RecipeResult, RecipeWarning};
use crate::formulation::safety::SafetyLevel;
use crate::formulation::water::{WaterMode, WaterSetting};
use crate::formulation::ProductMode;
use crate::i18n::{keys, Translator};
use crate::input;
use crate::oil_db;
use crate::safety_db::{fragrance_kinds, FragranceKind};
use crate::session::Outcome;
use crate::storage::KeyValueStore;
use crate::units::{convert_mass, MassUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ProductMode,
    Recipe,
    SavedRecipes,
    Prices,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_PRODUCT_MODE,
        keys::MAIN_MENU_RECIPE,
        keys::MAIN_MENU_SAVED,
        keys::MAIN_MENU_PRICES,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::ProductMode),
            "2" => return Ok(MenuChoice::Recipe),
            "3" => return Ok(MenuChoice::SavedRecipes),
            "4" => return Ok(MenuChoice::Prices),
            "5" => return Ok(MenuChoice::UnitConversion),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 제품 모드 메뉴를 처리한다.
pub fn handle_product_mode(tr: &Translator, ws: &mut Workspace) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MODE_HEADING));
    println!("{} {}", tr.t(keys::MODE_CURRENT), ws.session.mode().label());
    for (i, mode) in ProductMode::ALL.iter().enumerate() {
        println!("{:>2}) {}", i + 1, mode.label());
    }
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let picked = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| ProductMode::ALL.get(i).copied())
        .or_else(|| ProductMode::from_key(&sel));
    match picked {
        Some(mode) => {
            ws.session.set_mode(mode, &mut ws.input);
            println!("{} {}", tr.t(keys::MODE_CURRENT), mode.label());
            if !mode.is_soap() {
                println!("{}", tr.t(keys::MODE_COMING_SOON));
            }
        }
        None => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 레시피 메뉴를 처리한다.
pub fn handle_recipe(tr: &Translator, ws: &mut Workspace) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RECIPE_HEADING));
    if !ws.session.mode().is_soap() {
        println!("{}", tr.t(keys::MODE_COMING_SOON));
        return Ok(());
    }
    println!("{}", tr.t(keys::RECIPE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            enter_recipe(tr, ws)?;
            recalculate(tr, ws);
        }
        "2" => {
            for p in profiles::profiles() {
                println!("  {:<10} {}", p.key, p.label);
            }
            let key = read_line(tr.t(keys::PROMPT_PROFILE))?;
            match profiles::find_profile(&key) {
                Some(profile) => {
                    ws.input.target_oil_g = read_number(tr.t(keys::PROMPT_TARGET_OIL))?;
                    ws.session.apply_profile(profile, &mut ws.input);
                    recalculate(tr, ws);
                }
                None => println!("{}", tr.t(keys::INVALID_SELECTION)),
            }
        }
        "3" => recalculate(tr, ws),
        "4" => {
            let target = read_number(tr.t(keys::PROMPT_NEW_TARGET))?;
            if ws.session.scale_to(target, &mut ws.input) {
                println!("{} {}", tr.t(keys::RECIPE_SCALED), fmt_mass(target, MassUnit::Gram));
                recalculate(tr, ws);
            } else {
                println!("{}", tr.t(keys::RECIPE_NOT_CALCULATED));
            }
        }
        "5" => {
            let Some(result) = ws.session.last_result() else {
                println!("{}", tr.t(keys::RECIPE_NOT_CALCULATED));
                return Ok(());
            };
            let unit_count = read_number(tr.t(keys::PROMPT_UNIT_COUNT))? as u32;
            let sale_price = read_number(tr.t(keys::PROMPT_SALE_PRICE))?;
            let usage = result.usage();
            let prices = ws.prices.to_map();
            let cost = estimate_cost(CostInput {
                usage: &usage,
                prices: &prices,
                fragrance_g: result.additives.fragrance.grams,
                unit_count,
                sale_price,
            });
            print_cost(tr, &cost);
        }
        "6" => {
            let name = read_line(tr.t(keys::PROMPT_RECIPE_NAME))?;
            let saved = ws.session.snapshot(&ws.input);
            ws.recipes.put(&name, saved)?;
            println!("{} {}", tr.t(keys::RECIPE_SAVED), name.trim());
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

fn recalculate(tr: &Translator, ws: &mut Workspace) {
    let unit = ws.config.display_unit;
    match ws.session.recalculate(&ws.input) {
        Outcome::Calculated(result) => print_result(tr, result, unit),
        Outcome::ComingSoon(_) => println!("{}", tr.t(keys::MODE_COMING_SOON)),
    }
}

/// 레시피 전체를 대화형으로 입력받는다. 숫자가 아닌 입력은 0으로 처리한다.
fn enter_recipe(tr: &Translator, ws: &mut Workspace) -> Result<(), AppError> {
    let mut input = ws.config.new_recipe();
    input.lye.kind = ws.input.lye.kind;

    println!("{}", tr.t(keys::RECIPE_BASIS_OPTIONS));
    let basis = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "2" => OilBasis::Percent,
        _ => OilBasis::Weight,
    };
    let unit = if basis == OilBasis::Percent {
        input.target_oil_g = read_number(tr.t(keys::PROMPT_TARGET_OIL))?;
        MassUnit::Gram
    } else {
        println!("{}", tr.t(keys::RECIPE_UNIT_OPTIONS));
        read_mass_unit(tr.t(keys::PROMPT_SELECT))?.unwrap_or(MassUnit::Gram)
    };

    let names: Vec<&str> = oil_db::oils().iter().map(|o| o.name).collect();
    println!("{} {}", tr.t(keys::HELP_OIL_NAMES), names.join(", "));
    let mut oils = Vec::new();
    loop {
        let name = read_line(tr.t(keys::PROMPT_OIL_NAME))?;
        if name.trim().is_empty() {
            break;
        }
        let amount = read_number(tr.t(keys::PROMPT_OIL_AMOUNT))?;
        oils.push(OilEntry::new(name.trim(), amount));
    }
    input.oils = oils;

    input.superfat_pct = read_number(tr.t(keys::PROMPT_SUPERFAT))?;
    if !ws.session.mode().locks_lye() {
        let kind = read_line(tr.t(keys::PROMPT_LYE_KIND))?;
        input.lye.kind = match kind.trim() {
            "2" => LyeKind::KOH,
            "3" => LyeKind::Dual,
            _ => LyeKind::NaOH,
        };
    }
    if input.lye.kind != LyeKind::KOH {
        input.lye.naoh_purity_pct = read_number(tr.t(keys::PROMPT_NAOH_PURITY))?;
    }
    if input.lye.kind != LyeKind::NaOH {
        input.lye.koh_purity_pct = read_number(tr.t(keys::PROMPT_KOH_PURITY))?;
    }
    if input.lye.kind == LyeKind::Dual {
        input.lye.dual_naoh_pct = read_number(tr.t(keys::PROMPT_DUAL_SPLIT))?;
    }

    let mode = match read_line(tr.t(keys::PROMPT_WATER_MODE))?.trim() {
        "1" => Some(WaterMode::Ratio),
        "2" => Some(WaterMode::PercentOfOil),
        "3" => Some(WaterMode::PercentSolution),
        _ => None,
    };
    input.water = match mode {
        Some(mode) => WaterSetting::new(mode, read_number(tr.t(keys::PROMPT_WATER_PARAMETER))?),
        None => WaterSetting::default(),
    };
    input.milk_pct = read_number(tr.t(keys::PROMPT_MILK))?;

    input.additives.fragrance = read_number(tr.t(keys::PROMPT_FRAGRANCE_PCT))?;
    if input.additives.fragrance > 0.0 {
        for f in fragrance_kinds() {
            println!("  {:<14} {:<24} max {:.1}%", f.key, f.label, f.cap_pct);
        }
        let key = read_line(tr.t(keys::PROMPT_FRAGRANCE_KIND))?;
        input.fragrance_kind = FragranceKind::from(key);
    }
    input.additives.sodium_lactate = read_number(tr.t(keys::PROMPT_SODIUM_LACTATE))?;
    input.additives.salt = read_number(tr.t(keys::PROMPT_SALT))?;
    input.additives.sugar = read_number(tr.t(keys::PROMPT_SUGAR))?;
    input.additives.clay = read_number(tr.t(keys::PROMPT_CLAY))?;
    input.additives.chelator = read_number(tr.t(keys::PROMPT_CHELATOR))?;

    let capacity = read_number(tr.t(keys::PROMPT_CAPACITY))?;
    input.capacity_g = (capacity > 0.0).then_some(capacity);

    ws.session.basis = basis;
    ws.session.unit = unit;
    ws.input = input;
    Ok(())
}

/// 저장된 레시피 메뉴를 처리한다.
pub fn handle_saved_recipes(tr: &Translator, ws: &mut Workspace) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SAVED_HEADING));
    let names = ws.recipes.names();
    if names.is_empty() {
        println!("{}", tr.t(keys::SAVED_EMPTY));
        return Ok(());
    }
    for name in &names {
        println!("  - {name}");
    }
    println!("{}", tr.t(keys::SAVED_OPTIONS));
    match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => {
            let name = read_line(tr.t(keys::PROMPT_RECIPE_NAME))?;
            match ws.recipes.get(&name) {
                Some(saved) => {
                    ws.input = ws.session.restore(saved);
                    println!("{} {}", tr.t(keys::SAVED_LOADED), name.trim());
                    recalculate(tr, ws);
                }
                None => println!("{} {}", tr.t(keys::SAVED_NOT_FOUND), name.trim()),
            }
        }
        "2" => {
            let name = read_line(tr.t(keys::PROMPT_RECIPE_NAME))?;
            if ws.recipes.delete(&name)? {
                println!("{} {}", tr.t(keys::SAVED_DELETED), name.trim());
            } else {
                println!("{} {}", tr.t(keys::SAVED_NOT_FOUND), name.trim());
            }
        }
        _ => {}
    }
    Ok(())
}

/// 가격표 메뉴를 처리한다.
pub fn handle_prices(tr: &Translator, ws: &mut Workspace) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRICES_HEADING));
    for (name, entry) in ws.prices.get_all() {
        println!(
            "  {:<20} {:>10.2} / {:>8.1} g",
            name, entry.unit_cost, entry.package_size
        );
    }
    println!("{}", tr.t(keys::PRICES_OPTIONS));
    match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => {
            let name = read_line(tr.t(keys::PROMPT_INGREDIENT))?;
            let unit_cost = read_number(tr.t(keys::PROMPT_UNIT_COST))?;
            let package_size = read_number(tr.t(keys::PROMPT_PACKAGE_SIZE))?;
            ws.prices.put(&name, PriceEntry::new(unit_cost, package_size))?;
        }
        "2" => {
            let name = read_line(tr.t(keys::PROMPT_INGREDIENT))?;
            ws.prices.delete(&name)?;
        }
        _ => {}
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    let value = read_number(tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(value, from_unit.trim(), to_unit.trim())?;
    println!("{} {result:.3} {}", tr.t(keys::UNIT_CONVERSION_RESULT), to_unit.trim());
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_UNIT), cfg.display_unit.symbol());
    match read_mass_unit(tr.t(keys::SETTINGS_PROMPT_CHANGE))? {
        Some(unit) => {
            cfg.display_unit = unit;
            println!("{} {}", tr.t(keys::SETTINGS_SAVED), unit.symbol());
        }
        None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

/// 계산 결과를 출력한다.
pub fn print_result(tr: &Translator, result: &RecipeResult, unit: MassUnit) {
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!("{}:", tr.t(keys::RESULT_OILS));
    for oil in &result.oils {
        println!("  {:<22} {}", oil.name, fmt_mass(oil.grams, unit));
    }
    println!("  {:<22} {}", "Σ", fmt_mass(result.oil_total_g, unit));
    if result.lye.naoh_g > 0.0 {
        println!("{:<24} {}", tr.t(keys::RESULT_NAOH), fmt_mass(result.lye.naoh_g, unit));
    }
    if result.lye.koh_g > 0.0 {
        println!("{:<24} {}", tr.t(keys::RESULT_KOH), fmt_mass(result.lye.koh_g, unit));
    }
    println!("{:<24} {}", tr.t(keys::RESULT_WATER), fmt_mass(result.water_g, unit));
    if result.milk_g > 0.0 {
        println!("{:<24} {}", tr.t(keys::RESULT_MILK), fmt_mass(result.milk_g, unit));
    }
    println!(
        "{:<24} {:.1} %",
        tr.t(keys::RESULT_CONCENTRATION),
        result.batch.lye_concentration_pct
    );

    let fragrance = &result.additives.fragrance;
    if fragrance.grams > 0.0 {
        println!(
            "{:<24} {} ({:.2}% / max {:.1}%, {}) - {}",
            tr.t(keys::RESULT_FRAGRANCE),
            fmt_mass(fragrance.grams, unit),
            fragrance.percent,
            fragrance.cap_pct,
            level_text(tr, fragrance.level),
            fragrance.note
        );
    }
    println!("{}:", tr.t(keys::RESULT_ADDITIVES));
    for line in result.additives.lines.iter().filter(|l| l.grams > 0.0) {
        println!(
            "  {:<22} {} ({:.2}%, {:.1}~{:.1}%: {})",
            line.additive.name(),
            fmt_mass(line.grams, unit),
            line.percent,
            line.range.0,
            line.range.1,
            level_text(tr, line.level)
        );
    }

    println!("{:<24} {}", tr.t(keys::RESULT_TOTAL), fmt_mass(result.batch.total_g, unit));
    if let Some(check) = result.batch.capacity {
        println!(
            "{:<24} {} ~ {}",
            tr.t(keys::RESULT_CAPACITY),
            fmt_mass(check.min_fill_g, unit),
            fmt_mass(check.max_fill_g, unit)
        );
        if check.is_overflow_risk() {
            println!("{}", tr.t(keys::RESULT_OVERFLOW));
        }
    }

    for warning in &result.warnings {
        match warning {
            RecipeWarning::NoOils => println!("! {}", tr.t(keys::WARN_NO_OILS)),
            RecipeWarning::UnknownOil(name) => {
                println!("! {} {name}", tr.t(keys::WARN_UNKNOWN_OIL))
            }
            RecipeWarning::PercentTotal(total) => {
                println!("! {} {total:.2}%", tr.t(keys::WARN_PERCENT_TOTAL))
            }
            RecipeWarning::InvalidWaterSetting => println!("! {}", tr.t(keys::WARN_INVALID_WATER)),
        }
    }
}

/// 원가 계산 결과를 출력한다.
pub fn print_cost(tr: &Translator, cost: &CostResult) {
    println!("{}", tr.t(keys::COST_HEADING));
    for line in cost.lines.iter().filter(|l| l.cost > 0.0) {
        println!("  {:<22} {:>10.2}", line.name, line.cost);
    }
    if cost.fragrance_cost > 0.0 {
        println!("  {:<22} {:>10.2}", "Fragrance", cost.fragrance_cost);
    }
    println!("{:<24} {:>10.2}", tr.t(keys::COST_TOTAL), cost.total_cost);
    println!("{:<24} {:>10.2}", tr.t(keys::COST_PER_UNIT), cost.per_unit_cost);
    println!("{:<24} {:>9.1} %", tr.t(keys::COST_MARGIN), cost.margin_pct);
}

fn level_text<'a>(tr: &'a Translator, level: SafetyLevel) -> &'a str {
    match level {
        SafetyLevel::Unused => tr.t(keys::LEVEL_UNUSED),
        SafetyLevel::Low => tr.t(keys::LEVEL_LOW),
        SafetyLevel::Ok => tr.t(keys::LEVEL_OK),
        SafetyLevel::High => tr.t(keys::LEVEL_HIGH),
    }
}

/// g 값을 표시 단위로 바꿔 문자열로 만든다.
pub fn fmt_mass(grams: f64, unit: MassUnit) -> String {
    let value = convert_mass(grams, MassUnit::Gram, unit);
    match unit {
        MassUnit::Gram => format!("{value:.2} g"),
        _ => format!("{value:.3} {}", unit.symbol()),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    Ok(next_line(&mut io::stdin().lock())?)
}

/// 한 줄을 읽는다. 입력이 끝났으면 `UnexpectedEof` 오류.
pub fn next_line(reader: &mut impl BufRead) -> io::Result<String> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
    }
    Ok(buf)
}

/// 숫자를 읽는다. 해석할 수 없거나 음수인 입력은 0.
fn read_number(prompt: &str) -> Result<f64, AppError> {
    Ok(input::number(&read_line(prompt)?))
}

/// 번호(1~4) 또는 단위 기호로 질량 단위를 읽는다. 빈 입력이나 모르는 단위는 None.
fn read_mass_unit(prompt: &str) -> Result<Option<MassUnit>, AppError> {
    let sel = read_line(prompt)?;
    let unit = match sel.trim() {
        "1" => Some(MassUnit::Gram),
        "2" => Some(MassUnit::Ounce),
        "3" => Some(MassUnit::Kilogram),
        "4" => Some(MassUnit::Pound),
        "" => None,
        other => conversion::parse_mass_unit(other).ok(),
    };
    Ok(unit)
}
