use approx::assert_abs_diff_eq;
use lye_dye_toolbox::formulation::oils::{OilBasis, OilEntry};
use lye_dye_toolbox::formulation::recipe::{calculate, RecipeInput, RecipeWarning};
use lye_dye_toolbox::formulation::safety::Severity;
use lye_dye_toolbox::formulation::water::{WaterMode, WaterSetting};
use lye_dye_toolbox::units::MassUnit;

fn balanced() -> RecipeInput {
    RecipeInput {
        oils: vec![
            OilEntry::new("Olive Oil", 45.0),
            OilEntry::new("Coconut Oil", 30.0),
            OilEntry::new("Lard", 15.0),
            OilEntry::new("Shea Butter", 7.0),
            OilEntry::new("Castor Oil", 3.0),
        ],
        ..RecipeInput::default()
    }
}

#[test]
fn balanced_bar_end_to_end() {
    let res = calculate(&balanced(), OilBasis::Percent, MassUnit::Gram);
    assert_abs_diff_eq!(res.oil_total_g, 1000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(res.lye.naoh_g, 141.6925, epsilon = 1e-9);
    assert_eq!(res.lye.koh_g, 0.0);
    assert_abs_diff_eq!(res.water_g, 354.23125, epsilon = 1e-9);
    assert_eq!(res.milk_g, 0.0);
    assert_abs_diff_eq!(res.batch.total_g, 1000.0 + 141.6925 + 354.23125, epsilon = 1e-9);
    assert_abs_diff_eq!(res.batch.lye_concentration_pct, 100.0 / 3.5, epsilon = 1e-9);
    assert!(res.warnings.is_empty());
    assert_eq!(res.worst_severity(), Severity::Info);
}

#[test]
fn milk_and_capacity_flow_through() {
    let recipe = RecipeInput {
        milk_pct: 50.0,
        capacity_g: Some(1800.0),
        ..balanced()
    };
    let res = calculate(&recipe, OilBasis::Percent, MassUnit::Gram);
    assert_abs_diff_eq!(res.milk_g, res.water_g, epsilon = 1e-9);
    assert_abs_diff_eq!(res.liquid.water_g, 354.23125, epsilon = 1e-9);
    let check = res.batch.capacity.expect("capacity");
    assert!(check.is_overflow_risk());
    assert_eq!(res.worst_severity(), Severity::Danger);
    assert!(res
        .classifications()
        .contains(&("Capacity", Severity::Danger)));
}

#[test]
fn warnings_are_collected() {
    let recipe = RecipeInput {
        oils: vec![OilEntry::new("Olive Oil", 60.0), OilEntry::new("Moon Butter", 20.0)],
        water: WaterSetting::new(WaterMode::PercentSolution, 0.0),
        ..RecipeInput::default()
    };
    let res = calculate(&recipe, OilBasis::Percent, MassUnit::Gram);
    assert!(res
        .warnings
        .contains(&RecipeWarning::UnknownOil("Moon Butter".to_string())));
    assert!(res.warnings.contains(&RecipeWarning::PercentTotal(80.0)));
    assert!(res.warnings.contains(&RecipeWarning::InvalidWaterSetting));
    assert_eq!(res.water_g, 0.0);
}

#[test]
fn no_oils_warns_and_yields_zero() {
    let res = calculate(&RecipeInput::default(), OilBasis::Weight, MassUnit::Gram);
    assert_eq!(res.warnings, vec![RecipeWarning::NoOils]);
    assert_eq!(res.batch.total_g, 0.0);
    assert_eq!(res.lye.naoh_g, 0.0);
}

#[test]
fn usage_lists_weighed_ingredients_only() {
    let mut recipe = balanced();
    recipe.additives.salt = 1.0;
    let res = calculate(&recipe, OilBasis::Percent, MassUnit::Gram);
    let usage = res.usage();
    let names: Vec<&str> = usage.iter().map(|(n, _)| n.as_str()).collect();
    assert!(names.contains(&"Olive Oil"));
    assert!(names.contains(&"NaOH"));
    assert!(names.contains(&"Water"));
    assert!(names.contains(&"Salt"));
    assert!(!names.contains(&"KOH"));
    assert!(!names.contains(&"Milk"));
}
