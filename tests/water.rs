use approx::assert_abs_diff_eq;
use lye_dye_toolbox::formulation::water::{
    calculate_water, WaterMode, WaterSetting, DEFAULT_WATER_RATIO,
};

#[test]
fn ratio_multiplies_sodium_equivalent() {
    let res = calculate_water(&WaterSetting::new(WaterMode::Ratio, 2.5), 141.6925, 1000.0);
    assert_abs_diff_eq!(res.water_g, 354.23125, epsilon = 1e-9);
    assert!(!res.invalid);
}

#[test]
fn percent_of_oil_ignores_lye() {
    let res = calculate_water(&WaterSetting::new(WaterMode::PercentOfOil, 38.0), 140.0, 1000.0);
    assert_abs_diff_eq!(res.water_g, 380.0, epsilon = 1e-9);
}

#[test]
fn percent_solution_decreases_with_concentration() {
    let at = |c: f64| {
        calculate_water(&WaterSetting::new(WaterMode::PercentSolution, c), 140.0, 1000.0).water_g
    };
    assert_abs_diff_eq!(at(33.0), 140.0 * 0.67 / 0.33, epsilon = 1e-9);
    assert!(at(25.0) > at(33.0));
    assert!(at(33.0) > at(40.0));
    assert_eq!(at(100.0), 0.0);
}

#[test]
fn zero_concentration_is_invalid() {
    let res = calculate_water(&WaterSetting::new(WaterMode::PercentSolution, 0.0), 140.0, 1000.0);
    assert_eq!(res.water_g, 0.0);
    assert!(res.invalid);
}

#[test]
fn unknown_mode_falls_back_to_default_ratio() {
    let setting = WaterSetting::from_key("by_feel", 9.0);
    assert_eq!(setting, WaterSetting::default());
    assert_eq!(setting.mode, WaterMode::Ratio);
    assert_eq!(setting.parameter, DEFAULT_WATER_RATIO);
}

#[test]
fn setting_deserializes_from_mode_key() {
    let setting: WaterSetting = toml::from_str("mode = \"concentration\"\nparameter = 30.0").unwrap();
    assert_eq!(setting, WaterSetting::new(WaterMode::PercentSolution, 30.0));
    let fallback: WaterSetting = toml::from_str("mode = \"mystery\"\nparameter = 30.0").unwrap();
    assert_eq!(fallback, WaterSetting::default());
}
