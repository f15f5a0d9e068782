use lye_dye_toolbox::config::{load_or_default_from, Config};
use lye_dye_toolbox::formulation::water::{WaterMode, WaterSetting};
use lye_dye_toolbox::units::MassUnit;

#[test]
fn default_config_is_created_and_reloaded() {
    let dir = std::env::temp_dir().join(format!("lye_dye_toolbox_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    let _ = std::fs::remove_file(&path);

    let cfg = load_or_default_from(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let mut changed = cfg;
    changed.display_unit = MassUnit::Ounce;
    changed.defaults.superfat_pct = 8.0;
    changed.defaults.water = WaterSetting::new(WaterMode::PercentSolution, 33.0);
    changed.save_to(&path).unwrap();

    assert_eq!(load_or_default_from(&path).unwrap(), changed);
}

#[test]
fn new_recipe_applies_defaults() {
    let mut cfg = Config::default();
    cfg.defaults.superfat_pct = 3.0;
    cfg.defaults.koh_purity_pct = 95.0;
    let recipe = cfg.new_recipe();
    assert_eq!(recipe.superfat_pct, 3.0);
    assert_eq!(recipe.lye.koh_purity_pct, 95.0);
    assert!(recipe.oils.is_empty());
}

#[test]
fn partial_config_fills_defaults() {
    let cfg: Config = toml::from_str("display_unit = \"pound\"").unwrap();
    assert_eq!(cfg.display_unit, MassUnit::Pound);
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.defaults, Config::default().defaults);
}
