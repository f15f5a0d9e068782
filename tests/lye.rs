use approx::assert_abs_diff_eq;
use lye_dye_toolbox::formulation::lye::{
    base_demand, calculate_lye, sodium_equivalent, LyeKind, LyeSettings, KOH_PER_NAOH,
};
use lye_dye_toolbox::formulation::oils::{resolve_oils, OilBasis, OilEntry, ResolvedOil};
use lye_dye_toolbox::units::MassUnit;

fn balanced_oils() -> Vec<ResolvedOil> {
    let entries = vec![
        OilEntry::new("Olive Oil", 450.0),
        OilEntry::new("Coconut Oil", 300.0),
        OilEntry::new("Lard", 150.0),
        OilEntry::new("Shea Butter", 70.0),
        OilEntry::new("Castor Oil", 30.0),
    ];
    resolve_oils(&entries, OilBasis::Weight, 0.0, MassUnit::Gram)
}

fn olive(grams: f64) -> Vec<ResolvedOil> {
    resolve_oils(
        &[OilEntry::new("Olive Oil", grams)],
        OilBasis::Weight,
        0.0,
        MassUnit::Gram,
    )
}

#[test]
fn balanced_bar_naoh() {
    let oils = balanced_oils();
    assert_abs_diff_eq!(base_demand(&oils), 149.15, epsilon = 1e-9);
    let lye = calculate_lye(&oils, 5.0, &LyeSettings::default());
    assert_abs_diff_eq!(lye.needed_pure_naoh_g, 141.6925, epsilon = 1e-9);
    assert_abs_diff_eq!(lye.naoh_g, 141.6925, epsilon = 1e-9);
    assert_eq!(lye.koh_g, 0.0);
    assert_abs_diff_eq!(lye.sodium_equivalent_g, 141.6925, epsilon = 1e-9);
}

#[test]
fn koh_only_applies_factor_and_purity() {
    let settings = LyeSettings {
        kind: LyeKind::KOH,
        ..LyeSettings::default()
    };
    let lye = calculate_lye(&olive(1000.0), 0.0, &settings);
    assert_eq!(lye.naoh_g, 0.0);
    assert_abs_diff_eq!(lye.koh_g, 134.0 * KOH_PER_NAOH * 100.0 / 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(lye.sodium_equivalent_g, 134.0 / 0.9, epsilon = 1e-9);
}

#[test]
fn dual_with_full_sodium_share_matches_naoh_only() {
    let oils = balanced_oils();
    let naoh_only = calculate_lye(&oils, 5.0, &LyeSettings::default());
    let dual = calculate_lye(
        &oils,
        5.0,
        &LyeSettings {
            kind: LyeKind::Dual,
            dual_naoh_pct: 100.0,
            ..LyeSettings::default()
        },
    );
    assert_abs_diff_eq!(dual.naoh_g, naoh_only.naoh_g, epsilon = 1e-9);
    assert_eq!(dual.koh_g, 0.0);
}

#[test]
fn dual_split_applies_purity_per_portion() {
    let settings = LyeSettings {
        kind: LyeKind::Dual,
        naoh_purity_pct: 100.0,
        koh_purity_pct: 90.0,
        dual_naoh_pct: 50.0,
    };
    let lye = calculate_lye(&olive(1000.0), 0.0, &settings);
    assert_abs_diff_eq!(lye.naoh_g, 67.0, epsilon = 1e-9);
    assert_abs_diff_eq!(lye.koh_g, 67.0 * KOH_PER_NAOH / 0.9, epsilon = 1e-9);
}

#[test]
fn purity_below_one_percent_is_floored() {
    let settings = LyeSettings {
        naoh_purity_pct: 0.0,
        ..LyeSettings::default()
    };
    let lye = calculate_lye(&olive(1000.0), 0.0, &settings);
    assert_abs_diff_eq!(lye.naoh_g, 13400.0, epsilon = 1e-6);
}

#[test]
fn superfat_is_clamped_to_hundred() {
    let lye = calculate_lye(&olive(1000.0), 150.0, &LyeSettings::default());
    assert_eq!(lye.naoh_g, 0.0);
    let negative = calculate_lye(&olive(1000.0), -10.0, &LyeSettings::default());
    assert_abs_diff_eq!(negative.naoh_g, 134.0, epsilon = 1e-9);
}

#[test]
fn unknown_oil_contributes_nothing() {
    let entries = vec![OilEntry::new("Olive Oil", 100.0), OilEntry::new("Unobtainium", 900.0)];
    let oils = resolve_oils(&entries, OilBasis::Weight, 0.0, MassUnit::Gram);
    assert_abs_diff_eq!(base_demand(&oils), 13.4, epsilon = 1e-9);
}

#[test]
fn sodium_equivalent_converts_koh() {
    assert_abs_diff_eq!(sodium_equivalent(10.0, KOH_PER_NAOH * 5.0), 15.0, epsilon = 1e-9);
}

#[test]
fn lye_kind_keys() {
    assert_eq!(LyeKind::from_key("potassium"), Some(LyeKind::KOH));
    assert_eq!(LyeKind::from_key(" Dual "), Some(LyeKind::Dual));
    assert_eq!(LyeKind::from("lithium".to_string()), LyeKind::NaOH);
}
