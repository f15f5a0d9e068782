use approx::assert_abs_diff_eq;
use lye_dye_toolbox::formulation::lye::LyeKind;
use lye_dye_toolbox::formulation::oils::{OilBasis, OilEntry};
use lye_dye_toolbox::formulation::profiles::{find_profile, profiles};
use lye_dye_toolbox::formulation::recipe::RecipeInput;
use lye_dye_toolbox::formulation::ProductMode;
use lye_dye_toolbox::session::{Outcome, Session};
use lye_dye_toolbox::units::MassUnit;

#[test]
fn non_soap_modes_are_coming_soon() {
    let mut session = Session::default();
    let mut input = RecipeInput::default();
    session.set_mode(ProductMode::Lotion, &mut input);
    assert_eq!(
        session.recalculate(&input),
        Outcome::ComingSoon(ProductMode::Lotion)
    );
    assert!(session.last_result().is_none());
}

#[test]
fn liquid_mode_switches_to_koh() {
    let mut session = Session::default();
    let mut input = RecipeInput::default();
    session.set_mode(ProductMode::Liquid, &mut input);
    assert_eq!(input.lye.kind, LyeKind::KOH);
    session.set_mode(ProductMode::Castile, &mut input);
    assert_eq!(input.lye.kind, LyeKind::NaOH);
}

#[test]
fn profile_then_recalculate() {
    let mut session = Session::new(MassUnit::Ounce);
    let mut input = RecipeInput::default();
    let profile = find_profile("balanced").expect("balanced profile");
    session.apply_profile(profile, &mut input);
    assert_eq!(session.basis, OilBasis::Percent);

    match session.recalculate(&input) {
        Outcome::Calculated(res) => {
            assert_abs_diff_eq!(res.oil_total_g, 1000.0, epsilon = 1e-9);
            assert_abs_diff_eq!(res.lye.naoh_g, 141.6925, epsilon = 1e-9);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(session.last_result().is_some());
}

#[test]
fn every_profile_sums_to_hundred() {
    for profile in profiles() {
        let sum: f64 = profile.oils.iter().map(|(_, pct)| pct).sum();
        assert_abs_diff_eq!(sum, 100.0, epsilon = 1e-9);
    }
}

#[test]
fn scale_requires_a_result() {
    let mut session = Session::default();
    let mut input = RecipeInput::default();
    assert!(!session.scale_to(500.0, &mut input));
}

#[test]
fn scale_rewrites_oils_in_grams() {
    let mut session = Session::new(MassUnit::Pound);
    let mut input = RecipeInput::default();
    session.set_oils(
        vec![OilEntry::new("Olive Oil", 1.0), OilEntry::new("Coconut Oil", 1.0)],
        &mut input,
    );
    session.recalculate(&input);
    assert!(session.scale_to(500.0, &mut input));
    assert_eq!(session.basis, OilBasis::Weight);
    assert_eq!(session.unit, MassUnit::Gram);
    assert!(session.last_result().is_none());
    assert_abs_diff_eq!(input.oils[0].amount, 250.0, epsilon = 1e-9);
    assert_abs_diff_eq!(input.oils[1].amount, 250.0, epsilon = 1e-9);

    match session.recalculate(&input) {
        Outcome::Calculated(res) => assert_abs_diff_eq!(res.oil_total_g, 500.0, epsilon = 1e-9),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn snapshot_restores_context() {
    let mut session = Session::new(MassUnit::Ounce);
    let mut input = RecipeInput::default();
    session.set_mode(ProductMode::Liquid, &mut input);
    let saved = session.snapshot(&input);

    let mut fresh = Session::default();
    let restored = fresh.restore(saved);
    assert_eq!(fresh.mode(), ProductMode::Liquid);
    assert_eq!(fresh.unit, MassUnit::Ounce);
    assert_eq!(restored, input);
}

#[test]
fn restore_applies_fixed_lye_of_mode() {
    use lye_dye_toolbox::session::SavedRecipe;

    let saved: SavedRecipe = toml::from_str(
        r#"
mode = "liquid"
[[input.oils]]
name = "Coconut Oil"
amount = 1000.0
"#,
    )
    .unwrap();
    let mut session = Session::default();
    let input = session.restore(saved);
    assert_eq!(input.lye.kind, LyeKind::KOH);
    match session.recalculate(&input) {
        Outcome::Calculated(res) => {
            assert_eq!(res.lye.naoh_g, 0.0);
            assert!(res.lye.koh_g > 0.0);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn restore_keeps_chosen_lye_in_bar_mode() {
    let session = Session::default();
    let mut input = RecipeInput::default();
    input.lye.kind = LyeKind::Dual;
    let saved = session.snapshot(&input);
    assert_eq!(Session::default().restore(saved).lye.kind, LyeKind::Dual);
}
