use approx::assert_abs_diff_eq;
use lye_dye_toolbox::formulation::batch::{
    aggregate_batch, check_capacity, split_liquid, BatchComponents, CapacityFit,
};

fn components() -> BatchComponents {
    BatchComponents {
        oils_g: 1000.0,
        naoh_g: 140.0,
        water_g: 350.0,
        additives_g: 30.0,
        ..BatchComponents::default()
    }
}

#[test]
fn total_sums_every_component() {
    let res = aggregate_batch(&components(), None);
    assert_abs_diff_eq!(res.total_g, 1520.0, epsilon = 1e-9);
    assert_abs_diff_eq!(res.lye_concentration_pct, 140.0 / 490.0 * 100.0, epsilon = 1e-9);
    assert!(res.capacity.is_none());
}

#[test]
fn capacity_window_is_sixty_to_seventy_five_percent() {
    let check = check_capacity(1400.0, 2000.0);
    assert_abs_diff_eq!(check.min_fill_g, 1200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(check.max_fill_g, 1500.0, epsilon = 1e-9);
    assert_eq!(check.fit, CapacityFit::Within);
    assert!(!check.is_overflow_risk());

    assert_eq!(check_capacity(1000.0, 2000.0).fit, CapacityFit::Below);
    assert_eq!(check_capacity(1500.0, 2000.0).fit, CapacityFit::Within);
    assert!(check_capacity(1600.0, 2000.0).is_overflow_risk());
}

#[test]
fn overflow_is_flagged_from_aggregate() {
    let res = aggregate_batch(&components(), Some(1800.0));
    let check = res.capacity.expect("capacity check");
    assert_eq!(check.fit, CapacityFit::Above);
}

#[test]
fn zero_or_negative_capacity_is_ignored() {
    assert!(aggregate_batch(&components(), Some(0.0)).capacity.is_none());
    assert!(aggregate_batch(&components(), Some(-5.0)).capacity.is_none());
}

#[test]
fn empty_batch_has_zero_concentration() {
    let res = aggregate_batch(&BatchComponents::default(), None);
    assert_eq!(res.total_g, 0.0);
    assert_eq!(res.lye_concentration_pct, 0.0);
}

#[test]
fn milk_replaces_part_of_liquid() {
    let (water, milk) = split_liquid(300.0, 50.0);
    assert_abs_diff_eq!(water, 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(milk, 150.0, epsilon = 1e-9);

    let (water, milk) = split_liquid(300.0, 150.0);
    assert_eq!(water, 0.0);
    assert_abs_diff_eq!(milk, 300.0, epsilon = 1e-9);

    assert_eq!(split_liquid(300.0, 0.0), (300.0, 0.0));
}
