use approx::assert_abs_diff_eq;
use lye_dye_toolbox::formulation::cost::{
    estimate_cost, CostInput, PriceEntry, PriceTable, FRAGRANCE_PRICE_KEY,
};

fn prices() -> PriceTable {
    let mut prices = PriceTable::new();
    prices.insert("Olive Oil".to_string(), PriceEntry::new(12.0, 1000.0));
    prices.insert("NaOH".to_string(), PriceEntry::new(8.0, 500.0));
    prices.insert(FRAGRANCE_PRICE_KEY.to_string(), PriceEntry::new(30.0, 100.0));
    prices.insert("Salt".to_string(), PriceEntry::new(5.0, 0.0));
    prices
}

fn usage() -> Vec<(String, f64)> {
    vec![
        ("Olive Oil".to_string(), 500.0),
        ("NaOH".to_string(), 100.0),
        ("Salt".to_string(), 10.0),
        ("Water".to_string(), 300.0),
    ]
}

#[test]
fn batch_and_unit_cost() {
    let usage = usage();
    let prices = prices();
    let res = estimate_cost(CostInput {
        usage: &usage,
        prices: &prices,
        fragrance_g: 10.0,
        unit_count: 8,
        sale_price: 2.0,
    });
    // 6.0 + 1.6 + 0 + 0 + 3.0
    assert_abs_diff_eq!(res.total_cost, 10.6, epsilon = 1e-9);
    assert_abs_diff_eq!(res.fragrance_cost, 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(res.per_unit_cost, 1.325, epsilon = 1e-9);
    assert_abs_diff_eq!(res.margin_pct, (2.0 - 1.325) / 2.0 * 100.0, epsilon = 1e-9);
    assert_eq!(res.lines.len(), 4);
}

#[test]
fn zero_package_size_and_missing_price_cost_nothing() {
    assert_eq!(PriceEntry::new(5.0, 0.0).cost_for(100.0), 0.0);
    let usage = usage();
    let prices = prices();
    let res = estimate_cost(CostInput {
        usage: &usage,
        prices: &prices,
        fragrance_g: 0.0,
        unit_count: 1,
        sale_price: 0.0,
    });
    let salt = res.lines.iter().find(|l| l.name == "Salt").unwrap();
    assert_eq!(salt.cost, 0.0);
    let water = res.lines.iter().find(|l| l.name == "Water").unwrap();
    assert_eq!(water.cost, 0.0);
}

#[test]
fn unit_count_is_at_least_one() {
    let usage = usage();
    let prices = prices();
    let res = estimate_cost(CostInput {
        usage: &usage,
        prices: &prices,
        fragrance_g: 0.0,
        unit_count: 0,
        sale_price: 0.0,
    });
    assert_abs_diff_eq!(res.per_unit_cost, res.total_cost, epsilon = 1e-12);
    assert_eq!(res.margin_pct, 0.0);
}

#[test]
fn empty_price_table_costs_nothing() {
    let usage = usage();
    let prices = PriceTable::new();
    let res = estimate_cost(CostInput {
        usage: &usage,
        prices: &prices,
        fragrance_g: 20.0,
        unit_count: 4,
        sale_price: 3.0,
    });
    assert_eq!(res.total_cost, 0.0);
    assert_abs_diff_eq!(res.margin_pct, 100.0, epsilon = 1e-9);
}

#[test]
fn non_finite_or_negative_prices_count_as_zero() {
    let prices: PriceTable = toml::from_str(
        r#"
"Olive Oil" = { unit_cost = 12.0, package_size = nan }
"NaOH" = { unit_cost = -8.0, package_size = 500.0 }
"Coconut Oil" = { unit_cost = inf, package_size = 1000.0 }
"Castor Oil" = { unit_cost = 4.0, package_size = 200.0 }
"#,
    )
    .unwrap();
    let usage = vec![
        ("Olive Oil".to_string(), 500.0),
        ("NaOH".to_string(), 100.0),
        ("Coconut Oil".to_string(), 300.0),
        ("Castor Oil".to_string(), 50.0),
    ];
    let res = estimate_cost(CostInput {
        usage: &usage,
        prices: &prices,
        fragrance_g: 0.0,
        unit_count: 2,
        sale_price: 5.0,
    });
    assert!(res.lines.iter().all(|l| l.cost.is_finite() && l.cost >= 0.0));
    assert_abs_diff_eq!(res.total_cost, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(res.per_unit_cost, 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(res.margin_pct, 90.0, epsilon = 1e-9);
}

#[test]
fn all_zero_package_sizes_cost_nothing() {
    let mut prices = PriceTable::new();
    for name in ["Olive Oil", "NaOH", "Salt", "Water", FRAGRANCE_PRICE_KEY] {
        prices.insert(name.to_string(), PriceEntry::new(25.0, 0.0));
    }
    let usage = usage();
    let res = estimate_cost(CostInput {
        usage: &usage,
        prices: &prices,
        fragrance_g: 30.0,
        unit_count: 10,
        sale_price: 4.0,
    });
    assert_eq!(res.total_cost, 0.0);
    assert_eq!(res.fragrance_cost, 0.0);
    assert_eq!(res.per_unit_cost, 0.0);
    assert_abs_diff_eq!(res.margin_pct, 100.0, epsilon = 1e-9);
}
