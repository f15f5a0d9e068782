use std::path::PathBuf;

use lye_dye_toolbox::formulation::cost::PriceEntry;
use lye_dye_toolbox::formulation::oils::{OilBasis, OilEntry};
use lye_dye_toolbox::formulation::recipe::RecipeInput;
use lye_dye_toolbox::formulation::ProductMode;
use lye_dye_toolbox::session::SavedRecipe;
use lye_dye_toolbox::storage::{
    KeyValueStore, MemoryStore, PriceBook, RecipeBook, StoreError,
};
use lye_dye_toolbox::units::MassUnit;

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lye_dye_toolbox_{}", std::process::id()));
    let path = dir.join(name);
    let _ = std::fs::remove_file(&path);
    path
}

fn sample_recipe() -> SavedRecipe {
    SavedRecipe {
        basis: OilBasis::Percent,
        unit: MassUnit::Ounce,
        mode: ProductMode::Castile,
        input: RecipeInput {
            milk_pct: 25.0,
            capacity_g: Some(1500.0),
            oils: vec![OilEntry::new("Olive Oil", 100.0)],
            ..RecipeInput::default()
        },
    }
}

#[test]
fn memory_store_overwrites_and_deletes() {
    let mut store = MemoryStore::new();
    store.put("b", 2).unwrap();
    store.put(" a ", 1).unwrap();
    store.put("b", 3).unwrap();
    assert_eq!(store.names(), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(store.get("b"), Some(3));
    assert!(store.delete("a").unwrap());
    assert!(!store.delete("a").unwrap());
    assert_eq!(store.get("a"), None);
}

#[test]
fn empty_name_is_rejected() {
    let mut store: MemoryStore<u32> = MemoryStore::new();
    assert!(matches!(store.put("   ", 1), Err(StoreError::EmptyName)));
}

#[test]
fn recipe_book_persists_to_toml() {
    let path = temp_path("recipes.toml");
    let mut book = RecipeBook::open(&path).unwrap();
    assert!(book.names().is_empty());
    book.put("Castile", sample_recipe()).unwrap();

    let reopened = RecipeBook::open(&path).unwrap();
    assert_eq!(reopened.get("Castile"), Some(sample_recipe()));

    let mut reopened = reopened;
    assert!(reopened.delete("Castile").unwrap());
    assert!(RecipeBook::open(&path).unwrap().get("Castile").is_none());
}

#[test]
fn price_book_round_trip() {
    let path = temp_path("prices.toml");
    let mut book = PriceBook::open(&path).unwrap();
    book.put("Olive Oil", PriceEntry::new(12.0, 1000.0)).unwrap();
    book.put("NaOH", PriceEntry::new(8.0, 500.0)).unwrap();

    let map = PriceBook::open(&path).unwrap().to_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map["NaOH"], PriceEntry::new(8.0, 500.0));
}

#[test]
fn saved_recipe_tolerates_missing_fields() {
    let saved: SavedRecipe = toml::from_str(
        r#"
mode = "hand_cream"
[input]
superfat_pct = 7.0
[[input.oils]]
name = "Olive Oil"
amount = 500.0
"#,
    )
    .unwrap();
    assert_eq!(saved.mode, ProductMode::Bar);
    assert_eq!(saved.basis, OilBasis::Weight);
    assert_eq!(saved.input.superfat_pct, 7.0);
    assert_eq!(saved.input.target_oil_g, 1000.0);
    assert_eq!(saved.input.oils.len(), 1);
}
