use green_earth::catalog::{parse_plant, parse_plants, CatalogError, PlantId};
use green_earth::grid::{CardView, NO_DESCRIPTION};
use green_earth::modal::DetailView;
use green_earth::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Helper function to get fixture path
fn fixture_path(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name)
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("fixture should exist")
}

#[test]
fn test_plants_fixture_keeps_order() {
    let plants = parse_plants(&read_fixture("plants.json")).unwrap();
    let ids: Vec<_> = plants.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![PlantId(1), PlantId(2), PlantId(3), PlantId(4)]);
}

#[test]
fn test_card_fallbacks_from_fixture() {
    let defaults = AppConfig::default().display_defaults();
    let plants = parse_plants(&read_fixture("plants.json")).unwrap();
    let cards: Vec<_> = plants
        .iter()
        .map(|plant| CardView::from_summary(plant, &defaults))
        .collect();

    // Long description is cut at 100 characters.
    assert!(cards[0].description.ends_with("..."));
    assert_eq!(cards[0].description.chars().count(), 103);
    assert_eq!(cards[1].description, "A hardy fruit tree that grows in various climates.");

    // String price, blank image, null description.
    assert_eq!(cards[2].price, 800);
    assert_eq!(cards[2].image, defaults.placeholder_image);
    assert_eq!(cards[2].description, NO_DESCRIPTION);

    // Nothing but an id and a name.
    assert_eq!(cards[3].price, 500);
    assert_eq!(cards[3].category, "Plant");
}

#[test]
fn test_empty_category_fixture() {
    assert!(parse_plants(&read_fixture("category_empty.json"))
        .unwrap()
        .is_empty());
}

#[test]
fn test_detail_fixture() {
    let defaults = AppConfig::default().display_defaults();
    let detail = parse_plant(&read_fixture("plant_detail.json"))
        .unwrap()
        .expect("plant should be present");

    let view = DetailView::from_detail(&detail, &defaults);
    assert_eq!(view.name, "Mango Tree");
    assert_eq!(view.category, "Fruit Tree");
    assert_eq!(view.scientific_name.as_deref(), Some("Mangifera indica"));
    assert_eq!(view.origin.as_deref(), Some("South Asia"));
}

#[test]
fn test_missing_plant_fixture() {
    assert!(parse_plant(&read_fixture("plant_missing.json"))
        .unwrap()
        .is_none());
}

#[test]
fn test_malformed_fixture() {
    let result = parse_plants(&read_fixture("malformed.json"));
    assert!(matches!(result, Err(CatalogError::Decode(_))));
}
