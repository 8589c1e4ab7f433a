mod common;

use std::fs;

use common::{scenario_a, test_home};
use course_builder::config::{Config, ConfigManager};
use course_builder::currency::Money;
use course_builder::pricing::PriceTable;
use course_builder::wizard::{CourseVariant, WizardField};

#[test]
fn missing_file_loads_defaults() {
    let manager = ConfigManager::with_base_dir(test_home()).unwrap();
    assert!(!manager.config_path().exists());
    assert_eq!(manager.load().unwrap(), Config::default());
}

#[test]
fn saved_config_round_trips() {
    let manager = ConfigManager::with_base_dir(test_home()).unwrap();
    let config = Config {
        locale: "en-US".into(),
        variant: CourseVariant::Standard,
        ui_color_enabled: false,
        ..Config::default()
    };
    manager.save(&config).unwrap();

    assert!(manager.config_path().ends_with("config/config.json"));
    assert_eq!(manager.load().unwrap(), config);
    let tmp = manager.config_path().with_extension("json.tmp");
    assert!(!tmp.exists());
}

#[test]
fn corrupt_file_is_reported() {
    let manager = ConfigManager::with_base_dir(test_home()).unwrap();
    fs::write(manager.config_path(), "{ not json").unwrap();
    assert!(manager.load().is_err());
}

#[test]
fn price_table_path_overrides_the_variant() {
    let home = test_home();
    let mut table = PriceTable::standard();
    table.markup_basis_points = 15_000;
    let path = home.join("prices.json");
    fs::write(&path, table.to_json_pretty().unwrap()).unwrap();

    let config = Config {
        price_table_path: Some(path),
        ..Config::default()
    };
    let engine = config.price_engine().unwrap();
    assert!(engine.table().rule_for(WizardField::Books).is_none());

    let breakdown = engine.quote(&scenario_a(), false);
    assert_eq!(breakdown.subtotal, Money::from_rupees(14_495));
    assert_eq!(breakdown.inflated_original.paise(), 2_174_250);
}

#[test]
fn unreadable_price_table_is_an_error() {
    let config = Config {
        price_table_path: Some(test_home().join("missing.json")),
        ..Config::default()
    };
    assert!(config.price_engine().is_err());
}
