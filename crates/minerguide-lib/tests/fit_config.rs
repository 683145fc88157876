mod common;

use common::{approx_eq, fixtures_dir};
use minerguide_lib::error::{Error, ItemKind};
use minerguide_lib::output::Trend;
use minerguide_lib::pilot::Skill;
use minerguide_lib::{Catalog, FitConfig, StatsComparison, StatsReport};

fn load_fit(file: &str) -> minerguide_lib::ResolvedFit {
    let catalog = Catalog::builtin().expect("builtin catalog loads");
    FitConfig::from_path(&fixtures_dir().join(file))
        .expect("fixture fit parses")
        .resolve(&catalog)
        .expect("fixture fit resolves")
}

#[test]
fn resolves_skill_sheets_relative_to_fit_file() {
    let fit = load_fit("hulk_fit.json");

    assert_eq!(fit.name, "Hulk with Orca");
    assert_eq!(fit.miner.name, "Rock Biter");
    assert_eq!(fit.miner.skill_level(Skill::Exhumers), 4);
    assert_eq!(fit.miner.station_trip_secs, 120);
    assert_eq!(fit.booster.skill_level(Skill::MiningForeman), 5);
    assert_eq!(fit.ship.rigs().len(), 2);
    assert_eq!(fit.ship.rigs()[1].name, "Empty");
}

#[test]
fn hulk_fit_stats() {
    let stats = load_fit("hulk_fit.json").calculate();

    // Orca 5 (x1.15) and Warfare Link Specialist 4 (x1.4).
    let cycle_bonus = 18.75 * 1.15 * 1.4;
    assert!(approx_eq(stats.link_cycle_bonus, cycle_bonus));
    assert!(approx_eq(stats.link_optimal_bonus, 37.5 * 1.15 * 1.4));

    let turret_yield =
        360.0 * 1.15 * 1.25 * 1.25 * 1.05 * 1.09 * 1.09 * 1.75 * 1.10;
    assert!(approx_eq(stats.turret_yield, turret_yield), "{}", stats.turret_yield);

    let cycle = 180.0 * 0.9 * 0.88 * (1.0 - 0.01 * cycle_bonus);
    assert!(approx_eq(stats.turret_cycle, cycle), "{}", stats.turret_cycle);

    assert!(approx_eq(stats.drone_yield, 15.0 * 1.25 * 1.3 * 1.1));
    assert!(stats.total_m3_per_hour > 0.0);
}

#[test]
fn fit_name_defaults_to_file_stem() {
    let fit = load_fit("venture_fit.json");
    assert_eq!(fit.name, "venture_fit");
    assert_eq!(fit.booster.skill_level(Skill::MiningForeman), 0);
    assert_eq!(fit.ship.drone_count(), 2);
}

#[test]
fn unknown_hull_is_reported_with_kind() {
    let catalog = Catalog::builtin().unwrap();
    let json = r#"{ "miner": {}, "ship": { "hull": "Hulkk", "turret": "Miner I", "turret_count": 1 } }"#;
    let err = FitConfig::from_reader(json.as_bytes())
        .unwrap()
        .resolve(&catalog)
        .expect_err("unknown hull");
    match err {
        Error::UnknownItem {
            kind, suggestions, ..
        } => {
            assert_eq!(kind, ItemKind::Hull);
            assert!(suggestions.contains(&"Hulk".to_string()));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn too_many_rigs_for_hull() {
    let catalog = Catalog::builtin().unwrap();
    let json = r#"{
        "miner": {},
        "ship": {
            "hull": "Skiff",
            "turret": "Strip Miner I",
            "turret_count": 1,
            "rigs": ["Empty", "Empty", "Empty"]
        }
    }"#;
    let err = FitConfig::from_reader(json.as_bytes())
        .unwrap()
        .resolve(&catalog)
        .expect_err("three rigs on a skiff");
    assert!(matches!(err, Error::FitValidation { .. }));
}

#[test]
fn comparison_between_fixture_fits() {
    let venture = StatsReport::from_fit(&load_fit("venture_fit.json"));
    let hulk = StatsReport::from_fit(&load_fit("hulk_fit.json"));

    let comparison = StatsComparison::between(&venture.stats, &hulk.stats);
    let hourly = comparison
        .metrics
        .iter()
        .find(|m| m.metric == "total_m3_per_hour")
        .expect("hourly metric present");
    assert_eq!(hourly.trend, Trend::Better);
    assert!(hourly.percent.expect("non-zero baseline") > 0.0);

    let text = hulk.render_text();
    assert!(text.starts_with("Hulk with Orca: Hulk with 2 x Modulated Strip Miner II"));
}
