mod common;

use std::io::Write;

use common::fixtures_dir;
use minerguide_lib::error::{Error, ItemKind};
use minerguide_lib::Catalog;
use tempfile::NamedTempFile;

#[test]
fn builtin_catalog_lists_every_kind() {
    let catalog = Catalog::builtin().expect("builtin catalog loads");

    let hulls = catalog.names(ItemKind::Hull);
    assert!(hulls.contains(&"Hulk".to_string()));
    assert!(hulls.windows(2).all(|w| w[0] <= w[1]), "names sorted");

    assert!(catalog
        .names(ItemKind::Skill)
        .contains(&"Mining Foreman".to_string()));
    assert!(catalog
        .names(ItemKind::Implant)
        .contains(&"Mining Foreman Mindlink".to_string()));
}

#[test]
fn builtin_hulls_have_valid_rig_slots() {
    let catalog = Catalog::builtin().unwrap();
    for name in catalog.names(ItemKind::Hull) {
        let hull = catalog.hull(&name).unwrap();
        assert!(
            hull.rig_slots() == 2 || hull.rig_slots() == 3,
            "{name} has {} rig slots",
            hull.rig_slots()
        );
    }
}

#[test]
fn loads_catalog_from_file() {
    let path = fixtures_dir().join("custom_catalog.json");
    let catalog = Catalog::from_path(&path).expect("fixture catalog loads");

    assert_eq!(catalog.source_path(), Some(path.as_path()));
    assert_eq!(catalog.names(ItemKind::Hull), vec!["Practice Barge"]);
    assert!(catalog.names(ItemKind::Crystal).is_empty());
}

#[test]
fn unknown_turret_suggests_close_names() {
    let catalog = Catalog::builtin().unwrap();
    let err = catalog.turret("Strip Minr I").expect_err("typo");
    match &err {
        Error::UnknownItem {
            kind, suggestions, ..
        } => {
            assert_eq!(*kind, ItemKind::Turret);
            assert_eq!(suggestions.first().map(String::as_str), Some("Strip Miner I"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("Did you mean"));
}

#[test]
fn unrelated_name_has_no_suggestions() {
    let catalog = Catalog::builtin().unwrap();
    let err = catalog.hull("Zzyzx Freighter").expect_err("not a hull");
    assert_eq!(err.to_string(), "unknown hull: Zzyzx Freighter");
}

#[test]
fn rejects_invalid_records() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "hulls": [ {{ "name": "Broken", "rig_slots": 4, "ore_hold": 100 }} ] }}"#
    )
    .unwrap();

    let err = Catalog::from_path(file.path()).expect_err("four rig slots");
    match err {
        Error::CatalogValidation { message } => assert!(message.contains("rig_slots")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_duplicate_links() {
    let json = r#"{ "links": [ { "name": "No link" }, { "name": "NO LINK" } ] }"#;
    let err = Catalog::from_reader(json.as_bytes()).expect_err("duplicate link");
    match err {
        Error::DuplicateItem { kind, name } => {
            assert_eq!(kind, ItemKind::ForemanLink);
            assert_eq!(name, "NO LINK");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn malformed_json_is_reported() {
    let err = Catalog::from_reader("{ hulls: ".as_bytes()).expect_err("not json");
    assert!(matches!(err, Error::Json(_)));
}
