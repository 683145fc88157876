mod common;

use std::io::Write;

use common::fixtures_dir;
use minerguide_lib::error::Error;
use minerguide_lib::load_skill_sheet;
use minerguide_lib::pilot::Skill;
use tempfile::NamedTempFile;

#[test]
fn loads_fixture_sheet() {
    let pilot = load_skill_sheet("Rock Biter", &fixtures_dir().join("miner_skills.csv"))
        .expect("fixture sheet loads");

    assert_eq!(pilot.name, "Rock Biter");
    assert_eq!(pilot.skill_level(Skill::Mining), 5);
    assert_eq!(pilot.skill_level(Skill::Exhumers), 4);
    // Listed by type id.
    assert_eq!(pilot.skill_level(Skill::DroneInterfacing), 3);
    // Unlisted skills are untrained.
    assert_eq!(pilot.skill_level(Skill::GasCloudHarvesting), 0);
}

#[test]
fn sheet_error_names_the_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "skill,level").unwrap();
    writeln!(file, "Minning,5").unwrap();

    let err = load_skill_sheet("Typo", file.path()).expect_err("unknown skill");
    match &err {
        Error::SkillSheet { path, message } => {
            assert_eq!(path.as_deref(), Some(file.path()));
            assert!(message.contains("row 2"), "{message}");
            assert!(message.contains("Did you mean"), "{message}");
            assert!(message.contains("'Mining'"), "{message}");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn blank_rows_are_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "name,skill_level").unwrap();
    writeln!(file, "Mining,4").unwrap();
    writeln!(file, ",").unwrap();
    writeln!(file, "Astrogeology,2").unwrap();

    let pilot = load_skill_sheet("Gaps", file.path()).expect("sheet loads");
    assert_eq!(pilot.skill_level(Skill::Mining), 4);
    assert_eq!(pilot.skill_level(Skill::Astrogeology), 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_skill_sheet("Nobody", &fixtures_dir().join("does_not_exist.csv"))
        .expect_err("missing file");
    assert!(matches!(err, Error::Io(_)));
}
