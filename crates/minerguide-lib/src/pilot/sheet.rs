//! Skill sheet import.
//!
//! A skill sheet is a CSV file with one row per trained skill. Column
//! headers are matched loosely so exports from different tools load
//! without editing:
//!
//! ```text
//! skill,level
//! Mining,5
//! Astrogeology,4
//! 22552,5
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{Error, Result};

use super::{Pilot, Skill};

/// Load a pilot from a skill sheet on disk. Skills not listed stay at level 0.
pub fn load_skill_sheet(name: &str, path: &Path) -> Result<Pilot> {
    let file = fs::File::open(path)?;
    let pilot = read_skill_sheet(name, file).map_err(|err| match err {
        Error::SkillSheet { message, .. } => Error::SkillSheet {
            path: Some(path.to_path_buf()),
            message,
        },
        other => other,
    })?;
    debug!(
        pilot = %pilot.name,
        "loaded skill sheet from {}",
        path.display()
    );
    Ok(pilot)
}

/// Read a skill sheet from any reader (file or in-memory buffer).
pub fn read_skill_sheet<R: Read>(name: &str, reader: R) -> Result<Pilot> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| sheet_error(format!("failed to read headers: {err}")))?
        .clone();

    let normalize = |s: &str| {
        s.to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect::<String>()
    };
    let normalized_headers: Vec<String> = headers.iter().map(&normalize).collect();

    let synonyms: &[(&str, &[&str])] = &[
        ("skill", &["skill", "skill_name", "skillname", "name", "type_id", "typeid"]),
        (
            "level",
            &["level", "skill_level", "skilllevel", "trained_level", "trainedlevel"],
        ),
    ];

    let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
    for (canon, alts) in synonyms {
        'outer: for alt in *alts {
            for (i, h) in normalized_headers.iter().enumerate() {
                if h == alt {
                    index_map.insert(*canon, i);
                    break 'outer;
                }
            }
        }
    }

    let missing: Vec<&str> = ["skill", "level"]
        .into_iter()
        .filter(|c| !index_map.contains_key(c))
        .collect();
    if !missing.is_empty() {
        return Err(sheet_error(format!(
            "missing required columns: {}. Available: {}",
            missing.join(", "),
            headers.iter().collect::<Vec<_>>().join(", ")
        )));
    }

    let mut pilot = Pilot::new(name);
    let mut row_num: usize = 1;
    for result in csv_reader.records() {
        row_num += 1;
        let record = result?;
        let get = |field: &str| -> &str {
            index_map
                .get(field)
                .and_then(|&i| record.get(i))
                .unwrap_or("")
        };

        let skill_field = get("skill");
        if skill_field.is_empty() {
            continue;
        }
        let skill: Skill = skill_field
            .parse()
            .map_err(|err| sheet_error(format!("row {row_num}: {err}")))?;
        let level: u8 = get("level").parse().map_err(|err| {
            sheet_error(format!("row {row_num}: invalid level for {skill}: {err}"))
        })?;
        pilot
            .set_skill(skill, level)
            .map_err(|err| sheet_error(format!("row {row_num}: {err}")))?;
    }

    Ok(pilot)
}

fn sheet_error(message: String) -> Error {
    Error::SkillSheet {
        path: None,
        message,
    }
}
