//! Common test utilities and record builders.
//!
//! Records built here carry only the attributes a test sets, so expected
//! values can be worked out by hand.

use std::path::PathBuf;

use minerguide_lib::fitting::{
    BoosterHull, BoosterShip, ForemanLink, HarvestableKind, Hull, HullSkillBonus, MiningDrone,
    Rig, Turret, TurretKind,
};
use minerguide_lib::pilot::{Implant, Pilot, Skill};

/// Path to fixtures directory used by tests (fits, skill sheets, catalogs).
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn hull(rig_slots: u8, ore_hold: u32, bonuses: Vec<HullSkillBonus>) -> Hull {
    Hull::new("Test Hull", rig_slots, ore_hold, bonuses).expect("valid test hull")
}

#[allow(dead_code)]
pub fn turret(kind: TurretKind, harvestable: HarvestableKind, base_yield: f64, cycle_secs: f64) -> Turret {
    Turret {
        name: format!("Test {kind}"),
        kind,
        harvestable,
        base_yield,
        cycle_secs,
        optimal_range: 10_000,
        uses_crystals: false,
    }
}

#[allow(dead_code)]
pub fn drone_rig(bonus: f64) -> Rig {
    Rig {
        name: format!("Drone Rig {bonus}"),
        drone_yield_bonus: bonus,
        ..Rig::empty()
    }
}

#[allow(dead_code)]
pub fn mining_drone() -> MiningDrone {
    MiningDrone {
        name: "Test Drone".to_string(),
        base_yield: 10.0,
        cycle_secs: 60.0,
    }
}

/// Pilot with no trained skills and no implants.
#[allow(dead_code)]
pub fn pilot() -> Pilot {
    Pilot::new("Test Pilot")
}

#[allow(dead_code)]
pub fn foreman(level: u8) -> Pilot {
    let mut booster = Pilot::new("Foreman");
    booster
        .set_skill(Skill::MiningForeman, level)
        .expect("valid level");
    booster
}

#[allow(dead_code)]
pub fn with_mindlink(mut pilot: Pilot) -> Pilot {
    pilot
        .add_implant(Implant::MiningForemanMindlink)
        .expect("slot 10 free");
    pilot
}

#[allow(dead_code)]
pub fn links(cycle_bonus: f64, optimal_bonus: f64) -> BoosterShip {
    BoosterShip::new(
        BoosterHull::neutral(),
        false,
        ForemanLink {
            name: "Cycle Link".to_string(),
            cycle_bonus,
            optimal_bonus: 0.0,
        },
        ForemanLink {
            name: "Optimal Link".to_string(),
            cycle_bonus: 0.0,
            optimal_bonus,
        },
    )
}

#[allow(dead_code)]
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
