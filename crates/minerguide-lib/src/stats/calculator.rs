//! Mining stat calculation.
//!
//! [`calculate_stats`] runs a fixed sequence of phases. Several phases
//! share intermediate values, so they are plain functions over a handful
//! of small structs rather than separate passes:
//!
//! 1. fleet boost: realized link bonuses and the cycle/optimal multipliers
//! 2. hull skill bonuses for the miner
//! 3. turret yield, per harvester kind
//! 4. turret cycle, per harvester kind, then the link cycle multiplier
//! 5. drone yield with stacking-penalized drone rigs
//! 6. optimal range, ore hold, fill time and hourly yield

use crate::fitting::{BoosterShip, HarvestableKind, Ship, SkillBonusModifiers, TurretKind};
use crate::pilot::{Pilot, Skill};

use super::constants::{
    FOREMAN_YIELD_PER_LEVEL, MAX_LINK_CYCLE_BONUS, MINDLINK_LINK_MULTIPLIER,
    MINDLINK_YIELD_MULTIPLIER, RIG_STACKING_WEIGHTS, SECONDS_PER_HOUR,
    SECS_FOR_ORE_HOLD_SATURATED,
};
use super::result::CalculatedStats;

/// Realized fleet boost from the booster pilot and ship.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FleetBoost {
    mindlink: bool,
    cycle_bonus: f64,
    optimal_bonus: f64,
    cycle_modifier: f64,
    optimal_modifier: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct DroneOutput {
    drone_yield: f64,
    combined_yield: f64,
    cycle: f64,
    m3_per_sec: f64,
}

/// Calculate mining stats for `miner` flying `ship`, boosted by `booster` in `booster_ship`.
///
/// `mercoxit` marks mercoxit as the active target; it only matters for
/// crystal-using mercoxit harvesters and for whether drones can mine.
///
/// Total and side-effect free. Records are assumed to have passed their
/// `validate()` checks; degenerate throughput saturates instead of failing:
/// with no yield at all, `secs_for_ore_hold` is
/// [`SECS_FOR_ORE_HOLD_SATURATED`] and `total_m3_per_hour` is 0.
///
/// # Examples
///
/// ```
/// use minerguide_lib::fitting::{BoosterShip, HarvestableKind, Hull, Ship, Turret, TurretKind};
/// use minerguide_lib::pilot::Pilot;
/// use minerguide_lib::stats::calculate_stats;
///
/// let hull = Hull::new("Barge", 3, 12_000, Vec::new()).unwrap();
/// let turret = Turret {
///     name: "Strip Miner I".to_string(),
///     kind: TurretKind::StripMiner,
///     harvestable: HarvestableKind::Ore,
///     base_yield: 540.0,
///     cycle_secs: 180.0,
///     optimal_range: 15_000,
///     uses_crystals: false,
/// };
/// let ship = Ship::new(hull, turret, 2).unwrap();
/// let pilot = Pilot::new("Miner");
///
/// let stats = calculate_stats(&pilot, &pilot, &ship, &BoosterShip::none(), false);
/// assert_eq!(stats.combined_turret_yield, 1080.0);
/// assert_eq!(stats.turret_cycle, 180.0);
/// ```
pub fn calculate_stats(
    miner: &Pilot,
    booster: &Pilot,
    ship: &Ship,
    booster_ship: &BoosterShip,
    mercoxit: bool,
) -> CalculatedStats {
    let boost = resolve_fleet_boost(booster, booster_ship);
    let bonus = ship.hull().skill_bonus_modifiers(miner);

    let turret_yield = turret_yield(miner, booster, ship, &bonus, &boost, mercoxit);
    let combined_turret_yield = turret_yield * f64::from(ship.turret_count());
    let turret_cycle = turret_cycle(miner, ship, &bonus) * boost.cycle_modifier;
    let turret_m3_per_sec = per_second(turret_yield, turret_cycle);
    let combined_turret_m3_per_sec = per_second(combined_turret_yield, turret_cycle);

    let drones = drone_output(miner, ship, mercoxit);
    let total_m3_per_sec = combined_turret_m3_per_sec + drones.m3_per_sec;

    let optimal = effective_optimal(ship, &bonus, boost.optimal_modifier);
    let ore_hold = truncate(f64::from(ship.hull().ore_hold) * bonus.ore_hold_mod);
    let (secs_for_ore_hold_exact, secs_for_ore_hold) = fill_time(ore_hold, total_m3_per_sec);
    let total_m3_per_hour = hourly_yield(miner, ore_hold, secs_for_ore_hold_exact, total_m3_per_sec);

    CalculatedStats {
        turret_yield,
        combined_turret_yield,
        turret_cycle,
        turret_m3_per_sec,
        combined_turret_m3_per_sec,
        drone_yield: drones.drone_yield,
        combined_drone_yield: drones.combined_yield,
        drone_cycle: drones.cycle,
        drone_m3_per_sec: drones.m3_per_sec,
        total_m3_per_sec,
        total_m3_per_hour,
        optimal,
        ore_hold,
        secs_for_ore_hold,
        secs_for_ore_hold_exact,
        link_cycle_bonus: boost.cycle_bonus,
        link_optimal_bonus: boost.optimal_bonus,
    }
}

fn resolve_fleet_boost(booster: &Pilot, booster_ship: &BoosterShip) -> FleetBoost {
    // Only one mining mindlink exists, so it is checked directly.
    let mindlink = booster.has_mindlink();

    let strength = booster_ship
        .hull
        .boost_modifier(booster, booster_ship.deployed)
        * booster.booster_link_modifier();
    let mut cycle_bonus = booster_ship.cycle_link.cycle_bonus * strength;
    let mut optimal_bonus = booster_ship.optimal_link.optimal_bonus * strength;

    if mindlink {
        cycle_bonus *= MINDLINK_LINK_MULTIPLIER;
        optimal_bonus *= MINDLINK_LINK_MULTIPLIER;
    }
    let cycle_bonus = cycle_bonus.min(MAX_LINK_CYCLE_BONUS);

    FleetBoost {
        mindlink,
        cycle_bonus,
        optimal_bonus,
        cycle_modifier: 1.0 - 0.01 * cycle_bonus,
        optimal_modifier: 1.0 + 0.01 * optimal_bonus,
    }
}

fn turret_yield(
    miner: &Pilot,
    booster: &Pilot,
    ship: &Ship,
    bonus: &SkillBonusModifiers,
    boost: &FleetBoost,
    mercoxit: bool,
) -> f64 {
    let hull = ship.hull();
    let turret = ship.turret();

    match turret.kind {
        TurretKind::MiningLaser | TurretKind::StripMiner => {
            let mut yield_m3 = turret.base_yield
                * (1.0 + hull.role_mining_yield_bonus / 100.0)
                * bonus.mining_yield_mod
                * miner.mining_yield_modifier();

            // Upgrades stack multiplicatively without a stacking penalty.
            for upgrade in ship.upgrades() {
                yield_m3 *= 1.0 + upgrade.ore_yield_bonus * 0.01;
            }

            if turret.uses_crystals {
                if let Some(crystal) = ship.crystal() {
                    if turret.harvestable == HarvestableKind::Mercoxit && mercoxit {
                        yield_m3 *= crystal.merc_mod;
                        for rig in ship.rigs() {
                            yield_m3 *= 1.0 + 0.01 * rig.mercoxit_yield_bonus;
                        }
                    } else {
                        yield_m3 *= crystal.ore_mod;
                    }
                }
            }

            if boost.mindlink {
                yield_m3 * MINDLINK_YIELD_MULTIPLIER
            } else {
                let foreman = f64::from(booster.skill_level(Skill::MiningForeman));
                yield_m3 * (1.0 + FOREMAN_YIELD_PER_LEVEL * foreman)
            }
        }
        TurretKind::GasHarvester => turret.base_yield * (1.0 + hull.role_gas_yield_bonus / 100.0),
        TurretKind::IceHarvester => turret.base_yield,
    }
}

/// Turret cycle before the fleet link multiplier.
fn turret_cycle(miner: &Pilot, ship: &Ship, bonus: &SkillBonusModifiers) -> f64 {
    let turret = ship.turret();

    match turret.kind {
        TurretKind::MiningLaser => turret.cycle_secs,
        TurretKind::StripMiner => turret.cycle_secs * bonus.strip_cycle_mod,
        TurretKind::GasHarvester => {
            turret.cycle_secs * bonus.gas_cycle_mod * miner.gas_cycle_modifier()
        }
        TurretKind::IceHarvester => {
            let mut cycle = turret.cycle_secs
                * (1.0 - ship.hull().role_ice_cycle_bonus / 100.0)
                * bonus.strip_cycle_mod
                * miner.ice_cycle_modifier();

            for upgrade in ship.upgrades() {
                cycle *= 1.0 - upgrade.ice_cycle_bonus * 0.01;
            }
            // Slot order, full strength: ice rigs carry no stacking penalty.
            for rig in ship.rigs() {
                cycle *= 1.0 - 0.01 * rig.ice_cycle_bonus;
            }
            cycle
        }
    }
}

fn drone_output(miner: &Pilot, ship: &Ship, mercoxit: bool) -> DroneOutput {
    let drones_blocked = match ship.turret().harvestable {
        HarvestableKind::Gas | HarvestableKind::Ice => true,
        HarvestableKind::Mercoxit => mercoxit,
        HarvestableKind::Ore => false,
    };
    let Some(drone) = ship.drone().filter(|_| !drones_blocked) else {
        return DroneOutput::default();
    };

    let mut drone_yield = drone.base_yield * miner.drone_yield_modifier();

    // Strongest drone rig first, then the 87% and 57% stacking weights.
    let rigs = ship.rigs();
    let mut bonuses = [0.0_f64; 3];
    let slots = rigs.len().min(bonuses.len());
    for (slot, rig) in bonuses.iter_mut().zip(rigs) {
        *slot = rig.drone_yield_bonus;
    }
    let bonuses = &mut bonuses[..slots];
    bonuses.sort_by(|a, b| b.total_cmp(a));
    for (bonus, weight) in bonuses.iter().zip(RIG_STACKING_WEIGHTS) {
        drone_yield *= 1.0 + 0.01 * weight * bonus;
    }

    let combined_yield = drone_yield * f64::from(ship.drone_count());
    // Nothing modifies the drone cycle.
    let cycle = drone.cycle_secs;

    DroneOutput {
        drone_yield,
        combined_yield,
        cycle,
        m3_per_sec: per_second(combined_yield, cycle),
    }
}

fn effective_optimal(ship: &Ship, bonus: &SkillBonusModifiers, optimal_modifier: f64) -> u32 {
    let turret = ship.turret();
    let skilled = match turret.kind {
        TurretKind::StripMiner | TurretKind::IceHarvester => {
            truncate(f64::from(turret.optimal_range) * bonus.strip_optimal_mod)
        }
        TurretKind::MiningLaser | TurretKind::GasHarvester => turret.optimal_range,
    };
    truncate(f64::from(skilled) * optimal_modifier)
}

/// Exact and truncated seconds to fill the hold; saturated when nothing is mined.
fn fill_time(ore_hold: u32, total_m3_per_sec: f64) -> (f64, u32) {
    if !total_m3_per_sec.is_finite() || total_m3_per_sec <= 0.0 {
        let saturated = SECS_FOR_ORE_HOLD_SATURATED;
        return (f64::from(saturated), saturated);
    }
    let exact = f64::from(ore_hold) / total_m3_per_sec;
    (exact, truncate(exact))
}

fn hourly_yield(miner: &Pilot, ore_hold: u32, secs_exact: f64, total_m3_per_sec: f64) -> f64 {
    if !total_m3_per_sec.is_finite() || total_m3_per_sec <= 0.0 {
        return 0.0;
    }
    let trip_secs = if miner.uses_hauler {
        0.0
    } else {
        f64::from(miner.station_trip_secs)
    };
    let total_cycle = secs_exact + trip_secs;
    if total_cycle <= 0.0 {
        return 0.0;
    }
    let cycles_per_hour = SECONDS_PER_HOUR / total_cycle;
    f64::from(ore_hold) * cycles_per_hour
}

fn per_second(amount: f64, secs: f64) -> f64 {
    if secs.is_finite() && secs > 0.0 {
        amount / secs
    } else {
        0.0
    }
}

/// Truncate toward zero. `as` saturates: negatives and NaN become 0, overflow becomes `u32::MAX`.
fn truncate(value: f64) -> u32 {
    value as u32
}
