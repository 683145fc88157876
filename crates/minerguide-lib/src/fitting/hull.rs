//! Mining hulls and their skill bonus tables.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pilot::{Pilot, Skill};

/// Rig slot counts a hull may have.
pub const VALID_RIG_SLOTS: [u8; 2] = [2, 3];

/// Stat a hull skill bonus applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusTarget {
    /// Mining laser and strip miner yield (increase).
    MiningYield,
    /// Strip miner and ice harvester cycle time (reduction).
    StripCycle,
    /// Gas cloud harvester cycle time (reduction).
    GasCycle,
    /// Strip miner and ice harvester optimal range (increase).
    StripOptimal,
    /// Ore hold capacity (increase).
    OreHold,
}

impl BonusTarget {
    fn is_reduction(self) -> bool {
        matches!(self, BonusTarget::StripCycle | BonusTarget::GasCycle)
    }
}

/// One row of a hull's bonus table: `per_level` percent per level of `skill`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HullSkillBonus {
    pub skill: Skill,
    pub target: BonusTarget,
    pub per_level: f64,
}

/// Multipliers a hull grants a specific pilot through its skill bonuses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillBonusModifiers {
    pub mining_yield_mod: f64,
    pub strip_cycle_mod: f64,
    pub gas_cycle_mod: f64,
    pub strip_optimal_mod: f64,
    pub ore_hold_mod: f64,
}

impl Default for SkillBonusModifiers {
    fn default() -> Self {
        Self {
            mining_yield_mod: 1.0,
            strip_cycle_mod: 1.0,
            gas_cycle_mod: 1.0,
            strip_optimal_mod: 1.0,
            ore_hold_mod: 1.0,
        }
    }
}

impl SkillBonusModifiers {
    fn slot_mut(&mut self, target: BonusTarget) -> &mut f64 {
        match target {
            BonusTarget::MiningYield => &mut self.mining_yield_mod,
            BonusTarget::StripCycle => &mut self.strip_cycle_mod,
            BonusTarget::GasCycle => &mut self.gas_cycle_mod,
            BonusTarget::StripOptimal => &mut self.strip_optimal_mod,
            BonusTarget::OreHold => &mut self.ore_hold_mod,
        }
    }
}

/// Ship hull carrying the mining equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hull {
    pub name: String,
    /// Role bonus to mining laser and strip miner yield, in percent.
    #[serde(default)]
    pub role_mining_yield_bonus: f64,
    /// Role bonus to gas cloud harvester yield, in percent.
    #[serde(default)]
    pub role_gas_yield_bonus: f64,
    /// Role reduction of ice harvester cycle time, in percent.
    #[serde(default)]
    pub role_ice_cycle_bonus: f64,
    rig_slots: u8,
    /// Ore hold (or cargo hold, for hulls without one), in m3.
    pub ore_hold: u32,
    #[serde(default)]
    pub bonuses: Vec<HullSkillBonus>,
}

impl Hull {
    /// Build and validate a hull record.
    pub fn new(
        name: impl Into<String>,
        rig_slots: u8,
        ore_hold: u32,
        bonuses: Vec<HullSkillBonus>,
    ) -> Result<Self> {
        let hull = Self {
            name: name.into(),
            role_mining_yield_bonus: 0.0,
            role_gas_yield_bonus: 0.0,
            role_ice_cycle_bonus: 0.0,
            rig_slots,
            ore_hold,
            bonuses,
        };
        hull.validate()?;
        Ok(hull)
    }

    /// Set role bonuses (mining yield %, gas yield %, ice cycle %).
    pub fn with_role_bonuses(
        mut self,
        mining_yield: f64,
        gas_yield: f64,
        ice_cycle: f64,
    ) -> Result<Self> {
        self.role_mining_yield_bonus = mining_yield;
        self.role_gas_yield_bonus = gas_yield;
        self.role_ice_cycle_bonus = ice_cycle;
        self.validate()?;
        Ok(self)
    }

    pub fn rig_slots(&self) -> u8 {
        self.rig_slots
    }

    /// Fold the bonus table over the pilot's skill levels.
    ///
    /// Increases multiply by `1 + per_level * level / 100`, reductions by
    /// `1 - per_level * level / 100`, row by row in table order.
    pub fn skill_bonus_modifiers(&self, pilot: &Pilot) -> SkillBonusModifiers {
        let mut modifiers = SkillBonusModifiers::default();
        for bonus in &self.bonuses {
            let amount = bonus.per_level * f64::from(pilot.skill_level(bonus.skill)) / 100.0;
            let factor = if bonus.target.is_reduction() {
                1.0 - amount
            } else {
                1.0 + amount
            };
            *modifiers.slot_mut(bonus.target) *= factor;
        }
        modifiers
    }

    /// Validate hull attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        let fail = |message: String| {
            Err(Error::CatalogValidation {
                message: format!("hull '{}': {message}", self.name),
            })
        };

        if self.name.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: "hull name must not be empty".to_string(),
            });
        }
        if !VALID_RIG_SLOTS.contains(&self.rig_slots) {
            return fail(format!("rig_slots must be 2 or 3, got {}", self.rig_slots));
        }

        let fields = [
            (self.role_mining_yield_bonus, "role_mining_yield_bonus"),
            (self.role_gas_yield_bonus, "role_gas_yield_bonus"),
            (self.role_ice_cycle_bonus, "role_ice_cycle_bonus"),
        ];
        for (value, field) in fields {
            if !value.is_finite() || value < 0.0 {
                return fail(format!("{field} must be a finite non-negative number"));
            }
        }
        if self.role_ice_cycle_bonus >= 100.0 {
            return fail("role_ice_cycle_bonus must be below 100".to_string());
        }

        for bonus in &self.bonuses {
            if !bonus.per_level.is_finite() || bonus.per_level < 0.0 {
                return fail(format!(
                    "{} bonus per level must be a finite non-negative number",
                    bonus.skill
                ));
            }
            if bonus.target.is_reduction() && bonus.per_level * 5.0 >= 100.0 {
                return fail(format!(
                    "{} cycle reduction would reach 100% at level 5",
                    bonus.skill
                ));
            }
        }

        Ok(())
    }
}
