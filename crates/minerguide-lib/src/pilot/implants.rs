//! Implants that modify mining yield, harvester cycles or fleet boosts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ItemKind, Result};

/// Lowest implant slot tracked by [`ImplantSet`].
pub const FIRST_IMPLANT_SLOT: u8 = 6;
/// Highest implant slot tracked by [`ImplantSet`].
pub const LAST_IMPLANT_SLOT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Implant {
    HighwallMx1001,
    HighwallMx1003,
    HighwallMx1005,
    MichiExcavationAugmentor,
    YetiBx1001,
    YetiBx1003,
    YetiBx1005,
    AlchemistGh801,
    AlchemistGh803,
    AlchemistGh805,
    MiningForemanMindlink,
}

impl Implant {
    pub const ALL: [Implant; 11] = [
        Implant::HighwallMx1001,
        Implant::HighwallMx1003,
        Implant::HighwallMx1005,
        Implant::MichiExcavationAugmentor,
        Implant::YetiBx1001,
        Implant::YetiBx1003,
        Implant::YetiBx1005,
        Implant::AlchemistGh801,
        Implant::AlchemistGh803,
        Implant::AlchemistGh805,
        Implant::MiningForemanMindlink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Implant::HighwallMx1001 => "Inherent Implants 'Highwall' Mining MX1001",
            Implant::HighwallMx1003 => "Inherent Implants 'Highwall' Mining MX1003",
            Implant::HighwallMx1005 => "Inherent Implants 'Highwall' Mining MX1005",
            Implant::MichiExcavationAugmentor => "Michi's Excavation Augmentor",
            Implant::YetiBx1001 => "Inherent Implants 'Yeti' BX-1001",
            Implant::YetiBx1003 => "Inherent Implants 'Yeti' BX-1003",
            Implant::YetiBx1005 => "Inherent Implants 'Yeti' BX-1005",
            Implant::AlchemistGh801 => "Eifyr and Co. 'Alchemist' Gas Harvesting GH-801",
            Implant::AlchemistGh803 => "Eifyr and Co. 'Alchemist' Gas Harvesting GH-803",
            Implant::AlchemistGh805 => "Eifyr and Co. 'Alchemist' Gas Harvesting GH-805",
            Implant::MiningForemanMindlink => "Mining Foreman Mindlink",
        }
    }

    pub fn slot(self) -> u8 {
        match self {
            Implant::AlchemistGh801 | Implant::AlchemistGh803 | Implant::AlchemistGh805 => 6,
            Implant::HighwallMx1001
            | Implant::HighwallMx1003
            | Implant::HighwallMx1005
            | Implant::MichiExcavationAugmentor => 7,
            Implant::YetiBx1001 | Implant::YetiBx1003 | Implant::YetiBx1005 => 8,
            Implant::MiningForemanMindlink => 10,
        }
    }

    /// Mining laser and strip miner yield bonus, in percent.
    pub fn mining_yield_bonus(self) -> f64 {
        match self {
            Implant::HighwallMx1001 => 1.0,
            Implant::HighwallMx1003 => 3.0,
            Implant::HighwallMx1005 | Implant::MichiExcavationAugmentor => 5.0,
            _ => 0.0,
        }
    }

    /// Ice harvester cycle reduction, in percent.
    pub fn ice_cycle_bonus(self) -> f64 {
        match self {
            Implant::YetiBx1001 => 1.0,
            Implant::YetiBx1003 => 3.0,
            Implant::YetiBx1005 => 5.0,
            _ => 0.0,
        }
    }

    /// Gas cloud harvester cycle reduction, in percent.
    pub fn gas_cycle_bonus(self) -> f64 {
        match self {
            Implant::AlchemistGh801 => 1.0,
            Implant::AlchemistGh803 => 3.0,
            Implant::AlchemistGh805 => 5.0,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Implant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Implant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_implant_key(s);
        Implant::ALL
            .iter()
            .find(|imp| {
                normalize_implant_key(imp.name()) == key
                    || normalize_implant_key(&format!("{imp:?}")) == key
            })
            .copied()
            .ok_or_else(|| Error::UnknownItem {
                kind: ItemKind::Implant,
                name: s.trim().to_string(),
                suggestions: crate::catalog::suggest(s, Implant::ALL.iter().map(|i| i.name())),
            })
    }
}

fn normalize_implant_key(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Implants plugged into slots 6-10, at most one per slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImplantSet {
    slots: [Option<Implant>; 5],
}

impl ImplantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plug an implant into its slot. Rejects a second implant for an occupied slot.
    pub fn insert(&mut self, implant: Implant) -> Result<()> {
        let index = usize::from(implant.slot() - FIRST_IMPLANT_SLOT);
        if let Some(existing) = self.slots[index] {
            return Err(Error::PilotValidation {
                message: format!(
                    "implant slot {} already holds {}, cannot add {}",
                    implant.slot(),
                    existing,
                    implant
                ),
            });
        }
        self.slots[index] = Some(implant);
        Ok(())
    }

    /// Implant in the given slot (6-10), if any.
    pub fn slot(&self, slot: u8) -> Option<Implant> {
        if !(FIRST_IMPLANT_SLOT..=LAST_IMPLANT_SLOT).contains(&slot) {
            return None;
        }
        self.slots[usize::from(slot - FIRST_IMPLANT_SLOT)]
    }

    pub fn iter(&self) -> impl Iterator<Item = Implant> + '_ {
        self.slots.iter().flatten().copied()
    }
}

impl TryFrom<&[Implant]> for ImplantSet {
    type Error = Error;

    fn try_from(implants: &[Implant]) -> Result<Self> {
        let mut set = ImplantSet::new();
        for implant in implants {
            set.insert(*implant)?;
        }
        Ok(set)
    }
}
