use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Player class, only relevant to the Saucemaven bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum PlayerClass {
    #[serde(rename = "Seal Clubber")]
    SealClubber,
    #[serde(rename = "Turtle Tamer")]
    TurtleTamer,
    #[serde(rename = "Pastamancer")]
    Pastamancer,
    #[serde(rename = "Sauceror")]
    Sauceror,
    #[serde(rename = "Disco Bandit")]
    DiscoBandit,
    #[serde(rename = "Accordion Thief")]
    AccordionThief,
}

impl PlayerClass {
    pub const ALL: [PlayerClass; 6] = [
        PlayerClass::SealClubber,
        PlayerClass::TurtleTamer,
        PlayerClass::Pastamancer,
        PlayerClass::Sauceror,
        PlayerClass::DiscoBandit,
        PlayerClass::AccordionThief,
    ];

    /// Mysticality classes get the extended Saucemaven bonus.
    pub fn is_mysticality(self) -> bool {
        matches!(self, PlayerClass::Pastamancer | PlayerClass::Sauceror)
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerClass::SealClubber => "Seal Clubber",
            PlayerClass::TurtleTamer => "Turtle Tamer",
            PlayerClass::Pastamancer => "Pastamancer",
            PlayerClass::Sauceror => "Sauceror",
            PlayerClass::DiscoBandit => "Disco Bandit",
            PlayerClass::AccordionThief => "Accordion Thief",
        }
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for a single planning call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerOptions {
    /// Stomach space the plan may fill.
    #[serde(default = "default_stomach")]
    pub stomach: i64,

    /// Liver space the plan may fill.
    #[serde(default = "default_liver")]
    pub liver: i64,

    /// Spleen space the plan may fill.
    #[serde(default = "default_spleen")]
    pub spleen: i64,

    /// Meat value of a marginal adventure.
    pub value_of_adventure: f64,

    /// Base meat drop, used to value +meat effects.
    #[serde(default)]
    pub base_meat: f64,

    /// Item id to usage cap, applied over the catalog's default caps.
    #[serde(default)]
    pub limits: BTreeMap<u32, i64>,

    #[serde(default)]
    pub pizza_lover: bool,

    #[serde(default)]
    pub tuxedo_shirt: bool,

    #[serde(default)]
    pub ode_to_booze: bool,

    #[serde(default)]
    pub saucemaven: bool,

    #[serde(default)]
    pub class: Option<PlayerClass>,

    #[serde(default)]
    pub sweet_synthesis: bool,

    #[serde(default)]
    pub mayo_clinic: bool,

    #[serde(default)]
    pub mafia_pinky_ring: bool,
}

fn default_stomach() -> i64 {
    15
}

fn default_liver() -> i64 {
    14
}

fn default_spleen() -> i64 {
    15
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            stomach: default_stomach(),
            liver: default_liver(),
            spleen: default_spleen(),
            value_of_adventure: 0.0,
            base_meat: 0.0,
            limits: BTreeMap::new(),
            pizza_lover: false,
            tuxedo_shirt: false,
            ode_to_booze: false,
            saucemaven: false,
            class: None,
            sweet_synthesis: false,
            mayo_clinic: false,
            mafia_pinky_ring: false,
        }
    }
}

impl PlannerOptions {
    /// Options with default capacities and the given value of adventure.
    pub fn with_voa(value_of_adventure: f64) -> Self {
        Self {
            value_of_adventure,
            ..Default::default()
        }
    }

    /// Reject values that would make profits meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.value_of_adventure.is_finite() || self.value_of_adventure < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "value of adventure must be a non-negative number, got {}",
                self.value_of_adventure
            )));
        }
        if !self.base_meat.is_finite() || self.base_meat < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "base meat must be a non-negative number, got {}",
                self.base_meat
            )));
        }
        Ok(())
    }

    /// Value of a percentage meat drop bonus for one turn.
    pub fn value_meat_drop(&self, percent: f64) -> f64 {
        self.base_meat * (percent / 100.0)
    }
}
