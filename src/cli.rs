use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::CatalogSnapshot;
use crate::error::{PlannerError, Result};
use crate::interface::{collect_planner_options, parse_limit};
use crate::models::{PlannerOptions, PlayerClass};

/// KoL diet planner: finds the most profitable way to fill your organs.
#[derive(Parser, Debug)]
#[command(name = "kol_diet_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog JSON file (consumables and effects).
    #[arg(short, long, global = true, default_value = "data.json")]
    pub data: PathBuf,

    /// Path to the item price JSON file.
    #[arg(short, long, global = true, default_value = "prices.json")]
    pub prices: PathBuf,

    /// Log more detail (repeat for more).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub options: OptionArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find the most profitable diet.
    Plan {
        /// Also write the diet to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Also write the plan to a JSON file.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// List every priced way to consume one item.
    Variants {
        /// Item id or name.
        #[arg(long)]
        item: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            csv: None,
            json: None,
        }
    }
}

/// Planner options given on the command line; unset values keep the
/// options file or built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// JSON file with planner options.
    #[arg(long, global = true)]
    pub options: Option<PathBuf>,

    /// Value of one adventure in meat.
    #[arg(long, global = true)]
    pub voa: Option<f64>,

    /// Base meat drop, used to value +meat effects.
    #[arg(long, global = true)]
    pub base_meat: Option<f64>,

    #[arg(long, global = true)]
    pub stomach: Option<i64>,

    #[arg(long, global = true)]
    pub liver: Option<i64>,

    #[arg(long, global = true)]
    pub spleen: Option<i64>,

    /// Usage cap as ITEM=N, where ITEM is an id or a name. Repeatable.
    #[arg(long = "limit", global = true)]
    pub limits: Vec<String>,

    /// Pizza Lover: pizzas give one extra adventure per fullness. `=false` turns it off.
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub pizza_lover: Option<bool>,

    /// Tuxedo shirt equipped: martinis give extra adventures. `=false` turns it off.
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub tuxedo_shirt: Option<bool>,

    /// Ode to Booze active: booze gives one extra adventure per drunkenness. `=false` turns it off.
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub ode_to_booze: Option<bool>,

    /// Saucemaven: saucy foods give extra adventures. `=false` turns it off.
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub saucemaven: Option<bool>,

    /// Offer Sweet Synthesis as a spleen use. `=false` turns it off.
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub sweet_synthesis: Option<bool>,

    /// Mayo Clinic available: foods can take a mayo treatment. `=false` turns it off.
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub mayo_clinic: Option<bool>,

    /// Mafia pinky ring equipped: wines give extra adventures. `=false` turns it off.
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub mafia_pinky_ring: Option<bool>,

    #[arg(long, global = true, value_enum)]
    pub class: Option<PlayerClass>,

    /// Ask for options interactively.
    #[arg(short, long, global = true)]
    pub interactive: bool,
}

impl OptionArgs {
    /// Layer file options and flags over the defaults.
    ///
    /// Without `--interactive` a value of adventure must come from the
    /// options file or `--voa`.
    pub fn resolve(&self, catalog: &CatalogSnapshot) -> Result<PlannerOptions> {
        let mut options = match &self.options {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                serde_json::from_str(&content)?
            }
            None => match self.voa {
                Some(voa) => PlannerOptions::with_voa(voa),
                None if self.interactive => PlannerOptions::default(),
                None => {
                    return Err(PlannerError::InvalidInput(
                        "a value of adventure is required (--voa or --options)".to_string(),
                    ));
                }
            },
        };

        if let Some(voa) = self.voa {
            options.value_of_adventure = voa;
        }
        if let Some(base_meat) = self.base_meat {
            options.base_meat = base_meat;
        }
        if let Some(stomach) = self.stomach {
            options.stomach = stomach;
        }
        if let Some(liver) = self.liver {
            options.liver = liver;
        }
        if let Some(spleen) = self.spleen {
            options.spleen = spleen;
        }
        if self.class.is_some() {
            options.class = self.class;
        }

        let toggles = [
            (&mut options.pizza_lover, self.pizza_lover),
            (&mut options.tuxedo_shirt, self.tuxedo_shirt),
            (&mut options.ode_to_booze, self.ode_to_booze),
            (&mut options.saucemaven, self.saucemaven),
            (&mut options.sweet_synthesis, self.sweet_synthesis),
            (&mut options.mayo_clinic, self.mayo_clinic),
            (&mut options.mafia_pinky_ring, self.mafia_pinky_ring),
        ];
        for (option, flag) in toggles {
            if let Some(on) = flag {
                *option = on;
            }
        }

        for raw in &self.limits {
            let (id, cap) = parse_limit(catalog, raw)?;
            options.limits.insert(id, cap);
        }

        if self.interactive {
            options = collect_planner_options(options)?;
        }

        options.validate()?;
        Ok(options)
    }
}
