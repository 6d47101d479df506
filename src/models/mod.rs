mod consumable;
mod options;
mod plan;
mod variant;

pub use consumable::{Consumable, Effect};
pub use options::{PlannerOptions, PlayerClass};
pub use plan::{DietEntry, Plan};
pub use variant::{Accessory, Chaser, ServingOption, Tags, Treatment, Variant, VariantKey};
