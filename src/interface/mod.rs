pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_plan_csv, write_plan_json};
pub use prompts::{collect_planner_options, parse_limit, resolve_item};
pub use render::{display_plan, display_variants};
