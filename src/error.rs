use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate model variable: {0}")]
    DuplicateVariable(String),

    #[error("No plan possible: constraints admit no feasible diet")]
    Infeasible,

    #[error("No plan possible: objective is unbounded")]
    Unbounded,

    #[error("Solver error: {0}")]
    Solver(String),
}

impl PlannerError {
    /// Whether this is a "no plan possible" outcome rather than a failure.
    pub fn is_no_plan(&self) -> bool {
        matches!(self, PlannerError::Infeasible | PlannerError::Unbounded)
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
