use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("input not found: {0}")]
    InputNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid scoring policy: {0}")]
    InvalidPolicy(String),

    #[error("not enough ranked candidates: found {found}, required {required}")]
    InsufficientCandidates { found: usize, required: usize },

    #[error("model reply contained no ranked candidate ids")]
    NoMatchingSelection,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RankError {
    /// Errors raised by the shortlist gates rather than by a broken run.
    pub fn is_gate_failure(&self) -> bool {
        matches!(
            self,
            RankError::InsufficientCandidates { .. } | RankError::NoMatchingSelection
        )
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
