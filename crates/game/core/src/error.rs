//! Strict repository lookup errors.
//!
//! Decision code never sees these: it goes through the lenient accessors on
//! [`AiEnv`](crate::env::AiEnv), which fall back instead of failing. They are
//! returned by the `require_*` accessors that content validation uses.

/// A referenced id does not resolve in its repository.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("archetype '{0}' not found")]
    ArchetypeNotFound(String),

    #[error("skill '{0}' not found")]
    SkillNotFound(String),

    #[error("decision tree '{0}' not found")]
    TreeNotFound(String),
}

impl OracleError {
    /// Stable identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ArchetypeNotFound(_) => "ORACLE_ARCHETYPE_NOT_FOUND",
            Self::SkillNotFound(_) => "ORACLE_SKILL_NOT_FOUND",
            Self::TreeNotFound(_) => "ORACLE_TREE_NOT_FOUND",
        }
    }
}
