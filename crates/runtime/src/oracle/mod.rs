//! Runtime wrappers around static decision content.
//!
//! These implementations expose `npc-core` oracle traits and bundle them into
//! an [`OracleManager`] so the runtime can build [`npc_core::AiEnv`] views on
//! demand. The data is immutable at runtime; per-agent state lives in the
//! controller store.
mod archetypes;
mod skills;
mod trees;

use std::sync::Arc;

use npc_content::ContentBundle;
use npc_core::{AiEnv, PcgRng};

pub use archetypes::ArchetypeOracleImpl;
pub use skills::SkillOracleImpl;
pub use trees::TreeOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) archetypes: Arc<ArchetypeOracleImpl>,
    pub(crate) skills: Arc<SkillOracleImpl>,
    pub(crate) trees: Arc<TreeOracleImpl>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        archetypes: Arc<ArchetypeOracleImpl>,
        skills: Arc<SkillOracleImpl>,
        trees: Arc<TreeOracleImpl>,
    ) -> Self {
        Self {
            archetypes,
            skills,
            trees,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Builds oracles from loaded content.
    pub fn from_content(content: &ContentBundle) -> Self {
        Self::new(
            Arc::new(content.archetypes.clone().into_iter().collect()),
            Arc::new(content.skills.iter().cloned().collect()),
            Arc::new(content.trees.clone().into_iter().collect()),
        )
    }

    /// Borrowed view for decision passes.
    pub fn as_ai_env(&self) -> AiEnv<'_> {
        AiEnv::new(
            self.archetypes.as_ref(),
            self.skills.as_ref(),
            self.trees.as_ref(),
            &self.rng,
        )
    }

    pub fn archetypes(&self) -> &ArchetypeOracleImpl {
        &self.archetypes
    }

    pub fn skills(&self) -> &SkillOracleImpl {
        &self.skills
    }

    pub fn trees(&self) -> &TreeOracleImpl {
        &self.trees
    }
}

impl Default for OracleManager {
    fn default() -> Self {
        Self::new(
            Arc::new(ArchetypeOracleImpl::new()),
            Arc::new(SkillOracleImpl::new()),
            Arc::new(TreeOracleImpl::new()),
        )
    }
}
