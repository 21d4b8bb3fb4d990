//! Traits describing read-only decision data.
//!
//! Oracles expose archetypes, skill definitions, decision trees and
//! deterministic randomness. The [`AiEnv`] aggregate bundles them so a
//! decision pass can reach everything it needs without depending on how the
//! data was loaded.
mod archetype;
mod rng;
mod skills;
mod trees;

pub use archetype::{Archetype, ArchetypeOracle, BaseStats, BehaviorType, PerceptionConfig};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use skills::{DeliveryMode, SkillDefinition, SkillOracle, TargetingMode};
pub use trees::DecisionTreeOracle;

use behavior_tree::DecisionTree;

use crate::error::OracleError;

/// Borrowed view over every oracle a decision pass reads.
#[derive(Clone, Copy)]
pub struct AiEnv<'a> {
    archetypes: &'a dyn ArchetypeOracle,
    skills: &'a dyn SkillOracle,
    trees: &'a dyn DecisionTreeOracle,
    rng: &'a dyn RngOracle,
}

impl<'a> AiEnv<'a> {
    pub fn new(
        archetypes: &'a dyn ArchetypeOracle,
        skills: &'a dyn SkillOracle,
        trees: &'a dyn DecisionTreeOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            archetypes,
            skills,
            trees,
            rng,
        }
    }

    /// Returns the archetype for `id`, or the built-in fallback.
    pub fn archetype(&self, id: &str) -> &'a Archetype {
        match self.archetypes.archetype(id) {
            Some(archetype) => archetype,
            None => {
                tracing::warn!(archetype = id, "unknown archetype, using fallback");
                Archetype::fallback()
            }
        }
    }

    #[inline]
    pub fn skill(&self, id: &str) -> Option<&'a SkillDefinition> {
        self.skills.skill(id)
    }

    #[inline]
    pub fn tree(&self, id: &str) -> Option<&'a DecisionTree> {
        self.trees.tree(id)
    }

    #[inline]
    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    #[inline]
    pub fn skills(&self) -> &'a dyn SkillOracle {
        self.skills
    }

    /// Returns the archetype for `id`.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ArchetypeNotFound` if `id` is not registered.
    pub fn require_archetype(&self, id: &str) -> Result<&'a Archetype, OracleError> {
        self.archetypes
            .archetype(id)
            .ok_or_else(|| OracleError::ArchetypeNotFound(id.to_owned()))
    }

    /// Returns the skill for `id`.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SkillNotFound` if `id` is not registered.
    pub fn require_skill(&self, id: &str) -> Result<&'a SkillDefinition, OracleError> {
        self.skills
            .skill(id)
            .ok_or_else(|| OracleError::SkillNotFound(id.to_owned()))
    }

    /// Returns the decision tree for `id`.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TreeNotFound` if `id` is not registered.
    pub fn require_tree(&self, id: &str) -> Result<&'a DecisionTree, OracleError> {
        self.trees
            .tree(id)
            .ok_or_else(|| OracleError::TreeNotFound(id.to_owned()))
    }
}

impl std::fmt::Debug for AiEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiEnv").finish_non_exhaustive()
    }
}
