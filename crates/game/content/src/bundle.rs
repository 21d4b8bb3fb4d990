//! In-memory content and cross-reference validation.

use std::collections::BTreeMap;

use behavior_tree::{BehaviorNode, DecisionTree};
use npc_core::{
    AgentController, AiConfig, AiEnv, Archetype, ArchetypeOracle, DecisionTreeOracle, EntityId,
    OracleError, PcgRng, Position, SkillDefinition, SkillOracle,
};

/// Spawn description for one agent in a roster file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSpec {
    pub archetype: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub behavior_tree: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<String>,
    pub spawn: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub waypoints: Option<Vec<Position>>,
}

impl AgentSpec {
    /// Builds a fresh controller for `entity` spawned at `offset` from the roster position.
    pub fn controller(&self, entity: EntityId, offset: Position) -> AgentController {
        let mut controller = AgentController::new(entity, self.archetype.clone(), self.spawn + offset)
            .with_skills(self.skills.iter().cloned());
        if let Some(tree) = &self.behavior_tree {
            controller = controller.with_behavior_tree(tree.clone());
        }
        if let Some(waypoints) = &self.waypoints {
            controller = controller.with_waypoints(waypoints.iter().map(|&wp| wp + offset).collect());
        }
        controller
    }
}

/// Everything loaded from one data directory.
#[derive(Clone, Debug, Default)]
pub struct ContentBundle {
    pub config: AiConfig,
    pub archetypes: BTreeMap<String, Archetype>,
    pub skills: Vec<SkillDefinition>,
    pub trees: BTreeMap<String, DecisionTree>,
    pub agents: Vec<AgentSpec>,
}

impl ContentBundle {
    /// Checks that every id referenced by content resolves.
    ///
    /// Covers roster archetypes, trees and skills, plus `skill` parameters on
    /// tree leaves.
    ///
    /// # Errors
    ///
    /// Returns the first unresolved reference.
    pub fn validate(&self) -> Result<(), OracleError> {
        let env = AiEnv::new(self, self, self, &PcgRng);
        for agent in &self.agents {
            env.require_archetype(&agent.archetype)?;
            if let Some(tree) = &agent.behavior_tree {
                env.require_tree(tree)?;
            }
            for skill in &agent.skills {
                env.require_skill(skill)?;
            }
        }

        for tree in self.trees.values() {
            for skill in referenced_skills(&tree.root) {
                env.require_skill(skill)?;
            }
        }
        Ok(())
    }
}

impl ArchetypeOracle for ContentBundle {
    fn archetype(&self, id: &str) -> Option<&Archetype> {
        self.archetypes.get(id)
    }
}

impl SkillOracle for ContentBundle {
    fn skill(&self, id: &str) -> Option<&SkillDefinition> {
        self.skills.iter().find(|skill| skill.id == id)
    }
}

impl DecisionTreeOracle for ContentBundle {
    fn tree(&self, id: &str) -> Option<&DecisionTree> {
        self.trees.get(id)
    }
}

/// Values of every `skill` parameter in the tree.
fn referenced_skills(root: &BehaviorNode) -> Vec<&str> {
    let mut pending = vec![root];
    let mut skills = Vec::new();
    while let Some(node) = pending.pop() {
        match node {
            BehaviorNode::Selector(children) | BehaviorNode::Sequence(children) => {
                pending.extend(children.iter());
            }
            BehaviorNode::Inverter(child) => pending.push(child),
            BehaviorNode::Condition { params, .. } | BehaviorNode::Action { params, .. } => {
                if let Some(skill) = params.get("skill") {
                    skills.push(skill.as_str());
                }
            }
        }
    }
    skills
}
