//! Load a content directory and report what it contains.
//!
//! Loading already cross-checks references, so a clean exit means the roster
//! can be spawned as-is.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use npc_content::ContentFactory;

/// Load and cross-check a content directory
#[derive(Parser)]
pub struct Validate {
    /// Content directory (defaults to the shipped sample content)
    #[arg(value_name = "DIR")]
    content: Option<PathBuf>,
}

impl Validate {
    pub fn execute(self) -> Result<()> {
        let dir = self.content.unwrap_or_else(super::default_content_dir);
        let content = ContentFactory::new(&dir)
            .load_all()
            .with_context(|| format!("Content in {} is invalid", dir.display()))?;

        println!("Content: {}", dir.display());
        println!("  world seed: {}", content.config.world_seed);

        println!("  archetypes: {}", content.archetypes.len());
        for (id, archetype) in &content.archetypes {
            println!(
                "    {id:<12} {:<10} range {:>5.0}  fov {:>3.0}  every {}ms",
                archetype.behavior,
                archetype.perception.visual_range,
                archetype.perception.fov_degrees,
                archetype.decision_interval_ms,
            );
        }

        println!("  skills: {}", content.skills.len());
        for skill in &content.skills {
            println!(
                "    {:<12} {:<10} range {:>5.0}  cooldown {}ms",
                skill.id,
                skill.delivery,
                skill.effective_range(),
                skill.cooldown_ms,
            );
        }

        println!("  trees: {}", content.trees.len());
        for (id, tree) in &content.trees {
            println!("    {id:<12} {} nodes", tree.root.node_count());
        }

        println!("  agents: {}", content.agents.len());
        Ok(())
    }
}
