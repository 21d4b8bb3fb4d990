//! Perception cues and the priority rules that map them to responses.

use crate::state::{EntityId, Position, Timestamp};

/// Where a cue came from.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CueType {
    /// Currently seen.
    Visual,
    /// Remembered from an earlier sighting.
    Memory,
}

/// How strongly a cue registers, weakest first.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CueStrength {
    Weak,
    Moderate,
    Strong,
    Overwhelming,
}

impl CueStrength {
    /// Tier for a sighting at `distance / range` of the visual range.
    pub fn from_range_fraction(fraction: f32) -> Self {
        if fraction < 0.3 {
            CueStrength::Overwhelming
        } else if fraction < 0.6 {
            CueStrength::Strong
        } else if fraction < 0.8 {
            CueStrength::Moderate
        } else {
            CueStrength::Weak
        }
    }

    /// Memory confidence assigned to a fresh sighting of this tier.
    pub fn confidence(self) -> f32 {
        match self {
            CueStrength::Weak => 0.25,
            CueStrength::Moderate => 0.5,
            CueStrength::Strong => 0.75,
            CueStrength::Overwhelming => 1.0,
        }
    }

    /// Tier reported for a memory held with `confidence`.
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence >= 1.0 {
            CueStrength::Overwhelming
        } else if confidence >= 0.75 {
            CueStrength::Strong
        } else if confidence >= 0.5 {
            CueStrength::Moderate
        } else {
            CueStrength::Weak
        }
    }
}

/// One piece of sensed or remembered evidence about a hostile entity.
///
/// Recomputed on every perception pass; never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerceptionCue {
    pub kind: CueType,
    pub strength: CueStrength,
    pub source: Option<EntityId>,
    pub position: Position,
    pub timestamp: Timestamp,
}

/// Canned reaction selected for the winning cue.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CueResponse {
    Engage,
    Investigate,
    Evade,
    Flee,
    Ignore,
}

/// Row of an archetype's cue-priority table. Lower `priority` wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CuePriority {
    pub cue_type: CueType,
    pub min_strength: CueStrength,
    pub priority: i32,
    pub response: CueResponse,
}

impl CuePriority {
    pub const fn new(
        cue_type: CueType,
        min_strength: CueStrength,
        priority: i32,
        response: CueResponse,
    ) -> Self {
        Self {
            cue_type,
            min_strength,
            priority,
            response,
        }
    }

    /// Returns `true` if this row applies to `cue`.
    #[inline]
    pub fn matches(&self, cue: &PerceptionCue) -> bool {
        self.cue_type == cue.kind && cue.strength >= self.min_strength
    }
}
