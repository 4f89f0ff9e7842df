//! Situational and skill-based modifiers applied to an action's base cost.

use bitflags::bitflags;

bitflags! {
    /// Situational flags attached to an action request.
    ///
    /// Penalties add a fixed delta to the cost, bonuses subtract one. The
    /// deltas themselves live in [`CostRules`](crate::CostRules).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Situation: u8 {
        /// Wounded, dazed or otherwise impaired.
        const IMPAIRED     = 1 << 0;
        /// Carrying a heavy load.
        const ENCUMBERED   = 1 << 1;
        /// Has the right kit for the job.
        const PROPER_TOOLS = 1 << 2;
        /// Another crew member is helping.
        const ASSISTED     = 1 << 3;
    }
}

impl Situation {
    pub const PENALTIES: Self = Self::IMPAIRED.union(Self::ENCUMBERED);
    pub const BONUSES: Self = Self::PROPER_TOOLS.union(Self::ASSISTED);
}

#[cfg(feature = "serde")]
impl serde::Serialize for Situation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Situation {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

/// Everything besides the action kind that influences its tick cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostModifiers {
    /// Actor's skill in the action's category. Every `K` levels shave one
    /// tick off the cost, where `K` is the category's skill divisor.
    pub skill_level: u32,
    pub situation: Situation,
}

impl CostModifiers {
    pub const NONE: Self = Self {
        skill_level: 0,
        situation: Situation::empty(),
    };

    pub const fn with_skill(skill_level: u32) -> Self {
        Self {
            skill_level,
            situation: Situation::empty(),
        }
    }

    #[must_use]
    pub const fn situation(mut self, situation: Situation) -> Self {
        self.situation = self.situation.union(situation);
        self
    }
}
