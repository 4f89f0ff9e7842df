use crate::action::ActionCategory;
use crate::state::Timer;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Cost modifier policy used by the action catalog.
    pub cost_rules: CostRules,

    /// Starting timer for actors that join without an explicit stagger.
    pub default_stagger: Timer,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STAGGER: Timer = 0;

    pub fn new() -> Self {
        Self {
            cost_rules: CostRules::default(),
            default_stagger: Self::DEFAULT_STAGGER,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Tuning for [`ActionCatalog::modified_cost`](crate::ActionCatalog::modified_cost).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostRules {
    /// Skill levels needed per tick of reduction, per category.
    pub skill_divisors: SkillDivisors,

    pub impaired_penalty: u32,
    pub encumbered_penalty: u32,
    pub proper_tools_bonus: u32,
    pub assisted_bonus: u32,
}

impl CostRules {
    /// No modifier combination can bring a cost below this.
    pub const MIN_COST: u32 = 1;

    pub const DEFAULT_IMPAIRED_PENALTY: u32 = 2;
    pub const DEFAULT_ENCUMBERED_PENALTY: u32 = 1;
    pub const DEFAULT_PROPER_TOOLS_BONUS: u32 = 2;
    pub const DEFAULT_ASSISTED_BONUS: u32 = 1;
}

impl Default for CostRules {
    fn default() -> Self {
        Self {
            skill_divisors: SkillDivisors::default(),
            impaired_penalty: Self::DEFAULT_IMPAIRED_PENALTY,
            encumbered_penalty: Self::DEFAULT_ENCUMBERED_PENALTY,
            proper_tools_bonus: Self::DEFAULT_PROPER_TOOLS_BONUS,
            assisted_bonus: Self::DEFAULT_ASSISTED_BONUS,
        }
    }
}

/// Per-category skill divisor `K`. Must be positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillDivisors {
    pub movement: u32,
    pub combat: u32,
    pub technical: u32,
    pub medical: u32,
    pub general: u32,
}

impl SkillDivisors {
    pub const fn get(&self, category: ActionCategory) -> u32 {
        match category {
            ActionCategory::Movement => self.movement,
            ActionCategory::Combat => self.combat,
            ActionCategory::Technical => self.technical,
            ActionCategory::Medical => self.medical,
            ActionCategory::General => self.general,
        }
    }
}

impl Default for SkillDivisors {
    fn default() -> Self {
        Self {
            movement: 4,
            combat: 3,
            technical: 2,
            medical: 2,
            general: 5,
        }
    }
}
