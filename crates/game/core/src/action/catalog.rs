//! Action catalog: base tick costs plus the modifier policy.
//!
//! The catalog is immutable after construction and has no failure modes
//! beyond unknown identifiers. Profiles are normally loaded from RON data
//! by `aim-content`.

use std::collections::HashMap;
use std::str::FromStr;

use strum::IntoEnumIterator;

use super::kind::{ActionCategory, ActionKind};
use super::modifiers::{CostModifiers, Situation};
use crate::config::CostRules;
use crate::error::{CoreError, ErrorSeverity};

/// Static description of one action's timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionProfile {
    pub kind: ActionKind,
    pub category: ActionCategory,
    /// Unmodified delay in ticks. Zero is allowed for instantaneous actions.
    pub base_cost: u32,
}

impl ActionProfile {
    pub const fn new(kind: ActionKind, category: ActionCategory, base_cost: u32) -> Self {
        Self {
            kind,
            category,
            base_cost,
        }
    }
}

/// Lookup table from [`ActionKind`] to tick cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionCatalog {
    profiles: HashMap<ActionKind, ActionProfile>,
    rules: CostRules,
}

impl ActionCatalog {
    /// Builds a catalog, validating the rules and rejecting duplicate kinds.
    pub fn new(
        profiles: impl IntoIterator<Item = ActionProfile>,
        rules: CostRules,
    ) -> Result<Self, CatalogError> {
        for category in ActionCategory::iter() {
            if rules.skill_divisors.get(category) == 0 {
                return Err(CatalogError::InvalidSkillDivisor { category });
            }
        }

        let mut map = HashMap::new();
        for profile in profiles {
            if map.insert(profile.kind, profile).is_some() {
                return Err(CatalogError::DuplicateProfile { kind: profile.kind });
            }
        }

        Ok(Self {
            profiles: map,
            rules,
        })
    }

    pub fn rules(&self) -> &CostRules {
        &self.rules
    }

    pub fn profile(&self, kind: ActionKind) -> Result<&ActionProfile, CatalogError> {
        self.profiles
            .get(&kind)
            .ok_or(CatalogError::UnknownAction { kind })
    }

    /// Returns the unmodified cost of an action.
    pub fn base_cost(&self, kind: ActionKind) -> Result<u32, CatalogError> {
        self.profile(kind).map(|profile| profile.base_cost)
    }

    /// Same as [`ActionCatalog::base_cost`], keyed by action name.
    pub fn base_cost_by_name(&self, name: &str) -> Result<u32, CatalogError> {
        self.base_cost(parse_kind(name)?)
    }

    /// Returns the cost after skill and situational modifiers.
    ///
    /// The result is never below [`CostRules::MIN_COST`].
    pub fn modified_cost(
        &self,
        kind: ActionKind,
        modifiers: &CostModifiers,
    ) -> Result<u32, CatalogError> {
        let profile = self.profile(kind)?;
        Ok(calculate_modified_cost(
            profile.base_cost,
            profile.category,
            modifiers,
            &self.rules,
        ))
    }

    /// Same as [`ActionCatalog::modified_cost`], keyed by action name.
    pub fn modified_cost_by_name(
        &self,
        name: &str,
        modifiers: &CostModifiers,
    ) -> Result<u32, CatalogError> {
        self.modified_cost(parse_kind(name)?, modifiers)
    }

    /// Registered kinds in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = ActionKind> + '_ {
        ActionKind::iter().filter(|kind| self.profiles.contains_key(kind))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn parse_kind(name: &str) -> Result<ActionKind, CatalogError> {
    ActionKind::from_str(name.trim()).map_err(|_| CatalogError::UnknownActionName {
        name: name.to_owned(),
    })
}

/// Applies modifiers to a base cost.
///
/// Formula:
/// - `reduced  = max(base - skill / K, 1)`
/// - `penalized = reduced + Σ active penalties`
/// - `final    = max(penalized - Σ active bonuses, 1)`
///
/// # Examples
/// - Repair (base 6, Technical K=2), skill 5: 6 - 2 = 4
/// - same, impaired and with proper tools: 4 + 2 - 2 = 4
/// - Move (base 2, Movement K=4), skill 12: max(2 - 3, 1) = 1
pub fn calculate_modified_cost(
    base_cost: u32,
    category: ActionCategory,
    modifiers: &CostModifiers,
    rules: &CostRules,
) -> u32 {
    let divisor = rules.skill_divisors.get(category).max(1);
    let skill_reduction = modifiers.skill_level / divisor;
    let mut cost = base_cost
        .saturating_sub(skill_reduction)
        .max(CostRules::MIN_COST);

    let situation = modifiers.situation;
    if situation.contains(Situation::IMPAIRED) {
        cost = cost.saturating_add(rules.impaired_penalty);
    }
    if situation.contains(Situation::ENCUMBERED) {
        cost = cost.saturating_add(rules.encumbered_penalty);
    }
    if situation.contains(Situation::PROPER_TOOLS) {
        cost = cost.saturating_sub(rules.proper_tools_bonus);
    }
    if situation.contains(Situation::ASSISTED) {
        cost = cost.saturating_sub(rules.assisted_bonus);
    }

    cost.max(CostRules::MIN_COST)
}

/// Errors raised by catalog construction and lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    #[error("action '{kind}' is not defined in the catalog")]
    UnknownAction { kind: ActionKind },

    #[error("unrecognized action identifier '{name}'")]
    UnknownActionName { name: String },

    #[error("action '{kind}' is defined more than once")]
    DuplicateProfile { kind: ActionKind },

    #[error("skill divisor for category '{category}' must be positive")]
    InvalidSkillDivisor { category: ActionCategory },
}

impl CoreError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAction { .. } | Self::UnknownActionName { .. } => "CATALOG_UNKNOWN_ACTION",
            Self::DuplicateProfile { .. } => "CATALOG_DUPLICATE_PROFILE",
            Self::InvalidSkillDivisor { .. } => "CATALOG_INVALID_SKILL_DIVISOR",
        }
    }
}
