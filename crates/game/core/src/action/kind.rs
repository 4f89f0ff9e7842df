//! Action kind enumeration - every action a crew member or creature can take.

/// Types of actions that can be requested for an actor.
///
/// Tick costs are not hard-coded here; they come from the loaded
/// [`ActionCatalog`](super::ActionCatalog). Parsing from text is
/// case-insensitive snake_case (`"sprint"`, `"Stabilize"`).
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    // ========================================================================
    // General
    // ========================================================================
    /// Hold position and let time pass.
    Wait,

    /// Use a console, door, locker or other fixture.
    Interact,

    /// Sweep the surroundings for motion, items or clues.
    Search,

    // ========================================================================
    // Movement
    // ========================================================================
    /// Move one section of the deck.
    Move,

    /// Move two sections, at a higher cost.
    Sprint,

    // ========================================================================
    // Combat
    // ========================================================================
    Attack,

    /// Line up a shot; the next attack is more accurate.
    Aim,

    Reload,

    // ========================================================================
    // Technical
    // ========================================================================
    /// Fix a damaged system or piece of equipment.
    Repair,

    /// Bypass a locked terminal or door controller.
    Hack,

    /// Seal or cut through a bulkhead.
    Weld,

    // ========================================================================
    // Medical
    // ========================================================================
    /// Treat wounds on yourself or an adjacent crew member.
    Heal,

    /// Keep a downed crew member alive.
    Stabilize,
}

/// Broad grouping that decides how skill reduces an action's cost.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionCategory {
    Movement,
    Combat,
    Technical,
    Medical,
    General,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn kinds_parse_case_insensitively() {
        assert_eq!(ActionKind::from_str("sprint"), Ok(ActionKind::Sprint));
        assert_eq!(ActionKind::from_str("Stabilize"), Ok(ActionKind::Stabilize));
        assert!(ActionKind::from_str("teleport").is_err());
    }
}
