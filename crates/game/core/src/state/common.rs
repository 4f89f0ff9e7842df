use std::fmt;

/// Unique identifier for an actor taking part in the turn order.
///
/// Identifiers are handed out once per session and never reused while the
/// session lives, even after the actor leaves the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActorId(pub u32);

impl ActorId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the identifier that follows this one, or `None` at `u32::MAX`.
    #[inline]
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ActorId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Global simulation clock, incremented once per time-advance step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the following tick.
    #[inline]
    #[must_use]
    pub const fn succ(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-actor countdown value. Zero or below means the actor may act.
pub type Timer = i64;

/// Per-actor decrement applied on every time-advance step. Always positive.
pub type Speed = i64;
