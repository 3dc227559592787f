//! Lifecycle phase of a mock adapter.
//!
//! The phase is recorded for inspection by tests; no operation is refused
//! because of it.

/// Where an adapter is in the create → initialize → advance → finalize cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Constructed, not yet initialized.
    #[default]
    Created,
    /// `initialize` has been called.
    Initialized,
    /// `advance` has been called at least once since initialization.
    Advancing,
    /// `finalize` has been called.
    Finalized,
}

impl Phase {
    /// Phase after `initialize`.
    #[must_use]
    pub fn on_initialize(self) -> Self {
        match self {
            Self::Finalized => Self::Finalized,
            _ => Self::Initialized,
        }
    }

    /// Phase after `advance`.
    #[must_use]
    pub fn on_advance(self) -> Self {
        match self {
            Self::Initialized | Self::Advancing => Self::Advancing,
            other => other,
        }
    }

    /// Phase after `finalize`.
    #[must_use]
    pub fn on_finalize(self) -> Self {
        Self::Finalized
    }

    /// Returns true once `finalize` has been called.
    pub fn is_finalized(self) -> bool {
        self == Self::Finalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_cycle() {
        let phase = Phase::default();
        assert_eq!(phase, Phase::Created);
        let phase = phase.on_initialize();
        assert_eq!(phase, Phase::Initialized);
        let phase = phase.on_advance().on_advance();
        assert_eq!(phase, Phase::Advancing);
        assert!(phase.on_finalize().is_finalized());
    }

    #[test]
    fn test_out_of_order_calls_are_tolerated() {
        assert_eq!(Phase::Created.on_advance(), Phase::Created);
        assert_eq!(Phase::Finalized.on_advance(), Phase::Finalized);
        assert_eq!(Phase::Finalized.on_initialize(), Phase::Finalized);
        assert_eq!(Phase::Advancing.on_initialize(), Phase::Initialized);
    }
}
