//! Action tokens of the ID-addressed API.
//!
//! The real library hands out opaque strings that callers pass back to
//! `is_action_required` / `mark_action_fulfilled`. Here they are a closed
//! enumeration; the strings only appear at the boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MockError;

/// A checkpointing step the coupling library may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Write initial data before the first exchange.
    #[serde(rename = "dummyWriteInitialData")]
    WriteInitialData,
    /// Save solver state at the start of an implicit iteration.
    #[serde(rename = "dummyWriteIteration")]
    WriteIterationCheckpoint,
    /// Restore the saved solver state.
    #[serde(rename = "dummyReadIteration")]
    ReadIterationCheckpoint,
}

impl Action {
    /// All actions, in declaration order.
    pub const ALL: [Action; 3] = [
        Action::WriteInitialData,
        Action::WriteIterationCheckpoint,
        Action::ReadIterationCheckpoint,
    ];

    /// Returns the token string callers compare against.
    pub fn token(self) -> &'static str {
        match self {
            Self::WriteInitialData => "dummyWriteInitialData",
            Self::WriteIterationCheckpoint => "dummyWriteIteration",
            Self::ReadIterationCheckpoint => "dummyReadIteration",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Action {
    type Err = MockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.token() == s)
            .ok_or_else(|| MockError::UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        assert_eq!(Action::WriteInitialData.token(), "dummyWriteInitialData");
        assert_eq!(
            Action::WriteIterationCheckpoint.to_string(),
            "dummyWriteIteration"
        );
        assert_eq!(
            "dummyReadIteration".parse::<Action>().unwrap(),
            Action::ReadIterationCheckpoint
        );
    }

    #[test]
    fn test_unknown_token() {
        let err = "writeInitialData".parse::<Action>().unwrap_err();
        assert!(matches!(err, MockError::UnknownAction(token) if token == "writeInitialData"));
    }

    #[test]
    fn test_serde_uses_tokens() {
        let json = serde_json::to_string(&Action::WriteIterationCheckpoint).unwrap();
        assert_eq!(json, "\"dummyWriteIteration\"");
        let action: Action = serde_json::from_str("\"dummyWriteInitialData\"").unwrap();
        assert_eq!(action, Action::WriteInitialData);
    }
}
