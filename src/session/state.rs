//! Session states

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a session stands in the pseudonymization workflow
///
/// ```text
/// Idle -> DatasetLoaded -> ColumnsSelected -> Validated -> Tokenized
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Nothing loaded yet
    #[default]
    Idle,
    /// A dataset is loaded, no drop column chosen
    DatasetLoaded,
    /// At least one drop choice has been made
    ColumnsSelected,
    /// Drop selection locked and applied; identifier may be chosen
    Validated,
    /// Identifier column tokenized; outputs can be persisted
    Tokenized,
}

impl SessionState {
    /// Whether the drop selection may still be edited
    pub fn accepts_selection(self) -> bool {
        matches!(self, Self::DatasetLoaded | Self::ColumnsSelected)
    }

    /// Snake-case name, as used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::DatasetLoaded => "dataset_loaded",
            Self::ColumnsSelected => "columns_selected",
            Self::Validated => "validated",
            Self::Tokenized => "tokenized",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SessionState::default(), SessionState::Idle);
    }

    #[test]
    fn test_display_matches_serde() {
        let json = serde_json::to_string(&SessionState::ColumnsSelected).unwrap();
        assert_eq!(json, "\"columns_selected\"");
        assert_eq!(SessionState::ColumnsSelected.to_string(), "columns_selected");
    }

    #[test]
    fn test_accepts_selection() {
        assert!(SessionState::DatasetLoaded.accepts_selection());
        assert!(SessionState::ColumnsSelected.accepts_selection());
        assert!(!SessionState::Validated.accepts_selection());
        assert!(!SessionState::Idle.accepts_selection());
    }
}
