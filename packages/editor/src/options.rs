use serde::{Deserialize, Serialize};

/// Maximum number of snapshots kept for undo/redo
pub const DEFAULT_HISTORY_LIMIT: usize = 40;

/// Tunables for an editor instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    /// Snapshots retained before the oldest is evicted (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_field_missing() {
        let options: EditorOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.history_limit, 40);
    }

    #[test]
    fn test_parse_options() {
        let options: EditorOptions = serde_json::from_str(r#"{"historyLimit": 5}"#).unwrap();
        assert_eq!(options, EditorOptions { history_limit: 5 });
    }
}
