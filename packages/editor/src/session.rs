//! # Edit Session
//!
//! Owns the editor state and is its only mutator. Callers dispatch actions
//! in order; each dispatch replaces the held state with the reducer's
//! output, or leaves it untouched if the transition failed.

use crate::actions::Action;
use crate::errors::EditorResult;
use crate::options::EditorOptions;
use crate::reducer::reduce;
use crate::state::EditorState;

#[derive(Debug, Default)]
pub struct EditSession {
    state: EditorState,
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            state: EditorState::new(),
        }
    }

    pub fn with_options(options: &EditorOptions) -> Self {
        Self {
            state: EditorState::with_options(options),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn into_state(self) -> EditorState {
        self.state
    }

    /// Apply one action
    pub fn dispatch(&mut self, action: Action) -> EditorResult<&EditorState> {
        self.state = reduce(&self.state, action)?;
        Ok(&self.state)
    }

    /// Decode and apply one action given in its JSON form
    pub fn dispatch_json(&mut self, source: &str) -> EditorResult<&EditorState> {
        let action = Action::from_json(source)?;
        self.dispatch(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EditorError;

    #[test]
    fn test_dispatch_replaces_state() {
        let mut session = EditSession::new();

        session
            .dispatch_json(r#"{"type": "AddDocument", "payload": {"filename": "scan.png"}}"#)
            .unwrap();

        assert_eq!(session.state().app.documents.len(), 1);
        assert_eq!(session.state().app.documents[0].filename, "scan.png");
    }

    #[test]
    fn test_failed_dispatch_keeps_state() {
        let mut session = EditSession::new();
        session
            .dispatch_json(r#"{"type": "AddDocument", "payload": {"filename": "scan.png"}}"#)
            .unwrap();
        let before = session.state().app.clone();

        let result = session.dispatch_json(
            r#"{"type": "ChangeIsProcessing", "payload": {"id": 99, "isProcessing": true}}"#,
        );

        assert!(matches!(result, Err(EditorError::DocumentNotFound(99))));
        assert_eq!(session.state().app, before);
        assert_eq!(session.state().history().len(), 1);
    }

    #[test]
    fn test_unknown_action_is_fatal() {
        let mut session = EditSession::new();
        let result = session.dispatch_json(r#"{"type": "Explode"}"#);
        assert_eq!(
            result.map(|_| ()),
            Err(EditorError::UnknownAction("Explode".to_string()))
        );
    }

    #[test]
    fn test_history_limit_from_options() {
        let mut session = EditSession::with_options(&EditorOptions { history_limit: 2 });

        for name in ["a.png", "b.png", "c.png"] {
            session
                .dispatch(Action::AddDocument(crate::actions::AddDocumentPayload {
                    filename: name.to_string(),
                    page_image: None,
                }))
                .unwrap();
        }

        assert_eq!(session.state().history().len(), 2);
    }
}
