use crate::memory::{SessionStore, LEGACY_HISTORY_CAP};
use crate::responses::{CannedResponses, ResponseSource};
use crate::summary::summarize;
use crate::{Category, Classifier};
use std::sync::Arc;

/// Inputs that end an interactive conversation
pub const EXIT_COMMANDS: [&str; 4] = ["quit", "exit", "bye", "goodbye"];

const STANDALONE_SESSION: &str = "default";

/// Whether a line of user input asks to end the conversation
#[must_use]
pub fn is_exit_command(input: &str) -> bool {
    let input = input.trim();
    EXIT_COMMANDS.iter().any(|cmd| input.eq_ignore_ascii_case(cmd))
}

/// Reply produced for one user message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub category: Category,
    pub text: String,
}

/// One conversation: classifies each message, records it in the session
/// store, and answers from a response source
pub struct Companion {
    classifier: Arc<Classifier>,
    responses: Arc<dyn ResponseSource>,
    fallback: CannedResponses,
    store: Arc<SessionStore>,
    session_id: String,
}

impl Companion {
    #[must_use]
    pub fn new(
        classifier: Arc<Classifier>,
        responses: Arc<dyn ResponseSource>,
        store: Arc<SessionStore>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            classifier,
            responses,
            fallback: CannedResponses::default(),
            store,
            session_id: session_id.into(),
        }
    }

    /// Single-session companion with the built-in lexicon and replies and a
    /// private store keeping the last 50 interactions
    #[must_use]
    pub fn standalone() -> Self {
        Self::new(
            Arc::new(Classifier::default()),
            Arc::new(CannedResponses::default()),
            Arc::new(SessionStore::with_cap(LEGACY_HISTORY_CAP)),
            STANDALONE_SESSION,
        )
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    #[must_use]
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Classify a message without recording it
    #[must_use]
    pub fn detect(&self, message: &str) -> Category {
        self.classifier.classify(message)
    }

    /// Classify, record, and answer a message. A failing response source
    /// falls back to the canned replies.
    pub fn respond(&self, message: &str) -> Reply {
        let category = self.detect(message);
        self.store.add_entry(&self.session_id, message, category, None);

        let text = match self.responses.respond(message, category) {
            Ok(text) => text,
            Err(e) => {
                log::warn!(
                    "Response source '{}' failed, using canned reply: {e}",
                    self.responses.name()
                );
                self.fallback.pick(category).to_string()
            }
        };

        Reply { category, text }
    }

    /// Emotional summary of this session's history
    #[must_use]
    pub fn summary(&self) -> String {
        summarize(&self.store.get_session(&self.session_id))
    }
}
