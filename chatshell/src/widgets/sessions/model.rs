use uuid::Uuid;

/// Title given to freshly created sessions.
pub(crate) const DEFAULT_SESSION_TITLE: &str = "New Conversation";

/// Metadata for a single conversation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Session {
    id: Uuid,
    title: String,
}

impl Session {
    /// Create a session with a fresh identifier.
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
        }
    }

    /// Return session identifier.
    pub(crate) fn id(&self) -> Uuid {
        self.id
    }

    /// Return session title shown in the session list.
    pub(crate) fn title(&self) -> &str {
        &self.title
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TITLE)
    }
}

/// View model for the session list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionsViewModel<'a> {
    pub(crate) sessions: &'a [Session],
    pub(crate) current: usize,
}
