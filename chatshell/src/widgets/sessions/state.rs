use super::model::Session;

/// Ordered conversation sessions with a current-session cursor.
///
/// The store never becomes empty through its own operations: deleting the
/// last session replaces it with a fresh one.
#[derive(Debug)]
pub(crate) struct SessionsState {
    sessions: Vec<Session>,
    current: usize,
}

impl Default for SessionsState {
    fn default() -> Self {
        Self {
            sessions: vec![Session::default()],
            current: 0,
        }
    }
}

impl SessionsState {
    #[cfg(test)]
    pub(crate) fn with_sessions(sessions: Vec<Session>) -> Self {
        Self {
            sessions,
            current: 0,
        }
    }

    pub(crate) fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub(crate) fn current_index(&self) -> usize {
        self.current
    }

    pub(crate) fn current(&self) -> Option<&Session> {
        self.sessions.get(self.current)
    }

    /// Move the cursor by `delta`, wrapping at both ends.
    pub(crate) fn advance(&mut self, delta: i32) {
        let len = self.sessions.len() as i64;
        if len == 0 {
            return;
        }

        let next = (self.current as i64 + i64::from(delta)).rem_euclid(len);
        self.current = next as usize;
    }

    /// Select the session at `index`. Returns `false` for unknown indexes.
    pub(crate) fn select(&mut self, index: usize) -> bool {
        if index >= self.sessions.len() {
            return false;
        }

        self.current = index;
        true
    }

    /// Insert a new session at the top and select it.
    pub(crate) fn create(&mut self) {
        self.sessions.insert(0, Session::default());
        self.current = 0;
    }

    /// Remove the current session and return it.
    pub(crate) fn delete_current(&mut self) -> Option<Session> {
        if self.current >= self.sessions.len() {
            return None;
        }

        let removed = self.sessions.remove(self.current);
        if self.sessions.is_empty() {
            self.sessions.push(Session::default());
        }
        self.current = self.current.min(self.sessions.len() - 1);

        Some(removed)
    }
}
