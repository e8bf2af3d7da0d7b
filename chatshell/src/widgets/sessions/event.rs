/// Intent events handled by the sessions widget.
#[derive(Debug, Clone)]
pub(crate) enum SessionsIntent {
    /// Move the current session by a relative step.
    Advance { delta: i32 },
    /// Make the session at `index` current.
    Select { index: usize },
    Create,
    DeleteCurrent,
}

/// Effect events produced by the sessions reducer.
#[derive(Debug, Clone)]
pub(crate) enum SessionsEffect {
    /// A session was explicitly opened by the user.
    Opened { index: usize },
}

/// Sessions event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SessionsEvent {
    Intent(SessionsIntent),
    Effect(SessionsEffect),
}
