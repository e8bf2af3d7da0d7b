use iced::{Point, keyboard};

/// Intent events handled by the sidebar widget.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    /// The pointer moved anywhere over the window content. Drives an active
    /// drag the same way as [`SidebarIntent::DragMoved`].
    CursorMoved { position: Point },
    /// The drag handle received a left press.
    DragHandlePressed,
    /// The pointer moved while a drag gesture is active.
    DragMoved { position: Point },
    /// The left button was released while a drag gesture is active.
    DragReleased,
    /// A key was pressed while the sidebar is mounted.
    KeyPressed(keyboard::Event),
    /// A session row was pressed.
    SessionPressed { index: usize },
    NewSessionPressed,
    DeleteSessionPressed,
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEffect {
    /// A drag gesture finished; the stored width may need persisting.
    GestureEnded,
    /// Move the current session by `delta`.
    AdvanceSession { delta: i32 },
    SelectSession { index: usize },
    CreateSession,
    DeleteCurrentSession,
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
