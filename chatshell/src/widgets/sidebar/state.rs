use iced::Point;

use super::drag::DragSession;

/// Internal runtime state for sidebar interaction.
///
/// The drag session is kept out of the rendered layout data: only the
/// stored width drives rendering.
#[derive(Debug, Default)]
pub(super) struct SidebarState {
    cursor: Point,
    drag: Option<DragSession>,
}

impl SidebarState {
    pub(super) fn cursor(&self) -> Point {
        self.cursor
    }

    pub(super) fn update_cursor(&mut self, position: Point) {
        self.cursor = position;
    }

    pub(super) fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub(super) fn begin_drag(&mut self, session: DragSession) {
        self.drag = Some(session);
    }

    pub(super) fn drag_mut(&mut self) -> Option<&mut DragSession> {
        self.drag.as_mut()
    }

    /// Discard the active gesture and return it.
    pub(super) fn end_drag(&mut self) -> Option<DragSession> {
        self.drag.take()
    }
}
