mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SessionsEffect, SessionsEvent, SessionsIntent};
use iced::Task;
use model::{Session, SessionsViewModel};
use state::SessionsState;

/// Sessions widget: ordered conversations with a current-session cursor.
pub(crate) struct SessionsWidget {
    state: SessionsState,
}

impl SessionsWidget {
    /// Create the widget with a single fresh session.
    pub(crate) fn new() -> Self {
        Self {
            state: SessionsState::default(),
        }
    }

    /// Reduce a sessions intent into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SessionsIntent,
    ) -> Task<SessionsEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Produce the session list view model.
    pub(crate) fn vm(&self) -> SessionsViewModel<'_> {
        SessionsViewModel {
            sessions: self.state.sessions(),
            current: self.state.current_index(),
        }
    }

    /// Return the current session, if any.
    pub(crate) fn current(&self) -> Option<&Session> {
        self.state.current()
    }
}
