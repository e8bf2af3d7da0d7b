use iced::Task;

use super::event::{SessionsEffect, SessionsEvent, SessionsIntent};
use super::state::SessionsState;

/// Reduce a sessions intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SessionsState,
    event: SessionsIntent,
) -> Task<SessionsEvent> {
    match event {
        SessionsIntent::Advance { delta } => {
            state.advance(delta);
            Task::none()
        },
        SessionsIntent::Select { index } => {
            if !state.select(index) {
                log::debug!("ignoring selection of unknown session {index}");
                return Task::none();
            }
            opened(index)
        },
        SessionsIntent::Create => {
            state.create();
            opened(state.current_index())
        },
        SessionsIntent::DeleteCurrent => {
            if let Some(session) = state.delete_current() {
                log::debug!("deleted session {}", session.id());
            }
            Task::none()
        },
    }
}

fn opened(index: usize) -> Task<SessionsEvent> {
    Task::done(SessionsEvent::Effect(SessionsEffect::Opened { index }))
}
