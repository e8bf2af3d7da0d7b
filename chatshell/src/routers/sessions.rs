use iced::Task;

use crate::app::{App, AppEvent};
use crate::state::MobilePane;
use crate::widgets::sessions::{SessionsEffect, SessionsEvent};

/// Route a sessions event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SessionsEvent) -> Task<AppEvent> {
    match event {
        SessionsEvent::Intent(event) => {
            app.widgets.sessions.reduce(event).map(AppEvent::Sessions)
        },
        SessionsEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_effect(app: &mut App, effect: SessionsEffect) -> Task<AppEvent> {
    match effect {
        SessionsEffect::Opened { index } => {
            // A phone-sized window shows the opened chat instead of the list.
            if app.state.viewport.is_mobile {
                log::debug!("opening session {index} in chat pane");
                app.state.mobile_pane = MobilePane::Chat;
            }
            Task::none()
        },
    }
}
