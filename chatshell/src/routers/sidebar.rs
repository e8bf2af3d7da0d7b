use std::time::Instant;

use iced::{Task, keyboard};

use super::window::sync_sidebar_layout;
use crate::app::{App, AppEvent};
use crate::widgets::config::{ConfigEvent, ConfigIntent};
use crate::widgets::sessions::{SessionsEvent, SessionsIntent};
use crate::widgets::sidebar::{
    SidebarCtx, SidebarEffect, SidebarEvent, SidebarIntent,
};

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(event) => route_intent(app, event),
        SidebarEvent::Effect(effect) => route_effect(effect),
    }
}

/// Route a key press to the sidebar while it is mounted.
pub(crate) fn route_key(
    app: &mut App,
    event: keyboard::Event,
) -> Task<AppEvent> {
    if !app.state.sidebar_mounted() {
        return Task::none();
    }

    route_intent(app, SidebarIntent::KeyPressed(event))
}

fn route_intent(app: &mut App, event: SidebarIntent) -> Task<AppEvent> {
    let revision = app.widgets.config.revision();

    let mut ctx = SidebarCtx {
        now: Instant::now(),
        store: &mut app.widgets.config,
    };
    let task = app.widgets.sidebar.reduce(event, &mut ctx);

    if app.widgets.config.revision() != revision {
        sync_sidebar_layout(app);
    }

    task.map(AppEvent::Sidebar)
}

fn route_effect(effect: SidebarEffect) -> Task<AppEvent> {
    use SidebarEffect as E;

    match effect {
        E::GestureEnded => config_intent(ConfigIntent::Save),
        E::AdvanceSession { delta } => {
            sessions_intent(SessionsIntent::Advance { delta })
        },
        E::SelectSession { index } => {
            sessions_intent(SessionsIntent::Select { index })
        },
        E::CreateSession => sessions_intent(SessionsIntent::Create),
        E::DeleteCurrentSession => {
            sessions_intent(SessionsIntent::DeleteCurrent)
        },
    }
}

fn sessions_intent(intent: SessionsIntent) -> Task<AppEvent> {
    Task::done(AppEvent::Sessions(SessionsEvent::Intent(intent)))
}

fn config_intent(intent: ConfigIntent) -> Task<AppEvent> {
    Task::done(AppEvent::Config(ConfigEvent::Intent(intent)))
}
