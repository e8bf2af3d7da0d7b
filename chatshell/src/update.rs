use iced::{Task, window};

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Sidebar widget
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        // Sessions widget
        AppEvent::Sessions(event) => routers::sessions::route(app, event),
        // Config widget
        AppEvent::Config(event) => routers::config::route(app, event),
        // Logo widget
        AppEvent::Logo(event) => {
            app.widgets.logo.reduce(event);
            Task::none()
        },
        // Direct operations
        AppEvent::ShowSidebar => routers::window::show_sidebar(app),
        AppEvent::SidebarTransitionTick => {
            app.state.transition.step();
            Task::none()
        },
        AppEvent::Keyboard(event) => routers::sidebar::route_key(app, event),
        AppEvent::Window(window::Event::Resized(size)) => {
            routers::window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
