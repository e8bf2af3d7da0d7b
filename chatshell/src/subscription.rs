use std::time::Duration;

use iced::{Event, Subscription, event, keyboard, mouse, window};

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Frame interval of the sidebar width transition.
const TRANSITION_TICK: Duration = Duration::from_millis(16);

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    let mut subs = vec![win_subs];

    // Session hotkeys only while the sidebar is on screen.
    if app.state.sidebar_mounted() {
        subs.push(keyboard::listen().map(AppEvent::Keyboard));
    }

    // Window-wide pointer tracking for the lifetime of a drag gesture,
    // including events captured by other widgets. Duplicate releases are
    // ignored once the gesture has ended.
    if app.widgets.sidebar.is_dragging() {
        subs.push(event::listen_with(drag_pointer_event));
    }

    if app.state.transition.is_animating() {
        subs.push(
            iced::time::every(TRANSITION_TICK)
                .map(|_| AppEvent::SidebarTransitionTick),
        );
    }

    Subscription::batch(subs)
}

fn drag_pointer_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    let intent = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            SidebarIntent::DragMoved { position }
        },
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            SidebarIntent::DragReleased
        },
        _ => return None,
    };

    Some(AppEvent::Sidebar(SidebarEvent::Intent(intent)))
}
