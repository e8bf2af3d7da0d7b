use iced::{Size, Task};

use crate::app::{App, AppEvent};
use crate::state::MobilePane;
use crate::widgets::sidebar::SidebarWidthStore;
use crate::widgets::sidebar::policy;

/// Handle window resize events and propagate layout changes.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    let was_mobile = app.state.viewport.is_mobile;
    app.state.set_window_size(size);

    if was_mobile != app.state.viewport.is_mobile {
        log::debug!(
            "viewport class changed: mobile={}",
            app.state.viewport.is_mobile
        );
        app.state.mobile_pane = MobilePane::Sidebar;
    }

    sync_sidebar_layout(app);
    Task::none()
}

/// Bring the sidebar back on a mobile viewport.
pub(crate) fn show_sidebar(app: &mut App) -> Task<AppEvent> {
    app.state.mobile_pane = MobilePane::Sidebar;
    Task::none()
}

/// Derive the sidebar layout from the stored width and viewport and
/// publish the effective width.
pub(crate) fn sync_sidebar_layout(app: &mut App) {
    let layout =
        policy::derive(app.widgets.config.sidebar_width(), app.state.viewport);

    if !app.state.style_vars.publish_sidebar_width(layout.width) {
        return;
    }

    log::debug!("sidebar width published: {}", layout.width);
    app.state
        .transition
        .retarget(layout.width, layout.transitions_enabled);
}
