#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Size, Subscription, Task, Theme, keyboard, window};

use crate::routers;
use crate::state::State;
use crate::widgets::config::{ConfigEvent, ConfigWidget};
use crate::widgets::logo::{LogoEvent, LogoWidget};
use crate::widgets::sessions::{SessionsEvent, SessionsWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};

pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Sessions widget
    Sessions(SessionsEvent),
    // Config widget
    Config(ConfigEvent),
    // Logo widget
    Logo(LogoEvent),
    // Direct operations
    ShowSidebar,
    SidebarTransitionTick,
    Keyboard(keyboard::Event),
    Window(window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) sidebar: SidebarWidget,
    pub(crate) sessions: SessionsWidget,
    pub(crate) config: ConfigWidget,
    pub(crate) logo: LogoWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = ConfigWidget::load();
        let logo = LogoWidget::new(
            config.config().logo_image().map(|path| path.to_path_buf()),
        );
        let load_logo = logo.request_load().map(AppEvent::Logo);

        let window_size = Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        };

        let widgets = Widgets {
            sidebar: SidebarWidget::new(),
            sessions: SessionsWidget::new(),
            config,
            logo,
        };

        let mut app = App {
            state: State::new(window_size),
            widgets,
        };
        routers::window::sync_sidebar_layout(&mut app);

        (app, load_logo)
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        match self.widgets.sessions.current() {
            Some(session) => format!("ChatShell - {}", session.title()),
            None => String::from("ChatShell"),
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
