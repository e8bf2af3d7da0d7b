use iced::widget::{Space, button, column, container, mouse_area, row, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::state::MobilePane;
use crate::style;
use crate::widgets::sidebar::view::{self as sidebar_view, SidebarViewProps};
use crate::widgets::sidebar::{
    SidebarEvent, SidebarIntent, SidebarWidthStore, policy,
};

const CHAT_PADDING: f32 = 24.0;
const CHAT_SPACING: f32 = 12.0;
const CHAT_TITLE_FONT_SIZE: f32 = 22.0;
const CHAT_HINT_FONT_SIZE: f32 = 13.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let viewport = app.state.viewport;

    let content: Element<'_, AppEvent, Theme, iced::Renderer> =
        if !viewport.is_mobile {
            row![
                container(view_sidebar(app))
                    .width(app.state.sidebar_length())
                    .height(Length::Fill),
                view_chat(app, false),
            ]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
        } else {
            match app.state.mobile_pane {
                MobilePane::Sidebar => view_sidebar(app),
                MobilePane::Chat => view_chat(app, true),
            }
        };

    // The release is also routed through the widget tree: a release that
    // shares a batch with the handle press reaches subscriptions before the
    // drag listener exists.
    mouse_area(content)
        .on_move(|position| {
            sidebar_intent(SidebarIntent::CursorMoved { position })
        })
        .on_release(sidebar_intent(SidebarIntent::DragReleased))
        .into()
}

fn sidebar_intent(intent: SidebarIntent) -> AppEvent {
    AppEvent::Sidebar(SidebarEvent::Intent(intent))
}

fn view_sidebar(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let viewport = app.state.viewport;
    let layout =
        policy::derive(app.widgets.config.sidebar_width(), viewport);

    sidebar_view::view(SidebarViewProps {
        vm: app.widgets.sidebar.vm(layout, viewport.is_mobile),
        sessions: app.widgets.sessions.vm(),
        logo: app.widgets.logo.reveal(),
    })
    .map(sidebar_intent)
}

fn view_chat(
    app: &App,
    with_back_button: bool,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let title = app
        .widgets
        .sessions
        .current()
        .map(|session| session.title())
        .unwrap_or_default();

    let back: Element<'_, AppEvent, Theme, iced::Renderer> = if with_back_button
    {
        button(text("Sessions"))
            .on_press(AppEvent::ShowSidebar)
            .into()
    } else {
        Space::new().into()
    };

    let header = row![back, text(title).size(CHAT_TITLE_FONT_SIZE)]
        .spacing(CHAT_SPACING)
        .align_y(alignment::Vertical::Center);

    let hint = text("Alt/Ctrl + Up/Down switches conversations.")
        .size(CHAT_HINT_FONT_SIZE);

    container(column![header, hint].spacing(CHAT_SPACING))
        .padding(CHAT_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::chat_pane_style)
        .into()
}
