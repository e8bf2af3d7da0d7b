use chatshell_ui_reveal::{ImageReveal, RevealView};
use iced::widget::{
    Space, button, column, container, mouse_area, row, scrollable, text,
};
use iced::{Border, Element, Length, Size, Theme, alignment, mouse};

use super::event::SidebarIntent;
use super::model::SidebarViewModel;
use crate::widgets::sessions::model::SessionsViewModel;
use crate::widgets::sessions::view::{self as session_list, SessionListProps};

const SIDEBAR_PADDING: f32 = 16.0;
const SECTION_SPACING: f32 = 16.0;
const HEADER_SPACING: f32 = 10.0;
const TITLE_FONT_SIZE: f32 = 20.0;
const SUBTITLE_FONT_SIZE: f32 = 12.0;
const LOGO_BOX_SIZE: f32 = 44.0;
const LOGO_IMAGE_SIZE: f32 = 40.0;
const TAIL_SPACING: f32 = 8.0;
const TAIL_BUTTON_HEIGHT: f32 = 32.0;
const TAIL_FONT_SIZE: f32 = 13.0;
const TAIL_RADIUS: f32 = 8.0;
const DRAG_HANDLE_WIDTH: f32 = 6.0;

const TITLE: &str = "ChatShell";
const SUBTITLE: &str = "Conversations at hand.";

/// Props for the sidebar view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) sessions: SessionsViewModel<'a>,
    pub(crate) logo: Option<&'a ImageReveal>,
}

/// Render the sidebar panel. Width is applied by the parent layout.
pub(crate) fn view(
    props: SidebarViewProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let narrow = props.vm.layout.narrow;

    let list = scrollable(session_list::view(
        SessionListProps {
            vm: props.sessions,
            narrow,
        },
        |index| SidebarIntent::SessionPressed { index },
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    let content = column![header(&props), list, tail(narrow)]
        .spacing(SECTION_SPACING)
        .padding(SIDEBAR_PADDING)
        .width(Length::Fill)
        .height(Length::Fill);

    let panel = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(
                theme.extended_palette().background.weak.color.into(),
            ),
            ..Default::default()
        });

    if props.vm.is_mobile {
        return panel.into();
    }

    row![panel, drag_handle(props.vm.is_dragging)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header<'a>(
    props: &SidebarViewProps<'a>,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let logo: Element<'a, SidebarIntent, Theme, iced::Renderer> =
        match props.logo {
            Some(reveal) => RevealView::new(reveal)
                .box_size(Size::new(LOGO_BOX_SIZE, LOGO_BOX_SIZE))
                .image_size(Size::new(LOGO_IMAGE_SIZE, LOGO_IMAGE_SIZE))
                .view(),
            None => Space::new()
                .width(Length::Fixed(LOGO_BOX_SIZE))
                .height(Length::Fixed(LOGO_BOX_SIZE))
                .into(),
        };

    if props.vm.layout.narrow {
        return container(logo)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into();
    }

    let titles = column![
        text(TITLE).size(TITLE_FONT_SIZE),
        text(SUBTITLE).size(SUBTITLE_FONT_SIZE),
    ]
    .spacing(2);

    row![logo, titles]
        .spacing(HEADER_SPACING)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .into()
}

fn tail(
    narrow: bool,
) -> Element<'static, SidebarIntent, Theme, iced::Renderer> {
    let (new_label, delete_label) = if narrow {
        ("+", "-")
    } else {
        ("New Chat", "Delete")
    };

    let new_button =
        tail_button(new_label, SidebarIntent::NewSessionPressed, narrow);
    let delete_button =
        tail_button(delete_label, SidebarIntent::DeleteSessionPressed, narrow);

    if narrow {
        column![new_button, delete_button]
            .spacing(TAIL_SPACING)
            .width(Length::Fill)
            .into()
    } else {
        row![new_button, delete_button]
            .spacing(TAIL_SPACING)
            .width(Length::Fill)
            .into()
    }
}

fn tail_button(
    label: &'static str,
    on_press: SidebarIntent,
    narrow: bool,
) -> Element<'static, SidebarIntent, Theme, iced::Renderer> {
    let caption = container(text(label).size(TAIL_FONT_SIZE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let width = if narrow {
        Length::Fill
    } else {
        Length::FillPortion(1)
    };

    button(caption)
        .on_press(on_press)
        .padding(0)
        .width(width)
        .height(Length::Fixed(TAIL_BUTTON_HEIGHT))
        .style(|theme: &Theme, status| {
            let palette = theme.extended_palette();
            let background = if status == button::Status::Hovered {
                palette.background.strong.color
            } else {
                palette.background.base.color
            };

            button::Style {
                background: Some(background.into()),
                text_color: palette.background.base.text,
                border: Border::default().rounded(TAIL_RADIUS),
                ..Default::default()
            }
        })
        .into()
}

fn drag_handle(
    is_dragging: bool,
) -> Element<'static, SidebarIntent, Theme, iced::Renderer> {
    let strip = container(Space::new())
        .width(Length::Fixed(DRAG_HANDLE_WIDTH))
        .height(Length::Fill)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let color = if is_dragging {
                palette.primary.base.color
            } else {
                palette.background.strong.color
            };

            container::Style {
                background: Some(color.into()),
                ..Default::default()
            }
        });

    mouse_area(strip)
        .on_press(SidebarIntent::DragHandlePressed)
        .interaction(mouse::Interaction::ResizingHorizontally)
        .into()
}
