use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Column, button, container, text};
use iced::{Border, Element, Length, Theme, alignment};

use super::model::SessionsViewModel;

const ROW_HEIGHT: f32 = 44.0;
const ROW_SPACING: f32 = 6.0;
const ROW_PADDING_X: f32 = 12.0;
const ROW_FONT_SIZE: f32 = 14.0;
const ROW_RADIUS: f32 = 10.0;

/// Props for the session list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionListProps<'a> {
    pub(crate) vm: SessionsViewModel<'a>,
    /// Render ordinals instead of titles.
    pub(crate) narrow: bool,
}

/// Render the session list. Rows emit `on_select(index)` when pressed.
pub(crate) fn view<'a, Message>(
    props: SessionListProps<'a>,
    on_select: fn(usize) -> Message,
) -> Element<'a, Message, Theme, iced::Renderer>
where
    Message: Clone + 'a,
{
    let rows = props.vm.sessions.iter().enumerate().map(|(index, session)| {
        let label = if props.narrow {
            (index + 1).to_string()
        } else {
            session.title().to_owned()
        };
        let is_current = index == props.vm.current;
        let align_x = if props.narrow {
            alignment::Horizontal::Center
        } else {
            alignment::Horizontal::Left
        };

        let content = container(text(label).size(ROW_FONT_SIZE))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(alignment::Vertical::Center)
            .padding([0.0, ROW_PADDING_X]);

        button(content)
            .on_press(on_select(index))
            .padding(0)
            .width(Length::Fill)
            .height(Length::Fixed(ROW_HEIGHT))
            .style(move |theme: &Theme, status| {
                row_style(theme, status, is_current)
            })
            .into()
    });

    Column::with_children(rows)
        .spacing(ROW_SPACING)
        .width(Length::Fill)
        .into()
}

fn row_style(
    theme: &Theme,
    status: ButtonStatus,
    is_current: bool,
) -> button::Style {
    let palette = theme.extended_palette();
    let background = if is_current {
        palette.primary.weak.color
    } else if status == ButtonStatus::Hovered {
        palette.background.strong.color
    } else {
        palette.background.weak.color
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.background.base.text,
        border: Border::default().rounded(ROW_RADIUS),
        ..Default::default()
    }
}
