use iced::Theme;
use iced::widget::container;

/// Background of the conversation pane next to the sidebar.
pub(crate) fn chat_pane_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}
