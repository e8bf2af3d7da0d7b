use iced::widget::{Image, Space, container};
use iced::{Border, ContentFit, Element, Length, Size, Theme, alignment};

use crate::model::ImageReveal;

const DEFAULT_BOX_SIZE: f32 = 16.0;
const PLACEHOLDER_RADIUS: f32 = 2.0;

type PlaceholderRenderer<'a, Message> = dyn Fn() -> Element<'a, Message> + 'a;

/// Renders an [`ImageReveal`] inside a fixed-size box.
///
/// The box keeps the same size in both states so surrounding layout never
/// shifts when the image arrives.
pub struct RevealView<'a, Message: 'a> {
    reveal: &'a ImageReveal,
    box_size: Size,
    image_size: Option<Size>,
    placeholder: Option<Box<PlaceholderRenderer<'a, Message>>>,
}

impl<'a, Message: 'a> RevealView<'a, Message> {
    /// Create a view for `reveal` with a 16x16 box.
    pub fn new(reveal: &'a ImageReveal) -> Self {
        Self {
            reveal,
            box_size: Size::new(DEFAULT_BOX_SIZE, DEFAULT_BOX_SIZE),
            image_size: None,
            placeholder: None,
        }
    }

    /// Set the size of the box reserved for the image.
    pub fn box_size(mut self, size: Size) -> Self {
        self.box_size = size;
        self
    }

    /// Set the display size of the revealed image. Defaults to the box size
    /// and never exceeds it.
    pub fn image_size(mut self, size: Size) -> Self {
        self.image_size = Some(size);
        self
    }

    /// Provide custom placeholder content shown while loading.
    pub fn placeholder(
        mut self,
        placeholder: impl Fn() -> Element<'a, Message> + 'a,
    ) -> Self {
        self.placeholder = Some(Box::new(placeholder));
        self
    }

    /// Return the effective image display size.
    pub fn target_size(&self) -> Size {
        let requested = self.image_size.unwrap_or(self.box_size);
        Size::new(
            requested.width.min(self.box_size.width),
            requested.height.min(self.box_size.height),
        )
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, Message> {
        let target = self.target_size();

        let content: Element<'a, Message> = match self.reveal.handle() {
            Some(handle) => Image::new(handle.clone())
                .width(Length::Fixed(target.width))
                .height(Length::Fixed(target.height))
                .content_fit(ContentFit::Contain)
                .into(),
            None => match &self.placeholder {
                Some(render) => render(),
                None => default_placeholder(),
            },
        };

        container(content)
            .width(Length::Fixed(self.box_size.width))
            .height(Length::Fixed(self.box_size.height))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

fn default_placeholder<'a, Message: 'a>() -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(
                theme.extended_palette().background.weak.color.into(),
            ),
            border: Border {
                radius: iced::border::Radius::new(PLACEHOLDER_RADIUS),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}
