//! Deferred image reveal for [`iced`] views.
//!
//! An [`ImageReveal`] is bound to one image source and starts in
//! [`RevealState::Loading`]. While loading, [`RevealView`] renders a
//! placeholder inside a fixed-size box and keeps the image out of the layout.
//! Once the host application hands over a decoded [`iced::widget::image::Handle`]
//! through [`ImageReveal::on_load`], the state moves to
//! [`RevealState::Loaded`] for good: the placeholder disappears and the image
//! is drawn at its target size inside the same box.
//!
//! The crate does not fetch or decode anything. The owner decides where the
//! bytes come from and only signals completion. A new source means a new
//! [`ImageReveal`].
//!
//! # Quick Example
//!
//! ```no_run
//! use chatshell_ui_reveal::{ImageReveal, RevealView};
//! use iced::widget::image::Handle;
//! use iced::{Element, Size};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     LogoDecoded(Handle),
//! }
//!
//! struct State {
//!     logo: ImageReveal,
//! }
//!
//! fn update(state: &mut State, message: Message) {
//!     match message {
//!         Message::LogoDecoded(handle) => {
//!             state.logo.on_load(handle);
//!         },
//!     }
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     RevealView::new(&state.logo)
//!         .box_size(Size::new(48.0, 48.0))
//!         .view()
//! }
//! ```

mod model;
mod view;

pub use model::{ImageReveal, RevealState};
pub use view::RevealView;
