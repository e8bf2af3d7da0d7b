mod errors;
pub(crate) mod services;

use std::path::PathBuf;

use chatshell_ui_reveal::ImageReveal;
use iced::Task;
use iced::widget::image::Handle;

/// Events produced by the asynchronous logo decode.
#[derive(Debug, Clone)]
pub(crate) enum LogoEvent {
    /// Decoding finished for `source`.
    Loaded { source: String, handle: Handle },
    /// Reading or decoding `source` failed.
    LoadFailed { source: String, message: String },
}

/// Sidebar header logo backed by a deferred image reveal.
pub(crate) struct LogoWidget {
    path: Option<PathBuf>,
    reveal: Option<ImageReveal>,
}

impl LogoWidget {
    /// Create the widget for an optional configured image path.
    pub(crate) fn new(path: Option<PathBuf>) -> Self {
        let reveal = path
            .as_ref()
            .map(|path| ImageReveal::new(path.display().to_string()));
        Self { path, reveal }
    }

    /// Start decoding the configured image off the UI thread.
    pub(crate) fn request_load(&self) -> Task<LogoEvent> {
        let (Some(path), Some(reveal)) = (self.path.clone(), &self.reveal)
        else {
            return Task::none();
        };
        let source = reveal.source().to_owned();

        Task::perform(
            async move { services::decode_logo(&path) },
            move |result| match result {
                Ok(handle) => LogoEvent::Loaded { source, handle },
                Err(err) => LogoEvent::LoadFailed {
                    source,
                    message: format!("{err}"),
                },
            },
        )
    }

    /// Apply a decode outcome.
    pub(crate) fn reduce(&mut self, event: LogoEvent) {
        match event {
            LogoEvent::Loaded { source, handle } => {
                let revealed = self
                    .reveal
                    .as_mut()
                    .is_some_and(|reveal| reveal.on_load_for(&source, handle));
                if !revealed {
                    log::debug!("ignoring stale logo load for {source}");
                }
            },
            LogoEvent::LoadFailed { source, message } => {
                log::warn!("logo load failed for {source}: {message}");
            },
        }
    }

    /// Return the reveal state for rendering.
    pub(crate) fn reveal(&self) -> Option<&ImageReveal> {
        self.reveal.as_ref()
    }
}
