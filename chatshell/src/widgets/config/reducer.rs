use iced::Task;

use super::event::{ConfigEffect, ConfigEvent, ConfigIntent};
use super::state::ConfigState;
use super::storage::ConfigFile;

/// Reduce a config intent into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut ConfigState,
    event: ConfigIntent,
) -> Task<ConfigEvent> {
    match event {
        ConfigIntent::Save => request_save_config(state),
        ConfigIntent::SaveCompleted(config) => {
            log::debug!(
                "config saved with sidebar width {}px",
                config.sidebar_width()
            );
            state.mark_saved(config);
            // The width may have moved again while the write was running.
            request_save_config(state)
        },
        ConfigIntent::SaveFailed(message) => {
            log::warn!("config save failed: {message}");
            state.mark_save_failed();
            Task::none()
        },
    }
}

fn request_save_config(state: &mut ConfigState) -> Task<ConfigEvent> {
    if !state.is_dirty() || state.is_save_in_flight() {
        return Task::none();
    }

    let normalized = state.current().normalized();
    state.begin_save();

    Task::perform(
        async move {
            match ConfigFile::locate().save(&normalized) {
                Ok(()) => Ok(normalized),
                Err(err) => Err(format!("{err}")),
            }
        },
        |result| match result {
            Ok(config) => {
                ConfigEvent::Effect(ConfigEffect::SaveCompleted(config))
            },
            Err(message) => {
                ConfigEvent::Effect(ConfigEffect::SaveFailed(message))
            },
        },
    )
}
