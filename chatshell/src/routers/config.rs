use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::config::{ConfigEffect, ConfigEvent, ConfigIntent};

/// Route a config event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: ConfigEvent) -> Task<AppEvent> {
    match event {
        ConfigEvent::Intent(event) => {
            app.widgets.config.reduce(event).map(AppEvent::Config)
        },
        ConfigEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_effect(effect: ConfigEffect) -> Task<AppEvent> {
    let intent = match effect {
        ConfigEffect::SaveCompleted(config) => {
            ConfigIntent::SaveCompleted(config)
        },
        ConfigEffect::SaveFailed(message) => ConfigIntent::SaveFailed(message),
    };

    Task::done(AppEvent::Config(ConfigEvent::Intent(intent)))
}
