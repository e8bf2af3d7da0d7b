mod errors;
mod event;
pub(crate) mod model;
mod reducer;
mod state;
mod storage;

pub(crate) use event::{ConfigEffect, ConfigEvent, ConfigIntent};
use iced::Task;
use model::ShellConfig;
use state::ConfigState;
use storage::{ConfigFile, ConfigLoadStatus};

use crate::widgets::sidebar::{SidebarWidthStore, WidthMutation};

/// Config widget: owns the persisted shell configuration and serves as the
/// sidebar width store.
pub(crate) struct ConfigWidget {
    state: ConfigState,
}

impl ConfigWidget {
    /// Create a widget by loading persisted state from disk.
    pub(crate) fn load() -> Self {
        let config = match ConfigFile::locate().load() {
            Ok((config, status)) => {
                match status {
                    ConfigLoadStatus::Loaded => {},
                    ConfigLoadStatus::Missing => {
                        log::info!("config file missing, using defaults");
                    },
                    ConfigLoadStatus::Invalid(message) => {
                        log::warn!("config file invalid: {message}");
                    },
                }
                config
            },
            Err(err) => {
                log::warn!("config read failed: {err}");
                ShellConfig::default()
            },
        };

        Self {
            state: ConfigState::from_config(config),
        }
    }

    /// Reduce a config intent into state updates and effect tasks.
    pub(crate) fn reduce(&mut self, event: ConfigIntent) -> Task<ConfigEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Return the live configuration.
    pub(crate) fn config(&self) -> &ShellConfig {
        self.state.current()
    }

    /// Return the number of width writes applied so far.
    pub(crate) fn revision(&self) -> u64 {
        self.state.revision()
    }
}

impl SidebarWidthStore for ConfigWidget {
    fn sidebar_width(&self) -> u32 {
        self.state.current().sidebar_width()
    }

    fn update_sidebar_width(&mut self, mutation: WidthMutation) {
        self.state.apply_width(mutation);
    }
}
