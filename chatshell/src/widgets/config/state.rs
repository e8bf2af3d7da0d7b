use super::model::ShellConfig;
use crate::widgets::sidebar::WidthMutation;

/// Persisted baseline and live configuration.
#[derive(Debug, Default)]
pub(crate) struct ConfigState {
    baseline: ShellConfig,
    current: ShellConfig,
    revision: u64,
    save_in_flight: bool,
}

impl ConfigState {
    /// Create state from a configuration that matches the file on disk.
    pub(crate) fn from_config(config: ShellConfig) -> Self {
        Self {
            baseline: config.clone(),
            current: config,
            revision: 0,
            save_in_flight: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn baseline(&self) -> &ShellConfig {
        &self.baseline
    }

    pub(crate) fn current(&self) -> &ShellConfig {
        &self.current
    }

    /// Return the number of width writes applied so far.
    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    /// Return whether the live configuration differs from the file on disk.
    pub(crate) fn is_dirty(&self) -> bool {
        self.current != self.baseline
    }

    pub(crate) fn is_save_in_flight(&self) -> bool {
        self.save_in_flight
    }

    /// Apply `mutation` against the latest stored width.
    pub(crate) fn apply_width(&mut self, mutation: WidthMutation) {
        let width = mutation.apply(self.current.sidebar_width());
        self.current.set_sidebar_width(width);
        self.revision += 1;
    }

    pub(crate) fn begin_save(&mut self) {
        self.save_in_flight = true;
    }

    /// Record `saved` as the new on-disk baseline.
    pub(crate) fn mark_saved(&mut self, saved: ShellConfig) {
        self.baseline = saved;
        self.save_in_flight = false;
    }

    pub(crate) fn mark_save_failed(&mut self) {
        self.save_in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::sidebar::model::{
        DEFAULT_SIDEBAR_WIDTH, NARROW_SIDEBAR_WIDTH,
    };

    #[test]
    fn given_toggle_when_applied_then_latest_width_is_used() {
        let mut state = ConfigState::default();
        state.apply_width(WidthMutation::Set(DEFAULT_SIDEBAR_WIDTH + 40));

        state.apply_width(WidthMutation::ToggleNarrow);

        assert_eq!(state.current().sidebar_width(), NARROW_SIDEBAR_WIDTH);
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn given_width_write_when_applied_then_state_becomes_dirty() {
        let mut state = ConfigState::default();
        assert!(!state.is_dirty());

        state.apply_width(WidthMutation::Set(400));

        assert!(state.is_dirty());
    }

    #[test]
    fn given_write_back_to_baseline_when_applied_then_state_is_clean() {
        let mut state = ConfigState::default();

        state.apply_width(WidthMutation::Set(400));
        state.apply_width(WidthMutation::Set(DEFAULT_SIDEBAR_WIDTH));

        assert!(!state.is_dirty());
    }
}
