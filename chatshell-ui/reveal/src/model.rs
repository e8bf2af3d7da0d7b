use iced::widget::image::Handle;

/// Load state of a deferred image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// The image has not signalled completion; the placeholder is shown.
    Loading,
    /// The image finished loading; terminal state.
    Loaded,
}

#[derive(Debug, Clone)]
enum Phase {
    Loading,
    Loaded(Handle),
}

/// Deferred image bound to a single source.
///
/// The state only ever moves from loading to loaded. There is no failure
/// transition: an image that never loads keeps its placeholder.
#[derive(Debug, Clone)]
pub struct ImageReveal {
    source: String,
    phase: Phase,
}

impl ImageReveal {
    /// Create a reveal for `source` in the loading state.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            phase: Phase::Loading,
        }
    }

    /// Return the source this reveal is bound to.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Return the current load state.
    pub fn state(&self) -> RevealState {
        match self.phase {
            Phase::Loading => RevealState::Loading,
            Phase::Loaded(_) => RevealState::Loaded,
        }
    }

    /// Return whether the load-completion signal was received.
    pub fn is_loaded(&self) -> bool {
        matches!(self.phase, Phase::Loaded(_))
    }

    /// Return whether the placeholder occupies the image box.
    pub fn is_placeholder_visible(&self) -> bool {
        !self.is_loaded()
    }

    /// Return whether the image is part of the rendered output.
    pub fn is_image_visible(&self) -> bool {
        self.is_loaded()
    }

    /// Return the loaded image handle.
    pub fn handle(&self) -> Option<&Handle> {
        match &self.phase {
            Phase::Loading => None,
            Phase::Loaded(handle) => Some(handle),
        }
    }

    /// Apply the load-completion signal.
    ///
    /// Returns `true` when this call moved the reveal to
    /// [`RevealState::Loaded`]. Later signals are ignored and keep the first
    /// handle.
    pub fn on_load(&mut self, handle: Handle) -> bool {
        if self.is_loaded() {
            return false;
        }

        self.phase = Phase::Loaded(handle);
        true
    }

    /// Apply a load-completion signal that was produced for `source`.
    ///
    /// Signals for another source are stale and leave the state untouched.
    pub fn on_load_for(&mut self, source: &str, handle: Handle) -> bool {
        if source != self.source {
            return false;
        }

        self.on_load(handle)
    }
}
