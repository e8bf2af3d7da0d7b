use iced::{Length, Size};

use crate::layout::Viewport;
use crate::widgets::sidebar::EffectiveWidth;

/// Fraction of the remaining distance covered per transition tick.
const TRANSITION_EASING: f32 = 0.35;
/// Distance below which the transition snaps onto its target.
const TRANSITION_SNAP_PX: f32 = 0.5;

/// Pane shown on a mobile viewport, where only one fits at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum MobilePane {
    #[default]
    Sidebar,
    Chat,
}

/// Global layout variables consumed by the root view.
#[derive(Debug, Default)]
pub(crate) struct StyleVars {
    sidebar_width: Option<EffectiveWidth>,
    writes: u64,
}

impl StyleVars {
    /// Return the published sidebar width.
    pub(crate) fn sidebar_width(&self) -> Option<EffectiveWidth> {
        self.sidebar_width
    }

    /// Number of writes performed on the variables.
    #[cfg(test)]
    pub(crate) fn writes(&self) -> u64 {
        self.writes
    }

    /// Publish the sidebar width. Returns `false` when the value is
    /// unchanged and nothing was written.
    pub(crate) fn publish_sidebar_width(
        &mut self,
        width: EffectiveWidth,
    ) -> bool {
        if self.sidebar_width == Some(width) {
            return false;
        }

        self.sidebar_width = Some(width);
        self.writes += 1;
        true
    }
}

/// Rendered sidebar width easing towards the published width.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WidthTransition {
    target: EffectiveWidth,
    rendered: Option<f32>,
}

impl Default for WidthTransition {
    fn default() -> Self {
        Self {
            target: EffectiveWidth::FullViewport,
            rendered: None,
        }
    }
}

impl WidthTransition {
    /// Point the transition at `target`. Without `animate` the rendered
    /// width jumps straight to it.
    pub(crate) fn retarget(&mut self, target: EffectiveWidth, animate: bool) {
        self.target = target;
        self.rendered = match (target, self.rendered) {
            (EffectiveWidth::FullViewport, _) => None,
            (EffectiveWidth::Pixels(_), Some(current)) if animate => {
                Some(current)
            },
            (EffectiveWidth::Pixels(px), _) => Some(px as f32),
        };
    }

    /// Advance one frame towards the target.
    pub(crate) fn step(&mut self) {
        let (EffectiveWidth::Pixels(px), Some(current)) =
            (self.target, self.rendered)
        else {
            return;
        };

        let target = px as f32;
        let next = current + (target - current) * TRANSITION_EASING;
        self.rendered = if (target - next).abs() < TRANSITION_SNAP_PX {
            Some(target)
        } else {
            Some(next)
        };
    }

    pub(crate) fn is_animating(&self) -> bool {
        match (self.target, self.rendered) {
            (EffectiveWidth::Pixels(px), Some(current)) => {
                current != px as f32
            },
            _ => false,
        }
    }

    /// Length the sidebar occupies in the current frame.
    pub(crate) fn rendered_length(&self) -> Length {
        match (self.target, self.rendered) {
            (EffectiveWidth::Pixels(_), Some(current)) => {
                Length::Fixed(current)
            },
            (target, _) => target.to_length(),
        }
    }
}

/// Viewport class and global layout state.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) viewport: Viewport,
    pub(crate) mobile_pane: MobilePane,
    pub(crate) style_vars: StyleVars,
    pub(crate) transition: WidthTransition,
}

impl State {
    /// Create state for the initial window size.
    pub(crate) fn new(window_size: Size) -> Self {
        Self {
            viewport: Viewport::classify(window_size),
            ..Self::default()
        }
    }

    /// Reclassify the viewport after a window resize.
    pub(crate) fn set_window_size(&mut self, size: Size) {
        self.viewport = Viewport::classify(size);
    }

    /// Return the sidebar length for the current frame.
    pub(crate) fn sidebar_length(&self) -> Length {
        match self.style_vars.sidebar_width() {
            Some(EffectiveWidth::Pixels(_)) => {
                self.transition.rendered_length()
            },
            Some(width) => width.to_length(),
            None => Length::Shrink,
        }
    }

    /// Return whether the sidebar is part of the rendered tree.
    pub(crate) fn sidebar_mounted(&self) -> bool {
        !self.viewport.is_mobile || self.mobile_pane == MobilePane::Sidebar
    }
}
