use std::fmt;

use iced::Length;

/// Width restored when a narrow sidebar is toggled open.
pub(crate) const DEFAULT_SIDEBAR_WIDTH: u32 = 300;
/// Upper bound for a dragged or stored width.
pub(crate) const MAX_SIDEBAR_WIDTH: u32 = 500;
/// Below this width the sidebar collapses into narrow mode.
pub(crate) const MIN_SIDEBAR_WIDTH: u32 = 230;
/// Fixed width of the narrow sidebar.
pub(crate) const NARROW_SIDEBAR_WIDTH: u32 = 100;

/// Mutation handed to the width store and applied against its latest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WidthMutation {
    /// Replace the stored width.
    Set(u32),
    /// Collapse a wide sidebar or restore a narrow one.
    ToggleNarrow,
}

impl WidthMutation {
    /// Return the width that results from applying this mutation to
    /// `current`.
    pub(crate) fn apply(self, current: u32) -> u32 {
        match self {
            WidthMutation::Set(width) => width,
            WidthMutation::ToggleNarrow => {
                if current < MIN_SIDEBAR_WIDTH {
                    DEFAULT_SIDEBAR_WIDTH
                } else {
                    NARROW_SIDEBAR_WIDTH
                }
            },
        }
    }
}

/// Shared store that owns the persisted sidebar width.
///
/// Every write goes through [`SidebarWidthStore::update_sidebar_width`] so
/// the mutation always sees the latest stored value.
pub(crate) trait SidebarWidthStore {
    /// Return the latest stored width.
    fn sidebar_width(&self) -> u32;

    /// Apply `mutation` to the stored width as one atomic update.
    fn update_sidebar_width(&mut self, mutation: WidthMutation);
}

/// Rendered sidebar width after viewport and narrow-mode policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EffectiveWidth {
    /// The sidebar covers the whole viewport width.
    FullViewport,
    /// The sidebar has a fixed pixel width.
    Pixels(u32),
}

impl EffectiveWidth {
    /// Convert into an iced length.
    pub(crate) fn to_length(self) -> Length {
        match self {
            EffectiveWidth::FullViewport => Length::Fill,
            EffectiveWidth::Pixels(px) => Length::Fixed(px as f32),
        }
    }
}

impl fmt::Display for EffectiveWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectiveWidth::FullViewport => write!(f, "100vw"),
            EffectiveWidth::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

/// Derived sidebar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SidebarLayout {
    pub(crate) width: EffectiveWidth,
    pub(crate) narrow: bool,
    pub(crate) transitions_enabled: bool,
}

/// Read-only sidebar data for the presentation layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel {
    pub(crate) layout: SidebarLayout,
    pub(crate) is_dragging: bool,
    pub(crate) is_mobile: bool,
}
