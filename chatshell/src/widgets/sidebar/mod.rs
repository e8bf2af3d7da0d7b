pub(crate) mod drag;
mod event;
pub(crate) mod hotkey;
pub(crate) mod model;
pub(crate) mod policy;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
pub(crate) use model::{
    EffectiveWidth, SidebarLayout, SidebarViewModel, SidebarWidthStore,
    WidthMutation,
};
pub(crate) use reducer::SidebarCtx;
use state::SidebarState;

/// Sidebar widget: owns the drag-resize gesture and translates handle
/// presses, pointer moves and hotkeys into width mutations and session
/// navigation effects.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct a sidebar with no active gesture.
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
        ctx: &mut SidebarCtx<'_>,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(
        &self,
        layout: SidebarLayout,
        is_mobile: bool,
    ) -> SidebarViewModel {
        SidebarViewModel {
            layout,
            is_dragging: self.state.is_dragging(),
            is_mobile,
        }
    }

    /// Return whether a drag gesture is in progress.
    pub(crate) fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }
}
